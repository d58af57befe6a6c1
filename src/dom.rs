//! DOM helpers over `dom_query`.
//!
//! Small, named operations the stripper and the extraction strategies
//! share, so neither deals with raw node iteration directly.

pub use dom_query::{Document, Selection};

/// Tags whose text never counts as visible.
const INVISIBLE_TEXT_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Parse an HTML string into a document. Never fails: malformed markup is
/// repaired by the HTML5 parser.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Visible text of the first node in the selection.
///
/// Every descendant text node is trimmed, empty ones are dropped, and the
/// rest are joined with single spaces. Text inside script-like elements
/// is skipped.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    let Some(root) = sel.nodes().first() else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    for node in root.descendants() {
        if !node.is_text() {
            continue;
        }
        let hidden = node
            .parent()
            .and_then(|parent| parent.node_name())
            .is_some_and(|tag| INVISIBLE_TEXT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)));
        if hidden {
            continue;
        }
        let text = node.text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }
    parts.join(" ")
}

/// Visible text of every element matching `selector`, in document order.
#[must_use]
pub fn texts_of(sel: &Selection, selector: &str) -> Vec<String> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| visible_text(&Selection::from(*node)))
        .collect()
}

/// Trimmed `content` of the first `<meta>` whose `attr` equals `value`.
///
/// Returns `None` when no such tag exists or its content is blank.
#[must_use]
pub fn meta_content(doc: &Document, attr: &str, value: &str) -> Option<String> {
    doc.select("meta").nodes().iter().find_map(|node| {
        let meta = Selection::from(*node);
        let key = get_attribute(&meta, attr)?;
        if !key.trim().eq_ignore_ascii_case(value) {
            return None;
        }
        let content = get_attribute(&meta, "content")?;
        let content = content.trim();
        (!content.is_empty()).then(|| content.to_string())
    })
}
