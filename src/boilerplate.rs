//! Boilerplate stripping.
//!
//! Removes non-content subtrees before the plain text of a page is taken:
//! structural tags (scripts, navigation, forms, ...) and any element whose
//! class or id contains one of the configured advertisement patterns.
//! Removing an ancestor removes its descendants; nothing else about
//! overlapping matches is guaranteed.

use dom_query::Selection;
use tracing::trace;

use crate::dom::{self, Document};
use crate::normalize::normalize;
use crate::options::{is_tag_name, Options};

/// Strip boilerplate from `html` and return the remaining visible text,
/// joined with single spaces.
#[must_use]
pub fn strip(html: &str, options: &Options) -> String {
    let doc = dom::parse(html);
    remove_boilerplate(&doc, options);
    dom::visible_text(&doc.select("html"))
}

/// [`strip`] followed by [`normalize`]; the `clean_text` of a cleaned document.
#[must_use]
pub fn clean_text(html: &str, options: &Options) -> String {
    normalize(&strip(html, options))
}

/// Remove boilerplate subtrees from `doc` in place.
///
/// Entries of `boilerplate_tags` that are not plain tag names are ignored
/// here; [`Options::validate`] reports them.
pub fn remove_boilerplate(doc: &Document, options: &Options) {
    let tags: Vec<&str> = options
        .boilerplate_tags
        .iter()
        .map(String::as_str)
        .filter(|tag| is_tag_name(tag))
        .collect();
    if !tags.is_empty() {
        let selector = tags.join(", ");
        let structural = doc.select(&selector);
        trace!(count = structural.length(), "removing structural boilerplate");
        structural.remove();
    }

    let patterns: Vec<String> = options
        .ad_patterns
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    if patterns.is_empty() {
        return;
    }

    // Collect first, then detach, so removal does not disturb the walk.
    let flagged: Vec<_> = doc
        .select("[class], [id]")
        .nodes()
        .iter()
        .copied()
        .filter(|node| {
            let sel = Selection::from(*node);
            !is_document_root(&sel) && is_advertisement(&sel, &patterns)
        })
        .collect();
    trace!(count = flagged.len(), "removing advertisement elements");
    for node in flagged {
        Selection::from(node).remove();
    }
}

/// `html`, `head` and `body` are never removed, whatever their classes say.
fn is_document_root(sel: &Selection) -> bool {
    dom::tag_name(sel).is_some_and(|tag| matches!(tag.as_str(), "html" | "head" | "body"))
}

/// True if the element's class or id contains any pattern, ignoring case.
fn is_advertisement(sel: &Selection, patterns: &[String]) -> bool {
    ["class", "id"].iter().any(|attr| {
        dom::get_attribute(sel, attr).is_some_and(|value| {
            let value = value.to_lowercase();
            patterns.iter().any(|p| value.contains(p.as_str()))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_structural_tags() {
        let html = r#"<html><head><style>p{}</style><script>track()</script></head><body>
            <header>Site header</header><nav>Home About</nav>
            <p>Real content</p>
            <aside>Related</aside><form>Search</form><iframe>frame</iframe>
            <footer>Copyright</footer></body></html>"#;
        assert_eq!(strip(html, &Options::default()), "Real content");
    }

    #[test]
    fn removes_ad_classes_and_ids_case_insensitively() {
        let html = r#"<body>
            <div class="Top-AD-slot">Buy now</div>
            <div id="promoBox">Discount</div>
            <section class="sponsored-links">Partner</section>
            <p>Story text</p></body>"#;
        assert_eq!(strip(html, &Options::default()), "Story text");
    }

    #[test]
    fn ancestor_match_removes_descendants() {
        let html = r#"<div class="sponsor"><p>Inner <b>bold</b></p><div class="promo">nested</div></div><p>kept</p>"#;
        assert_eq!(strip(html, &Options::default()), "kept");
    }

    #[test]
    fn body_class_never_strips_the_page() {
        let html = r#"<html class="js-loaded"><body class="headless-layout"><p>Visible</p></body></html>"#;
        assert_eq!(strip(html, &Options::default()), "Visible");
    }

    #[test]
    fn custom_patterns_replace_defaults() {
        let options = Options {
            ad_patterns: vec!["banner".to_string()],
            ..Options::default()
        };
        let html = r#"<div class="banner">gone</div><div class="advert">stays</div>"#;
        assert_eq!(strip(html, &options), "stays");
    }

    #[test]
    fn clean_text_normalizes() {
        let html = "<p>One\u{a0}\u{a0}two</p>\n\n<p>three</p>";
        assert_eq!(clean_text(html, &Options::default()), "One two three");
    }

    #[test]
    fn malformed_tag_entries_are_skipped() {
        let options = Options {
            boilerplate_tags: vec!["script".to_string(), String::new(), "nav >".to_string()],
            ..Options::default()
        };
        let html = "<script>track()</script><nav>Menu</nav><p>Story</p>";
        assert_eq!(strip(html, &options), "Menu Story");
    }

    #[test]
    fn empty_html_yields_empty_text() {
        assert_eq!(strip("", &Options::default()), "");
    }
}
