//! Body strategies.
//!
//! Longest-wins over three structural candidates: the best `<article>`,
//! the best paragraph container, and a flat join of long paragraphs. The
//! meta description stands in only when none of those produces text.

use crate::dom::{self, Selection};
use crate::options::Options;

use super::cascade::{self, Candidate, Page, Strategy, Tier};

/// Body strategies in priority order.
pub const BODY_STRATEGIES: [Strategy<Vec<String>>; 4] = [
    Strategy { name: "article_element", tier: Tier::Primary, run: best_article },
    Strategy { name: "paragraph_container", tier: Tier::Primary, run: best_paragraph_container },
    Strategy { name: "long_paragraphs", tier: Tier::Primary, run: long_paragraphs },
    Strategy { name: "meta_description", tier: Tier::Fallback, run: meta_description },
];

/// Pick the body for a page.
#[must_use]
pub fn extract_body(page: &Page<'_>, options: &Options) -> Option<Candidate> {
    cascade::longest_candidate(page, options, &BODY_STRATEGIES)
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Longest of `texts`, kept only if it has at least `min_chars` characters.
fn longest_block(texts: impl Iterator<Item = String>, min_chars: usize) -> Vec<String> {
    texts
        .fold(None::<String>, |best, text| match best {
            Some(b) if char_len(&b) >= char_len(&text) => Some(b),
            _ => Some(text),
        })
        .filter(|text| char_len(text) >= min_chars)
        .into_iter()
        .collect()
}

/// Each `<article>` scored on its own; the longest is kept.
fn best_article(page: &Page<'_>, options: &Options) -> Vec<String> {
    let texts = dom::texts_of(&page.doc.select("html"), "article");
    longest_block(texts.into_iter(), options.min_block_chars)
}

/// For each `<div>`, the join of the paragraphs inside it; the longest
/// container is kept.
fn best_paragraph_container(page: &Page<'_>, options: &Options) -> Vec<String> {
    let containers = page.doc.select("div");
    let joined = containers.nodes().iter().filter_map(|node| {
        let paragraphs: Vec<String> = dom::texts_of(&Selection::from(*node), "p")
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        (!paragraphs.is_empty()).then(|| paragraphs.join(" "))
    });
    longest_block(joined, options.min_block_chars)
}

/// Every paragraph longer than `min_paragraph_chars`, joined in document order.
fn long_paragraphs(page: &Page<'_>, options: &Options) -> Vec<String> {
    let joined = dom::texts_of(&page.doc.select("html"), "p")
        .into_iter()
        .filter(|p| char_len(p) > options.min_paragraph_chars)
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        Vec::new()
    } else {
        vec![joined]
    }
}

fn meta_description(page: &Page<'_>, _: &Options) -> Vec<String> {
    dom::meta_content(&page.doc, "name", "description")
        .or_else(|| dom::meta_content(&page.doc, "property", "og:description"))
        .into_iter()
        .collect()
}
