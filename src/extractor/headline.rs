//! Headline strategies.
//!
//! Longest-wins over every `h1`, every `h2`, the Open Graph title and the
//! `<title>` element. The meta description is consulted only when none of
//! those yields text.

use crate::dom::{self, Selection};
use crate::options::Options;

use super::cascade::{self, Candidate, Page, Strategy, Tier};

/// Headline strategies in priority order.
pub const HEADLINE_STRATEGIES: [Strategy<Vec<String>>; 5] = [
    Strategy { name: "h1", tier: Tier::Primary, run: h1_headings },
    Strategy { name: "h2", tier: Tier::Primary, run: h2_headings },
    Strategy { name: "og_title", tier: Tier::Primary, run: open_graph_title },
    Strategy { name: "title_element", tier: Tier::Primary, run: title_element },
    Strategy { name: "meta_description", tier: Tier::Fallback, run: meta_description },
];

/// Pick the headline for a page.
#[must_use]
pub fn extract_headline(page: &Page<'_>, options: &Options) -> Option<Candidate> {
    cascade::longest_candidate(page, options, &HEADLINE_STRATEGIES)
}

fn h1_headings(page: &Page<'_>, _: &Options) -> Vec<String> {
    dom::texts_of(&page.doc.select("html"), "h1")
}

fn h2_headings(page: &Page<'_>, _: &Options) -> Vec<String> {
    dom::texts_of(&page.doc.select("html"), "h2")
}

fn open_graph_title(page: &Page<'_>, _: &Options) -> Vec<String> {
    dom::meta_content(&page.doc, "property", "og:title")
        .into_iter()
        .collect()
}

fn title_element(page: &Page<'_>, _: &Options) -> Vec<String> {
    page.doc
        .select("title")
        .nodes()
        .first()
        .map(|node| dom::visible_text(&Selection::from(*node)))
        .into_iter()
        .collect()
}

fn meta_description(page: &Page<'_>, _: &Options) -> Vec<String> {
    dom::meta_content(&page.doc, "name", "description")
        .into_iter()
        .collect()
}
