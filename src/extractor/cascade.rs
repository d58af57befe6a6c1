//! Strategy cascades.
//!
//! A field is extracted by an ordered list of [`Strategy`] functions with a
//! uniform output shape. Two selection rules run over such a list:
//!
//! - [`longest_candidate`]: every primary strategy contributes candidates and
//!   the longest non-empty one wins (headline, body). Fallback strategies
//!   only run when no primary strategy produced anything.
//! - [`first_hit`]: strategies run in order and the first one that yields a
//!   value wins; later strategies never run (publication date).

use dom_query::Document;
use tracing::trace;

use crate::dom;
use crate::normalize::normalize;
use crate::options::Options;

/// A parsed page handed to every strategy.
pub struct Page<'a> {
    /// Parsed DOM.
    pub doc: Document,
    /// Raw HTML, for strategies that scan text rather than structure.
    pub html: &'a str,
}

impl<'a> Page<'a> {
    /// Parse `html` once for all strategies.
    #[must_use]
    pub fn parse(html: &'a str) -> Self {
        Self {
            doc: dom::parse(html),
            html,
        }
    }
}

/// When a strategy is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Always consulted.
    Primary,
    /// Consulted only when no primary strategy yielded a candidate.
    Fallback,
}

/// One named extraction rule.
pub struct Strategy<R> {
    /// Stable name, reported with the winning candidate.
    pub name: &'static str,
    /// When the strategy runs.
    pub tier: Tier,
    /// The rule itself.
    pub run: fn(&Page<'_>, &Options) -> R,
}

/// A proposed field value and the strategy that proposed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Name of the proposing strategy.
    pub strategy: &'static str,
    /// Normalized candidate text.
    pub text: String,
}

impl Candidate {
    /// Length in characters, the measure the longest-wins rule compares.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Run text strategies of one tier and collect their normalized, non-empty
/// candidates in strategy order.
#[must_use]
pub fn collect_candidates(
    page: &Page<'_>,
    options: &Options,
    strategies: &[Strategy<Vec<String>>],
    tier: Tier,
) -> Vec<Candidate> {
    strategies
        .iter()
        .filter(|s| s.tier == tier)
        .flat_map(|strategy| {
            (strategy.run)(page, options)
                .into_iter()
                .map(|text| normalize(&text))
                .filter(|text| !text.is_empty())
                .map(move |text| Candidate {
                    strategy: strategy.name,
                    text,
                })
        })
        .collect()
}

/// Longest-wins cascade. Ties go to the earliest candidate.
#[must_use]
pub fn longest_candidate(
    page: &Page<'_>,
    options: &Options,
    strategies: &[Strategy<Vec<String>>],
) -> Option<Candidate> {
    let mut candidates = collect_candidates(page, options, strategies, Tier::Primary);
    if candidates.is_empty() {
        candidates = collect_candidates(page, options, strategies, Tier::Fallback);
    }
    trace!(count = candidates.len(), "collected candidates");
    pick_longest(candidates)
}

/// The longest candidate by character count; the first one on ties.
#[must_use]
pub fn pick_longest(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(b) if b.char_len() >= candidate.char_len() => Some(b),
        _ => Some(candidate),
    })
}

/// First-hit cascade: the first strategy returning `Some` wins.
///
/// Fallback strategies are ordinary later entries here; order alone decides.
#[must_use]
pub fn first_hit<T>(
    page: &Page<'_>,
    options: &Options,
    strategies: &[Strategy<Option<T>>],
) -> Option<(&'static str, T)> {
    strategies
        .iter()
        .find_map(|strategy| (strategy.run)(page, options).map(|value| (strategy.name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn short(_: &Page<'_>, _: &Options) -> Vec<String> {
        vec!["Short".to_string(), "   ".to_string()]
    }

    fn long(_: &Page<'_>, _: &Options) -> Vec<String> {
        vec!["A much longer candidate".to_string()]
    }

    fn same_length(_: &Page<'_>, _: &Options) -> Vec<String> {
        vec!["Other".to_string()]
    }

    fn nothing(_: &Page<'_>, _: &Options) -> Vec<String> {
        Vec::new()
    }

    fn backup(_: &Page<'_>, _: &Options) -> Vec<String> {
        vec!["Backup text that is the longest of all".to_string()]
    }

    #[test]
    fn longest_wins_across_strategies() {
        let page = Page::parse("<p></p>");
        let strategies = [
            Strategy { name: "short", tier: Tier::Primary, run: short },
            Strategy { name: "long", tier: Tier::Primary, run: long },
        ];
        let winner = longest_candidate(&page, &Options::default(), &strategies).expect("winner");
        assert_eq!(winner.strategy, "long");
        assert_eq!(winner.text, "A much longer candidate");
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let page = Page::parse("");
        let strategies = [
            Strategy { name: "short", tier: Tier::Primary, run: short },
            Strategy { name: "same", tier: Tier::Primary, run: same_length },
        ];
        let winner = longest_candidate(&page, &Options::default(), &strategies).expect("winner");
        assert_eq!(winner.strategy, "short");
    }

    #[test]
    fn fallback_only_runs_without_primary_candidates() {
        let page = Page::parse("");
        let with_primary = [
            Strategy { name: "short", tier: Tier::Primary, run: short },
            Strategy { name: "backup", tier: Tier::Fallback, run: backup },
        ];
        let winner = longest_candidate(&page, &Options::default(), &with_primary).expect("winner");
        assert_eq!(winner.strategy, "short");

        let without_primary = [
            Strategy { name: "nothing", tier: Tier::Primary, run: nothing },
            Strategy { name: "backup", tier: Tier::Fallback, run: backup },
        ];
        let winner =
            longest_candidate(&page, &Options::default(), &without_primary).expect("winner");
        assert_eq!(winner.strategy, "backup");
    }

    #[test]
    fn no_candidates_is_none() {
        let page = Page::parse("");
        let strategies = [Strategy { name: "nothing", tier: Tier::Primary, run: nothing }];
        assert!(longest_candidate(&page, &Options::default(), &strategies).is_none());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let picked = pick_longest(vec![
            Candidate { strategy: "a", text: "ééééé".to_string() },
            Candidate { strategy: "b", text: "abcdef".to_string() },
        ])
        .expect("winner");
        assert_eq!(picked.strategy, "b");
    }

    static LATE_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn miss(_: &Page<'_>, _: &Options) -> Option<u32> {
        None
    }

    fn hit(_: &Page<'_>, _: &Options) -> Option<u32> {
        Some(7)
    }

    fn late(_: &Page<'_>, _: &Options) -> Option<u32> {
        LATE_CALLS.fetch_add(1, Ordering::SeqCst);
        Some(99)
    }

    #[test]
    fn first_hit_stops_at_first_success() {
        let page = Page::parse("");
        let strategies = [
            Strategy { name: "miss", tier: Tier::Primary, run: miss },
            Strategy { name: "hit", tier: Tier::Primary, run: hit },
            Strategy { name: "late", tier: Tier::Fallback, run: late },
        ];
        assert_eq!(first_hit(&page, &Options::default(), &strategies), Some(("hit", 7)));
        assert_eq!(LATE_CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn first_hit_with_all_misses_is_none() {
        let page = Page::parse("");
        let strategies = [Strategy { name: "miss", tier: Tier::Primary, run: miss }];
        assert_eq!(first_hit(&page, &Options::default(), &strategies), None);
    }
}
