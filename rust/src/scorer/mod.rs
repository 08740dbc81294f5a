//! Relevance Scorer
//!
//! Deterministic keyword/semantic ranking over the icon catalog. This is
//! the fallback path behind the LLM providers and the only ranking logic
//! with reproducible behavior, so its contract is strict: pure function of
//! `(query, catalog)`, stable ordering, bounded output, never fails.
//!
//! Scoring uses a four-tier scheme. Each `(query token, keyword)` pair is
//! awarded exactly one weight, the strongest relation that applies:
//!
//! 1. exact equality
//! 2. prefix relation (either direction)
//! 3. shared semantic group
//! 4. substring relation (either direction)
//!
//! Entry totals below `MIN_SCORE` are dropped; ties keep catalog order.

pub mod semantic;

use crate::assets;
use crate::catalog::IconCatalog;
use crate::suggestion::Suggestion;

/// Weight for an exact token/keyword match
pub const W_EXACT: u32 = 10;
/// Weight for a proper prefix relation
pub const W_PREFIX: u32 = 5;
/// Weight for a shared semantic group
pub const W_SEMANTIC: u32 = 3;
/// Weight for a substring relation
pub const W_SUBSTRING: u32 = 2;

/// Minimum entry total for inclusion in results
pub const MIN_SCORE: u32 = 2;
/// Result cap
pub const MAX_SUGGESTIONS: usize = 8;

/// A suggestion plus its ranking key. Never leaves this module.
struct ScoredCandidate {
    suggestion: Suggestion,
    score: u32,
}

/// Rank the catalog against a free-text query.
///
/// Returns at most [`MAX_SUGGESTIONS`] suggestions, best first. A query
/// that normalizes to zero tokens, or a catalog with nothing relevant,
/// yields an empty list. Calling twice with the same inputs yields
/// identical output: the sort is stable and ties keep catalog order
/// (library order, then entry order within a library).
pub fn rank(query: &str, catalog: &IconCatalog) -> Vec<Suggestion> {
    let normalized = query.to_lowercase();
    let query_tokens: Vec<&str> = normalized.split_whitespace().collect();
    if query_tokens.is_empty() {
        return Vec::new();
    }
    let display_query = query_tokens.join(" ");

    let mut candidates: Vec<ScoredCandidate> = Vec::new();
    for library in catalog.libraries() {
        for entry in &library.icons {
            let (score, matched) = score_entry(&query_tokens, &entry.keywords);
            if score < MIN_SCORE {
                continue;
            }

            let (asset_url, svg) = assets::asset_fields(library, &entry.name);
            candidates.push(ScoredCandidate {
                suggestion: Suggestion {
                    name: entry.name.clone(),
                    library: library.display_name.clone(),
                    description: derive_description(&display_query, &matched, &entry.keywords),
                    url: library.base_url.clone(),
                    asset_url,
                    svg,
                },
                score,
            });
        }
    }

    // Vec::sort_by is stable, which is what keeps ties deterministic
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_SUGGESTIONS);
    candidates.into_iter().map(|c| c.suggestion).collect()
}

/// Score one entry and report which keywords matched, with the strongest
/// weight each keyword earned across all query tokens.
fn score_entry<'a>(query_tokens: &[&str], keywords: &'a [String]) -> (u32, Vec<(&'a str, u32)>) {
    let mut total = 0;
    let mut matched: Vec<(&str, u32)> = Vec::new();

    for keyword in keywords {
        let mut best = 0;
        for token in query_tokens {
            let weight = pair_weight(token, keyword);
            total += weight;
            best = best.max(weight);
        }
        if best > 0 {
            matched.push((keyword.as_str(), best));
        }
    }

    (total, matched)
}

/// Weight for a single `(query token, keyword)` pair. Exactly one tier
/// fires: the strongest relation that applies. Both inputs are lowercase.
fn pair_weight(token: &str, keyword: &str) -> u32 {
    if token == keyword {
        W_EXACT
    } else if keyword.starts_with(token) || token.starts_with(keyword) {
        W_PREFIX
    } else if semantic::related(token, keyword) {
        W_SEMANTIC
    } else if keyword.contains(token) || token.contains(keyword) {
        W_SUBSTRING
    } else {
        0
    }
}

/// Build the human-readable justification for a ranked entry.
///
/// Picks up to two matched keywords, strongest tier first (keyword order
/// within a tier). With no matches at all, falls back to describing the
/// entry by its leading keywords.
fn derive_description(query: &str, matched: &[(&str, u32)], keywords: &[String]) -> String {
    let mut picks: Vec<(&str, u32)> = matched.to_vec();
    picks.sort_by(|a, b| b.1.cmp(&a.1));

    match picks.as_slice() {
        [] => {
            let leading: Vec<&str> = keywords.iter().take(2).map(String::as_str).collect();
            format!("Represents {}", leading.join(", "))
        }
        [(keyword, _)] => format!("Perfect for {} related to {}", keyword, query),
        [(first, _), (second, _), ..] => {
            format!("Perfect for {} and {} related to {}", first, second, query)
        }
    }
}
