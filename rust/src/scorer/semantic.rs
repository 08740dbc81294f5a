//! Semantic Groups
//!
//! Fixed clusters of near-synonymous tokens. Two tokens earn partial
//! relevance credit when some cluster contains both, which lets a query
//! like "sound" reach an icon tagged "audio" without any literal overlap.

/// Near-synonym clusters. Membership is exact-token, lowercase.
const SEMANTIC_GROUPS: &[&[&str]] = &[
    &["music", "audio", "sound", "song", "melody", "tune"],
    &["support", "help", "assistance", "aid", "service"],
    &["money", "finance", "funding", "payment", "cash", "dollar"],
    &["people", "users", "community", "group", "team"],
    &["document", "file", "text", "paper", "report"],
    &["settings", "configuration", "options", "preferences"],
    &["notification", "alert", "bell", "reminder"],
    &["security", "protection", "shield", "safe"],
    &["fast", "quick", "speed", "rapid", "lightning"],
    &["favorite", "like", "love", "heart", "star"],
];

/// True iff both tokens belong to the same cluster
pub fn related(a: &str, b: &str) -> bool {
    SEMANTIC_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}
