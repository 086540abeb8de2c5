//! Keyword classification rules
//!
//! The rules form an ordered decision list. Categories overlap (a
//! description can mention both "dashboard" and "table"), so earlier
//! rules shadow later ones and the order is load-bearing.

use super::Archetype;

/// Classify a description into a layout archetype.
///
/// Matching is case-insensitive substring search over the whole
/// description. Always returns an archetype; input with no recognized
/// keyword falls through to `Cards`.
pub fn classify(description: &str) -> Archetype {
    let desc = description.to_lowercase();
    let has = |keyword: &str| desc.contains(keyword);

    if has("dashboard") && (has("stat") || has("metric")) {
        Archetype::Dashboard
    } else if has("table") {
        Archetype::Table
    } else if has("profile") || has("user") {
        Archetype::Profile
    } else if has("card") {
        Archetype::Cards
    } else if has("list") {
        Archetype::List
    } else if has("form") {
        Archetype::Form
    } else if has("stat") || has("metric") {
        Archetype::Stats
    } else {
        Archetype::Cards
    }
}
