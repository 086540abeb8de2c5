//! Parameter resolution: description to fully-resolved skeleton plan
//!
//! Classification picks the archetype; counts come from the first
//! standalone digit run in the description, falling back to the
//! archetype's default.

pub mod types;

pub use types::{
    CardsPlan, DashboardPlan, ListPlan, SkeletonPlan, StatsPlan, TablePlan,
};

use crate::classify::{classify, extract_number, Archetype};

/// Default stat-card count for dashboards
pub const DEFAULT_STAT_COUNT: u64 = 4;
/// Default table row count
pub const DEFAULT_TABLE_ROWS: u64 = 8;
/// Default table column count
pub const DEFAULT_TABLE_COLS: u64 = 4;
/// Default card count
pub const DEFAULT_CARD_COUNT: u64 = 6;
/// Default list row count
pub const DEFAULT_LIST_COUNT: u64 = 5;
/// Default stat block count
pub const DEFAULT_STATS_COUNT: u64 = 4;

/// Resolve a description into a skeleton plan.
///
/// Total over its input: every description yields exactly one plan.
pub fn plan(description: &str) -> SkeletonPlan {
    match classify(description) {
        Archetype::Dashboard => SkeletonPlan::Dashboard(DashboardPlan {
            stat_count: extract_number(description).unwrap_or(DEFAULT_STAT_COUNT),
            with_table: description.to_lowercase().contains("table"),
        }),
        Archetype::Table => SkeletonPlan::Table(table_plan(description)),
        Archetype::Profile => SkeletonPlan::Profile,
        Archetype::Cards => SkeletonPlan::Cards(CardsPlan {
            count: extract_number(description).unwrap_or(DEFAULT_CARD_COUNT),
        }),
        Archetype::List => SkeletonPlan::List(ListPlan {
            count: extract_number(description).unwrap_or(DEFAULT_LIST_COUNT),
        }),
        Archetype::Form => SkeletonPlan::Form,
        Archetype::Stats => SkeletonPlan::Stats(StatsPlan {
            count: extract_number(description).unwrap_or(DEFAULT_STATS_COUNT),
        }),
    }
}

/// Rows take the first digit run; columns re-extract after deleting
/// every occurrence of the rows digits from the text. A description
/// with more than two numbers resolves lexically, not semantically.
fn table_plan(description: &str) -> TablePlan {
    let rows = extract_number(description).unwrap_or(DEFAULT_TABLE_ROWS);
    let remainder = description.replace(&rows.to_string(), "");
    let cols = extract_number(&remainder).unwrap_or(DEFAULT_TABLE_COLS);
    TablePlan { rows, cols }
}
