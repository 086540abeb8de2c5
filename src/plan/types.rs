//! Resolved plan types produced from a description

use crate::classify::Archetype;

/// Fully-resolved parameters for one generated loading view
///
/// Profile and Form carry no parameters; their layouts are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonPlan {
    Dashboard(DashboardPlan),
    Table(TablePlan),
    Profile,
    Cards(CardsPlan),
    List(ListPlan),
    Form,
    Stats(StatsPlan),
}

impl SkeletonPlan {
    /// The archetype this plan renders
    pub fn archetype(&self) -> Archetype {
        match self {
            SkeletonPlan::Dashboard(_) => Archetype::Dashboard,
            SkeletonPlan::Table(_) => Archetype::Table,
            SkeletonPlan::Profile => Archetype::Profile,
            SkeletonPlan::Cards(_) => Archetype::Cards,
            SkeletonPlan::List(_) => Archetype::List,
            SkeletonPlan::Form => Archetype::Form,
            SkeletonPlan::Stats(_) => Archetype::Stats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardPlan {
    /// Number of stat cards in the top grid
    pub stat_count: u64,
    /// Whether the description also asked for a table section
    pub with_table: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePlan {
    pub rows: u64,
    pub cols: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardsPlan {
    pub count: u64,
}

impl CardsPlan {
    /// Large-breakpoint grid column count, capped at three
    pub fn grid_cols(&self) -> u64 {
        self.count.min(3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPlan {
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsPlan {
    pub count: u64,
}
