//! Layout archetypes the classifier can select

use std::fmt;

/// The closed set of layout archetypes
///
/// A description always classifies into exactly one of these; `Cards`
/// doubles as the fallback when no keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Dashboard,
    Table,
    Profile,
    Cards,
    List,
    Form,
    Stats,
}

impl Archetype {
    /// Short name used in debug output and the pattern reference
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Dashboard => "dashboard",
            Archetype::Table => "table",
            Archetype::Profile => "profile",
            Archetype::Cards => "cards",
            Archetype::List => "list",
            Archetype::Form => "form",
            Archetype::Stats => "stats",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
