//! Skeleton Gen - loading-view templates from layout descriptions
//!
//! This library classifies a natural-language page-layout description
//! into a layout archetype and generates the source of a Next.js
//! loading view built from skeleton placeholder blocks.
//!
//! # Example
//!
//! ```rust
//! use skeleton_gen::generate;
//!
//! let tsx = generate("dashboard with 4 stats");
//! assert!(tsx.contains("export default function Loading()"));
//! ```

pub mod classify;
pub mod error;
pub mod plan;
pub mod render;
pub mod theme;

pub use classify::{classify, extract_number, Archetype};
pub use error::ThemeError;
pub use plan::SkeletonPlan;
pub use render::{render_tsx, render_tsx_with, TsxConfig};
pub use theme::Theme;

/// Configuration for the complete generation pipeline
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// TSX output configuration
    pub tsx: TsxConfig,
    /// Component theme for the emitted import and tags
    pub theme: Theme,
    /// Debug mode: print the resolved plan to stderr
    pub debug: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            tsx: TsxConfig::default(),
            theme: Theme::default(),
            debug: false,
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the TSX output configuration
    pub fn with_tsx(mut self, config: TsxConfig) -> Self {
        self.tsx = config;
        self
    }

    /// Set the component theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Generate a loading view from a description with default configuration
///
/// This is the main entry point for the library. It classifies the
/// description, resolves counts and defaults, and emits the template.
/// Total over its input: every description produces output, and the
/// same description always produces the same bytes.
///
/// # Example
///
/// ```rust
/// use skeleton_gen::generate;
///
/// let tsx = generate("table with 12 rows and 3 columns");
/// assert!(tsx.contains("{Array.from({ length: 12 }).map((_, i) => ("));
/// ```
pub fn generate(description: &str) -> String {
    generate_with_config(description, GenerateConfig::default())
}

/// Generate a loading view with custom configuration
///
/// # Example
///
/// ```rust
/// use skeleton_gen::{generate_with_config, GenerateConfig, TsxConfig};
///
/// let config = GenerateConfig::new()
///     .with_tsx(TsxConfig::default().with_function_name("BoardLoading"));
///
/// let tsx = generate_with_config("6 cards", config);
/// assert!(tsx.contains("export default function BoardLoading()"));
/// ```
pub fn generate_with_config(description: &str, config: GenerateConfig) -> String {
    let plan = plan::plan(description);

    if config.debug {
        eprintln!("=== Skeleton Debug ===");
        eprintln!("pattern: {}", plan.archetype());
        match &plan {
            SkeletonPlan::Dashboard(dashboard) => {
                eprintln!("stat_count: {}", dashboard.stat_count);
                eprintln!("with_table: {}", dashboard.with_table);
            }
            SkeletonPlan::Table(table) => {
                eprintln!("rows: {}", table.rows);
                eprintln!("cols: {}", table.cols);
            }
            SkeletonPlan::Cards(cards) => {
                eprintln!("count: {}", cards.count);
                eprintln!("grid_cols: {}", cards.grid_cols());
            }
            SkeletonPlan::List(list) => {
                eprintln!("count: {}", list.count);
            }
            SkeletonPlan::Stats(stats) => {
                eprintln!("count: {}", stats.count);
            }
            SkeletonPlan::Profile | SkeletonPlan::Form => {
                eprintln!("fixed layout");
            }
        }
        eprintln!("======================");
    }

    render_tsx_with(&plan, &config.tsx, &config.theme)
}
