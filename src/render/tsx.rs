//! TSX generation from skeleton plans

use crate::plan::{CardsPlan, DashboardPlan, ListPlan, SkeletonPlan, StatsPlan, TablePlan};
use crate::theme::Theme;

use super::TsxConfig;

/// Fixed row count for the dashboard's secondary table section
const DASHBOARD_TABLE_ROWS: u64 = 8;
/// Fixed column widths for the dashboard's secondary table section
const DASHBOARD_TABLE_WIDTHS: [u64; 4] = [100, 200, 150, 100];

/// Width of the first table column, in Tailwind arbitrary-size units
const TABLE_COL_BASE_WIDTH: u64 = 150;
/// Per-column width increment
const TABLE_COL_WIDTH_STEP: u64 = 50;

/// Build the body of a loading component incrementally
///
/// Lines accumulate at the indentation level tracked by the builder;
/// `build` wraps them with the import line and the exported function.
pub struct TsxBuilder {
    config: TsxConfig,
    theme: Theme,
    lines: Vec<String>,
    indent: usize,
}

impl TsxBuilder {
    /// Create a new builder
    pub fn new(config: TsxConfig, theme: Theme) -> Self {
        Self {
            config,
            theme,
            lines: vec![],
            // body lines start two levels deep, inside `return (`
            indent: 2,
        }
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.indent)
    }

    fn line(&mut self, content: &str) {
        self.lines.push(format!("{}{}", self.indent_str(), content));
    }

    /// Add a blank separator line
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Add a JSX comment
    pub fn comment(&mut self, text: &str) {
        self.line(&format!("{{/* {} */}}", text));
    }

    /// Open a container div with the given class list
    pub fn open_div(&mut self, classes: &str) {
        self.line(&format!(r#"<div className="{}">"#, classes));
        self.indent += 1;
    }

    /// Open a container div carrying a repetition key
    pub fn open_keyed_div(&mut self, key: &str, classes: &str) {
        self.line(&format!(r#"<div key={{{}}} className="{}">"#, key, classes));
        self.indent += 1;
    }

    /// Close the innermost open div
    pub fn close_div(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.line("</div>");
    }

    /// Open the root container, applying the animation class when enabled
    pub fn open_root(&mut self, spacing: &str) {
        if self.config.animate {
            self.open_div(&format!("{} animate-pulse", spacing));
        } else {
            self.open_div(spacing);
        }
    }

    /// Add a skeleton block with the given class list
    pub fn skeleton(&mut self, classes: &str) {
        let tag = format!(r#"<{} className="{}" />"#, self.theme.component, classes);
        self.line(&tag);
    }

    /// Add a skeleton block carrying a repetition key
    pub fn keyed_skeleton(&mut self, key: &str, classes: &str) {
        let tag = format!(
            r#"<{} key={{{}}} className="{}" />"#,
            self.theme.component, key, classes
        );
        self.line(&tag);
    }

    /// Open an `Array.from` repetition of `count` copies, binding `var`
    pub fn open_repeat(&mut self, count: u64, var: &str) {
        self.line(&format!(
            "{{Array.from({{ length: {} }}).map((_, {}) => (",
            count, var
        ));
        self.indent += 1;
    }

    /// Close the innermost repetition
    pub fn close_repeat(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.line("))}");
    }

    /// Build the final component source
    pub fn build(self) -> String {
        let mut tsx = String::new();

        tsx.push_str(&format!(
            "import {{ {} }} from \"{}\"\n",
            self.theme.component, self.theme.import_path
        ));
        tsx.push('\n');
        tsx.push_str(&format!(
            "export default function {}() {{\n",
            self.config.function_name
        ));
        tsx.push_str("  return (\n");
        for body_line in &self.lines {
            tsx.push_str(body_line);
            tsx.push('\n');
        }
        tsx.push_str("  )\n");
        tsx.push('}');

        tsx
    }
}

/// Render a skeleton plan with default config and theme
pub fn render_tsx(plan: &SkeletonPlan) -> String {
    render_tsx_with(plan, &TsxConfig::default(), &Theme::default())
}

/// Render a skeleton plan with explicit config and theme
pub fn render_tsx_with(plan: &SkeletonPlan, config: &TsxConfig, theme: &Theme) -> String {
    let mut builder = TsxBuilder::new(config.clone(), theme.clone());

    match plan {
        SkeletonPlan::Dashboard(dashboard) => render_dashboard(dashboard, &mut builder),
        SkeletonPlan::Table(table) => render_table(table, &mut builder),
        SkeletonPlan::Profile => render_profile(&mut builder),
        SkeletonPlan::Cards(cards) => render_cards(cards, &mut builder),
        SkeletonPlan::List(list) => render_list(list, &mut builder),
        SkeletonPlan::Form => render_form(&mut builder),
        SkeletonPlan::Stats(stats) => render_stats(stats, &mut builder),
    }

    builder.build()
}

fn render_dashboard(plan: &DashboardPlan, builder: &mut TsxBuilder) {
    builder.open_root("space-y-6");
    builder.comment("Stats Cards");
    builder.open_div(&format!(
        "grid gap-4 md:grid-cols-2 lg:grid-cols-{}",
        plan.stat_count
    ));
    builder.open_repeat(plan.stat_count, "i");
    builder.keyed_skeleton("i", "h-[125px] w-full rounded-lg");
    builder.close_repeat();
    builder.close_div();

    if plan.with_table {
        builder.blank();
        builder.comment("Table Section");
        builder.open_div("space-y-4");
        builder.skeleton("h-10 w-[300px]");
        builder.open_div("space-y-2");
        builder.open_repeat(DASHBOARD_TABLE_ROWS, "i");
        builder.open_keyed_div("i", "flex gap-4");
        for width in DASHBOARD_TABLE_WIDTHS {
            builder.skeleton(&format!("h-4 w-[{}px]", width));
        }
        builder.close_div();
        builder.close_repeat();
        builder.close_div();
        builder.close_div();
    }

    builder.close_div();
}

fn render_table(plan: &TablePlan, builder: &mut TsxBuilder) {
    builder.open_root("space-y-4");
    builder.open_div("flex gap-4");
    builder.skeleton("h-10 w-[300px]");
    builder.skeleton("h-10 w-[100px]");
    builder.close_div();
    builder.open_div("space-y-2");
    builder.open_repeat(plan.rows, "i");
    builder.open_keyed_div("i", "flex gap-4");
    // columns are unrolled so each width literal lands in the output
    for col in 0..plan.cols {
        let width = TABLE_COL_BASE_WIDTH + TABLE_COL_WIDTH_STEP * col;
        builder.skeleton(&format!("h-4 w-[{}px]", width));
    }
    builder.close_div();
    builder.close_repeat();
    builder.close_div();
    builder.close_div();
}

fn render_profile(builder: &mut TsxBuilder) {
    builder.open_root("space-y-6");
    builder.comment("Header");
    builder.open_div("flex items-center gap-4");
    builder.skeleton("h-20 w-20 rounded-full");
    builder.open_div("space-y-2");
    builder.skeleton("h-6 w-[200px]");
    builder.skeleton("h-4 w-[150px]");
    builder.skeleton("h-4 w-[250px]");
    builder.close_div();
    builder.close_div();
    builder.blank();
    builder.comment("Content Grid");
    builder.open_div("grid gap-6 md:grid-cols-2");
    builder.open_div("space-y-4");
    builder.skeleton("h-[200px] w-full rounded-lg");
    builder.skeleton("h-[150px] w-full rounded-lg");
    builder.close_div();
    builder.open_div("space-y-4");
    builder.skeleton("h-[250px] w-full rounded-lg");
    builder.skeleton("h-[100px] w-full rounded-lg");
    builder.close_div();
    builder.close_div();
    builder.close_div();
}

fn render_cards(plan: &CardsPlan, builder: &mut TsxBuilder) {
    builder.open_root("space-y-4");
    builder.open_div(&format!(
        "grid gap-4 md:grid-cols-2 lg:grid-cols-{}",
        plan.grid_cols()
    ));
    builder.open_repeat(plan.count, "i");
    builder.open_keyed_div("i", "space-y-3");
    builder.skeleton("h-[200px] w-full rounded-lg");
    builder.skeleton("h-4 w-[250px]");
    builder.skeleton("h-4 w-[200px]");
    builder.close_div();
    builder.close_repeat();
    builder.close_div();
    builder.close_div();
}

fn render_list(plan: &ListPlan, builder: &mut TsxBuilder) {
    builder.open_root("space-y-4");
    builder.open_repeat(plan.count, "i");
    builder.open_keyed_div("i", "flex gap-4 p-4 border rounded-lg");
    builder.skeleton("h-12 w-12 rounded-full");
    builder.open_div("flex-1 space-y-2");
    builder.skeleton("h-4 w-[300px]");
    builder.skeleton("h-4 w-[400px]");
    builder.skeleton("h-4 w-[200px]");
    builder.close_div();
    builder.close_div();
    builder.close_repeat();
    builder.close_div();
}

fn render_form(builder: &mut TsxBuilder) {
    builder.open_root("space-y-6");
    builder.open_div("space-y-4");
    builder.open_div("space-y-2");
    builder.skeleton("h-4 w-[100px]");
    builder.skeleton("h-10 w-full");
    builder.close_div();
    builder.open_div("space-y-2");
    builder.skeleton("h-4 w-[120px]");
    builder.skeleton("h-10 w-full");
    builder.close_div();
    builder.open_div("space-y-2");
    builder.skeleton("h-4 w-[80px]");
    // tall field, stands in for a textarea
    builder.skeleton("h-[100px] w-full");
    builder.close_div();
    builder.close_div();
    builder.open_div("flex gap-4");
    builder.skeleton("h-10 w-[100px]");
    builder.skeleton("h-10 w-[100px]");
    builder.close_div();
    builder.close_div();
}

fn render_stats(plan: &StatsPlan, builder: &mut TsxBuilder) {
    builder.open_root("space-y-6");
    builder.open_div(&format!(
        "grid gap-4 md:grid-cols-2 lg:grid-cols-{}",
        plan.count
    ));
    builder.open_repeat(plan.count, "i");
    builder.open_keyed_div("i", "space-y-2");
    builder.skeleton("h-8 w-[100px]");
    builder.skeleton("h-12 w-[150px]");
    builder.skeleton("h-4 w-[200px]");
    builder.close_div();
    builder.close_repeat();
    builder.close_div();
    builder.close_div();
}
