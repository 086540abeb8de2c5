//! Skeleton Gen CLI
//!
//! Usage:
//!   skeleton-gen [OPTIONS] "<description>"
//!
//! Options:
//!   -t, --theme <FILE>  Theme file for the skeleton component (TOML format)
//!   -d, --debug         Show the classified pattern and its parameters
//!   -p, --patterns      Show the layout pattern reference
//!   -e, --examples      Show annotated examples
//!   --skill             Output LLM-optimized skill document
//!   -h, --help          Print help

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use skeleton_gen::{generate_with_config, GenerateConfig, Theme};

#[derive(Parser)]
#[command(name = "skeleton-gen")]
#[command(about = "Loading-view templates from layout descriptions")]
struct Cli {
    /// Layout description, e.g. "dashboard with 4 stats and a table"
    description: Option<String>,

    /// Theme file for the skeleton component (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Debug mode: show the classified pattern and its parameters
    #[arg(short, long)]
    debug: bool,

    /// Show the layout pattern reference
    #[arg(short, long)]
    patterns: bool,

    /// Show annotated examples
    #[arg(short, long)]
    examples: bool,

    /// Output LLM-optimized skill document for agent integration
    #[arg(long)]
    skill: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle documentation flags first
    if cli.patterns {
        print_patterns();
        return;
    }

    if cli.examples {
        print_examples();
        return;
    }

    if cli.skill {
        print_skill();
        return;
    }

    // The description is the one required input
    let Some(description) = &cli.description else {
        print_usage();
        process::exit(1);
    };

    // Load theme
    let theme = match &cli.theme {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading theme '{}': {}", path.display(), e);
                    process::exit(1);
                }
            };
            match Theme::from_str(&content) {
                Ok(theme) => theme,
                Err(e) => {
                    eprintln!("{}", e.format(&content, &path.display().to_string()));
                    process::exit(1);
                }
            }
        }
        None => Theme::default(),
    };

    let config = GenerateConfig::new().with_theme(theme).with_debug(cli.debug);
    println!("{}", generate_with_config(description, config));
}

fn print_usage() {
    println!(
        r#"Skeleton Gen - loading-view templates from layout descriptions

USAGE:
    skeleton-gen [OPTIONS] "<description>"

OPTIONS:
    -t, --theme <FILE>  Custom skeleton component (TOML file)
    -d, --debug         Show the classified pattern and its parameters
    -p, --patterns      Show the layout pattern reference
    -e, --examples      Show annotated examples
    --skill             Output LLM skill document (for embedding in agent context)
    -h, --help          Print help

QUICK START:
    skeleton-gen "dashboard with 4 stats and a table" > loading.tsx

This prints a loading view built from skeleton placeholder blocks.
Run --patterns for the pattern reference or --examples for more."#
    );
}

fn print_patterns() {
    println!(
        r#"SKELETON GEN PATTERNS
=====================

The description is matched against these patterns in order; the first
match wins. Counts are read from the first standalone number in the
description.

dashboard   "dashboard" plus "stat" or "metric"
            Grid of stat cards (count, default 4). Add "table" for a
            secondary section of 8 placeholder rows.

table       "table"
            Header bar with two controls, then rows (first number,
            default 8) of columns (second number, default 4) whose
            widths grow with the column index.

profile     "profile" or "user"
            Fixed layout: avatar with three text lines, then a
            two-column grid of four content blocks.

cards       "card", and the fallback when nothing matches
            Grid of items (count, default 6; at most 3 columns), each
            a large block with two text lines.

list        "list"
            Repeated rows (count, default 5), each an avatar with
            three text lines.

form        "form"
            Fixed layout: three labeled fields (one tall) and two
            buttons.

stats       "stat" or "metric" without "dashboard"
            Grid of blocks (count, default 4), each a value, a larger
            value, and a caption."#
    );
}

fn print_examples() {
    println!(
        r#"SKELETON GEN EXAMPLES
=====================

EXAMPLE 1: Dashboard with a table section
-----------------------------------------
skeleton-gen "dashboard with 4 stats and a table"

Four stat-card placeholders in a responsive grid, followed by a
table section of eight placeholder rows.

EXAMPLE 2: Sized table
----------------------
skeleton-gen "table with 12 rows and 3 columns"

A filter bar and twelve rows of three placeholder cells with
increasing widths. The first number sizes the rows, the second the
columns.

EXAMPLE 3: Card grid
--------------------
skeleton-gen "6 cards"

Six card placeholders in a three-column grid. With "2 cards" the
grid narrows to two columns.

EXAMPLE 4: Fixed layouts
------------------------
skeleton-gen "profile page"
skeleton-gen "contact form"

Profile and form layouts are fixed; numbers in the description are
ignored.

EXAMPLE 5: Custom component theme
---------------------------------
skeleton-gen -t mantine.toml "5 items list"

where mantine.toml contains:

    [component]
    name = "Skeleton"
    import = "@mantine/core"

The import line and every placeholder tag use the themed component."#
    );
}

fn print_skill() {
    println!(
        r#"# Skeleton Gen Skill

Generate a Next.js loading.tsx from a one-line layout description.
Output is TSX built from skeleton placeholder blocks; write it to the
route's loading.tsx.

## Usage

```bash
skeleton-gen "<description>" > app/<route>/loading.tsx
```

## Patterns

| Keywords | Layout |
|----------|--------|
| dashboard + stat/metric | stat-card grid; "table" adds a row section |
| table | header bar + N rows of M cells (numbers in description) |
| profile, user | avatar header + content grid (fixed) |
| card | card grid, count from description (default 6, max 3 columns) |
| list | avatar rows, count from description (default 5) |
| form | labeled fields + buttons (fixed) |
| stat, metric | stat blocks, count from description (default 4) |

Anything else falls back to the card grid. Keywords are
case-insensitive substrings; the first standalone number sets the
count.

## Examples

```bash
skeleton-gen "dashboard with 4 stats and a table"
skeleton-gen "table with 12 rows and 3 columns"
skeleton-gen "list of 8 conversations"
```

## Rules

1. One description per invocation; quote it.
2. The generated component is self-contained and default-exported.
3. Pass -t <file> to import the skeleton component from somewhere
   other than @/components/ui/skeleton.

## More Help

Run `skeleton-gen --patterns` for the full pattern reference.
Run `skeleton-gen --examples` for annotated examples."#
    );
}
