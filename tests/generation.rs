//! End-to-end generation tests for the skeleton generator
//!
//! The emitted template text is part of the contract; the fixed layouts
//! are compared byte-for-byte.

use pretty_assertions::assert_eq;

use skeleton_gen::generate;

#[test]
fn profile_page_matches_fixed_template() {
    let expected = r#"import { Skeleton } from "@/components/ui/skeleton"

export default function Loading() {
  return (
    <div className="space-y-6 animate-pulse">
      {/* Header */}
      <div className="flex items-center gap-4">
        <Skeleton className="h-20 w-20 rounded-full" />
        <div className="space-y-2">
          <Skeleton className="h-6 w-[200px]" />
          <Skeleton className="h-4 w-[150px]" />
          <Skeleton className="h-4 w-[250px]" />
        </div>
      </div>

      {/* Content Grid */}
      <div className="grid gap-6 md:grid-cols-2">
        <div className="space-y-4">
          <Skeleton className="h-[200px] w-full rounded-lg" />
          <Skeleton className="h-[150px] w-full rounded-lg" />
        </div>
        <div className="space-y-4">
          <Skeleton className="h-[250px] w-full rounded-lg" />
          <Skeleton className="h-[100px] w-full rounded-lg" />
        </div>
      </div>
    </div>
  )
}"#;

    assert_eq!(generate("profile page"), expected);
}

#[test]
fn form_matches_fixed_template() {
    let expected = r#"import { Skeleton } from "@/components/ui/skeleton"

export default function Loading() {
  return (
    <div className="space-y-6 animate-pulse">
      <div className="space-y-4">
        <div className="space-y-2">
          <Skeleton className="h-4 w-[100px]" />
          <Skeleton className="h-10 w-full" />
        </div>
        <div className="space-y-2">
          <Skeleton className="h-4 w-[120px]" />
          <Skeleton className="h-10 w-full" />
        </div>
        <div className="space-y-2">
          <Skeleton className="h-4 w-[80px]" />
          <Skeleton className="h-[100px] w-full" />
        </div>
      </div>
      <div className="flex gap-4">
        <Skeleton className="h-10 w-[100px]" />
        <Skeleton className="h-10 w-[100px]" />
      </div>
    </div>
  )
}"#;

    assert_eq!(generate("signup form"), expected);
}

#[test]
fn bare_table_uses_defaults_and_unrolled_widths() {
    let expected = r#"import { Skeleton } from "@/components/ui/skeleton"

export default function Loading() {
  return (
    <div className="space-y-4 animate-pulse">
      <div className="flex gap-4">
        <Skeleton className="h-10 w-[300px]" />
        <Skeleton className="h-10 w-[100px]" />
      </div>
      <div className="space-y-2">
        {Array.from({ length: 8 }).map((_, i) => (
          <div key={i} className="flex gap-4">
            <Skeleton className="h-4 w-[150px]" />
            <Skeleton className="h-4 w-[200px]" />
            <Skeleton className="h-4 w-[250px]" />
            <Skeleton className="h-4 w-[300px]" />
          </div>
        ))}
      </div>
    </div>
  )
}"#;

    assert_eq!(generate("table"), expected);
}

#[test]
fn dashboard_with_table_appends_section() {
    let expected = r#"import { Skeleton } from "@/components/ui/skeleton"

export default function Loading() {
  return (
    <div className="space-y-6 animate-pulse">
      {/* Stats Cards */}
      <div className="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
        {Array.from({ length: 3 }).map((_, i) => (
          <Skeleton key={i} className="h-[125px] w-full rounded-lg" />
        ))}
      </div>

      {/* Table Section */}
      <div className="space-y-4">
        <Skeleton className="h-10 w-[300px]" />
        <div className="space-y-2">
          {Array.from({ length: 8 }).map((_, i) => (
            <div key={i} className="flex gap-4">
              <Skeleton className="h-4 w-[100px]" />
              <Skeleton className="h-4 w-[200px]" />
              <Skeleton className="h-4 w-[150px]" />
              <Skeleton className="h-4 w-[100px]" />
            </div>
          ))}
        </div>
      </div>
    </div>
  )
}"#;

    assert_eq!(generate("dashboard with 3 stats and a table"), expected);
}

#[test]
fn list_count_from_description() {
    let expected = r#"import { Skeleton } from "@/components/ui/skeleton"

export default function Loading() {
  return (
    <div className="space-y-4 animate-pulse">
      {Array.from({ length: 9 }).map((_, i) => (
        <div key={i} className="flex gap-4 p-4 border rounded-lg">
          <Skeleton className="h-12 w-12 rounded-full" />
          <div className="flex-1 space-y-2">
            <Skeleton className="h-4 w-[300px]" />
            <Skeleton className="h-4 w-[400px]" />
            <Skeleton className="h-4 w-[200px]" />
          </div>
        </div>
      ))}
    </div>
  )
}"#;

    assert_eq!(generate("9 items list"), expected);
}

#[test]
fn bare_list_defaults_to_five_rows() {
    let tsx = generate("list");
    assert!(tsx.contains("{Array.from({ length: 5 }).map((_, i) => ("));
}

#[test]
fn two_cards_narrow_the_grid() {
    let expected = r#"import { Skeleton } from "@/components/ui/skeleton"

export default function Loading() {
  return (
    <div className="space-y-4 animate-pulse">
      <div className="grid gap-4 md:grid-cols-2 lg:grid-cols-2">
        {Array.from({ length: 2 }).map((_, i) => (
          <div key={i} className="space-y-3">
            <Skeleton className="h-[200px] w-full rounded-lg" />
            <Skeleton className="h-4 w-[250px]" />
            <Skeleton className="h-4 w-[200px]" />
          </div>
        ))}
      </div>
    </div>
  )
}"#;

    assert_eq!(generate("2 cards"), expected);
}

#[test]
fn stats_grid_sized_by_count() {
    let tsx = generate("6 metrics");
    assert!(tsx.contains("lg:grid-cols-6"));
    assert!(tsx.contains("{Array.from({ length: 6 }).map((_, i) => ("));
    assert!(tsx.contains(r#"<Skeleton className="h-12 w-[150px]" />"#));
}

#[test]
fn sized_table_reads_rows_then_cols() {
    let tsx = generate("table with 12 rows and 3 columns");
    assert!(tsx.contains("{Array.from({ length: 12 }).map((_, i) => ("));
    assert!(tsx.contains(r#"<Skeleton className="h-4 w-[250px]" />"#));
    assert!(!tsx.contains("h-4 w-[300px]"));
}

#[test]
fn dashboard_without_table_has_no_section() {
    let tsx = generate("dashboard with stats");
    assert!(tsx.contains("lg:grid-cols-4"));
    assert!(!tsx.contains("Table Section"));
}

#[test]
fn generation_is_idempotent() {
    for description in ["profile page", "table", "dashboard with 3 stats and a table", ""] {
        assert_eq!(generate(description), generate(description));
    }
}

#[test]
fn classification_is_total() {
    // anything in, template out
    for description in ["", "???", "Ünïcödé", "a very long unrelated sentence"] {
        let tsx = generate(description);
        assert!(tsx.starts_with("import { Skeleton }"));
        assert!(tsx.ends_with('}'));
    }
}
