//! Property-based tests for the schema and row parsers.
//!
//! Uses proptest to generate random declarators and data lines, then
//! verifies the structural guarantees of the parsing engine.

use infozone_core::test_utils::*;
use infozone_core::*;
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

static COLUMN_NAMES: [&str; 15] = [
    "param", "value", "origin", "mins", "maxs", "lcorner", "hcorner", "menuid", "radio", "red",
    "green", "blue", "xcoord", "ycoord", "phrase",
];

/// A single format token: a column name or a `[tag]` marker.
fn arb_format_token() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(&COLUMN_NAMES[..]).prop_map(str::to_string),
        "[a-z]{2,3}".prop_map(|tag| format!("[{tag}]")),
    ]
}

fn arb_format_tokens(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_format_token(), range)
}

/// A token that is a valid value for any non-vector column.
fn arb_plain_token() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A declarator with N tokens (1..=32) builds N columns in token order.
    #[test]
    fn schema_length_matches_tokens(tokens in arb_format_tokens(1..=MAX_COLUMNS)) {
        let mut reg = MemoryRegistry::new();
        let line = format!("{{{}}}", tokens.join(" "));
        let schema = Schema::parse_declarator(&line, &mut reg).unwrap();

        prop_assert_eq!(schema.len(), tokens.len());
        for (column, token) in schema.columns().iter().zip(&tokens) {
            if let Some(tag) = token.strip_prefix('[') {
                let tag = tag.trim_end_matches(']');
                prop_assert_eq!(column.column_type, ColumnType::Translation);
                prop_assert_eq!(reg.tag(column.lang.unwrap()), Some(tag));
            } else {
                prop_assert_eq!(column.column_type, ColumnType::lookup(token));
                prop_assert_eq!(column.lang, None);
            }
        }
    }

    /// More than 32 tokens never builds.
    #[test]
    fn oversized_schema_fails(tokens in arb_format_tokens(MAX_COLUMNS + 1..=MAX_COLUMNS + 16)) {
        let mut reg = MemoryRegistry::new();
        let line = format!("{{{}}}", tokens.join(" "));
        prop_assert_eq!(
            Schema::parse_declarator(&line, &mut reg),
            Err(SchemaError::TooManyColumns { count: tokens.len() })
        );
    }

    /// A missing closing brace always fails, whatever the tokens.
    #[test]
    fn unclosed_declarator_fails(tokens in arb_format_tokens(1..=8)) {
        let mut reg = MemoryRegistry::new();
        let line = format!("{{{}", tokens.join(" "));
        prop_assert_eq!(
            Schema::parse_declarator(&line, &mut reg),
            Err(SchemaError::MissingClosingBrace)
        );
    }

    /// Lines with the wrong number of tokens never produce a row.
    #[test]
    fn count_mismatch_never_yields_row(
        columns in 1..=8usize,
        values in proptest::collection::vec(arb_plain_token(), 0..=12),
    ) {
        prop_assume!(values.len() != columns);
        let mut reg = MemoryRegistry::new();
        let schema = Schema::parse_format(&vec!["phrase"; columns].join(" "), &mut reg).unwrap();

        prop_assert_eq!(
            Row::parse(&values.join(" "), &schema),
            Err(RowError::ColumnCountMismatch { expected: columns, found: values.len() })
        );
    }

    /// Printed vector components parse back to the same values.
    #[test]
    fn vector_components_round_trip(
        x in -1.0e6f32..1.0e6,
        y in -1.0e6f32..1.0e6,
        z in -1.0e6f32..1.0e6,
    ) {
        prop_assert_eq!(parse_vector(&format!("{x} {y} {z}")), Some(Vec3::new(x, y, z)));
        prop_assert_eq!(parse_vector(&format!("{x};{y};{z}")), Some(Vec3::new(x, y, z)));
    }

    /// Vectors with any arity other than three are rejected.
    #[test]
    fn vector_arity_is_strict(parts in proptest::collection::vec(-100i32..100, 0..=6)) {
        prop_assume!(parts.len() != 3);
        let token = parts.iter().map(i32::to_string).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(parse_vector(&token), None);
    }

    /// Registering the same tag twice returns the same identifier.
    #[test]
    fn language_registration_is_idempotent(tags in proptest::collection::vec("[a-z]{2}", 1..10)) {
        let mut reg = MemoryRegistry::new();
        let first: Vec<Option<LangId>> = tags.iter().map(|t| reg.add_language(t)).collect();
        let second: Vec<Option<LangId>> = tags.iter().map(|t| reg.add_language(t)).collect();
        prop_assert!(first.iter().all(Option::is_some));
        prop_assert_eq!(first, second);
    }
}

// ===========================================================================
// Fixed scenarios
// ===========================================================================

#[test]
fn exact_vector_scenario() {
    assert_eq!(
        parse_vector("1.5 -2.0 3.25"),
        Some(Vec3::new(1.5, -2.0, 3.25))
    );
    assert_eq!(parse_vector("1.5 -2.0"), None);
    assert_eq!(parse_vector("1.5 -2.0 3.25 4"), None);
}

#[test]
fn default_formats_build() {
    let mut reg = MemoryRegistry::new();
    for kind in [SectionKind::Hud, SectionKind::Lang, SectionKind::Radio] {
        let format = kind.default_format().unwrap();
        let schema = Schema::parse_format(format, &mut reg).unwrap();
        assert_eq!(schema.translation_count(), 2);
    }
    assert_eq!(reg.len(), 2);
}
