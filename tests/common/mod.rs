// ==============================================================================
// Shared Test Helpers
// ==============================================================================
//
// Sentence fixtures and rendering helpers used across integration test files.
//
// Each test file that imports this module compiles its own copy, so not every
// item is used in every binary. Suppress the resulting dead_code warnings.
#![allow(dead_code)]

use miette::{GraphicalReportHandler, GraphicalTheme};

/// Two sentences that differ only in their subject nouns.
pub const SIMILAR_A: &str =
    "Software engineering is the cornerstone of a successful software project.";
pub const SIMILAR_B: &str =
    "Building engineering is the cornerstone of a successful building project.";

/// Two unrelated sentences of different lengths.
pub const UNRELATED_A: &str = "Requirements are a first level entity in Agile development";
pub const UNRELATED_B: &str =
    "Microservices have helped address scalibility issues in today's cloud environments.";

/// A spread of inputs for property checks: empty, single chars, repeated
/// runs, whitespace, mixed case, and multi-byte text.
pub const CORPUS: &[&str] = &[
    "",
    "a",
    "b",
    "aaaa",
    "abab",
    " ",
    "software engineering",
    "building engineering",
    "Software Engineering",
    "engineering software",
    "kitten",
    "sitting",
    "café",
    "cafe",
    "日本語のテキスト",
    SIMILAR_A,
    SIMILAR_B,
    UNRELATED_A,
    UNRELATED_B,
];

/// Every ordered pair from [`CORPUS`], including each string with itself.
pub fn corpus_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    CORPUS
        .iter()
        .flat_map(|&a| CORPUS.iter().map(move |&b| (a, b)))
}

/// Render a single diagnostic to a deterministic string. Uses the non-unicode
/// theme at 80 columns.
pub fn render_diagnostic(report: &miette::Report) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::none()).with_width(80);
    let mut buf = String::new();
    handler
        .render_report(&mut buf, report.as_ref())
        .expect("render to String is infallible");
    buf
}
