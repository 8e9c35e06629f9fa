#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The report components reference these classes directly; the test fails when a
refactor drops or renames one in `ui/assets/theme/main.css`. A substring check
is enough here. When renaming a selector, update the component markup and this
list together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    // Upload
    ".report-upload__drop",
    ".report-upload__status--ok",
    ".report-upload__status--error",
    ".report-upload__detail",
    // Tabs & filter
    ".report-tabs__tab",
    ".report-tabs__tab--active",
    ".report-filter__select",
    ".report-filter__notice",
    // Cards
    ".report-cards",
    ".report-card {",
    ".report-card__header",
    ".report-card__meta",
    ".report-card__placeholder",
    ".report-card__value",
    ".report-card__value--placeholder",
    // Charts
    ".report-charts",
    ".report-chart__title",
    ".report-chart__columns",
    ".report-chart__column-fill",
    ".report-chart__bars--scroll",
    ".report-chart__bar-fill",
    ".report-chart__bar-value",
    // Export panel
    ".report-export__actions",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn every_recovery_band_has_a_color() {
    for idx in 0..4 {
        let selector = format!(".report-chart__bar-fill--band{idx}");
        assert!(THEME_CSS.contains(&selector), "missing {selector}");
    }
}
