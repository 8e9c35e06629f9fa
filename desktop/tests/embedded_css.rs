#![cfg(test)]
//! The desktop shell embeds the shared theme from `ui/assets/theme/main.css`.
//! A moved or truncated file would only show up as unstyled windows at runtime,
//! so check it here. Keep the path in sync with `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--band-3",
        "body {",
        ".button--primary",
        "@keyframes fade-in",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
