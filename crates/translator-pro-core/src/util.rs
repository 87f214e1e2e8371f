//! Utility functions shared across the crate.

use std::path::PathBuf;

/// Get the user's config directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}

/// Whether user input counts as blank (empty or whitespace only).
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Strip one pair of wrapping quotes or a markdown code fence that chat
/// models like to put around answers.
pub fn strip_wrapping(text: &str) -> &str {
    let text = text.trim();

    if let Some(inner) = text.strip_prefix("```") {
        let inner = inner.strip_prefix("json").unwrap_or(inner);
        return inner.strip_suffix("```").unwrap_or(inner).trim();
    }

    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}
