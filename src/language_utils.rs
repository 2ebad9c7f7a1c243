use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating and naming the language codes
/// that appear in table column names. Codes are ISO 639-1 (2-letter) or
/// ISO 639-3 (3-letter), optionally qualified with a region suffix separated
/// by an underscore or hyphen (e.g. "zh_CN", "pt_BR", "es_419").
/// Split a language code into its base code and optional region qualifier
pub fn split_language_code(code: &str) -> (&str, Option<&str>) {
    match code.split_once(['_', '-']) {
        Some((base, region)) if !region.is_empty() => (base, Some(region)),
        _ => (code, None),
    }
}

/// Look up the ISO language for a base code
fn lookup_base(base: &str) -> Option<Language> {
    let normalized = base.trim().to_lowercase();
    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }
}

/// Validate a language code, tolerating a region qualifier
///
/// The base code must be a valid ISO 639-1 or ISO 639-3 code; the region
/// qualifier, when present, must be alphanumeric.
pub fn validate_language_code(code: &str) -> Result<()> {
    let (base, region) = split_language_code(code);

    if lookup_base(base).is_none() {
        return Err(anyhow!("Invalid language code: {}", code));
    }

    if let Some(region) = region {
        if !region.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!("Invalid region qualifier in language code: {}", code));
        }
    }

    Ok(())
}

/// Check if two language codes refer to the same language and region
///
/// Comparison is case-insensitive and treats underscore and hyphen
/// separators as equivalent, so "pt-br" matches "pt_BR".
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let normalize = |code: &str| code.trim().to_lowercase().replace('-', "_");
    normalize(code1) == normalize(code2)
}

/// Get the English display name for a language code
///
/// Region qualifiers are kept as a parenthesized suffix ("zh_CN" becomes
/// "Chinese (CN)"). Unknown codes fall back to the code itself so that a
/// prompt can still be rendered.
pub fn get_language_name(code: &str) -> String {
    let (base, region) = split_language_code(code);

    let name = match lookup_base(base) {
        Some(language) => language.to_name().to_string(),
        None => return code.to_string(),
    };

    match region {
        Some(region) => format!("{} ({})", name, region.to_uppercase()),
        None => name,
    }
}
