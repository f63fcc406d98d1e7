use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for target language codes
/// 
/// Target codes are passed through to the translation provider unchanged;
/// these helpers only look them up for validation and display.
/// Language code type
#[derive(Debug, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code
    Part3,
    /// Regional variant of an ISO 639-1 code (e.g. `pt-BR`, `zh-TW`)
    Regional,
}

// Split `pt-BR` / `pt_BR` into its primary subtag
fn primary_subtag(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

fn lookup(code: &str) -> Option<Language> {
    let primary = primary_subtag(code);
    match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }
}

/// Validate if a language code is a known ISO 639 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let trimmed = code.trim();
    if lookup(trimmed).is_none() {
        return Err(anyhow!("Invalid language code: {}", code));
    }

    if trimmed.contains(['-', '_']) {
        Ok(LanguageCodeType::Regional)
    } else if trimmed.len() == 2 {
        Ok(LanguageCodeType::Part1)
    } else {
        Ok(LanguageCodeType::Part3)
    }
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let lang = lookup(code)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;
    
    Ok(lang.to_name().to_string())
}

/// Human-readable label such as `English (en)`, or the bare code when unknown
pub fn display_label(code: &str) -> String {
    match get_language_name(code) {
        Ok(name) => format!("{} ({})", name, code),
        Err(_) => code.to_string(),
    }
}
