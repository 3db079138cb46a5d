//! Sibling-language image URL derivation.
//!
//! The portal serves localized question and option images under a filename
//! suffix convention: `..._HI.jpg` for Hindi, `..._EN.jpg` for English. Given
//! either variant the other can be derived by swapping the suffix; a URL
//! without a suffix has no bilingual variant at all.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LanguageUrls {
    pub(crate) hindi: String,
    pub(crate) english: String,
}

fn hindi_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)_HI\.(jpg|jpeg|png|gif)").expect("hindi suffix pattern"))
}

fn english_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)_EN\.(jpg|jpeg|png|gif)").expect("english suffix pattern"))
}

pub(crate) fn is_hindi(url: &str) -> bool {
    hindi_suffix().is_match(url)
}

pub(crate) fn is_english(url: &str) -> bool {
    english_suffix().is_match(url)
}

/// Derive both language variants for an image URL.
///
/// An empty input yields empty outputs; a URL without either suffix maps to
/// itself in both languages.
pub(crate) fn resolve(image_url: &str) -> LanguageUrls {
    if image_url.is_empty() {
        return LanguageUrls { hindi: String::new(), english: String::new() };
    }

    if is_hindi(image_url) {
        return LanguageUrls {
            hindi: image_url.to_string(),
            english: hindi_suffix().replace_all(image_url, "_EN.${1}").into_owned(),
        };
    }

    if is_english(image_url) {
        return LanguageUrls {
            hindi: english_suffix().replace_all(image_url, "_HI.${1}").into_owned(),
            english: image_url.to_string(),
        };
    }

    LanguageUrls { hindi: image_url.to_string(), english: image_url.to_string() }
}
