use std::collections::HashMap;

use axum::http::{HeaderMap, header};

/// Locale used when no requested locale has a translation.
const DEFAULT_LOCALE: &str = "en";

/// Bundles are embedded at compile time and parsed once at startup.
const BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("pt-BR", include_str!("../locales/pt-BR.json")),
];

/// Locale-keyed message lookup: `(code, locale) -> message`.
#[derive(Debug)]
pub struct MessageCatalog {
    bundles: HashMap<String, HashMap<String, String>>,
    default_locale: String,
}

impl MessageCatalog {
    pub fn load() -> Self {
        let bundles = BUNDLES
            .iter()
            .map(|(locale, raw)| {
                let messages: HashMap<String, String> = serde_json::from_str(raw)
                    .unwrap_or_else(|e| panic!("locale bundle {locale} is not valid JSON: {e}"));
                (locale.to_ascii_lowercase(), messages)
            })
            .collect();

        Self {
            bundles,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Resolve a message for `code`, trying each requested locale in order:
    /// the exact tag first, then its primary language subtag. Falls back to
    /// the default locale, and to the code itself for unknown codes.
    pub fn resolve(&self, code: &str, requested: &[String]) -> String {
        for tag in requested {
            let tag = tag.to_ascii_lowercase();

            if let Some(message) = self.lookup(&tag, code) {
                return message;
            }
            if let Some((language, _)) = tag.split_once('-') {
                if let Some(message) = self.lookup(language, code) {
                    return message;
                }
            }
        }

        self.lookup(&self.default_locale, code)
            .unwrap_or_else(|| code.to_string())
    }

    fn lookup(&self, locale: &str, code: &str) -> Option<String> {
        self.bundles.get(locale)?.get(code).cloned()
    }
}

/// Locales requested by the caller, best first, per `Accept-Language`.
pub fn requested_locales(headers: &HeaderMap) -> Vec<String> {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(parse_accept_language)
        .unwrap_or_default()
}

fn parse_accept_language(value: &str) -> Vec<String> {
    let mut tags: Vec<(String, f32)> = value
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .find_map(|piece| piece.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((tag.to_string(), quality))
        })
        .collect();

    // Stable sort keeps header order for equal qualities.
    tags.sort_by(|a, b| b.1.total_cmp(&a.1));
    tags.into_iter().map(|(tag, _)| tag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn resolves_exact_locale() {
        let catalog = MessageCatalog::load();

        let message = catalog.resolve("error.post.notFound", &locales(&["pt-BR"]));

        assert_eq!(message, "Post não encontrado.");
    }

    #[test]
    fn falls_back_to_primary_language_subtag() {
        let catalog = MessageCatalog::load();

        let message = catalog.resolve("error.post.notFound", &locales(&["en-GB"]));

        assert_eq!(message, "Post not found.");
    }

    #[test]
    fn falls_back_to_default_locale_for_unknown_locales() {
        let catalog = MessageCatalog::load();

        let message = catalog.resolve("error.post.title.required", &locales(&["fr-FR", "de"]));

        assert_eq!(message, "Post title is required.");
    }

    #[test]
    fn falls_back_to_default_locale_when_nothing_is_requested() {
        let catalog = MessageCatalog::load();

        let message = catalog.resolve("error.post.notFound", &[]);

        assert_eq!(message, "Post not found.");
    }

    #[test]
    fn unknown_codes_degrade_to_the_code_itself() {
        let catalog = MessageCatalog::load();

        let message = catalog.resolve("error.unknown.key", &[]);

        assert_eq!(message, "error.unknown.key");
    }

    #[test]
    fn accept_language_is_ordered_by_quality() {
        let parsed = parse_accept_language("en;q=0.8, pt-BR, *;q=0.1");

        assert_eq!(parsed, locales(&["pt-BR", "en"]));
    }

    #[test]
    fn accept_language_defaults_missing_quality_to_one() {
        let parsed = parse_accept_language("fr;q=0.5,de");

        assert_eq!(parsed, locales(&["de", "fr"]));
    }
}
