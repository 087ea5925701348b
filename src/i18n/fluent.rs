// SPDX-License-Identifier: MPL-2.0
//! Fluent-based translation loading and lookup.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation store holding one Fluent bundle per embedded locale.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` resource and resolves the startup locale
    /// from the CLI override, the config file, or the OS, in that order.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let (bundles, available_locales) = load_embedded_bundles();

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .expect("default locale identifier must parse");
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches to `locale` if a bundle for it was embedded; otherwise keeps
    /// the current locale.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Returns the locale translations currently resolve against.
    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Looks up `key` in the current locale's bundle.
    ///
    /// Missing keys come back as a visible `MISSING:` marker rather than an
    /// error, so untranslated strings surface during development instead of
    /// crashing the UI.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

type Bundles = HashMap<LanguageIdentifier, FluentBundle<FluentResource>>;

fn load_embedded_bundles() -> (Bundles, Vec<LanguageIdentifier>) {
    let mut bundles = HashMap::new();
    let mut available_locales = Vec::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(locale_str) = filename.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };
        if let Some(content) = Asset::get(filename) {
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let res = FluentResource::try_new(source).expect("embedded FTL file must parse");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle
                .add_resource(res)
                .expect("embedded FTL resource must not conflict");
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
    }

    (bundles, available_locales)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI override
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn locales(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|tag| tag.parse().unwrap()).collect()
    }

    #[test]
    fn resolve_locale_prefers_cli_over_config() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let available = locales(&["en-US", "fr"]);

        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let available = locales(&["en-US", "fr"]);

        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_cli_language() {
        let config = Config::default();
        let available = locales(&["en-US"]);

        let lang = resolve_locale(Some("de".to_string()), &config, &available);
        // "de" is not embedded; resolution continues down the chain, which is
        // system dependent, so only assert the result is something available.
        if let Some(l) = lang {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn embedded_locales_include_the_default() {
        let i18n = I18n::default();
        assert!(i18n
            .available_locales
            .contains(&"en-US".parse::<LanguageIdentifier>().unwrap()));
    }

    #[test]
    fn tr_returns_missing_marker_for_unknown_key() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("definitely-not-a-real-key"),
            "MISSING: definitely-not-a-real-key"
        );
    }

    #[test]
    fn set_locale_rejects_unavailable_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let before = i18n.current_locale().clone();

        i18n.set_locale("zh-CN".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn alert_strings_are_translated() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("alert-fallback-message"), "Try again later.");
        assert_eq!(i18n.tr("alert-dismiss"), "OK");

        i18n.set_locale("fr".parse().unwrap());
        assert_ne!(i18n.tr("alert-fallback-message"), "Try again later.");
    }
}
