// SPDX-License-Identifier: MPL-2.0
use crate::app::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the active locale.
    ///
    /// Resolution order: `cli_lang`, then `config.general.language`, then the
    /// OS locale, then `en-US`.
    #[must_use]
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(file = filename, count = errors.len(), "FTL parse errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks would leak into plain-text widgets.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, count = errors.len(), "duplicate FTL messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Returns the translation of `key`, or `MISSING: key`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Returns the translation of `key` with Fluent variables substituted.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            // Numeric values go through Fluent's number formatting and plurals.
            match value.parse::<f64>() {
                Ok(number) => fluent_args.set(*name, FluentValue::from(number)),
                Err(_) => fluent_args.set(*name, FluentValue::from(*value)),
            }
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let formatted = self.bundles.get(&self.current_locale).and_then(|bundle| {
            let pattern = bundle.get_message(key)?.value()?;
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            errors.is_empty().then(|| value.to_string())
        });
        formatted.unwrap_or_else(|| format!("MISSING: {}", key))
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

/// Picks the first candidate that is available, matching on language alone
/// when the exact region is missing (`fr-CA` → `fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.general.language.clone(), os_locale]
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| match_available(&wanted, available))
}

fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|candidate| *candidate == wanted)
        .or_else(|| {
            available
                .iter()
                .find(|candidate| candidate.language == wanted.language)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, Some("en-US".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_matches_language_without_region() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, Some("fr-CA".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unknown_candidates() {
        let config = Config::default();
        let lang = resolve_locale(Some("de".into()), &config, Some("xx".into()), &available());
        assert_eq!(lang, None);
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.len() >= 2);
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn translates_plain_messages() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("gallery-filter-label"), "Filter:");
        assert_eq!(i18n.tr("gallery-loading"), "Analyzing EXIF metadata...");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn formats_arguments() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("gallery-tile-placeholder", &[("id", "3")]),
            "Photo 3"
        );
        assert_eq!(
            i18n.tr_with_args("theme-toggle-tooltip", &[("current", "light"), ("next", "dark")]),
            "Theme: light. Click to switch to dark"
        );
    }

    #[test]
    fn set_locale_switches_bundles() {
        let mut i18n = I18n::new(Some("en-US".into()), &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.tr("gallery-filter-label"), "Filtre :");
        i18n.set_locale("de".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }
}
