// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

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

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
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
            match load_bundle(&locale, String::from_utf8_lossy(content.data.as_ref()).into_owned()) {
                Some(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => tracing::warn!(%filename, "translation file skipped"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
                tracing::warn!(%key, ?errors, "translation formatting failed");
            }
        }
        format!("MISSING: {}", key)
    }
}

fn load_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Dialog text is plain; Unicode isolation marks would show up in it.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
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
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unavailable_cli_lang() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.len() >= 2);
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn dialog_labels_are_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("button-continue"), "Continue");
        assert_eq!(i18n.tr("button-cancel"), "Cancel");

        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(i18n.tr("button-continue"), "Continuer");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = i18n.tr_with_args("confirm-delete-transaction-message", &[("payee", "Grocer")]);
        assert!(text.contains("Grocer"));
        assert!(!text.contains('\u{2068}'));
    }
}
