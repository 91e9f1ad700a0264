use crate::config::ToastConfig;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Locales;

const FALLBACK_LOCALE: &str = "en-US";

/// Resolver for the crate's user-facing strings.
///
/// Bundles are built once from the embedded `.ftl` resources; the active
/// locale is picked from, in order: an explicit override from the host
/// application, the `language` field of the settings, the OS locale. When
/// none of those names a shipped locale, `en-US` applies.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available: Vec<LanguageIdentifier>,
    current: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &ToastConfig::default())
    }
}

impl I18n {
    pub fn new(explicit_lang: Option<String>, config: &ToastConfig) -> Self {
        let bundles = load_bundles();
        let mut available: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available.sort_by_key(ToString::to_string);

        let fallback: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();
        let current = resolve_locale(explicit_lang, config, &available).unwrap_or(fallback);

        Self {
            bundles,
            available,
            current,
        }
    }

    /// Switches to `locale` if it is shipped; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current
    }

    /// The locales shipped with the crate, in stable order.
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available
    }

    /// Translates `key` in the active locale.
    ///
    /// An unknown key yields a `MISSING:` sentinel rather than an error, so
    /// a missed translation shows up on screen instead of crashing.
    pub fn tr(&self, key: &str) -> String {
        self.bundles
            .get(&self.current)
            .and_then(|bundle| {
                let pattern = bundle.get_message(key)?.value()?;
                let mut errors = Vec::new();
                let value = bundle.format_pattern(pattern, None, &mut errors);
                errors.is_empty().then(|| value.to_string())
            })
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }
}

fn load_bundles() -> HashMap<LanguageIdentifier, FluentBundle<FluentResource>> {
    let mut bundles = HashMap::new();
    for file in Locales::iter() {
        let Some(locale) = file
            .as_ref()
            .strip_suffix(".ftl")
            .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
        else {
            continue;
        };
        let Some(content) = Locales::get(file.as_ref()) else {
            continue;
        };
        let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
        let resource =
            FluentResource::try_new(source).expect("embedded FTL resource failed to parse");
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle
            .add_resource(resource)
            .expect("embedded FTL resource has conflicting messages");
        bundles.insert(locale, bundle);
    }
    bundles
}

/// First candidate that parses and names a shipped locale wins.
fn resolve_locale(
    explicit_lang: Option<String>,
    config: &ToastConfig,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        explicit_lang,
        config.language.clone(),
        sys_locale::get_locale(),
    ];
    candidates.into_iter().flatten().find_map(|raw| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use unic_langid::LanguageIdentifier;

    #[test]
    fn explicit_override_beats_config_language() {
        let config = ToastConfig {
            language: Some("en-US".to_string()),
            ..ToastConfig::default()
        };
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "es".parse().unwrap()];
        let lang = resolve_locale(Some("es".to_string()), &config, &available);
        assert_eq!(lang, Some("es".parse().unwrap()));
    }

    #[test]
    fn config_language_applies_without_override() {
        let config = ToastConfig {
            language: Some("es".to_string()),
            ..ToastConfig::default()
        };
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "es".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("es".parse().unwrap()));
    }

    #[test]
    fn unavailable_config_language_falls_through() {
        let config = ToastConfig {
            language: Some("tlh".to_string()),
            ..ToastConfig::default()
        };
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];
        // Klingon is not shipped; resolution may still pick the OS locale,
        // but never the unavailable requested one.
        if let Some(l) = resolve_locale(None, &config, &available) {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn tr_resolves_shipped_spanish_strings() {
        let i18n = I18n::new(Some("es".to_string()), &ToastConfig::default());
        assert_eq!(i18n.current_locale().to_string(), "es");
        assert_eq!(i18n.tr("notification-title-success"), "Éxito");
        assert_eq!(i18n.tr("notification-title-warning"), "Advertencia");
    }

    #[test]
    fn tr_falls_back_to_missing_sentinel() {
        let i18n = I18n::new(Some("en-US".to_string()), &ToastConfig::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn set_locale_ignores_unavailable_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &ToastConfig::default());
        i18n.set_locale("tlh".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn both_shipped_locales_are_listed() {
        let i18n = I18n::default();
        let listed: Vec<String> = i18n
            .available_locales()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(listed, vec!["en-US", "es"]);
    }
}
