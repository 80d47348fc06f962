// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the translation catalog from embedded `.ftl` assets.
    ///
    /// When `i18n_dir` points at a directory of `.ftl` files, those files are
    /// loaded instead of the embedded catalog. Locale resolution order is
    /// CLI argument, then config file, then OS locale, then `en-US`.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        let disk_sources = i18n_dir.as_deref().map(collect_disk_sources);
        match disk_sources {
            Some(sources) if !sources.is_empty() => {
                for (locale, content) in sources {
                    add_bundle(&mut bundles, &mut available_locales, locale, content);
                }
            }
            _ => {
                for file in Asset::iter() {
                    let filename = file.as_ref();
                    if let Some(locale_str) = filename.strip_suffix(".ftl") {
                        if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                            if let Some(content) = Asset::get(filename) {
                                let text =
                                    String::from_utf8_lossy(content.data.as_ref()).to_string();
                                add_bundle(&mut bundles, &mut available_locales, locale, text);
                            }
                        }
                    }
                }
            }
        }

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

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

    /// Like [`tr`](Self::tr), but substitutes named arguments into the message.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut fluent_args = FluentArgs::new();
                    for (name, value) in args {
                        fluent_args.set(*name, FluentValue::from(*value));
                    }
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, Some(&fluent_args), &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn add_bundle(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
    locale: LanguageIdentifier,
    content: String,
) {
    let Ok(res) = FluentResource::try_new(content) else {
        return;
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    if bundle.add_resource(res).is_ok() {
        bundles.insert(locale.clone(), bundle);
        available_locales.push(locale);
    }
}

/// Reads every `<locale>.ftl` file directly under `dir`.
fn collect_disk_sources(dir: &str) -> Vec<(LanguageIdentifier, String)> {
    let mut sources = Vec::new();
    let Ok(entries) = std::fs::read_dir(Path::new(dir)) else {
        return sources;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.extension().and_then(|e| e.to_str()) != Some("ftl") {
            continue;
        }
        let Ok(locale) = stem.parse::<LanguageIdentifier>() else {
            continue;
        };
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((locale, content));
        }
    }
    sources
}

/// First loadable locale out of: CLI flag, config file, OS setting.
/// A source naming a locale with no catalog is skipped, not an error.
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
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|locale| available.contains(locale))
}
