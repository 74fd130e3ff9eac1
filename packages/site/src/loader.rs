use crate::locale::Locale;
use crate::translations::TranslationMap;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for translation resource implementations
#[async_trait(?Send)]
pub trait TranslationSource {
    async fn fetch(&self, locale: Locale) -> Result<TranslationMap>;
}

/// A map that was loaded, and the locale whose file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub locale: Locale,
    pub map: TranslationMap,
}

/// Fetch `locale`, falling back once to English. Returns `None` only when
/// English is unavailable too; the caller then keeps what it already shows.
pub async fn load_with_fallback<S>(source: &S, locale: Locale) -> Option<Loaded>
where
    S: TranslationSource + ?Sized,
{
    match source.fetch(locale).await {
        Ok(map) => {
            tracing::debug!("i18n: loaded translations for {locale}");
            return Some(Loaded { locale, map });
        }
        Err(err) if locale != Locale::En => {
            tracing::warn!("i18n: loading {locale} failed, falling back to en: {err:#}");
        }
        Err(err) => {
            tracing::error!("i18n: loading en failed: {err:#}");
            return None;
        }
    }

    match source.fetch(Locale::En).await {
        Ok(map) => Some(Loaded {
            locale: Locale::En,
            map,
        }),
        Err(err) => {
            tracing::error!("i18n: fallback to en failed: {err:#}");
            None
        }
    }
}

/// Source backed by maps already in memory. Locales without a map fail
/// like a missing file would.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    maps: HashMap<Locale, TranslationMap>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(pairs: &[(Locale, &str)]) -> Result<Self> {
        let mut source = Self::new();
        for (locale, text) in pairs {
            source.maps.insert(*locale, TranslationMap::from_json(text)?);
        }
        Ok(source)
    }
}

#[async_trait(?Send)]
impl TranslationSource for StaticSource {
    async fn fetch(&self, locale: Locale) -> Result<TranslationMap> {
        self.maps
            .get(&locale)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Failed to load translations for {locale}"))
    }
}
