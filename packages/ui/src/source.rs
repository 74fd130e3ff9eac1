use anyhow::{Context, Result};
use async_trait::async_trait;
use site::{Locale, TranslationMap, TranslationSource};

/// Page used to resolve relative translation paths when there is no window.
const FALLBACK_BASE: &str = "http://localhost/";

/// Fetches `<path>/<code>.json` relative to the current page.
pub struct HttpSource {
    client: reqwest::Client,
    base_href: String,
    path: String,
}

impl HttpSource {
    pub fn new(base_href: Option<String>, path: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_href: base_href.unwrap_or_else(|| FALLBACK_BASE.to_string()),
            path: path.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl TranslationSource for HttpSource {
    async fn fetch(&self, locale: Locale) -> Result<TranslationMap> {
        let url = site::url::translation_url(&self.base_href, &self.path, locale)?;
        tracing::debug!("i18n: GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request for {url} failed"))?;
        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to load translations for {locale}: HTTP {}",
                response.status()
            );
        }

        response
            .json::<TranslationMap>()
            .await
            .with_context(|| format!("{url} is not a translation file"))
    }
}
