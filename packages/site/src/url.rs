use crate::locale::Locale;
use anyhow::{Context, Result};
use url::Url;

/// Value of the first `name` query parameter of `href`.
pub fn query_param(href: &str, name: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

/// Set `name=value` like `URLSearchParams.set`: the first occurrence is
/// replaced in place, later duplicates dropped, otherwise appended.
pub fn with_query_param(href: &str, name: &str, value: &str) -> Result<String> {
    let mut url = Url::parse(href).with_context(|| format!("invalid page url {href:?}"))?;

    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in url.query_pairs() {
        if k == name {
            if !replaced {
                pairs.push((name.to_string(), value.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
    Ok(url.to_string())
}

/// `<path>/<code>.json`, resolved against the page URL.
pub fn translation_url(base_href: &str, path: &str, locale: Locale) -> Result<Url> {
    let base = Url::parse(base_href).with_context(|| format!("invalid page url {base_href:?}"))?;
    let relative = format!("{}/{}.json", path.trim_end_matches('/'), locale.code());
    base.join(&relative)
        .with_context(|| format!("invalid translations path {relative:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_query_param() {
        assert_eq!(
            query_param("https://foody.example/fr?lang=fr&x=1", "lang").as_deref(),
            Some("fr")
        );
        assert_eq!(query_param("https://foody.example/", "lang"), None);
        assert_eq!(query_param("not a url", "lang"), None);
    }

    #[test]
    fn sets_query_param_preserving_others() {
        let out = with_query_param("https://foody.example/en?a=1&lang=fr&b=2#pricing", "lang", "en").unwrap();
        assert_eq!(out, "https://foody.example/en?a=1&lang=en&b=2#pricing");
    }

    #[test]
    fn appends_when_missing_and_drops_duplicates() {
        let out = with_query_param("https://foody.example/", "lang", "fr").unwrap();
        assert_eq!(out, "https://foody.example/?lang=fr");

        let out = with_query_param("https://foody.example/?lang=de&lang=it", "lang", "en").unwrap();
        assert_eq!(out, "https://foody.example/?lang=en");
    }

    #[test]
    fn translation_url_resolves_against_page() {
        let url = translation_url("https://foody.example/fr?lang=fr", "/assets/i18n", Locale::Fr).unwrap();
        assert_eq!(url.as_str(), "https://foody.example/assets/i18n/fr.json");

        let url = translation_url("https://foody.example/site/en", "./assets/i18n/", Locale::En).unwrap();
        assert_eq!(url.as_str(), "https://foody.example/site/assets/i18n/en.json");
    }
}
