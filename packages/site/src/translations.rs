use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A per-locale translation table: a JSON object whose values are strings
/// or nested objects, addressed with dot-notation keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap(Map<String, Value>);

/// Reserved `meta.*` entries used for the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl TranslationMap {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("translation file is not a JSON object")
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => anyhow::bail!("translation root must be an object, got {other}"),
        }
    }

    /// Look up `a.b.c`. Missing keys, non-string leaves and empty strings
    /// all count as "no translation".
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut parts = key.split('.');
        let mut current = self.0.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        current.as_str().filter(|s| !s.is_empty())
    }

    pub fn meta(&self) -> MetaTags<'_> {
        MetaTags {
            title: self.get("meta.title"),
            description: self.get("meta.description"),
        }
    }
}
