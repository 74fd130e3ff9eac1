//! What to change on a tagged element or in the document head for a given
//! translation map. The browser layer only executes these patches.

use crate::translations::TranslationMap;

/// Attribute holding the dot-notation key of an element to translate.
pub const KEY_ATTR: &str = "data-i18n";
/// Optional attribute naming the element attribute to overwrite instead of content.
pub const TARGET_ATTR: &str = "data-i18n-attr";
pub const SELECTOR: &str = "[data-i18n]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    Attribute { name: String, value: String },
    /// Inner HTML, so translations may carry inline markup.
    Content(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// `None` means the element is left exactly as it is.
pub fn patch_for(map: &TranslationMap, key: &str, target_attr: Option<&str>) -> Option<Patch> {
    let value = map.get(key)?.to_string();
    match target_attr.map(str::trim).filter(|a| !a.is_empty()) {
        Some(name) => Some(Patch::Attribute {
            name: name.to_string(),
            value,
        }),
        None => Some(Patch::Content(value)),
    }
}

pub fn document_patch(map: &TranslationMap) -> DocumentPatch {
    let meta = map.meta();
    DocumentPatch {
        title: meta.title.map(str::to_string),
        description: meta.description.map(str::to_string),
    }
}
