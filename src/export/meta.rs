//! `meta.json` model for Misskey emoji packs.
//!
//! Fields the generator has no value for are kept and serialised as `null`
//! so importers see the complete schema.

use serde::Serialize;

/// Manifest schema version written by this tool.
pub const META_VERSION: u32 = 1;

/// Top-level `meta.json` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiMeta {
    pub meta_version: u32,
    pub host: Option<String>,
    pub exported_at: Option<String>,
    pub emojis: Vec<EmojiRecord>,
}

/// One exported image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiRecord {
    pub downloaded: bool,
    pub file_name: String,
    pub emoji: EmojiData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiData {
    pub id: Option<String>,
    pub updated_at: Option<String>,
    pub name: String,
    pub host: Option<String>,
    pub category: String,
    pub original_url: Option<String>,
    pub public_url: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub aliases: Vec<String>,
}

impl EmojiMeta {
    pub fn new() -> Self {
        Self {
            meta_version: META_VERSION,
            host: None,
            exported_at: None,
            emojis: Vec::new(),
        }
    }

    /// Record a PNG named `<name>.png` in `category`.
    pub fn push_png(&mut self, name: &str, category: &str) {
        self.emojis.push(EmojiRecord {
            downloaded: true,
            file_name: format!("{}.png", name),
            emoji: EmojiData {
                id: None,
                updated_at: None,
                name: name.to_string(),
                host: None,
                category: category.to_string(),
                original_url: None,
                public_url: None,
                uri: None,
                mime_type: "image/png".to_string(),
                aliases: Vec::new(),
            },
        });
    }
}

impl Default for EmojiMeta {
    fn default() -> Self {
        Self::new()
    }
}
