use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::util::format::format_track_time;

pub const UNTITLED: &str = "Sin título";
pub const UNKNOWN_ARTIST: &str = "Desconocido";

/// A single record of the catalog search response.
///
/// Only `trackId` is required; every other field may be missing or carry an
/// unexpected type depending on the record kind the catalog returns, and
/// decodes to `None` in that case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub track_id: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub track_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub artist_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub collection_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub artwork_url60: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub artwork_url100: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub track_time_millis: Option<u64>,
}

impl SearchResult {
    pub fn new(track_id: u64) -> Self {
        Self {
            track_id,
            track_name: None,
            artist_name: None,
            collection_name: None,
            artwork_url60: None,
            artwork_url100: None,
            preview_url: None,
            track_time_millis: None,
        }
    }

    /// Preview URL, if present and non-empty.
    pub fn preview(&self) -> Option<&str> {
        self.preview_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn has_preview(&self) -> bool {
        self.preview().is_some()
    }

    pub fn title(&self) -> &str {
        non_empty(self.track_name.as_deref()).unwrap_or(UNTITLED)
    }

    pub fn artist(&self) -> &str {
        non_empty(self.artist_name.as_deref()).unwrap_or(UNKNOWN_ARTIST)
    }

    /// 300x300 artwork derived from the thumbnail locators, preferring the
    /// 100x100 source.
    pub fn artwork(&self) -> Option<String> {
        non_empty(self.artwork_url100.as_deref())
            .map(|url| url.replace("100x100", "300x300"))
            .or_else(|| {
                non_empty(self.artwork_url60.as_deref()).map(|url| url.replace("60x60", "300x300"))
            })
    }

    pub fn duration_label(&self) -> String {
        format_track_time(self.track_time_millis)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
