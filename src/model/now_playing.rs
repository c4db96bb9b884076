use super::track::SearchResult;

/// Display metadata and preview locator of the selected track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTrack {
    pub url: String,
    pub name: String,
    pub artist: String,
    pub artwork: Option<String>,
    pub collection_name: Option<String>,
    pub track_id: u64,
}

impl CurrentTrack {
    /// Returns `None` when the item carries no preview.
    pub fn from_result(item: &SearchResult) -> Option<Self> {
        let url = item.preview()?;

        Some(Self {
            url: url.to_string(),
            name: item.title().to_string(),
            artist: item.artist().to_string(),
            artwork: item.artwork(),
            collection_name: item.collection_name.clone(),
            track_id: item.track_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::track::{UNKNOWN_ARTIST, UNTITLED};

    #[test]
    fn requires_preview() {
        assert_eq!(CurrentTrack::from_result(&SearchResult::new(3)), None);
    }

    #[test]
    fn fills_placeholders() {
        let mut item = SearchResult::new(3);
        item.preview_url = Some("https://audio/preview.m4a".into());
        item.artwork_url100 = Some("https://img/100x100bb.jpg".into());
        item.collection_name = Some("Lemonade".into());

        let track = CurrentTrack::from_result(&item).unwrap();
        assert_eq!(track.url, "https://audio/preview.m4a");
        assert_eq!(track.name, UNTITLED);
        assert_eq!(track.artist, UNKNOWN_ARTIST);
        assert_eq!(track.artwork.as_deref(), Some("https://img/300x300bb.jpg"));
        assert_eq!(track.collection_name.as_deref(), Some("Lemonade"));
        assert_eq!(track.track_id, 3);
    }
}
