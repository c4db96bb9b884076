use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::track::SearchResult;

/// Body of the catalog search endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

impl SearchResponse {
    /// Records in response order. Entries without a usable `trackId` are
    /// dropped, a missing `results` field yields no records. Any other
    /// malformed field only blanks that field.
    pub fn into_results(self) -> Vec<SearchResult> {
        let declared = self.result_count;
        let results: Vec<SearchResult> = self
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<SearchResult>(value) {
                Ok(result) => Some(result),
                Err(e) => {
                    debug!(error = %e, "Skipping catalog record");
                    None
                }
            })
            .collect();

        if let Some(declared) = declared
            && declared != results.len() as u64
        {
            debug!(declared, decoded = results.len(), "Result count mismatch");
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: Value) -> Vec<SearchResult> {
        serde_json::from_value::<SearchResponse>(body)
            .unwrap()
            .into_results()
    }

    #[test]
    fn missing_or_null_results_are_empty() {
        assert!(parse(serde_json::json!({})).is_empty());
        assert!(parse(serde_json::json!({ "results": null })).is_empty());
        assert!(parse(serde_json::json!({ "resultCount": 0, "results": [] })).is_empty());
    }

    #[test]
    fn keeps_order_and_skips_records_without_id() {
        let results = parse(serde_json::json!({
            "resultCount": 3,
            "results": [
                { "trackId": 3, "trackName": "c" },
                { "wrapperType": "collection", "collectionId": 99 },
                { "trackId": 1, "trackName": "a" }
            ]
        }));

        let ids: Vec<u64> = results.iter().map(|r| r.track_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn mistyped_fields_keep_the_record() {
        let results = parse(serde_json::json!({
            "resultCount": 2,
            "results": [
                { "trackId": 5, "trackTimeMillis": 1.5, "previewUrl": false },
                { "trackId": "not-a-number" }
            ]
        }));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].track_id, 5);
        assert!(!results[0].has_preview());
    }
}
