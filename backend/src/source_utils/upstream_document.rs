//! Fetching and unpacking the static `db.json` document.

use anyhow::Context;
use common::{
    error::FetchError,
    photographer::{Photographer, PhotographerId},
};
use serde_json::Value;

use crate::config::SourceConfig;

/// Downloads the whole upstream document. Failures are [`FetchError`]s
/// wrapped in `anyhow`, so callers can `downcast_ref` to tell an upstream
/// status from an unreachable host.
pub async fn fetch_db_document(config: &SourceConfig) -> anyhow::Result<Value> {
    tracing::info!("Fetching photographers document from {}", config.db_url);
    let client = reqwest::Client::builder()
        .timeout(config.fetch_timeout)
        .build()
        .context("Failed to build http client")?;

    let response = client
        .get(&config.db_url)
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| FetchError::Unreachable(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        tracing::error!("Raw fetch failed: {} {}", status.as_u16(), status.canonical_reason().unwrap_or(""));
        return Err(FetchError::UpstreamStatus { status: status.as_u16() }.into());
    }
    let response_txt = response.text().await.map_err(|e| FetchError::Unreachable(e.to_string()))?;
    let document = serde_json::from_str::<Value>(&response_txt).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(document)
}

/// The raw `photographers` array; anything else yields an empty list.
pub fn raw_photographers(document: &Value) -> Vec<Value> {
    match document.get("photographers") {
        Some(Value::Array(items)) => items.clone(),
        _ => vec![],
    }
}

/// Normalizes raw records. Entries that are not JSON objects are skipped.
pub fn normalize_photographers(raw: Vec<Value>) -> Vec<Photographer> {
    let total = raw.len();
    let records = raw
        .into_iter()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value::<Photographer>(item).ok())
        .collect::<Vec<_>>();
    if records.len() != total {
        tracing::warn!("Skipped {} malformed photographer entries", total - records.len());
    }
    records
}

/// Raw record whose id matches `id`, resolving `id`/`_id` the same way
/// normalization does.
pub fn find_raw_by_id(raw: &[Value], id: &str) -> Option<Value> {
    raw.iter()
        .find(|item| match item {
            Value::Object(record) => PhotographerId::from_record(record).matches(id),
            _ => false,
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_array_is_empty() {
        assert!(raw_photographers(&json!({})).is_empty());
        assert!(raw_photographers(&json!({"photographers": {"id": 1}})).is_empty());
        assert_eq!(raw_photographers(&json!({"photographers": [{"id": 1}]})).len(), 1);
    }

    #[test]
    fn skips_non_objects() {
        let records = normalize_photographers(vec![json!({"id": 1, "name": "Alex"}), json!("oops"), json!(null)]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alex");
    }

    #[test]
    fn records_with_both_id_keys_are_kept() {
        let raw = vec![
            json!({"id": 1, "name": "Alex"}),
            json!({"id": 2, "_id": "m2", "name": "Bhavna"}),
            json!({"_id": "m3", "id": null, "name": "Chitra"}),
        ];
        let records = normalize_photographers(raw.clone());
        let names = records.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Alex", "Bhavna", "Chitra"]);
        assert_eq!(records[2].id.to_string(), "m3");

        assert_eq!(find_raw_by_id(&raw, "2"), Some(raw[1].clone()));
        assert_eq!(find_raw_by_id(&raw, "m2"), None);
        assert_eq!(find_raw_by_id(&raw, "m3"), Some(raw[2].clone()));
    }

    #[test]
    fn whole_float_ids_match_integer_lookups() {
        let raw = vec![json!({"id": 1.0, "name": "Alex"})];
        assert_eq!(find_raw_by_id(&raw, "1"), Some(raw[0].clone()));
        assert_eq!(normalize_photographers(raw)[0].id.to_string(), "1");
    }

    #[test]
    fn id_lookup_accepts_numbers_and_strings() {
        let raw = vec![json!({"id": 1}), json!({"id": "2"}), json!({"_id": 3})];
        assert_eq!(find_raw_by_id(&raw, "1"), Some(json!({"id": 1})));
        assert_eq!(find_raw_by_id(&raw, "2"), Some(json!({"id": "2"})));
        assert_eq!(find_raw_by_id(&raw, "3"), Some(json!({"_id": 3})));
        assert_eq!(find_raw_by_id(&raw, "4"), None);
    }

    #[tokio::test]
    async fn unreachable_source_is_a_fetch_error() {
        let config = SourceConfig { db_url: "http://127.0.0.1:9/db.json".to_string(), ..Default::default() };
        let err = fetch_db_document(&config).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<FetchError>(), Some(FetchError::Unreachable(_))));
    }
}
