//! `listAll` / `getById` over the upstream document.

use common::photographer::Photographer;

use crate::config::SourceConfig;
use crate::source_utils::upstream_document::{fetch_db_document, find_raw_by_id, normalize_photographers, raw_photographers};

/// All photographers, optionally narrowed by the legacy server-side `q`
/// filter (plain lowercase substring over the concatenated text fields).
pub async fn list_photographers(q: Option<String>) -> anyhow::Result<Vec<Photographer>> {
    let config = SourceConfig::from_env();
    let document = fetch_db_document(&config).await?;
    let records = normalize_photographers(raw_photographers(&document));
    tracing::info!("Loaded {} photographers", records.len());
    Ok(match q {
        Some(q) => legacy_query_filter(records, &q),
        None => records,
    })
}

pub async fn get_photographer_by_id(id: String) -> anyhow::Result<Option<Photographer>> {
    let config = SourceConfig::from_env();
    let document = fetch_db_document(&config).await?;
    let raw = raw_photographers(&document);
    let Some(found) = find_raw_by_id(&raw, id.trim()) else {
        tracing::info!("Photographer {id} not found");
        return Ok(None);
    };
    Ok(normalize_photographers(vec![found]).into_iter().next())
}

pub fn legacy_query_filter(records: Vec<Photographer>, q: &str) -> Vec<Photographer> {
    let q = q.to_lowercase();
    if q.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|p| {
            let haystack = format!("{}{}{}{}{}", p.name, p.bio, p.location, p.tags.join(" "), p.styles.join(" "));
            haystack.to_lowercase().contains(&q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, location: &str) -> Photographer {
        Photographer { name: name.into(), location: location.into(), ..Default::default() }
    }

    #[test]
    fn legacy_filter_is_plain_substring() {
        let records = vec![named("Alex Rao", "Mumbai"), named("Bhavna", "Delhi")];
        let names = |v: Vec<Photographer>| v.into_iter().map(|p| p.name).collect::<Vec<_>>();
        assert_eq!(names(legacy_query_filter(records.clone(), "DEL")), vec!["Bhavna"]);
        // no subsequence fallback on the server side
        assert!(legacy_query_filter(records.clone(), "axr").is_empty());
        assert_eq!(legacy_query_filter(records, "").len(), 2);
    }
}
