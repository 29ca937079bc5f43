//! Raw JSON pass-through: `GET /api/photographers[?id=..]`.

use axum::{Json, extract::Query, http::StatusCode, response::{IntoResponse, Response}};
use common::error::FetchError;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::SourceConfig;
use crate::source_utils::upstream_document::{fetch_db_document, find_raw_by_id, raw_photographers};

#[derive(Debug, Deserialize, Default)]
pub struct PhotographersJsonParams {
    pub id: Option<String>,
}

async fn _photographers_json(params: &PhotographersJsonParams) -> anyhow::Result<Value> {
    let config = SourceConfig::from_env();
    let document = fetch_db_document(&config).await?;
    let raw = raw_photographers(&document);
    Ok(select_records(raw, params.id.as_deref()))
}

/// The whole array, or the single matching record (`null` when absent).
fn select_records(raw: Vec<Value>, id: Option<&str>) -> Value {
    match id.filter(|id| !id.is_empty()) {
        Some(id) => find_raw_by_id(&raw, id).unwrap_or(Value::Null),
        None => Value::Array(raw),
    }
}

fn error_response(e: &anyhow::Error) -> Response {
    match e.downcast_ref::<FetchError>() {
        Some(FetchError::UpstreamStatus { status }) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": "Failed to fetch DB from GitHub", "status": status})),
        )
            .into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "Server error"}))).into_response(),
    }
}

pub async fn photographers_json(Query(params): Query<PhotographersJsonParams>) -> Response {
    match _photographers_json(&params).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::error!("photographers_json: request failed: {:#?}", e);
            error_response(&e)
        }
    }
}
