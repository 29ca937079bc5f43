//! Client API calls for the photographer directory.

use common::{inquiry::{InquiryOutcome, InquiryRequest}, photographer::Photographer};
use dioxus::prelude::*;


#[server]
pub async fn list_photographers(q: Option<String>) -> Result<Vec<Photographer>, ServerFnError> {
    let x = backend::api::list_photographers(q).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_photographer(id: String) -> Result<Option<Photographer>, ServerFnError> {
    let x = backend::api::get_photographer_by_id(id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn submit_inquiry(request: InquiryRequest) -> Result<InquiryOutcome, ServerFnError> {
    let x = backend::api::submit_inquiry(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
