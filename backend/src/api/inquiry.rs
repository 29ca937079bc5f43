//! Stubbed inquiry delivery: validates, waits, reports success.

use common::inquiry::{InquiryOutcome, InquiryRequest};

use crate::config::SourceConfig;

pub async fn submit_inquiry(request: InquiryRequest) -> anyhow::Result<InquiryOutcome> {
    let errors = request.form.validate();
    if !errors.is_empty() {
        tracing::info!("Inquiry for photographer {} rejected by validation", request.photographer_id);
        return Ok(InquiryOutcome::Rejected(errors));
    }
    let config = SourceConfig::from_env();
    tokio::time::sleep(config.inquiry_delay).await;
    tracing::info!("Inquiry for photographer {} accepted (not delivered)", request.photographer_id);
    Ok(InquiryOutcome::Sent)
}
