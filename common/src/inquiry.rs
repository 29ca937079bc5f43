//! Inquiry form sent from a photographer's profile page.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::photographer::PhotographerId;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation messages; a `None` field is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InquiryErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl InquiryErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl InquiryForm {
    pub fn validate(&self) -> InquiryErrors {
        let mut errors = InquiryErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !EMAIL_SHAPE.is_match(&self.email) {
            errors.email = Some("Invalid email".to_string());
        }
        if self.message.trim().is_empty() {
            errors.message = Some("Message is required".to_string());
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryRequest {
    pub photographer_id: PhotographerId,
    pub form: InquiryForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InquiryOutcome {
    Sent,
    Rejected(InquiryErrors),
}
