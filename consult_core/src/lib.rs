#![forbid(unsafe_code)]

//! Core domain model and advice logic for the fitconsult service.
//!
//! This crate provides:
//! - Domain types (goals, activity levels, consultation requests)
//! - Coercion of loosely typed JSON bodies into typed requests
//! - The metrics calculator (BMI, BMR, TDEE, macro split)
//! - The advice composer (fitness and nutrition reports)
//! - Configuration and logging shared by the binaries

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod input;
pub mod number;
pub mod metrics;
pub mod composer;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use metrics::{MealSplit, Metrics};
pub use composer::{compose, AdviceReport};

/// Run a full consultation: calculate metrics, then compose the report.
pub fn consult(request: &ConsultationRequest) -> AdviceReport {
    let metrics = Metrics::calculate(request);
    tracing::debug!(
        kind = ?request.kind,
        goal = %request.goal.label(),
        tdee = %number::JsNumber(metrics.tdee),
        "Calculated metrics"
    );
    compose(request, &metrics)
}

/// Parse a raw JSON body and run the consultation.
pub fn consult_json(body: &[u8]) -> Result<AdviceReport> {
    let request = ConsultationRequest::from_json_slice(body)?;
    Ok(consult(&request))
}
