//! Application layer - use-case orchestration on top of the domain.

mod assessment_service;

pub use assessment_service::{AssessmentService, SubmitError};
