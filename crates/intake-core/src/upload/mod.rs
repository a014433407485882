//! Document upload validation chain.
//!
//! Every uploaded document passes through an ordered list of validators before
//! it is trusted and stored. Each stage contributes a single pass/fail verdict;
//! the chain stops at the first failure and reports that stage's reason, so
//! later stages never see a payload an earlier stage already rejected. Stage
//! order is fixed at construction time.

mod declared_type;
mod signature;
mod size;

pub use declared_type::DeclaredTypeValidator;
pub use signature::SignatureValidator;
pub use size::FileSizeValidator;

pub const BYTES_PER_MB: usize = 1024 * 1024;

/// Caller-declared facts about an uploaded file.
#[derive(Debug, Clone)]
pub struct UploadMetadata {
    pub filename: String,
    /// Normalized MIME type (lowercase, no parameters).
    pub content_type: String,
}

/// An uploaded file held in memory while it is validated.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub metadata: UploadMetadata,
    pub content: Vec<u8>,
}

fn max_size_mb(max_size_bytes: &usize) -> f64 {
    *max_size_bytes as f64 / BYTES_PER_MB as f64
}

/// Why an uploaded document was refused. The `Display` text is the reason
/// reported back to the caller, so wording changes are API changes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadRejection {
    #[error("File exceeds maximum size of {:.1}MB", max_size_mb(.max_size_bytes))]
    TooLarge { max_size_bytes: usize },

    #[error("Invalid file type: {declared}. Allowed types: {}", .allowed.join(", "))]
    TypeNotAllowed {
        declared: String,
        allowed: Vec<String>,
    },

    #[error("File content ({detected}) doesn't match declared type ({declared})")]
    SignatureMismatch { detected: String, declared: String },
}

/// A single validation stage.
pub trait UploadValidator: Send + Sync {
    /// Short stage name used in logs.
    fn name(&self) -> &'static str;

    /// Check one payload. Stages are stateless between calls.
    fn check(&self, metadata: &UploadMetadata, content: &[u8]) -> Result<(), UploadRejection>;
}

/// Ordered list of validation stages with first-failure short-circuit.
pub struct ValidationChain {
    stages: Vec<Box<dyn UploadValidator>>,
}

impl ValidationChain {
    pub fn new(stages: Vec<Box<dyn UploadValidator>>) -> Self {
        Self { stages }
    }

    /// Run every stage in order. Returns the first rejection, or `Ok` when
    /// all stages pass (an empty chain passes everything).
    pub fn validate(&self, payload: &UploadPayload) -> Result<(), UploadRejection> {
        for stage in &self.stages {
            if let Err(rejection) = stage.check(&payload.metadata, &payload.content) {
                tracing::debug!(
                    stage = stage.name(),
                    filename = %payload.metadata.filename,
                    reason = %rejection,
                    "Upload rejected"
                );
                return Err(rejection);
            }
        }
        Ok(())
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

/// Build the chain applied to document photo uploads: cheapest checks first,
/// content signature sniffing last.
pub fn document_chain(max_size_bytes: usize, allowed_types: Vec<String>) -> ValidationChain {
    ValidationChain::new(vec![
        Box::new(FileSizeValidator::new(max_size_bytes)),
        Box::new(DeclaredTypeValidator::new(allowed_types)),
        Box::new(SignatureValidator::new()),
    ])
}
