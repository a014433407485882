use super::{UploadMetadata, UploadRejection, UploadValidator};

/// Checks the caller-declared content type against the configured allow-list.
/// Comparison is exact; callers are expected to normalize the declared type
/// (lowercase, parameters stripped) before building the payload.
pub struct DeclaredTypeValidator {
    allowed_types: Vec<String>,
}

impl DeclaredTypeValidator {
    pub fn new(allowed_types: Vec<String>) -> Self {
        Self { allowed_types }
    }
}

impl UploadValidator for DeclaredTypeValidator {
    fn name(&self) -> &'static str {
        "declared_type"
    }

    fn check(&self, metadata: &UploadMetadata, _content: &[u8]) -> Result<(), UploadRejection> {
        if !self
            .allowed_types
            .iter()
            .any(|allowed| allowed == &metadata.content_type)
        {
            return Err(UploadRejection::TypeNotAllowed {
                declared: metadata.content_type.clone(),
                allowed: self.allowed_types.clone(),
            });
        }
        Ok(())
    }
}
