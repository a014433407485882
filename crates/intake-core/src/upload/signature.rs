use super::{UploadMetadata, UploadRejection, UploadValidator};

/// MIME type reported when no known signature matches the content.
const UNKNOWN_MIME: &str = "application/octet-stream";

/// Sniffs the magic number of the actual bytes and fails when the detected
/// MIME type differs from the declared one. This defeats spoofed filenames
/// and Content-Type headers.
#[derive(Default)]
pub struct SignatureValidator;

impl SignatureValidator {
    pub fn new() -> Self {
        Self
    }
}

impl UploadValidator for SignatureValidator {
    fn name(&self) -> &'static str {
        "signature"
    }

    fn check(&self, metadata: &UploadMetadata, content: &[u8]) -> Result<(), UploadRejection> {
        let detected = infer::get(content)
            .map(|kind| kind.mime_type())
            .unwrap_or(UNKNOWN_MIME);

        if detected != metadata.content_type {
            return Err(UploadRejection::SignatureMismatch {
                detected: detected.to_string(),
                declared: metadata.content_type.clone(),
            });
        }
        Ok(())
    }
}
