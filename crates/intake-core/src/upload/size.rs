use super::{UploadMetadata, UploadRejection, UploadValidator};

/// Rejects payloads larger than the configured byte limit. A payload of
/// exactly the limit passes.
pub struct FileSizeValidator {
    max_size_bytes: usize,
}

impl FileSizeValidator {
    pub fn new(max_size_bytes: usize) -> Self {
        Self { max_size_bytes }
    }
}

impl UploadValidator for FileSizeValidator {
    fn name(&self) -> &'static str {
        "file_size"
    }

    fn check(&self, _metadata: &UploadMetadata, content: &[u8]) -> Result<(), UploadRejection> {
        if content.len() > self.max_size_bytes {
            return Err(UploadRejection::TooLarge {
                max_size_bytes: self.max_size_bytes,
            });
        }
        Ok(())
    }
}
