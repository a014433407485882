//! Common utilities for the multipart registration form

use axum::extract::Multipart;
use intake_core::{AppError, RegisterPatient, UploadMetadata, UploadPayload};

/// Extracted registration submission: the text fields plus the document upload.
#[derive(Debug)]
pub struct RegistrationForm {
    pub patient: RegisterPatient,
    pub document: UploadPayload,
}

/// Extract the registration fields and document photo from a multipart form.
///
/// Expects text fields `name`, `email`, and `phone_number` plus exactly one
/// file field named `document_photo`. Unknown fields are ignored; a repeated
/// document field is rejected.
pub async fn extract_registration_form(
    mut multipart: Multipart,
) -> Result<RegistrationForm, AppError> {
    let mut name: Option<String> = None;
    let mut email: Option<String> = None;
    let mut phone_number: Option<String> = None;
    let mut document: Option<UploadPayload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "name" => {
                name = Some(read_text_field(field, "name").await?);
            }
            "email" => {
                email = Some(read_text_field(field, "email").await?);
            }
            "phone_number" => {
                phone_number = Some(read_text_field(field, "phone_number").await?);
            }
            "document_photo" => {
                if document.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple document fields are not allowed; send exactly one field named 'document_photo'".to_string(),
                    ));
                }
                let filename = field.file_name().map(|s: &str| s.to_string());
                let content_type = field.content_type().map(|s: &str| s.to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                let original_filename = filename.unwrap_or_else(|| "unknown".to_string());
                let content_type =
                    content_type.unwrap_or_else(|| "application/octet-stream".to_string());

                document = Some(UploadPayload {
                    metadata: UploadMetadata {
                        filename: sanitize_filename(&original_filename)?,
                        content_type: normalize_mime_type(&content_type).to_lowercase(),
                    },
                    content: data.to_vec(),
                });
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| missing_field("name"))?;
    let email = email.ok_or_else(|| missing_field("email"))?;
    let phone_number = phone_number.ok_or_else(|| missing_field("phone_number"))?;
    let document =
        document.ok_or_else(|| AppError::InvalidInput("No document photo provided".to_string()))?;

    Ok(RegistrationForm {
        patient: RegisterPatient {
            name,
            email,
            phone_number,
        },
        document,
    })
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    field_name: &str,
) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read field '{}': {}", field_name, e)))
}

fn missing_field(field_name: &str) -> AppError {
    AppError::InvalidInput(format!("Missing required field: {}", field_name))
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
pub fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Sanitize filename to prevent path traversal and invalid characters.
/// Returns an error if the filename contains path traversal attempts.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    if filename.contains("..") {
        return Err(AppError::InvalidInput(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() || sanitized.len() < 3 {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_filename_rejects_path_traversal() {
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("foo/../bar").is_err());
        assert!(sanitize_filename("....").is_err());
    }

    #[test]
    fn sanitize_filename_accepts_valid_names() {
        assert_eq!(sanitize_filename("passport.png").unwrap(), "passport.png");
        assert_eq!(sanitize_filename("id-scan_1.jpg").unwrap(), "id-scan_1.jpg");
    }

    #[test]
    fn sanitize_filename_replaces_invalid_characters() {
        assert_eq!(
            sanitize_filename("my photo (1).png").unwrap(),
            "my_photo__1_.png"
        );
    }

    #[test]
    fn sanitize_filename_falls_back_for_short_names() {
        assert_eq!(sanitize_filename("").unwrap(), "file");
        assert_eq!(sanitize_filename("a").unwrap(), "file");
    }

    #[test]
    fn normalize_mime_type_strips_parameters() {
        assert_eq!(
            normalize_mime_type("image/jpeg; charset=utf-8"),
            "image/jpeg"
        );
        assert_eq!(normalize_mime_type("image/png"), "image/png");
        assert_eq!(normalize_mime_type(" application/pdf "), "application/pdf");
    }
}
