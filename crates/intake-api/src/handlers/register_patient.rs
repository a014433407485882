use crate::error::{ErrorResponse, HttpAppError};
use crate::services::RegistrationService;
use crate::state::RegistrationState;
use crate::utils::upload::extract_registration_form;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use intake_core::PatientResponse;

#[utoipa::path(
    post,
    path = "/api/patients",
    tag = "patients",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Patient registered successfully", body = PatientResponse),
        (status = 400, description = "Document photo rejected", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Invalid registration fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register_patient(
    State(state): State<RegistrationState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = extract_registration_form(multipart).await?;

    let service = RegistrationService::new(&state);
    let patient = service.register(form).await?;

    Ok((StatusCode::CREATED, Json(patient)))
}
