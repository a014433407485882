//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use intake_core::models;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Patient Registration API",
        version = "1.0.0",
        description = "API for registering patients and uploading their documents"
    ),
    paths(
        handlers::welcome::welcome,
        handlers::register_patient::register_patient,
    ),
    components(schemas(
        models::RegisterPatient,
        models::PatientResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "patients", description = "Patient registration"),
        (name = "service", description = "Service endpoints")
    )
)]
pub struct ApiDoc;
