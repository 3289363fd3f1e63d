use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, RoadmapRenderer, SubmissionStore};
use crate::domain::{FormInput, UploadedFile, UsState};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap_error: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Default)]
struct RawForm {
    office_name: String,
    office_county: String,
    office_state: String,
    contact_person: String,
    email: String,
    phone: String,
    software_cama: String,
    software_imagery: String,
    website_provider: String,
    other_providers: String,
    other_issues: String,
    uploads: Vec<UploadedFile>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn submit_handler<L, F, S, R>(
    State(state): State<AppState<L, F, S, R>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
    S: SubmissionStore + 'static,
    R: RoadmapRenderer + 'static,
{
    let mut raw = RawForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let filename = field.file_name().unwrap_or("unknown").to_string();
            match field.bytes().await {
                Ok(data) => {
                    tracing::debug!(filename = %filename, bytes = data.len(), "File part received");
                    raw.uploads.push(UploadedFile {
                        name: filename,
                        data: data.to_vec(),
                    });
                }
                Err(e) => {
                    tracing::error!(filename = %filename, error = %e, "Failed to read file part");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read file '{}': {}", filename, e),
                        }),
                    )
                        .into_response();
                }
            }
            continue;
        }

        let value = match field.text().await {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(field = %name, error = %e, "Failed to read form field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read field '{}': {}", name, e),
                    }),
                )
                    .into_response();
            }
        };

        match name.as_str() {
            "office_name" => raw.office_name = value,
            "office_county" => raw.office_county = value,
            "office_state" => raw.office_state = value,
            "contact_person" => raw.contact_person = value,
            "email" => raw.email = value,
            "phone" => raw.phone = value,
            "software_cama" => raw.software_cama = value,
            "software_imagery" => raw.software_imagery = value,
            "website_provider" => raw.website_provider = value,
            "other_providers" => raw.other_providers = value,
            "other_issues" => raw.other_issues = value,
            other => {
                tracing::debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    let office_state = match UsState::try_from(raw.office_state.as_str()) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(office_state = %raw.office_state, "Invalid state in submission");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    let form = FormInput {
        office_name: raw.office_name,
        office_county: raw.office_county,
        office_state,
        contact_person: raw.contact_person,
        email: raw.email,
        phone: raw.phone,
        software_cama: raw.software_cama,
        software_imagery: raw.software_imagery,
        website_provider: raw.website_provider,
        other_providers: raw.other_providers,
        other_issues: raw.other_issues,
        uploads: raw.uploads,
    };

    match state.submission_service.submit(form).await {
        Ok(outcome) => {
            tracing::info!(
                columns = outcome.record.len(),
                roadmap = outcome.roadmap_path.is_some(),
                "Submission processed"
            );
            (
                StatusCode::CREATED,
                Json(SubmitResponse {
                    message: "Form submitted successfully".to_string(),
                    columns: outcome.record.columns().map(str::to_string).collect(),
                    category_warning: outcome.category_warning,
                    roadmap_path: outcome
                        .roadmap_path
                        .map(|p| p.display().to_string()),
                    roadmap_error: outcome.roadmap_error,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Submission failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Submission failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
