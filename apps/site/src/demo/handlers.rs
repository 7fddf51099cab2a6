//! Axum route handlers for the resume optimizer demo.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{debug, info};

use crate::demo::{DemoInputs, DemoOutput, DemoSubmission, DemoTriggers, UploadedFile};
use crate::errors::AppError;
use crate::html::render_document;
use crate::pages::PageId;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DemoRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(flatten)]
    pub triggers: DemoTriggers,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /demo
///
/// Multipart form from the demo page. Selects the demo page and re-renders it
/// with the submitted inputs and whichever buttons fired.
pub async fn handle_demo_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let submission = read_demo_form(multipart).await?;
    info!(
        analyze = submission.triggers.analyze,
        suggest = submission.triggers.suggest,
        has_resume = submission.inputs.resume.is_some(),
        "Demo form submitted"
    );

    let mut navigation = state.navigation.write().await;
    navigation.select_page(PageId::ResumeOptimizerDemo);
    Ok(Html(render_document(&navigation.render(Some(submission)))))
}

/// POST /api/v1/demo
///
/// JSON variant of the demo form. Returns the stacked output blocks only.
pub async fn handle_demo_api(Json(request): Json<DemoRequest>) -> Json<Vec<DemoOutput>> {
    let submission = DemoSubmission {
        inputs: DemoInputs {
            resume: None,
            job_description: request.job_description,
        },
        triggers: request.triggers,
    };
    Json(submission.outputs())
}

/// Collects the demo form fields. Unknown fields are skipped; the resume
/// bytes are drained to measure size and never inspected.
async fn read_demo_form(mut multipart: Multipart) -> Result<DemoSubmission, AppError> {
    let mut submission = DemoSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes: Bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked.
                if !file_name.is_empty() || !bytes.is_empty() {
                    debug!(file_name = %file_name, size = bytes.len(), "Resume upload accepted");
                    submission.inputs.resume = Some(UploadedFile {
                        file_name,
                        content_type,
                        size_bytes: bytes.len(),
                    });
                }
            }
            "job_description" => {
                submission.inputs.job_description = field.text().await?;
            }
            "action" => match field.text().await?.as_str() {
                "analyze" => submission.triggers.analyze = true,
                "suggest" => submission.triggers.suggest = true,
                other => {
                    return Err(AppError::Validation(format!(
                        "Unknown demo action '{other}'"
                    )))
                }
            },
            _ => debug!(field = %name, "Ignoring unknown demo form field"),
        }
    }

    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_request_defaults_missing_fields() {
        let req: DemoRequest = serde_json::from_str(r#"{"analyze": true}"#).unwrap();
        assert!(req.job_description.is_empty());
        assert!(req.triggers.analyze);
        assert!(!req.triggers.suggest);
    }

    #[test]
    fn test_demo_request_reads_both_triggers() {
        let req: DemoRequest = serde_json::from_str(
            r#"{"job_description": "SQL", "analyze": true, "suggest": true}"#,
        )
        .unwrap();
        assert_eq!(req.job_description, "SQL");
        assert!(req.triggers.analyze && req.triggers.suggest);
    }
}
