use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;

use crate::decode::{has_allowed_extension, ALLOWED_EXTENSIONS};
use crate::errors::AppError;
use crate::models::Assessment;
use crate::pipeline::assess_text;
use crate::state::AppState;

/// POST /assessment/o1a
///
/// Accepts a multipart upload (`cv_file` field), decodes it to plain text via
/// the decoding collaborator, and runs the assessment pipeline.
pub async fn handle_assess(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Assessment>, AppError> {
    let (filename, content) = read_cv_file(&mut multipart).await?;

    if !has_allowed_extension(&filename) {
        return Err(AppError::Validation(format!(
            "Unsupported file format. Please upload a file in one of these formats: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    tracing::info!(filename = %filename, bytes = content.len(), "assessing CV");

    let raw_text = state.decoder.decode(content, &filename).await?;
    let assessment = assess_text(&raw_text, &state.nlp, &state.rules).await?;

    tracing::info!(
        overall_rating = ?assessment.overall_rating,
        criteria = assessment.criteria_assessments.len(),
        "assessment complete"
    );
    Ok(Json(assessment))
}

async fn read_cv_file(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("cv_file") {
            let filename = field
                .file_name()
                .ok_or_else(|| {
                    AppError::Validation("cv_file field is missing a filename".to_string())
                })?
                .to_string();
            let content = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            return Ok((filename, content));
        }
    }
    Err(AppError::Validation(
        "Missing required file field 'cv_file'".to_string(),
    ))
}
