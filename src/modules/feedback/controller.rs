use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::error::AppResult;
use crate::modules::feedback::{
    crud::FeedbackCrud,
    model::Feedback,
    schema::{CreateFeedbackRequest, FeedbackResponse},
};
use crate::AppState;

pub async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<Json<CreateFeedbackRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<FeedbackResponse>)> {
    let Json(payload) = payload?;
    let payload = payload.normalized();
    payload.validate()?;

    let crud = FeedbackCrud::new(&state.db);
    let feedback = Feedback::from(payload);
    crud.create(&feedback).await?;

    tracing::info!(feedback_id = %feedback.id, rating = ?feedback.rating, "feedback received");

    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            ok: true,
            id: feedback.id.clone(),
            created_at: feedback.created_at_rfc3339(),
        }),
    ))
}
