use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use validator::Validate;

use crate::error::AppResult;
use crate::modules::chat::{
    crud::{MessageCrud, CONTEXT_LIMIT, HISTORY_LIMIT},
    model::Message,
    prompt::SYSTEM_PROMPT,
    schema::{ChatRequest, ChatResponse, MessageResponse},
};
use crate::AppState;

/// Persists the visitor's turn, asks the provider for a reply with the
/// session's recent history, then persists and returns the reply.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let crud = MessageCrud::new(&state.db);
    let session_id = payload.session_id;

    let user_message = Message::user(session_id.clone(), payload.message);
    crud.create(&user_message).await?;

    let history = crud.find_recent(&session_id, CONTEXT_LIMIT).await?;
    let reply = state.llm.chat(SYSTEM_PROMPT, &history).await?;

    let assistant_message = Message::assistant(session_id.clone(), reply.content);
    crud.create(&assistant_message).await?;

    tracing::info!(
        session_id = %session_id,
        context_turns = history.len(),
        model = %state.llm.model(),
        completion_id = reply.id.as_deref().unwrap_or("-"),
        "chat turn completed"
    );

    Ok(Json(ChatResponse {
        response: assistant_message.content,
        session_id,
    }))
}

pub async fn get_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<Vec<MessageResponse>>> {
    let crud = MessageCrud::new(&state.db);
    let messages = crud.find_by_session(&session_id, HISTORY_LIMIT).await?;

    Ok(Json(messages.iter().map(MessageResponse::from).collect()))
}

/// `GET /api/messages/` with no session id: nothing can belong to it.
pub async fn get_messages_without_session() -> Json<Vec<MessageResponse>> {
    Json(Vec::new())
}
