use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::modules::lead::{
    crud::LeadCrud,
    model::Lead,
    schema::{CreateLeadRequest, LeadListQuery, LeadResponse},
};
use crate::AppState;

pub async fn create_lead(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeadRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<LeadResponse>)> {
    let Json(payload) = payload?;
    payload.validate()?;

    let crud = LeadCrud::new(&state.db);
    let lead = Lead::from(payload);
    crud.create(&lead).await?;

    tracing::info!(
        lead_id = %lead.id,
        session_id = %lead.session_id,
        shoot_type = lead.shoot_type.as_deref().unwrap_or("-"),
        "lead recorded"
    );

    Ok((StatusCode::CREATED, Json(LeadResponse::from(&lead))))
}

pub async fn list_leads(
    State(state): State<AppState>,
    query: Result<Query<LeadListQuery>, QueryRejection>,
) -> AppResult<Json<Vec<LeadResponse>>> {
    let Query(query) = query?;

    let crud = LeadCrud::new(&state.db);
    let leads = crud
        .find_all(query.shoot_type.as_deref(), query.limit())
        .await?;

    Ok(Json(leads.iter().map(LeadResponse::from).collect()))
}

pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<LeadResponse>> {
    let crud = LeadCrud::new(&state.db);

    match crud.find_by_id(&id).await? {
        Some(lead) => Ok(Json(LeadResponse::from(&lead))),
        None => Err(AppError::NotFound("Lead not found".to_string())),
    }
}
