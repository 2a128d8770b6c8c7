use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::models::{Citizen, CitizenSelector, Feedback};
use crate::utils::FormPayload;
use crate::AppState;

/// `GET /citizen`
pub async fn list_citizens(State(state): State<AppState>) -> Result<Json<Vec<Citizen>>, AppError> {
    Ok(Json(state.service.list_citizens().await?))
}

/// `DELETE /citizen` (v1): body or query must identify the citizen.
pub async fn remove_citizen(
    State(state): State<AppState>,
    FormPayload(selector): FormPayload<CitizenSelector>,
) -> Result<Feedback, AppError> {
    let version = state.service.version();
    match state.service.remove_citizen(selector).await {
        Ok(_) => Ok(Feedback::new(version.remove_citizen_success_message())),
        Err(e) => e.into_feedback(),
    }
}
