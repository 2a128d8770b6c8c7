use axum::extract::{Path, State};
use service_core::error::AppError;

use crate::models::{CitizenForm, CitizenSelector, Feedback};
use crate::utils::FormPayload;
use crate::AppState;

/// `POST /registration`
pub async fn register(
    State(state): State<AppState>,
    FormPayload(form): FormPayload<CitizenForm>,
) -> Result<Feedback, AppError> {
    match state.service.register(form).await {
        Ok(_) => Ok(Feedback::new("registration success!")),
        Err(e) => e.into_feedback(),
    }
}

/// `DELETE /registration/:citizen_id` (v2)
pub async fn remove_registration(
    State(state): State<AppState>,
    Path(citizen_id): Path<String>,
) -> Result<Feedback, AppError> {
    let version = state.service.version();
    match state
        .service
        .remove_citizen(CitizenSelector::by_id(citizen_id))
        .await
    {
        Ok(_) => Ok(Feedback::new(version.remove_citizen_success_message())),
        Err(e) => e.into_feedback(),
    }
}
