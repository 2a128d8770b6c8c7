use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

use crate::models::{Feedback, Reservation, ReservationForm, ReservationSelector};
use crate::utils::FormPayload;
use crate::AppState;

/// `POST /reservation`
pub async fn reserve(
    State(state): State<AppState>,
    FormPayload(form): FormPayload<ReservationForm>,
) -> Result<Feedback, AppError> {
    match state.service.reserve(form).await {
        Ok(_) => Ok(Feedback::new("reservation success!")),
        Err(e) => e.into_feedback(),
    }
}

/// `GET /reservation`
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    Ok(Json(state.service.list_reservations().await?))
}

/// `DELETE /reservation` (v1): the payload, or a `citizen_id` query, selects
/// the reservation.
pub async fn cancel_reservation(
    State(state): State<AppState>,
    FormPayload(selector): FormPayload<ReservationSelector>,
) -> Result<Feedback, AppError> {
    cancel(&state, selector).await
}

/// `DELETE /reservation/:citizen_id` (v2)
pub async fn cancel_reservation_by_id(
    State(state): State<AppState>,
    Path(citizen_id): Path<String>,
) -> Result<Feedback, AppError> {
    cancel(&state, ReservationSelector::by_id(citizen_id)).await
}

async fn cancel(state: &AppState, selector: ReservationSelector) -> Result<Feedback, AppError> {
    let version = state.service.version();
    match state.service.cancel_reservation(selector).await {
        Ok(_) => Ok(Feedback::new(version.cancel_success_message())),
        Err(e) => e.into_feedback(),
    }
}
