//! Human readable landing and usage pages.

use axum::extract::State;

use crate::models::ApiVersion;
use crate::AppState;

pub async fn index() -> &'static str {
    "Welcome to World Class Government APIs\n\
     \n\
     GET /registration_usage - how to register a citizen\n\
     GET /reservation_usage - how to reserve or cancel a vaccine reservation\n\
     GET /citizen - list registered citizens\n\
     GET /reservation - list active reservations\n"
}

pub async fn registration_usage(State(state): State<AppState>) -> String {
    let mut page = String::from(
        "This API is to register citizen information\n\
         [POST] /registration with form data\n\
         All 6 keys are required! [citizen_id, name, surname, birth_date, occupation, address]\n",
    );

    match state.service.version() {
        ApiVersion::V1 => page.push_str(
            "[DELETE] /citizen with the registered form data removes the citizen\n",
        ),
        ApiVersion::V2 => page.push_str(
            "Optional keys: [is_risk, phone_number]\n\
             [DELETE] /registration/<citizen_id> removes the citizen\n",
        ),
    }

    page
}

pub async fn reservation_usage(State(state): State<AppState>) -> String {
    let vaccines = state.service.catalog().names().join(", ");

    let mut page = format!(
        "This API is to reserve/cancel vaccine reservation\n\
         [POST] is to reserve vaccine reservation\n\
         Keys: [citizen_id, site_name, vaccine_name, timestamp, queue, checked]\n\
         Available vaccines: [{}]\n",
        vaccines
    );

    match state.service.version() {
        ApiVersion::V1 => page.push_str(
            "[DELETE] is to cancel vaccine reservation, send the reserved form data to /reservation\n",
        ),
        ApiVersion::V2 => page.push_str(
            "[DELETE] is to cancel vaccine reservation, call /reservation/<citizen_id>\n",
        ),
    }

    page
}
