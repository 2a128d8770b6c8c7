mod common;

use common::{pfizer_at_hospital_1, TestApp, CITIZEN_ID};
use government_service::models::{ApiVersion, Reservation, ReservationForm};

async fn registered_app(version: ApiVersion) -> TestApp {
    let app = TestApp::spawn(version).await;
    assert_eq!(app.register_john_doe().await, "registration success!");
    app
}

#[tokio::test]
async fn valid_reservation_succeeds() {
    let app = registered_app(ApiVersion::V2).await;

    let feedback = app
        .post_form("/reservation", &pfizer_at_hospital_1(CITIZEN_ID))
        .await;
    assert_eq!(feedback, "reservation success!");

    let reservations: Vec<Reservation> = app
        .client
        .get(app.url("/reservation"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].site_name, "Hospital 1");
    assert_eq!(reservations[0].queue, None);
    assert!(!reservations[0].checked);
}

#[tokio::test]
async fn malformed_citizen_id_is_rejected_first() {
    let app = registered_app(ApiVersion::V2).await;

    let form = ReservationForm {
        site_name: String::new(),
        vaccine_name: "test".to_string(),
        ..pfizer_at_hospital_1("999")
    };
    let feedback = app.post_form("/reservation", &form).await;
    assert_eq!(feedback, "reservation failed: invalid citizen ID");
}

#[tokio::test]
async fn empty_site_name_is_a_missing_attribute() {
    let app = registered_app(ApiVersion::V2).await;

    let form = ReservationForm {
        site_name: String::new(),
        ..pfizer_at_hospital_1(CITIZEN_ID)
    };
    let feedback = app.post_form("/reservation", &form).await;
    assert_eq!(feedback, "reservation failed: missing some attribute");
}

#[tokio::test]
async fn second_reservation_is_rejected() {
    let app = registered_app(ApiVersion::V2).await;
    let form = pfizer_at_hospital_1(CITIZEN_ID);

    app.post_form("/reservation", &form).await;
    let feedback = app.post_form("/reservation", &form).await;
    assert_eq!(
        feedback,
        "reservation failed: there is already a reservation for this citizen"
    );
}

#[tokio::test]
async fn vaccine_outside_catalog_is_rejected() {
    let app = registered_app(ApiVersion::V2).await;

    let form = ReservationForm {
        vaccine_name: "test".to_string(),
        ..pfizer_at_hospital_1(CITIZEN_ID)
    };
    let feedback = app.post_form("/reservation", &form).await;
    assert_eq!(feedback, "reservation failed: invalid vaccine name");
}

#[tokio::test]
async fn unregistered_citizen_is_rejected() {
    let app = registered_app(ApiVersion::V2).await;

    let feedback = app
        .post_form("/reservation", &pfizer_at_hospital_1("5794653124586"))
        .await;
    assert_eq!(feedback, "reservation failed: citizen ID is not registered");
}

#[tokio::test]
async fn python_style_payload_is_accepted() {
    let app = registered_app(ApiVersion::V1).await;

    let response = app
        .client
        .post(app.url("/reservation"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(
            "citizen_id=8888888888888&site_name=Hospital+1&vaccine_name=Pfizer\
             &timestamp=2021-10-18+10%3A15%3A00.123456&checked=False",
        )
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.text().await.unwrap().contains("reservation success!"));
}

#[tokio::test]
async fn v1_cancel_by_payload_then_reserve_again() {
    let app = registered_app(ApiVersion::V1).await;
    let form = pfizer_at_hospital_1(CITIZEN_ID);

    app.post_form("/reservation", &form).await;
    let feedback = app.delete_form("/reservation", &form).await;
    assert_eq!(feedback, "cancel reservation successfully");

    let again = app.post_form("/reservation", &form).await;
    assert_eq!(again, "reservation success!");
}

#[tokio::test]
async fn v1_cancel_by_query_parameter() {
    let app = registered_app(ApiVersion::V1).await;

    app.post_form("/reservation", &pfizer_at_hospital_1(CITIZEN_ID))
        .await;
    let feedback = app
        .delete(&format!("/reservation?citizen_id={}", CITIZEN_ID))
        .await;
    assert_eq!(feedback, "cancel reservation successfully");
}

#[tokio::test]
async fn v1_cancel_with_other_timestamp_keeps_reservation() {
    let app = registered_app(ApiVersion::V1).await;
    let form = pfizer_at_hospital_1(CITIZEN_ID);
    app.post_form("/reservation", &form).await;

    let stale = ReservationForm {
        timestamp: "2000-01-01 00:00:00".to_string(),
        ..form.clone()
    };
    let feedback = app.delete_form("/reservation", &stale).await;
    assert_eq!(
        feedback,
        "cancel reservation failed: there is no reservation for this citizen"
    );

    let duplicate = app.post_form("/reservation", &form).await;
    assert!(duplicate.contains("there is already a reservation for this citizen"));
}

#[tokio::test]
async fn v2_cancel_by_path_then_reserve_again() {
    let app = registered_app(ApiVersion::V2).await;
    let form = pfizer_at_hospital_1(CITIZEN_ID);

    app.post_form("/reservation", &form).await;
    let feedback = app.delete(&format!("/reservation/{}", CITIZEN_ID)).await;
    assert_eq!(feedback, "cancel reservation success");

    let again = app.post_form("/reservation", &form).await;
    assert_eq!(again, "reservation success!");
}

#[tokio::test]
async fn cancel_without_reservation_is_rejected() {
    let app = registered_app(ApiVersion::V2).await;

    let feedback = app.delete(&format!("/reservation/{}", CITIZEN_ID)).await;
    assert_eq!(
        feedback,
        "cancel reservation failed: there is no reservation for this citizen"
    );
}

#[tokio::test]
async fn deleting_citizen_cancels_their_reservation() {
    let app = registered_app(ApiVersion::V2).await;

    app.post_form("/reservation", &pfizer_at_hospital_1(CITIZEN_ID))
        .await;
    app.delete(&format!("/registration/{}", CITIZEN_ID)).await;

    let listing = app.get_text("/reservation").await;
    assert!(!listing.contains(CITIZEN_ID));
}

#[tokio::test]
async fn ambiguous_payload_is_a_bad_request() {
    let app = TestApp::spawn(ApiVersion::V2).await;

    let response = app
        .client
        .post(app.url("/reservation"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("citizen_id=8888888888888&citizen_id=1111111111111")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
