//! Typed client for the registration and reservation endpoints.

use anyhow::{Context, Result};
use government_service::models::{ApiVersion, CitizenForm, Feedback, ReservationForm};
use reqwest::StatusCode;
use service_core::observability::{extract_request_id, TracedClientExt, TracedRequest};
use std::time::Duration;
use uuid::Uuid;

/// Raw answer of the API. Outcomes are told apart by body text only.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
    pub request_id: Option<String>,
}

impl ApiResponse {
    async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let request_id = extract_request_id(response.headers());
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(Self {
            status,
            body,
            request_id,
        })
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }

    /// The `feedback` message, when the body is a feedback document.
    pub fn feedback(&self) -> Option<String> {
        serde_json::from_str::<Feedback>(&self.body)
            .ok()
            .map(|feedback| feedback.feedback)
    }
}

/// Client bound to one deployment and the contract revision it serves.
#[derive(Debug, Clone)]
pub struct GovernmentApiClient {
    http: reqwest::Client,
    base_url: String,
    version: ApiVersion,
}

impl GovernmentApiClient {
    pub fn new(base_url: impl Into<String>, version: ApiVersion) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: crate::endpoints::normalize_base_url(&base_url.into()),
            version,
        })
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: TracedRequest, operation: &str) -> Result<ApiResponse> {
        let request_id = Uuid::new_v4().to_string();
        tracing::debug!(%request_id, operation, "Calling government API");

        let response = request
            .send_with_request_id(&request_id)
            .await
            .with_context(|| format!("{} request failed", operation))?;

        ApiResponse::read(response).await
    }

    pub async fn index(&self) -> Result<ApiResponse> {
        self.send(self.http.traced_get(&self.url("")), "index")
            .await
    }

    pub async fn registration_usage(&self) -> Result<ApiResponse> {
        self.send(
            self.http.traced_get(&self.url("registration_usage")),
            "registration_usage",
        )
        .await
    }

    pub async fn reservation_usage(&self) -> Result<ApiResponse> {
        self.send(
            self.http.traced_get(&self.url("reservation_usage")),
            "reservation_usage",
        )
        .await
    }

    pub async fn register(&self, citizen: &CitizenForm) -> Result<ApiResponse> {
        self.send(
            self.http.traced_post(&self.url("registration")).form(citizen),
            "register",
        )
        .await
    }

    /// Remove a citizen: v1 by matching the registration payload against
    /// `DELETE /citizen`, v2 by `DELETE /registration/{citizen_id}`.
    pub async fn delete_citizen(&self, citizen: &CitizenForm) -> Result<ApiResponse> {
        let request = match self.version {
            ApiVersion::V1 => self.http.traced_delete(&self.url("citizen")).form(citizen),
            ApiVersion::V2 => self
                .http
                .traced_delete(&self.url(&format!("registration/{}", citizen.citizen_id))),
        };
        self.send(request, "delete_citizen").await
    }

    pub async fn reserve(&self, reservation: &ReservationForm) -> Result<ApiResponse> {
        self.send(
            self.http.traced_post(&self.url("reservation")).form(reservation),
            "reserve",
        )
        .await
    }

    /// Cancel a reservation: v1 by matching the reservation payload against
    /// `DELETE /reservation`, v2 by `DELETE /reservation/{citizen_id}`.
    pub async fn cancel_reservation(&self, reservation: &ReservationForm) -> Result<ApiResponse> {
        let request = match self.version {
            ApiVersion::V1 => self
                .http
                .traced_delete(&self.url("reservation"))
                .form(reservation),
            ApiVersion::V2 => self.http.traced_delete(
                &self.url(&format!("reservation/{}", reservation.citizen_id)),
            ),
        };
        self.send(request, "cancel_reservation").await
    }

    /// Cancel by citizen id alone: a `citizen_id` query on v1, the path on v2.
    pub async fn cancel_reservation_by_id(&self, citizen_id: &str) -> Result<ApiResponse> {
        let request = match self.version {
            ApiVersion::V1 => self
                .http
                .traced_delete(&self.url("reservation"))
                .query(&[("citizen_id", citizen_id)]),
            ApiVersion::V2 => self
                .http
                .traced_delete(&self.url(&format!("reservation/{}", citizen_id))),
        };
        self.send(request, "cancel_reservation_by_id").await
    }

    pub async fn list_citizens(&self) -> Result<ApiResponse> {
        self.send(self.http.traced_get(&self.url("citizen")), "list_citizens")
            .await
    }

    pub async fn list_reservations(&self) -> Result<ApiResponse> {
        self.send(
            self.http.traced_get(&self.url("reservation")),
            "list_reservations",
        )
        .await
    }

    pub async fn health(&self) -> Result<ApiResponse> {
        self.send(self.http.traced_get(&self.url("health")), "health")
            .await
    }

    /// First id, counting up from `start`, that does not appear anywhere in
    /// the citizen listing text.
    pub async fn find_unregistered_citizen_id(&self, start: u64) -> Result<u64> {
        let listing = self.list_citizens().await?;

        let mut citizen_id = start;
        while listing.contains(&citizen_id.to_string()) {
            citizen_id += 1;
        }
        Ok(citizen_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = GovernmentApiClient::new("http://localhost:8080", ApiVersion::V2).unwrap();
        assert_eq!(client.url("reservation"), "http://localhost:8080/reservation");
        assert_eq!(client.url("/citizen"), "http://localhost:8080/citizen");
        assert_eq!(client.url(""), "http://localhost:8080/");
    }

    #[test]
    fn feedback_is_read_from_json_body() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: r#"{"feedback":"reservation success!"}"#.to_string(),
            request_id: None,
        };
        assert_eq!(response.feedback().as_deref(), Some("reservation success!"));
        assert!(response.contains("reservation success!"));
    }

    #[test]
    fn plain_text_body_has_no_feedback() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: "Welcome to World Class Government APIs".to_string(),
            request_id: None,
        };
        assert!(response.feedback().is_none());
    }
}
