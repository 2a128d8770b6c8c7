use government_service::config::GovernmentConfig;
use government_service::models::{ApiVersion, CitizenForm, Feedback, ReservationForm};
use government_service::Application;
use reqwest::Client;

pub const CITIZEN_ID: &str = "8888888888888";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub version: ApiVersion,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn(version: ApiVersion) -> Self {
        let mut config = GovernmentConfig::for_version(version);
        config.common.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            version,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_form<T: serde::Serialize>(&self, path: &str, form: &T) -> String {
        let response = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        read_feedback(response).await
    }

    pub async fn delete(&self, path: &str) -> String {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        read_feedback(response).await
    }

    pub async fn delete_form<T: serde::Serialize>(&self, path: &str, form: &T) -> String {
        let response = self
            .client
            .delete(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        read_feedback(response).await
    }

    pub async fn get_text(&self, path: &str) -> String {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
            .text()
            .await
            .expect("Failed to read body")
    }

    pub async fn register_john_doe(&self) -> String {
        self.post_form("/registration", &john_doe()).await
    }
}

async fn read_feedback(response: reqwest::Response) -> String {
    let body: Feedback = response.json().await.expect("Failed to parse feedback");
    body.feedback
}

pub fn john_doe() -> CitizenForm {
    CitizenForm {
        citizen_id: CITIZEN_ID.to_string(),
        name: "John".to_string(),
        surname: "Doe".to_string(),
        birth_date: "15 Aug 2002".to_string(),
        occupation: "Student".to_string(),
        address: "Bangkok".to_string(),
        is_risk: None,
        phone_number: None,
    }
}

pub fn pfizer_at_hospital_1(citizen_id: &str) -> ReservationForm {
    ReservationForm::new(citizen_id, "Hospital 1", "Pfizer", now_timestamp())
}

/// Timestamp in the `YYYY-MM-DD HH:MM:SS.ffffff` shape form clients send.
pub fn now_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string()
}
