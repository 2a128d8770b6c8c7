//! Common fixture for the contract suites.

use contract_tests::{
    init_tracing, spawn_reference_service, wait_for_service, ApiVersion, CitizenForm,
    GovernmentApiClient, ReservationForm, ServiceEndpoints,
};
use std::time::Duration;

/// Default timeout for waiting on a deployment.
pub const SERVICE_TIMEOUT: Duration = Duration::from_secs(60);

/// Citizen registered before every test and removed afterwards.
pub const CITIZEN_ID: &str = "8888888888888";

pub struct Fixture {
    pub api: GovernmentApiClient,
    pub citizen: CitizenForm,
}

impl Fixture {
    /// Connect to the configured deployment for `version`, or start the
    /// reference service when none is configured, then register John Doe.
    pub async fn setup(version: ApiVersion) -> Self {
        init_tracing();

        let base_url = match ServiceEndpoints::from_env().for_version(version) {
            Some(url) => url.to_string(),
            None => spawn_reference_service(version)
                .await
                .expect("Failed to start reference service"),
        };

        wait_for_service(&base_url, SERVICE_TIMEOUT)
            .await
            .expect("Deployment not answering - set URL / V1_URL or check the service");

        let api = GovernmentApiClient::new(base_url, version).expect("Failed to build client");
        let citizen = john_doe(version);

        // A leftover registration from an aborted run is fine.
        api.register(&citizen)
            .await
            .expect("Failed to register fixture citizen");

        Self { api, citizen }
    }

    /// A Pfizer reservation at Hospital 1 for the fixture citizen.
    pub fn reservation(&self) -> ReservationForm {
        ReservationForm::new(CITIZEN_ID, "Hospital 1", "Pfizer", now_timestamp())
    }

    pub async fn teardown(self) {
        self.api
            .delete_citizen(&self.citizen)
            .await
            .expect("Failed to remove fixture citizen");
    }
}

pub fn john_doe(version: ApiVersion) -> CitizenForm {
    let mut citizen = CitizenForm {
        citizen_id: CITIZEN_ID.to_string(),
        name: "John".to_string(),
        surname: "Doe".to_string(),
        birth_date: "15 Aug 2002".to_string(),
        occupation: "Student".to_string(),
        address: "Bangkok".to_string(),
        ..CitizenForm::default()
    };

    if version == ApiVersion::V2 {
        citizen.is_risk = Some(false);
        citizen.phone_number = Some("0888775991".to_string());
    }
    citizen
}

pub fn now_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string()
}
