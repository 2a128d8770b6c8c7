use government_service::models::ApiVersion;

/// Where each contract revision is deployed.
///
/// `URL` names the current (v2) deployment and `V1_URL` the legacy one.
/// An unset variable means the suite runs against the in-process reference
/// service instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub v1: Option<String>,
    pub v2: Option<String>,
}

impl ServiceEndpoints {
    /// Load endpoints from the environment, reading `.env` first.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            v1: read_url("V1_URL"),
            v2: read_url("URL"),
        }
    }

    pub fn for_version(&self, version: ApiVersion) -> Option<&str> {
        match version {
            ApiVersion::V1 => self.v1.as_deref(),
            ApiVersion::V2 => self.v2.as_deref(),
        }
    }
}

fn read_url(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(|value| normalize_base_url(&value))
}

/// Base URLs always end in `/` so endpoint paths can be appended.
pub fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
