use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Contract revision served by a deployment.
///
/// V1 cancels reservations and removes citizens by matching a form payload
/// against `DELETE /reservation` and `DELETE /citizen`. V2 addresses both by
/// citizen id in the path and accepts `is_risk` / `phone_number` on
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V1,
    #[default]
    V2,
}

#[derive(Debug, Error)]
#[error("unknown API version '{0}', expected 'v1' or 'v2'")]
pub struct ParseApiVersionError(String);

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }

    pub fn cancel_success_message(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "cancel reservation successfully",
            ApiVersion::V2 => "cancel reservation success",
        }
    }

    pub fn remove_citizen_success_message(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "delete citizen successfully",
            ApiVersion::V2 => "delete citizen success",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ParseApiVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(ApiVersion::V1),
            "v2" | "2" => Ok(ApiVersion::V2),
            _ => Err(ParseApiVersionError(s.to_string())),
        }
    }
}
