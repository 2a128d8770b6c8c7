use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form;

/// Attributes the completeness rule requires besides the citizen id.
///
/// `queue` and `checked` are optional: form clients drop null values and
/// both have a defined initial state.
pub const REQUIRED_RESERVATION_FIELDS: [&str; 3] = ["site_name", "vaccine_name", "timestamp"];

/// Reservation payload (`POST /reservation`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ReservationForm {
    #[serde(default)]
    pub citizen_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub site_name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub vaccine_name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub timestamp: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "form::optional_text"
    )]
    pub queue: Option<String>,
    #[serde(default, deserialize_with = "form::flag")]
    pub checked: bool,
}

impl ReservationForm {
    /// A fresh reservation: no queue position, not yet checked in.
    pub fn new(
        citizen_id: impl Into<String>,
        site_name: impl Into<String>,
        vaccine_name: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            citizen_id: citizen_id.into(),
            site_name: site_name.into(),
            vaccine_name: vaccine_name.into(),
            timestamp: timestamp.into(),
            queue: None,
            checked: false,
        }
    }

    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.citizen_id,
            &mut self.site_name,
            &mut self.vaccine_name,
            &mut self.timestamp,
        ] {
            *field = field.trim().to_string();
        }
        self
    }
}

/// Stored reservation. At most one exists per citizen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub citizen_id: String,
    pub site_name: String,
    pub vaccine_name: String,
    pub timestamp: String,
    pub queue: Option<String>,
    pub checked: bool,
    pub reserved_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_form(form: ReservationForm, reserved_at: DateTime<Utc>) -> Self {
        Self {
            citizen_id: form.citizen_id,
            site_name: form.site_name,
            vaccine_name: form.vaccine_name,
            timestamp: form.timestamp,
            queue: form.queue,
            checked: form.checked,
            reserved_at,
        }
    }
}

/// Addresses a reservation for cancellation.
///
/// V1 matches on the payload: the id is required and any other supplied
/// attribute must equal the stored one. `queue` and `checked` are not
/// compared. V2 supplies the id from the path only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReservationSelector {
    #[serde(default)]
    pub citizen_id: String,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub site_name: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub vaccine_name: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub timestamp: Option<String>,
}

impl ReservationSelector {
    pub fn by_id(citizen_id: impl Into<String>) -> Self {
        Self {
            citizen_id: citizen_id.into().trim().to_string(),
            ..Default::default()
        }
    }

    pub fn matches(&self, reservation: &Reservation) -> bool {
        fn agrees(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().map_or(true, |value| value == actual)
        }

        self.citizen_id.trim() == reservation.citizen_id
            && agrees(&self.site_name, &reservation.site_name)
            && agrees(&self.vaccine_name, &reservation.vaccine_name)
            && agrees(&self.timestamp, &reservation.timestamp)
    }
}
