use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form;

/// Attributes a registration must carry, in the order the usage page lists them.
pub const REQUIRED_CITIZEN_FIELDS: [&str; 6] = [
    "citizen_id",
    "name",
    "surname",
    "birth_date",
    "occupation",
    "address",
];

/// Registration payload (`POST /registration`).
///
/// Absent keys decode as empty strings so that presence is checked by
/// validation rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CitizenForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub citizen_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub surname: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub birth_date: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub occupation: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub address: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "form::optional_flag"
    )]
    pub is_risk: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "form::optional_text"
    )]
    pub phone_number: Option<String>,
}

impl CitizenForm {
    /// Strip surrounding whitespace so blank values count as missing.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.citizen_id,
            &mut self.name,
            &mut self.surname,
            &mut self.birth_date,
            &mut self.occupation,
            &mut self.address,
        ] {
            *field = field.trim().to_string();
        }
        self
    }
}

/// Stored citizen record, keyed by `citizen_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citizen {
    pub citizen_id: String,
    pub name: String,
    pub surname: String,
    pub birth_date: String,
    pub occupation: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_risk: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl Citizen {
    pub fn from_form(form: CitizenForm, registered_at: DateTime<Utc>) -> Self {
        Self {
            citizen_id: form.citizen_id,
            name: form.name,
            surname: form.surname,
            birth_date: form.birth_date,
            occupation: form.occupation,
            address: form.address,
            is_risk: form.is_risk,
            phone_number: form.phone_number,
            registered_at,
        }
    }
}

/// Addresses a citizen for removal.
///
/// V1 clients send the full registration payload; every attribute they
/// supply besides the id must equal the stored value. V2 supplies the id only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CitizenSelector {
    #[serde(default)]
    pub citizen_id: String,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub surname: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub occupation: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub address: Option<String>,
}

impl CitizenSelector {
    pub fn by_id(citizen_id: impl Into<String>) -> Self {
        Self {
            citizen_id: citizen_id.into().trim().to_string(),
            ..Default::default()
        }
    }

    pub fn matches(&self, citizen: &Citizen) -> bool {
        fn agrees(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().map_or(true, |value| value == actual)
        }

        self.citizen_id.trim() == citizen.citizen_id
            && agrees(&self.name, &citizen.name)
            && agrees(&self.surname, &citizen.surname)
            && agrees(&self.birth_date, &citizen.birth_date)
            && agrees(&self.occupation, &citizen.occupation)
            && agrees(&self.address, &citizen.address)
    }
}
