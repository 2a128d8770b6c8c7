//! Client-visible failure messages. `Display` is the exact feedback text.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationRejection {
    #[error(
        "registration failed: missing some attribute, All 6 keys are required! \
         [citizen_id, name, surname, birth_date, occupation, address]"
    )]
    MissingAttribute,
    #[error("registration failed: this person already registered")]
    AlreadyRegistered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReservationRejection {
    #[error("reservation failed: invalid citizen ID")]
    InvalidCitizenId,
    #[error("reservation failed: missing some attribute")]
    MissingAttribute,
    #[error("reservation failed: there is already a reservation for this citizen")]
    AlreadyReserved,
    #[error("reservation failed: invalid vaccine name")]
    InvalidVaccineName,
    #[error("reservation failed: citizen ID is not registered")]
    NotRegistered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CancellationRejection {
    #[error("cancel reservation failed: there is no reservation for this citizen")]
    NoReservation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CitizenRemovalRejection {
    #[error("delete citizen failed: citizen ID is not registered")]
    NotRegistered,
}

impl RegistrationRejection {
    /// Metric label.
    pub fn outcome(&self) -> &'static str {
        match self {
            RegistrationRejection::MissingAttribute => "missing_attribute",
            RegistrationRejection::AlreadyRegistered => "already_registered",
        }
    }
}

impl ReservationRejection {
    /// Metric label.
    pub fn outcome(&self) -> &'static str {
        match self {
            ReservationRejection::InvalidCitizenId => "invalid_citizen_id",
            ReservationRejection::MissingAttribute => "missing_attribute",
            ReservationRejection::AlreadyReserved => "already_reserved",
            ReservationRejection::InvalidVaccineName => "invalid_vaccine_name",
            ReservationRejection::NotRegistered => "not_registered",
        }
    }
}
