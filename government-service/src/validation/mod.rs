//! Business rules of the registration and reservation endpoints.

pub mod catalog;
pub mod citizen_id;
pub mod registration;
pub mod rejection;
pub mod rules;

pub use catalog::{VaccineCatalog, DEFAULT_VACCINES};
pub use citizen_id::{is_valid_citizen_id, CITIZEN_ID_LENGTH};
pub use registration::validate_registration;
pub use rejection::{
    CancellationRejection, CitizenRemovalRejection, RegistrationRejection, ReservationRejection,
};
pub use rules::{validate_reservation, ReservationContext, ReservationRule, RESERVATION_RULES};
