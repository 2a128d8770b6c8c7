pub mod api_version;
pub mod citizen;
pub mod feedback;
pub mod form;
pub mod reservation;

pub use api_version::{ApiVersion, ParseApiVersionError};
pub use citizen::{Citizen, CitizenForm, CitizenSelector, REQUIRED_CITIZEN_FIELDS};
pub use feedback::Feedback;
pub use reservation::{
    Reservation, ReservationForm, ReservationSelector, REQUIRED_RESERVATION_FIELDS,
};
