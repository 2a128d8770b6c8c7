use service_core::error::AppError;
use thiserror::Error;

use crate::models::Feedback;
use crate::validation::{
    CancellationRejection, CitizenRemovalRejection, RegistrationRejection, ReservationRejection,
};

/// Outcome of a failed service call.
///
/// Rejections are business answers and travel to the client as `200`
/// feedback; `Internal` is a real fault and keeps its `AppError` status.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Registration(#[from] RegistrationRejection),

    #[error(transparent)]
    Reservation(#[from] ReservationRejection),

    #[error(transparent)]
    Cancellation(#[from] CancellationRejection),

    #[error(transparent)]
    CitizenRemoval(#[from] CitizenRemovalRejection),

    #[error(transparent)]
    Internal(#[from] AppError),
}

impl ServiceError {
    pub fn into_feedback(self) -> Result<Feedback, AppError> {
        match self {
            ServiceError::Internal(err) => Err(err),
            rejection => Ok(Feedback::new(rejection.to_string())),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Internal(e) => e,
            rejection => AppError::BadRequest(anyhow::anyhow!(rejection.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_becomes_feedback_with_exact_message() {
        let feedback = ServiceError::from(ReservationRejection::InvalidVaccineName)
            .into_feedback()
            .unwrap();
        assert_eq!(feedback.feedback, "reservation failed: invalid vaccine name");
    }

    #[test]
    fn internal_error_stays_an_error() {
        let err = ServiceError::from(AppError::ServiceUnavailable);
        assert!(err.into_feedback().is_err());
    }
}
