use validator::Validate;

use super::rejection::RegistrationRejection;
use crate::models::CitizenForm;

/// Presence of all six attributes first, then uniqueness of the id.
pub fn validate_registration(
    form: &CitizenForm,
    already_registered: bool,
) -> Result<(), RegistrationRejection> {
    form.validate()
        .map_err(|_| RegistrationRejection::MissingAttribute)?;

    if already_registered {
        return Err(RegistrationRejection::AlreadyRegistered);
    }

    Ok(())
}
