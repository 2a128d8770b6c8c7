//! Ordered reservation rule chain.
//!
//! A request can break several rules at once; the first failing rule in
//! [`RESERVATION_RULES`] decides the feedback, so the order is part of the
//! contract: format, completeness, uniqueness, catalog, registration.

use validator::Validate;

use super::catalog::VaccineCatalog;
use super::citizen_id::is_valid_citizen_id;
use super::rejection::ReservationRejection;
use crate::models::ReservationForm;

/// Registry facts about the requesting citizen, read before the rules run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationContext {
    pub citizen_registered: bool,
    pub has_active_reservation: bool,
}

type Check =
    fn(&ReservationForm, &ReservationContext, &VaccineCatalog) -> Result<(), ReservationRejection>;

/// A named guard in the reservation pipeline.
pub struct ReservationRule {
    pub name: &'static str,
    check: Check,
}

impl ReservationRule {
    pub fn check(
        &self,
        form: &ReservationForm,
        context: &ReservationContext,
        catalog: &VaccineCatalog,
    ) -> Result<(), ReservationRejection> {
        (self.check)(form, context, catalog)
    }
}

pub const RESERVATION_RULES: [ReservationRule; 5] = [
    ReservationRule {
        name: "citizen_id_format",
        check: citizen_id_format,
    },
    ReservationRule {
        name: "required_attributes",
        check: required_attributes,
    },
    ReservationRule {
        name: "single_active_reservation",
        check: single_active_reservation,
    },
    ReservationRule {
        name: "vaccine_catalog",
        check: vaccine_catalog,
    },
    ReservationRule {
        name: "citizen_registered",
        check: citizen_registered,
    },
];

fn citizen_id_format(
    form: &ReservationForm,
    _: &ReservationContext,
    _: &VaccineCatalog,
) -> Result<(), ReservationRejection> {
    if is_valid_citizen_id(&form.citizen_id) {
        Ok(())
    } else {
        Err(ReservationRejection::InvalidCitizenId)
    }
}

fn required_attributes(
    form: &ReservationForm,
    _: &ReservationContext,
    _: &VaccineCatalog,
) -> Result<(), ReservationRejection> {
    form.validate()
        .map_err(|_| ReservationRejection::MissingAttribute)
}

fn single_active_reservation(
    _: &ReservationForm,
    context: &ReservationContext,
    _: &VaccineCatalog,
) -> Result<(), ReservationRejection> {
    if context.has_active_reservation {
        Err(ReservationRejection::AlreadyReserved)
    } else {
        Ok(())
    }
}

fn vaccine_catalog(
    form: &ReservationForm,
    _: &ReservationContext,
    catalog: &VaccineCatalog,
) -> Result<(), ReservationRejection> {
    if catalog.contains(&form.vaccine_name) {
        Ok(())
    } else {
        Err(ReservationRejection::InvalidVaccineName)
    }
}

fn citizen_registered(
    _: &ReservationForm,
    context: &ReservationContext,
    _: &VaccineCatalog,
) -> Result<(), ReservationRejection> {
    if context.citizen_registered {
        Ok(())
    } else {
        Err(ReservationRejection::NotRegistered)
    }
}

/// Run every rule in order and report the first failure.
pub fn validate_reservation(
    form: &ReservationForm,
    context: &ReservationContext,
    catalog: &VaccineCatalog,
) -> Result<(), ReservationRejection> {
    for rule in RESERVATION_RULES.iter() {
        if let Err(rejection) = rule.check(form, context, catalog) {
            tracing::debug!(
                rule = rule.name,
                citizen_id = %form.citizen_id,
                "Reservation rejected"
            );
            return Err(rejection);
        }
    }
    Ok(())
}
