//! Registration, reservation and cancellation workflows.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::error::ServiceError;
use super::metrics::{
    record_cancellation, record_citizen_removal, record_registration, record_reservation,
};
use super::registry::Registry;
use crate::models::{
    ApiVersion, Citizen, CitizenForm, CitizenSelector, Reservation, ReservationForm,
    ReservationSelector,
};
use crate::validation::{
    validate_registration, validate_reservation, CancellationRejection, CitizenRemovalRejection,
    ReservationContext, VaccineCatalog,
};

#[derive(Clone)]
pub struct GovernmentService {
    registry: Arc<dyn Registry>,
    catalog: VaccineCatalog,
    version: ApiVersion,
    /// Serializes mutating workflows so a rule check and the write it guards
    /// observe the same registry state.
    write_lock: Arc<Mutex<()>>,
}

impl GovernmentService {
    pub fn new(registry: Arc<dyn Registry>, catalog: VaccineCatalog, version: ApiVersion) -> Self {
        Self {
            registry,
            catalog,
            version,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn catalog(&self) -> &VaccineCatalog {
        &self.catalog
    }

    pub async fn register(&self, form: CitizenForm) -> Result<Citizen, ServiceError> {
        let form = form.normalized();
        let _guard = self.write_lock.lock().await;

        let already_registered = self.registry.get_citizen(&form.citizen_id).await?.is_some();
        if let Err(rejection) = validate_registration(&form, already_registered) {
            record_registration(rejection.outcome());
            return Err(rejection.into());
        }

        let citizen = Citizen::from_form(form, Utc::now());
        self.registry.insert_citizen(citizen.clone()).await?;
        record_registration("success");

        tracing::info!(citizen_id = %citizen.citizen_id, "Citizen registered");
        Ok(citizen)
    }

    pub async fn remove_citizen(&self, selector: CitizenSelector) -> Result<Citizen, ServiceError> {
        let citizen_id = selector.citizen_id.trim().to_string();
        let _guard = self.write_lock.lock().await;

        let matched = self
            .registry
            .get_citizen(&citizen_id)
            .await?
            .filter(|citizen| selector.matches(citizen));
        if matched.is_none() {
            record_citizen_removal("not_registered");
            return Err(CitizenRemovalRejection::NotRegistered.into());
        }

        let removed = self
            .registry
            .remove_citizen(&citizen_id)
            .await?
            .ok_or(CitizenRemovalRejection::NotRegistered)?;
        record_citizen_removal("success");

        tracing::info!(citizen_id = %citizen_id, "Citizen removed");
        Ok(removed)
    }

    pub async fn list_citizens(&self) -> Result<Vec<Citizen>, ServiceError> {
        Ok(self.registry.list_citizens().await?)
    }

    pub async fn reserve(&self, form: ReservationForm) -> Result<Reservation, ServiceError> {
        let form = form.normalized();
        let _guard = self.write_lock.lock().await;

        let context = ReservationContext {
            citizen_registered: self.registry.get_citizen(&form.citizen_id).await?.is_some(),
            has_active_reservation: self
                .registry
                .get_reservation(&form.citizen_id)
                .await?
                .is_some(),
        };

        if let Err(rejection) = validate_reservation(&form, &context, &self.catalog) {
            record_reservation(rejection.outcome());
            return Err(rejection.into());
        }

        let reservation = Reservation::from_form(form, Utc::now());
        self.registry.insert_reservation(reservation.clone()).await?;
        record_reservation("success");

        tracing::info!(
            citizen_id = %reservation.citizen_id,
            site_name = %reservation.site_name,
            vaccine_name = %reservation.vaccine_name,
            "Reservation created"
        );
        Ok(reservation)
    }

    pub async fn cancel_reservation(
        &self,
        selector: ReservationSelector,
    ) -> Result<Reservation, ServiceError> {
        let citizen_id = selector.citizen_id.trim().to_string();
        let _guard = self.write_lock.lock().await;

        let matched = self
            .registry
            .get_reservation(&citizen_id)
            .await?
            .filter(|reservation| selector.matches(reservation));
        if matched.is_none() {
            record_cancellation("no_reservation");
            return Err(CancellationRejection::NoReservation.into());
        }

        let removed = self
            .registry
            .remove_reservation(&citizen_id)
            .await?
            .ok_or(CancellationRejection::NoReservation)?;
        record_cancellation("success");

        tracing::info!(citizen_id = %citizen_id, "Reservation cancelled");
        Ok(removed)
    }

    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, ServiceError> {
        Ok(self.registry.list_reservations().await?)
    }

    pub async fn health_check(&self) -> Result<(), ServiceError> {
        Ok(self.registry.health_check().await?)
    }
}
