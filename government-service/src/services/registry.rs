use async_trait::async_trait;
use service_core::error::AppError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{Citizen, Reservation};

/// Storage for citizen and reservation records, both keyed by citizen id.
#[async_trait]
pub trait Registry: Send + Sync {
    async fn insert_citizen(&self, citizen: Citizen) -> Result<(), AppError>;
    async fn get_citizen(&self, citizen_id: &str) -> Result<Option<Citizen>, AppError>;
    /// Removes the citizen together with any reservation they hold.
    async fn remove_citizen(&self, citizen_id: &str) -> Result<Option<Citizen>, AppError>;
    async fn list_citizens(&self) -> Result<Vec<Citizen>, AppError>;

    async fn insert_reservation(&self, reservation: Reservation) -> Result<(), AppError>;
    async fn get_reservation(&self, citizen_id: &str) -> Result<Option<Reservation>, AppError>;
    async fn remove_reservation(&self, citizen_id: &str)
        -> Result<Option<Reservation>, AppError>;
    async fn list_reservations(&self) -> Result<Vec<Reservation>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

#[derive(Default)]
struct RegistryState {
    citizens: BTreeMap<String, Citizen>,
    reservations: BTreeMap<String, Reservation>,
}

/// Process-local registry. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn insert_citizen(&self, citizen: Citizen) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if state.citizens.contains_key(&citizen.citizen_id) {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "citizen {} already exists",
                citizen.citizen_id
            )));
        }
        state.citizens.insert(citizen.citizen_id.clone(), citizen);
        Ok(())
    }

    async fn get_citizen(&self, citizen_id: &str) -> Result<Option<Citizen>, AppError> {
        Ok(self.state.read().await.citizens.get(citizen_id).cloned())
    }

    async fn remove_citizen(&self, citizen_id: &str) -> Result<Option<Citizen>, AppError> {
        let mut state = self.state.write().await;
        let removed = state.citizens.remove(citizen_id);
        if removed.is_some() {
            state.reservations.remove(citizen_id);
        }
        Ok(removed)
    }

    async fn list_citizens(&self) -> Result<Vec<Citizen>, AppError> {
        Ok(self.state.read().await.citizens.values().cloned().collect())
    }

    async fn insert_reservation(&self, reservation: Reservation) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if state.reservations.contains_key(&reservation.citizen_id) {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "citizen {} already holds a reservation",
                reservation.citizen_id
            )));
        }
        state
            .reservations
            .insert(reservation.citizen_id.clone(), reservation);
        Ok(())
    }

    async fn get_reservation(&self, citizen_id: &str) -> Result<Option<Reservation>, AppError> {
        Ok(self.state.read().await.reservations.get(citizen_id).cloned())
    }

    async fn remove_reservation(
        &self,
        citizen_id: &str,
    ) -> Result<Option<Reservation>, AppError> {
        Ok(self.state.write().await.reservations.remove(citizen_id))
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(self.state.read().await.reservations.values().cloned().collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
