use async_trait::async_trait;
use uuid::Uuid;

use super::domain::ParkingSpot;
use crate::errors::{ServiceError, UniqueField};

/// Repository abstraction for parking spot persistence.
#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ParkingSpot>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<ParkingSpot>, ServiceError>;

    async fn exists_by_license_plate_car(&self, plate: &str) -> Result<bool, ServiceError>;
    async fn exists_by_parking_spot_number(&self, number: &str) -> Result<bool, ServiceError>;
    async fn exists_by_apartment_and_block(&self, apartment: &str, block: &str) -> Result<bool, ServiceError>;

    /// Persist a new record. Must re-check uniqueness atomically with the write
    /// and fail with [`ServiceError::Conflict`] on the first violated field.
    async fn insert(&self, record: ParkingSpot) -> Result<ParkingSpot, ServiceError>;
    /// Overwrite an existing record, keeping its stored `id` and `registration_date`.
    async fn update(&self, record: ParkingSpot) -> Result<ParkingSpot, ServiceError>;
    /// Returns false if nothing was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// First uniqueness rule `candidate` breaks against `existing`, in create order.
pub fn first_conflict<'a, I>(existing: I, candidate: &ParkingSpot) -> Option<UniqueField>
where
    I: IntoIterator<Item = &'a ParkingSpot> + Clone,
{
    if existing.clone().into_iter().any(|r| r.license_plate_car == candidate.license_plate_car) {
        return Some(UniqueField::LicensePlateCar);
    }
    if existing.clone().into_iter().any(|r| r.parking_spot_number == candidate.parking_spot_number) {
        return Some(UniqueField::ParkingSpotNumber);
    }
    if existing
        .into_iter()
        .any(|r| r.apartment == candidate.apartment && r.block == candidate.block)
    {
        return Some(UniqueField::ApartmentBlock);
    }
    None
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use tokio::sync::Mutex;

    use crate::parking_spot::PARKING_SPOT;

    /// Rows kept in insertion order; one lock covers check and write.
    #[derive(Default)]
    pub struct InMemoryParkingSpotRepository {
        rows: Mutex<Vec<ParkingSpot>>,
    }

    #[async_trait]
    impl ParkingSpotRepository for InMemoryParkingSpotRepository {
        async fn list(&self) -> Result<Vec<ParkingSpot>, ServiceError> {
            Ok(self.rows.lock().await.clone())
        }

        async fn get(&self, id: Uuid) -> Result<Option<ParkingSpot>, ServiceError> {
            Ok(self.rows.lock().await.iter().find(|r| r.id == id).cloned())
        }

        async fn exists_by_license_plate_car(&self, plate: &str) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().await.iter().any(|r| r.license_plate_car == plate))
        }

        async fn exists_by_parking_spot_number(&self, number: &str) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().await.iter().any(|r| r.parking_spot_number == number))
        }

        async fn exists_by_apartment_and_block(&self, apartment: &str, block: &str) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().await.iter().any(|r| r.apartment == apartment && r.block == block))
        }

        async fn insert(&self, record: ParkingSpot) -> Result<ParkingSpot, ServiceError> {
            let mut rows = self.rows.lock().await;
            if let Some(field) = first_conflict(rows.iter(), &record) {
                return Err(ServiceError::Conflict(field));
            }
            rows.push(record.clone());
            Ok(record)
        }

        async fn update(&self, record: ParkingSpot) -> Result<ParkingSpot, ServiceError> {
            let mut rows = self.rows.lock().await;
            let slot = rows
                .iter_mut()
                .find(|r| r.id == record.id)
                .ok_or_else(|| ServiceError::not_found(PARKING_SPOT))?;
            let registration_date = slot.registration_date;
            *slot = ParkingSpot { registration_date, ..record };
            Ok(slot.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().await;
            let before = rows.len();
            rows.retain(|r| r.id != id);
            Ok(rows.len() < before)
        }
    }
}
