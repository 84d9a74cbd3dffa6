use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{ParkingSpot, ParkingSpotInput};
use super::repository::ParkingSpotRepository;
use super::PARKING_SPOT;
use crate::errors::ServiceError;

/// Parking spot business service independent of web framework.
pub struct ParkingSpotService<R: ParkingSpotRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ParkingSpotRepository + ?Sized> ParkingSpotService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new parking spot.
    ///
    /// Uniqueness is checked by the repository, atomically with the write, in
    /// order: license plate, spot number, then the apartment/block pair. The
    /// first violation is returned as [`ServiceError::Conflict`].
    ///
    /// # Examples
    /// ```
    /// use service::parking_spot::{ParkingSpotService, domain::ParkingSpotInput, repository::mock::InMemoryParkingSpotRepository};
    /// use std::sync::Arc;
    /// let svc = ParkingSpotService::new(Arc::new(InMemoryParkingSpotRepository::default()));
    /// let input = ParkingSpotInput {
    ///     parking_spot_number: "12".into(), license_plate_car: "ABC-1234".into(),
    ///     brand_car: "Honda".into(), model_car: "Civic".into(), color_car: "Black".into(),
    ///     responsible_name: "Ana".into(), apartment: "101".into(), block: "A".into(),
    /// };
    /// let spot = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(spot.parking_spot_number, "12");
    /// let again = ParkingSpotInput { parking_spot_number: "13".into(), ..input };
    /// let err = tokio_test::block_on(svc.create(again)).unwrap_err();
    /// assert_eq!(err.to_string(), "Conflict: License Plate Car is already in use!");
    /// ```
    #[instrument(skip(self, input), fields(parking_spot_number = %input.parking_spot_number))]
    pub async fn create(&self, input: ParkingSpotInput) -> Result<ParkingSpot, ServiceError> {
        input.validate()?;
        let record = input.into_record(Uuid::new_v4(), Utc::now().into());
        let created = match self.repo.insert(record).await {
            Ok(created) => created,
            Err(ServiceError::Conflict(field)) => {
                debug!(%field, "create rejected");
                return Err(ServiceError::Conflict(field));
            }
            Err(e) => return Err(e),
        };
        info!(id = %created.id, parking_spot_number = %created.parking_spot_number, "parking_spot_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<ParkingSpot>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<ParkingSpot, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(PARKING_SPOT))
    }

    /// Replace every field except `id` and `registration_date`.
    /// Uniqueness against other records is not re-checked here.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn update(&self, id: Uuid, input: ParkingSpotInput) -> Result<ParkingSpot, ServiceError> {
        input.validate()?;
        let existing = self.get(id).await?;
        let record = input.into_record(existing.id, existing.registration_date);
        let updated = self.repo.update(record).await?;
        info!(id = %updated.id, "parking_spot_updated");
        Ok(updated)
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(PARKING_SPOT));
        }
        info!(id = %id, "parking_spot_deleted");
        Ok(())
    }

    pub async fn exists_by_license_plate_car(&self, plate: &str) -> Result<bool, ServiceError> {
        self.repo.exists_by_license_plate_car(plate).await
    }

    pub async fn exists_by_parking_spot_number(&self, number: &str) -> Result<bool, ServiceError> {
        self.repo.exists_by_parking_spot_number(number).await
    }

    pub async fn exists_by_apartment_and_block(&self, apartment: &str, block: &str) -> Result<bool, ServiceError> {
        self.repo.exists_by_apartment_and_block(apartment, block).await
    }
}
