use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::warn;
use uuid::Uuid;

use models::errors::ModelError;
use models::parking_spot;

use crate::errors::{ServiceError, UniqueField};
use crate::parking_spot::domain::ParkingSpot;
use crate::parking_spot::repository::ParkingSpotRepository;
use crate::parking_spot::PARKING_SPOT;

pub struct SeaOrmParkingSpotRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmParkingSpotRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn db_err(e: sea_orm::DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

#[async_trait::async_trait]
impl ParkingSpotRepository for SeaOrmParkingSpotRepository {
    async fn list(&self) -> Result<Vec<ParkingSpot>, ServiceError> {
        Ok(parking_spot::list(&self.db).await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ParkingSpot>, ServiceError> {
        Ok(parking_spot::find(&self.db, id).await?)
    }

    async fn exists_by_license_plate_car(&self, plate: &str) -> Result<bool, ServiceError> {
        Ok(parking_spot::exists_by_license_plate_car(&self.db, plate).await?)
    }

    async fn exists_by_parking_spot_number(&self, number: &str) -> Result<bool, ServiceError> {
        Ok(parking_spot::exists_by_parking_spot_number(&self.db, number).await?)
    }

    async fn exists_by_apartment_and_block(&self, apartment: &str, block: &str) -> Result<bool, ServiceError> {
        Ok(parking_spot::exists_by_apartment_and_block(&self.db, apartment, block).await?)
    }

    async fn insert(&self, record: ParkingSpot) -> Result<ParkingSpot, ServiceError> {
        // Checks and insert share one transaction; the unique indexes catch
        // whatever slips between concurrent transactions.
        let txn = self.db.begin().await.map_err(db_err)?;
        let conflict = if parking_spot::exists_by_license_plate_car(&txn, &record.license_plate_car).await? {
            Some(UniqueField::LicensePlateCar)
        } else if parking_spot::exists_by_parking_spot_number(&txn, &record.parking_spot_number).await? {
            Some(UniqueField::ParkingSpotNumber)
        } else if parking_spot::exists_by_apartment_and_block(&txn, &record.apartment, &record.block).await? {
            Some(UniqueField::ApartmentBlock)
        } else {
            None
        };
        if let Some(field) = conflict {
            txn.rollback().await.map_err(db_err)?;
            return Err(ServiceError::Conflict(field));
        }

        match parking_spot::insert(&txn, record).await {
            Ok(created) => {
                txn.commit().await.map_err(db_err)?;
                Ok(created)
            }
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(error = %rb, "rollback after failed insert");
                }
                Err(e.into())
            }
        }
    }

    async fn update(&self, record: ParkingSpot) -> Result<ParkingSpot, ServiceError> {
        parking_spot::replace(&self.db, record).await.map_err(|e| match e {
            ModelError::NotFound => ServiceError::not_found(PARKING_SPOT),
            other => other.into(),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(parking_spot::delete(&self.db, id).await?)
    }
}
