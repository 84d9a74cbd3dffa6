use std::fmt;

use models::errors::ModelError;
use thiserror::Error;

/// Field (or field pair) whose uniqueness a create would violate.
/// Variants are listed in the order create checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    LicensePlateCar,
    ParkingSpotNumber,
    ApartmentBlock,
}

impl UniqueField {
    pub fn message(self) -> &'static str {
        match self {
            UniqueField::LicensePlateCar => "License Plate Car is already in use!",
            UniqueField::ParkingSpotNumber => "Parking Spot is already in use!",
            UniqueField::ApartmentBlock => "Parking Spot already registered for this apartment/block!",
        }
    }

    /// Recover the field from a database unique-violation message.
    pub fn from_constraint(msg: &str) -> Option<Self> {
        if msg.contains(migration::UNIQ_LICENSE_PLATE_CAR) {
            Some(UniqueField::LicensePlateCar)
        } else if msg.contains(migration::UNIQ_PARKING_SPOT_NUMBER) {
            Some(UniqueField::ParkingSpotNumber)
        } else if msg.contains(migration::UNIQ_APARTMENT_BLOCK) {
            Some(UniqueField::ApartmentBlock)
        } else {
            None
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(UniqueField),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::UniqueViolation(msg) => match UniqueField::from_constraint(&msg) {
                Some(field) => ServiceError::Conflict(field),
                None => ServiceError::Db(msg),
            },
            ModelError::NotFound => ServiceError::NotFound("record not found".into()),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
