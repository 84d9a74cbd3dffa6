use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::parking_spot::{
    self, APARTMENT_MAX, BLOCK_MAX, CAR_ATTRIBUTE_MAX, RESPONSIBLE_NAME_MAX,
};

use crate::errors::ServiceError;

/// Persisted parking spot record.
pub type ParkingSpot = parking_spot::Model;

/// Create/update payload: every record field except `id` and `registrationDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotInput {
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

impl ParkingSpotInput {
    /// Structural checks run before any store access.
    pub fn validate(&self) -> Result<(), ServiceError> {
        parking_spot::validate_parking_spot_number(&self.parking_spot_number)?;
        parking_spot::validate_license_plate_car(&self.license_plate_car)?;
        parking_spot::validate_field("brandCar", &self.brand_car, CAR_ATTRIBUTE_MAX)?;
        parking_spot::validate_field("modelCar", &self.model_car, CAR_ATTRIBUTE_MAX)?;
        parking_spot::validate_field("colorCar", &self.color_car, CAR_ATTRIBUTE_MAX)?;
        parking_spot::validate_field("responsibleName", &self.responsible_name, RESPONSIBLE_NAME_MAX)?;
        parking_spot::validate_field("apartment", &self.apartment, APARTMENT_MAX)?;
        parking_spot::validate_field("block", &self.block, BLOCK_MAX)?;
        Ok(())
    }

    /// Build a record carrying the given identity and registration date.
    pub fn into_record(self, id: Uuid, registration_date: sea_orm::prelude::DateTimeWithTimeZone) -> ParkingSpot {
        ParkingSpot {
            id,
            parking_spot_number: self.parking_spot_number,
            license_plate_car: self.license_plate_car,
            brand_car: self.brand_car,
            model_car: self.model_car,
            color_car: self.color_car,
            registration_date,
            responsible_name: self.responsible_name,
            apartment: self.apartment,
            block: self.block,
        }
    }
}
