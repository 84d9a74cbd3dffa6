use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const PARKING_SPOT_NUMBER_MAX: usize = 10;
pub const LICENSE_PLATE_CAR_MAX: usize = 10;
pub const CAR_ATTRIBUTE_MAX: usize = 70;
pub const RESPONSIBLE_NAME_MAX: usize = 130;
pub const APARTMENT_MAX: usize = 30;
pub const BLOCK_MAX: usize = 30;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parking_spot")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub registration_date: DateTimeWithTimeZone,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Required, non-blank, at most `max` characters.
pub fn validate_field(field: &str, value: &str, max: usize) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} must not be blank")));
    }
    if value.chars().count() > max {
        return Err(errors::ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn validate_license_plate_car(plate: &str) -> Result<(), errors::ModelError> {
    validate_field("licensePlateCar", plate, LICENSE_PLATE_CAR_MAX)
}

pub fn validate_parking_spot_number(number: &str) -> Result<(), errors::ModelError> {
    validate_field("parkingSpotNumber", number, PARKING_SPOT_NUMBER_MAX)
}

pub async fn exists_by_license_plate_car<C: ConnectionTrait>(db: &C, plate: &str) -> Result<bool, errors::ModelError> {
    let n = Entity::find()
        .filter(Column::LicensePlateCar.eq(plate))
        .count(db)
        .await?;
    Ok(n > 0)
}

pub async fn exists_by_parking_spot_number<C: ConnectionTrait>(db: &C, number: &str) -> Result<bool, errors::ModelError> {
    let n = Entity::find()
        .filter(Column::ParkingSpotNumber.eq(number))
        .count(db)
        .await?;
    Ok(n > 0)
}

pub async fn exists_by_apartment_and_block<C: ConnectionTrait>(db: &C, apartment: &str, block: &str) -> Result<bool, errors::ModelError> {
    let n = Entity::find()
        .filter(Column::Apartment.eq(apartment))
        .filter(Column::Block.eq(block))
        .count(db)
        .await?;
    Ok(n > 0)
}

/// All rows, oldest registration first.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::RegistrationDate)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Insert a fully-populated row as given.
pub async fn insert<C: ConnectionTrait>(db: &C, record: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(record.id),
        parking_spot_number: Set(record.parking_spot_number),
        license_plate_car: Set(record.license_plate_car),
        brand_car: Set(record.brand_car),
        model_car: Set(record.model_car),
        color_car: Set(record.color_car),
        registration_date: Set(record.registration_date),
        responsible_name: Set(record.responsible_name),
        apartment: Set(record.apartment),
        block: Set(record.block),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the mutable columns of an existing row. `id` and
/// `registration_date` are never part of the update set.
pub async fn replace<C: ConnectionTrait>(db: &C, record: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: sea_orm::ActiveValue::Unchanged(record.id),
        parking_spot_number: Set(record.parking_spot_number),
        license_plate_car: Set(record.license_plate_car),
        brand_car: Set(record.brand_car),
        model_car: Set(record.model_car),
        color_car: Set(record.color_car),
        registration_date: sea_orm::ActiveValue::Unchanged(record.registration_date),
        responsible_name: Set(record.responsible_name),
        apartment: Set(record.apartment),
        block: Set(record.block),
    };
    Ok(am.update(db).await?)
}

/// Returns true if a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected() {
        assert!(validate_field("modelCar", "   ", CAR_ATTRIBUTE_MAX).is_err());
        assert!(validate_field("modelCar", "", CAR_ATTRIBUTE_MAX).is_err());
        assert!(validate_field("modelCar", "Civic", CAR_ATTRIBUTE_MAX).is_ok());
    }

    #[test]
    fn license_plate_length_is_bounded() {
        assert!(validate_license_plate_car("ABC-1234").is_ok());
        let err = validate_license_plate_car("ABCD-123456").unwrap_err();
        assert!(err.to_string().contains("licensePlateCar"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_field("apartment", &"\u{e9}".repeat(APARTMENT_MAX), APARTMENT_MAX).is_ok());
        assert!(validate_field("apartment", &"\u{e9}".repeat(APARTMENT_MAX + 1), APARTMENT_MAX).is_err());
    }

    #[test]
    fn parking_spot_number_limit() {
        assert!(validate_parking_spot_number("12").is_ok());
        assert!(validate_parking_spot_number("12345678901").is_err());
    }

    #[test]
    fn model_serializes_camel_case() {
        let m = Model {
            id: Uuid::nil(),
            parking_spot_number: "12".into(),
            license_plate_car: "ABC1234".into(),
            brand_car: "Honda".into(),
            model_car: "Civic".into(),
            color_car: "Black".into(),
            registration_date: chrono::Utc::now().into(),
            responsible_name: "Ana".into(),
            apartment: "101".into(),
            block: "A".into(),
        };
        let v = serde_json::to_value(&m).expect("serialize");
        assert_eq!(v["parkingSpotNumber"], "12");
        assert_eq!(v["licensePlateCar"], "ABC1234");
        assert_eq!(v["responsibleName"], "Ana");
        assert!(v.get("registrationDate").is_some());
        assert!(v.get("license_plate_car").is_none());
    }
}
