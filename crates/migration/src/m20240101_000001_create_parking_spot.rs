//! Create `parking_spot` table.
//! One row per parking spot assignment (spot, car, resident).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSpot::Table)
                    .if_not_exists()
                    .col(uuid(ParkingSpot::Id).primary_key())
                    .col(string_len(ParkingSpot::ParkingSpotNumber, 10).not_null())
                    .col(string_len(ParkingSpot::LicensePlateCar, 10).not_null())
                    .col(string_len(ParkingSpot::BrandCar, 70).not_null())
                    .col(string_len(ParkingSpot::ModelCar, 70).not_null())
                    .col(string_len(ParkingSpot::ColorCar, 70).not_null())
                    .col(timestamp_with_time_zone(ParkingSpot::RegistrationDate).not_null())
                    .col(string_len(ParkingSpot::ResponsibleName, 130).not_null())
                    .col(string_len(ParkingSpot::Apartment, 30).not_null())
                    .col(string_len(ParkingSpot::Block, 30).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ParkingSpot::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ParkingSpot {
    Table,
    Id,
    ParkingSpotNumber,
    LicensePlateCar,
    BrandCar,
    ModelCar,
    ColorCar,
    RegistrationDate,
    ResponsibleName,
    Apartment,
    Block,
}
