use sea_orm_migration::prelude::*;

/// Unique index names; the repository maps violations back by name.
pub const UNIQ_LICENSE_PLATE_CAR: &str = "uniq_parking_spot_license_plate_car";
pub const UNIQ_PARKING_SPOT_NUMBER: &str = "uniq_parking_spot_number";
pub const UNIQ_APARTMENT_BLOCK: &str = "uniq_parking_spot_apartment_block";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(UNIQ_LICENSE_PLATE_CAR)
                    .table(ParkingSpot::Table)
                    .col(ParkingSpot::LicensePlateCar)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQ_PARKING_SPOT_NUMBER)
                    .table(ParkingSpot::Table)
                    .col(ParkingSpot::ParkingSpotNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Composite unique (apartment, block)
        manager
            .create_index(
                Index::create()
                    .name(UNIQ_APARTMENT_BLOCK)
                    .table(ParkingSpot::Table)
                    .col(ParkingSpot::Apartment)
                    .col(ParkingSpot::Block)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // list() orders by registration date
        manager
            .create_index(
                Index::create()
                    .name("idx_parking_spot_registration_date")
                    .table(ParkingSpot::Table)
                    .col(ParkingSpot::RegistrationDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_parking_spot_registration_date",
            UNIQ_APARTMENT_BLOCK,
            UNIQ_PARKING_SPOT_NUMBER,
            UNIQ_LICENSE_PLATE_CAR,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(ParkingSpot::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ParkingSpot { Table, LicensePlateCar, ParkingSpotNumber, Apartment, Block, RegistrationDate }
