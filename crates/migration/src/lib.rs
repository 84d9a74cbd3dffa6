//! Migrator for the parking control schema.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_parking_spot;
mod m20240101_000002_add_parking_spot_indexes;

pub use m20240101_000002_add_parking_spot_indexes::{
    UNIQ_APARTMENT_BLOCK, UNIQ_LICENSE_PLATE_CAR, UNIQ_PARKING_SPOT_NUMBER,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_parking_spot::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000002_add_parking_spot_indexes::Migration),
        ]
    }
}
