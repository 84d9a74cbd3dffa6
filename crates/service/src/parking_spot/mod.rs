//! Parking spot module: three-layer architecture (domain, repository, service).
//!
//! Uniqueness rules on create live in the service; the repositories back them
//! with an atomic check-and-insert.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ParkingSpotService;

/// Entity name used in not-found messages.
pub const PARKING_SPOT: &str = "Parking Spot";
