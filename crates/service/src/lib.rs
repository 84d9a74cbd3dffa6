//! Service layer providing the parking spot business operations on top of models.
//! - Separates business logic (uniqueness rules, identity, timestamps) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod parking_spot;
#[cfg(test)]
pub mod test_support;
