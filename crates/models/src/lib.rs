pub mod errors;
pub mod db;
pub mod parking_spot;
