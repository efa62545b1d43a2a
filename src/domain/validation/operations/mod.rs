//! Rule sets for every write operation, grouped by resource

pub mod airplanes;
pub mod airports;
pub mod flights;
pub mod people;
pub mod simulation;
