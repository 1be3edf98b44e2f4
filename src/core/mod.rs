pub mod distance;
pub mod service;

pub use crate::domain::model::{CreateLocationRequest, Location, NearestLocation, NewLocation};
pub use crate::domain::ports::{DistanceCalculator, LocationStore, LocationUseCases, Storage};
pub use crate::utils::error::Result;
