pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::http::{build_router, serve};
pub use adapters::storage::{FileLocationStore, InMemoryLocationStore, LocalStorage};
pub use config::AppConfig;
pub use crate::core::distance::{haversine_km, Haversine};
pub use crate::core::service::LocationService;
pub use domain::model::{CreateLocationRequest, Location, NearestLocation, NewLocation};
pub use domain::ports::{DistanceCalculator, LocationStore, LocationUseCases, Storage};
pub use utils::error::{LocationError, Result};
