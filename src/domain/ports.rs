use crate::domain::model::{CreateLocationRequest, Location, NearestLocation, NewLocation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Raw byte storage used by file-backed stores.
pub trait Storage: Send + Sync {
    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 地點的持久化介面
///
/// Implementations must make each call atomic on its own and must reject a
/// second location with an existing name in `create`, reporting
/// `DuplicateNameError`. `delete_by_name` does not report a missing name.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn create(&self, location: NewLocation) -> Result<Location>;
    async fn get_all(&self) -> Result<Vec<Location>>;
    /// Fails with `NotFoundError` when no location has this name.
    async fn get_by_name(&self, name: &str) -> Result<Location>;
    async fn delete_by_name(&self, name: &str) -> Result<()>;
    async fn name_exists(&self, name: &str) -> Result<bool>;
}

pub trait DistanceCalculator: Send + Sync {
    /// Distance in kilometres between two points given in decimal degrees.
    fn distance_km(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64;
}

/// The operations callers (HTTP, CLI) drive.
#[async_trait]
pub trait LocationUseCases: Send + Sync {
    async fn create_location(&self, req: CreateLocationRequest) -> Result<Location>;
    async fn get_all_locations(&self) -> Result<Vec<Location>>;
    async fn get_location_by_name(&self, name: &str) -> Result<Location>;
    async fn find_nearest(&self, lat: f64, lon: f64) -> Result<NearestLocation>;
    async fn delete_location_by_name(&self, name: &str) -> Result<()>;
}
