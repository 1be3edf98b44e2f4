use crate::core::distance::Haversine;
use crate::domain::model::{CreateLocationRequest, Location, NearestLocation, NewLocation};
use crate::domain::ports::{DistanceCalculator, LocationStore, LocationUseCases};
use crate::utils::error::{LocationError, Result};
use crate::utils::validation::{validate_coordinates, validate_non_empty_string};
use async_trait::async_trait;

/// 地點業務邏輯：驗證、重名檢查、最近點搜尋
///
/// Holds no mutable state of its own; everything lives in the store.
pub struct LocationService<S: LocationStore, D: DistanceCalculator = Haversine> {
    store: S,
    calculator: D,
}

impl<S: LocationStore> LocationService<S, Haversine> {
    pub fn new(store: S) -> Self {
        Self::with_calculator(store, Haversine)
    }
}

impl<S: LocationStore, D: DistanceCalculator> LocationService<S, D> {
    pub fn with_calculator(store: S, calculator: D) -> Self {
        Self { store, calculator }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: LocationStore, D: DistanceCalculator> LocationUseCases for LocationService<S, D> {
    async fn create_location(&self, req: CreateLocationRequest) -> Result<Location> {
        validate_coordinates(req.latitude, req.longitude)?;
        validate_non_empty_string("name", &req.name)?;

        // The store rejects a racing duplicate too; this check only avoids the write.
        if self.store.name_exists(&req.name).await? {
            return Err(LocationError::DuplicateNameError { name: req.name });
        }

        let location = self.store.create(NewLocation::from(req)).await?;
        tracing::info!(
            id = location.id,
            name = %location.name,
            latitude = location.latitude,
            longitude = location.longitude,
            "Location created"
        );
        Ok(location)
    }

    async fn get_all_locations(&self) -> Result<Vec<Location>> {
        self.store.get_all().await
    }

    async fn get_location_by_name(&self, name: &str) -> Result<Location> {
        self.store.get_by_name(name).await
    }

    async fn find_nearest(&self, lat: f64, lon: f64) -> Result<NearestLocation> {
        validate_coordinates(lat, lon)?;

        let locations = self.store.get_all().await?;
        tracing::debug!("Scanning {} locations for nearest to ({}, {})", locations.len(), lat, lon);

        let mut best: Option<(Location, f64)> = None;
        for location in locations {
            let distance = self
                .calculator
                .distance_km(lat, lon, location.latitude, location.longitude);
            // strict `<`: the first of several equidistant locations wins
            let closer = match &best {
                Some((_, best_distance)) => distance < *best_distance,
                None => true,
            };
            if closer {
                best = Some((location, distance));
            }
        }

        let (location, distance_km) = best.ok_or(LocationError::NoLocationsError)?;
        Ok(NearestLocation {
            location,
            distance_km,
        })
    }

    async fn delete_location_by_name(&self, name: &str) -> Result<()> {
        // The store's delete is silent about missing rows, so look first.
        let existing = self.store.get_by_name(name).await?;
        self.store.delete_by_name(&existing.name).await?;
        tracing::info!(name = %existing.name, "Location deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::memory::InMemoryLocationStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn req(name: &str, latitude: f64, longitude: f64) -> CreateLocationRequest {
        CreateLocationRequest {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    /// Distance is read off the candidate's latitude, so tests pick exact values.
    struct LatitudeIsDistance;

    impl DistanceCalculator for LatitudeIsDistance {
        fn distance_km(&self, _lat1: f64, _lon1: f64, lat2: f64, _lon2: f64) -> f64 {
            lat2
        }
    }

    /// Store whose every call fails, counting writes.
    #[derive(Default)]
    struct BrokenStore {
        writes: AtomicUsize,
    }

    #[async_trait]
    impl LocationStore for BrokenStore {
        async fn create(&self, _location: NewLocation) -> Result<Location> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Err(LocationError::storage("connection refused"))
        }
        async fn get_all(&self) -> Result<Vec<Location>> {
            Err(LocationError::storage("connection refused"))
        }
        async fn get_by_name(&self, _name: &str) -> Result<Location> {
            Err(LocationError::storage("connection refused"))
        }
        async fn delete_by_name(&self, _name: &str) -> Result<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Err(LocationError::storage("connection refused"))
        }
        async fn name_exists(&self, _name: &str) -> Result<bool> {
            Err(LocationError::storage("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_location() {
        let service = LocationService::new(InMemoryLocationStore::new());

        let created = service
            .create_location(req("Lagos", 6.5244, 3.3792))
            .await
            .unwrap();

        assert_eq!(created.name, "Lagos");
        assert_eq!(created.latitude, 6.5244);
        assert_eq!(created.longitude, 3.3792);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(service.get_all_locations().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_performs_no_write() {
        let service = LocationService::new(InMemoryLocationStore::new());
        service.create_location(req("Lagos", 6.5, 3.4)).await.unwrap();

        let err = service
            .create_location(req("Lagos", 1.0, 1.0))
            .await
            .unwrap_err();

        assert!(matches!(err, LocationError::DuplicateNameError { ref name } if name == "Lagos"));
        assert_eq!(service.get_all_locations().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let service = LocationService::new(InMemoryLocationStore::new());
        service.create_location(req("Lagos", 6.5, 3.4)).await.unwrap();
        assert!(service.create_location(req("lagos", 6.5, 3.4)).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input_before_store() {
        let store = BrokenStore::default();
        let service = LocationService::new(store);

        let err = service.create_location(req("X", 91.0, 0.0)).await.unwrap_err();
        assert!(matches!(
            err,
            LocationError::ValidationError { ref field, .. } if field == "latitude"
        ));

        let err = service.create_location(req("X", 0.0, -181.0)).await.unwrap_err();
        assert!(matches!(
            err,
            LocationError::ValidationError { ref field, .. } if field == "longitude"
        ));

        let err = service.create_location(req("  ", 0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, LocationError::ValidationError { ref field, .. } if field == "name"));

        assert_eq!(service.store().writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_store_failures_pass_through() {
        let service = LocationService::new(BrokenStore::default());

        let err = service.create_location(req("X", 0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, LocationError::StorageError { .. }));
        assert_eq!(service.store().writes.load(Ordering::SeqCst), 0);

        assert!(matches!(
            service.get_all_locations().await.unwrap_err(),
            LocationError::StorageError { .. }
        ));
        assert!(matches!(
            service.find_nearest(0.0, 0.0).await.unwrap_err(),
            LocationError::StorageError { .. }
        ));
        assert!(matches!(
            service.delete_location_by_name("X").await.unwrap_err(),
            LocationError::StorageError { .. }
        ));
    }

    #[tokio::test]
    async fn test_find_nearest_empty_store() {
        let service = LocationService::new(InMemoryLocationStore::new());
        let err = service.find_nearest(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, LocationError::NoLocationsError));
    }

    #[tokio::test]
    async fn test_find_nearest_validates_query_first() {
        let service = LocationService::new(InMemoryLocationStore::new());
        let err = service.find_nearest(0.0, 200.0).await.unwrap_err();
        assert!(matches!(
            err,
            LocationError::ValidationError { ref field, .. } if field == "longitude"
        ));
    }

    #[tokio::test]
    async fn test_find_nearest_tie_goes_to_first_seen() {
        let service =
            LocationService::with_calculator(InMemoryLocationStore::new(), LatitudeIsDistance);
        service.create_location(req("ten", 10.0, 0.0)).await.unwrap();
        service.create_location(req("five-a", 5.0, 0.0)).await.unwrap();
        service.create_location(req("five-b", 5.0, 0.0)).await.unwrap();

        let nearest = service.find_nearest(0.0, 0.0).await.unwrap();

        assert_eq!(nearest.location.name, "five-a");
        assert_eq!(nearest.distance_km, 5.0);
    }

    #[tokio::test]
    async fn test_find_nearest_haversine() {
        let service = LocationService::new(InMemoryLocationStore::new());
        service.create_location(req("New York", 40.7128, -74.0060)).await.unwrap();
        service.create_location(req("London", 51.5074, -0.1278)).await.unwrap();
        service.create_location(req("Los Angeles", 34.0522, -118.2437)).await.unwrap();

        let nearest = service.find_nearest(48.8566, 2.3522).await.unwrap();

        assert_eq!(nearest.location.name, "London");
        assert!((nearest.distance_km - 344.0).abs() < 10.0);
    }

    #[tokio::test]
    async fn test_delete_missing_name_is_not_found() {
        let service = LocationService::new(InMemoryLocationStore::new());
        service.create_location(req("Lagos", 6.5, 3.4)).await.unwrap();

        let err = service.delete_location_by_name("Abuja").await.unwrap_err();

        assert!(matches!(err, LocationError::NotFoundError { ref name } if name == "Abuja"));
        assert_eq!(service.get_all_locations().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let service = LocationService::new(InMemoryLocationStore::new());
        service.create_location(req("Lagos", 6.5, 3.4)).await.unwrap();
        service.create_location(req("Abuja", 9.07, 7.39)).await.unwrap();

        service.delete_location_by_name("Lagos").await.unwrap();

        let remaining = service.get_all_locations().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Abuja");
        assert!(matches!(
            service.get_location_by_name("Lagos").await.unwrap_err(),
            LocationError::NotFoundError { .. }
        ));
    }
}
