use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type LocationId = u64;

/// A persisted, named point. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 建立地點的請求內容，驗證後轉成 [`NewLocation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A location that has passed validation but has no id or timestamps yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewLocation {
    /// Stamp the store-assigned id and write time.
    pub fn into_location(self, id: LocationId, now: DateTime<Utc>) -> Location {
        Location {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CreateLocationRequest> for NewLocation {
    fn from(req: CreateLocationRequest) -> Self {
        Self {
            name: req.name,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestLocation {
    pub location: Location,
    pub distance_km: f64,
}
