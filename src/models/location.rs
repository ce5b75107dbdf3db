use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidLocation(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidLocation(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Where an entry was recorded. Both parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub point: Option<GeoPoint>,
    pub address: Option<String>,
}

impl Location {
    /// Build a location from loose CLI/DB parts.
    /// Latitude and longitude must come together; a blank address is dropped.
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
        address: Option<String>,
    ) -> AppResult<Self> {
        let point = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)?),
            (None, None) => None,
            _ => {
                return Err(AppError::InvalidLocation(
                    "latitude and longitude must be given together".into(),
                ));
            }
        };

        let address = address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Ok(Self { point, address })
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_none() && self.address.is_none()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.point.map(|p| p.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.point.map(|p| p.longitude)
    }

    /// Human-readable form: the address when known, otherwise the coordinates.
    pub fn describe(&self) -> String {
        match (&self.address, &self.point) {
            (Some(a), _) => a.clone(),
            (None, Some(p)) => format!("{:.5}, {:.5}", p.latitude, p.longitude),
            (None, None) => String::new(),
        }
    }
}
