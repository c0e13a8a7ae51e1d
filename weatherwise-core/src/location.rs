use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location access was denied")]
    Denied,
    #[error("location detection is not supported on this system")]
    Unsupported,
}

/// Platform location source. The widget only acts on the success/failure
/// outcome; coordinates are forwarded to the weather provider untouched.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Fixed-coordinate source, used until a real platform service is wired in.
#[derive(Debug, Clone)]
pub struct StaticLocation {
    coords: Coordinates,
}

impl StaticLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coords: Coordinates {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl LocationProvider for StaticLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coords)
    }
}

/// Source for hosts without any location service.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedLocation;

#[async_trait]
impl LocationProvider for UnsupportedLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}
