use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic point, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse `"LAT,LNG"` as typed on the command line.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (lat_s, lng_s) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoords(format!("expected LAT,LNG, got '{}'", s)))?;

        let lat: f64 = lat_s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoords(format!("bad latitude '{}'", lat_s.trim())))?;
        let lng: f64 = lng_s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoords(format!("bad longitude '{}'", lng_s.trim())))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoords(format!(
                "latitude {} out of range [-90, 90]",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidCoords(format!(
                "longitude {} out of range [-180, 180]",
                lng
            )));
        }

        Ok(Self { lat, lng })
    }
}

impl From<[f64; 2]> for Coords {
    fn from(a: [f64; 2]) -> Self {
        Self { lat: a[0], lng: a[1] }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}
