//! Crowd density per temple zone

use serde::{Deserialize, Serialize};

/// Density at or above which a zone raises a high-severity alert
pub const HIGH_DENSITY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityLevel {
    Empty,
    Low,
    Medium,
    High,
}

impl DensityLevel {
    pub fn from_density(density: f64) -> Self {
        if density >= HIGH_DENSITY_THRESHOLD {
            DensityLevel::High
        } else if density >= 0.5 {
            DensityLevel::Medium
        } else if density >= 0.2 {
            DensityLevel::Low
        } else {
            DensityLevel::Empty
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDensity {
    pub zone: String,
    pub label: String,
    /// Occupancy fraction in [0, 1]
    pub density: f64,
}

impl ZoneDensity {
    pub fn level(&self) -> DensityLevel {
        DensityLevel::from_density(self.density)
    }
}

/// Zone with its derived level, as returned by `GET /api/crowd`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDensityView {
    #[serde(flatten)]
    pub zone: ZoneDensity,
    pub level: DensityLevel,
}

impl From<ZoneDensity> for ZoneDensityView {
    fn from(zone: ZoneDensity) -> Self {
        Self {
            level: zone.level(),
            zone,
        }
    }
}

/// Density update payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneDensityUpdate {
    pub density: f64,
}

/// Seed zones
pub fn default_zones() -> Vec<ZoneDensity> {
    [
        ("zoneA", "Main Hall", 0.92),
        ("zoneB", "Prayer Area", 0.67),
        ("zoneC", "Entrance", 0.31),
        ("zoneD", "Courtyard", 0.15),
    ]
    .into_iter()
    .map(|(zone, label, density)| ZoneDensity {
        zone: zone.to_string(),
        label: label.to_string(),
        density,
    })
    .collect()
}
