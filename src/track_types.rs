use serde::{Deserialize, Serialize};

/// Identifier of a user-created track. Assigned by the store from a
/// monotonic counter; never reused and never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

/// A single latitude/longitude point belonging to a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether lat is within [-90, 90] and lon within [-180, 180].
    pub fn in_range(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A user-created named path. Waypoints are kept in insertion order,
/// which is also path order; they may only grow by append or be replaced
/// wholesale through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub waypoints: Vec<Waypoint>,
}

impl Track {
    pub fn starting_position(&self) -> Option<Waypoint> {
        self.waypoints.first().copied()
    }
}
