use crate::error::TrackError;
use crate::track_types::{Track, TrackId, Waypoint};

type Result<T> = std::result::Result<T, TrackError>;

/// Handle returned by [`TrackStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(pub(crate) u32);

type Subscriber = Box<dyn FnMut(&[Track])>;

/// Owns the list of user-created tracks.
///
/// Tracks are kept in creation order. Ids come from a monotonic counter,
/// so they are pairwise distinct and never reused. Subscribers are invoked
/// once immediately on registration with the current list, and again
/// synchronously after every successful mutation, with an owned snapshot.
///
/// One instance is constructed per application root and passed by
/// reference; the store never registers itself anywhere ambient.
#[derive(Default)]
pub struct TrackStore {
    tracks: Vec<Track>,
    next_id: u64,
    next_subscription: u32,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl TrackStore {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 0,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    /// Create a track with a fresh id and a single waypoint.
    ///
    /// The store validates its own invariants rather than trusting UI
    /// guards: an empty or whitespace-only name and out-of-range
    /// coordinates are rejected.
    pub fn add_track(&mut self, name: &str, first_waypoint: Waypoint) -> Result<TrackId> {
        if name.trim().is_empty() {
            return Err(TrackError::EmptyName);
        }
        validate_waypoint(&first_waypoint)?;

        self.next_id += 1;
        let id = TrackId(self.next_id);
        self.tracks.push(Track {
            id,
            name: name.to_string(),
            waypoints: vec![first_waypoint],
        });
        self.notify();
        Ok(id)
    }

    /// Append one waypoint to the track with `id`.
    /// Returns `false` without notifying if the id is unknown.
    pub fn add_waypoint(&mut self, id: TrackId, waypoint: Waypoint) -> Result<bool> {
        validate_waypoint(&waypoint)?;
        let Some(track) = self.tracks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        track.waypoints.push(waypoint);
        self.notify();
        Ok(true)
    }

    /// Wholesale-replace the stored track whose id matches `track.id`.
    /// Returns `false` without notifying if the id is unknown.
    pub fn update_track(&mut self, track: Track) -> Result<bool> {
        if track.name.trim().is_empty() {
            return Err(TrackError::EmptyName);
        }
        for wpt in &track.waypoints {
            validate_waypoint(wpt)?;
        }
        let Some(slot) = self.tracks.iter_mut().find(|t| t.id == track.id) else {
            return Ok(false);
        };
        *slot = track;
        self.notify();
        Ok(true)
    }

    /// Remove the track with `id`. Idempotent; notifies only when a track
    /// was actually removed.
    pub fn remove_track(&mut self, id: TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != id);
        if self.tracks.len() == before {
            return false;
        }
        self.notify();
        true
    }

    pub fn get_track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.get_track(id).is_some()
    }

    /// Current tracks in storage order (= creation order).
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Register a change callback. The callback fires once immediately
    /// with the current list, then after every successful mutation.
    pub fn subscribe(&mut self, mut callback: Subscriber) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        callback(&self.tracks);
        self.subscribers.push((id, callback));
        id
    }

    /// Drop a subscription. Unknown handles are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn notify(&mut self) {
        // Snapshot so callbacks never alias the store's interior state.
        let snapshot = self.tracks.clone();
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }
}

fn validate_waypoint(wpt: &Waypoint) -> Result<()> {
    if !wpt.lat.is_finite() || !(-90.0..=90.0).contains(&wpt.lat) {
        return Err(TrackError::InvalidCoordinate {
            field: "lat",
            value: wpt.lat,
        });
    }
    if !wpt.lon.is_finite() || !(-180.0..=180.0).contains(&wpt.lon) {
        return Err(TrackError::InvalidCoordinate {
            field: "lon",
            value: wpt.lon,
        });
    }
    Ok(())
}
