use crate::store::TrackStore;
use crate::track_types::TrackId;

/// Which single track, if any, is selected for detail display.
///
/// Two states: idle (nothing selected) and selected. The selected id must
/// always reference a track currently present in the store; [`Self::sync`]
/// restores that invariant after deletions.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<TrackId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if it exists in the store. Returns whether a selection
    /// was made; unknown ids leave the current state untouched.
    pub fn select(&mut self, id: TrackId, store: &TrackStore) -> bool {
        if !store.contains(id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Back to idle. Used for background/map clicks and the explicit
    /// close action on the detail panel.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clear the selection if the selected track no longer exists.
    /// Called after every store mutation.
    pub fn sync(&mut self, store: &TrackStore) {
        if let Some(id) = self.selected {
            if !store.contains(id) {
                self.selected = None;
            }
        }
    }

    pub fn selected(&self) -> Option<TrackId> {
        self.selected
    }

    pub fn is_selected(&self, id: TrackId) -> bool {
        self.selected == Some(id)
    }
}
