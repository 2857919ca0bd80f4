pub mod attractions;
pub mod error;
pub mod options;
pub mod planner;
pub mod selection;
pub mod store;
pub mod timefmt;
pub mod track_types;

use wasm_bindgen::prelude::*;

use crate::options::PlanOptions;
use crate::planner::{compute_plan, to_feature_collection};
use crate::selection::SelectionController;
use crate::store::{SubscriptionId, TrackStore};
use crate::timefmt::Lang;
use crate::track_types::{Track, TrackId, Waypoint};

/// The host map's initial view center, [lon, lat] (Eiffel Tower).
pub const DEFAULT_CENTER: [f64; 2] = [2.2945, 48.8584];

/// Application root for a browser map front-end: one track store, one
/// selection controller, one set of render options. The JS host feeds
/// gestures in and draws the render plans that come back out; all state
/// lives here, in memory, and is lost on reload.
#[wasm_bindgen]
pub struct TrackMap {
    store: TrackStore,
    selection: SelectionController,
    options: PlanOptions,
}

#[wasm_bindgen]
impl TrackMap {
    /// Construct with an optional options object (undefined/null → defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<TrackMap, JsValue> {
        console_error_panic_hook::set_once();

        let options = parse_options(options)?;
        Ok(TrackMap {
            store: TrackStore::new(),
            selection: SelectionController::new(),
            options,
        })
    }

    /// Create a track with one waypoint, as confirmed from the naming
    /// panel after a right-click. Returns the new track's id.
    #[wasm_bindgen(js_name = addTrack)]
    pub fn add_track(&mut self, name: &str, lat: f64, lon: f64) -> Result<f64, JsValue> {
        let id = self.store.add_track(name, Waypoint::new(lat, lon))?;
        Ok(id.0 as f64)
    }

    /// Append a waypoint to an existing track. `false` if the id is unknown.
    #[wasm_bindgen(js_name = addWaypoint)]
    pub fn add_waypoint(&mut self, id: f64, lat: f64, lon: f64) -> Result<bool, JsValue> {
        Ok(self
            .store
            .add_waypoint(TrackId(id as u64), Waypoint::new(lat, lon))?)
    }

    /// Wholesale-replace a track (matched by its id). `false` if unknown.
    #[wasm_bindgen(js_name = updateTrack)]
    pub fn update_track(&mut self, track: JsValue) -> Result<bool, JsValue> {
        let track: Track =
            serde_wasm_bindgen::from_value(track).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.store.update_track(track)?)
    }

    /// Remove a track. Idempotent. Clears the selection if it pointed at
    /// the removed track.
    #[wasm_bindgen(js_name = removeTrack)]
    pub fn remove_track(&mut self, id: f64) -> bool {
        let removed = self.store.remove_track(TrackId(id as u64));
        self.selection.sync(&self.store);
        removed
    }

    /// The track with `id`, or undefined.
    #[wasm_bindgen(js_name = getTrackById)]
    pub fn get_track_by_id(&self, id: f64) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.store.get_track(TrackId(id as u64)))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current track list, in creation order.
    pub fn tracks(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.store.tracks())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = trackCount)]
    pub fn track_count(&self) -> usize {
        self.store.len()
    }

    /// Hit-tested click on a rendered marker: selects that marker's track.
    /// `false` if the id no longer exists.
    #[wasm_bindgen(js_name = onMarkerClick)]
    pub fn on_marker_click(&mut self, id: f64) -> bool {
        self.selection.select(TrackId(id as u64), &self.store)
    }

    /// Click on the base map or empty space: drops any selection.
    #[wasm_bindgen(js_name = onMapClick)]
    pub fn on_map_click(&mut self) {
        self.selection.clear();
    }

    /// Coordinate gesture (right-click confirm / "add waypoint"). With a
    /// track selected the point is appended to it and `true` is returned;
    /// otherwise `false`, telling the host to open its create-track panel.
    #[wasm_bindgen(js_name = onCoordinateClick)]
    pub fn on_coordinate_click(&mut self, lon: f64, lat: f64) -> Result<bool, JsValue> {
        match self.selection.selected() {
            Some(id) => Ok(self.store.add_waypoint(id, Waypoint::new(lat, lon))?),
            None => Ok(false),
        }
    }

    /// Explicit close action on the detail panel.
    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    #[wasm_bindgen(js_name = selectedTrackId)]
    pub fn selected_track_id(&self) -> Option<f64> {
        self.selection.selected().map(|id| id.0 as f64)
    }

    /// Full render plan for the current state, as a JS object.
    #[wasm_bindgen(js_name = renderPlan)]
    pub fn render_plan(&self) -> Result<JsValue, JsValue> {
        let plan = compute_plan(self.store.tracks(), self.selection.selected(), &self.options);
        serde_wasm_bindgen::to_value(&plan).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Render plan as a GeoJSON FeatureCollection, serialized to JSON text,
    /// for map libraries that ingest GeoJSON sources directly.
    #[wasm_bindgen(js_name = renderPlanGeoJson)]
    pub fn render_plan_geojson(&self) -> Result<String, JsValue> {
        let plan = compute_plan(self.store.tracks(), self.selection.selected(), &self.options);
        let fc = to_feature_collection(&plan);
        serde_json::to_string(&fc).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Register a change callback. It fires once immediately with the
    /// current track list and again after every mutation. Returns a handle
    /// for [`Self::unsubscribe`].
    pub fn subscribe(&mut self, callback: js_sys::Function) -> u32 {
        let id = self.store.subscribe(Box::new(move |tracks: &[Track]| {
            let value = serde_wasm_bindgen::to_value(tracks).unwrap_or(JsValue::UNDEFINED);
            let _ = callback.call1(&JsValue::NULL, &value);
        }));
        id.0
    }

    pub fn unsubscribe(&mut self, handle: u32) {
        self.store.unsubscribe(SubscriptionId(handle));
    }

    /// Initial map center, `[lon, lat]`.
    #[wasm_bindgen(js_name = defaultCenter)]
    pub fn default_center(&self) -> Vec<f64> {
        DEFAULT_CENTER.to_vec()
    }
}

/// The built-in points of interest, for the host's search panel.
#[wasm_bindgen(js_name = attractions)]
pub fn list_attractions() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&attractions::ATTRACTIONS)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Case-insensitive substring search over the points of interest.
#[wasm_bindgen(js_name = searchAttractions)]
pub fn search_attractions(query: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&attractions::search(query))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a 24-hour "HH:MM" string for display, in English or with
/// Eastern-Arabic numerals.
#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(hhmm: &str, use_arabic: bool) -> Result<String, JsValue> {
    let time = timefmt::parse_hhmm(hhmm)?;
    let lang = if use_arabic { Lang::Arabic } else { Lang::English };
    Ok(time.format_12h(lang))
}

/// Replace Western digits with Eastern-Arabic numerals.
#[wasm_bindgen(js_name = toArabicNumerals)]
pub fn to_arabic_numerals(text: &str) -> String {
    timefmt::to_arabic_numerals(text)
}

fn parse_options(options: JsValue) -> Result<PlanOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(PlanOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
