use std::cell::RefCell;
use std::rc::Rc;

use geojson::Value;
use trackmap_wasm::options::PlanOptions;
use trackmap_wasm::planner::{compute_plan, to_feature_collection, RenderPlan, PALETTE};
use trackmap_wasm::selection::SelectionController;
use trackmap_wasm::store::TrackStore;
use trackmap_wasm::track_types::{TrackId, Waypoint};

fn plan_for(store: &TrackStore, selection: &SelectionController) -> RenderPlan {
    compute_plan(store.tracks(), selection.selected(), &PlanOptions::default())
}

// ---- track lifecycle ----

#[test]
fn test_create_named_track_from_click() {
    // Right-click at the Eiffel Tower, confirm the name "A".
    let mut store = TrackStore::new();
    let selection = SelectionController::new();
    store.add_track("A", Waypoint::new(48.85, 2.29)).unwrap();

    assert_eq!(store.len(), 1);
    let plan = plan_for(&store, &selection);
    assert_eq!(plan.markers.len(), 1);
    assert_eq!(plan.markers[0].label.as_deref(), Some("A"));
    assert!(plan.lines.is_empty());
}

#[test]
fn test_update_appends_waypoint_and_grows_plan() {
    let mut store = TrackStore::new();
    let selection = SelectionController::new();
    let id = store.add_track("A", Waypoint::new(48.85, 2.29)).unwrap();

    let mut track = store.get_track(id).unwrap().clone();
    track.waypoints.push(Waypoint::new(48.86, 2.30));
    assert!(store.update_track(track).unwrap());

    let plan = plan_for(&store, &selection);
    assert_eq!(plan.markers.len(), 2);
    assert_eq!(plan.markers[0].label.as_deref(), Some("A"));
    assert_eq!(plan.markers[1].label.as_deref(), Some("A (pt 2)"));
    assert_eq!(plan.lines.len(), 1);
    assert_eq!(plan.lines[0].points.len(), 2);
}

#[test]
fn test_ids_pairwise_distinct() {
    let mut store = TrackStore::new();
    let mut ids = Vec::new();
    for i in 0..50 {
        ids.push(
            store
                .add_track(&format!("t{i}"), Waypoint::new(0.0, 0.0))
                .unwrap(),
        );
    }
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn test_ids_survive_removal_of_earlier_tracks() {
    let mut store = TrackStore::new();
    let a = store.add_track("A", Waypoint::new(0.0, 0.0)).unwrap();
    let b = store.add_track("B", Waypoint::new(1.0, 1.0)).unwrap();
    store.remove_track(a);
    let c = store.add_track("C", Waypoint::new(2.0, 2.0)).unwrap();

    // No reuse of the removed id.
    assert_ne!(c, a);
    assert_ne!(c, b);
    assert_eq!(store.get_track(b).unwrap().name, "B");
}

// ---- selection ----

#[test]
fn test_select_then_remove_returns_to_idle() {
    let mut store = TrackStore::new();
    let mut selection = SelectionController::new();
    let id = store.add_track("A", Waypoint::new(48.85, 2.29)).unwrap();
    store.add_track("B", Waypoint::new(48.86, 2.30)).unwrap();

    assert!(selection.select(id, &store));
    store.remove_track(id);
    selection.sync(&store);

    assert_eq!(selection.selected(), None);
    let plan = plan_for(&store, &selection);
    assert!(plan.markers.iter().all(|m| !m.emphasized));
    assert!(plan.lines.iter().all(|l| !l.emphasized));
}

#[test]
fn test_marker_click_then_map_click() {
    let mut store = TrackStore::new();
    let mut selection = SelectionController::new();
    let id = store.add_track("A", Waypoint::new(48.85, 2.29)).unwrap();
    store.add_waypoint(id, Waypoint::new(48.86, 2.30)).unwrap();

    assert!(selection.select(id, &store));
    let plan = plan_for(&store, &selection);
    assert!(plan.markers.iter().all(|m| m.emphasized));
    assert!(plan.lines[0].emphasized);

    // Click on the base map drops the selection.
    selection.clear();
    let plan = plan_for(&store, &selection);
    assert!(plan.markers.iter().all(|m| !m.emphasized));
}

#[test]
fn test_selection_of_unknown_id_is_rejected() {
    let mut store = TrackStore::new();
    let mut selection = SelectionController::new();
    store.add_track("A", Waypoint::new(0.0, 0.0)).unwrap();

    assert!(!selection.select(TrackId(999), &store));
    assert_eq!(selection.selected(), None);
}

// ---- plan invariants ----

#[test]
fn test_marker_and_line_counts() {
    let mut store = TrackStore::new();
    let selection = SelectionController::new();

    let a = store.add_track("A", Waypoint::new(0.0, 0.0)).unwrap();
    store.add_waypoint(a, Waypoint::new(0.1, 0.1)).unwrap();
    store.add_waypoint(a, Waypoint::new(0.2, 0.2)).unwrap();
    store.add_track("B", Waypoint::new(1.0, 1.0)).unwrap();
    let c = store.add_track("C", Waypoint::new(2.0, 2.0)).unwrap();
    store.add_waypoint(c, Waypoint::new(2.1, 2.1)).unwrap();

    let plan = plan_for(&store, &selection);
    let waypoint_total: usize = store.tracks().iter().map(|t| t.waypoints.len()).sum();
    let multi_point = store
        .tracks()
        .iter()
        .filter(|t| t.waypoints.len() > 1)
        .count();
    assert_eq!(plan.markers.len(), waypoint_total);
    assert_eq!(plan.lines.len(), multi_point);
}

#[test]
fn test_colors_follow_list_index_after_removal() {
    let mut store = TrackStore::new();
    let selection = SelectionController::new();
    let a = store.add_track("A", Waypoint::new(0.0, 0.0)).unwrap();
    store.add_track("B", Waypoint::new(1.0, 1.0)).unwrap();

    // B is at index 1 while A exists...
    let plan = plan_for(&store, &selection);
    assert_eq!(plan.markers[1].color, PALETTE[1]);

    // ...and shifts to index 0 (and its color) once A is removed.
    store.remove_track(a);
    let plan = plan_for(&store, &selection);
    assert_eq!(plan.markers[0].color, PALETTE[0]);
}

// ---- subscription-driven re-render ----

#[test]
fn test_each_mutation_triggers_a_full_recompute() {
    let plans = Rc::new(RefCell::new(Vec::new()));
    let mut store = TrackStore::new();

    // Stand-in for the host: recompute the whole plan on every emission.
    let sink = Rc::clone(&plans);
    store.subscribe(Box::new(move |tracks| {
        let plan = compute_plan(tracks, None, &PlanOptions::default());
        sink.borrow_mut().push(plan.markers.len());
    }));

    let id = store.add_track("A", Waypoint::new(48.85, 2.29)).unwrap();
    store.add_waypoint(id, Waypoint::new(48.86, 2.30)).unwrap();
    store.add_waypoint(id, Waypoint::new(48.87, 2.31)).unwrap();
    store.remove_track(id);

    // One immediate emission plus one per mutation, no batching.
    assert_eq!(*plans.borrow(), vec![0, 1, 2, 3, 0]);
}

// ---- GeoJSON output ----

#[test]
fn test_geojson_round_through_serde() {
    let mut store = TrackStore::new();
    let mut selection = SelectionController::new();
    let id = store
        .add_track("Walk", Waypoint::new(48.8584, 2.2945))
        .unwrap();
    store.add_waypoint(id, Waypoint::new(48.8600, 2.2970)).unwrap();
    selection.select(id, &store);

    let plan = plan_for(&store, &selection);
    let fc = to_feature_collection(&plan);
    assert_eq!(fc.features.len(), 3);

    // Parseable by any GeoJSON consumer.
    let text = serde_json::to_string(&fc).unwrap();
    let parsed: geojson::GeoJson = text.parse().unwrap();
    match parsed {
        geojson::GeoJson::FeatureCollection(fc) => {
            let line = fc
                .features
                .iter()
                .find(|f| f.properties.as_ref().unwrap()["featureType"] == "line")
                .unwrap();
            match &line.geometry.as_ref().unwrap().value {
                Value::LineString(points) => {
                    assert_eq!(points.len(), 2);
                    assert!((points[0][0] - 2.2945).abs() < 1e-10); // lon first
                }
                _ => panic!("Expected LineString"),
            }
            assert_eq!(line.properties.as_ref().unwrap()["emphasized"], true);
        }
        _ => panic!("Expected FeatureCollection"),
    }
}
