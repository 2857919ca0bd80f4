use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::options::PlanOptions;
use crate::track_types::{Track, TrackId, Waypoint};

/// Built-in marker/line palette, cycled by track index.
pub const PALETTE: [&str; 20] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff", "#9a6324", "#fffac8", "#800000", "#aaffc3",
    "#808000", "#ffd8b1", "#000075", "#808080",
];

/// One marker to draw. `emphasized` affects presentation weight only
/// (size/outline), never logical content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub track_id: TrackId,
    pub position: Waypoint,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub emphasized: bool,
}

/// One connecting line to draw, in waypoint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSpec {
    pub track_id: TrackId,
    pub points: Vec<Waypoint>,
    pub color: String,
    pub emphasized: bool,
}

/// The computed set of visual primitives for the current track and
/// selection state. The host owns all actual styling and drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub markers: Vec<MarkerSpec>,
    pub lines: Vec<LineSpec>,
}

/// Compute the full render plan for `tracks`. Pure and deterministic;
/// re-run from scratch on every state change, no incremental diffing.
pub fn compute_plan(
    tracks: &[Track],
    selected: Option<TrackId>,
    opts: &PlanOptions,
) -> RenderPlan {
    let palette: Vec<&str> = match &opts.palette {
        Some(custom) if !custom.is_empty() => custom.iter().map(String::as_str).collect(),
        _ => PALETTE.to_vec(),
    };

    let mut markers = Vec::new();
    let mut lines = Vec::new();

    for (i, track) in tracks.iter().enumerate() {
        let color = palette[i % palette.len()];
        let emphasized = selected == Some(track.id);

        for (j, wpt) in track.waypoints.iter().enumerate() {
            markers.push(MarkerSpec {
                track_id: track.id,
                position: *wpt,
                color: color.to_string(),
                label: opts.include_labels.then(|| marker_label(&track.name, j)),
                emphasized,
            });
        }

        if track.waypoints.len() > 1 {
            lines.push(LineSpec {
                track_id: track.id,
                points: track.waypoints.clone(),
                color: color.to_string(),
                emphasized,
            });
        }
    }

    RenderPlan { markers, lines }
}

/// The first waypoint carries the bare track name; later ones are
/// numbered from 2.
fn marker_label(name: &str, waypoint_index: usize) -> String {
    if waypoint_index == 0 {
        name.to_string()
    } else {
        format!("{name} (pt {})", waypoint_index + 1)
    }
}

/// Export a render plan as a GeoJSON FeatureCollection: one Point feature
/// per marker, one LineString feature per line, so GeoJSON-consuming map
/// libraries can draw the plan directly.
pub fn to_feature_collection(plan: &RenderPlan) -> FeatureCollection {
    let mut features = Vec::with_capacity(plan.markers.len() + plan.lines.len());

    for marker in &plan.markers {
        let geometry = Geometry::new(Value::Point(coords(&marker.position)));

        let mut props = base_props("marker", marker.track_id, &marker.color, marker.emphasized);
        if let Some(label) = &marker.label {
            props.insert("label".to_string(), JsonValue::String(label.clone()));
        }

        features.push(feature(geometry, props));
    }

    for line in &plan.lines {
        let points: Vec<Vec<f64>> = line.points.iter().map(coords).collect();
        let geometry = Geometry::new(Value::LineString(points));
        let props = base_props("line", line.track_id, &line.color, line.emphasized);
        features.push(feature(geometry, props));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// GeoJSON coordinate order is [lon, lat].
fn coords(wpt: &Waypoint) -> Vec<f64> {
    vec![wpt.lon, wpt.lat]
}

fn base_props(
    feature_type: &str,
    track_id: TrackId,
    color: &str,
    emphasized: bool,
) -> Map<String, JsonValue> {
    let mut props = Map::new();
    props.insert(
        "featureType".to_string(),
        JsonValue::String(feature_type.to_string()),
    );
    props.insert("trackId".to_string(), JsonValue::Number(track_id.0.into()));
    props.insert("color".to_string(), JsonValue::String(color.to_string()));
    props.insert("emphasized".to_string(), JsonValue::Bool(emphasized));
    props
}

fn feature(geometry: Geometry, props: Map<String, JsonValue>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}
