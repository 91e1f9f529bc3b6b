//! # Map Domain
//!
//! Marker table, surface state machine, and viewport math for the map view.
//! No drawing happens here — the TUI's canvas component reads these types
//! and renders them, which keeps the geometry testable without a terminal.
//!
//! ```text
//! Uninitialized ──(view shown)──▶ Initializing ──▶ Ready
//!                                      │
//!                                      └──▶ Failed (map pane degrades,
//!                                            list stays usable)
//! ```

use std::fmt;

use crate::core::show::Show;

/// Fixed default viewpoint when no show carries coordinates:
/// roughly the middle of the continental US.
pub const DEFAULT_CENTER: (f64, f64) = (39.8, -98.6);
pub const DEFAULT_LAT_SPAN: f64 = 30.0;
pub const DEFAULT_LNG_SPAN: f64 = 70.0;

/// Overview fit pads the marker bounding box by this factor on each side.
pub const FIT_PADDING: f64 = 0.10;

/// Tight camera spans used when a single marker is focused.
pub const FOCUS_LAT_SPAN: f64 = 2.0;
pub const FOCUS_LNG_SPAN: f64 = 4.0;

// A degenerate bounding box (one marker, or several at the same venue)
// would collapse the viewport to a point; never fit tighter than this.
const MIN_LAT_SPAN: f64 = FOCUS_LAT_SPAN;
const MIN_LNG_SPAN: f64 = FOCUS_LNG_SPAN;

/// One map pin. `display_index` is the show's position in the sorted
/// catalog — the same index the list uses, so selection can cross views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub display_index: usize,
    pub lat: f64,
    pub lng: f64,
}

impl Marker {
    /// 1-based label rendered next to the pin.
    pub fn label(&self) -> usize {
        self.display_index + 1
    }
}

/// Lifecycle of the map surface. Selection and focus requests issued before
/// `Ready` are queued by the reducer, never dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MapSurface {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    Failed(String),
}

/// What the camera is looking at. `Focused` holds a display index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MapCamera {
    #[default]
    Overview,
    Focused(usize),
}

#[derive(Debug)]
pub enum MapInitError {
    /// Marker positions produced an unusable bounding box.
    InvalidBounds(String),
}

impl fmt::Display for MapInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapInitError::InvalidBounds(msg) => write!(f, "map init failed: {msg}"),
        }
    }
}

impl std::error::Error for MapInitError {}

/// Lat/lng window the canvas renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_lat: f64,
    pub center_lng: f64,
    pub lat_span: f64,
    pub lng_span: f64,
}

impl Viewport {
    /// Canvas x bounds (longitude, west to east).
    pub fn x_bounds(&self) -> [f64; 2] {
        [
            self.center_lng - self.lng_span / 2.0,
            self.center_lng + self.lng_span / 2.0,
        ]
    }

    /// Canvas y bounds (latitude, south to north).
    pub fn y_bounds(&self) -> [f64; 2] {
        [
            self.center_lat - self.lat_span / 2.0,
            self.center_lat + self.lat_span / 2.0,
        ]
    }
}

/// Build the marker table: one marker per show with coordinates, carrying
/// the show's display index. Shows without coordinates get no marker.
pub fn build_markers(shows: &[Show]) -> Result<Vec<Marker>, MapInitError> {
    let markers: Vec<Marker> = shows
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            s.coordinates.map(|c| Marker {
                display_index: i,
                lat: c.lat,
                lng: c.lng,
            })
        })
        .collect();

    // A source that skips catalog validation must not be able to wedge the
    // canvas with NaN bounds.
    for m in &markers {
        if !m.lat.is_finite() || !m.lng.is_finite() {
            return Err(MapInitError::InvalidBounds(format!(
                "marker {} has non-finite position",
                m.label()
            )));
        }
    }

    Ok(markers)
}

/// Overview camera: bound all markers, padded by [`FIT_PADDING`] per side.
/// With no markers, the fixed default viewpoint.
pub fn fit_overview(markers: &[Marker]) -> Viewport {
    if markers.is_empty() {
        return Viewport {
            center_lat: DEFAULT_CENTER.0,
            center_lng: DEFAULT_CENTER.1,
            lat_span: DEFAULT_LAT_SPAN,
            lng_span: DEFAULT_LNG_SPAN,
        };
    }

    let mut min_lat = f64::MAX;
    let mut max_lat = f64::MIN;
    let mut min_lng = f64::MAX;
    let mut max_lng = f64::MIN;
    for m in markers {
        min_lat = min_lat.min(m.lat);
        max_lat = max_lat.max(m.lat);
        min_lng = min_lng.min(m.lng);
        max_lng = max_lng.max(m.lng);
    }

    let lat_span = ((max_lat - min_lat) * (1.0 + 2.0 * FIT_PADDING)).max(MIN_LAT_SPAN);
    let lng_span = ((max_lng - min_lng) * (1.0 + 2.0 * FIT_PADDING)).max(MIN_LNG_SPAN);

    Viewport {
        center_lat: (min_lat + max_lat) / 2.0,
        center_lng: (min_lng + max_lng) / 2.0,
        lat_span,
        lng_span,
    }
}

/// Resolve the camera to a concrete viewport. A focused index with no
/// matching marker renders as the overview.
pub fn resolve_viewport(camera: MapCamera, markers: &[Marker]) -> Viewport {
    match camera {
        MapCamera::Overview => fit_overview(markers),
        MapCamera::Focused(index) => markers
            .iter()
            .find(|m| m.display_index == index)
            .map(|m| Viewport {
                center_lat: m.lat,
                center_lng: m.lng,
                lat_span: FOCUS_LAT_SPAN,
                lng_span: FOCUS_LNG_SPAN,
            })
            .unwrap_or_else(|| fit_overview(markers)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{show, show_at};

    fn mixed_shows() -> Vec<Show> {
        vec![
            show_at("The Roxy", 2026, 9, 18, 34.0906, -118.3884),
            show("Basement Bar", 2026, 10, 2), // no coordinates
            show_at("First Avenue", 2026, 10, 20, 44.9813, -93.2762),
        ]
    }

    #[test]
    fn test_markers_keep_display_indices_across_gaps() {
        let markers = build_markers(&mixed_shows()).unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].display_index, 0);
        assert_eq!(markers[1].display_index, 2);
    }

    #[test]
    fn test_marker_labels_are_one_based() {
        let markers = build_markers(&mixed_shows()).unwrap();
        assert_eq!(markers[0].label(), 1);
        assert_eq!(markers[1].label(), 3);
    }

    #[test]
    fn test_build_markers_rejects_non_finite_positions() {
        let shows = vec![show_at("Glitch", 2026, 9, 18, f64::NAN, 0.0)];
        assert!(matches!(
            build_markers(&shows),
            Err(MapInitError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_overview_defaults_without_markers() {
        let vp = fit_overview(&[]);
        assert_eq!(vp.center_lat, DEFAULT_CENTER.0);
        assert_eq!(vp.center_lng, DEFAULT_CENTER.1);
        assert_eq!(vp.lat_span, DEFAULT_LAT_SPAN);
    }

    #[test]
    fn test_overview_bounds_all_markers_with_padding() {
        let markers = build_markers(&mixed_shows()).unwrap();
        let vp = fit_overview(&markers);
        let [west, east] = vp.x_bounds();
        let [south, north] = vp.y_bounds();
        for m in &markers {
            assert!(m.lng > west && m.lng < east);
            assert!(m.lat > south && m.lat < north);
        }
        // 10% padding per side over the raw extent
        let raw_lat = 44.9813 - 34.0906;
        assert!((vp.lat_span - raw_lat * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_single_marker_gets_minimum_span() {
        let markers = vec![Marker {
            display_index: 0,
            lat: 34.0,
            lng: -118.0,
        }];
        let vp = fit_overview(&markers);
        assert_eq!(vp.lat_span, MIN_LAT_SPAN);
        assert_eq!(vp.lng_span, MIN_LNG_SPAN);
    }

    #[test]
    fn test_focused_camera_is_tighter_than_overview() {
        let markers = build_markers(&mixed_shows()).unwrap();
        let overview = resolve_viewport(MapCamera::Overview, &markers);
        let focused = resolve_viewport(MapCamera::Focused(2), &markers);
        assert!(focused.lat_span < overview.lat_span);
        assert_eq!(focused.center_lat, 44.9813);
        assert_eq!(focused.center_lng, -93.2762);
    }

    #[test]
    fn test_focus_on_unmarked_index_falls_back_to_overview() {
        let markers = build_markers(&mixed_shows()).unwrap();
        let vp = resolve_viewport(MapCamera::Focused(1), &markers);
        assert_eq!(vp, fit_overview(&markers));
    }
}
