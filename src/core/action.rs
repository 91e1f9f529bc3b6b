//! # Actions
//!
//! Everything that can happen in marquee becomes an `Action`.
//! User presses Enter on a card? That's `Action::FocusSelected`.
//! The fetch task finishes? That's `Action::CatalogLoaded(shows)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state, returning an `Effect` for the TUI to execute.
//! No I/O happens here, which is what makes the list/map synchronization
//! rules testable without a terminal or a network.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! The map readiness race lives entirely in this file: a focus request that
//! arrives while the surface is still `Uninitialized`/`Initializing` is
//! parked in `queued_focus` and applied by `MapReady` — the event-based
//! replacement for polling the map until it answers.

use std::path::PathBuf;

use log::{debug, warn};

use crate::core::map::{MapCamera, MapSurface, Marker};
use crate::core::show::Show;
use crate::core::state::{App, View};

#[derive(Debug)]
pub enum Action {
    /// Kick off (or restart) the catalog fetch.
    CatalogRequested,
    CatalogLoaded(Vec<Show>),
    CatalogFailed(String),

    /// Make the given pane active. Entering the map lazily initializes it.
    SwitchView(View),
    SelectNext,
    SelectPrev,
    /// "View on map" for the currently selected card.
    FocusSelected,
    /// "View on map" for a specific display index.
    FocusShow(usize),
    /// Open the marker's popup and point the detail panel at it.
    SelectMarker(usize),

    /// Surface initialization finished; carries the marker table.
    MapReady(Vec<Marker>),
    MapInitFailed(String),

    ExportRequested,
    ExportFinished(PathBuf),
    ExportFailed(String),
    OpenDirections,

    Quit,
}

/// Side effects the TUI performs after a state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Spawn the async catalog fetch.
    SpawnFetch,
    /// Build the marker table off the current catalog and report back
    /// with `MapReady` / `MapInitFailed`.
    InitializeMap,
    /// Serialize the catalog and write the .ics file.
    ExportCalendar,
    /// Open a deep link in the default browser.
    OpenUrl(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CatalogRequested => {
            if app.is_loading {
                return Effect::None;
            }
            app.is_loading = true;
            app.load_error = None;
            app.shows.clear();
            app.selected = None;
            app.queued_focus = None;
            app.markers.clear();
            app.surface = MapSurface::Uninitialized;
            app.camera = MapCamera::Overview;
            app.status_message = String::from("Loading shows...");
            Effect::SpawnFetch
        }

        Action::CatalogLoaded(shows) => {
            debug!("Catalog loaded: {} shows", shows.len());
            app.is_loading = false;
            app.shows = shows;
            app.selected = if app.shows.is_empty() { None } else { Some(0) };
            app.status_message = match app.shows.len() {
                0 => String::from("No upcoming shows"),
                1 => String::from("1 upcoming show"),
                n => format!("{n} upcoming shows"),
            };
            // The user may already be staring at the map pane.
            if app.view == View::Map && app.surface == MapSurface::Uninitialized {
                app.surface = MapSurface::Initializing;
                Effect::InitializeMap
            } else {
                Effect::None
            }
        }

        Action::CatalogFailed(message) => {
            warn!("Catalog load failed: {message}");
            app.is_loading = false;
            app.load_error = Some(message);
            app.status_message = String::from("Failed to load shows — press r to retry");
            Effect::None
        }

        Action::SwitchView(view) => {
            app.view = view;
            maybe_initialize_map(app)
        }

        Action::SelectNext => {
            step_selection(app, 1);
            Effect::None
        }

        Action::SelectPrev => {
            step_selection(app, -1);
            Effect::None
        }

        Action::FocusSelected => match app.selected {
            Some(index) => focus_show(app, index),
            None => Effect::None,
        },

        Action::FocusShow(index) => focus_show(app, index),

        Action::SelectMarker(index) => {
            if app.has_marker(index) {
                app.selected = Some(index);
                // A tight camera follows the popup to the new pin.
                if let MapCamera::Focused(_) = app.camera {
                    app.camera = MapCamera::Focused(index);
                }
            }
            Effect::None
        }

        Action::MapReady(markers) => {
            debug!("Map ready with {} markers", markers.len());
            app.markers = markers;
            app.surface = MapSurface::Ready;
            app.camera = MapCamera::Overview;
            if let Some(index) = app.queued_focus.take() {
                app.selected = Some(index);
                app.camera = MapCamera::Focused(index);
            }
            Effect::None
        }

        Action::MapInitFailed(message) => {
            warn!("Map init failed: {message}");
            app.surface = MapSurface::Failed(message);
            app.queued_focus = None;
            Effect::None
        }

        Action::ExportRequested => {
            if app.is_loading {
                app.status_message = String::from("Still loading shows...");
                return Effect::None;
            }
            if app.shows.is_empty() {
                // Empty catalog is a user-facing notice, never logged as an error.
                app.status_message = String::from("No shows to export");
                return Effect::None;
            }
            Effect::ExportCalendar
        }

        Action::ExportFinished(path) => {
            app.status_message = format!("Calendar saved to {}", path.display());
            Effect::None
        }

        Action::ExportFailed(message) => {
            warn!("Export failed: {message}");
            app.status_message = format!("Export failed: {message}");
            Effect::None
        }

        Action::OpenDirections => match app.selected_show().and_then(|s| s.directions_url()) {
            Some(url) => Effect::OpenUrl(url),
            None => Effect::None,
        },

        Action::Quit => Effect::Quit,
    }
}

/// Lazy, idempotent surface init: only from `Uninitialized`, only once the
/// catalog has something to say. Re-entering the map view later is a no-op.
fn maybe_initialize_map(app: &mut App) -> Effect {
    if app.view != View::Map {
        return Effect::None;
    }
    if app.is_loading || app.load_error.is_some() {
        return Effect::None;
    }
    if app.surface == MapSurface::Uninitialized {
        app.surface = MapSurface::Initializing;
        return Effect::InitializeMap;
    }
    Effect::None
}

/// "View on map": switch panes and aim the camera at the show's marker,
/// queueing the focus if the surface isn't ready yet. A show without
/// coordinates has no marker, so this must do nothing at all — not even
/// switch views.
fn focus_show(app: &mut App, index: usize) -> Effect {
    if index >= app.shows.len() || !app.has_marker(index) {
        return Effect::None;
    }
    if let MapSurface::Failed(_) = app.surface {
        app.status_message = String::from("Map unavailable");
        return Effect::None;
    }

    app.selected = Some(index);
    app.view = View::Map;
    match app.surface {
        MapSurface::Ready => {
            app.camera = MapCamera::Focused(index);
            Effect::None
        }
        MapSurface::Uninitialized => {
            app.queued_focus = Some(index);
            app.surface = MapSurface::Initializing;
            Effect::InitializeMap
        }
        MapSurface::Initializing => {
            app.queued_focus = Some(index);
            Effect::None
        }
        MapSurface::Failed(_) => unreachable!("handled above"),
    }
}

/// Move the selection by one step. The list walks every show; the map walks
/// only shows that have markers, skipping the rest in the step direction.
fn step_selection(app: &mut App, direction: isize) {
    if app.shows.is_empty() {
        return;
    }
    let len = app.shows.len() as isize;
    let current = app.selected.map(|i| i as isize).unwrap_or(-direction);
    let mut next = current + direction;

    if app.view == View::Map {
        while (0..len).contains(&next) && !app.has_marker(next as usize) {
            next += direction;
        }
    }

    if !(0..len).contains(&next) {
        return;
    }
    let next = next as usize;
    app.selected = Some(next);
    if app.view == View::Map && let MapCamera::Focused(_) = app.camera {
        app.camera = MapCamera::Focused(next);
    }
}
