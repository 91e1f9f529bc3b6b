//! # Application State
//!
//! The page controller. Everything the two renderers need lives here and is
//! passed to them by reference each frame — neither the list nor the map
//! keeps its own copy of the catalog or the selection, so the display
//! indices can never diverge between views.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CatalogSource>   // where shows.json comes from
//! ├── shows: Vec<Show>                 // sorted once at load, then immutable
//! ├── is_loading: bool                 // fetch in flight
//! ├── load_error: Option<String>       // inline error pane text
//! ├── selected: Option<usize>          // active display index (list & map)
//! ├── view: View                       // which pane is active
//! ├── surface: MapSurface              // map readiness state machine
//! ├── markers: Vec<Marker>             // display-index marker table
//! ├── camera: MapCamera                // overview fit or tight focus
//! ├── queued_focus: Option<usize>      // focus issued before map was ready
//! ├── status_message: String           // status bar text
//! ├── band_name: String                // export branding
//! └── export_dir: PathBuf              // where the .ics lands
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::core::config::ResolvedConfig;
use crate::core::map::{MapCamera, MapSurface, Marker};
use crate::core::show::Show;

/// Which pane the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Map,
}

pub struct App {
    pub source: Arc<dyn CatalogSource>,
    pub shows: Vec<Show>,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub selected: Option<usize>,
    pub view: View,
    pub surface: MapSurface,
    pub markers: Vec<Marker>,
    pub camera: MapCamera,
    pub queued_focus: Option<usize>,
    pub status_message: String,
    pub band_name: String,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(source: Arc<dyn CatalogSource>, band_name: String, export_dir: PathBuf) -> Self {
        Self {
            source,
            shows: Vec::new(),
            is_loading: false,
            load_error: None,
            selected: None,
            view: View::List,
            surface: MapSurface::Uninitialized,
            markers: Vec::new(),
            camera: MapCamera::Overview,
            queued_focus: None,
            status_message: String::from("Welcome!"),
            band_name,
            export_dir,
        }
    }

    pub fn from_config(source: Arc<dyn CatalogSource>, config: &ResolvedConfig) -> Self {
        Self::new(source, config.band_name.clone(), config.export_dir.clone())
    }

    /// The show behind the current selection, if any.
    pub fn selected_show(&self) -> Option<&Show> {
        self.selected.and_then(|i| self.shows.get(i))
    }

    /// Whether the show at `index` has a map marker.
    pub fn has_marker(&self, index: usize) -> bool {
        self.shows
            .get(index)
            .is_some_and(|s| s.coordinates.is_some())
    }

    /// Loaded successfully but the band has nothing booked. Rendered as
    /// guidance text, distinct from the load-error pane.
    pub fn is_empty_catalog(&self) -> bool {
        !self.is_loading && self.load_error.is_none() && self.shows.is_empty()
    }
}
