//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading** (catalog fetch in flight): draws every ~120ms so the
//!   spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background
//!   actions.
//!
//! ## Ordering
//!
//! Background work never mutates state directly. The fetch task and the
//! map initializer both send `Action`s over an mpsc channel, and the loop
//! feeds them through `update()` between frames — so map readiness arrives
//! as an event, and a `FocusShow` issued before `MapReady` is queued by the
//! reducer instead of racing the surface.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::catalog::{CatalogSource, HttpCatalog};
use crate::core::action::{Action, Effect, update};
use crate::core::calendar;
use crate::core::config::ResolvedConfig;
use crate::core::map;
use crate::core::state::{App, View};
use crate::tui::components::ShowListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub show_list: ShowListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            show_list: ShowListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CatalogSource> = Arc::new(HttpCatalog::new(config.shows_url.clone()));
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // First order of business: load the catalog.
    dispatch(&mut app, Action::CatalogRequested, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while the spinner runs, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(120)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = translate(&event, &app) else {
                continue;
            };
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }
        if should_quit {
            break;
        }

        // Handle background task actions (fetch results, map readiness)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Map a key event to a core action, given the current mode.
fn translate(event: &TuiEvent, app: &App) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::ToggleView => Some(Action::SwitchView(match app.view {
            View::List => View::Map,
            View::Map => View::List,
        })),
        TuiEvent::BackToList => Some(Action::SwitchView(View::List)),
        TuiEvent::CursorUp => Some(Action::SelectPrev),
        TuiEvent::CursorDown => Some(Action::SelectNext),
        TuiEvent::Submit => Some(Action::FocusSelected),
        TuiEvent::Export => Some(Action::ExportRequested),
        TuiEvent::Directions => Some(Action::OpenDirections),
        TuiEvent::Reload => Some(Action::CatalogRequested),
        // Pin labels are 1-based display indices, so label N is index N-1.
        TuiEvent::PinDigit(label) if app.view == View::Map => {
            Some(Action::SelectMarker(label - 1))
        }
        TuiEvent::PinDigit(_) => None,
        TuiEvent::Resize => None,
    }
}

/// Run an action through the reducer and execute the resulting effect.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let effect = update(app, action);
    match effect {
        Effect::Quit => true,
        Effect::SpawnFetch => {
            spawn_fetch(app.source.clone(), tx.clone());
            false
        }
        Effect::InitializeMap => {
            initialize_map(app, tx);
            false
        }
        Effect::ExportCalendar => {
            run_export(app, tx);
            false
        }
        Effect::OpenUrl(url) => {
            open_url(&url);
            false
        }
        Effect::None => false,
    }
}

fn spawn_fetch(source: Arc<dyn CatalogSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning catalog fetch from {}", source.origin());
    tokio::spawn(async move {
        let action = match source.fetch().await {
            Ok(shows) => Action::CatalogLoaded(shows),
            Err(e) => Action::CatalogFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver catalog result: receiver dropped");
        }
    });
}

/// Build the marker table and report readiness over the action channel.
/// The surface flips to `Ready` on a later loop pass, never mid-keystroke,
/// which is what lets the reducer treat readiness as an event.
fn initialize_map(app: &App, tx: &mpsc::Sender<Action>) {
    let action = match map::build_markers(&app.shows) {
        Ok(markers) => Action::MapReady(markers),
        Err(e) => Action::MapInitFailed(e.to_string()),
    };
    if tx.send(action).is_err() {
        warn!("Failed to deliver map readiness: receiver dropped");
    }
}

fn run_export(app: &App, tx: &mpsc::Sender<Action>) {
    let action = match calendar::export_to_dir(&app.shows, &app.band_name, &app.export_dir) {
        Ok(path) => {
            info!("Exported calendar to {}", path.display());
            Action::ExportFinished(path)
        }
        Err(e) => Action::ExportFailed(e.to_string()),
    };
    if tx.send(action).is_err() {
        warn!("Failed to deliver export result: receiver dropped");
    }
}

fn open_url(url: &str) {
    info!("Opening directions link: {url}");
    if let Err(e) = open::that(url) {
        warn!("Failed to open browser: {e}");
    }
}
