//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, as in the rest of the codebase:
//!
//! - **Stateless (props-based)**: `TitleBar`, `DetailPanel`, `MapView` —
//!   receive everything as struct fields and render it.
//! - **Stateful**: `ShowList` — wraps a persistent `ShowListState` (scroll
//!   position) that lives in the parent `TuiState`.
//!
//! Components receive core data as props, never by reaching into globals;
//! both renderers borrow the same catalog slice from `App` each frame, which
//! is what keeps list indices and marker labels in lockstep.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status bar)
//! ├── show_list.rs     (scrollable show cards)
//! ├── map_view.rs      (marker canvas)
//! └── detail_panel.rs  (shared selection details)
//! ```

pub mod detail_panel;
pub mod map_view;
pub mod show_list;
pub mod title_bar;

pub use detail_panel::DetailPanel;
pub use map_view::MapView;
pub use show_list::{ShowList, ShowListState};
pub use title_bar::TitleBar;
