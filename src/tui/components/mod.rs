//! # TUI Components
//!
//! One file per region of the frame, top to bottom:
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── status_bar.rs    (active tab, tab count, scroll position)
//! ├── tab_bar.rs       (tab strip with the active tab highlighted)
//! ├── surface_view.rs  (active tab's scroll surface, bordered)
//! └── input_field.rs   (input line, bordered, owns the terminal cursor)
//! ```
//!
//! All components are props-based: they borrow session data and the theme
//! for one frame and hold no state of their own.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TabBar { tabs: session.tabs(), active: session.active_index(), theme }.render(frame, area);
//!
//! // Bad: hidden dependency on the whole session
//! TabBar::new(session).render(frame, area);
//! ```

mod input_field;
mod status_bar;
mod surface_view;
mod tab_bar;

pub use input_field::InputField;
pub use status_bar::StatusBar;
pub use surface_view::SurfaceView;
pub use tab_bar::TabBar;
