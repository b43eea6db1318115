//! Client-side view state, modeled as plain state machines
//!
//! Each widget is an explicit type with enumerated states and
//! transition functions, driven by synthetic event sequences in tests.
//! No UI toolkit is involved; the generated pages carry the matching
//! markup and any runtime binds these machines to real events.

mod dropdown;
mod scrollspy;
mod theme;

pub use dropdown::{Dropdown, DropdownState};
pub use scrollspy::ScrollSpy;
pub use theme::{InMemoryPreferences, PreferenceStore, Theme, ThemeState};
