//! Menu domain for the mess-hall menu board.
//!
//! Everything the board knows about weekly menus lives here: the lenient
//! document model, canonical day/meal ordering, the clock seam for today
//! detection, the display-surface abstraction, the loader, and the screen
//! controller that ties them together. Hosts (the HTTP server and the
//! terminal client) only compose these pieces.

pub mod clock;
pub mod document;
pub mod loader;
pub mod order;
pub mod screen;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use document::{DayMenu, MealEntry, MenuDocument};
pub use loader::{LoadError, MenuSource, SourceResponse, load, parse_document};
pub use screen::MenuScreen;
pub use view::{DayControl, MealCard, MenuSurface, PageModel, TextRegion, Toggle};
