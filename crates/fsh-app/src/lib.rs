//! FontShelf application layer
//!
//! Holds the in-memory registry and render state and the use cases that
//! move records between the store, the registry and the view.

pub mod busy;
pub mod deps;
pub mod font_faces;
pub mod registry;
pub mod renderer;
pub mod shelf;
pub mod state;
pub mod usecases;

pub use busy::{BusyFlag, BusyGuard};
pub use deps::ShelfDeps;
pub use font_faces::FontFaceCache;
pub use registry::FontRegistry;
pub use renderer::{ListRenderer, RenderStats, RenderedEntry};
pub use shelf::FontShelf;
pub use state::{SharedState, ShelfState};
