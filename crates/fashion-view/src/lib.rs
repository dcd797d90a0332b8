//! Product view orchestration.
//!
//! [`ViewController`] owns the current snapshot and control values, and
//! drives the pipeline on every change:
//!
//! 1. fetch a page (page, page size and brand changes only)
//! 2. filter with the active toggles
//! 3. sort by the active key
//! 4. compute indicators on the resulting list
//! 5. replace every [`Slot`] on the [`Renderer`]
//!
//! Persistence and rendering are injected as [`fashion_cache::KeyValueStore`]
//! and [`Renderer`] implementations.

mod clock;
mod controller;
mod controls;
mod error;
mod render;

pub mod markup;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{Phase, RenderedView, ViewController, ViewState};
pub use controls::{ControlChange, Controls};
pub use error::ViewError;
pub use render::{DocumentRenderer, Renderer, Slot};
