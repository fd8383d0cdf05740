//! # What is This?
//!
//! A thin convenience layer for small rendering programs: quads, sprites,
//! bitmap text and lines are accumulated into shared vertex buffers and drawn
//! with as few drawcalls as possible.
//!
//! The crate does not talk to a graphics API by itself. Everything goes
//! through a `VideoSystem`, an explicit context object that validates requests
//! and forwards them to a backend implementing `video::backends::Visitor`.
//!
//! The batching lives in `batch`, see `batch::Batch` for the details.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

#[macro_use]
pub mod utils;
pub mod batch;
pub mod font;
pub mod math;
pub mod video;

pub mod prelude {
    pub use crate::batch::{Batch, BatchParams, FlushSummary};
    pub use crate::font::{Font, Glyph, GlyphTable};
    pub use crate::math::prelude::*;
    pub use crate::video::prelude::*;
}
