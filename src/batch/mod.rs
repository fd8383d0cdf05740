//! Batched drawing of quads, sprites, text and lines.
//!
//! A `Batch` is created once with a fixed capacity and reused every frame:
//! primitives are accumulated with the `add_*` methods and submitted all at
//! once with `flush`.
//!
//! ```rust
//! use shlib::prelude::*;
//!
//! let mut video = VideoSystem::headless();
//! let mut batch = Batch::new(&mut video, 128).unwrap();
//!
//! let size = Vector2::new(18.0, 18.0);
//! for i in 0..25 {
//!     let position = Vector2::new(100.0 + 20.0 * i as f32, 300.0);
//!     batch.add_quad(position, size, Color::white()).unwrap();
//! }
//!
//! let (start, end) = (Vector2::new(700.0, 500.0), Vector2::new(100.0, 100.0));
//! batch.add_line(start, end, Color::yellow(), 1.0).unwrap();
//!
//! let summary = batch.flush(&mut video).unwrap();
//! assert_eq!(summary.drawcalls, 2);
//! assert_eq!(summary.quads, 25);
//!
//! batch.destroy(&mut video).unwrap();
//! ```
//!
//! Textures are mapped to one of `MAX_TEXTURE_SLOTS` texture units for the
//! duration of a frame. Slot 0 is taken by a white texture owned by the batch,
//! which is what untextured quads sample from.

pub mod errors;
pub mod geometry;
pub mod slots;
pub mod vertex;

mod batch;
mod text;

pub use self::batch::{Batch, FlushSummary};
pub use self::errors::{Error, Result};

/// The setup parameters of a batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParams {
    /// Maximum number of quads (sprites and glyphs included) per flush.
    pub quads: usize,
    /// Maximum number of line segments per flush.
    pub lines: usize,
}

impl Default for BatchParams {
    fn default() -> Self {
        BatchParams {
            quads: 1024,
            lines: 1024,
        }
    }
}

impl BatchParams {
    pub fn validate(&self) -> Result<()> {
        if self.quads == 0 {
            return Err(Error::InvalidCapacity(self.quads));
        }

        if self.lines == 0 {
            return Err(Error::InvalidCapacity(self.lines));
        }

        // Every vertex of the quads must be addressable by an u32 index.
        let max = u32::max_value() as usize / geometry::QUAD_VERTICES;
        if self.quads > max {
            return Err(Error::InvalidCapacity(self.quads));
        }

        Ok(())
    }
}
