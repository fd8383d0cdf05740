//! The explicit graphics context the batching layer submits to.
//!
//! `VideoSystem` keeps track of every texture and mesh object that has been
//! created, validates the requests against their parameters, and forwards them
//! to a backend `Visitor`. The backend is the only part that talks to a real
//! graphics API; a headless backend is provided for tools and tests.

/// Maximum number of texture units that could be bound at the same time.
pub const MAX_TEXTURE_SLOTS: usize = 16;
/// Maximum number of attributes in a vertex layout.
pub const MAX_VERTEX_ATTRIBUTES: usize = 8;

pub mod assets;
pub mod backends;
pub mod errors;

mod system;
pub use self::system::VideoSystem;

pub mod prelude {
    pub use super::assets::prelude::*;
    pub use super::backends::Visitor;
    pub use super::errors::{Error as VideoError, Result as VideoResult};
    pub use super::system::VideoSystem;
    pub use super::MAX_TEXTURE_SLOTS;
}
