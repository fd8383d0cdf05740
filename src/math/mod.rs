//! This module contains the math utils, which mainly come from `cgmath`.

pub use cgmath::*;

pub mod color;
pub use self::color::Color;

pub mod aabb;
pub use self::aabb::Aabb2;

pub mod prelude {
    pub use super::aabb::Aabb2;
    pub use super::color::Color;
    pub use cgmath::prelude::*;
    pub use cgmath::{ortho, perspective, Matrix4, Point2, Vector2, Vector3, Vector4};
}
