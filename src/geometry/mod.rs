//! Vehicle geometry for overlays and screen wrapping.

pub mod hitbox;
pub mod wrap;

pub use hitbox::{hitbox_half_extents, hitbox_polygon, local_to_world, rendered_half_extents};
pub use wrap::{wrap_position, Viewport};
