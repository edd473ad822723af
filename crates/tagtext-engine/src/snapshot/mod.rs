//! # Snapshot Testing Support
//!
//! Utilities for asserting on parsed trees.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts node trees to a stable, serializable [`Snap`]
//!   form in which structurally different but equivalent trees compare equal
//!   (adjacent literals merged by display text, unstyled composites inlined)
//! - **`render`**: Indented text dump of a [`Snap`] list for `insta`
//! - **`invariants`**: Checks every parsed tree must satisfy

pub mod invariants;
pub mod normalize;
pub mod render;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
pub use render::render_tree;
