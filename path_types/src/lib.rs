//! # Path Types
//!
//! The data model shared by every crate of the path editor.
//!
//! ## Philosophy
//!
//! - **Values, not handles**: a [`Point`] is a plain coordinate pair with
//!   structural equality
//! - **Stable identity for display**: a [`Path`] carries a [`ColorKey`] assigned
//!   once at creation, so colors never shift when paths are reordered
//! - **Wire compatible**: the serde layout matches the stored payloads the
//!   editor has always written (`lat`/`lng`, `counter`)
//!
//! ## Key Types
//!
//! - [`Point`]: a latitude/longitude pair
//! - [`Path`]: a named, ordered sequence of points
//! - [`ColorKey`]: a creation-ordered integer used to derive a display color
//! - [`EditMode`] / [`InsertionEnd`]: the two interaction axes
//! - [`SessionId`]: identifies one editing session in logs

pub mod ids;
pub mod mode;
pub mod path;
pub mod point;

pub use ids::SessionId;
pub use mode::{EditMode, InsertionEnd};
pub use path::{ColorKey, Path};
pub use point::Point;
