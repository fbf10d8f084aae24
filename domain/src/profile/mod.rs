//! Skin profile subdomain.
//!
//! - [`value_objects`]: [`SkinType`], [`Concern`], [`Budget`]
//! - [`entities`]: [`SkinProfile`] and [`ProfileState`]

pub mod entities;
pub mod value_objects;

pub use entities::{ProfileState, SkinProfile};
pub use value_objects::{Budget, Concern, SkinType};
