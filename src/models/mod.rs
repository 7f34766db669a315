//! Data models for the team site.
//!
//! Field names serialize in camelCase so the persisted document matches the page's data shape.

mod document;
mod newsletter;
mod project;
mod resource;
mod team;
mod video;

pub use document::*;
pub use newsletter::*;
pub use project::*;
pub use resource::*;
pub use team::*;
pub use video::*;
