//! Translate "directions from A to B" into app-specific deep links.
//!
//! - `app`: the closed catalog of destination apps.
//! - `mode`: transport modes and per-app mode tokens.
//! - `location`: origin/destination values.
//! - `capability`: which app accepts which transport mode.
//! - `deep_link`: the built URL value and its rendering.
//! - `url_builder`: per-app URL assembly behind a single dispatch.

pub mod app;
pub mod capability;
pub mod deep_link;
pub mod error;
pub mod location;
pub mod mode;
pub mod url_builder;

pub use app::App;
pub use capability::{supported_modes, supports};
pub use deep_link::{DeepLink, QueryParam};
pub use error::ParseError;
pub use location::{Coordinate, Destination, Origin};
pub use mode::TransportMode;
pub use url_builder::build;
