//! PokeAPI client and data models
//!
//! This module contains the HTTP client that talks to PokeAPI through the
//! response cache, and the serde models for the three endpoints the
//! commands rely on: the paginated location-area listing, location-area
//! detail, and Pokemon detail.

pub mod client;
pub mod locations;
pub mod pokemon;

pub use client::{ApiError, PokeApi};
pub use locations::{LocationAreaDetail, LocationAreaPage};
pub use pokemon::Pokemon;

use serde::{Deserialize, Serialize};

/// A name/URL pair, the shape PokeAPI uses for every cross-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. `"pikachu"` or `"canalave-city-area"`.
    pub name: String,
    /// Canonical URL of the full resource.
    pub url: String,
}
