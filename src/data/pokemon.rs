//! Models for the Pokemon endpoint.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// A Pokemon as returned by `/pokemon/{name}`, reduced to the fields the
/// catch and inspect commands use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number.
    pub id: u32,
    /// Canonical lowercase name.
    pub name: String,
    /// Experience yield; drives the catch roll. The API returns null for
    /// some forms, so absence and null both map to `None`.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Base stat values (hp, attack, ...).
    pub stats: Vec<PokemonStat>,
    /// Type slots (one or two).
    pub types: Vec<PokemonType>,
}

/// One base stat value together with the stat it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    /// The base value of the stat.
    pub base_stat: u32,
    /// Which stat this is.
    pub stat: NamedResource,
}

/// One of a Pokemon's types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    /// Display order (1 = primary type).
    pub slot: u8,
    /// The type itself; `type` is a keyword, hence the rename.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
