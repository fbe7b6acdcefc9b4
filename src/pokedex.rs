//! The in-memory registry of caught Pokemon.
//!
//! Owned by the single REPL task, so no synchronization is needed; unlike
//! the response cache there is no expiry, a caught Pokemon stays caught.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::data::Pokemon;

/// A Pokemon in the registry, together with when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Registry of every Pokemon the user has caught this session.
///
/// Keyed by name; catching the same Pokemon again refreshes the entry.
/// A `BTreeMap` keeps the `pokedex` listing alphabetical.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch, stamping the current time.
    pub fn add(&mut self, pokemon: Pokemon) {
        self.entries.insert(
            pokemon.name.clone(),
            CaughtPokemon {
                pokemon,
                caught_at: Utc::now(),
            },
        );
    }

    /// Looks up a caught Pokemon by name.
    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.entries.get(name)
    }

    /// Iterates caught Pokemon in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &CaughtPokemon> {
        self.entries.values()
    }

    /// Number of distinct Pokemon caught.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            id: 1,
            name: name.to_string(),
            base_experience: Some(64),
            height: 7,
            weight: 69,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_new_pokedex_is_empty() {
        let pokedex = Pokedex::new();
        assert!(pokedex.is_empty());
        assert_eq!(pokedex.len(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let mut pokedex = Pokedex::new();

        pokedex.add(pokemon("bulbasaur"));

        let caught = pokedex.get("bulbasaur").expect("should be caught");
        assert_eq!(caught.pokemon.name, "bulbasaur");
        assert_eq!(pokedex.len(), 1);
    }

    #[test]
    fn test_get_uncaught_returns_none() {
        let pokedex = Pokedex::new();
        assert!(pokedex.get("mewtwo").is_none());
    }

    #[test]
    fn test_recatch_replaces_entry() {
        let mut pokedex = Pokedex::new();

        pokedex.add(pokemon("pidgey"));
        let first_caught_at = pokedex.get("pidgey").unwrap().caught_at;

        pokedex.add(pokemon("pidgey"));

        assert_eq!(pokedex.len(), 1);
        assert!(pokedex.get("pidgey").unwrap().caught_at >= first_caught_at);
    }

    #[test]
    fn test_iteration_is_alphabetical() {
        let mut pokedex = Pokedex::new();

        pokedex.add(pokemon("zubat"));
        pokedex.add(pokemon("abra"));
        pokedex.add(pokemon("machop"));

        let names: Vec<&str> = pokedex.iter().map(|c| c.pokemon.name.as_str()).collect();
        assert_eq!(names, vec!["abra", "machop", "zubat"]);
    }

    #[test]
    fn test_caught_at_is_recorded() {
        let mut pokedex = Pokedex::new();

        let before = Utc::now();
        pokedex.add(pokemon("eevee"));
        let after = Utc::now();

        let caught = pokedex.get("eevee").unwrap();
        assert!(caught.caught_at >= before);
        assert!(caught.caught_at <= after);
    }
}
