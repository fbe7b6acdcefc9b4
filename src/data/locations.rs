//! Models for the location-area endpoints.

use serde::Deserialize;

use super::NamedResource;

/// One page of the paginated location-area listing.
///
/// `next` and `previous` are complete URLs supplied by the API (or null at
/// either end of the listing); the client follows them verbatim rather
/// than computing offsets itself.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas known to the API.
    pub count: u32,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// The location areas on this page.
    pub results: Vec<NamedResource>,
}

/// Detail for a single location area, reduced to what `explore` needs.
///
/// PokeAPI returns far more (encounter method rates, localized names,
/// game indices); serde skips the unused fields.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    /// The area's canonical name.
    pub name: String,
    /// Pokemon that can be encountered here.
    pub pokemon_encounters: Vec<Encounter>,
}

/// One encounterable Pokemon within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    /// The Pokemon that can be encountered.
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_RESPONSE: &str = r#"{
        "count": 1089,
        "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
        "previous": null,
        "results": [
            {
                "name": "canalave-city-area",
                "url": "https://pokeapi.co/api/v2/location-area/1/"
            },
            {
                "name": "eterna-city-area",
                "url": "https://pokeapi.co/api/v2/location-area/2/"
            },
            {
                "name": "pastoria-city-area",
                "url": "https://pokeapi.co/api/v2/location-area/3/"
            }
        ]
    }"#;

    const DETAIL_RESPONSE: &str = r#"{
        "id": 321,
        "name": "viridian-forest-area",
        "game_index": 10,
        "location": {
            "name": "viridian-forest",
            "url": "https://pokeapi.co/api/v2/location/231/"
        },
        "pokemon_encounters": [
            {
                "pokemon": {
                    "name": "caterpie",
                    "url": "https://pokeapi.co/api/v2/pokemon/10/"
                },
                "version_details": []
            },
            {
                "pokemon": {
                    "name": "pikachu",
                    "url": "https://pokeapi.co/api/v2/pokemon/25/"
                },
                "version_details": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_listing_page() {
        let page: LocationAreaPage =
            serde_json::from_str(PAGE_RESPONSE).expect("Failed to parse listing page");

        assert_eq!(page.count, 1089);
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.co/api/v2/location-area/?offset=20&limit=20")
        );
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].name, "canalave-city-area");
        assert_eq!(page.results[2].name, "pastoria-city-area");
    }

    #[test]
    fn test_parse_last_page_has_no_next() {
        let json = r#"{
            "count": 2,
            "next": null,
            "previous": "https://pokeapi.co/api/v2/location-area/?offset=0&limit=20",
            "results": []
        }"#;

        let page: LocationAreaPage =
            serde_json::from_str(json).expect("Failed to parse last page");

        assert!(page.next.is_none());
        assert!(page.previous.is_some());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_parse_area_detail_keeps_encounters() {
        let detail: LocationAreaDetail =
            serde_json::from_str(DETAIL_RESPONSE).expect("Failed to parse area detail");

        assert_eq!(detail.name, "viridian-forest-area");
        assert_eq!(detail.pokemon_encounters.len(), 2);
        assert_eq!(detail.pokemon_encounters[0].pokemon.name, "caterpie");
        assert_eq!(detail.pokemon_encounters[1].pokemon.name, "pikachu");
    }

    #[test]
    fn test_parse_area_detail_without_encounters() {
        let json = r#"{"name": "empty-area", "pokemon_encounters": []}"#;

        let detail: LocationAreaDetail =
            serde_json::from_str(json).expect("Failed to parse empty area");

        assert!(detail.pokemon_encounters.is_empty());
    }
}
