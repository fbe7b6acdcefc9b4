//! Command execution and session state.

use rand::Rng;
use tracing::warn;

use crate::commands::{Command, COMMAND_HELP};
use crate::data::{ApiError, PokeApi};
use crate::pokedex::Pokedex;

/// What the REPL should do after a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Where the `map`/`mapb` commands currently are in the listing.
///
/// `None` until the first page has been fetched; afterwards the URLs come
/// straight from the API's `next`/`previous` fields, so "first page" and
/// "last page" are whatever the API says they are.
#[derive(Debug, Clone)]
struct PageCursor {
    next: Option<String>,
    previous: Option<String>,
}

/// Session state: the API client, the caught-Pokemon registry, and the
/// map pagination cursor.
pub struct App {
    api: PokeApi,
    pokedex: Pokedex,
    cursor: Option<PageCursor>,
}

impl App {
    pub fn new(api: PokeApi) -> Self {
        Self {
            api,
            pokedex: Pokedex::new(),
            cursor: None,
        }
    }

    /// Runs one command, printing its output. Network and decode failures
    /// are reported to the user and the REPL keeps going.
    pub async fn execute(&mut self, command: Command) -> Outcome {
        let result = match command {
            Command::Help => {
                self.print_help();
                Ok(())
            }
            Command::Exit => {
                println!("Closing the Pokedex... Goodbye!");
                return Outcome::Exit;
            }
            Command::Map => self.map_forward().await,
            Command::MapBack => self.map_back().await,
            Command::Explore { area } => self.explore(&area).await,
            Command::Catch { name } => self.catch(&name).await,
            Command::Inspect { name } => {
                self.inspect(&name);
                Ok(())
            }
            Command::Pokedex => {
                self.list_pokedex();
                Ok(())
            }
        };

        if let Err(err) = result {
            warn!(%err, "command failed");
            println!("Something went wrong: {err}");
        }
        Outcome::Continue
    }

    fn print_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for (name, description) in COMMAND_HELP {
            println!("{name}: {description}");
        }
        println!();
    }

    async fn map_forward(&mut self) -> Result<(), ApiError> {
        let target = match &self.cursor {
            // Nothing fetched yet, start from the first page.
            None => None,
            Some(cursor) => match &cursor.next {
                Some(url) => Some(url.clone()),
                None => {
                    println!("You're on the last page.");
                    return Ok(());
                }
            },
        };

        self.show_page(target.as_deref()).await
    }

    async fn map_back(&mut self) -> Result<(), ApiError> {
        let target = match &self.cursor {
            Some(PageCursor {
                previous: Some(url),
                ..
            }) => url.clone(),
            _ => {
                println!("You're on the first page.");
                return Ok(());
            }
        };

        self.show_page(Some(&target)).await
    }

    async fn show_page(&mut self, page_url: Option<&str>) -> Result<(), ApiError> {
        let page = self.api.location_areas(page_url).await?;

        for area in &page.results {
            println!("{}", area.name);
        }
        self.cursor = Some(PageCursor {
            next: page.next,
            previous: page.previous,
        });
        Ok(())
    }

    async fn explore(&mut self, area: &str) -> Result<(), ApiError> {
        println!("Exploring {area}...");
        let detail = match self.api.location_area(area).await {
            Ok(detail) => detail,
            Err(ApiError::NotFound(_)) => {
                println!("No such area: {area}");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        println!("Found Pokemon:");
        for encounter in &detail.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }
        Ok(())
    }

    async fn catch(&mut self, name: &str) -> Result<(), ApiError> {
        let pokemon = match self.api.pokemon(name).await {
            Ok(pokemon) => pokemon,
            Err(ApiError::NotFound(_)) => {
                println!("No such Pokemon: {name}");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        println!("Throwing a Pokeball at {}...", pokemon.name);

        let base_experience = pokemon.base_experience.unwrap_or(0);
        let roll = if base_experience == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..2 * base_experience)
        };

        if catch_succeeds(base_experience, roll) {
            println!("{} was caught!", pokemon.name);
            println!("You may now inspect it with the inspect command.");
            self.pokedex.add(pokemon);
        } else {
            println!("{} escaped!", pokemon.name);
        }
        Ok(())
    }

    fn inspect(&self, name: &str) {
        let Some(caught) = self.pokedex.get(name) else {
            println!("You have not caught that Pokemon");
            return;
        };

        let pokemon = &caught.pokemon;
        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!(" - {}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for typ in &pokemon.types {
            println!(" - {}", typ.kind.name);
        }
        println!(
            "Caught: {}",
            caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    fn list_pokedex(&self) {
        println!("Your Pokedex:");
        if self.pokedex.is_empty() {
            println!(" (no Pokemon caught yet)");
            return;
        }
        for caught in self.pokedex.iter() {
            println!(" - {}", caught.pokemon.name);
        }
    }
}

/// Whether a roll in `[0, 2 * base_experience)` lands the catch.
///
/// A zero yield (null or absent from the API) is always caught.
fn catch_succeeds(base_experience: u32, roll: u32) -> bool {
    roll >= base_experience
}
