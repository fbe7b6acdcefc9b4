//! REPL command parsing.

use thiserror::Error;

/// Name and description of every command, in the order `help` prints them.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("help", "Print help information"),
    ("exit", "Exit the program"),
    ("map", "Print the next 20 location areas"),
    ("mapb", "Print the previous 20 location areas"),
    ("explore <area>", "List the Pokemon found in an area"),
    ("catch <pokemon>", "Throw a Pokeball at a Pokemon"),
    ("inspect <pokemon>", "Show a Pokemon you have caught"),
    ("pokedex", "List all the Pokemon in your Pokedex"),
];

/// Errors from parsing a REPL line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("Unknown command: {0}. Type \"help\" for a list of commands.")]
    Unknown(String),

    /// A command that needs an argument was given none.
    #[error("Usage: {0}")]
    MissingArgument(&'static str),
}

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore { area: String },
    Catch { name: String },
    Inspect { name: String },
    Pokedex,
}

impl Command {
    /// Parses one input line. Matching is case-insensitive; arguments are
    /// lowercased to match PokeAPI's canonical resource names. Returns
    /// `None` for blank input.
    pub fn parse(line: &str) -> Option<Result<Self, CommandError>> {
        let mut words = line.split_whitespace().map(str::to_lowercase);
        let name = words.next()?;
        let arg = words.next();

        let command = match name.as_str() {
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            "map" => Ok(Self::Map),
            "mapb" => Ok(Self::MapBack),
            "explore" => match arg {
                Some(area) => Ok(Self::Explore { area }),
                None => Err(CommandError::MissingArgument("explore <area>")),
            },
            "catch" => match arg {
                Some(name) => Ok(Self::Catch { name }),
                None => Err(CommandError::MissingArgument("catch <pokemon>")),
            },
            "inspect" => match arg {
                Some(name) => Ok(Self::Inspect { name }),
                None => Err(CommandError::MissingArgument("inspect <pokemon>")),
            },
            "pokedex" => Ok(Self::Pokedex),
            other => Err(CommandError::Unknown(other.to_string())),
        };

        Some(command)
    }
}
