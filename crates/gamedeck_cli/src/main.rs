//! Command-line front end for the game catalogue.
//!
//! # Responsibility
//! - Resolve configuration, open the SQLite catalogue and run one use-case.
//! - Print the service response as JSON on stdout.

use clap::{Parser, Subcommand};
use gamedeck_core::db::{open_db, open_db_in_memory};
use gamedeck_core::{
    init_from_config, CreateGamesRequest, DeleteGamesRequest, GameService, GameStore,
    GameStoreApi, GameToCreate, GameToUpdate, GamedeckConfig, GetGamesRequest,
    SqliteGameRepository, UpdateGamesRequest,
};
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gamedeck")]
#[command(version, about = "Manage the game catalogue", long_about = None)]
struct Cli {
    /// SQLite database file (overrides GAMEDECK_DB_PATH; in-memory when unset)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List one page of games
    List {
        /// Number of games to skip
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Page size (defaults to GAMEDECK_DEFAULT_PAGE_SIZE)
        #[arg(long)]
        size: Option<u32>,

        /// Restrict the page to these ids (repeatable)
        #[arg(long = "id")]
        ids: Vec<String>,
    },

    /// Show one game by id
    Get { id: String },

    /// Create games from --name/--description pairs
    Create {
        #[arg(long = "name", required = true)]
        names: Vec<String>,

        #[arg(long = "description", required = true)]
        descriptions: Vec<String>,
    },

    /// Change the name and/or description of a game
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete games by id
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Get { .. } => "get",
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("gamedeck: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let config = GamedeckConfig::from_env()?;
    init_from_config(&config)?;

    let conn = match cli.db.as_ref().or(config.db_path.as_ref()) {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let repo = SqliteGameRepository::try_new(&conn)?;
    let service = GameService::new(GameStore::with_uuid_ids(repo));

    info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.name()
    );
    execute(&service, cli.command, config.default_page_size)
}

fn execute<S: GameStoreApi>(
    service: &GameService<S>,
    command: Command,
    default_page_size: u32,
) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Command::List { offset, size, ids } => {
            let request = GetGamesRequest {
                page_size: size.unwrap_or(default_page_size),
                page_offset: offset,
                ids: (!ids.is_empty()).then_some(ids),
            };
            serde_json::to_string_pretty(&service.find(&request)?)?
        }
        Command::Get { id } => serde_json::to_string_pretty(&service.find_one(&id)?)?,
        Command::Create {
            names,
            descriptions,
        } => {
            if names.len() != descriptions.len() {
                return Err(format!(
                    "got {} --name values but {} --description values",
                    names.len(),
                    descriptions.len()
                )
                .into());
            }
            let request = CreateGamesRequest {
                games_to_create: names
                    .into_iter()
                    .zip(descriptions)
                    .map(|(name, description)| GameToCreate { name, description })
                    .collect(),
            };
            serde_json::to_string_pretty(&service.create(request)?)?
        }
        Command::Update {
            id,
            name,
            description,
        } => {
            let request = UpdateGamesRequest {
                games_to_update: vec![GameToUpdate {
                    id,
                    name,
                    description,
                }],
            };
            serde_json::to_string_pretty(&service.update(request)?)?
        }
        Command::Delete { ids } => {
            serde_json::to_string_pretty(&service.delete(&DeleteGamesRequest { ids })?)?
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::{execute, Cli, Command};
    use clap::Parser;
    use gamedeck_core::{GameService, GameStore, InMemoryGameRepository};

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("gamedeck").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn create_then_list_prints_json_pages() {
        let service = GameService::new(GameStore::with_uuid_ids(InMemoryGameRepository::new()));

        let created = execute(
            &service,
            parse(&["create", "--name", "Go", "--description", "Stones"]),
            20,
        )
        .unwrap();
        let created: serde_json::Value = serde_json::from_str(&created).unwrap();
        assert_eq!(created["ids"].as_array().map(Vec::len), Some(1));

        let listed = execute(&service, parse(&["list"]), 20).unwrap();
        let listed: serde_json::Value = serde_json::from_str(&listed).unwrap();
        assert_eq!(listed["pageNumber"], 1);
        assert_eq!(listed["totalRecords"], 1);
        assert_eq!(listed["values"][0]["name"], "Go");
    }

    #[test]
    fn get_of_missing_game_prints_null() {
        let service = GameService::new(GameStore::with_uuid_ids(InMemoryGameRepository::new()));
        let output = execute(&service, parse(&["get", "nope"]), 20).unwrap();
        assert_eq!(output, "null");
    }

    #[test]
    fn create_rejects_unpaired_arguments() {
        let service = GameService::new(GameStore::with_uuid_ids(InMemoryGameRepository::new()));
        let err = execute(
            &service,
            parse(&["create", "--name", "a", "--name", "b", "--description", "c"]),
            20,
        )
        .unwrap_err();
        assert!(err.to_string().contains("--description"));
    }
}
