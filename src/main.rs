mod display;

use clap::{ArgAction, Parser, Subcommand};
use display::output;
use lol_data_fetcher::{AppError, Client};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "lol-data-fetcher")]
#[command(about = "Browse League of Legends static game data from Data Dragon", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tool version
    Version,

    /// Show the latest game data version
    LatestVersion,

    /// List all champions
    Champions {
        /// Game version to use
        #[arg(short = 'v', long)]
        version: Option<String>,

        /// Language code (e.g. en_US, ko_KR)
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Get details for a specific champion
    Champion {
        /// Champion name, any casing
        name: String,

        /// Game version to use
        #[arg(short = 'v', long)]
        version: Option<String>,

        /// Language code
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Show champion skills
        #[arg(short = 's', long, action = ArgAction::Set, default_value_t = true)]
        skills: bool,

        /// Show champion skins
        #[arg(long)]
        skins: bool,
    },

    /// List all items
    Items {
        /// Game version to use
        #[arg(short = 'v', long)]
        version: Option<String>,

        /// Language code
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Search items by name
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List all summoner spells
    SummonerSpells {
        /// Game version to use
        #[arg(short = 'v', long)]
        version: Option<String>,

        /// Language code
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Search summoner spells by name
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List all skins for a champion
    Skins {
        /// Champion name, any casing
        champion: String,

        /// Game version to use
        #[arg(short = 'v', long)]
        version: Option<String>,

        /// Language code
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Show image URLs
        #[arg(short = 'u', long)]
        urls: bool,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        output::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    match args.command {
        Command::Version => {
            println!("lol_data_fetcher version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        Command::LatestVersion => {
            let client = Client::new(None, None)?;
            println!("Latest Data Dragon version: {}", client.version());
            Ok(())
        }

        Command::Champions {
            version,
            language,
            limit,
        } => {
            let client = Client::new(version.as_deref(), language.as_deref())?;
            let body = client.champions().all()?;

            let mut champions = data_values(&body);
            truncate(&mut champions, limit);

            output::print_champion_list(&champions);
            Ok(())
        }

        Command::Champion {
            name,
            version,
            language,
            skills,
            skins,
        } => {
            let client = Client::new(version.as_deref(), language.as_deref())?;
            let detail = client.champions().find(&name)?;

            let champion = first_data_value(&detail)
                .ok_or_else(|| AppError::ApiError(format!("malformed payload for '{}'", name)))?;
            output::print_champion_detail(&champion, skills);

            if skins {
                let skin_list = client.skins().for_champion(&name)?;
                let canonical = first_data_key(&detail).unwrap_or_else(|| name.clone());
                output::print_skin_list(&canonical, &skin_list, false);
            }
            Ok(())
        }

        Command::Items {
            version,
            language,
            search,
            limit,
        } => {
            let client = Client::new(version.as_deref(), language.as_deref())?;

            let mut items = match search {
                Some(query) => client.items().search(&query)?,
                None => data_values(&client.items().all()?),
            };
            truncate(&mut items, limit);

            output::print_item_list(&items);
            Ok(())
        }

        Command::SummonerSpells {
            version,
            language,
            search,
            limit,
        } => {
            let client = Client::new(version.as_deref(), language.as_deref())?;

            let mut spells = match search {
                Some(query) => client.summoner_spells().search(&query)?,
                None => data_values(&client.summoner_spells().all()?),
            };
            truncate(&mut spells, limit);

            output::print_spell_list(&spells);
            Ok(())
        }

        Command::Skins {
            champion,
            version,
            language,
            urls,
        } => {
            let client = Client::new(version.as_deref(), language.as_deref())?;

            let detail = client.champions().find(&champion)?;
            let canonical = first_data_key(&detail).unwrap_or_else(|| champion.clone());
            let skins = client.skins().for_champion(&champion)?;

            output::print_skin_list(&canonical, &skins, urls);
            Ok(())
        }
    }
}

fn data_values(body: &Value) -> Vec<Value> {
    body.get("data")
        .and_then(Value::as_object)
        .map(|data| data.values().cloned().collect())
        .unwrap_or_default()
}

fn first_data_key(body: &Value) -> Option<String> {
    body.get("data")
        .and_then(Value::as_object)
        .and_then(|data| data.keys().next())
        .cloned()
}

fn first_data_value(body: &Value) -> Option<Value> {
    body.get("data")
        .and_then(Value::as_object)
        .and_then(|data| data.values().next())
        .cloned()
}

fn truncate(values: &mut Vec<Value>, limit: Option<usize>) {
    if let Some(limit) = limit {
        values.truncate(limit);
    }
}
