//! Command-line surface.
//!
//! Every collection command maps to exactly one `CollectionService` call.

use clap::{ArgAction, Args, Parser, Subcommand};
use figshelf_core::{Figure, FigureGenre, FigureKind, FigureValidationError};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "figshelf")]
#[command(about = "Manage per-user collections of collectible figures")]
#[command(version)]
pub struct Cli {
    /// Data root; relative paths resolve against the app data directory
    #[arg(long, global = true, env = figshelf_core::DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Log directory; relative paths resolve against the app data directory
    #[arg(long, global = true, env = figshelf_core::LOG_DIR_ENV)]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = figshelf_core::LOG_LEVEL_ENV)]
    pub log_level: Option<String>,

    /// Print plain text without terminal colors
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new figure to a user's collection
    Add(AddArgs),
    /// List every figure in a user's collection
    List(UserArgs),
    /// Replace an existing figure; omitted fields fall back to defaults
    Update(UpdateArgs),
    /// Show one figure
    Read(KeyArgs),
    /// Remove one figure
    Remove(KeyArgs),
    /// Count exact occurrences of a word in a text file
    CountWord {
        file: PathBuf,
        word: String,
    },
    /// Convert a JSON array of weather readings into CSV
    WeatherCsv {
        input: PathBuf,
        output: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct UserArgs {
    #[arg(long)]
    pub user: String,
}

#[derive(Debug, Args)]
pub struct KeyArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long = "desc")]
    pub description: String,
    /// Pop! | Pop! Rides | Vinyl Soda | Vinyl Gold
    #[arg(long = "type")]
    pub kind: FigureKind,
    /// Animación | Películas y TV | Videojuegos | Deportes | Música | Ánime
    #[arg(long)]
    pub genre: FigureGenre,
    #[arg(long)]
    pub franchise: String,
    #[arg(long)]
    pub number: u32,
    #[arg(long, action = ArgAction::Set, required = true)]
    pub exclusive: bool,
    #[arg(long, alias = "specialFeatures")]
    pub special_features: String,
    #[arg(long, alias = "marketValue", allow_negative_numbers = true)]
    pub market_value: f64,
}

impl AddArgs {
    pub fn to_figure(&self) -> Result<Figure, FigureValidationError> {
        Figure::new(
            self.id.as_str(),
            self.name.as_str(),
            self.description.as_str(),
            self.kind,
            self.genre,
            self.franchise.as_str(),
            self.number,
            self.exclusive,
            self.special_features.as_str(),
            self.market_value,
        )
    }
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "desc")]
    pub description: Option<String>,
    #[arg(long = "type")]
    pub kind: Option<FigureKind>,
    #[arg(long)]
    pub genre: Option<FigureGenre>,
    #[arg(long)]
    pub franchise: Option<String>,
    #[arg(long)]
    pub number: Option<u32>,
    #[arg(long)]
    pub exclusive: Option<bool>,
    #[arg(long, alias = "specialFeatures")]
    pub special_features: Option<String>,
    #[arg(long, alias = "marketValue", allow_negative_numbers = true)]
    pub market_value: Option<f64>,
}

impl UpdateArgs {
    /// Builds the full replacement record, defaulting every omitted field.
    pub fn to_figure(&self) -> Result<Figure, FigureValidationError> {
        Figure::new(
            self.id.as_str(),
            self.name.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
            self.kind.unwrap_or_default(),
            self.genre.unwrap_or_default(),
            self.franchise.clone().unwrap_or_default(),
            self.number.unwrap_or(0),
            self.exclusive.unwrap_or(false),
            self.special_features.clone().unwrap_or_default(),
            self.market_value.unwrap_or(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use figshelf_core::{FigureGenre, FigureKind, FigureValidationError};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_parses_enum_display_strings() {
        let cli = Cli::parse_from([
            "figshelf",
            "add",
            "--user",
            "alice",
            "--id",
            "7",
            "--name",
            "Classic Sonic",
            "--desc",
            "The best",
            "--type",
            "Pop! Rides",
            "--genre",
            "Videojuegos",
            "--franchise",
            "Sonic",
            "--number",
            "1",
            "--exclusive",
            "true",
            "--specialFeatures",
            "Glows",
            "--market-value",
            "250",
        ]);

        let Command::Add(args) = cli.command else {
            panic!("expected add command");
        };
        let figure = args.to_figure().unwrap();
        assert_eq!(figure.category, FigureKind::PopRides);
        assert_eq!(figure.theme, FigureGenre::VideoGames);
        assert!(figure.is_exclusive);
        assert_eq!(figure.market_value, 250.0);
    }

    #[test]
    fn add_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "figshelf", "add", "--user", "a", "--id", "1", "--name", "n", "--desc", "d",
            "--type", "Plush", "--genre", "Deportes", "--franchise", "f", "--number", "1",
            "--exclusive", "false", "--special-features", "s", "--market-value", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_market_value_reaches_validation() {
        let cli = Cli::parse_from([
            "figshelf", "add", "--user", "a", "--id", "1", "--name", "n", "--desc", "d",
            "--type", "Pop!", "--genre", "Deportes", "--franchise", "f", "--number", "1",
            "--exclusive", "false", "--special-features", "s", "--market-value", "-5",
        ]);
        let Command::Add(args) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(
            args.to_figure().unwrap_err(),
            FigureValidationError::NegativeMarketValue(-5.0)
        );
    }

    #[test]
    fn update_defaults_omitted_fields() {
        let cli = Cli::parse_from([
            "figshelf", "update", "--user", "alice", "--id", "1", "--name", "Renamed",
        ]);
        let Command::Update(args) = cli.command else {
            panic!("expected update command");
        };

        let figure = args.to_figure().unwrap();
        assert_eq!(figure.name, "Renamed");
        assert_eq!(figure.description, "");
        assert_eq!(figure.category, FigureKind::Pop);
        assert_eq!(figure.theme, FigureGenre::Animation);
        assert_eq!(figure.sequence_number, 0);
        assert!(!figure.is_exclusive);
        assert_eq!(figure.market_value, 0.0);
    }

    #[test]
    fn global_options_parse_after_subcommand() {
        let cli = Cli::parse_from([
            "figshelf", "list", "--user", "bob", "--data-dir", "/tmp/figs", "--no-color",
        ]);
        assert!(cli.no_color);
        assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("/tmp/figs")));
    }
}
