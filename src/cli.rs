//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for bookr using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive catalog browser (default)
//! - **list**: Print a filtered, paged slice of the catalog
//! - **show**: Print the details of one book
//! - **authors** / **genres**: Print the selector options
//! - **config**: Inspect and change saved preferences
//!
//! # Examples
//!
//! ```
//! use bookr::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["bookr", "list", "--author", "tolkien"]);
//! let query = cli.get_command().filter_query();
//! assert_eq!(query.map(|q| q.to_string()), Some("bookr list --author tolkien".to_string()));
//! ```

use crate::browse::{Choice, FilterQuery};
use crate::theme::ThemePreference;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bookr")]
#[command(about = "A fast, filterable book catalog browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to open (overrides config)
    #[arg(short = 'c', long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Startup theme (overrides config)
    #[arg(long = "theme", value_enum, global = true)]
    pub theme: Option<ThemePreference>,

    /// Books revealed per page (overrides config and catalog)
    #[arg(short = 'n', long = "page-size", value_name = "N", global = true)]
    pub page_size: Option<usize>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Filter arguments shared by the listing commands
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Case-insensitive title substring
    #[arg(short = 't', long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Author identifier, or "any"
    #[arg(short = 'a', long = "author", value_name = "ID")]
    pub author: Option<String>,

    /// Genre identifier, or "any"
    #[arg(short = 'g', long = "genre", value_name = "ID")]
    pub genre: Option<String>,
}

impl FilterArgs {
    /// Build the filter query these arguments describe
    #[must_use]
    pub fn to_query(&self) -> FilterQuery {
        FilterQuery::new(
            self.title.clone().unwrap_or_default(),
            self.author.as_deref().map_or(Choice::Any, Choice::parse),
            self.genre.as_deref().map_or(Choice::Any, Choice::parse),
        )
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the books revealed after N pages of a filter
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of pages to reveal
        #[arg(short = 'p', long = "page", value_name = "N", default_value_t = 1)]
        page: usize,
    },

    /// Show the details of one book
    Show {
        /// Book identifier
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List authors as offered by the author selector
    Authors,

    /// List genres as offered by the genre selector
    Genres,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// The filter a browse or list command starts from
    #[must_use]
    pub fn filter_query(&self) -> Option<FilterQuery> {
        match self {
            Self::Browse { filter } | Self::List { filter, .. } => Some(filter.to_query()),
            _ => None,
        }
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the current configuration and its file location
    Show,

    /// Save the startup theme
    SetTheme {
        #[arg(value_enum)]
        theme: ThemePreference,
    },

    /// Save the page size
    SetPageSize {
        #[arg(value_name = "N")]
        page_size: usize,
    },

    /// Save the catalog file to open by default
    SetCatalog {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            filter: FilterArgs::default(),
        })
    }
}
