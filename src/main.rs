//! Bookr CLI application entry point
//!
//! This is the main executable for the bookr catalog browser. It provides an
//! interactive terminal browser plus a handful of non-interactive commands
//! for scripting.
//!
//! # Features
//!
//! - **Browse Mode**: Filter by title, author and genre, reveal more, view details
//! - **Listing**: Print filtered pages of the catalog
//! - **Day/Night Themes**: Follows the terminal by default, switchable at runtime
//! - **Quiet Mode**: Print identifiers only, for piping into other tools
//!
//! # Usage
//!
//! ```bash
//! # Browse the bundled catalog (default command)
//! bookr
//! bookr browse --author tolkien
//!
//! # List the first two pages of a filter
//! bookr list --title the --page 2
//!
//! # Show one book
//! bookr show dune
//!
//! # Use your own catalog
//! bookr --catalog ~/books.json
//! bookr config set-catalog ~/books.json
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/bookr/config.toml` on Linux) and created on first run.

use bookr::{
    BookrError,
    browse::{CatalogController, FilterQuery, detail},
    catalog::{Catalog, Directory},
    cli::{Cli, Commands, ConfigCommands},
    config::BookrConfig,
    output,
    theme,
    ui::{AppState, BrowserApp, OutputWriter, StdoutWriter},
};

type Result<T> = std::result::Result<T, BookrError>;

/// Handle the browse command - interactive catalog browser
///
/// A non-empty initial filter is submitted before the first frame so the
/// browser opens on its results.
///
/// # Errors
///
/// Returns `BookrError` if the terminal cannot be driven.
fn handle_browse_command(
    catalog: Catalog,
    query: FilterQuery,
    cli: &Cli,
    config: &BookrConfig,
) -> Result<()> {
    let mode = config.startup_theme(cli.theme, theme::detect_ambient());
    let mut state = AppState::new(catalog)
        .with_theme(mode)
        .with_hints(config.show_hints);

    if !query.is_unconstrained() {
        state.submit(query);
    }

    BrowserApp::new(state).run()?;
    Ok(())
}

/// Handle the list command - print the books revealed after `page` pages
///
/// # Errors
///
/// Returns `BookrError::InvalidInput` if `page` is zero.
fn handle_list_command(
    catalog: Catalog,
    query: FilterQuery,
    page: usize,
    output: &StdoutWriter,
) -> Result<()> {
    if page == 0 {
        return Err(BookrError::InvalidInput(
            "Page must be at least 1".to_string(),
        ));
    }

    let mut controller = CatalogController::new(catalog);
    controller.submit(query);
    for _ in 1..page {
        if controller.reveal_more().is_none() {
            break;
        }
    }

    if controller.result_count() == 0 {
        output.info("No results found");
        return Ok(());
    }

    for book in controller.rendered() {
        output.write(&output::book_line(
            book,
            controller.catalog(),
            output.is_quiet(),
        ));
    }
    output.info(&output::remaining_summary(
        controller.rendered_count(),
        controller.result_count(),
        controller.remaining(),
    ));
    Ok(())
}

/// Handle the show command - print one book's details
///
/// Unknown identifiers print nothing.
fn handle_show_command(catalog: &Catalog, id: &str, output: &StdoutWriter) {
    if let Some(view) = detail(catalog, id) {
        if output.is_quiet() {
            output.write(&view.id);
        } else {
            output.write(&output::detail_block(&view));
        }
    }
}

/// Handle the authors and genres commands - print selector options
fn handle_options_command(all_label: &str, options: &Directory, output: &StdoutWriter) {
    if !output.is_quiet() {
        output.write(&output::option_line("any", all_label, false));
    }
    for (id, name) in options.iter() {
        output.write(&output::option_line(id, name, output.is_quiet()));
    }
}

/// Handle config subcommands
///
/// # Errors
///
/// Returns `BookrError` if the new value is invalid or the config file
/// cannot be written.
fn handle_config_command(
    mut config: BookrConfig,
    command: &ConfigCommands,
    output: &StdoutWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let path = BookrConfig::config_path()?;
            output.info(&format!("# {}", path.display()));
            let text = toml::to_string_pretty(&config)
                .map_err(|e| BookrError::InvalidInput(format!("Failed to render config: {e}")))?;
            output.write(text.trim_end());
        }
        ConfigCommands::SetTheme { theme } => {
            config.theme = *theme;
            config.save()?;
            output.success(&format!("Theme set to {theme}"));
        }
        ConfigCommands::SetPageSize { page_size } => {
            config.set_page_size(*page_size)?;
            config.save()?;
            output.success(&format!("Page size set to {page_size}"));
        }
        ConfigCommands::SetCatalog { path } => {
            let catalog = Catalog::load(path)?;
            config.catalog = Some(path.clone());
            config.save()?;
            output.success(&format!(
                "Catalog set to {} ({} books)",
                path.display(),
                catalog.len()
            ));
        }
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = BookrConfig::load()?;

    let output = StdoutWriter::quiet(cli.quiet || config.quiet);
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, &output);
    }

    let catalog = config.open_catalog(cli.catalog.as_deref(), cli.page_size)?;

    match &command {
        Commands::Browse { filter } => {
            handle_browse_command(catalog, filter.to_query(), &cli, &config)?;
        }
        Commands::List { filter, page } => {
            handle_list_command(catalog, filter.to_query(), *page, &output)?;
        }
        Commands::Show { id } => handle_show_command(&catalog, id, &output),
        Commands::Authors => {
            handle_options_command("All authors", catalog.authors(), &output);
        }
        Commands::Genres => {
            handle_options_command("All genres", catalog.genres(), &output);
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        StdoutWriter::new().error(&e.to_string());
        std::process::exit(1);
    }
}
