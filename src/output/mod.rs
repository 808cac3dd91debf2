//! Output formatting for CLI display
//!
//! This module provides utilities for formatting catalog entries in the CLI.
//! Every formatter has a quiet form that prints only the identifier or name,
//! for piping into other tools.

use crate::browse::DetailView;
use crate::catalog::{Book, Catalog};
use colored::Colorize;

/// Format a book as a single list line
#[must_use]
pub fn book_line(book: &Book, catalog: &Catalog, quiet: bool) -> String {
    if quiet {
        return book.id.clone();
    }
    let author = catalog
        .author_name(&book.author)
        .unwrap_or(book.author.as_str());
    format!(
        "  {} {} {}",
        book.title.bold(),
        author.magenta(),
        format!("[{}]", book.id).dimmed()
    )
}

/// Format the detail view of a book
#[must_use]
pub fn detail_block(view: &DetailView) -> String {
    let mut lines = vec![
        view.title.bold().to_string(),
        view.subtitle.magenta().to_string(),
        format!("{} {}", "Cover:".dimmed(), view.image.cyan()),
    ];
    if !view.genres.is_empty() {
        lines.push(format!("{} {}", "Genres:".dimmed(), view.genres.join(", ")));
    }
    if !view.description.is_empty() {
        lines.push(String::new());
        lines.push(view.description.clone());
    }
    lines.join("\n")
}

/// Format one selector option (author or genre)
#[must_use]
pub fn option_line(id: &str, name: &str, quiet: bool) -> String {
    if quiet {
        id.to_string()
    } else {
        format!("  {name} {}", format!("({id})").dimmed())
    }
}

/// Summary printed after a listing
#[must_use]
pub fn remaining_summary(shown: usize, total: usize, remaining: usize) -> String {
    if remaining == 0 {
        format!("Showing {shown} of {total} books")
    } else {
        format!("Showing {shown} of {total} books ({remaining} more, use --page to reveal)")
    }
}
