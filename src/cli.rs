use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::{CatalogClient, ResultPage};
use crate::ui::grid::year_label;

#[derive(Debug, Parser)]
#[command(name = "movie-browser", version, about = "Browse popular movies by release year")]
pub struct Cli {
    /// Pre-fill the year field and search immediately.
    #[arg(long, value_parser = year_parser())]
    pub year: Option<i32>,

    /// Configuration file (default: ~/.config/movie-browser/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TMDB API key. Overrides TMDB_API_KEY and the config file.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one page of results and print it without starting the browser.
    Discover {
        #[arg(long, value_parser = year_parser())]
        year: i32,

        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Print the raw page as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Years that fit the four-digit year field.
fn year_parser() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(1..=9999)
}

/// Text or JSON rendering of a discovery page for stdout.
pub fn format_discover(
    page: &ResultPage,
    client: &CatalogClient,
    json: bool,
) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(page);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Page {} of {} ({} results)",
        page.page, page.total_pages, page.total_results
    );
    if page.movies.is_empty() {
        let _ = writeln!(out, "No movies found.");
        return Ok(out);
    }
    for movie in &page.movies {
        let _ = write!(
            out,
            "{:>8}  {}  ({})  ★ {:.1}",
            movie.id,
            movie.title,
            year_label(movie),
            movie.vote_average
        );
        if let Some(url) = client.poster_url(movie.poster_ref()) {
            let _ = write!(out, "  {}", url);
        }
        out.push('\n');
    }
    Ok(out)
}
