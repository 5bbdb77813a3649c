//! Command-line front end for the cineshelf catalog.
//! Usage:
//!   cineshelf [home]
//!   cineshelf search <query...>
//!   cineshelf detail <movie_id>
//!   cineshelf watch-later list
//!   cineshelf watch-later add <movie_id>
//!   cineshelf watch-later remove <movie_id>
//! Requires TMDB_API_KEY in the environment (.env supported).

use anyhow::{bail, Context, Result};
use cineshelf::catalog::Catalog;
use cineshelf::models::Movie;
use cineshelf::tmdb::TmdbClient;
use cineshelf::watchlist::WatchLaterStore;
use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: cineshelf [home | search <query> | detail <id> | watch-later <list|add <id>|remove <id>>]";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn check_env() -> Result<()> {
    if env::var("TMDB_API_KEY").is_err() {
        bail!("Missing required environment variable: TMDB_API_KEY");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    match dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
    check_env()?;

    let api = Arc::new(TmdbClient::from_env()?);
    let store = WatchLaterStore::from_env()?;
    let mut catalog = Catalog::new(api, store);
    catalog.load_watch_later();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("home") => home(&mut catalog).await,
        Some("search") => {
            let query = args[1..].join(" ");
            if query.is_empty() {
                bail!("search needs a query\n{USAGE}");
            }
            search(&mut catalog, &query).await
        }
        Some("detail") => detail(&catalog, parse_id(args.get(1))?).await,
        Some("watch-later") => watch_later(&mut catalog, &args[1..]).await,
        Some(other) => bail!("unknown command '{other}'\n{USAGE}"),
    }
}

async fn home(catalog: &mut Catalog) -> Result<()> {
    catalog.load_popular().await;
    catalog.load_trending().await;

    if !catalog.watch_later.is_empty() {
        print_movies("Watch later", &catalog.watch_later);
    }
    print_movies("Popular", &catalog.popular);
    print_movies("Trending today", &catalog.trending);

    if let Some(msg) = catalog.error_message.clone() {
        bail!(msg);
    }
    Ok(())
}

async fn search(catalog: &mut Catalog, query: &str) -> Result<()> {
    catalog.search(query).await;
    if let Some(msg) = catalog.error_message.clone() {
        bail!(msg);
    }
    print_movies(&format!("Results for '{query}'"), &catalog.search_results);
    Ok(())
}

async fn detail(catalog: &Catalog, id: i32) -> Result<()> {
    let detail = catalog
        .get_detail(id)
        .await
        .with_context(|| format!("fetching detail for movie {id}"))?;

    println!("{} (id {})", detail.title, detail.id);
    if let Some(date) = &detail.release_date {
        println!("  released: {date}");
    }
    if let Some(rating) = detail.vote_average {
        println!("  rating:   {rating:.1}");
    }
    if let Some(url) = detail.poster_url() {
        println!("  poster:   {url}");
    }
    if let Some(overview) = &detail.overview {
        println!("  {overview}");
    }
    let summary = Movie::from(detail);
    if catalog.is_in_watch_later(&summary) {
        println!("  [in watch-later list]");
    }
    Ok(())
}

async fn watch_later(catalog: &mut Catalog, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        None | Some("list") => {
            print_movies("Watch later", &catalog.watch_later);
            Ok(())
        }
        Some("add") => {
            let id = parse_id(args.get(1))?;
            let detail = catalog
                .get_detail(id)
                .await
                .with_context(|| format!("fetching detail for movie {id}"))?;
            let movie = Movie::from(detail);
            let title = movie.title.clone();
            catalog.add_to_watch_later(movie);
            println!("Added '{title}' to watch later");
            Ok(())
        }
        Some("remove") => {
            let id = parse_id(args.get(1))?;
            match catalog.watch_later.iter().find(|m| m.id == id).cloned() {
                Some(movie) => {
                    catalog.remove_from_watch_later(&movie);
                    println!("Removed '{}' from watch later", movie.title);
                }
                None => println!("Movie {id} is not in the watch-later list"),
            }
            Ok(())
        }
        Some(other) => bail!("unknown watch-later subcommand '{other}'\n{USAGE}"),
    }
}

fn parse_id(arg: Option<&String>) -> Result<i32> {
    arg.context(USAGE)?
        .parse()
        .context("movie id must be a number")
}

fn print_movies(heading: &str, movies: &[Movie]) {
    println!("{heading}:");
    if movies.is_empty() {
        println!("  (none)");
        return;
    }
    for movie in movies {
        let year = movie
            .release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .unwrap_or("----");
        let rating = movie
            .vote_average
            .map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>8}  {}  ({year}, {rating})", movie.id, movie.title);
    }
    println!();
}
