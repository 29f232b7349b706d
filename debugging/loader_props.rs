//! Run a page loader against live TMDB and print its JSON output.
//! Usage:
//!   cargo run --bin loader_props -- home [listType] [page]
//!   cargo run --bin loader_props -- list <movies|tv-shows> <listType> [page]
//!   cargo run --bin loader_props -- movie <movie_id> [credits|reviews]
//!   cargo run --bin loader_props -- search <query> [page]
//! Requires TMDB_API_KEY in the environment (.env supported).

use anyhow::{Context, Result};
use dotenvy::dotenv;
use rmdb::config::AppConfig;
use rmdb::loaders::{self, Loaded};
use rmdb::params::RequestParams;
use rmdb::tmdb::TmdbClient;
use serde::Serialize;
use std::env;

fn usage() -> ! {
    eprintln!("Usage: cargo run --bin loader_props -- home [listType] [page]");
    eprintln!("       cargo run --bin loader_props -- list <movies|tv-shows> <listType> [page]");
    eprintln!("       cargo run --bin loader_props -- movie <movie_id> [credits|reviews]");
    eprintln!("       cargo run --bin loader_props -- search <query> [page]");
    std::process::exit(1);
}

fn print<T: Serialize>(loaded: Loaded<T>) -> Result<()> {
    println!("Cache-Control: {}", loaded.cache_control);
    println!("{}", serde_json::to_string_pretty(&loaded.data)?);
    Ok(())
}

fn params_with_page(mut pairs: Vec<(&str, String)>, page: Option<&String>) -> RequestParams {
    if let Some(page) = page {
        pairs.push(("page", page.clone()));
    }
    RequestParams::from_pairs(pairs)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let config = AppConfig::from_env()?;
    let client = TmdbClient::from_config(&config);

    match args[1].as_str() {
        "home" => {
            let mut pairs = Vec::new();
            if let Some(list) = args.get(2) {
                pairs.push(("listType", list.clone()));
            }
            let params = params_with_page(pairs, args.get(3));
            print(loaders::home::load(&client, &params).await?)?
        }
        "list" => {
            let media = args.get(2).unwrap_or_else(|| usage());
            let list = args.get(3).unwrap_or_else(|| usage());
            let params = params_with_page(Vec::new(), args.get(4));
            print(loaders::media_list::load(&client, media, list, &params).await?)?
        }
        "movie" => {
            let id = args.get(2).context("missing movie id")?;
            match args.get(3).map(String::as_str) {
                None => print(loaders::movie::load_detail(&client, id).await?)?,
                Some("credits") => print(loaders::movie::load_credits(&client, id).await?)?,
                Some("reviews") => print(loaders::movie::load_reviews(&client, id).await?)?,
                Some(other) => anyhow::bail!("unknown movie tab '{other}'"),
            }
        }
        "search" => {
            let query = args.get(2).cloned().unwrap_or_default();
            let params = params_with_page(vec![("query", query)], args.get(3));
            print(loaders::search::load(&client, &params).await?)?
        }
        _ => usage(),
    }

    Ok(())
}
