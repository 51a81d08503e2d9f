// SPDX-License-Identifier: GPL-3.0-only

use anywho::Error;

use pokefetch::utils::capitalize_string;
use pokefetch::{CatalogEntry, CatalogFetcher, CatalogStore, PokeApiSource};

const DEFAULT_LIMIT: i64 = 20;

struct Request {
    name: String,
    page: i64,
    limit: i64,
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pokefetch=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(request) = parse_args(&args) else {
        print_help();
        std::process::exit(2);
    };

    let store = CatalogStore::new();
    let fetcher = CatalogFetcher::new(PokeApiSource::default(), store);

    if let Err(err) = run(&fetcher, &request).await {
        tracing::error!("fetch failed: {err}");
        eprintln!("Could not reach the Pokémon catalog. Please try again later.");
        std::process::exit(1);
    }
}

async fn run(fetcher: &CatalogFetcher<PokeApiSource>, request: &Request) -> Result<(), Error> {
    let entries = fetcher
        .fetch_data(&request.name, request.page, request.limit)
        .await?;

    if request.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            print_entry(entry);
        }
    }

    Ok(())
}

fn print_entry(entry: &CatalogEntry) {
    println!(
        "{} ({})",
        capitalize_string(&entry.name),
        entry.types.join("/")
    );
    println!("  Species: {}", capitalize_string(&entry.species));
    if let Some(url) = &entry.image_url {
        println!("  Sprite: {url}");
    }
    for stat in &entry.stats {
        println!("  {}: {}", capitalize_string(&stat.name), stat.base_value);
    }
}

fn parse_args(args: &[String]) -> Option<Request> {
    if args.is_empty() {
        return None;
    }

    let mut request = Request {
        name: String::new(),
        page: 0,
        limit: DEFAULT_LIMIT,
        json: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" => request.name = iter.next()?.clone(),
            "-p" => request.page = iter.next()?.parse().ok()?,
            "-l" => request.limit = iter.next()?.parse().ok()?,
            "--json" => request.json = true,
            _ => return None,
        }
    }

    Some(request)
}

fn print_help() {
    println!(
        "Usage: {} [FLAGS]",
        std::env::args()
            .next()
            .unwrap_or_else(|| "pokefetch".to_string())
    );
    println!();
    println!("FLAGS:");
    println!("  -p <page>    Fetch one listing page starting at the given offset");
    println!("  -l <limit>   Page size (default {DEFAULT_LIMIT})");
    println!("  -n <name>    Fetch a single Pokémon by name (ignores -p and -l)");
    println!("  --json       Emit JSON instead of text");
}
