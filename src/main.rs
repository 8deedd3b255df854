mod analysis;
mod config;
mod crawler;
mod models;
mod scrapers;
mod server;
mod storage;
mod tools;

use clap::{Parser, Subcommand};
use config::CrawlerConfig;
use crawler::AccommodationCrawler;
use scrapers::{HttpListingSource, ListingFetcher};
use std::sync::Arc;
use tools::ToolRegistry;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "accommodation-scout", about = "Accommodation search and price analysis")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the tools over HTTP (default)
    Serve,
    /// Search one keyword and print the result
    Search {
        keyword: String,
        #[arg(long, default_value = "")]
        check_in: String,
        #[arg(long, default_value = "")]
        check_out: String,
        /// Save the result as JSON
        #[arg(long)]
        save: bool,
        /// Output file (default: <keyword>_results.json)
        #[arg(long, requires = "save")]
        output: Option<String>,
    },
    /// Compare average prices across areas
    Compare {
        #[arg(required = true)]
        areas: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = CrawlerConfig::from_env()?;

    info!("🏨 Accommodation Scout");
    info!("Upstream: {} (fallback: {:?})", config.api_url, config.fallback);

    let source = HttpListingSource::new(&config)?;
    let crawler = AccommodationCrawler::new(ListingFetcher::new(Arc::new(source), config.fallback));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let registry = ToolRegistry::with_accommodation_tools(crawler);
            info!("Tools: {}", registry.names().collect::<Vec<_>>().join(", "));
            server::serve(Arc::new(registry), config.bind_addr).await?;
        }
        Command::Search {
            keyword,
            check_in,
            check_out,
            save,
            output,
        } => {
            let result = crawler
                .search_accommodations(&keyword, &check_in, &check_out)
                .await?;

            info!("✅ Found {} accommodations for '{}'\n", result.total_found, keyword);
            for (i, listing) in result.accommodations.iter().enumerate() {
                match listing.price {
                    Some(price) => println!("{}. {} ({} 원)", i + 1, listing.name, price),
                    None => println!("{}. {}", i + 1, listing.name),
                }
                println!("   {}", listing.location);
                if let Some(rating) = listing.rating {
                    println!("   Rating: {:.1} ({} reviews)", rating, listing.reviews.unwrap_or(0));
                }
                println!("   Amenities: {}", listing.amenities.join(", "));
                println!("   Available: {}", if listing.availability { "yes" } else { "no" });
                println!();
            }
            println!("{}", serde_json::to_string_pretty(&result.price_analysis)?);

            if save {
                let payload = serde_json::to_value(&result)?;
                let outcome =
                    storage::save_search_results(&keyword, &payload, output.as_deref()).await;
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
        }
        Command::Compare { areas } => {
            let comparison = crawler.compare_areas(&areas).await?;

            for (area, summary) in &comparison.comparison {
                println!(
                    "{}: avg {:.0} 원 (min {}, max {}, {} listings)",
                    area,
                    summary.average_price,
                    summary.min_price,
                    summary.max_price,
                    summary.total_accommodations
                );
            }
            if let (Some(cheapest), Some(priciest)) =
                (&comparison.cheapest_area, &comparison.most_expensive_area)
            {
                println!();
                println!("Cheapest: {}", cheapest);
                println!("Most expensive: {}", priciest);
            }
        }
    }

    Ok(())
}
