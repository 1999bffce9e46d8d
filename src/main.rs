use anyhow::Result;
use clap::Parser;

use listing_scraper::config::{self, Config};
use listing_scraper::fetcher::HttpFetcher;
use listing_scraper::{archiver, collector, logger};

fn main() -> Result<()> {
    // .env may carry LOG_LEVEL, so it goes first
    let dotenv = config::load_dotenv();
    logger::init_logger();
    if let Err(e) = dotenv {
        log::warn!("Unable to load the .env file: {e}");
    }

    let config = Config::parse();
    log::debug!("{config:?}");

    let listings = match &config.dump_html {
        Some(path) => collector::collect_with(
            HttpFetcher::new().map(|f| f.with_dump_path(path)),
            &config.query,
            config.max_results,
        ),
        None => collector::collect(&config.query, config.max_results),
    };

    archiver::save_to_file(&listings, &config.output)?;
    println!(
        "Saved {} listings to {} at {}",
        listings.len(),
        config.output.display(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}
