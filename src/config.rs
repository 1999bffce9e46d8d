use std::path::PathBuf;

use clap::Parser;
use clap::builder::TypedValueParser;

pub const DEFAULT_QUERY: &str = "dog toys";
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_OUTPUT: &str = "products.json";

/// Fetch product listings for a search and save them as JSON
#[derive(Parser, Debug, Clone)]
#[command(name = "listing_scraper", version, about, long_about = None)]
pub struct Config {
    /// Search query
    #[arg(short, long, env = "SCRAPER_QUERY", default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Maximum number of listings to keep
    #[arg(
        short = 'n',
        long,
        env = "SCRAPER_MAX_RESULTS",
        default_value_t = DEFAULT_MAX_RESULTS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub max_results: usize,

    /// Where to write the JSON array
    #[arg(short, long, env = "SCRAPER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also save the fetched HTML here (for debugging selectors)
    #[arg(long, value_name = "PATH")]
    pub dump_html: Option<PathBuf>,
}

/// Load `.env` into the environment. A missing file is not an error.
pub fn load_dotenv() -> Result<(), dotenvy::Error> {
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_arguments() {
        let config = Config::try_parse_from(["listing_scraper"]).unwrap();
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.dump_html.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "listing_scraper",
            "-q",
            "cat trees",
            "-n",
            "3",
            "--output",
            "out.json",
            "--dump-html",
            "page.html",
        ])
        .unwrap();
        assert_eq!(config.query, "cat trees");
        assert_eq!(config.max_results, 3);
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.dump_html, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn rejects_zero_results() {
        assert!(Config::try_parse_from(["listing_scraper", "-n", "0"]).is_err());
    }
}
