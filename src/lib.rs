pub mod archiver;
pub mod collector;
pub mod config;
pub mod fetcher;
pub mod logger;
pub mod models;
pub mod parser;
pub mod samples;

pub use archiver::{load_from_file, save_to_file};
pub use collector::{collect, collect_from};
pub use models::Listing;
