// Infrastructure layer - Network, markup, fonts, panel and GPIO adapters
pub mod bootstrap;
pub mod config;
pub mod epd_fuse;
pub mod extractor;
pub mod fetcher;
pub mod fonts;
pub mod forecast_sources;
pub mod gpio;
