// =============================================================================
// Yahoo Finance chart API module
// =============================================================================

pub mod client;

pub use client::YahooClient;
