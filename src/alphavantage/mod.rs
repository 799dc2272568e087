//! Alpha Vantage module - client implementation for the quote API

pub mod client;
pub mod messages;

pub use client::AlphaVantageClient;
