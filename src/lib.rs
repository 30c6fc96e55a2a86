//! Typed Rust models and async client for the [tzKT](https://api.tzkt.io) Tezos indexer API.
//!
//! This crate provides serde models of the API's responses, a filter builder that compiles
//! Django-style keys (`level__gt`) into the API's dotted query parameters (`level.gt`), and
//! an async client with one method per endpoint.
//!
//! # Features
//!
//! - **`types` module**: response models and request options. Available with no
//!   additional features.
//! - **`query_helpers` module**: the filter builder and compiler. Always available.
//! - **`client` module** (enabled by default): an async client built on `reqwest`.
//!
//! # Quick start
//!
//! ```no_run
//! use tzkt_client::{TzktClient, query_helpers::{Comparator, Filters, SortOrder}};
//!
//! #[tokio::main]
//! async fn main() -> tzkt_client::client::Result<()> {
//!     let client = TzktClient::mainnet();
//!     let filters = Filters::new()
//!         .with_modifier("balance", Comparator::Gt, 1_000_000_000_000i64)
//!         .sort(SortOrder::Desc, "balance")
//!         .limit(10);
//!     for account in client.accounts(&filters).await? {
//!         println!("{} {}", account.address, account.balance);
//!     }
//!     Ok(())
//! }
//! ```

pub mod query_helpers;
mod token_helpers;
pub mod types;

pub use query_helpers::{Filters, ParameterError};
pub use token_helpers::{MUTEZ_PER_TEZ, Mutez};

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::TzktClient;

pub use types::*;
