//! # scorecache - a local cache for domain privacy scores
//!
//! scorecache sits between a presentation layer (a browser overlay, a
//! script, a terminal) and a remote scoring service. It reduces page URLs to
//! registrable domains, keeps one score record per domain, and only goes
//! back to the service once a record has aged out of its window.
//!
//! ## Features
//!
//! - **Domain extraction**: URL to registrable domain, aware of second-level
//!   country-code suffixes such as `co.uk`
//! - **Freshness policy**: separate windows for scored and unscored domains
//! - **Pluggable storage**: in-memory or one JSON file per domain
//! - **Message boundary**: the request/response messages a page overlay uses,
//!   servable over stdin/stdout
//! - **Multiple Output Formats**: Plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use scorecache::cache::ScoreCache;
//! use scorecache::client::{ClientConfig, ScoreClient};
//! use scorecache::freshness::FreshnessPolicy;
//! use scorecache::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ScoreClient::new(ClientConfig::default()).unwrap();
//!     let cache = ScoreCache::new(
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(client),
//!         FreshnessPolicy::default(),
//!     );
//!
//!     if let Some((domain, outcome)) = cache.lookup_url("https://www.example.com/").await.unwrap() {
//!         println!("{} {:?}", domain, outcome.record().score);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`domain`] - URL to registrable domain
//! - [`freshness`] - Expiry windows and the use-cached/refetch decision
//! - [`cache`] - The lookup orchestrator
//! - [`storage`] - The `ScoreStore` trait and its implementations
//! - [`client`] - The `ScoreFetcher` trait and the HTTP client
//! - [`messages`] - Overlay request/response messages
//! - [`config`] - Settings and XDG paths
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod cache;
pub mod cli;
pub mod client;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod freshness;
pub mod messages;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use cache::{Outcome, ScoreCache};
pub use error::{CliError, ScoreError, StorageError};
pub use freshness::{Freshness, FreshnessPolicy};
pub use types::{Score, ScoreRecord};
