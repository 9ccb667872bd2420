//! # fusedex: Creature Fusion Engine
//!
//! Fetches three creature records, fuses them into one synthesized record
//! and keeps the fusions a user likes in a favorites store.
//!
//! ## Components
//!
//! - [`engine`]: pure fusion (`fuse`) and deterministic name synthesis
//! - [`color`]: category → color token lookup with a safe fallback
//! - [`record`]: validated source records and fused records
//! - [`provider`]: PokeAPI client, fixture provider, injectable id sources
//! - [`kv`] / [`favorites`]: key-value backends and the favorites collection
//! - [`config`]: TOML + environment configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fusedex::provider::{CreatureProvider, PokeApiProvider};
//!
//! # async fn example() -> fusedex::Result<()> {
//! let provider = PokeApiProvider::public()?;
//! let [a, b, c] = provider.fetch_three_random().await?;
//!
//! let fused = fusedex::fuse(a, b, c)?;
//! println!("{} ({:?})", fused.name(), fused.types());
//! for category in fused.types() {
//!     println!("{category}: {}", fusedex::lookup_color(category.as_str()));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod kv;
pub mod provider;
pub mod record;

pub use color::{lookup_color, ColorToken, DEFAULT_COLOR};
pub use config::FusionConfig;
pub use engine::{fuse, generate_fused_name, FusionEngine};
pub use error::{Error, Result};
pub use record::{Category, FusedRecord, Move, SourceRecord, Stat};
