//! PokeAPI HTTP provider
//!
//! `GET {base}/pokemon/{id}` supplies the creature; the first four listed
//! moves are resolved with one extra request each to learn their category.
//! A move whose lookup fails, or that has no category, falls back to
//! [`Category::Normal`] rather than failing the whole creature.

use std::time::Duration;

use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{CreatureProvider, IdSource, RandomIds};
use crate::record::{normalize_stat_name, Category, Move, SourceRecord, Stat, MAX_MOVES};
use crate::{Error, Result};

/// Public PokeAPI endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

const USER_AGENT: &str = concat!("fusedex/", env!("CARGO_PKG_VERSION"));

/// `{ "name": ..., "url": ... }` reference used throughout PokeAPI.
#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct ApiTypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiStat {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiMoveSlot {
    #[serde(rename = "move")]
    move_ref: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiPokemon {
    id: u32,
    name: String,
    types: Vec<ApiTypeSlot>,
    stats: Vec<ApiStat>,
    #[serde(default)]
    moves: Vec<ApiMoveSlot>,
    #[serde(default)]
    sprites: ApiSprites,
}

#[derive(Debug, Deserialize)]
struct ApiMove {
    #[serde(rename = "type")]
    kind: Option<NamedResource>,
}

impl ApiPokemon {
    /// Map the payload plus resolved moves into a validated record.
    ///
    /// A payload that does not form a valid record is the provider's fault,
    /// so validation failures surface as [`Error::Provider`].
    fn into_record(self, moves: Vec<Move>) -> Result<SourceRecord> {
        let id = self.id;
        let types = self
            .types
            .iter()
            .map(|slot| {
                Category::parse(&slot.kind.name).ok_or_else(|| {
                    Error::Provider(format!(
                        "creature {} has unknown type '{}'",
                        self.id, slot.kind.name
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let stats = self
            .stats
            .iter()
            .map(|s| Stat::new(normalize_stat_name(&s.stat.name), s.base_stat));

        SourceRecord::builder(self.id, self.name)
            .types(types)
            .stats(stats)
            .moves(moves)
            .sprite_url(self.sprites.front_default.unwrap_or_default())
            .build()
            .map_err(|e| Error::Provider(format!("creature {id} payload rejected: {e}")))
    }
}

/// HTTP provider backed by PokeAPI (or any server speaking its format).
#[derive(Debug, Clone)]
pub struct PokeApiProvider<I: IdSource = RandomIds> {
    client: reqwest::Client,
    base_url: String,
    ids: I,
}

impl PokeApiProvider<RandomIds> {
    /// Provider for the public API with random ids and a 30s timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the HTTP client cannot be built.
    pub fn public() -> Result<Self> {
        Self::new(DEFAULT_API_BASE_URL, Duration::from_secs(30), RandomIds::default())
    }
}

impl<I: IdSource> PokeApiProvider<I> {
    /// Create a provider against `base_url` (no trailing slash needed).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration, ids: I) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Provider(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ids,
        })
    }

    /// API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<(reqwest::StatusCode, Option<T>)> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Ok((status, None));
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| Error::Provider(format!("failed to parse response from {url}: {e}")))?;
        Ok((status, Some(body)))
    }

    async fn resolve_move(&self, slot: &ApiMoveSlot) -> Move {
        let name = &slot.move_ref.name;
        match self.get_json::<ApiMove>(&slot.move_ref.url).await {
            Ok((_, Some(ApiMove { kind: Some(kind) }))) => {
                let category = Category::parse(&kind.name).unwrap_or_else(|| {
                    tracing::warn!(%name, category = %kind.name, "unknown move category, using normal");
                    Category::Normal
                });
                Move::new(name.clone(), category)
            }
            Ok((_, Some(ApiMove { kind: None }))) => {
                tracing::warn!(%name, "move has no category, using normal");
                Move::new(name.clone(), Category::Normal)
            }
            Ok((status, None)) => {
                tracing::warn!(%name, %status, "move lookup failed, using normal");
                Move::new(name.clone(), Category::Normal)
            }
            Err(e) => {
                tracing::warn!(%name, error = %e, "move lookup failed, using normal");
                Move::new(name.clone(), Category::Normal)
            }
        }
    }
}

impl<I: IdSource> CreatureProvider for PokeApiProvider<I> {
    async fn fetch_by_id(&self, id: u32) -> Result<SourceRecord> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        tracing::debug!(%url, "fetching creature");

        let pokemon = match self.get_json::<ApiPokemon>(&url).await? {
            (_, Some(pokemon)) => pokemon,
            (status, None) => {
                return Err(Error::ProviderStatus {
                    id,
                    status: status.as_u16(),
                })
            }
        };

        let moves = join_all(
            pokemon
                .moves
                .iter()
                .take(MAX_MOVES)
                .map(|slot| self.resolve_move(slot)),
        )
        .await;

        pokemon.into_record(moves)
    }

    async fn fetch_random(&self) -> Result<SourceRecord> {
        self.fetch_by_id(self.ids.next_id()).await
    }
}
