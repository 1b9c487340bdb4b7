//! Pool record boundary.
//!
//! The graph builder (`spec.md` §4.2) only needs four string fields per
//! pool; it is written against the `PoolFields` trait rather than the
//! concrete JSON shape, so the ingestion format stays a swappable external
//! collaborator (`spec.md` §1) instead of a hard dependency of the core.

use serde::Deserialize;

/// What the graph builder needs from one pool record.
pub trait PoolFields {
    fn token0_id(&self) -> &str;
    fn token1_id(&self) -> &str;
    fn reserve0(&self) -> &str;
    fn reserve1(&self) -> &str;
    fn reserve_usd(&self) -> &str;
}

/// A single token reference inside a pool record (`{"id": "0x..."}`).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRef {
    pub id: String,
}

/// The JSON shape a pool snapshot record takes (`spec.md` §6): two token
/// references plus three decimal-numeric strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolRecord {
    pub token0: TokenRef,
    pub token1: TokenRef,
    pub reserve0: String,
    pub reserve1: String,
    #[serde(rename = "reserveUSD")]
    pub reserve_usd: String,
}

impl PoolFields for PoolRecord {
    fn token0_id(&self) -> &str {
        &self.token0.id
    }

    fn token1_id(&self) -> &str {
        &self.token1.id
    }

    fn reserve0(&self) -> &str {
        &self.reserve0
    }

    fn reserve1(&self) -> &str {
        &self.reserve1
    }

    fn reserve_usd(&self) -> &str {
        &self.reserve_usd
    }
}
