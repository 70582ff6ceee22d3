//! Market catalog configuration.
//!
//! The routing engine consumes a per-chain list of markets supplied by
//! static configuration. This module loads that catalog from JSON and
//! validates it before any graph is built: the engine itself assumes
//! well-formed input, so malformed markets are rejected here.

use crate::errors::ConfigError;
use crate::graph::{ChainId, Market};
use crate::ConfigResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Per-chain market configuration.
///
/// Serialized as a JSON object keyed by chain id:
///
/// ```json
/// {
///   "42161": [
///     { "id": "0xm1", "longToken": "0xeth", "shortToken": "0xusdc" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketCatalog {
    chains: BTreeMap<ChainId, Vec<Market>>,
}

impl MarketCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the market list for a chain, replacing any previous list.
    pub fn insert_chain(&mut self, chain_id: ChainId, markets: Vec<Market>) {
        self.chains.insert(chain_id, markets);
    }

    /// Parse a catalog from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> crate::errors::Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;

        tracing::debug!(
            chain_count = catalog.chain_count(),
            "Market catalog parsed from JSON"
        );

        Ok(catalog)
    }

    /// Load a catalog from a JSON file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> crate::errors::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            chain_count = catalog.chain_count(),
            "Market catalog loaded"
        );

        Ok(catalog)
    }

    /// Validate the catalog.
    ///
    /// Empty market ids and empty token addresses are rejected. Duplicate
    /// market ids and same-collateral markets are deliberately allowed: the
    /// graph builder accumulates the former as-is and skips the latter.
    pub fn validate(&self) -> ConfigResult<()> {
        for (&chain_id, markets) in &self.chains {
            for (index, market) in markets.iter().enumerate() {
                if market.id.is_empty() {
                    return Err(ConfigError::EmptyMarketId { chain_id, index });
                }
                if market.long_token.is_empty() || market.short_token.is_empty() {
                    return Err(ConfigError::EmptyTokenAddress {
                        chain_id,
                        market_id: market.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// All configured chains and their market lists, in chain id order.
    pub fn chains(&self) -> &BTreeMap<ChainId, Vec<Market>> {
        &self.chains
    }

    /// The market list for one chain, if configured.
    pub fn markets_for(&self, chain_id: ChainId) -> Option<&[Market]> {
        self.chains.get(&chain_id).map(Vec::as_slice)
    }

    /// Number of configured chains.
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"
    {
        "42161": [
            { "id": "0xm1", "longToken": "0xeth", "shortToken": "0xusdc" },
            { "id": "0xm2", "longToken": "0xbtc", "shortToken": "0xeth" }
        ],
        "43114": [
            { "id": "0xm3", "longToken": "0xavax", "shortToken": "0xusdc" }
        ]
    }"#;

    #[test]
    fn test_parse_valid_catalog() {
        let catalog = MarketCatalog::from_json_str(CATALOG_JSON).unwrap();

        assert_eq!(catalog.chain_count(), 2);
        assert_eq!(catalog.markets_for(42161).unwrap().len(), 2);
        assert_eq!(catalog.markets_for(43114).unwrap().len(), 1);
        assert!(catalog.markets_for(1).is_none());

        let market = &catalog.markets_for(42161).unwrap()[0];
        assert_eq!(market.id.as_str(), "0xm1");
        assert_eq!(market.long_token.as_str(), "0xeth");
        assert_eq!(market.short_token.as_str(), "0xusdc");
    }

    #[test]
    fn test_empty_market_id_rejected() {
        let json = r#"{ "1": [ { "id": "", "longToken": "0xa", "shortToken": "0xb" } ] }"#;
        let result = MarketCatalog::from_json_str(json);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("empty market id"));
    }

    #[test]
    fn test_empty_token_address_rejected() {
        let json = r#"{ "1": [ { "id": "0xm1", "longToken": "", "shortToken": "0xb" } ] }"#;
        let result = MarketCatalog::from_json_str(json);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("empty token address"));
    }

    #[test]
    fn test_duplicate_market_ids_allowed() {
        let json = r#"{ "1": [
            { "id": "0xm1", "longToken": "0xa", "shortToken": "0xb" },
            { "id": "0xm1", "longToken": "0xa", "shortToken": "0xb" }
        ] }"#;
        assert!(MarketCatalog::from_json_str(json).is_ok());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(MarketCatalog::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        let catalog = MarketCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.chain_count(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = MarketCatalog::from_file("/nonexistent/catalog.json");
        assert!(matches!(
            result,
            Err(crate::errors::RoutingError::Io(_))
        ));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut catalog = MarketCatalog::new();
        catalog.insert_chain(1, vec![Market::new("0xm1", "0xa", "0xb")]);

        let json = serde_json::to_string(&catalog).unwrap();
        let parsed = MarketCatalog::from_json_str(&json).unwrap();
        assert_eq!(catalog, parsed);
    }
}
