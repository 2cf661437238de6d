use crate::{helpers::sorted_unique, subgraph::types::Token};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    pub name: String,
    pub symbol: String,
    pub contract_address: String,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: String,
    /// `SYMBOL0:SYMBOL1` of every whitelisted pool, sorted and unique
    pub pools: Vec<String>,
}

impl From<Token> for AssetResponse {
    fn from(token: Token) -> Self {
        let pairs = token
            .whitelist_pools
            .iter()
            .map(|pool| format!("{}:{}", pool.token0.symbol, pool.token1.symbol))
            .collect();

        Self {
            name: token.name,
            symbol: token.symbol,
            contract_address: token.id,
            volume_usd: token.volume_usd,
            pools: sorted_unique(pairs),
        }
    }
}
