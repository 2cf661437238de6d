use crate::{
    helpers::sorted_unique,
    subgraph::types::{Swap, Transaction},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResponse {
    /// The requested block number, as given
    pub block_height: String,
    /// One summary per swap, in the order the subgraph returned them
    pub swaps: Vec<String>,
    pub assets_swapped: Vec<String>,
}

/// Renders a swap as `SYMBOL0 AMOUNT0 : SYMBOL1 AMOUNT1`.
pub fn swap_summary(swap: &Swap) -> String {
    format!(
        "{} {} : {} {}",
        swap.token0.symbol, swap.amount0, swap.token1.symbol, swap.amount1
    )
}

impl BlockResponse {
    pub fn new(block_height: impl Into<String>, transactions: &[Transaction]) -> Self {
        let mut swaps = Vec::new();
        let mut assets = Vec::new();

        for swap in transactions.iter().flat_map(|tx| &tx.swaps) {
            swaps.push(swap_summary(swap));
            assets.push(swap.token0.symbol.clone());
            assets.push(swap.token1.symbol.clone());
        }

        Self {
            block_height: block_height.into(),
            swaps,
            assets_swapped: sorted_unique(assets),
        }
    }
}
