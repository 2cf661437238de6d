use super::{QueryRequest, SubgraphError};
use serde_json::{Map, Value};

pub const ASSET_QUERY: &str = r#"
    query Asset($id: ID!) {
        token(id: $id) {
            id
            name
            symbol
            volumeUSD
            whitelistPools {
                token0 {
                    name
                    symbol
                }
                token1 {
                    name
                    symbol
                }
            }
        }
    }
"#;

pub const BLOCK_QUERY: &str = r#"
    query Block($block: Int!) {
        transactions(block: { number: $block }) {
            swaps {
                timestamp
                amount0
                amount1
                token0 {
                    symbol
                }
                token1 {
                    symbol
                }
            }
        }
    }
"#;

/// Token details and whitelisted pools for a contract address.
pub fn asset_query(id: &str) -> QueryRequest {
    let mut variables = Map::new();
    variables.insert("id".to_string(), Value::from(id));

    QueryRequest {
        name: "asset",
        query: ASSET_QUERY,
        variables,
    }
}

/// Swaps of every transaction at a block height.
///
/// The subgraph takes the height as a GraphQL `Int`, so anything other than
/// plain decimal digits fitting a non-negative 32-bit integer is rejected
/// before a request is made. Signs and leading zeros are not accepted.
pub fn block_query(block_number: &str) -> Result<QueryRequest, SubgraphError> {
    let is_canonical = !block_number.is_empty()
        && block_number.bytes().all(|b| b.is_ascii_digit())
        && (block_number == "0" || !block_number.starts_with('0'));

    let block = is_canonical
        .then(|| block_number.parse::<i32>().ok())
        .flatten()
        .ok_or_else(|| SubgraphError::InvalidVariable(format!("block number {block_number:?}")))?;

    let mut variables = Map::new();
    variables.insert("block".to_string(), Value::from(block));

    Ok(QueryRequest {
        name: "block",
        query: BLOCK_QUERY,
        variables,
    })
}
