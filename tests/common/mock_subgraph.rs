use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

pub const USDC_ID: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const KNOWN_BLOCK: &str = "13315378";

#[derive(Clone)]
enum Behaviour {
    Uniswap,
    Fixed(StatusCode, Value),
    Slow(Duration),
}

#[derive(Clone)]
struct MockState {
    behaviour: Behaviour,
    received: Arc<Mutex<Vec<Value>>>,
}

/// An in-process stand-in for the Uniswap v3 subgraph.
pub struct MockSubgraph {
    pub url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockSubgraph {
    /// Knows USDC and block 13315378, answers everything else the way the
    /// hosted subgraph does.
    pub async fn uniswap() -> Self {
        Self::start(Behaviour::Uniswap).await
    }

    /// Answers every query with the same status and body.
    pub async fn fixed(status: StatusCode, body: Value) -> Self {
        Self::start(Behaviour::Fixed(status, body)).await
    }

    /// Answers like `uniswap()`, but only after `delay`.
    pub async fn slow(delay: Duration) -> Self {
        Self::start(Behaviour::Slow(delay)).await
    }

    pub fn unreachable() -> Self {
        Self {
            url: "http://127.0.0.1:1/".to_string(),
            received: Arc::default(),
        }
    }

    /// Bodies of every GraphQL request received so far.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    async fn start(behaviour: Behaviour) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            behaviour,
            received: received.clone(),
        };

        let mock_app = Router::new().route("/", post(graphql)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{addr}/");

        tokio::spawn(async move {
            axum::serve(listener, mock_app).await.unwrap();
        });

        tokio::time::sleep(Duration::from_millis(50)).await;

        Self { url, received }
    }
}

async fn graphql(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.received.lock().unwrap().push(body.clone());

    match state.behaviour {
        Behaviour::Uniswap => Json(uniswap_answer(&body)).into_response(),
        Behaviour::Fixed(status, value) => (status, Json(value)).into_response(),
        Behaviour::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(uniswap_answer(&body)).into_response()
        },
    }
}

fn uniswap_answer(body: &Value) -> Value {
    let variables = &body["variables"];

    if let Some(id) = variables.get("id") {
        if id == USDC_ID {
            json!({ "data": { "token": usdc_token() } })
        } else {
            json!({ "data": { "token": null } })
        }
    } else if let Some(block) = variables.get("block") {
        if block.to_string() == KNOWN_BLOCK {
            json!({ "data": { "transactions": block_transactions() } })
        } else {
            json!({
                "data": null,
                "errors": [{
                    "message": format!("Failed to decode `block.number` value: `subgraph QmZeCuoZeadgHkGwLwMeguyqUKz1WPWQYKcKyMCeQqGhsF has only indexed up to block number 20000000 and data for block number {block} is therefore not yet available`")
                }]
            })
        }
    } else {
        json!({ "data": null, "errors": [{ "message": "unknown query" }] })
    }
}

fn pool(symbol0: &str, name0: &str, symbol1: &str, name1: &str) -> Value {
    json!({
        "token0": { "name": name0, "symbol": symbol0 },
        "token1": { "name": name1, "symbol": symbol1 },
    })
}

pub fn usdc_token() -> Value {
    json!({
        "id": USDC_ID,
        "name": "USD Coin",
        "symbol": "USDC",
        "volumeUSD": "519358437154.6421737097025459404574",
        "whitelistPools": [
            pool("USDC", "USD Coin", "WETH", "Wrapped Ether"),
            pool("DAI", "Dai Stablecoin", "USDC", "USD Coin"),
            pool("USDC", "USD Coin", "WETH", "Wrapped Ether"),
            pool("USDC", "USD Coin", "USDT", "Tether USD"),
            pool("WBTC", "Wrapped BTC", "USDC", "USD Coin"),
            pool("DAI", "Dai Stablecoin", "USDC", "USD Coin"),
        ]
    })
}

fn swap(symbol0: &str, amount0: &str, symbol1: &str, amount1: &str) -> Value {
    json!({
        "timestamp": "1633037073",
        "amount0": amount0,
        "amount1": amount1,
        "token0": { "symbol": symbol0 },
        "token1": { "symbol": symbol1 },
    })
}

pub fn block_transactions() -> Value {
    json!([
        { "swaps": [
            swap("USDC", "-100.5", "WETH", "0.05"),
            swap("WETH", "-0.05", "DAI", "100.2"),
        ]},
        { "swaps": [] },
        { "swaps": [
            swap("USDC", "-100.5", "WETH", "0.05"),
        ]},
        { "swaps": [
            swap("UNI", "12", "WETH", "-0.09"),
            swap("WBTC", "0.01", "USDC", "-433.1"),
        ]},
    ])
}
