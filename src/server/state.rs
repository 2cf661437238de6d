use crate::subgraph::SubgraphClient;

#[derive(Clone)]
pub struct AppState {
    pub subgraph: SubgraphClient,
}
