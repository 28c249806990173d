use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::admin::AdminState;
use crate::views::ViewId;

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemStatus {
    pub version: String,
    pub status: String,
    pub routes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStatus {
    pub pattern: String,
    pub exact: bool,
    pub view: ViewId,
}

pub async fn get_status(State(state): State<AdminState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
        routes: state.routes.len(),
    })
}

pub async fn get_routes(State(state): State<AdminState>) -> Json<Vec<RouteStatus>> {
    let routes = state
        .routes
        .bindings()
        .iter()
        .map(|b| RouteStatus {
            pattern: b.pattern().to_string(),
            exact: b.is_exact(),
            view: b.view_id(),
        })
        .collect();

    Json(routes)
}
