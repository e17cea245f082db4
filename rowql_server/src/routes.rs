use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rowql_core::storage::TableLoader;
use rowql_core::{Database, QueryError};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
pub struct QueryRequest {
    pub sql: String,
}

pub fn router<L>(db: Arc<Database<L>>) -> Router
where
    L: TableLoader + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/query", post(run_query::<L>))
        .with_state(db)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn run_query<L>(State(db): State<Arc<Database<L>>>, Json(req): Json<QueryRequest>) -> Response
where
    L: TableLoader + Send + Sync + 'static,
{
    match db.query(&req.sql).await {
        Ok(result) => {
            tracing::info!(rows = result.rows.len(), "query ok");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            let status = status_for(&err);
            tracing::warn!(%status, error = %err, "query failed");
            (status, Json(json!({ "error": err.to_string() }))).into_response()
        }
    }
}

fn status_for(err: &QueryError) -> StatusCode {
    match err {
        QueryError::Parse(_)
        | QueryError::UnsupportedOperator(_)
        | QueryError::UnsupportedJoinType(_) => StatusCode::BAD_REQUEST,
        QueryError::TableNotFound(_) => StatusCode::NOT_FOUND,
        QueryError::Io { .. } | QueryError::Csv { .. } | QueryError::Schema(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
