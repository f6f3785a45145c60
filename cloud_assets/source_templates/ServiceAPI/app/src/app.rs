use axum::extract::Query;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct HelloParams {
    name: Option<String>,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(home).post(home))
        .route("/hello", get(hello_world).post(hello_world))
}

async fn home() -> &'static str {
    let message = "Simple API";
    info!("{}", message);
    debug!("Waiting for another HTTP request...");
    message
}

/// `/hello?name=Alice` greets Alice; without a name it greets the world
async fn hello_world(Query(params): Query<HelloParams>) -> String {
    let name = params.name.unwrap_or_else(|| "World".to_string());
    let message = format!("Hello {}!", name);
    info!("{}", message);
    debug!("Waiting for another HTTP request...");
    message
}
