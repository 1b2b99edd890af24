// GET /health handler

use std::convert::Infallible;
use warp::http::StatusCode;

pub async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({"status": "ok"})),
        StatusCode::OK,
    ))
}
