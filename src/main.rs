//! Ocean map - an authenticated, pannable campaign map.
//!
//! This is the main entry point for the map web server.
//! The application is organized into the following modules:
//!
//! - `models`: Islands, sessions, roles, and error kinds
//! - `auth`: Credential store, password hashing, and cookie sessions
//! - `islands`: The annotation store (island list and its mutations)
//! - `viewport`: Pan/zoom view state and the map transform
//! - `render`: Marker and route-line scene derivation
//! - `templates`: HTML/CSS/JS templates and rendering
//! - `handlers`: HTTP route handlers

use axum::{routing::get, Router};
use std::sync::Arc;

use oceanmap::{handlers, AppState, MODERATOR_USERNAME, PLAYERS_FILE};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let state = Arc::new(AppState::new());

    let app = Router::new()
        .route("/", get(handlers::index).post(handlers::auth_submit))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("Failed to bind to port 3000");

    println!("Ocean map server running at http://127.0.0.1:3000");
    println!("Player credentials file: {}", PLAYERS_FILE);
    println!(
        "Moderator account: {} (set OCEANMAP_DM_PASSWORD to change the password)",
        MODERATOR_USERNAME
    );

    axum::serve(listener, app).await.expect("Server error");
}
