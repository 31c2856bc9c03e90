//! Ocean map library - re-exports for testing and external use.
//!
//! This module provides public access to all the application's modules
//! for testing purposes and potential library use.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

pub mod auth;
pub mod handlers;
pub mod islands;
pub mod models;
pub mod render;
pub mod templates;
pub mod viewport;

// ============================================================================
// Configuration
// ============================================================================

/// Map-space coordinates of the default view center.
pub const DEFAULT_MAP_CENTER_X: f64 = 5000.0;
pub const DEFAULT_MAP_CENTER_Y: f64 = 5000.0;

/// Page-level zoom bounds. The viewport controller applies its own tighter
/// cap (see `viewport::MAX_ZOOM`); these exist as outer configuration limits.
pub const PAGE_MIN_ZOOM: f64 = 0.5;
pub const PAGE_MAX_ZOOM: f64 = 8.0;

/// Flat JSON file mapping player username to password hash.
pub const PLAYERS_FILE: &str = "players.json";

/// Width and height of the square map surface, in map pixels.
pub const MAP_SIZE: f64 = 10000.0;

// ============================================================================
// Rate Limiting
// ============================================================================

/// Tracks login failures for rate limiting with exponential backoff.
pub struct LoginRateLimit {
    pub failures: u32,
    pub locked_until: Option<DateTime<Utc>>,
}

impl LoginRateLimit {
    pub fn new() -> Self {
        Self {
            failures: 0,
            locked_until: None,
        }
    }

    /// Check if login attempts are currently locked out.
    pub fn is_locked(&self) -> bool {
        if let Some(until) = self.locked_until {
            Utc::now() < until
        } else {
            false
        }
    }

    /// Record a failed login attempt. After 5 failures, apply exponential backoff capped at 64s.
    pub fn record_failure(&mut self) {
        self.failures += 1;
        if self.failures >= 5 {
            let delay_secs = std::cmp::min(1i64 << (self.failures - 5), 64);
            self.locked_until = Some(Utc::now() + chrono::Duration::seconds(delay_secs));
        }
    }

    /// Reset on successful login.
    pub fn reset(&mut self) {
        self.failures = 0;
        self.locked_until = None;
    }
}

impl Default for LoginRateLimit {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Player credential file, guarded so register's check-then-insert
    /// cannot race between concurrent requests.
    pub players: Arc<Mutex<auth::CredentialStore>>,
    /// Secret key signing session cookies.
    pub session_secret: Vec<u8>,
    /// Moderator password hash, computed once at startup.
    pub moderator_hash: String,
    pub login_rate_limit: Arc<Mutex<LoginRateLimit>>,
}

impl AppState {
    pub fn new() -> Self {
        let players = auth::CredentialStore::open(PathBuf::from(PLAYERS_FILE));

        Self {
            players: Arc::new(Mutex::new(players)),
            session_secret: auth::session_secret(),
            moderator_hash: auth::hash_moderator_password_at_startup(),
            login_rate_limit: Arc::new(Mutex::new(LoginRateLimit::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export commonly used types
pub use models::{AuthError, Island, IslandDraft, Role, Session, ValidationError};

pub use auth::{
    login, logout_cookie, register, session_cookie, session_from_jar, verify_session_token,
    CredentialStore, MODERATOR_USERNAME, SESSION_COOKIE, SESSION_TTL_HOURS,
};

pub use islands::{parse_settlements, seed_islands, IslandStore};

pub use render::{build_scene, MarkerState, RouteSegment, Scene, MARKER_SIZE};

pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM};

pub use templates::{base_html, html_escape, js_escape, render_auth_page, render_map_page, STYLE};
