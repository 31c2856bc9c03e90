//! Data models for the ocean map application.
//!
//! This module contains the core data structures: islands, sessions, roles,
//! and the error kinds surfaced at the form boundaries.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Moderator,
}

impl Role {
    pub fn is_moderator(self) -> bool {
        matches!(self, Role::Moderator)
    }
}

/// An authenticated identity for the duration of a browser session.
/// Created at login or registration; the role is derived once at creation
/// and not re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

// ============================================================================
// Islands
// ============================================================================

/// A point-of-interest marker on the map. `x` and `y` are map-space
/// coordinates, independent of the viewport transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Island {
    pub id: u64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub settlements: Vec<String>,
    pub info: String,
    pub route: String,
    pub visible: bool,
}

/// Form input for creating or editing an island. Settlements arrive as the
/// raw comma-separated field; validation and parsing happen at save time.
#[derive(Debug, Clone, Default)]
pub struct IslandDraft {
    pub name: String,
    pub settlements: String,
    pub info: String,
    pub route: String,
    pub visible: bool,
}

// ============================================================================
// Error Kinds
// ============================================================================

/// Login and registration failures, surfaced inline on the auth forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    UsernameTaken,
    MissingField,
    TooManyAttempts,
}

impl AuthError {
    /// User-facing message shown in the form's error box.
    pub fn message(self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Invalid username or password.",
            AuthError::UsernameTaken => "That username is already registered.",
            AuthError::MissingField => "Please fill out all fields.",
            AuthError::TooManyAttempts => "Too many failed attempts. Try again shortly.",
        }
    }
}

/// Island form validation failures. Blocks submission without closing the
/// modal or mutating the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyInfo,
    EmptyRoute,
    NoSettlements,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::EmptyName => "Island name is required.",
            ValidationError::EmptyInfo => "Island info is required.",
            ValidationError::EmptyRoute => "Route name is required.",
            ValidationError::NoSettlements => "At least one settlement is required.",
        }
    }
}
