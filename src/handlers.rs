//! HTTP route handlers for the web application.
//!
//! The whole surface is the root path: GET renders the auth forms or the
//! map depending on the session, POST handles login/register form actions,
//! and `?logout=1` clears the session. All auth failures are recovered here
//! and re-rendered as inline form messages.

use crate::auth::{
    create_session_token, login, logout_cookie, register, session_cookie, session_from_jar,
};
use crate::islands::IslandStore;
use crate::models::{AuthError, Session};
use crate::render::build_scene;
use crate::templates::{render_auth_page, render_map_page};
use crate::viewport::Viewport;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

// ============================================================================
// Index Handler
// ============================================================================

#[derive(Deserialize)]
pub struct IndexQuery {
    pub logout: Option<String>,
}

pub async fn index(
    Query(query): Query<IndexQuery>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Response {
    // Logout is unconditional and idempotent: clear the cookie whether or
    // not a live session exists, then land on the login page.
    if query.logout.is_some() {
        let mut headers = HeaderMap::new();
        headers.insert(SET_COOKIE, logout_cookie().parse().unwrap());
        return (headers, Redirect::to("/")).into_response();
    }

    match session_from_jar(&jar, &state.session_secret) {
        Some(session) => map_page(&session),
        None => Html(render_auth_page(None)).into_response(),
    }
}

/// Render the map for an authenticated viewer: the seed store filtered for
/// their role, at the default centered viewport. The client script takes
/// over with its own stored copy from there.
fn map_page(session: &Session) -> Response {
    let store = IslandStore::seeded();
    let scene = build_scene(store.islands(), session.role);
    let viewport = Viewport::new();
    Html(render_map_page(session, &store, &scene, &viewport)).into_response()
}

// ============================================================================
// Authentication Handlers
// ============================================================================

#[derive(Deserialize)]
pub struct AuthForm {
    pub action: String,
    pub username: String,
    pub password: String,
}

pub async fn auth_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<AuthForm>,
) -> Response {
    match form.action.as_str() {
        "login" => handle_login(&state, &form),
        "register" => handle_register(&state, &form),
        _ => Redirect::to("/").into_response(),
    }
}

fn handle_login(state: &AppState, form: &AuthForm) -> Response {
    {
        let limiter = state.login_rate_limit.lock().unwrap();
        if limiter.is_locked() {
            return Html(render_auth_page(Some(AuthError::TooManyAttempts))).into_response();
        }
    }

    let result = {
        let players = state.players.lock().unwrap();
        login(&players, &state.moderator_hash, &form.username, &form.password)
    };

    match result {
        Ok(session) => {
            state.login_rate_limit.lock().unwrap().reset();
            establish_session(state, &session)
        }
        Err(err) => {
            state.login_rate_limit.lock().unwrap().record_failure();
            Html(render_auth_page(Some(err))).into_response()
        }
    }
}

fn handle_register(state: &AppState, form: &AuthForm) -> Response {
    let result = {
        // Holding the lock across check-then-insert keeps two simultaneous
        // registrations of one username from racing.
        let mut players = state.players.lock().unwrap();
        register(&mut players, &form.username, &form.password)
    };

    match result {
        Ok(session) => establish_session(state, &session),
        Err(err) => Html(render_auth_page(Some(err))).into_response(),
    }
}

/// Set the session cookie and redirect to the map.
fn establish_session(state: &AppState, session: &Session) -> Response {
    let token = match create_session_token(session, &state.session_secret) {
        Some(t) => t,
        None => return Html(render_auth_page(Some(AuthError::InvalidCredentials))).into_response(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, session_cookie(&token).parse().unwrap());

    (headers, Redirect::to("/")).into_response()
}
