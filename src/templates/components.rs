//! Shared HTML components for the ocean map application.
//!
//! Contains the escaping helpers, page header, base HTML template, and the
//! login/register forms.

use crate::models::{AuthError, Session};

use super::styles::STYLE;

// ============================================================================
// Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a string for embedding inside a single-quoted JS string literal.
pub fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('/', "\\/")
}

// ============================================================================
// Page Header
// ============================================================================

fn header(session: Option<&Session>) -> String {
    let status = match session {
        Some(session) => format!(
            r#"Logged in as <strong>{}</strong> (<a href="/?logout=1">Logout</a>)"#,
            html_escape(&session.username)
        ),
        None => "Welcome to the Ocean Map".to_string(),
    };

    format!(
        r#"<header>
        <h1>D&amp;D Ocean Map</h1>
        <p>{status}</p>
    </header>"#
    )
}

// ============================================================================
// Base Template
// ============================================================================

pub fn base_html(title: &str, session: Option<&Session>, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>D&amp;D Ocean Map - {title}</title>
    <style>{STYLE}</style>
</head>
<body>
    {header}
    {content}
</body>
</html>"#,
        title = html_escape(title),
        header = header(session),
        content = content,
    )
}

// ============================================================================
// Login / Register Forms
// ============================================================================

/// The unauthenticated landing page: a login form and a registration form,
/// toggled client-side. An auth failure re-renders this page with its
/// message inline.
pub fn render_auth_page(error: Option<AuthError>) -> String {
    let error_html = match error {
        Some(err) => format!(r#"<div class="error">{}</div>"#, err.message()),
        None => String::new(),
    };

    let content = format!(
        r#"<div class="auth-wrapper" id="login-wrapper">
        <div class="form-box">
            <h2>Login</h2>
            {error_html}
            <form method="post" action="/">
                <div class="form-group">
                    <label for="login-username">Username:</label>
                    <input type="text" id="login-username" name="username" required>
                </div>
                <div class="form-group">
                    <label for="login-password">Password:</label>
                    <input type="password" id="login-password" name="password" required>
                </div>
                <input type="hidden" name="action" value="login">
                <button type="submit" class="control-btn">Login</button>
                <button type="button" onclick="showRegister()" class="control-btn switch-form-btn">
                    Register as Player
                </button>
            </form>
        </div>
    </div>

    <div class="auth-wrapper" id="register-wrapper" style="display:none">
        <div class="form-box">
            <h2>Register</h2>
            {error_html}
            <form method="post" action="/">
                <div class="form-group">
                    <label for="register-username">Username:</label>
                    <input type="text" id="register-username" name="username" required>
                </div>
                <div class="form-group">
                    <label for="register-password">Password:</label>
                    <input type="password" id="register-password" name="password" required>
                </div>
                <input type="hidden" name="action" value="register">
                <button type="submit" class="control-btn">Register</button>
                <button type="button" onclick="showLogin()" class="control-btn switch-form-btn">
                    Back to Login
                </button>
            </form>
        </div>
    </div>

    <script>
    function showLogin() {{
        document.getElementById('register-wrapper').style.display = 'none';
        document.getElementById('login-wrapper').style.display = 'flex';
    }}

    function showRegister() {{
        document.getElementById('login-wrapper').style.display = 'none';
        document.getElementById('register-wrapper').style.display = 'flex';
    }}
    </script>"#
    );

    base_html("Login / Register", None, &content)
}
