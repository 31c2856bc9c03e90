//! HTML templates and styling for the ocean map application.
//!
//! This module contains all CSS styles, JavaScript code, and HTML
//! generation functions for the web interface.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants
//! - `components` - Escaping helpers, base template, auth forms
//! - `map` - The authenticated map page (surface, controls, island modal)
//! - `map_js` - Client-side map logic (pan/zoom, rendering, editor, drag)

mod components;
mod map;
mod map_js;
mod styles;

pub use components::{base_html, html_escape, js_escape, render_auth_page};
pub use map::render_map_page;
pub use styles::STYLE;
