//! The authenticated map page.
//!
//! The server renders the initial scene (markers and route lines derived
//! from the seed store for the viewer's role) so the page is meaningful
//! before any script runs; the client script then re-renders from its own
//! stored copy and owns all interaction.

use crate::islands::IslandStore;
use crate::models::Session;
use crate::render::{MarkerState, Scene};
use crate::viewport::Viewport;

use super::components::{base_html, html_escape};
use super::map_js::map_js;

pub fn render_map_page(
    session: &Session,
    store: &IslandStore,
    scene: &Scene,
    viewport: &Viewport,
) -> String {
    let is_moderator = session.role.is_moderator();

    let moderator_controls = if is_moderator {
        r#"<button class="control-btn" onclick="addIsland()">Add Island</button>
                <button class="control-btn" onclick="toggleMoveMode()">Toggle Move</button>"#
    } else {
        ""
    };

    let content = format!(
        r#"<div id="storage-warning">Could not save map changes - edits will be lost when you leave this page.</div>
    <div id="map-container">
        <div id="map" style="transform: {transform}">
            <svg id="route-lines">{lines}</svg>
            {markers}
        </div>
        <div id="controls">
            {moderator_controls}
            <button class="control-btn" onclick="resetZoom()">Reset View</button>
            <button class="control-btn" onclick="zoomIn()">Zoom In</button>
            <button class="control-btn" onclick="zoomOut()">Zoom Out</button>
        </div>
    </div>

    <div id="island-modal" class="modal">
        <div class="modal-content">
            <h2 id="modal-title">Add Island</h2>
            <div id="modal-error"></div>
            <div class="form-group">
                <label for="island-name">Name:</label>
                <input type="text" id="island-name">
            </div>
            <div class="form-group">
                <label for="island-settlements">Settlements:</label>
                <input type="text" id="island-settlements" placeholder="Comma separated">
            </div>
            <div class="form-group">
                <label for="island-info">Info:</label>
                <textarea id="island-info"></textarea>
            </div>
            <div class="form-group">
                <label for="island-route">Route:</label>
                <input type="text" id="island-route">
            </div>
            <div class="form-group">
                <label>
                    <input type="checkbox" id="island-visible" checked>
                    Visible to Players
                </label>
            </div>
            <button class="control-btn" onclick="saveIsland()">Save</button>
            <button class="control-btn" onclick="closeModal()">Cancel</button>
            <button class="control-btn" onclick="deleteIsland()"
                    style="background: #e53935;" id="delete-btn">Delete</button>
        </div>
    </div>

    <script>
    {script}
    </script>"#,
        transform = viewport.transform_css(),
        lines = initial_route_lines(scene),
        markers = initial_markers(scene),
        moderator_controls = moderator_controls,
        script = map_js(&store.to_json(), &session.username, is_moderator),
    );

    base_html("Welcome", Some(session), &content)
}

fn initial_route_lines(scene: &Scene) -> String {
    scene
        .segments
        .iter()
        .map(|seg| {
            format!(
                r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#ffeb3b" stroke-width="3" stroke-dasharray="10,5"/>"##,
                seg.x1, seg.y1, seg.x2, seg.y2
            )
        })
        .collect()
}

fn initial_markers(scene: &Scene) -> String {
    scene
        .markers
        .iter()
        .map(|marker| {
            let class = match marker.state {
                MarkerState::Normal => "island",
                MarkerState::Dimmed => "island hidden",
            };
            format!(
                r#"<div class="{class}" data-id="{id}" style="left: {x}px; top: {y}px">{name}<div class="info-box">
                <strong>{name}</strong>
                <div><em>Settlements:</em> {settlements}</div>
                <div><em>Info:</em> {info}</div>
                <div><em>Route:</em> {route}</div>
            </div></div>"#,
                class = class,
                id = marker.id,
                x = marker.x,
                y = marker.y,
                name = html_escape(&marker.name),
                settlements = html_escape(&marker.settlements),
                info = html_escape(&marker.info),
                route = html_escape(&marker.route),
            )
        })
        .collect()
}
