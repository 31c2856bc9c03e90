//! Client-side map logic.
//!
//! The script mirrors the server-side core: the same zoom clamp and pivot
//! arithmetic as `viewport.rs`, the same grouping/sorting/visibility rules
//! as `render.rs`, and the same draft validation as `islands.rs`. Islands
//! persist in a single localStorage slot, rewritten wholesale after every
//! mutation; a write failure shows a non-fatal warning banner and the
//! in-memory list stays authoritative for the session.

use crate::viewport::{BUTTON_ZOOM_STEP, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};
use crate::{DEFAULT_MAP_CENTER_X, DEFAULT_MAP_CENTER_Y};

use super::components::js_escape;

/// Generate the map page script. `seed_json` is the serialized island list
/// used when localStorage has no (or a corrupt) copy.
pub fn map_js(seed_json: &str, username: &str, is_moderator: bool) -> String {
    format!(
        r#"
// Island state: the stored copy if one parses, otherwise the server seed.
const SEED_ISLANDS = {seed};
let islands = (function() {{
    try {{
        const stored = localStorage.getItem('islands');
        if (stored) return JSON.parse(stored);
    }} catch (e) {{
        // Corrupt slot: fall back to the seed set.
    }}
    return SEED_ISLANDS;
}})();

// Identity, fixed for the lifetime of the page.
const currentUser = '{username}';
const isModerator = {is_moderator};

// Zoom bounds and steps, shared with the server-side viewport controller.
const MIN_ZOOM = {min_zoom};
const MAX_ZOOM = {max_zoom};
const WHEEL_ZOOM_STEP = {wheel_step};
const BUTTON_ZOOM_STEP = {button_step};
const DEFAULT_OFFSET_X = {default_offset_x};
const DEFAULT_OFFSET_Y = {default_offset_y};

// Viewport state (transient, never persisted).
let currentZoom = 1;
let currentX = DEFAULT_OFFSET_X;
let currentY = DEFAULT_OFFSET_Y;

// Interaction state.
let isMoveModeActive = false;
let selectedIsland = null;
let editingIslandId = null;
let isDragging = false;
let lastMouseX = 0;
let lastMouseY = 0;
let dragLastX = 0;
let dragLastY = 0;

const map = document.getElementById('map');

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

function updateMapTransform() {{
    map.style.transform = `translate(${{currentX}}px, ${{currentY}}px) scale(${{currentZoom}})`;
}}

// Multiply zoom by factor, clamped, keeping the map point under the pivot
// stationary. When the clamp leaves zoom unchanged the offset is untouched,
// so repeated calls at a boundary cannot drift the view.
function zoomBy(factor, pivotX, pivotY) {{
    const prevZoom = currentZoom;
    currentZoom = Math.max(MIN_ZOOM, Math.min(MAX_ZOOM, currentZoom * factor));
    if (currentZoom !== prevZoom) {{
        currentX = pivotX - (pivotX - currentX) * (currentZoom / prevZoom);
        currentY = pivotY - (pivotY - currentY) * (currentZoom / prevZoom);
    }}
    updateMapTransform();
}}

function zoomIn() {{
    zoomBy(BUTTON_ZOOM_STEP, window.innerWidth / 2, window.innerHeight / 2);
}}

function zoomOut() {{
    zoomBy(1 / BUTTON_ZOOM_STEP, window.innerWidth / 2, window.innerHeight / 2);
}}

function resetZoom() {{
    currentZoom = 1;
    currentX = DEFAULT_OFFSET_X;
    currentY = DEFAULT_OFFSET_Y;
    updateMapTransform();
}}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

// Rewrite the whole slot. On failure the in-memory list stays authoritative
// and a warning banner appears; the mutation is never silently dropped.
function persistIslands() {{
    try {{
        localStorage.setItem('islands', JSON.stringify(islands));
        document.getElementById('storage-warning').style.display = 'none';
    }} catch (e) {{
        document.getElementById('storage-warning').style.display = 'block';
    }}
}}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

function renderIslands() {{
    const routeLines = document.getElementById('route-lines');

    // Clear existing content while preserving the route-lines layer.
    map.innerHTML = '';
    map.appendChild(routeLines);
    routeLines.innerHTML = '';

    // Stable grouping by route name, then sort each group by x ascending.
    const routes = {{}};
    islands.forEach(island => {{
        if (!routes[island.route]) routes[island.route] = [];
        routes[island.route].push(island);
    }});

    Object.values(routes).forEach(routeIslands => {{
        if (routeIslands.length > 1) {{
            routeIslands.sort((a, b) => a.x - b.x);
            for (let i = 0; i < routeIslands.length - 1; i++) {{
                const line = document.createElementNS('http://www.w3.org/2000/svg', 'line');
                line.setAttribute('x1', routeIslands[i].x + 70);
                line.setAttribute('y1', routeIslands[i].y + 70);
                line.setAttribute('x2', routeIslands[i + 1].x + 70);
                line.setAttribute('y2', routeIslands[i + 1].y + 70);
                line.setAttribute('stroke', '#ffeb3b');
                line.setAttribute('stroke-width', '3');
                line.setAttribute('stroke-dasharray', '10,5');
                routeLines.appendChild(line);
            }}
        }}
    }});

    // Markers: players see only visible islands, moderators see everything
    // with hidden islands dimmed.
    islands.forEach(island => {{
        if (isModerator || island.visible) {{
            const el = document.createElement('div');
            el.className = `island ${{!island.visible ? 'hidden' : ''}}`;
            el.dataset.id = island.id;
            el.style.left = island.x + 'px';
            el.style.top = island.y + 'px';
            el.textContent = island.name;

            const infoBox = document.createElement('div');
            infoBox.className = 'info-box';
            const name = document.createElement('strong');
            name.textContent = island.name;
            infoBox.appendChild(name);
            [['Settlements', island.settlements.join(', ')],
             ['Info', island.info],
             ['Route', island.route]].forEach(([label, value]) => {{
                const row = document.createElement('div');
                const em = document.createElement('em');
                em.textContent = label + ':';
                row.appendChild(em);
                row.appendChild(document.createTextNode(' ' + value));
                infoBox.appendChild(row);
            }});
            el.appendChild(infoBox);

            if (isModerator) {{
                el.addEventListener('dblclick', () => openEditModal(island.id));
                if (isMoveModeActive) {{
                    el.addEventListener('mousedown', startDragging);
                }}
                el.style.cursor = isMoveModeActive ? 'move' : 'pointer';
            }}

            map.appendChild(el);
        }}
    }});
}}

// ---------------------------------------------------------------------------
// Drag-to-reposition (move mode)
// ---------------------------------------------------------------------------

function startDragging(e) {{
    if (!isMoveModeActive) return;
    e.stopPropagation();
    selectedIsland = e.currentTarget;
    dragLastX = e.clientX;
    dragLastY = e.clientY;
    document.addEventListener('mousemove', drag);
    document.addEventListener('mouseup', stopDragging);
}}

function drag(e) {{
    if (!selectedIsland) return;
    const id = parseInt(selectedIsland.dataset.id);
    const island = islands.find(i => i.id === id);
    if (!island) return;

    // Screen deltas divided by zoom so drag speed matches the pointer at
    // every zoom level. Position updates continuously, not just on release.
    island.x += (e.clientX - dragLastX) / currentZoom;
    island.y += (e.clientY - dragLastY) / currentZoom;
    dragLastX = e.clientX;
    dragLastY = e.clientY;

    persistIslands();
    renderIslands();
    selectedIsland = map.querySelector(`.island[data-id="${{id}}"]`);
}}

function stopDragging() {{
    selectedIsland = null;
    document.removeEventListener('mousemove', drag);
    document.removeEventListener('mouseup', stopDragging);
}}

// ---------------------------------------------------------------------------
// Island modal (add / edit / delete)
// ---------------------------------------------------------------------------

function showModalError(message) {{
    const box = document.getElementById('modal-error');
    box.textContent = message;
    box.style.display = 'block';
}}

function clearModalError() {{
    document.getElementById('modal-error').style.display = 'none';
}}

function addIsland() {{
    editingIslandId = null;
    clearModalError();
    document.getElementById('modal-title').textContent = 'Add Island';
    document.getElementById('island-name').value = '';
    document.getElementById('island-settlements').value = '';
    document.getElementById('island-info').value = '';
    document.getElementById('island-route').value = '';
    document.getElementById('island-visible').checked = true;
    document.getElementById('delete-btn').style.display = 'none';
    document.getElementById('island-modal').style.display = 'flex';
}}

function openEditModal(id) {{
    const island = islands.find(i => i.id === id);
    if (!island) return;

    editingIslandId = id;
    clearModalError();
    document.getElementById('modal-title').textContent = 'Edit Island';
    document.getElementById('island-name').value = island.name;
    document.getElementById('island-settlements').value = island.settlements.join(', ');
    document.getElementById('island-info').value = island.info;
    document.getElementById('island-route').value = island.route;
    document.getElementById('island-visible').checked = island.visible;
    document.getElementById('delete-btn').style.display = 'inline-block';
    document.getElementById('island-modal').style.display = 'flex';
}}

// Cancel discards in-progress edits without touching the island list.
function closeModal() {{
    document.getElementById('island-modal').style.display = 'none';
}}

function saveIsland() {{
    const name = document.getElementById('island-name').value.trim();
    const settlements = document.getElementById('island-settlements').value
        .split(',').map(s => s.trim()).filter(s => s);
    const info = document.getElementById('island-info').value.trim();
    const route = document.getElementById('island-route').value.trim();
    const visible = document.getElementById('island-visible').checked;

    // Validation failure blocks the save and keeps the modal open.
    if (!name || !settlements.length || !info || !route) {{
        showModalError('Please fill out all fields.');
        return;
    }}

    if (editingIslandId === null) {{
        islands.push({{
            id: Math.max(0, ...islands.map(i => i.id)) + 1,
            name,
            x: {center_x},
            y: {center_y},
            settlements,
            info,
            route,
            visible
        }});
    }} else {{
        const island = islands.find(i => i.id === editingIslandId);
        if (island) {{
            Object.assign(island, {{ name, settlements, info, route, visible }});
        }}
    }}

    persistIslands();
    renderIslands();
    closeModal();
}}

function deleteIsland() {{
    if (editingIslandId === null) return;

    if (confirm('Are you sure you want to delete this island?')) {{
        islands = islands.filter(i => i.id !== editingIslandId);
        persistIslands();
        renderIslands();
        closeModal();
    }}
}}

function toggleMoveMode() {{
    isMoveModeActive = !isMoveModeActive;
    renderIslands();
}}

// ---------------------------------------------------------------------------
// Pan and wheel zoom
// ---------------------------------------------------------------------------

document.getElementById('map-container').addEventListener('mousedown', e => {{
    if (e.target === map || e.target === map.parentElement) {{
        isDragging = true;
        lastMouseX = e.clientX;
        lastMouseY = e.clientY;
        map.style.cursor = 'grabbing';
    }}
}});

document.addEventListener('mousemove', e => {{
    if (isDragging) {{
        currentX += e.clientX - lastMouseX;
        currentY += e.clientY - lastMouseY;
        lastMouseX = e.clientX;
        lastMouseY = e.clientY;
        updateMapTransform();
    }}
}});

document.addEventListener('mouseup', () => {{
    isDragging = false;
    map.style.cursor = 'grab';
}});

document.getElementById('map-container').addEventListener('wheel', e => {{
    e.preventDefault();
    const factor = e.deltaY < 0 ? WHEEL_ZOOM_STEP : 1 / WHEEL_ZOOM_STEP;
    const rect = map.parentElement.getBoundingClientRect();
    zoomBy(factor, e.clientX - rect.left, e.clientY - rect.top);
}});

// Initialize
updateMapTransform();
renderIslands();
"#,
        seed = seed_json.replace("</", "<\\/"),
        username = js_escape(username),
        is_moderator = is_moderator,
        min_zoom = MIN_ZOOM,
        max_zoom = MAX_ZOOM,
        wheel_step = WHEEL_ZOOM_STEP,
        button_step = BUTTON_ZOOM_STEP,
        default_offset_x = -DEFAULT_MAP_CENTER_X,
        default_offset_y = -DEFAULT_MAP_CENTER_Y,
        center_x = DEFAULT_MAP_CENTER_X,
        center_y = DEFAULT_MAP_CENTER_Y,
    )
}
