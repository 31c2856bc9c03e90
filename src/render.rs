//! Scene derivation for the map: island markers and route connector lines.
//!
//! A `Scene` is a pure function of the island list and the viewer's role.
//! The viewport transform is applied to the whole map surface afterwards,
//! so nothing here depends on pan or zoom. Rebuilding with unchanged inputs
//! yields an identical scene.

use serde::Serialize;

use crate::models::{Island, Role};

/// Island markers are fixed-size circles; connector lines meet at their
/// centers, half a marker in from the stored top-left position.
pub const MARKER_SIZE: f64 = 140.0;

const HALF_MARKER: f64 = MARKER_SIZE / 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerState {
    Normal,
    /// Hidden island shown to a moderator.
    Dimmed,
}

/// One rendered island marker, with the hover-panel text precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: u64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub state: MarkerState,
    pub settlements: String,
    pub info: String,
    pub route: String,
}

/// One connector line between two consecutive islands on a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub route: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub markers: Vec<Marker>,
    pub segments: Vec<RouteSegment>,
}

/// Derive the visual scene for a viewer.
///
/// Route lines connect every island sharing a route name, hidden or not,
/// ordered by ascending x. Markers are filtered by role: players see only
/// islands flagged visible, moderators see everything with hidden islands
/// dimmed.
pub fn build_scene(islands: &[Island], role: Role) -> Scene {
    Scene {
        markers: build_markers(islands, role),
        segments: build_segments(islands),
    }
}

fn build_markers(islands: &[Island], role: Role) -> Vec<Marker> {
    islands
        .iter()
        .filter(|island| role.is_moderator() || island.visible)
        .map(|island| Marker {
            id: island.id,
            name: island.name.clone(),
            x: island.x,
            y: island.y,
            state: if island.visible {
                MarkerState::Normal
            } else {
                MarkerState::Dimmed
            },
            settlements: island.settlements.join(", "),
            info: island.info.clone(),
            route: island.route.clone(),
        })
        .collect()
}

fn build_segments(islands: &[Island]) -> Vec<RouteSegment> {
    // Stable grouping keyed by route name, in order of first appearance.
    let mut groups: Vec<(&str, Vec<&Island>)> = Vec::new();
    for island in islands {
        match groups.iter_mut().find(|(route, _)| *route == island.route) {
            Some((_, members)) => members.push(island),
            None => groups.push((&island.route, vec![island])),
        }
    }

    let mut segments = Vec::new();
    for (route, mut members) in groups {
        if members.len() < 2 {
            continue;
        }
        members.sort_by(|a, b| a.x.total_cmp(&b.x));
        for pair in members.windows(2) {
            segments.push(RouteSegment {
                route: route.to_string(),
                x1: pair[0].x + HALF_MARKER,
                y1: pair[0].y + HALF_MARKER,
                x2: pair[1].x + HALF_MARKER,
                y2: pair[1].y + HALF_MARKER,
            });
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::islands::{seed_islands, IslandStore};
    use crate::models::IslandDraft;

    fn island(id: u64, route: &str, x: f64, visible: bool) -> Island {
        Island {
            id,
            name: format!("Isle {}", id),
            x,
            y: 100.0,
            settlements: vec!["Port".to_string()],
            info: "info".to_string(),
            route: route.to_string(),
            visible,
        }
    }

    #[test]
    fn test_seed_draws_one_segment_left_to_right() {
        let scene = build_scene(&seed_islands(), Role::Player);
        assert_eq!(scene.segments.len(), 1);
        let seg = &scene.segments[0];
        assert_eq!(seg.route, "Route A");
        // From id 1 (x 4950, the lower x) to id 2 (x 5050), at marker centers.
        assert_eq!((seg.x1, seg.y1), (4950.0 + 70.0, 4950.0 + 70.0));
        assert_eq!((seg.x2, seg.y2), (5050.0 + 70.0, 4950.0 + 70.0));
    }

    #[test]
    fn test_segments_sorted_by_x_regardless_of_input_order() {
        let islands = vec![
            island(1, "A", 900.0, true),
            island(2, "A", 100.0, true),
            island(3, "A", 500.0, true),
        ];
        let scene = build_scene(&islands, Role::Player);
        assert_eq!(scene.segments.len(), 2);
        assert_eq!(scene.segments[0].x1, 100.0 + 70.0);
        assert_eq!(scene.segments[0].x2, 500.0 + 70.0);
        assert_eq!(scene.segments[1].x1, 500.0 + 70.0);
        assert_eq!(scene.segments[1].x2, 900.0 + 70.0);
    }

    #[test]
    fn test_single_island_route_has_no_segment() {
        let scene = build_scene(&seed_islands(), Role::Moderator);
        assert!(scene.segments.iter().all(|s| s.route == "Route A"));
    }

    #[test]
    fn test_player_never_sees_invisible_islands() {
        let islands = vec![island(1, "A", 100.0, true), island(2, "A", 200.0, false)];
        let scene = build_scene(&islands, Role::Player);
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.markers[0].id, 1);
        assert_eq!(scene.markers[0].state, MarkerState::Normal);
    }

    #[test]
    fn test_moderator_sees_hidden_islands_dimmed() {
        let islands = vec![island(1, "A", 100.0, true), island(2, "A", 200.0, false)];
        let scene = build_scene(&islands, Role::Moderator);
        assert_eq!(scene.markers.len(), 2);
        assert_eq!(scene.markers[0].state, MarkerState::Normal);
        assert_eq!(scene.markers[1].state, MarkerState::Dimmed);
    }

    #[test]
    fn test_hover_panel_joins_settlements() {
        let scene = build_scene(&seed_islands(), Role::Player);
        assert_eq!(scene.markers[0].settlements, "Dragon City, Flame Port");
    }

    #[test]
    fn test_rebuild_with_unchanged_inputs_is_identical() {
        let islands = seed_islands();
        assert_eq!(
            build_scene(&islands, Role::Moderator),
            build_scene(&islands, Role::Moderator)
        );
    }

    #[test]
    fn test_deleting_an_island_drops_its_segments() {
        let mut store = IslandStore::seeded();
        // A third Route A island produces two segments.
        let d = IslandDraft {
            name: "East Spur".to_string(),
            settlements: "Spur Town".to_string(),
            info: "far east".to_string(),
            route: "Route A".to_string(),
            visible: true,
        };
        let id = store.add(&d).unwrap();
        store.set_position(id, 5200.0, 4950.0);
        assert_eq!(build_scene(store.islands(), Role::Player).segments.len(), 2);

        store.remove(2);
        let scene = build_scene(store.islands(), Role::Player);
        assert_eq!(scene.segments.len(), 1);
        assert_eq!((scene.segments[0].x1, scene.segments[0].x2), (5020.0, 5270.0));
    }
}
