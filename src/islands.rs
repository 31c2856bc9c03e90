//! Island storage and mutation.
//!
//! `IslandStore` owns the full island list: the whole list is deserialized
//! on load and reserialized after every mutation. Add and edit go through
//! draft validation; ids are assigned monotonically and never reused while
//! the store lives.

use crate::models::{Island, IslandDraft, ValidationError};
use crate::{DEFAULT_MAP_CENTER_X, DEFAULT_MAP_CENTER_Y};

/// Split a raw settlements field on commas, trim each entry, drop empties.
pub fn parse_settlements(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The example islands shown when no stored copy exists.
pub fn seed_islands() -> Vec<Island> {
    vec![
        Island {
            id: 1,
            name: "Dragon Isle".to_string(),
            x: 4950.0,
            y: 4950.0,
            settlements: vec!["Dragon City".to_string(), "Flame Port".to_string()],
            info: "Home to ancient dragons".to_string(),
            route: "Route A".to_string(),
            visible: true,
        },
        Island {
            id: 2,
            name: "Merchant Haven".to_string(),
            x: 5050.0,
            y: 4950.0,
            settlements: vec!["Trade Hub".to_string(), "Market Town".to_string()],
            info: "Major trading center".to_string(),
            route: "Route A".to_string(),
            visible: true,
        },
        Island {
            id: 3,
            name: "Pirate Cove".to_string(),
            x: 5000.0,
            y: 5050.0,
            settlements: vec!["Smuggler's Den".to_string(), "Hidden Harbor".to_string()],
            info: "Notorious pirate hideout".to_string(),
            route: "Route B".to_string(),
            visible: true,
        },
    ]
}

// ============================================================================
// Store
// ============================================================================

/// In-memory island list with whole-list JSON (de)serialization. The durable
/// slot (browser localStorage) holds exactly `to_json`'s output and is
/// rewritten after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct IslandStore {
    islands: Vec<Island>,
}

impl IslandStore {
    pub fn new(islands: Vec<Island>) -> Self {
        Self { islands }
    }

    pub fn seeded() -> Self {
        Self::new(seed_islands())
    }

    /// Load from a stored JSON array, falling back to the seed set when the
    /// slot is absent or does not parse.
    pub fn from_json(json: Option<&str>) -> Self {
        match json {
            Some(json) => match serde_json::from_str(json) {
                Ok(islands) => Self::new(islands),
                Err(_) => Self::seeded(),
            },
            None => Self::seeded(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.islands).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    pub fn get(&self, id: u64) -> Option<&Island> {
        self.islands.iter().find(|i| i.id == id)
    }

    /// Next id to assign: one past the current maximum, or 1 when empty.
    pub fn next_id(&self) -> u64 {
        self.islands.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }

    /// Validate a draft and append a new island at the default map center.
    /// Returns the assigned id. A failed validation mutates nothing.
    pub fn add(&mut self, draft: &IslandDraft) -> Result<u64, ValidationError> {
        let (name, settlements, info, route) = validate_draft(draft)?;
        let id = self.next_id();
        self.islands.push(Island {
            id,
            name,
            x: DEFAULT_MAP_CENTER_X,
            y: DEFAULT_MAP_CENTER_Y,
            settlements,
            info,
            route,
            visible: draft.visible,
        });
        Ok(id)
    }

    /// Overwrite every field except `id` (and position) of the target
    /// island. Editing a vanished id is a silent no-op.
    pub fn update(&mut self, id: u64, draft: &IslandDraft) -> Result<(), ValidationError> {
        let (name, settlements, info, route) = validate_draft(draft)?;
        if let Some(island) = self.islands.iter_mut().find(|i| i.id == id) {
            island.name = name;
            island.settlements = settlements;
            island.info = info;
            island.route = route;
            island.visible = draft.visible;
        }
        Ok(())
    }

    /// Remove the island with the given id, if present. Returns whether a
    /// record was removed; deleting a vanished id is a silent no-op.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.islands.len();
        self.islands.retain(|i| i.id != id);
        self.islands.len() != before
    }

    /// Move an island to a new map-space position. Called continuously
    /// during a drag gesture; a vanished id is a silent no-op.
    pub fn set_position(&mut self, id: u64, x: f64, y: f64) {
        if let Some(island) = self.islands.iter_mut().find(|i| i.id == id) {
            island.x = x;
            island.y = y;
        }
    }
}

/// Check all required fields and parse settlements. Trims the text fields
/// the same way the form does.
fn validate_draft(
    draft: &IslandDraft,
) -> Result<(String, Vec<String>, String, String), ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let settlements = parse_settlements(&draft.settlements);
    if settlements.is_empty() {
        return Err(ValidationError::NoSettlements);
    }
    let info = draft.info.trim();
    if info.is_empty() {
        return Err(ValidationError::EmptyInfo);
    }
    let route = draft.route.trim();
    if route.is_empty() {
        return Err(ValidationError::EmptyRoute);
    }
    Ok((
        name.to_string(),
        settlements,
        info.to_string(),
        route.to_string(),
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, settlements: &str, info: &str, route: &str) -> IslandDraft {
        IslandDraft {
            name: name.to_string(),
            settlements: settlements.to_string(),
            info: info.to_string(),
            route: route.to_string(),
            visible: true,
        }
    }

    #[test]
    fn test_parse_settlements_trims_and_drops_empties() {
        assert_eq!(parse_settlements("A, B ,  , C"), vec!["A", "B", "C"]);
        assert_eq!(parse_settlements(""), Vec::<String>::new());
        assert_eq!(parse_settlements(" , ,"), Vec::<String>::new());
        assert_eq!(parse_settlements("Only Port"), vec!["Only Port"]);
    }

    #[test]
    fn test_add_assigns_next_id_and_spawns_at_center() {
        let mut store = IslandStore::seeded();
        let id = store
            .add(&draft("Mist Atoll", "Foghaven", "Shrouded", "Route B"))
            .unwrap();
        assert_eq!(id, 4);
        let island = store.get(4).unwrap();
        assert_eq!(island.x, DEFAULT_MAP_CENTER_X);
        assert_eq!(island.y, DEFAULT_MAP_CENTER_Y);
        assert_eq!(island.settlements, vec!["Foghaven"]);
    }

    #[test]
    fn test_add_to_empty_store_starts_at_one() {
        let mut store = IslandStore::new(Vec::new());
        let id = store.add(&draft("First", "Home", "info", "R")).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn test_add_rejects_blank_fields_without_mutating() {
        let mut store = IslandStore::seeded();
        let before = store.clone();

        assert_eq!(
            store.add(&draft("  ", "A", "i", "r")).unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            store.add(&draft("N", " , ", "i", "r")).unwrap_err(),
            ValidationError::NoSettlements
        );
        assert_eq!(
            store.add(&draft("N", "A", "", "r")).unwrap_err(),
            ValidationError::EmptyInfo
        );
        assert_eq!(
            store.add(&draft("N", "A", "i", " ")).unwrap_err(),
            ValidationError::EmptyRoute
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_replaces_all_fields_except_id_and_position() {
        let mut store = IslandStore::seeded();
        store
            .update(3, &{
                let mut d = draft("Corsair Cove", "New Den, Old Den", "Renamed", "Route C");
                d.visible = false;
                d
            })
            .unwrap();

        let island = store.get(3).unwrap();
        assert_eq!(island.id, 3);
        assert_eq!(island.name, "Corsair Cove");
        assert_eq!(island.settlements, vec!["New Den", "Old Den"]);
        assert_eq!(island.route, "Route C");
        assert!(!island.visible);
        // Position survives an edit; only the form fields are replaced.
        assert_eq!((island.x, island.y), (5000.0, 5050.0));
    }

    #[test]
    fn test_update_vanished_id_is_silent_noop() {
        let mut store = IslandStore::seeded();
        let before = store.clone();
        store.update(99, &draft("Ghost", "Nowhere", "gone", "R")).unwrap();
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_deletes_exactly_one_and_leaves_others() {
        let mut store = IslandStore::seeded();
        assert!(store.remove(2));
        assert_eq!(store.islands().len(), 2);
        assert!(store.get(2).is_none());

        let one = store.get(1).unwrap();
        assert_eq!((one.x, one.y, one.route.as_str()), (4950.0, 4950.0, "Route A"));
        let three = store.get(3).unwrap();
        assert_eq!((three.x, three.y, three.route.as_str()), (5000.0, 5050.0, "Route B"));

        // Removing again is a no-op.
        assert!(!store.remove(2));
        assert_eq!(store.islands().len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_deleting_the_max() {
        let mut store = IslandStore::seeded();
        store.remove(3);
        // max is now 2, so the next id revisits 3; deleting below the max
        // never perturbs assignment.
        store.remove(1);
        let id = store.add(&draft("New", "S", "i", "Route A")).unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn test_set_position_moves_only_the_target() {
        let mut store = IslandStore::seeded();
        store.set_position(1, 4000.0, 4100.0);
        assert_eq!((store.get(1).unwrap().x, store.get(1).unwrap().y), (4000.0, 4100.0));
        assert_eq!((store.get(2).unwrap().x, store.get(2).unwrap().y), (5050.0, 4950.0));
        // Absent id: no-op.
        store.set_position(42, 0.0, 0.0);
    }

    #[test]
    fn test_from_json_falls_back_to_seed() {
        assert_eq!(IslandStore::from_json(None), IslandStore::seeded());
        assert_eq!(
            IslandStore::from_json(Some("not json")),
            IslandStore::seeded()
        );

        let stored = IslandStore::seeded().to_json();
        assert_eq!(IslandStore::from_json(Some(&stored)), IslandStore::seeded());
    }
}
