use std::collections::HashMap;
use std::path::Path;

use classrate_core::person::{Person, Role};

use crate::DbError;

/// Built-in roster used when no roster file is configured.
const DEFAULT_ROSTER: &str = include_str!("../data/roster.json");

/// The fixed set of ratable people.
///
/// Entries keep their seed order and are never mutated, so the store can be
/// shared behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct RosterStore {
    persons: Vec<Person>,
    index: HashMap<String, usize>,
}

impl RosterStore {
    /// Seed a store. Ids must be unique and the roster must not be empty.
    pub fn new(persons: Vec<Person>) -> Result<Self, DbError> {
        if persons.is_empty() {
            return Err(DbError::EmptyRoster);
        }

        let mut index = HashMap::with_capacity(persons.len());
        for (pos, person) in persons.iter().enumerate() {
            if index.insert(person.id.clone(), pos).is_some() {
                return Err(DbError::DuplicateId(person.id.clone()));
            }
        }

        Ok(Self { persons, index })
    }

    /// All roster entries in seed order.
    pub fn list(&self) -> &[Person] {
        &self.persons
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.index.get(id).map(|&pos| &self.persons[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Entries matching an optional role and an optional case-insensitive
    /// name fragment, in seed order.
    pub fn filter(&self, role: Option<Role>, search: Option<&str>) -> Vec<Person> {
        let needle = search.map(str::to_lowercase);
        self.persons
            .iter()
            .filter(|p| role.map_or(true, |r| p.role == r))
            .filter(|p| {
                needle
                    .as_deref()
                    .map_or(true, |n| p.name.to_lowercase().contains(n))
            })
            .cloned()
            .collect()
    }
}

/// Load the roster from a JSON file, or the built-in roster when `path` is
/// `None`.
pub fn load_roster(path: Option<&Path>) -> Result<RosterStore, DbError> {
    let persons: Vec<Person> = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| DbError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&raw)?
        }
        None => serde_json::from_str(DEFAULT_ROSTER)?,
    };

    let store = RosterStore::new(persons)?;
    tracing::debug!(count = store.len(), "Roster loaded");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use classrate_core::person::SpecialEffect;

    #[test]
    fn builtin_roster_is_fully_populated() {
        let store = load_roster(None).unwrap();
        assert_eq!(store.len(), 39);
        assert_eq!(store.list()[0].id, "1");
        assert_eq!(store.filter(Some(Role::Teacher), None).len(), 9);
        assert_eq!(
            store.get("21").unwrap().special_effect,
            Some(SpecialEffect::Magata)
        );
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = load_roster(None).unwrap();
        assert!(store.get("999").is_none());
        assert!(!store.contains("999"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let persons = vec![
            Person::new("1", "A", Role::Student),
            Person::new("1", "B", Role::Teacher),
        ];
        assert_matches!(RosterStore::new(persons), Err(DbError::DuplicateId(id)) if id == "1");
    }

    #[test]
    fn rejects_empty_roster() {
        assert_matches!(RosterStore::new(Vec::new()), Err(DbError::EmptyRoster));
    }

    #[test]
    fn filter_by_role_and_search() {
        let store = load_roster(None).unwrap();

        let hits = store.filter(None, Some("manon"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "4");

        let teachers = store.filter(Some(Role::Teacher), Some("SOPHIE"));
        assert_eq!(teachers.len(), 1);
        assert!(store.filter(Some(Role::Student), Some("sophie")).is_empty());
        assert_eq!(store.filter(None, None).len(), store.len());
    }

    #[test]
    fn loads_roster_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(
            &path,
            r#"[{"id":"a","name":"DUPONT Jeanne","role":"teacher"}]"#,
        )
        .unwrap();

        let store = load_roster(Some(&path)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().role, Role::Teacher);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_roster(Some(Path::new("/nonexistent/roster.json"))).unwrap_err();
        assert_matches!(err, DbError::Io { .. });
    }
}
