//! Roster entry types.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Whether a roster entry is a pupil or a member of staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

/// Cosmetic tag that switches on a dedicated card effect in the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialEffect {
    Theo,
    Magata,
    Fanny,
    Gregoire,
}

/// A ratable person. Seeded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub special_effect: Option<SpecialEffect>,
}

impl Person {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            special_effect: None,
        }
    }

    pub fn with_effect(mut self, effect: SpecialEffect) -> Self {
        self.special_effect = Some(effect);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_and_null_effect() {
        let person = Person::new("4", "BOUTEILLE Manon", Role::Student);
        let json = serde_json::to_value(&person).unwrap();

        assert_eq!(json["id"], "4");
        assert_eq!(json["role"], "student");
        assert!(json["specialEffect"].is_null());
    }

    #[test]
    fn deserializes_effect_tag() {
        let person: Person = serde_json::from_str(
            r#"{"id":"39","name":"FANNYYYY","role":"teacher","specialEffect":"fanny"}"#,
        )
        .unwrap();

        assert_eq!(person.role, Role::Teacher);
        assert_eq!(person.special_effect, Some(SpecialEffect::Fanny));
    }

    #[test]
    fn missing_effect_defaults_to_none() {
        let person: Person =
            serde_json::from_str(r#"{"id":"1","name":"X","role":"student"}"#).unwrap();
        assert_eq!(person.special_effect, None);
    }
}
