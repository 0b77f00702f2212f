//! Rating records and the validation step that turns a raw submission into
//! a [`NewRating`].
//!
//! A rating scores one person on four criteria (integers in `[1, 10]`) and
//! may carry a short comment. The mean of the four scores is fixed when the
//! rating is created and never recomputed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::{CoreError, FieldError};
use crate::types::EntityId;

/* --------------------------------------------------------------------------
Validation limits
-------------------------------------------------------------------------- */

/// Lowest accepted criterion score.
pub const MIN_SCORE: u8 = 1;

/// Highest accepted criterion score.
pub const MAX_SCORE: u8 = 10;

/// Maximum comment length, in characters.
pub const MAX_COMMENT_LENGTH: usize = 200;

/* --------------------------------------------------------------------------
Records
-------------------------------------------------------------------------- */

/// The four criterion scores of a rating, already range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub beauty: u8,
    pub funny: u8,
    pub personality: u8,
    pub intelligence: u8,
}

impl Scores {
    /// Unweighted arithmetic mean of the four criteria.
    pub fn average(&self) -> f64 {
        let sum = u32::from(self.beauty)
            + u32::from(self.funny)
            + u32::from(self.personality)
            + u32::from(self.intelligence);
        f64::from(sum) / 4.0
    }
}

/// A validated submission, ready to be appended to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRating {
    pub person_id: EntityId,
    pub scores: Scores,
    pub comment: Option<String>,
}

/// A stored rating. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: EntityId,
    pub person_id: EntityId,
    pub beauty: u8,
    pub funny: u8,
    pub personality: u8,
    pub intelligence: u8,
    pub average: f64,
    pub comment: Option<String>,
}

impl Rating {
    /// Build the stored record for `new` under the given identifier.
    pub fn from_new(id: EntityId, new: NewRating) -> Self {
        let average = new.scores.average();
        Self {
            id,
            person_id: new.person_id,
            beauty: new.scores.beauty,
            funny: new.scores.funny,
            personality: new.scores.personality,
            intelligence: new.scores.intelligence,
            average,
            comment: new.comment,
        }
    }

    /// Whether the rating carries a non-empty comment.
    pub fn has_comment(&self) -> bool {
        self.comment.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/* --------------------------------------------------------------------------
Submission DTO
-------------------------------------------------------------------------- */

/// Raw rating submission as posted by a client.
///
/// Fields are kept as untyped JSON so that a value of the wrong type is
/// reported per field like any other rejected value, not as a body that
/// could not be parsed. `null` counts as missing.
/// Unknown keys (including a client-supplied `id` or `average`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRating {
    #[serde(rename = "personId", default)]
    pub person_id: Option<Value>,
    #[serde(default)]
    pub beauty: Option<Value>,
    #[serde(default)]
    pub funny: Option<Value>,
    #[serde(default)]
    pub personality: Option<Value>,
    #[serde(default)]
    pub intelligence: Option<Value>,
    #[serde(default)]
    pub comment: Option<Value>,
}

/// Submission after the JSON type check, carrying the declarative rules.
///
/// A field that failed the type check is left `None` here and its
/// `required` failure is dropped in favor of the type error.
#[derive(Debug, Default, Validate)]
struct TypedRating {
    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Must not be empty")
    )]
    person_id: Option<String>,

    #[validate(
        required(message = "Required"),
        range(min = 1.0, max = 10.0, message = "Must be between 1 and 10")
    )]
    beauty: Option<f64>,

    #[validate(
        required(message = "Required"),
        range(min = 1.0, max = 10.0, message = "Must be between 1 and 10")
    )]
    funny: Option<f64>,

    #[validate(
        required(message = "Required"),
        range(min = 1.0, max = 10.0, message = "Must be between 1 and 10")
    )]
    personality: Option<f64>,

    #[validate(
        required(message = "Required"),
        range(min = 1.0, max = 10.0, message = "Must be between 1 and 10")
    )]
    intelligence: Option<f64>,

    #[validate(length(max = 200, message = "Must be at most 200 characters"))]
    comment: Option<String>,
}

impl CreateRating {
    /// Validate the submission and convert it into a [`NewRating`].
    ///
    /// All rejected fields are reported together in a
    /// [`CoreError::Validation`], sorted by field name.
    pub fn into_new_rating(self) -> Result<NewRating, CoreError> {
        let mut fields = Vec::new();

        let typed = TypedRating {
            person_id: expect_string("personId", self.person_id, &mut fields),
            beauty: expect_number("beauty", self.beauty, &mut fields),
            funny: expect_number("funny", self.funny, &mut fields),
            personality: expect_number("personality", self.personality, &mut fields),
            intelligence: expect_number("intelligence", self.intelligence, &mut fields),
            comment: expect_string("comment", self.comment, &mut fields),
        };

        if let Err(errors) = typed.validate() {
            for err in collect_field_errors(&errors) {
                if !fields.iter().any(|f: &FieldError| f.field == err.field) {
                    fields.push(err);
                }
            }
        }

        for (name, value) in typed.score_fields() {
            let already_flagged = fields.iter().any(|f| f.field == name);
            if let Some(v) = value {
                if !already_flagged && v.fract() != 0.0 {
                    fields.push(FieldError::new(name, "Expected integer, received float"));
                }
            }
        }

        if !fields.is_empty() {
            return Err(CoreError::invalid_fields(fields));
        }

        match (
            typed.person_id,
            typed.beauty,
            typed.funny,
            typed.personality,
            typed.intelligence,
        ) {
            (Some(person_id), Some(beauty), Some(funny), Some(personality), Some(intelligence)) => {
                Ok(NewRating {
                    person_id,
                    scores: Scores {
                        beauty: to_score(beauty),
                        funny: to_score(funny),
                        personality: to_score(personality),
                        intelligence: to_score(intelligence),
                    },
                    comment: typed.comment,
                })
            }
            _ => Err(CoreError::Internal(
                "rating passed validation with a missing field".to_string(),
            )),
        }
    }
}

impl TypedRating {
    fn score_fields(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("beauty", self.beauty),
            ("funny", self.funny),
            ("personality", self.personality),
            ("intelligence", self.intelligence),
        ]
    }
}

fn expect_string(
    field: &'static str,
    value: Option<Value>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        other => {
            errors.push(type_mismatch(field, "string", &other));
            None
        }
    }
}

fn expect_number(
    field: &'static str,
    value: Option<Value>,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        other => {
            errors.push(type_mismatch(field, "number", &other));
            None
        }
    }
}

fn type_mismatch(field: &'static str, expected: &str, received: &Value) -> FieldError {
    let received = match received {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    FieldError::new(field, format!("Expected {expected}, received {received}"))
}

/// Range and integrality have been checked, so the cast cannot truncate.
fn to_score(value: f64) -> u8 {
    value as u8
}

/// Flatten `validator`'s nested error map into wire-named field errors.
fn collect_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, errs) in errors.field_errors() {
        let name = wire_name(&field.to_string());
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| err.code.to_string());
            out.push(FieldError::new(name.clone(), message));
        }
    }
    out
}

fn wire_name(field: &str) -> String {
    match field {
        "person_id" => "personId".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn submission(scores: [f64; 4]) -> CreateRating {
        CreateRating {
            person_id: Some(json!("4")),
            beauty: Some(json!(scores[0])),
            funny: Some(json!(scores[1])),
            personality: Some(json!(scores[2])),
            intelligence: Some(json!(scores[3])),
            comment: None,
        }
    }

    fn rejected_fields(err: CoreError) -> Vec<String> {
        match err {
            CoreError::Validation { fields, .. } => fields.into_iter().map(|f| f.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -- average --

    #[test]
    fn average_is_exact_mean_over_whole_range() {
        for b in MIN_SCORE..=MAX_SCORE {
            for f in [MIN_SCORE, 5, MAX_SCORE] {
                let scores = Scores {
                    beauty: b,
                    funny: f,
                    personality: 7,
                    intelligence: 2,
                };
                let expected = f64::from(u32::from(b) + u32::from(f) + 7 + 2) / 4.0;
                assert_eq!(scores.average(), expected);
            }
        }
    }

    #[test]
    fn from_new_fixes_average() {
        let new = submission([8.0, 6.0, 9.0, 7.0]).into_new_rating().unwrap();
        let rating = Rating::from_new("r1".to_string(), new);
        assert_eq!(rating.average, 7.5);
        assert_eq!(rating.person_id, "4");
        assert_eq!(rating.comment, None);
    }

    // -- validation --

    #[test]
    fn accepts_boundary_scores() {
        assert!(submission([1.0, 10.0, 1.0, 10.0]).into_new_rating().is_ok());
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let err = submission([0.0, 11.0, 5.0, 5.0]).into_new_rating().unwrap_err();
        assert_eq!(rejected_fields(err), vec!["beauty", "funny"]);
    }

    #[test]
    fn rejects_fractional_score() {
        let err = submission([5.5, 5.0, 5.0, 5.0]).into_new_rating().unwrap_err();
        assert_matches!(&err, CoreError::Validation { fields, .. }
            if fields[0].message.contains("Expected integer"));
    }

    #[test]
    fn rejects_missing_criterion_and_person() {
        let input = CreateRating {
            beauty: Some(json!(5)),
            funny: Some(json!(5)),
            personality: Some(json!(5)),
            ..Default::default()
        };
        let err = input.into_new_rating().unwrap_err();
        assert_eq!(rejected_fields(err), vec!["intelligence", "personId"]);
    }

    #[test]
    fn rejects_empty_person_id() {
        let mut input = submission([5.0, 5.0, 5.0, 5.0]);
        input.person_id = Some(json!(""));
        let err = input.into_new_rating().unwrap_err();
        assert_eq!(rejected_fields(err), vec!["personId"]);
    }

    #[test]
    fn comment_length_boundary() {
        let mut ok = submission([5.0, 5.0, 5.0, 5.0]);
        ok.comment = Some(json!("x".repeat(MAX_COMMENT_LENGTH)));
        assert!(ok.into_new_rating().is_ok());

        let mut too_long = submission([5.0, 5.0, 5.0, 5.0]);
        too_long.comment = Some(json!("x".repeat(MAX_COMMENT_LENGTH + 1)));
        let err = too_long.into_new_rating().unwrap_err();
        assert_eq!(rejected_fields(err), vec!["comment"]);
    }

    #[test]
    fn comment_length_counts_characters_not_bytes() {
        let mut input = submission([5.0, 5.0, 5.0, 5.0]);
        input.comment = Some(json!("é".repeat(MAX_COMMENT_LENGTH)));
        assert!(input.into_new_rating().is_ok());
    }

    #[test]
    fn deserializes_wire_payload_and_ignores_unknown_keys() {
        let input: CreateRating = serde_json::from_str(
            r#"{"personId":"10","beauty":3,"funny":4,"personality":5,"intelligence":6,
                "comment":null,"average":99,"id":"forged"}"#,
        )
        .unwrap();

        let new = input.into_new_rating().unwrap();
        assert_eq!(new.person_id, "10");
        assert_eq!(new.scores.average(), 4.5);
        assert_eq!(new.comment, None);
    }

    #[test]
    fn wrong_json_types_are_reported_per_field() {
        let input: CreateRating = serde_json::from_str(
            r#"{"personId":4,"beauty":"five","funny":true,"personality":5,
                "intelligence":[6],"comment":12}"#,
        )
        .unwrap();

        let fields = match input.into_new_rating() {
            Err(CoreError::Validation { fields, .. }) => fields,
            other => panic!("expected validation error, got {other:?}"),
        };
        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|f| (f.field.as_str(), f.message.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("beauty", "Expected number, received string"),
                ("comment", "Expected string, received number"),
                ("funny", "Expected number, received boolean"),
                ("intelligence", "Expected number, received array"),
                ("personId", "Expected string, received number"),
            ]
        );
    }

    #[test]
    fn null_score_counts_as_missing() {
        let input: CreateRating = serde_json::from_value(json!({
            "personId": "4", "beauty": 5, "funny": null, "personality": 5, "intelligence": 5
        }))
        .unwrap();
        let err = input.into_new_rating().unwrap_err();
        assert_matches!(&err, CoreError::Validation { fields, .. }
            if fields.len() == 1 && fields[0].field == "funny" && fields[0].message == "Required");
    }

    #[test]
    fn has_comment_ignores_empty_text() {
        let mut rating = Rating::from_new(
            "r".to_string(),
            submission([5.0, 5.0, 5.0, 5.0]).into_new_rating().unwrap(),
        );
        assert!(!rating.has_comment());
        rating.comment = Some(String::new());
        assert!(!rating.has_comment());
        rating.comment = Some("sympa".to_string());
        assert!(rating.has_comment());
    }
}
