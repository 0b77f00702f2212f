/// Persons and ratings are identified by opaque strings.
pub type EntityId = String;
