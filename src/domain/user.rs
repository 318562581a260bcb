use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

/// A registered user document, stored exactly as submitted.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub document: Map<String, Value>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub document: Map<String, Value>,
    pub created_at: NaiveDateTime,
}

impl NewUser {
    #[must_use]
    pub fn new(document: Map<String, Value>) -> Self {
        Self {
            document,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
