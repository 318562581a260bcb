use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::user::NewUser;

/// Arbitrary user-info object submitted at registration.
///
/// Only the top-level shape is enforced: the body must be a JSON object.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct RegisterUserForm {
    pub document: Map<String, Value>,
}

impl RegisterUserForm {
    pub fn into_new_user(self) -> NewUser {
        NewUser::new(self.document)
    }
}
