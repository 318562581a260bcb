use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::User as DomainUser;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub document: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub document: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUser {
    type Error = serde_json::Error;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            document: serde_json::from_str(&value.document)?,
            created_at: value.created_at,
        })
    }
}
