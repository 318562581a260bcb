use serde::Serialize;

use crate::forms::users::RegisterUserForm;
use crate::repository::UserWriter;
use crate::services::{ServiceError, ServiceResult};

/// Insert acknowledgement returned to the registering client.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistered {
    pub acknowledged: bool,
    pub inserted_id: i32,
}

/// Stores the submitted user document as-is.
pub fn register_user<R>(repo: &R, form: RegisterUserForm) -> ServiceResult<UserRegistered>
where
    R: UserWriter + ?Sized,
{
    let user = repo
        .create_user(&form.into_new_user())
        .map_err(ServiceError::from)?;

    Ok(UserRegistered {
        acknowledged: true,
        inserted_id: user.id,
    })
}
