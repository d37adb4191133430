use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::role::Role;
use crate::utils::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(custom(function = not_blank))]
    pub email: String,
    #[validate(custom(function = not_blank))]
    pub password: String,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(custom(function = not_blank))]
    pub email: String,
    #[validate(custom(function = not_blank))]
    pub password: String,
    #[validate(custom(function = not_blank))]
    pub confirm_password: String,
    pub role: Option<Role>,
}
