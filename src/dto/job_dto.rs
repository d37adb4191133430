use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostJobPayload {
    #[validate(custom(function = not_blank))]
    pub title: String,
    #[validate(custom(function = not_blank))]
    pub description: String,
    #[validate(custom(function = not_blank))]
    pub budget: String,
}
