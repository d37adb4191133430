use serde::{Deserialize, Serialize};

use crate::models::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Role,
    pub text: String,
    pub time: String,
}

/// A message thread between one freelancer and one institution about one
/// job. Threads are pre-seeded; there is no operation that creates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub counterparty: String,
    pub job_title: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Next message id, monotonically increasing within this thread.
    pub(crate) fn next_message_id(&self) -> String {
        self.messages
            .last()
            .and_then(|m| m.id.parse::<u64>().ok())
            .map(|n| n + 1)
            .unwrap_or(self.messages.len() as u64 + 1)
            .to_string()
    }
}
