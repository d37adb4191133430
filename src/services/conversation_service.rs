use tracing::info;

use crate::error::SendError;
use crate::models::conversation::{Conversation, Message};
use crate::models::role::Role;
use crate::utils::time;

/// In-memory store of pre-seeded message threads. Threads are listed in
/// seed order and messages are append-only.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
}

impl ConversationStore {
    pub fn new(seed: Vec<Conversation>) -> Self {
        Self { conversations: seed }
    }

    pub fn list(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.id == conversation_id)
    }

    /// Appends a message sent by `sender` to the given thread. Blank text
    /// is rejected and the thread is left untouched.
    pub fn append(
        &mut self,
        conversation_id: &str,
        sender: Role,
        text: &str,
    ) -> std::result::Result<Message, SendError> {
        if text.trim().is_empty() {
            return Err(SendError::Empty);
        }
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or(SendError::NoActiveConversation)?;

        let message = Message {
            id: conversation.next_message_id(),
            sender,
            text: text.to_string(),
            time: time::clock_time(),
        };
        conversation.messages.push(message.clone());
        info!(
            conversation_id = %conversation.id,
            message_id = %message.id,
            sender = %message.sender,
            "message sent"
        );
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ConversationStore {
        ConversationStore::new(vec![Conversation {
            id: "1".to_string(),
            counterparty: "TechCorp Inc.".to_string(),
            job_title: "Web Developer Needed".to_string(),
            messages: vec![
                Message {
                    id: "1".to_string(),
                    sender: Role::Institution,
                    text: "Hi! We reviewed your application.".to_string(),
                    time: "10:30 AM".to_string(),
                },
                Message {
                    id: "2".to_string(),
                    sender: Role::Freelancer,
                    text: "Great! I'm excited about this opportunity.".to_string(),
                    time: "10:35 AM".to_string(),
                },
            ],
        }])
    }

    #[test]
    fn append_preserves_order_and_increments_ids() {
        let mut store = store();
        for text in ["one", "two", "three"] {
            store.append("1", Role::Freelancer, text).unwrap();
        }
        let messages = &store.get("1").unwrap().messages;
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[2].text, "one");
        assert_eq!(messages[4].text, "three");
        assert_eq!(messages[2].id, "3");
        assert_eq!(messages[4].id, "5");
    }

    #[test]
    fn blank_text_never_mutates_the_thread() {
        let mut store = store();
        assert_eq!(store.append("1", Role::Freelancer, ""), Err(SendError::Empty));
        assert_eq!(
            store.append("1", Role::Freelancer, "   "),
            Err(SendError::Empty)
        );
        assert_eq!(store.get("1").unwrap().messages.len(), 2);
    }

    #[test]
    fn get_is_a_pure_read() {
        let store = store();
        let before = store.get("1").unwrap().clone();
        let again = store.get("1").unwrap();
        assert_eq!(&before, again);
        assert!(store.get("999").is_none());
    }
}
