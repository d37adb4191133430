use std::sync::Arc;

use tracing::info;

use crate::dto::job_dto::PostJobPayload;
use crate::error::{Error, Result, SendError};
use crate::models::conversation::{Conversation, Message};
use crate::models::job::{AppliedJob, Job};
use crate::models::navigation::Navigation;
use crate::models::role::Role;
use crate::seed::BoardSeed;
use crate::services::catalog_service::JobCatalog;
use crate::services::conversation_service::ConversationStore;
use crate::services::notification_service::{Notification, Notifier};

/// Per-role aggregate of job catalog, application list and chat threads.
/// One instance per signed-in actor; all state is process-local and every
/// operation is synchronous.
///
/// Role policy: institutions post, freelancers apply. Both roles share the
/// full chat contract.
#[derive(Clone)]
pub struct Board {
    role: Role,
    actor: String,
    catalog: JobCatalog,
    applied: Vec<AppliedJob>,
    conversations: ConversationStore,
    selected: Option<String>,
    notifier: Arc<dyn Notifier>,
}

impl Board {
    pub fn new(role: Role, actor: impl Into<String>, seed: BoardSeed, notifier: Arc<dyn Notifier>) -> Self {
        let actor = actor.into();
        info!(%role, %actor, "board ready");
        Self {
            role,
            actor,
            catalog: JobCatalog::new(seed.jobs),
            applied: seed.applied,
            conversations: ConversationStore::new(seed.conversations),
            selected: None,
            notifier,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn jobs(&self) -> &[Job] {
        self.catalog.list()
    }

    pub fn search_jobs(&self, filter: &str) -> Vec<&Job> {
        self.catalog.search(filter)
    }

    pub fn applied_jobs(&self) -> &[AppliedJob] {
        &self.applied
    }

    /// Institution-only: validate and publish a new posting.
    pub fn post_job(&mut self, payload: PostJobPayload) -> Result<Job> {
        if self.role != Role::Institution {
            return Err(self.reject("only institutions can post jobs"));
        }
        match self.catalog.post(payload, &self.actor) {
            Ok(job) => {
                self.notifier
                    .notify(Notification::info("Job posted successfully!"));
                Ok(job)
            }
            Err(err) => {
                self.notifier.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Freelancer-only: apply to a visible job, once per job id.
    pub fn apply_to_job(&mut self, job_id: &str) -> Result<AppliedJob> {
        if self.role != Role::Freelancer {
            return Err(self.reject("only freelancers can apply to jobs"));
        }
        match self.catalog.apply(job_id) {
            Ok(application) => {
                self.notifier.notify(
                    Notification::info("Application submitted!")
                        .with_description(format!("Applied to {}", application.title)),
                );
                self.applied.insert(0, application.clone());
                Ok(application)
            }
            Err(err) => {
                self.notifier.notify(Notification::error(err.to_string()));
                Err(err.into())
            }
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        self.conversations.list()
    }

    /// Focuses a thread for reading and sending. Pure read on the data;
    /// only the selection changes.
    pub fn select_conversation(&mut self, conversation_id: &str) -> Result<&Conversation> {
        if self.conversations.get(conversation_id).is_some() {
            self.selected = Some(conversation_id.to_string());
        }
        self.conversations.get(conversation_id).ok_or_else(|| {
            Error::NotFound(format!("Conversation {conversation_id} not found"))
        })
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.selected
            .as_deref()
            .and_then(|id| self.conversations.get(id))
    }

    /// Appends a message from the local actor to the selected thread.
    /// Local echo only; nothing is delivered to the counterparty.
    pub fn send_message(&mut self, text: &str) -> Result<Message> {
        let Some(conversation_id) = self.selected.clone() else {
            let err = SendError::NoActiveConversation;
            self.notifier.notify(Notification::error(err.to_string()));
            return Err(err.into());
        };
        match self.conversations.append(&conversation_id, self.role, text) {
            Ok(message) => {
                self.notifier.notify(Notification::info("Message sent!"));
                Ok(message)
            }
            Err(err) => {
                self.notifier.notify(Notification::error(err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Clears the selection and asks the navigation sink for home.
    pub fn logout(&mut self) -> Navigation {
        self.selected = None;
        self.notifier
            .notify(Notification::info("Logged out successfully"));
        info!(role = %self.role, "logged out");
        Navigation::Home
    }

    fn reject(&self, reason: &str) -> Error {
        let err = Error::Forbidden(reason.to_string());
        self.notifier.notify(Notification::error(err.to_string()));
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notification_service::{MockNotifier, NotificationKind, TracingNotifier};

    fn board(role: Role, notifier: Arc<dyn Notifier>) -> Board {
        let seed = match role {
            Role::Freelancer => crate::seed::freelancer_board(),
            Role::Institution => crate::seed::institution_board("TechCorp Inc."),
        };
        Board::new(role, "tester", seed, notifier)
    }

    fn quiet(role: Role) -> Board {
        board(role, Arc::new(TracingNotifier))
    }

    #[test]
    fn post_is_institution_only() {
        let mut freelancer = quiet(Role::Freelancer);
        let before = freelancer.jobs().len();
        let result = freelancer.post_job(PostJobPayload {
            title: "QA Engineer".into(),
            description: "Test the app".into(),
            budget: "$2,000".into(),
        });
        assert!(matches!(result, Err(Error::Forbidden(_))));
        assert_eq!(freelancer.jobs().len(), before);
    }

    #[test]
    fn apply_is_freelancer_only() {
        let mut institution = quiet(Role::Institution);
        let result = institution.apply_to_job("1");
        assert!(matches!(result, Err(Error::Forbidden(_))));
        assert!(institution.applied_jobs().is_empty());
    }

    #[test]
    fn send_without_selection_fails() {
        let mut board = quiet(Role::Freelancer);
        let result = board.send_message("hello");
        assert!(matches!(
            result,
            Err(Error::Send(SendError::NoActiveConversation))
        ));
    }

    #[test]
    fn selection_survives_until_logout() {
        let mut board = quiet(Role::Freelancer);
        board.select_conversation("1").unwrap();
        assert_eq!(board.selected_conversation().unwrap().id, "1");

        board.logout();
        assert!(board.selected_conversation().is_none());
    }

    #[test]
    fn select_unknown_conversation_is_not_found() {
        let mut board = quiet(Role::Freelancer);
        assert!(matches!(
            board.select_conversation("999"),
            Err(Error::NotFound(_))
        ));
        assert!(board.selected_conversation().is_none());
    }

    #[test]
    fn every_command_notifies_exactly_once() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.title == "Application submitted!" && n.kind == NotificationKind::Info)
            .times(1)
            .return_const(());
        notifier
            .expect_notify()
            .withf(|n| n.kind == NotificationKind::Error)
            .times(1)
            .return_const(());

        let mut board = board(Role::Freelancer, Arc::new(notifier));
        board.apply_to_job("1").unwrap();
        assert!(board.apply_to_job("1").is_err());
    }

    #[test]
    fn failed_apply_notifies_error_and_leaves_state() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.kind == NotificationKind::Error && n.title == "Job not found")
            .times(1)
            .return_const(());

        let mut board = board(Role::Freelancer, Arc::new(notifier));
        let before = board.applied_jobs().len();
        assert!(board.apply_to_job("no-such-id").is_err());
        assert_eq!(board.applied_jobs().len(), before);
    }
}
