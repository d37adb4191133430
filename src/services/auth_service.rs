use std::sync::Arc;

use tracing::info;

use crate::dto::auth_dto::{LoginPayload, RegisterPayload};
use crate::error::{AuthError, Result};
use crate::models::navigation::Navigation;
use crate::services::notification_service::{Notification, Notifier};
use crate::utils::validation;

/// Mock sign-in and registration. No credential store and no tokens; the
/// only contract is which board the caller is routed to.
#[derive(Clone)]
pub struct AuthService {
    notifier: Arc<dyn Notifier>,
}

impl AuthService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn login(&self, payload: LoginPayload) -> Result<Navigation> {
        if let Err(err) = validation::validate(&payload) {
            self.notifier
                .notify(Notification::error("Please fill all fields"));
            return Err(err.into());
        }
        let Some(role) = payload.role else {
            return Err(self.reject(AuthError::MissingRole));
        };
        info!(%role, email = %payload.email, "login");
        self.notifier.notify(Notification::info("Login successful!"));
        Ok(Navigation::Board(role))
    }

    pub fn register(&self, payload: RegisterPayload) -> Result<Navigation> {
        if let Err(err) = validation::validate(&payload) {
            self.notifier
                .notify(Notification::error("Please fill all fields"));
            return Err(err.into());
        }
        let Some(role) = payload.role else {
            return Err(self.reject(AuthError::MissingRole));
        };
        if payload.password != payload.confirm_password {
            return Err(self.reject(AuthError::PasswordMismatch));
        }
        info!(%role, email = %payload.email, "registered");
        self.notifier
            .notify(Notification::info("Account created successfully!"));
        Ok(Navigation::Board(role))
    }

    fn reject(&self, err: AuthError) -> crate::error::Error {
        self.notifier.notify(Notification::error(err.to_string()));
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::role::Role;
    use crate::services::notification_service::{MockNotifier, NotificationKind, TracingNotifier};

    fn service() -> AuthService {
        AuthService::new(Arc::new(TracingNotifier))
    }

    fn login_payload(role: Option<Role>) -> LoginPayload {
        LoginPayload {
            email: "jane@example.com".into(),
            password: "hunter2".into(),
            role,
        }
    }

    #[test]
    fn login_requires_an_account_type() {
        let result = service().login(login_payload(None));
        assert!(matches!(result, Err(Error::Auth(AuthError::MissingRole))));
    }

    #[test]
    fn login_routes_to_the_selected_board() {
        let nav = service()
            .login(login_payload(Some(Role::Institution)))
            .unwrap();
        assert_eq!(nav, Navigation::Board(Role::Institution));
    }

    #[test]
    fn register_rejects_mismatched_passwords() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| {
                n.kind == NotificationKind::Error && n.title == "Passwords do not match"
            })
            .times(1)
            .return_const(());

        let service = AuthService::new(Arc::new(notifier));
        let result = service.register(RegisterPayload {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            password: "hunter2".into(),
            confirm_password: "hunter3".into(),
            role: Some(Role::Freelancer),
        });
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::PasswordMismatch))
        ));
    }

    #[test]
    fn blank_credentials_fail_validation() {
        let result = service().login(LoginPayload {
            email: "  ".into(),
            password: "hunter2".into(),
            role: Some(Role::Freelancer),
        });
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
