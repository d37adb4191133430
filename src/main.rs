use std::sync::Arc;

use linkwork_core::config::{get_config, init_config};
use linkwork_core::dto::auth_dto::LoginPayload;
use linkwork_core::dto::job_dto::PostJobPayload;
use linkwork_core::models::navigation::Navigation;
use linkwork_core::models::role::Role;
use linkwork_core::services::notification_service::TracingNotifier;
use linkwork_core::AppState;
use tracing::info;

/// Scripted walkthrough of both dashboards against the seed data. All
/// state lives in memory and is gone when the process exits.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let notifier = Arc::new(TracingNotifier);
    let mut state = AppState::new(notifier);

    info!(marketplace = %config.marketplace_name, "demo starting");

    let nav = state.auth_service.login(LoginPayload {
        email: "institution@example.com".to_string(),
        password: "hunter2".to_string(),
        role: Some(Role::Institution),
    })?;
    info!(?nav, "signed in");

    let job = state.institution_board.post_job(PostJobPayload {
        title: "QA Engineer".to_string(),
        description: "Test the app".to_string(),
        budget: "$2,000".to_string(),
    })?;
    info!(job = %serde_json::to_string(&job)?, "new posting live");

    for job in state.freelancer_board.search_jobs("developer") {
        info!(job_id = %job.id, title = %job.title, budget = %job.budget, "search hit");
    }

    let application = state.freelancer_board.apply_to_job("1")?;
    info!(
        job_id = %application.id,
        status = ?application.status,
        "application recorded"
    );

    let thread = state.freelancer_board.select_conversation("1")?;
    info!(
        conversation_id = %thread.id,
        counterparty = %thread.counterparty,
        seeded_messages = thread.messages.len(),
        "conversation opened"
    );
    let message = state.freelancer_board.send_message("Sounds good")?;
    info!(message_id = %message.id, time = %message.time, "message echoed locally");

    state.institution_board.select_conversation("1")?;
    state
        .institution_board
        .send_message("Can you start on Monday?")?;

    let home = state.freelancer_board.logout();
    debug_assert_eq!(home, Navigation::Home);
    info!("demo finished");

    Ok(())
}
