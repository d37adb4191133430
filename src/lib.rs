pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::models::role::Role;
use crate::services::auth_service::AuthService;
use crate::services::board_service::Board;
use crate::services::notification_service::Notifier;

/// One board per role plus the shared mock auth service. Boards are fully
/// independent; there is no cross-board delivery or reconciliation.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub freelancer_board: Board,
    pub institution_board: Board,
}

impl AppState {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        let config = crate::config::get_config();

        let auth_service = AuthService::new(notifier.clone());
        let freelancer_board = Board::new(
            Role::Freelancer,
            config.freelancer_name.clone(),
            seed::freelancer_board(),
            notifier.clone(),
        );
        let institution_board = Board::new(
            Role::Institution,
            config.institution_name.clone(),
            seed::institution_board(&config.institution_name),
            notifier,
        );

        Self {
            auth_service,
            freelancer_board,
            institution_board,
        }
    }
}
