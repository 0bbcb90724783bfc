//! Multi-session manager
//!
//! Keeps one `DialogSession` per user id. The per-session mutex is held
//! across the whole transition, gateway call included, so each session
//! processes messages strictly sequentially while different users run
//! concurrently. Sessions are in-memory only and vanish with the process.

use std::collections::HashMap;
use std::sync::Arc;

use dialog_state::{ConversationState, MenuCommand};
use support_core::OutboundMessage;
use support_gateway::SupportGateway;
use tokio::sync::{Mutex, RwLock};

use crate::engine::DialogEngine;
use crate::session::DialogSession;

pub struct MultiSessionManager {
    engine: DialogEngine,
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<DialogSession>>>>>,
}

impl MultiSessionManager {
    pub fn new(gateway: Arc<dyn SupportGateway>) -> Self {
        Self {
            engine: DialogEngine::new(gateway),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get or create the session for a user.
    async fn session_for(&self, user_id: &str) -> Arc<Mutex<DialogSession>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(user_id) {
                return Arc::clone(session);
            }
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(DialogSession::new()))),
        )
    }

    /// Greeting for a fresh conversation.
    pub fn welcome(&self) -> Vec<OutboundMessage> {
        self.engine.welcome()
    }

    /// Process one line of text for a user, strictly after any in-flight
    /// message of the same user.
    pub async fn handle_message(&self, user_id: &str, input: &str) -> Vec<OutboundMessage> {
        let session = self.session_for(user_id).await;
        let mut session = session.lock().await;
        self.engine.handle_message(&mut session, input).await
    }

    /// Enter a sub-flow for a user via an explicit menu selection.
    pub async fn select_menu(&self, user_id: &str, command: MenuCommand) -> Vec<OutboundMessage> {
        let session = self.session_for(user_id).await;
        let mut session = session.lock().await;
        self.engine.select_menu(&mut session, command)
    }

    /// Current state of a user's session, if one exists.
    pub async fn state_of(&self, user_id: &str) -> Option<ConversationState> {
        let sessions = self.sessions.read().await;
        match sessions.get(user_id) {
            Some(session) => Some(session.lock().await.state().clone()),
            None => None,
        }
    }

    /// Discard a user's session, losing any partial draft.
    pub async fn end_session(&self, user_id: &str) -> bool {
        self.sessions.write().await.remove(user_id).is_some()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_gateway::CannedSupportGateway;

    fn manager() -> MultiSessionManager {
        MultiSessionManager::new(Arc::new(CannedSupportGateway::new()))
    }

    #[tokio::test]
    async fn test_sessions_are_per_user() {
        let manager = manager();
        manager
            .select_menu("ana", MenuCommand::QuoteFreight)
            .await;
        manager.select_menu("bia", MenuCommand::NewTicket).await;

        assert_eq!(
            manager.state_of("ana").await,
            Some(ConversationState::AwaitingCep)
        );
        assert_eq!(
            manager.state_of("bia").await,
            Some(ConversationState::AwaitingTicketName)
        );
        assert_eq!(manager.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_end_session_discards_state() {
        let manager = manager();
        manager.select_menu("ana", MenuCommand::NewTicket).await;
        manager.handle_message("ana", "Ana").await;

        assert!(manager.end_session("ana").await);
        assert_eq!(manager.state_of("ana").await, None);
        assert!(!manager.end_session("ana").await);
    }

    #[tokio::test]
    async fn test_concurrent_cancellations_keep_their_order_numbers() {
        let manager = manager();
        manager.select_menu("ana", MenuCommand::CancelOrder).await;
        manager.select_menu("bia", MenuCommand::CancelOrder).await;
        manager.handle_message("ana", "111").await;
        manager.handle_message("bia", "222").await;

        assert_eq!(
            manager.state_of("ana").await,
            Some(ConversationState::AwaitingCancelConfirmation {
                order_number: "111".to_string()
            })
        );
        assert_eq!(
            manager.state_of("bia").await,
            Some(ConversationState::AwaitingCancelConfirmation {
                order_number: "222".to_string()
            })
        );
    }
}
