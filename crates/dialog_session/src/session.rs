//! Dialog session state
//!
//! The only mutable unit of the conversation: current state plus the ticket
//! draft. Created at session start, mutated only by the engine, discarded
//! when the conversation ends. No persistence.

use chrono::{DateTime, Utc};
use dialog_state::{ConversationState, StateMachine, StateTransition};
use support_core::TicketDraft;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct DialogSession {
    id: Uuid,
    machine: StateMachine,
    draft: TicketDraft,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl Default for DialogSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            machine: StateMachine::new(),
            draft: TicketDraft::default(),
            created_at: now,
            last_activity: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &ConversationState {
        self.machine.state()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    pub fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    pub(crate) fn draft_mut(&mut self) -> &mut TicketDraft {
        &mut self.draft
    }

    /// Clear the draft for a fresh ticket flow.
    pub(crate) fn start_ticket_flow(&mut self) {
        self.draft.start();
    }

    pub(crate) fn transition_to(&mut self, next: ConversationState) -> StateTransition {
        self.machine.transition_to(next)
    }

    pub(crate) fn reset(&mut self) -> StateTransition {
        self.machine.reset()
    }

    pub(crate) fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Recent transitions, most recent last.
    pub fn history(&self) -> &[StateTransition] {
        self.machine.history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_idle() {
        let session = DialogSession::new();
        assert_eq!(session.state(), &ConversationState::Idle);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(DialogSession::new().id(), DialogSession::new().id());
    }

    #[test]
    fn test_start_ticket_flow_clears_draft() {
        let mut session = DialogSession::new();
        session.draft_mut().set_name("Ana").unwrap();
        session.start_ticket_flow();
        assert!(!session.draft().is_complete());
    }
}
