//! Support ticket draft accumulator
//!
//! A `TicketDraft` collects the four ticket fields across user turns in a
//! fixed order. `finalize` assigns the protocol exactly once and yields the
//! immutable `SubmittedTicket` handed to the gateway.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol;

/// Ticket accumulator error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    #[error("Field '{0}' cannot be blank")]
    BlankField(&'static str),

    #[error("Field '{0}' was not collected yet")]
    MissingField(&'static str),

    #[error("Ticket draft was already submitted")]
    AlreadySubmitted,
}

pub type Result<T> = std::result::Result<T, TicketError>;

/// In-progress ticket data, populated name -> email -> type -> description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketDraft {
    name: Option<String>,
    email: Option<String>,
    problem_type: Option<String>,
    description: Option<String>,
    submitted: bool,
}

/// An immutable, protocol-bearing ticket ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedTicket {
    pub protocol: String,
    pub name: String,
    pub email: String,
    pub problem_type: String,
    pub description: String,
}

fn require_non_blank(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TicketError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

impl TicketDraft {
    /// Reset all fields, discarding any partial data.
    pub fn start(&mut self) {
        *self = TicketDraft::default();
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        self.name = Some(require_non_blank("name", value)?);
        Ok(())
    }

    pub fn set_email(&mut self, value: &str) -> Result<()> {
        self.email = Some(require_non_blank("email", value)?);
        Ok(())
    }

    pub fn set_problem_type(&mut self, value: &str) -> Result<()> {
        self.problem_type = Some(require_non_blank("problem_type", value)?);
        Ok(())
    }

    pub fn set_description(&mut self, value: &str) -> Result<()> {
        self.description = Some(require_non_blank("description", value)?);
        Ok(())
    }

    /// Whether all four fields have been collected.
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.email.is_some()
            && self.problem_type.is_some()
            && self.description.is_some()
    }

    /// Generate the protocol and seal the draft.
    ///
    /// Calling this twice on the same draft is rejected, guaranteeing
    /// at most one protocol per draft lifecycle.
    pub fn finalize(&mut self) -> Result<SubmittedTicket> {
        if self.submitted {
            return Err(TicketError::AlreadySubmitted);
        }
        let ticket = SubmittedTicket {
            protocol: protocol::generate(),
            name: self
                .name
                .clone()
                .ok_or(TicketError::MissingField("name"))?,
            email: self
                .email
                .clone()
                .ok_or(TicketError::MissingField("email"))?,
            problem_type: self
                .problem_type
                .clone()
                .ok_or(TicketError::MissingField("problem_type"))?,
            description: self
                .description
                .clone()
                .ok_or(TicketError::MissingField("description"))?,
        };
        self.submitted = true;
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> TicketDraft {
        let mut draft = TicketDraft::default();
        draft.set_name("Ana").unwrap();
        draft.set_email("ana@x.com").unwrap();
        draft.set_problem_type("produto").unwrap();
        draft.set_description("quebrado").unwrap();
        draft
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut draft = TicketDraft::default();
        assert_eq!(
            draft.set_name("   "),
            Err(TicketError::BlankField("name"))
        );
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut draft = complete_draft();
        draft.set_name("  Ana  ").unwrap();
        let ticket = draft.finalize().unwrap();
        assert_eq!(ticket.name, "Ana");
    }

    #[test]
    fn test_finalize_requires_all_fields() {
        let mut draft = TicketDraft::default();
        draft.set_name("Ana").unwrap();
        assert_eq!(
            draft.finalize(),
            Err(TicketError::MissingField("email"))
        );
    }

    #[test]
    fn test_double_finalize_rejected() {
        let mut draft = complete_draft();
        draft.finalize().unwrap();
        assert_eq!(draft.finalize(), Err(TicketError::AlreadySubmitted));
    }

    #[test]
    fn test_start_discards_partial_data() {
        let mut draft = complete_draft();
        draft.start();
        assert!(!draft.is_complete());
        assert_eq!(
            draft.finalize(),
            Err(TicketError::MissingField("name"))
        );
    }

    #[test]
    fn test_finalize_assigns_protocol() {
        let mut draft = complete_draft();
        let ticket = draft.finalize().unwrap();
        assert!(ticket.protocol.starts_with("CH"));
    }
}
