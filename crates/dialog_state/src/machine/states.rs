//! Conversation states - Defines all possible states of a dialog session
//!
//! Each multi-step sub-flow keeps its position here; sub-state data such as
//! the order number awaiting cancellation travels as a typed payload, never
//! encoded into a string key.

use serde::{Deserialize, Serialize};

/// What an order number is being collected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPurpose {
    /// Look up the order status.
    Query,
    /// Start a cancellation (confirmation still required).
    Cancel,
}

/// Defines the possible states of a conversation.
///
/// A session is always in exactly one of these; classification matches on
/// the state tag exhaustively, so overlapping prefixes cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Resting state, the menu is offered and free text selects a sub-flow.
    Idle,

    // ========== Freight ==========
    /// Waiting for the destination CEP.
    AwaitingCep,

    // ========== Orders ==========
    /// Waiting for an order number, either to query or to cancel.
    AwaitingOrderNumber { purpose: OrderPurpose },

    /// Waiting for the explicit SIM/NÃO answer for this order.
    AwaitingCancelConfirmation { order_number: String },

    // ========== Free-text records ==========
    /// Waiting for the payment problem description.
    AwaitingPaymentIssueText,

    /// Waiting for the product question text.
    AwaitingProductQuestionText,

    // ========== Ticket intake (strictly sequential) ==========
    /// Step 1 of 4: the requester's name.
    AwaitingTicketName,

    /// Step 2 of 4: the requester's e-mail.
    AwaitingTicketEmail,

    /// Step 3 of 4: the problem type.
    AwaitingTicketType,

    /// Step 4 of 4: the free-form description; submission happens here.
    AwaitingTicketDescription,
}

impl Default for ConversationState {
    fn default() -> Self {
        ConversationState::Idle
    }
}

impl ConversationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if this state belongs to the four-step ticket intake.
    pub fn is_ticket_step(&self) -> bool {
        matches!(
            self,
            Self::AwaitingTicketName
                | Self::AwaitingTicketEmail
                | Self::AwaitingTicketType
                | Self::AwaitingTicketDescription
        )
    }

    /// Check if the next user line is treated as free text for this state.
    pub fn awaits_free_text(&self) -> bool {
        !self.is_idle()
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Aguardando seleção no menu",
            Self::AwaitingCep => "Aguardando CEP",
            Self::AwaitingOrderNumber {
                purpose: OrderPurpose::Query,
            } => "Aguardando número do pedido (consulta)",
            Self::AwaitingOrderNumber {
                purpose: OrderPurpose::Cancel,
            } => "Aguardando número do pedido (cancelamento)",
            Self::AwaitingCancelConfirmation { .. } => "Aguardando confirmação do cancelamento",
            Self::AwaitingPaymentIssueText => "Aguardando descrição do problema de pagamento",
            Self::AwaitingProductQuestionText => "Aguardando dúvida sobre produto",
            Self::AwaitingTicketName => "Aguardando nome (novo chamado)",
            Self::AwaitingTicketEmail => "Aguardando e-mail (novo chamado)",
            Self::AwaitingTicketType => "Aguardando tipo de problema (novo chamado)",
            Self::AwaitingTicketDescription => "Aguardando descrição (novo chamado)",
        }
    }
}
