//! Menu commands - Entry points into each support sub-flow
//!
//! Commands are the only way out of `Idle`. Each one immediately emits its
//! prompt and moves the session to the first awaiting state of its sub-flow;
//! they never validate user text themselves.

use serde::{Deserialize, Serialize};

use super::states::{ConversationState, OrderPurpose};

/// The six support scenarios a user can pick from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCommand {
    QuoteFreight,
    QueryOrder,
    CancelOrder,
    PaymentIssue,
    ProductQuestion,
    NewTicket,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::QuoteFreight,
        MenuCommand::QueryOrder,
        MenuCommand::CancelOrder,
        MenuCommand::PaymentIssue,
        MenuCommand::ProductQuestion,
        MenuCommand::NewTicket,
    ];

    /// Parse a menu selection from user text: the option number or a keyword.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "frete" => Some(Self::QuoteFreight),
            "2" | "consultar pedido" | "pedido" => Some(Self::QueryOrder),
            "3" | "cancelar pedido" | "cancelar" => Some(Self::CancelOrder),
            "4" | "pagamento" => Some(Self::PaymentIssue),
            "5" | "produto" | "duvida" | "dúvida" => Some(Self::ProductQuestion),
            "6" | "chamado" | "novo chamado" => Some(Self::NewTicket),
            _ => None,
        }
    }

    /// The label shown in the menu, mirroring the original buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::QuoteFreight => "Consultar Frete",
            Self::QueryOrder => "Consultar Pedido",
            Self::CancelOrder => "Cancelar Pedido",
            Self::PaymentIssue => "Problemas com Pagamento",
            Self::ProductQuestion => "Dúvidas sobre Produto",
            Self::NewTicket => "Novo Chamado",
        }
    }

    /// The prompt emitted when the command is selected.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::QuoteFreight => "Para consultar o frete, por favor informe seu CEP:",
            Self::QueryOrder => {
                "Para consultar seu pedido, por favor informe o número do pedido:"
            }
            Self::CancelOrder => {
                "Para cancelar seu pedido, por favor informe o número do pedido:"
            }
            Self::PaymentIssue => {
                "Entendo que você está com problemas no pagamento. Por favor, descreva o problema:"
            }
            Self::ProductQuestion => "Estou aqui para ajudar! Qual é a sua dúvida sobre o produto?",
            Self::NewTicket => "Qual é o seu nome?",
        }
    }

    /// The first awaiting state of the sub-flow this command starts.
    pub fn entry_state(&self) -> ConversationState {
        match self {
            Self::QuoteFreight => ConversationState::AwaitingCep,
            Self::QueryOrder => ConversationState::AwaitingOrderNumber {
                purpose: OrderPurpose::Query,
            },
            Self::CancelOrder => ConversationState::AwaitingOrderNumber {
                purpose: OrderPurpose::Cancel,
            },
            Self::PaymentIssue => ConversationState::AwaitingPaymentIssueText,
            Self::ProductQuestion => ConversationState::AwaitingProductQuestionText,
            Self::NewTicket => ConversationState::AwaitingTicketName,
        }
    }

    /// Whether selecting this command resets the ticket draft.
    pub fn starts_ticket_flow(&self) -> bool {
        matches!(self, Self::NewTicket)
    }
}
