//! Input classification and state transitions
//!
//! `classify` is the pure core of the conversation: given the current state
//! and one line of user text it decides what must happen next, without
//! executing anything. The dialog engine runs the resulting directive
//! (including any gateway call) and then records the actual transition on
//! the session's `StateMachine`.

use support_core::cep;

use super::commands::MenuCommand;
use super::states::{ConversationState, OrderPurpose};

/// Why a line of input was rejected in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRejection {
    /// Not 8 digits after stripping non-digit characters.
    InvalidCep,
    /// Empty order number for a cancellation.
    InvalidOrderNumber,
    /// Blank payment problem description.
    BlankPaymentIssue,
    /// Blank value for the current ticket intake step.
    BlankTicketField,
    /// Free text in Idle that matches no menu command.
    UnknownMenuOption,
}

/// What the engine must do with a classified line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Enter the sub-flow of a menu command.
    Menu(MenuCommand),
    /// Stay in the current state and re-prompt.
    Reject(InputRejection),
    /// Record the freight query and quote carriers for this CEP.
    QuoteFreight { cep: String },
    /// Record the order query and reply with the canned status.
    RecordOrderQuery { order_number: String },
    /// Ask for the SIM/NÃO confirmation, carrying the order number forward.
    RequestCancelConfirmation { order_number: String },
    /// User confirmed: record the cancellation.
    RecordCancellation { order_number: String },
    /// Anything other than SIM declines with no gateway call.
    DeclineCancellation,
    /// Record the payment problem description.
    RecordPaymentIssue { description: String },
    /// Record the product question.
    RecordProductQuestion { description: String },
    /// Capture a ticket field and advance to the next intake step.
    CaptureTicketName { value: String },
    CaptureTicketEmail { value: String },
    CaptureTicketType { value: String },
    /// Final intake step: finalize the draft and submit the ticket.
    SubmitTicket { description: String },
}

/// Classify one line of user input against the current state.
///
/// Matches on the state tag, exact state first; the cancel confirmation is
/// distinguished from order-number collection by variant, not by any string
/// prefix.
pub fn classify(state: &ConversationState, input: &str) -> Directive {
    match state {
        ConversationState::Idle => match MenuCommand::parse(input) {
            Some(command) => Directive::Menu(command),
            None => Directive::Reject(InputRejection::UnknownMenuOption),
        },

        ConversationState::AwaitingCep => match cep::normalize(input) {
            Some(cep) => Directive::QuoteFreight { cep },
            None => Directive::Reject(InputRejection::InvalidCep),
        },

        ConversationState::AwaitingOrderNumber {
            purpose: OrderPurpose::Query,
        } => Directive::RecordOrderQuery {
            order_number: input.trim().to_string(),
        },

        ConversationState::AwaitingOrderNumber {
            purpose: OrderPurpose::Cancel,
        } => {
            let order_number = input.trim();
            if order_number.is_empty() {
                Directive::Reject(InputRejection::InvalidOrderNumber)
            } else {
                Directive::RequestCancelConfirmation {
                    order_number: order_number.to_string(),
                }
            }
        }

        ConversationState::AwaitingCancelConfirmation { order_number } => {
            if input.trim().eq_ignore_ascii_case("sim") {
                Directive::RecordCancellation {
                    order_number: order_number.clone(),
                }
            } else {
                Directive::DeclineCancellation
            }
        }

        ConversationState::AwaitingPaymentIssueText => {
            if input.trim().is_empty() {
                Directive::Reject(InputRejection::BlankPaymentIssue)
            } else {
                Directive::RecordPaymentIssue {
                    description: input.to_string(),
                }
            }
        }

        ConversationState::AwaitingProductQuestionText => Directive::RecordProductQuestion {
            description: input.to_string(),
        },

        ConversationState::AwaitingTicketName => ticket_field(input, Directive::CaptureTicketName {
            value: input.trim().to_string(),
        }),

        ConversationState::AwaitingTicketEmail => ticket_field(input, Directive::CaptureTicketEmail {
            value: input.trim().to_string(),
        }),

        ConversationState::AwaitingTicketType => ticket_field(input, Directive::CaptureTicketType {
            value: input.trim().to_string(),
        }),

        ConversationState::AwaitingTicketDescription => {
            ticket_field(input, Directive::SubmitTicket {
                description: input.trim().to_string(),
            })
        }
    }
}

fn ticket_field(input: &str, accepted: Directive) -> Directive {
    if input.trim().is_empty() {
        Directive::Reject(InputRejection::BlankTicketField)
    } else {
        accepted
    }
}

/// Represents a recorded state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: ConversationState,
    /// The state after the transition.
    pub to: ConversationState,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// Holds a session's current state plus a bounded transition history.
#[derive(Debug, Clone)]
pub struct StateMachine {
    current_state: ConversationState,
    history: Vec<StateTransition>,
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self {
            current_state: ConversationState::Idle,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &ConversationState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Move to `next`, recording the transition.
    pub fn transition_to(&mut self, next: ConversationState) -> StateTransition {
        let from = std::mem::replace(&mut self.current_state, next.clone());
        let changed = from != next;
        let transition = StateTransition { from, to: next, changed };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Drop back to Idle.
    pub fn reset(&mut self) -> StateTransition {
        self.transition_to(ConversationState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_parses_menu_commands() {
        let directive = classify(&ConversationState::Idle, "1");
        assert_eq!(directive, Directive::Menu(MenuCommand::QuoteFreight));

        let directive = classify(&ConversationState::Idle, "bom dia");
        assert_eq!(
            directive,
            Directive::Reject(InputRejection::UnknownMenuOption)
        );
    }

    #[test]
    fn test_cep_classification() {
        let directive = classify(&ConversationState::AwaitingCep, "01310-100");
        assert_eq!(
            directive,
            Directive::QuoteFreight {
                cep: "01310100".to_string()
            }
        );

        let directive = classify(&ConversationState::AwaitingCep, "0131010");
        assert_eq!(directive, Directive::Reject(InputRejection::InvalidCep));
    }

    #[test]
    fn test_order_query_always_accepted() {
        let state = ConversationState::AwaitingOrderNumber {
            purpose: OrderPurpose::Query,
        };
        assert_eq!(
            classify(&state, " 998 "),
            Directive::RecordOrderQuery {
                order_number: "998".to_string()
            }
        );
    }

    #[test]
    fn test_cancel_requires_order_number() {
        let state = ConversationState::AwaitingOrderNumber {
            purpose: OrderPurpose::Cancel,
        };
        assert_eq!(
            classify(&state, "   "),
            Directive::Reject(InputRejection::InvalidOrderNumber)
        );
        assert_eq!(
            classify(&state, "4242"),
            Directive::RequestCancelConfirmation {
                order_number: "4242".to_string()
            }
        );
    }

    #[test]
    fn test_confirmation_is_case_insensitive() {
        let state = ConversationState::AwaitingCancelConfirmation {
            order_number: "4242".to_string(),
        };
        for yes in ["sim", "SIM", "Sim", "  sim  "] {
            assert_eq!(
                classify(&state, yes),
                Directive::RecordCancellation {
                    order_number: "4242".to_string()
                },
                "{yes:?} should confirm"
            );
        }
        for no in ["nao", "não", "", "NÃO", "talvez"] {
            assert_eq!(
                classify(&state, no),
                Directive::DeclineCancellation,
                "{no:?} should decline"
            );
        }
    }

    #[test]
    fn test_payment_issue_requires_text() {
        assert_eq!(
            classify(&ConversationState::AwaitingPaymentIssueText, " "),
            Directive::Reject(InputRejection::BlankPaymentIssue)
        );
        assert_eq!(
            classify(
                &ConversationState::AwaitingPaymentIssueText,
                "cobrança duplicada"
            ),
            Directive::RecordPaymentIssue {
                description: "cobrança duplicada".to_string()
            }
        );
    }

    #[test]
    fn test_product_question_accepts_anything() {
        assert_eq!(
            classify(&ConversationState::AwaitingProductQuestionText, "serve no Gol?"),
            Directive::RecordProductQuestion {
                description: "serve no Gol?".to_string()
            }
        );
    }

    #[test]
    fn test_ticket_steps_reject_blank_values() {
        for state in [
            ConversationState::AwaitingTicketName,
            ConversationState::AwaitingTicketEmail,
            ConversationState::AwaitingTicketType,
            ConversationState::AwaitingTicketDescription,
        ] {
            assert_eq!(
                classify(&state, "  "),
                Directive::Reject(InputRejection::BlankTicketField),
                "{state:?} should reject blank input"
            );
        }
    }

    #[test]
    fn test_ticket_description_submits() {
        assert_eq!(
            classify(&ConversationState::AwaitingTicketDescription, "quebrado"),
            Directive::SubmitTicket {
                description: "quebrado".to_string()
            }
        );
    }

    #[test]
    fn test_state_machine_records_history() {
        let mut machine = StateMachine::new();
        let transition = machine.transition_to(ConversationState::AwaitingCep);
        assert!(transition.changed);
        assert_eq!(machine.state(), &ConversationState::AwaitingCep);

        let transition = machine.reset();
        assert!(transition.changed);
        assert_eq!(machine.history().len(), 2);
    }

    #[test]
    fn test_self_transition_is_not_a_change() {
        let mut machine = StateMachine::new();
        let transition = machine.transition_to(ConversationState::Idle);
        assert!(!transition.changed);
    }
}
