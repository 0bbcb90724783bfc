//! Dialog engine - runs one full transition per inbound line
//!
//! Classifies the input against the session state, executes the gateway
//! call the directive asks for, converts any failure into user-visible
//! text and applies the state update. Gateway failures never escape to the
//! caller; the session always lands in a safe resting state and the user
//! is invited to retry.

use std::sync::Arc;

use dialog_state::composer::{self, GatewayConcern};
use dialog_state::{classify, ConversationState, Directive, InputRejection, MenuCommand};
use support_core::{FreightQuoteRequest, OutboundMessage, TicketError};
use support_gateway::SupportGateway;
use tracing::{error, warn};

#[derive(Clone)]
pub struct DialogEngine {
    gateway: Arc<dyn SupportGateway>,
}

impl DialogEngine {
    pub fn new(gateway: Arc<dyn SupportGateway>) -> Self {
        Self { gateway }
    }

    /// The greeting plus the menu, for the start of a conversation.
    pub fn welcome(&self) -> Vec<OutboundMessage> {
        vec![
            OutboundMessage::bot(composer::WELCOME),
            OutboundMessage::bot(composer::menu()),
        ]
    }

    /// Enter a sub-flow via an explicit menu selection (button-style entry).
    ///
    /// Echoes the selection as a user message, then prompts.
    pub fn select_menu(
        &self,
        session: &mut crate::DialogSession,
        command: MenuCommand,
    ) -> Vec<OutboundMessage> {
        session.touch();
        let prompt = self.enter_flow(session, command);
        vec![OutboundMessage::user(command.label()), prompt]
    }

    /// Process one line of user text against the session's current state.
    pub async fn handle_message(
        &self,
        session: &mut crate::DialogSession,
        input: &str,
    ) -> Vec<OutboundMessage> {
        session.touch();
        let directive = classify(session.state(), input);
        match directive {
            Directive::Menu(command) => vec![self.enter_flow(session, command)],

            Directive::Reject(rejection) => self.reject(session, rejection),

            Directive::QuoteFreight { cep } => self.quote_freight(session, cep).await,

            Directive::RecordOrderQuery { order_number } => {
                self.order_query(session, order_number).await
            }

            Directive::RequestCancelConfirmation { order_number } => {
                let messages = composer::cancel_confirmation_request(&order_number)
                    .into_iter()
                    .map(OutboundMessage::bot)
                    .collect();
                session.transition_to(ConversationState::AwaitingCancelConfirmation {
                    order_number,
                });
                messages
            }

            Directive::RecordCancellation { order_number } => {
                self.cancellation(session, order_number).await
            }

            Directive::DeclineCancellation => {
                session.reset();
                vec![OutboundMessage::bot(composer::CANCELLATION_DECLINED)]
            }

            Directive::RecordPaymentIssue { description } => {
                self.payment_issue(session, description).await
            }

            Directive::RecordProductQuestion { description } => {
                self.product_question(session, description).await
            }

            Directive::CaptureTicketName { value } => self.capture_ticket_field(
                session,
                |draft, value| draft.set_name(value),
                &value,
                ConversationState::AwaitingTicketEmail,
                composer::TICKET_EMAIL_PROMPT,
            ),

            Directive::CaptureTicketEmail { value } => self.capture_ticket_field(
                session,
                |draft, value| draft.set_email(value),
                &value,
                ConversationState::AwaitingTicketType,
                composer::TICKET_TYPE_PROMPT,
            ),

            Directive::CaptureTicketType { value } => self.capture_ticket_field(
                session,
                |draft, value| draft.set_problem_type(value),
                &value,
                ConversationState::AwaitingTicketDescription,
                composer::TICKET_DESCRIPTION_PROMPT,
            ),

            Directive::SubmitTicket { description } => {
                self.submit_ticket(session, description).await
            }
        }
    }

    fn enter_flow(
        &self,
        session: &mut crate::DialogSession,
        command: MenuCommand,
    ) -> OutboundMessage {
        if command.starts_ticket_flow() {
            session.start_ticket_flow();
        }
        session.transition_to(command.entry_state());
        OutboundMessage::bot(command.prompt())
    }

    /// Validation failures re-prompt in the same state; no gateway call.
    fn reject(
        &self,
        session: &mut crate::DialogSession,
        rejection: InputRejection,
    ) -> Vec<OutboundMessage> {
        let text = match rejection {
            InputRejection::InvalidCep => composer::INVALID_CEP.to_string(),
            InputRejection::InvalidOrderNumber => composer::INVALID_ORDER_NUMBER.to_string(),
            InputRejection::BlankPaymentIssue => composer::BLANK_PAYMENT_ISSUE.to_string(),
            InputRejection::BlankTicketField => composer::ticket_step_prompt(session.state())
                .unwrap_or(composer::TICKET_NAME_PROMPT)
                .to_string(),
            InputRejection::UnknownMenuOption => composer::unknown_menu_option(),
        };
        vec![OutboundMessage::bot(text)]
    }

    /// Freight: record, quote, render. Whatever the outcome, the session
    /// returns to Idle so a failed quote never traps the user in the flow.
    async fn quote_freight(
        &self,
        session: &mut crate::DialogSession,
        cep: String,
    ) -> Vec<OutboundMessage> {
        let mut messages = vec![OutboundMessage::bot(composer::checking_freight(&cep))];

        match self.gateway.record_freight_query(&cep).await {
            Ok(true) => {}
            Ok(false) => warn!(%cep, "freight query was not recorded"),
            Err(e) => warn!(%cep, error = %e, "failed to record freight query"),
        }

        let quote = self
            .gateway
            .quote_freight(FreightQuoteRequest::new(cep.clone()))
            .await;
        let text = match quote {
            Ok(response) if response.success && !response.carriers.is_empty() => {
                composer::freight_quote(&response.carriers)
            }
            Ok(response) => composer::freight_failure(response.error.as_deref()),
            Err(e) => {
                warn!(%cep, error = %e, "freight quote failed");
                composer::freight_failure(None)
            }
        };
        messages.push(OutboundMessage::bot(text));
        session.reset();
        messages
    }

    /// Order query: the canned status is only shown after the recording call
    /// succeeds; a failure never fabricates a status. Either way the session
    /// drops back to Idle.
    async fn order_query(
        &self,
        session: &mut crate::DialogSession,
        order_number: String,
    ) -> Vec<OutboundMessage> {
        let mut messages = vec![OutboundMessage::bot(composer::querying_order(&order_number))];

        match self.gateway.record_order_query(&order_number).await {
            Ok(true) => {
                messages.push(OutboundMessage::bot(composer::order_status(&order_number)));
            }
            outcome => {
                if let Err(e) = outcome {
                    warn!(%order_number, error = %e, "failed to record order query");
                }
                messages.push(OutboundMessage::bot(composer::gateway_unavailable(
                    GatewayConcern::OrderQuery,
                )));
            }
        }
        session.reset();
        messages
    }

    async fn cancellation(
        &self,
        session: &mut crate::DialogSession,
        order_number: String,
    ) -> Vec<OutboundMessage> {
        let recorded = self
            .gateway
            .record_cancellation(&order_number, "solicitado")
            .await;
        let text = match recorded {
            Ok(true) => composer::cancellation_done(&order_number),
            outcome => {
                if let Err(e) = outcome {
                    warn!(%order_number, error = %e, "failed to record cancellation");
                }
                composer::gateway_unavailable(GatewayConcern::Cancellation)
            }
        };
        session.reset();
        vec![OutboundMessage::bot(text)]
    }

    async fn payment_issue(
        &self,
        session: &mut crate::DialogSession,
        description: String,
    ) -> Vec<OutboundMessage> {
        let recorded = self.gateway.record_payment_issue(&description).await;
        let text = match recorded {
            Ok(true) => composer::payment_issue_recorded(&description),
            outcome => {
                if let Err(e) = outcome {
                    warn!(error = %e, "failed to record payment issue");
                }
                composer::gateway_unavailable(GatewayConcern::PaymentIssue)
            }
        };
        session.reset();
        vec![OutboundMessage::bot(text)]
    }

    /// Product question: on recording failure the user stays in the question
    /// state and may retry with the same text.
    async fn product_question(
        &self,
        session: &mut crate::DialogSession,
        description: String,
    ) -> Vec<OutboundMessage> {
        match self.gateway.record_product_question(&description).await {
            Ok(true) => {
                session.reset();
                vec![OutboundMessage::bot(composer::product_question_recorded(
                    &description,
                ))]
            }
            outcome => {
                if let Err(e) = outcome {
                    warn!(error = %e, "failed to record product question");
                }
                vec![OutboundMessage::bot(composer::gateway_unavailable(
                    GatewayConcern::ProductQuestion,
                ))]
            }
        }
    }

    fn capture_ticket_field(
        &self,
        session: &mut crate::DialogSession,
        set: impl FnOnce(&mut support_core::TicketDraft, &str) -> Result<(), TicketError>,
        value: &str,
        next: ConversationState,
        next_prompt: &str,
    ) -> Vec<OutboundMessage> {
        if let Err(e) = set(session.draft_mut(), value) {
            // classify already rejected blank input; this is a contract breach
            debug_assert!(false, "ticket field rejected after classification: {e}");
            error!(error = %e, "ticket field rejected after classification");
            return self.reject(session, InputRejection::BlankTicketField);
        }
        session.transition_to(next);
        vec![OutboundMessage::bot(next_prompt.to_string())]
    }

    /// Final intake step: finalize the draft, persist the ticket. A failed
    /// save never reuses the generated protocol; the user must restart the
    /// ticket flow.
    async fn submit_ticket(
        &self,
        session: &mut crate::DialogSession,
        description: String,
    ) -> Vec<OutboundMessage> {
        if let Err(e) = session.draft_mut().set_description(&description) {
            debug_assert!(false, "ticket description rejected after classification: {e}");
            error!(error = %e, "ticket description rejected after classification");
            return self.reject(session, InputRejection::BlankTicketField);
        }

        let ticket = match session.draft_mut().finalize() {
            Ok(ticket) => ticket,
            Err(TicketError::AlreadySubmitted) => {
                debug_assert!(false, "ticket draft finalized twice");
                error!("ticket draft finalized twice, ignoring");
                session.reset();
                return Vec::new();
            }
            Err(e) => {
                // A missing earlier field means the flow was not followed.
                debug_assert!(false, "incomplete draft on submission: {e}");
                error!(error = %e, "incomplete ticket draft on submission");
                session.reset();
                return vec![OutboundMessage::bot(composer::gateway_unavailable(
                    GatewayConcern::Ticket,
                ))];
            }
        };

        let text = match self.gateway.save_ticket(&ticket).await {
            Ok(true) => composer::ticket_opened(&ticket.protocol),
            outcome => {
                if let Err(e) = outcome {
                    warn!(protocol = %ticket.protocol, error = %e, "failed to save ticket");
                } else {
                    warn!(protocol = %ticket.protocol, "backend refused ticket");
                }
                composer::gateway_unavailable(GatewayConcern::Ticket)
            }
        };
        session.reset();
        vec![OutboundMessage::bot(text)]
    }
}
