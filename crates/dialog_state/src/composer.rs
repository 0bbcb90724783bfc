//! Response composer - canned copy and formatting for every outcome
//!
//! Deterministic and side-effect free: state-machine outcomes in, user-facing
//! text out. All copy is PT-BR, kept from the original support assistant.

use support_core::CarrierOption;

use crate::machine::{ConversationState, MenuCommand};

pub const WELCOME: &str = "Olá! Bem-vindo ao suporte da Auto Peças. Como posso ajudá-lo hoje?";

pub const FOLLOW_UP: &str = "Posso ajudar em mais alguma coisa?";

pub const INVALID_CEP: &str = "❌ CEP inválido. Por favor, informe um CEP válido (8 dígitos).";

pub const INVALID_ORDER_NUMBER: &str = "❌ Por favor, informe um número de pedido válido.";

pub const BLANK_PAYMENT_ISSUE: &str = "❌ Por favor, descreva o problema de pagamento.";

pub const CANCELLATION_DECLINED: &str =
    "Cancelamento não realizado. Posso ajudar em mais alguma coisa?";

pub const TICKET_NAME_PROMPT: &str = "Qual é o seu nome?";

pub const TICKET_EMAIL_PROMPT: &str = "Qual é o seu e-mail?";

pub const TICKET_TYPE_PROMPT: &str =
    "Qual é o tipo de problema? (pagamento, produto, entrega, outro)";

pub const TICKET_DESCRIPTION_PROMPT: &str = "Por favor, descreva o problema de forma resumida:";

const FREIGHT_FALLBACK_ERROR: &str =
    "Não foi possível calcular o frete. Verifique o CEP informado ou tente novamente mais tarde.";

/// The prompt for the current ticket intake step, if the state is one.
pub fn ticket_step_prompt(state: &ConversationState) -> Option<&'static str> {
    match state {
        ConversationState::AwaitingTicketName => Some(TICKET_NAME_PROMPT),
        ConversationState::AwaitingTicketEmail => Some(TICKET_EMAIL_PROMPT),
        ConversationState::AwaitingTicketType => Some(TICKET_TYPE_PROMPT),
        ConversationState::AwaitingTicketDescription => Some(TICKET_DESCRIPTION_PROMPT),
        _ => None,
    }
}

/// The menu shown whenever the session rests in Idle.
pub fn menu() -> String {
    let mut text = String::from("Escolha uma das opções:\n");
    for (index, command) in MenuCommand::ALL.iter().enumerate() {
        text.push_str(&format!("\n{} - {}", index + 1, command.label()));
    }
    text
}

/// Idle free text that matched no menu option.
pub fn unknown_menu_option() -> String {
    format!("Desculpe, não entendi. {}", menu())
}

pub fn checking_freight(cep: &str) -> String {
    format!("✅ Consultando frete para o CEP {cep}...")
}

/// Icon by carrier name keyword; express services get the rocket.
fn carrier_icon(name: &str) -> &'static str {
    if name.contains("Expresso") || name.contains("SEDEX") {
        "🚀"
    } else if name.contains("Rodoviário") {
        "🚛"
    } else {
        "📦"
    }
}

/// One line per carrier option.
pub fn carrier_line(option: &CarrierOption) -> String {
    format!(
        "{} {}: R$ {:.2} ({} dias úteis)",
        carrier_icon(&option.name),
        option.name,
        option.price,
        option.eta_days
    )
}

pub fn freight_quote(carriers: &[CarrierOption]) -> String {
    let mut text = String::from("✅ Frete calculado:\n\n");
    for option in carriers {
        text.push_str(&carrier_line(option));
        text.push('\n');
    }
    text.push('\n');
    text.push_str(FOLLOW_UP);
    text
}

/// Apology for a failed or empty quote, preferring the gateway's error text.
pub fn freight_failure(error: Option<&str>) -> String {
    let reason = match error {
        Some(text) if !text.trim().is_empty() => text,
        _ => FREIGHT_FALLBACK_ERROR,
    };
    format!("❌ {reason}\n\n{FOLLOW_UP}")
}

pub fn querying_order(order_number: &str) -> String {
    format!("🔍 Consultando pedido #{order_number}...")
}

pub fn order_status(order_number: &str) -> String {
    format!(
        "📋 Status do Pedido #{order_number}:\n\n\
         Status: Em Separação\n\
         Última atualização: Hoje às 14:30\n\
         Previsão de entrega: 5 dias úteis\n\n\
         {FOLLOW_UP}"
    )
}

/// The two-message confirmation request for a cancellation.
pub fn cancel_confirmation_request(order_number: &str) -> [String; 2] {
    [
        format!("⚠️ Você tem certeza que deseja cancelar o pedido #{order_number}?"),
        "Digite 'SIM' para confirmar ou 'NÃO' para cancelar:".to_string(),
    ]
}

pub fn cancellation_done(order_number: &str) -> String {
    format!(
        "✅ Pedido #{order_number} cancelado com sucesso!\n\n\
         O estorno será realizado em até 7 dias úteis.\n\n\
         {FOLLOW_UP}"
    )
}

pub fn payment_issue_recorded(description: &str) -> String {
    format!(
        "✅ Problema registrado com sucesso!\n\n\
         \"{description}\"\n\n\
         📞 Nossa equipe financeira entrará em contato em até 24 horas.\n\n\
         {FOLLOW_UP}"
    )
}

pub fn product_question_recorded(description: &str) -> String {
    format!(
        "Sobre sua dúvida: \"{description}\"\n\n\
         💡 Nossa equipe técnica pode fornecer informações mais detalhadas. Você pode:\n\n\
         - Ligar: (11) 3333-4444\n\
         - WhatsApp: (11) 99999-8888\n\
         - E-mail: suporte@autopecas.com.br\n\n\
         {FOLLOW_UP}"
    )
}

pub fn ticket_opened(protocol: &str) -> String {
    format!(
        "✅ Chamado aberto! Seu protocolo é {protocol}.\n\n\
         Nossa equipe entrará em contato em até 24 horas.\n\n\
         {FOLLOW_UP}"
    )
}

/// What failed when a recording call could not reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayConcern {
    OrderQuery,
    Cancellation,
    PaymentIssue,
    ProductQuestion,
    Ticket,
}

/// Apology naming the likely cause, inviting a retry.
pub fn gateway_unavailable(concern: GatewayConcern) -> String {
    let what = match concern {
        GatewayConcern::OrderQuery => "a consulta de pedido",
        GatewayConcern::Cancellation => "o cancelamento",
        GatewayConcern::PaymentIssue => "o problema de pagamento",
        GatewayConcern::ProductQuestion => "sua dúvida",
        GatewayConcern::Ticket => "o chamado",
    };
    format!("⚠️ Não consegui registrar {what}. Verifique o servidor configurado e tente novamente.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sedex() -> CarrierOption {
        CarrierOption {
            name: "SEDEX".to_string(),
            price: 45.0,
            eta_days: 3,
        }
    }

    #[test]
    fn test_carrier_line_for_express_service() {
        assert_eq!(carrier_line(&sedex()), "🚀 SEDEX: R$ 45.00 (3 dias úteis)");
    }

    #[test]
    fn test_carrier_icons_by_keyword() {
        let truck = CarrierOption {
            name: "JadLog Rodoviário".to_string(),
            price: 22.5,
            eta_days: 7,
        };
        let parcel = CarrierOption {
            name: "JadLog Econômico".to_string(),
            price: 18.9,
            eta_days: 9,
        };
        assert!(carrier_line(&truck).starts_with("🚛"));
        assert!(carrier_line(&parcel).starts_with("📦"));
    }

    #[test]
    fn test_freight_quote_lists_carriers_and_reoffers_menu() {
        let text = freight_quote(&[sedex()]);
        assert!(text.contains("🚀 SEDEX: R$ 45.00 (3 dias úteis)"));
        assert!(text.ends_with(FOLLOW_UP));
    }

    #[test]
    fn test_freight_failure_prefers_gateway_error_text() {
        let text = freight_failure(Some("CEP não atendido"));
        assert!(text.contains("CEP não atendido"));

        let text = freight_failure(None);
        assert!(text.contains("Não foi possível calcular o frete"));

        // Blank error text falls back too
        let text = freight_failure(Some("  "));
        assert!(text.contains("Não foi possível calcular o frete"));
    }

    #[test]
    fn test_order_status_shape_is_stable() {
        // Two round trips with the same order must render the same canned shape.
        assert_eq!(order_status("998"), order_status("998"));
        assert!(order_status("998").contains("Status: Em Separação"));
    }

    #[test]
    fn test_menu_lists_all_six_options() {
        let text = menu();
        for command in MenuCommand::ALL {
            assert!(text.contains(command.label()), "menu missing {command:?}");
        }
    }

    #[test]
    fn test_gateway_unavailable_names_the_flow() {
        let text = gateway_unavailable(GatewayConcern::Ticket);
        assert!(text.contains("o chamado"));
        assert!(text.contains("Verifique o servidor configurado"));
    }
}
