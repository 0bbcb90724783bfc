//! State machine module
//!
//! Contains the conversation states, the menu commands and the pure
//! classification of user input into directives.

mod commands;
mod states;
mod transitions;

pub use commands::MenuCommand;
pub use states::{ConversationState, OrderPurpose};
pub use transitions::{classify, Directive, InputRejection, StateMachine, StateTransition};
