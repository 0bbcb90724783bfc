//! dialog_state - State machine and input classification for the support chat
//!
//! This crate provides the finite-state core of the conversation: the state
//! variants, the menu commands that enter each sub-flow, the pure
//! classification of user input and the response composer. It performs no
//! I/O; executing gateway calls is the dialog engine's job.

pub mod composer;
pub mod machine;

// Re-export commonly used types
pub use machine::{
    classify, ConversationState, Directive, InputRejection, MenuCommand, OrderPurpose,
    StateMachine, StateTransition,
};
