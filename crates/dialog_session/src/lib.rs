//! dialog_session - Sessions and the orchestration engine
//!
//! One `DialogSession` per conversation; the `DialogEngine` runs a full
//! transition (classification, gateway call, composition) for each inbound
//! line and always leaves the session in a safe state. The
//! `MultiSessionManager` keeps sessions for concurrent users, processing
//! each session strictly sequentially.

pub mod engine;
pub mod manager;
pub mod session;

pub use engine::DialogEngine;
pub use manager::MultiSessionManager;
pub use session::DialogSession;
