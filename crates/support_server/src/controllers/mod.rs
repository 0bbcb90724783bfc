pub mod freight;
pub mod health;
pub mod issues;
pub mod orders;
pub mod tickets;

use serde::Serialize;

/// Envelope returned by every recording endpoint.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn yes() -> Self {
        Self { ok: true }
    }
}

/// Error envelope; `erro` stays PT-BR like the rest of the surface.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub erro: String,
}

impl ErrorResponse {
    pub fn new(erro: impl Into<String>) -> Self {
        Self {
            ok: false,
            erro: erro.into(),
        }
    }
}
