//! Sqlite persistence for recorded interactions.
//!
//! Column names stay in PT-BR to match the shop's existing reporting
//! queries. All access goes through `spawn_blocking`; rusqlite connections
//! are opened per call against a WAL database.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use support_core::SubmittedTicket;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage task join error: {0}")]
    Task(String),
}

/// A persisted ticket row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTicket {
    pub protocol: String,
    pub name: String,
    pub email: String,
    pub problem_type: String,
    pub description: String,
    pub opened_at: String,
}

#[async_trait]
pub trait SupportStore: Send + Sync {
    async fn init(&self) -> StoreResult<()>;

    async fn record_freight_query(&self, cep: &str) -> StoreResult<()>;
    async fn record_order_query(&self, order_number: &str) -> StoreResult<()>;
    async fn record_cancellation(&self, order_number: &str, status: &str) -> StoreResult<()>;
    async fn record_payment_issue(&self, description: &str) -> StoreResult<()>;
    async fn record_product_question(&self, description: &str) -> StoreResult<()>;

    /// Inserts the ticket; returns false when the protocol already exists.
    async fn save_ticket(&self, ticket: &SubmittedTicket) -> StoreResult<bool>;

    async fn ticket_by_protocol(&self, protocol: &str) -> StoreResult<Option<StoredTicket>>;
}

#[derive(Debug, Clone)]
pub struct SqliteSupportStore {
    db_path: PathBuf,
}

impl SqliteSupportStore {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    async fn with_connection<T, F>(&self, func: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let connection = open_connection(&db_path)?;
            func(&connection)
        })
        .await
        .map_err(|error| StoreError::Task(error.to_string()))?
    }
}

#[async_trait]
impl SupportStore for SqliteSupportStore {
    async fn init(&self) -> StoreResult<()> {
        self.with_connection(|connection| {
            connection.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS consultas_frete (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    cep TEXT NOT NULL,
                    consultado_em TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS consultas_pedido (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    numero_pedido TEXT NOT NULL,
                    consultado_em TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS cancelamentos (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    numero_pedido TEXT NOT NULL,
                    status TEXT NOT NULL,
                    registrado_em TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS problemas_pagamento (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    descricao TEXT NOT NULL,
                    registrado_em TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS duvidas_produto (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    descricao TEXT NOT NULL,
                    registrado_em TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS chamados (
                    protocolo TEXT PRIMARY KEY,
                    nome TEXT NOT NULL,
                    email TEXT NOT NULL,
                    tipo_problema TEXT NOT NULL,
                    descricao TEXT NOT NULL,
                    aberto_em TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_consultas_pedido_numero
                    ON consultas_pedido(numero_pedido);
                CREATE INDEX IF NOT EXISTS idx_cancelamentos_numero
                    ON cancelamentos(numero_pedido);
                "#,
            )?;
            Ok(())
        })
        .await
    }

    async fn record_freight_query(&self, cep: &str) -> StoreResult<()> {
        let cep = cep.to_string();
        let now = now_timestamp();
        self.with_connection(move |connection| {
            connection.execute(
                "INSERT INTO consultas_frete (cep, consultado_em) VALUES (?1, ?2)",
                params![cep, now],
            )?;
            Ok(())
        })
        .await
    }

    async fn record_order_query(&self, order_number: &str) -> StoreResult<()> {
        let order_number = order_number.to_string();
        let now = now_timestamp();
        self.with_connection(move |connection| {
            connection.execute(
                "INSERT INTO consultas_pedido (numero_pedido, consultado_em) VALUES (?1, ?2)",
                params![order_number, now],
            )?;
            Ok(())
        })
        .await
    }

    async fn record_cancellation(&self, order_number: &str, status: &str) -> StoreResult<()> {
        let order_number = order_number.to_string();
        let status = status.to_string();
        let now = now_timestamp();
        self.with_connection(move |connection| {
            connection.execute(
                "INSERT INTO cancelamentos (numero_pedido, status, registrado_em) VALUES (?1, ?2, ?3)",
                params![order_number, status, now],
            )?;
            Ok(())
        })
        .await
    }

    async fn record_payment_issue(&self, description: &str) -> StoreResult<()> {
        let description = description.to_string();
        let now = now_timestamp();
        self.with_connection(move |connection| {
            connection.execute(
                "INSERT INTO problemas_pagamento (descricao, registrado_em) VALUES (?1, ?2)",
                params![description, now],
            )?;
            Ok(())
        })
        .await
    }

    async fn record_product_question(&self, description: &str) -> StoreResult<()> {
        let description = description.to_string();
        let now = now_timestamp();
        self.with_connection(move |connection| {
            connection.execute(
                "INSERT INTO duvidas_produto (descricao, registrado_em) VALUES (?1, ?2)",
                params![description, now],
            )?;
            Ok(())
        })
        .await
    }

    async fn save_ticket(&self, ticket: &SubmittedTicket) -> StoreResult<bool> {
        let protocol = ticket.protocol.clone();
        let name = ticket.name.clone();
        let email = ticket.email.clone();
        let problem_type = ticket.problem_type.clone();
        let description = ticket.description.clone();
        let now = now_timestamp();

        self.with_connection(move |connection| {
            let inserted = connection.execute(
                r#"
                INSERT OR IGNORE INTO chamados (
                    protocolo, nome, email, tipo_problema, descricao, aberto_em
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![protocol, name, email, problem_type, description, now],
            )?;
            Ok(inserted > 0)
        })
        .await
    }

    async fn ticket_by_protocol(&self, protocol: &str) -> StoreResult<Option<StoredTicket>> {
        let protocol = protocol.to_string();
        self.with_connection(move |connection| {
            let ticket = connection
                .query_row(
                    "SELECT protocolo, nome, email, tipo_problema, descricao, aberto_em FROM chamados WHERE protocolo = ?1",
                    params![protocol],
                    |row| {
                        Ok(StoredTicket {
                            protocol: row.get(0)?,
                            name: row.get(1)?,
                            email: row.get(2)?,
                            problem_type: row.get(3)?,
                            description: row.get(4)?,
                            opened_at: row.get(5)?,
                        })
                    },
                )
                .optional()?;
            Ok(ticket)
        })
        .await
    }
}

fn open_connection(path: &Path) -> StoreResult<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let connection = Connection::open(path)?;
    connection.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        PRAGMA foreign_keys = ON;
        PRAGMA synchronous = NORMAL;
        "#,
    )?;
    Ok(connection)
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::{SqliteSupportStore, SupportStore};
    use support_core::SubmittedTicket;

    fn ticket(protocol: &str) -> SubmittedTicket {
        SubmittedTicket {
            protocol: protocol.to_string(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            problem_type: "produto".to_string(),
            description: "peça chegou quebrada".to_string(),
        }
    }

    #[tokio::test]
    async fn store_persists_and_reads_back_tickets() {
        let dir = tempdir().expect("temp dir");
        let store = SqliteSupportStore::new(dir.path().join("support.db"));
        store.init().await.expect("init store");

        let saved = store
            .save_ticket(&ticket("CH202608281200001234"))
            .await
            .expect("save ticket");
        assert!(saved);

        let stored = store
            .ticket_by_protocol("CH202608281200001234")
            .await
            .expect("read ticket")
            .expect("ticket exists");
        assert_eq!(stored.name, "Ana");
        assert_eq!(stored.problem_type, "produto");
    }

    #[tokio::test]
    async fn store_rejects_duplicate_protocols() {
        let dir = tempdir().expect("temp dir");
        let store = SqliteSupportStore::new(dir.path().join("support.db"));
        store.init().await.expect("init store");

        assert!(store.save_ticket(&ticket("CH1")).await.expect("first save"));
        assert!(!store.save_ticket(&ticket("CH1")).await.expect("second save"));
    }

    #[tokio::test]
    async fn store_records_every_interaction_kind() {
        let dir = tempdir().expect("temp dir");
        let store = SqliteSupportStore::new(dir.path().join("support.db"));
        store.init().await.expect("init store");

        store
            .record_freight_query("01310100")
            .await
            .expect("freight query");
        store.record_order_query("998").await.expect("order query");
        store
            .record_cancellation("998", "solicitado")
            .await
            .expect("cancellation");
        store
            .record_payment_issue("cobrança duplicada")
            .await
            .expect("payment issue");
        store
            .record_product_question("serve no Gol?")
            .await
            .expect("product question");
    }
}
