//! Endpoint tests against an in-process app with a throwaway database.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};
use support_server::server::{app_config, AppState};
use support_server::store::{SqliteSupportStore, SupportStore};
use tempfile::TempDir;

async fn test_state(dir: &TempDir) -> web::Data<AppState> {
    let store: Arc<dyn SupportStore> =
        Arc::new(SqliteSupportStore::new(dir.path().join("support.db")));
    store.init().await.expect("init store");
    web::Data::new(AppState { store })
}

#[actix_web::test]
async fn health_reports_ok() {
    let dir = TempDir::new().expect("temp dir");
    let app = test::init_service(
        App::new()
            .app_data(test_state(&dir).await)
            .configure(app_config),
    )
    .await;

    let request = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["ok"], json!(true));
}

#[actix_web::test]
async fn freight_endpoint_quotes_and_reports_invalid_cep_in_body() {
    let dir = TempDir::new().expect("temp dir");
    let app = test::init_service(
        App::new()
            .app_data(test_state(&dir).await)
            .configure(app_config),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/consultas/frete")
        .set_json(json!({ "cep": "01310-100" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["carriers"].as_array().expect("carriers").len(), 3);
    assert!(body["carriers"][0]["etaDays"].is_u64());

    let request = test::TestRequest::post()
        .uri("/api/consultas/frete")
        .set_json(json!({ "cep": "123" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().expect("error").contains("CEP inválido"));
}

#[actix_web::test]
async fn recording_endpoints_answer_ok_envelopes() {
    let dir = TempDir::new().expect("temp dir");
    let app = test::init_service(
        App::new()
            .app_data(test_state(&dir).await)
            .configure(app_config),
    )
    .await;

    let cases = [
        ("/api/consultas/pedido", json!({ "orderNumber": "998" })),
        (
            "/api/cancelamentos",
            json!({ "orderNumber": "998", "status": "solicitado" }),
        ),
        (
            "/api/problemas-pagamento",
            json!({ "description": "cobrança duplicada" }),
        ),
        (
            "/api/duvidas-produto",
            json!({ "description": "serve no Gol?" }),
        ),
    ];

    for (uri, payload) in cases {
        let request = test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["ok"], json!(true), "{uri} should accept the payload");
    }
}

#[actix_web::test]
async fn cancellation_status_defaults_to_solicitado() {
    let dir = TempDir::new().expect("temp dir");
    let app = test::init_service(
        App::new()
            .app_data(test_state(&dir).await)
            .configure(app_config),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/cancelamentos")
        .set_json(json!({ "orderNumber": "777" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["ok"], json!(true));
}

#[actix_web::test]
async fn ticket_endpoint_accepts_both_key_casings_and_rejects_duplicates() {
    let dir = TempDir::new().expect("temp dir");
    let state = test_state(&dir).await;
    let app = test::init_service(App::new().app_data(state.clone()).configure(app_config)).await;

    let request = test::TestRequest::post()
        .uri("/api/chamados")
        .set_json(json!({
            "protocol": "CH202608281430001234",
            "name": "Ana",
            "email": "ana@x.com",
            "problemType": "produto",
            "description": "peça chegou quebrada"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["protocolo"], json!("CH202608281430001234"));

    // Same ticket again in PascalCase hits the duplicate guard.
    let request = test::TestRequest::post()
        .uri("/api/chamados")
        .set_json(json!({
            "Protocol": "CH202608281430001234",
            "Name": "Ana",
            "Email": "ana@x.com",
            "ProblemType": "produto",
            "Description": "peça chegou quebrada"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);

    let stored = state
        .store
        .ticket_by_protocol("CH202608281430001234")
        .await
        .expect("read ticket")
        .expect("ticket exists");
    assert_eq!(stored.email, "ana@x.com");
}

#[actix_web::test]
async fn ticket_endpoint_rejects_blank_required_fields() {
    let dir = TempDir::new().expect("temp dir");
    let app = test::init_service(
        App::new()
            .app_data(test_state(&dir).await)
            .configure(app_config),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/chamados")
        .set_json(json!({
            "protocol": "CH202608281430009999",
            "name": "  ",
            "email": "ana@x.com",
            "problemType": "produto"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
}
