use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Animal, ErrorBody, LoginResponse, MatchResponse};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- auth ---

#[tokio::test]
async fn login_with_demo_account() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            r#"{"email":"user@example.com","senha":"secret1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: LoginResponse = body_json(resp).await;
    assert!(body.success);
    assert_eq!(body.user.unwrap().nome, "User");
    assert!(!body.token.unwrap().is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_returns_401_with_message() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            r#"{"email":"user@example.com","senha":"nope123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: LoginResponse = body_json(resp).await;
    assert!(!body.success);
    assert!(body.user.is_none());
    assert_eq!(body.message.as_deref(), Some("Credenciais inválidas"));
}

#[tokio::test]
async fn login_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/auth/login", r#"{"email":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- match ---

#[tokio::test]
async fn match_returns_scored_animal() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/match",
            r#"{"espacoEmCasa":40,"tempoDisponivel":1,"preferenciaTemperamento":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: MatchResponse = body_json(resp).await;
    assert!(body.success);
    assert_eq!(body.animal.unwrap().nome, "Mel");
    assert!(body.match_score <= 100);
    assert!(!body.ia_reasoning.is_empty());
}

#[tokio::test]
async fn match_rejects_unknown_temperament() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/match",
            r#"{"espacoEmCasa":40,"tempoDisponivel":1,"preferenciaTemperamento":9}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(!body.success);
}

#[tokio::test]
async fn match_without_available_animals_is_unsuccessful() {
    let resp = app_with(Vec::new())
        .oneshot(json_request(
            "POST",
            "/api/match",
            r#"{"espacoEmCasa":40,"tempoDisponivel":1,"preferenciaTemperamento":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body_bytes(resp).await;
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert!(body.get("animal").is_none());
}

// --- animals ---

#[tokio::test]
async fn list_animals_returns_catalogue() {
    let resp = app().oneshot(get("/api/animals")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animals: Vec<Animal> = body_json(resp).await;
    assert_eq!(animals.len(), 4);
    assert!(animals.iter().any(|a| !a.disponivel));
}

#[tokio::test]
async fn list_animals_empty_catalogue() {
    let resp = app_with(Vec::new()).oneshot(get("/api/animals")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animals: Vec<Animal> = body_json(resp).await;
    assert!(animals.is_empty());
}

#[tokio::test]
async fn get_animal_by_id() {
    let resp = app().oneshot(get("/api/animals/3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animal: Animal = body_json(resp).await;
    assert_eq!(animal.nome, "Pipoca");
    assert_eq!(animal.vacinas_pendentes.len(), 2);
}

#[tokio::test]
async fn get_animal_not_found() {
    let resp = app().oneshot(get("/api/animals/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.message, "Animal não encontrado");
}

#[tokio::test]
async fn get_animal_bad_id_returns_400() {
    let resp = app().oneshot(get("/api/animals/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_returns_404_with_empty_body() {
    let resp = app().oneshot(get("/animals")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}
