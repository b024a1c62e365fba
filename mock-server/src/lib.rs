use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

pub mod config;
pub mod data;
pub mod matching;

pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "secret1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i64,
    pub nome: String,
    pub raca: String,
    pub idade: String,
    pub porte: String,
    pub localizacao: String,
    pub historia: String,
    pub temperamento: Vec<String>,
    pub lar_ideal: String,
    pub imagem_url: String,
    pub fotos: Vec<String>,
    pub disponivel: bool,
    pub vacinas_tomadas: Vec<String>,
    pub vacinas_pendentes: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub nome: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub espaco_em_casa: u32,
    pub tempo_disponivel: f64,
    pub preferencia_temperamento: u8,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal: Option<Animal>,
    pub match_score: u32,
    pub ia_reasoning: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

type ApiFailure = (StatusCode, Json<ErrorBody>);

fn failure(status: StatusCode, message: &str) -> ApiFailure {
    (
        status,
        Json(ErrorBody {
            success: false,
            message: message.to_string(),
        }),
    )
}

pub type Db = Arc<Vec<Animal>>;

/// Router over the seeded catalogue.
pub fn app() -> Router {
    app_with(data::seed_animals())
}

pub fn app_with(animals: Vec<Animal>) -> Router {
    let db: Db = Arc::new(animals);
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/match", post(find_match))
        .route("/api/animals", get(list_animals))
        .route("/api/animals/{id}", get(get_animal))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn login(Json(input): Json<LoginRequest>) -> (StatusCode, Json<LoginResponse>) {
    if input.email != DEMO_EMAIL || input.senha != DEMO_PASSWORD {
        info!(email = %input.email, "rejected login");
        return (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                success: false,
                token: None,
                user: None,
                message: Some("Credenciais inválidas".to_string()),
            }),
        );
    }

    let user = User {
        id: 1,
        email: DEMO_EMAIL.to_string(),
        nome: "User".to_string(),
    };
    (
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            token: Some(Uuid::new_v4().to_string()),
            user: Some(user),
            message: None,
        }),
    )
}

async fn find_match(
    State(db): State<Db>,
    Json(input): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiFailure> {
    if !(1..=4).contains(&input.preferencia_temperamento) {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            "Preferência de temperamento inválida",
        ));
    }

    let response = match matching::best_match(&db, &input) {
        Some((animal, score)) => MatchResponse {
            success: true,
            ia_reasoning: matching::reasoning(animal, &input),
            animal: Some(animal.clone()),
            match_score: score,
        },
        None => MatchResponse {
            success: false,
            animal: None,
            match_score: 0,
            ia_reasoning: String::new(),
        },
    };
    Ok(Json(response))
}

async fn list_animals(State(db): State<Db>) -> Json<Vec<Animal>> {
    Json(db.to_vec())
}

async fn get_animal(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Animal>, ApiFailure> {
    db.iter()
        .find(|animal| animal.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Animal não encontrado"))
}
