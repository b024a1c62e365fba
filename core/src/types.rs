//! Wire DTOs for the AdoteAI backend.
//!
//! # Design
//! Field names follow the backend's JSON (Portuguese, camelCase) through
//! serde attributes. These types are defined independently from the
//! mock-server crate; the integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub nome: String,
}

/// Request payload for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            senha: senha.into(),
        }
    }
}

/// Response of the login endpoint. Everything but `success` is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Temperament preference in the match questionnaire. Travels as the
/// integers 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Temperament {
    Calm = 1,
    Active = 2,
    Shy = 3,
    Sociable = 4,
}

impl Temperament {
    pub const ALL: [Temperament; 4] = [
        Temperament::Calm,
        Temperament::Active,
        Temperament::Shy,
        Temperament::Sociable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Temperament::Calm => "Calmo",
            Temperament::Active => "Ativo",
            Temperament::Shy => "Tímido",
            Temperament::Sociable => "Sociável",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Temperament::Calm => "Prefere um pet tranquilo e relaxado",
            Temperament::Active => "Gosta de brincadeiras e atividades",
            Temperament::Shy => "Busca um companheiro mais reservado",
            Temperament::Sociable => "Adora interação e novos amigos",
        }
    }
}

impl TryFrom<u8> for Temperament {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Temperament::Calm),
            2 => Ok(Temperament::Active),
            3 => Ok(Temperament::Shy),
            4 => Ok(Temperament::Sociable),
            other => Err(format!("temperament preference must be 1-4, got {other}")),
        }
    }
}

impl From<Temperament> for u8 {
    fn from(value: Temperament) -> Self {
        value as u8
    }
}

/// Request payload for `POST /api/match`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    /// Living space in square meters.
    pub espaco_em_casa: u32,
    /// Hours per day available for the pet.
    pub tempo_disponivel: f64,
    pub preferencia_temperamento: Temperament,
}

/// Raw response of the match endpoint. A failed match may omit everything
/// but `success`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub success: bool,
    #[serde(default)]
    pub animal: Option<Animal>,
    #[serde(default)]
    pub match_score: u32,
    #[serde(default)]
    pub ia_reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A successful match. `match_score` and `ia_reasoning` are exactly what the
/// backend sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub animal: Animal,
    pub match_score: u32,
    pub ia_reasoning: String,
}

/// An animal listed for adoption. Read-only on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i64,
    pub nome: String,
    pub raca: String,
    pub idade: String,
    pub porte: String,
    pub localizacao: String,
    pub historia: String,
    #[serde(default)]
    pub temperamento: Vec<String>,
    pub lar_ideal: String,
    pub imagem_url: String,
    #[serde(default)]
    pub fotos: Vec<String>,
    pub disponivel: bool,
    #[serde(default)]
    pub vacinas_tomadas: Vec<String>,
    #[serde(default)]
    pub vacinas_pendentes: Vec<String>,
}
