//! Pre-flight validation of the login and match forms.
//!
//! Checks run before any request is built. Every field is checked so a form
//! can show all of its errors at once.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{LoginRequest, MatchRequest};

pub const EMAIL_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 100;

pub const SPACE_MIN_M2: u32 = 20;
pub const SPACE_MAX_M2: u32 = 300;
pub const TIME_MIN_HOURS: f64 = 1.0;
pub const TIME_MAX_HOURS: f64 = 8.0;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Syntactic email check. Leading dots and consecutive dots in the local
/// part are rejected.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.contains("..") && EMAIL_RE.is_match(email)
}

/// Per-field messages for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub senha: Option<&'static str>,
}

impl LoginFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.senha.is_none()
    }
}

impl fmt::Display for LoginFieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.email, self.senha].into_iter().flatten().collect();
        write!(f, "{}", messages.join("; "))
    }
}

pub fn validate_login(input: &LoginRequest) -> Result<(), LoginFieldErrors> {
    let mut errors = LoginFieldErrors::default();

    // The length message wins when both checks fail.
    if input.email.chars().count() > EMAIL_MAX_LEN {
        errors.email = Some("Email muito longo");
    } else if !is_valid_email(&input.email) {
        errors.email = Some("Email inválido");
    }

    let password_len = input.senha.chars().count();
    if password_len < PASSWORD_MIN_LEN {
        errors.senha = Some("Senha deve ter pelo menos 6 caracteres");
    } else if password_len > PASSWORD_MAX_LEN {
        errors.senha = Some("Senha muito longa");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Per-field messages for the match questionnaire. The temperament is
/// already range-checked by its type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFieldErrors {
    pub espaco_em_casa: Option<&'static str>,
    pub tempo_disponivel: Option<&'static str>,
}

impl MatchFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.espaco_em_casa.is_none() && self.tempo_disponivel.is_none()
    }
}

impl fmt::Display for MatchFieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.espaco_em_casa, self.tempo_disponivel]
            .into_iter()
            .flatten()
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

pub fn validate_match(input: &MatchRequest) -> Result<(), MatchFieldErrors> {
    let mut errors = MatchFieldErrors::default();

    if !(SPACE_MIN_M2..=SPACE_MAX_M2).contains(&input.espaco_em_casa) {
        errors.espaco_em_casa = Some("Espaço deve estar entre 20 e 300 m²");
    }
    if !(TIME_MIN_HOURS..=TIME_MAX_HOURS).contains(&input.tempo_disponivel) {
        errors.tempo_disponivel = Some("Tempo deve estar entre 1 e 8 horas por dia");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
