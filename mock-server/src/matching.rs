//! Deterministic stand-in for the AI matcher.
//!
//! The real backend delegates scoring to a model. Tests only need a score in
//! 0-100 that depends on the questionnaire, so this one adds up three fits:
//! living space against size, free time against energy, and the preferred
//! temperament against the animal's tags.

use crate::{Animal, MatchRequest};

fn temperament_label(preference: u8) -> &'static str {
    match preference {
        1 => "Calmo",
        2 => "Ativo",
        3 => "Tímido",
        _ => "Sociável",
    }
}

fn minimum_space(porte: &str) -> u32 {
    match porte {
        "Grande" => 100,
        "Médio" => 50,
        _ => 20,
    }
}

fn is_energetic(animal: &Animal) -> bool {
    animal.temperamento.iter().any(|t| t == "Ativo" || t == "Brincalhão")
}

pub fn score(animal: &Animal, input: &MatchRequest) -> u32 {
    let mut score = 40;
    if input.espaco_em_casa >= minimum_space(&animal.porte) {
        score += 20;
    }
    if !is_energetic(animal) || input.tempo_disponivel >= 3.0 {
        score += 15;
    }
    let wanted = temperament_label(input.preferencia_temperamento);
    if animal.temperamento.iter().any(|t| t == wanted) {
        score += 25;
    }
    score.min(100)
}

/// Highest-scoring available animal; ties go to the lowest id.
pub fn best_match<'a>(animals: &'a [Animal], input: &MatchRequest) -> Option<(&'a Animal, u32)> {
    animals
        .iter()
        .filter(|animal| animal.disponivel)
        .map(|animal| (animal, score(animal, input)))
        .fold(None, |best, candidate| match best {
            Some((_, best_score)) if best_score >= candidate.1 => best,
            _ => Some(candidate),
        })
}

pub fn reasoning(animal: &Animal, input: &MatchRequest) -> String {
    format!(
        "{} ({}, porte {}) combina com um lar de {}m² e {} horas diárias de dedicação. Temperamento: {}.",
        animal.nome,
        animal.raca,
        animal.porte.to_lowercase(),
        input.espaco_em_casa,
        input.tempo_disponivel,
        animal.temperamento.join(", ")
    )
}
