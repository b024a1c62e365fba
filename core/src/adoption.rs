//! The adoption visit form.
//!
//! Scheduling is confirmed locally; the backend has no endpoint for it yet.
//! The checks run in the order the form reports them: terms first, then the
//! date.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::Animal;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisitError {
    #[error("Você precisa aceitar os termos de responsabilidade para continuar.")]
    TermsNotAccepted,

    #[error("Por favor, selecione uma data para a visita.")]
    MissingDate,

    #[error("A data da visita não pode estar no passado.")]
    DateInPast,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitRequest {
    pub visit_date: Option<NaiveDate>,
    pub accepted_terms: bool,
}

/// A visit that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledVisit {
    pub animal_id: i64,
    pub animal_name: String,
    pub date: NaiveDate,
}

impl ScheduledVisit {
    /// Confirmation text, with the date in day/month/year form.
    pub fn confirmation(&self) -> String {
        format!(
            "Sua visita para conhecer {} foi agendada para {}. Entraremos em contato em breve!",
            self.animal_name,
            self.date.format("%d/%m/%Y")
        )
    }
}

/// Validate the form against `today`; the earliest allowed date is today.
pub fn schedule_visit(animal: &Animal, request: &VisitRequest, today: NaiveDate) -> Result<ScheduledVisit, VisitError> {
    if !request.accepted_terms {
        return Err(VisitError::TermsNotAccepted);
    }
    let date = request.visit_date.ok_or(VisitError::MissingDate)?;
    if date < today {
        return Err(VisitError::DateInPast);
    }
    Ok(ScheduledVisit {
        animal_id: animal.id,
        animal_name: animal.nome.clone(),
        date,
    })
}
