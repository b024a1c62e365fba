//! Display helpers over `Animal` listings.

use crate::types::Animal;

/// Look up an animal in an already-fetched listing. `None` means the page
/// shows its "not found" view.
pub fn find_animal(animals: &[Animal], id: i64) -> Option<&Animal> {
    animals.iter().find(|animal| animal.id == id)
}

/// Animals still open for adoption, in listing order.
pub fn available(animals: &[Animal]) -> impl Iterator<Item = &Animal> {
    animals.iter().filter(|animal| animal.disponivel)
}

impl Animal {
    /// The main picture: `imagem_url`, else the first photo.
    pub fn cover_image(&self) -> Option<&str> {
        if !self.imagem_url.is_empty() {
            return Some(&self.imagem_url);
        }
        self.fotos.iter().map(String::as_str).find(|url| !url.is_empty())
    }

    /// Every picture for the profile carousel, cover first, without repeats.
    pub fn gallery(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = Vec::with_capacity(self.fotos.len() + 1);
        let candidates = std::iter::once(self.imagem_url.as_str()).chain(self.fotos.iter().map(String::as_str));
        for url in candidates {
            if !url.is_empty() && !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls
    }

    /// True once no vaccine is pending.
    pub fn is_fully_vaccinated(&self) -> bool {
        self.vacinas_pendentes.is_empty()
    }
}
