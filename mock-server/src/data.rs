//! Seed catalogue served by the mock backend.

use crate::Animal;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_animals() -> Vec<Animal> {
    vec![
        Animal {
            id: 1,
            nome: "Thor".to_string(),
            raca: "Labrador".to_string(),
            idade: "3 anos".to_string(),
            porte: "Grande".to_string(),
            localizacao: "São Paulo, SP".to_string(),
            historia: "Resgatado de uma rodovia, hoje adora correr no parque.".to_string(),
            temperamento: strings(&["Ativo", "Sociável", "Brincalhão"]),
            lar_ideal: "Casa com quintal e tutores com tempo para passeios longos.".to_string(),
            imagem_url: "https://images.adoteai.example/thor.jpg".to_string(),
            fotos: strings(&["https://images.adoteai.example/thor-2.jpg"]),
            disponivel: true,
            vacinas_tomadas: strings(&["Raiva", "V10 (Polivalente)"]),
            vacinas_pendentes: strings(&["Reforço V10"]),
        },
        Animal {
            id: 2,
            nome: "Mel".to_string(),
            raca: "SRD".to_string(),
            idade: "6 anos".to_string(),
            porte: "Pequeno".to_string(),
            localizacao: "Campinas, SP".to_string(),
            historia: "Viveu com uma senhora idosa e está acostumada a rotina tranquila.".to_string(),
            temperamento: strings(&["Calmo", "Carinhoso"]),
            lar_ideal: "Apartamento silencioso.".to_string(),
            imagem_url: "https://images.adoteai.example/mel.jpg".to_string(),
            fotos: Vec::new(),
            disponivel: true,
            vacinas_tomadas: strings(&["Raiva", "V10 (Polivalente)", "Giárdia"]),
            vacinas_pendentes: Vec::new(),
        },
        Animal {
            id: 3,
            nome: "Pipoca".to_string(),
            raca: "Vira-lata".to_string(),
            idade: "1 ano".to_string(),
            porte: "Médio".to_string(),
            localizacao: "Santos, SP".to_string(),
            historia: "Encontrada em uma feira, ainda desconfia de estranhos.".to_string(),
            temperamento: strings(&["Tímido", "Carinhoso"]),
            lar_ideal: "Família paciente, sem outros cães.".to_string(),
            imagem_url: "https://images.adoteai.example/pipoca.jpg".to_string(),
            fotos: Vec::new(),
            disponivel: true,
            vacinas_tomadas: strings(&["Raiva"]),
            vacinas_pendentes: strings(&["Leishmaniose", "Reforço V10"]),
        },
        Animal {
            id: 4,
            nome: "Bolt".to_string(),
            raca: "Border Collie".to_string(),
            idade: "2 anos".to_string(),
            porte: "Médio".to_string(),
            localizacao: "Sorocaba, SP".to_string(),
            historia: "Já foi adotado.".to_string(),
            temperamento: strings(&["Ativo"]),
            lar_ideal: "Sítio.".to_string(),
            imagem_url: "https://images.adoteai.example/bolt.jpg".to_string(),
            fotos: Vec::new(),
            disponivel: false,
            vacinas_tomadas: strings(&["Raiva", "V10 (Polivalente)"]),
            vacinas_pendentes: Vec::new(),
        },
    ]
}
