use rand::seq::SliceRandom;
use rand::Rng;
use shared::models::NewCandidate;
use crate::utils::{unix_millis, IMAGE_BASE_URL};

pub const AVAILABLE_PARTIES: [&str; 10] = [
    "PSD", "PNL", "USR", "AUR", "UDMR", "PMP", "PRO România", "Forța Dreptei", "REPER", "SOS România",
];

pub const SAMPLE_DESCRIPTIONS: [&str; 15] = [
    "Experienced politician with focus on economic development.",
    "Advocate for social justice and equality.",
    "Expert in environmental protection and sustainability.",
    "Former business leader with strong management skills.",
    "Dedicated to improving healthcare systems.",
    "Champion of educational reform and innovation.",
    "Specialist in technology and digital transformation.",
    "Committed to rural development and agriculture.",
    "Expert in international relations and diplomacy.",
    "Advocate for women's rights and gender equality.",
    "Former military officer with leadership experience.",
    "Specialist in energy policy and renewable resources.",
    "Expert in legal reform and judicial systems.",
    "Champion of cultural preservation and arts.",
    "Dedicated to youth development and education.",
];

const FIRST_NAMES: [&str; 24] = [
    "Maria", "Ion", "Ana", "George", "Elena", "Dorin", "Sorina", "Vlad",
    "Roxana", "Andrei", "Ioana", "Mihai", "Cristina", "Alexandru", "Gabriela", "Radu",
    "Daniela", "Stefan", "Irina", "Bogdan", "Laura", "Adrian", "Simona", "Catalin",
];

const LAST_NAMES: [&str; 24] = [
    "Popescu", "Ionescu", "Vasilescu", "Radu", "Munteanu", "Lungu", "Dima", "Stoica",
    "Pavel", "Dobre", "Constantin", "Georgescu", "Stan", "Marin", "Tudor", "Florea",
    "Nistor", "Barbu", "Ene", "Mocanu", "Preda", "Ilie", "Sandu", "Cojocaru",
];

const SEED: [(&str, &str, &str); 10] = [
    ("Maria Popescu", "Supports education and digitalization.", "PSD"),
    ("Ion Ionescu", "Promotes rural development.", "PNL"),
    ("Ana Vasilescu", "Former Minister of Health.", "USR"),
    ("George Radu", "Technology expert.", "AUR"),
    ("Elena Munteanu", "Women's rights activist.", "UDMR"),
    ("Dorin Lungu", "Experienced lawyer.", "PMP"),
    ("Sorina Dima", "Environmental activist.", "PRO România"),
    ("Vlad Stoica", "Energy sector entrepreneur.", "Forța Dreptei"),
    ("Roxana Pavel", "University professor.", "REPER"),
    ("Andrei Dobre", "Former Mayor of Bucharest.", "SOS România"),
];

pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ion");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Popescu");
    format!("{first} {last}")
}

/// Builds an unsaved random candidate. Inserting it is up to the caller.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> NewCandidate {
    let description = SAMPLE_DESCRIPTIONS.choose(rng).copied().unwrap_or(SAMPLE_DESCRIPTIONS[0]);
    let party = AVAILABLE_PARTIES.choose(rng).copied().unwrap_or(AVAILABLE_PARTIES[0]);
    let fraction: u16 = rng.gen_range(0..10_000);

    NewCandidate {
        name: full_name(rng),
        description: description.to_string(),
        party: party.to_string(),
        image: format!("{}?random={}.{:04}", IMAGE_BASE_URL, unix_millis(), fraction),
    }
}

/// Reference candidates loaded at startup, in id order.
pub fn seed_candidates() -> Vec<NewCandidate> {
    SEED.iter()
        .enumerate()
        .map(|(i, (name, description, party))| NewCandidate {
            name: name.to_string(),
            description: description.to_string(),
            party: party.to_string(),
            image: format!("{}?random={}", IMAGE_BASE_URL, i + 1),
        })
        .collect()
}
