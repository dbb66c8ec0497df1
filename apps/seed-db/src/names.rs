use rand::Rng;
use rand::seq::SliceRandom;

const COMPANY_PREFIXES: &[&str] = &[
    "Acme", "Blue", "Bright", "Crescent", "Delta", "Evergreen", "Golden", "Granite", "Harbor",
    "Iron", "Lakeside", "Maple", "Northwind", "Pioneer", "Quantum", "Redwood", "Silver", "Summit",
    "Union", "Vertex",
];

const COMPANY_TRADES: &[&str] = &[
    "Analytics", "Builders", "Consulting", "Dynamics", "Foods", "Freight", "Holdings", "Industries",
    "Labs", "Logistics", "Media", "Networks", "Robotics", "Solutions", "Systems", "Textiles",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "Group", "and Sons", "GmbH", "PLC"];

const FIRST_NAMES: &[&str] = &[
    "Alice", "Amir", "Beatriz", "Bob", "Chen", "Clara", "David", "Elena", "Farah", "George",
    "Hana", "Ivan", "Jamal", "Julia", "Kenji", "Laura", "Mateo", "Nadia", "Oliver", "Priya",
    "Quinn", "Rosa", "Samuel", "Tomas", "Uma", "Victor", "Wei", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Costa", "Dubois", "Evans", "Fischer", "Garcia", "Hughes", "Ito", "Jensen",
    "Kowalski", "Lopez", "Miller", "Nakamura", "Okafor", "Petrov", "Rossi", "Schmidt", "Silva",
    "Taylor", "Novak", "Walker", "Young",
];

fn pick<'a>(rng: &mut impl Rng, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

pub(crate) fn company_name(rng: &mut impl Rng) -> String {
    format!(
        "{} {} {}",
        pick(rng, COMPANY_PREFIXES),
        pick(rng, COMPANY_TRADES),
        pick(rng, COMPANY_SUFFIXES)
    )
}

pub(crate) fn person_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}
