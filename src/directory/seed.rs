// Seed data for the city directory

use serde::Deserialize;
use std::collections::HashMap;

/// On-disk seed layout
///
/// ```toml
/// [cities]
/// moscow = ["Мир кофе", "Сладкоежка"]
/// ```
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub cities: HashMap<String, Vec<String>>,
}

/// Compiled-in seed used when no seed file is configured
pub fn builtin_seed() -> HashMap<String, Vec<String>> {
    let mut cities = HashMap::new();
    cities.insert(
        "moscow".to_string(),
        ["Мир кофе", "Сладкоежка", "Кофе и завтраки", "Сытый студент"]
            .iter()
            .map(ToString::to_string)
            .collect(),
    );
    cities
}
