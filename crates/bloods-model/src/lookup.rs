use std::collections::HashMap;

/// Catalog names indexed by a folded key, so user input such as
/// "stroke/tia" or "  Heart  failure" resolves to the canonical spelling.
#[derive(Debug, Clone, Default)]
pub struct NameLookup {
    map: HashMap<String, String>,
}

impl NameLookup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            map.entry(fold(name)).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    /// Canonical spelling of `name`, if it is in the catalog.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&fold(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&fold(name))
    }
}

fn fold(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
