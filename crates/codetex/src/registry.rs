//! Per-conversion color name cache.

use std::collections::HashMap;

use codetex_palette::{color_name, Rgb};
use indexmap::IndexMap;

/// Names assigned to the colors of one conversion, in first-use order.
///
/// Distinct triplets whose nearest palette name coincides get numeric
/// suffixes (`Red`, `Red2`, ...), so every name is defined once.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    names: IndexMap<Rgb, String>,
    /// How many triplets claimed each base name
    claims: HashMap<String, usize>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for `rgb`, assigning one on first sight.
    pub fn name_for(&mut self, rgb: Rgb) -> &str {
        if !self.names.contains_key(&rgb) {
            let base = color_name(rgb.r, rgb.g, rgb.b);
            let claims = self.claims.entry(base.clone()).or_insert(0);
            *claims += 1;

            let name = if *claims == 1 {
                base
            } else {
                format!("{}{}", base, claims)
            };
            self.names.insert(rgb, name);
        }

        &self.names[&rgb]
    }

    pub fn get(&self, rgb: &Rgb) -> Option<&str> {
        self.names.get(rgb).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rgb, &str)> {
        self.names.iter().map(|(rgb, name)| (rgb, name.as_str()))
    }

    /// One `\definecolor{name}{RGB}{r,g,b}` line per entry.
    pub fn definitions(&self) -> String {
        self.iter()
            .map(|(rgb, name)| format!("\\definecolor{{{}}}{{RGB}}{{{}}}\n", name, rgb))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_cached() {
        let mut registry = ColorRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.name_for(Rgb::new(255, 0, 0)), "Red");
        assert_eq!(registry.name_for(Rgb::new(255, 0, 0)), "Red");
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = ColorRegistry::new();
        registry.name_for(Rgb::new(0, 0, 255));
        registry.name_for(Rgb::new(255, 0, 0));
        registry.name_for(Rgb::new(0, 0, 255));

        let names: Vec<&str> = registry.iter().map(|(_, name)| name).collect();
        assert_eq!(names, vec!["Blue", "Red"]);
    }

    #[test]
    fn test_shared_base_name_disambiguated() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.name_for(Rgb::new(255, 0, 0)), "Red");
        assert_eq!(registry.name_for(Rgb::new(254, 2, 1)), "Red2");
        assert_eq!(registry.name_for(Rgb::new(253, 1, 2)), "Red3");
        assert_eq!(registry.get(&Rgb::new(254, 2, 1)), Some("Red2"));
        assert_eq!(registry.get(&Rgb::new(0, 0, 0)), None);
    }

    #[test]
    fn test_definitions() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.definitions(), "");

        registry.name_for(Rgb::new(255, 0, 0));
        registry.name_for(Rgb::new(0, 0, 0));
        assert_eq!(
            registry.definitions(),
            "\\definecolor{Red}{RGB}{255,0,0}\n\\definecolor{Black}{RGB}{0,0,0}\n"
        );
    }
}
