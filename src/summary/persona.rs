//! Personas used to flavour the prose of generated summaries.
use rand::seq::IndexedRandom;

/// Built-in personas the summaries impersonate.
pub const DEFAULT_PERSONAS: &[&str] = &[
    "William Shakespeare",
    "Yoda",
    "a pirate captain",
    "Sherlock Holmes",
    "Carl Sagan",
    "a medieval town crier",
];

/// Chooses a persona each time a prompt is built.
pub trait PersonaPicker: Send + Sync {
    fn pick(&self) -> String;
}

/// Uniform random choice over a persona list.
///
/// Every entry, including the first, can be drawn. An empty list falls back
/// to the built-in personas.
#[derive(Debug, Clone)]
pub struct RandomPersona {
    personas: Vec<String>,
}

impl RandomPersona {
    pub fn new(personas: Vec<String>) -> Self {
        let personas = if personas.is_empty() {
            DEFAULT_PERSONAS.iter().map(|p| p.to_string()).collect()
        } else {
            personas
        };

        Self { personas }
    }
}

impl Default for RandomPersona {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl PersonaPicker for RandomPersona {
    fn pick(&self) -> String {
        self.personas
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| DEFAULT_PERSONAS[0].to_string())
    }
}

/// Always the same persona.
#[derive(Debug, Clone)]
pub struct FixedPersona(pub String);

impl PersonaPicker for FixedPersona {
    fn pick(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn random_persona_draws_from_list() {
        let picker = RandomPersona::new(vec!["a".into(), "b".into()]);

        for _ in 0..50 {
            let persona = picker.pick();
            assert!(persona == "a" || persona == "b");
        }
    }

    #[test]
    fn random_persona_can_draw_every_entry() {
        let picker = RandomPersona::new(vec!["first".into(), "second".into()]);

        let seen: HashSet<String> = (0..500).map(|_| picker.pick()).collect();

        assert!(seen.contains("first"));
        assert!(seen.contains("second"));
    }

    #[test]
    fn empty_list_uses_defaults() {
        let picker = RandomPersona::new(vec![]);
        assert!(DEFAULT_PERSONAS.contains(&picker.pick().as_str()));
    }

    #[test]
    fn fixed_persona_is_stable() {
        let picker = FixedPersona("Yoda".into());
        assert_eq!(picker.pick(), "Yoda");
        assert_eq!(picker.pick(), "Yoda");
    }
}
