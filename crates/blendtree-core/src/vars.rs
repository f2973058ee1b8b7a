//! VariantMap: the per-tick variable environment read by clip bindings and
//! expressions.
//!
//! The map is built (or reused) by the caller each tick and is read-only from
//! the engine's point of view during a single evaluation pass. Keys are
//! unique; `set` is last-write-wins.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::value::Variant;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VariantMap {
    entries: HashMap<String, Variant>,
}

impl VariantMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: Variant) {
        self.entries.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<&Variant> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numeric lookup with fallback. A present but non-numeric value falls
    /// back too, so a bad binding degrades rather than aborting the tick.
    pub fn lookup_float(&self, name: &str, fallback: f64) -> f64 {
        match self.entries.get(name) {
            Some(v) => v.as_float().unwrap_or_else(|| {
                log::warn!(
                    "variable '{name}' is {}, expected a number; using fallback",
                    v.kind().name()
                );
                fallback
            }),
            None => fallback,
        }
    }

    /// Boolean lookup with fallback, using the variant's native truthiness.
    pub fn lookup_bool(&self, name: &str, fallback: bool) -> bool {
        match self.entries.get(name) {
            Some(v) => v.is_truthy(),
            None => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_last_write_wins() {
        let mut vars = VariantMap::new();
        vars.set("x", Variant::Int(1));
        vars.set("x", Variant::Float(2.0));
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.lookup("x"), Some(&Variant::Float(2.0)));
    }

    #[test]
    fn fallback_lookups() {
        let mut vars = VariantMap::new();
        vars.set("speed", Variant::Float(1.5));
        vars.set("count", Variant::Int(3));
        vars.set("name", Variant::Vec3([0.0; 3]));
        vars.set("flag", Variant::Bool(false));

        assert_eq!(vars.lookup_float("speed", 0.0), 1.5);
        assert_eq!(vars.lookup_float("count", 0.0), 3.0);
        // non-numeric binding degrades to the fallback
        assert_eq!(vars.lookup_float("name", 7.0), 7.0);
        assert_eq!(vars.lookup_float("missing", 7.0), 7.0);

        assert!(!vars.lookup_bool("flag", true));
        assert!(vars.lookup_bool("count", false));
        assert!(vars.lookup_bool("missing", true));
    }
}
