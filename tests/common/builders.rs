//! Test builders: ergonomic constructors for `Entity` and whole catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use dex_core::Entity;

// ---------------------------------------------------------------------------
// EntityBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Entity`] test fixtures.
///
/// # Example
///
/// ```rust
/// let raichu = EntityBuilder::new("Raichu")
///     .tag("Electric")
///     .strength(1200.0)
///     .build();
/// ```
pub struct EntityBuilder {
    name: String,
    tags: Vec<String>,
    strength: Option<f64>,
    image: String,
}

impl EntityBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            image: format!("https://img.example/{}.png", name.to_lowercase()),
            name,
            tags: Vec::new(),
            strength: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn build(self) -> Entity {
        Entity {
            name: self.name,
            tags: self.tags,
            strength: self.strength,
            image: self.image,
        }
    }
}

/// Build a catalog from `(name, tags, strength)` triples.
pub fn catalog_of(rows: &[(&str, &[&str], Option<f64>)]) -> Vec<Entity> {
    rows.iter()
        .map(|(name, tags, strength)| {
            let mut b = EntityBuilder::new(*name);
            for t in *tags {
                b = b.tag(*t);
            }
            if let Some(s) = strength {
                b = b.strength(*s);
            }
            b.build()
        })
        .collect()
}
