//! Static catalogs used across harnesses.

use dex_core::Entity;

use crate::common::builders::catalog_of;

/// A slice of the real dataset, in the shape the public gist serves it.
pub const SAMPLE_JSON: &str = r#"[
  {"Name":"Bulbasaur","Types":["Grass","Poison"],"MaxCP":1071,"img":"http://img.example/1.png"},
  {"Name":"Charmander","Types":["Fire"],"MaxCP":955,"img":"http://img.example/4.png"},
  {"Name":"Squirtle","Types":["Water"],"MaxCP":1008,"img":"http://img.example/7.png"},
  {"Name":"Pikachu","Types":["Electric"],"MaxCP":887,"img":"http://img.example/25.png"},
  {"Name":"Raichu","Types":["Electric"],"MaxCP":2028,"img":"http://img.example/26.png"},
  {"Name":"Electabuzz","Types":["Electric"],"MaxCP":2119,"img":"http://img.example/125.png"},
  {"Name":"Electrode","Types":["Electric"],"MaxCP":1646,"img":"http://img.example/101.png"},
  {"Name":"Magnemite","Types":["Electric","Steel"],"MaxCP":890,"img":"http://img.example/81.png"},
  {"Name":"Mew","Types":["Psychic"],"MaxCP":3299,"img":"http://img.example/151.png"},
  {"Name":"Mewtwo","Types":["Psychic"],"MaxCP":4144,"img":"http://img.example/150.png"}
]"#;

/// The two-entity catalog most scenarios are written against.
pub fn pikachu_raichu() -> Vec<Entity> {
    catalog_of(&[
        ("Pikachu", &["Electric"], Some(1000.0)),
        ("Raichu", &["Electric"], Some(1200.0)),
    ])
}

/// [`SAMPLE_JSON`], parsed.
pub fn sample_catalog() -> Vec<Entity> {
    dex_catalog::parse_catalog(SAMPLE_JSON.as_bytes()).expect("sample catalog is valid")
}
