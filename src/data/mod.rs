//! Data layer: catalog types and loading.
//!
//! Architecture:
//! ```text
//!   unsigs.json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Catalog
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Catalog  │  (id, UnsigRecord) in file order
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ classify  │  per-record predicates → matching ids
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
