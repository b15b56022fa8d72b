//! Domain layer: entities representing core business objects

pub mod entities;
