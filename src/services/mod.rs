// Service module exports

pub mod columns;
pub mod grid;
pub mod overlap;
pub mod positioning;
pub mod selection;
pub mod settings;
