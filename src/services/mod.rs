// Service module exports

pub mod grouping;
pub mod settings;
