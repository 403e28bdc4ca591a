//! Command modules for rankctl CLI

pub mod serve;
pub mod simulate;
