//! Built-in language grammars

pub mod metta;
