//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod file_io;
pub mod interaction;
pub mod selection;
