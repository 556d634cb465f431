//! Core module - Templates and file scaffolding

pub mod config;
pub mod scaffold;
pub mod template;
pub mod utils;
