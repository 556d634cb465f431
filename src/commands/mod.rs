//! Commands module

pub mod component;
