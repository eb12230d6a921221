//! Assurance Finder - guided discovery of AI-assurance techniques
//!
//! This crate narrows a curated catalog of assurance techniques through a
//! short, adaptive sequence of questions and explains why each surviving
//! technique fits.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
