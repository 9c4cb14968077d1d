//! Core functionality for cursogen
//!
//! This crate contains the course-content pipeline: text extraction from
//! uploaded documents, parsing and validation of course metadata, artifact
//! generation through a text-generation backend, and persistent storage of
//! submitted courses.

pub mod config;
pub mod content;
pub mod extract;
pub mod feedback;
pub mod llm;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod service;
pub mod store;
pub mod validate;
