//! Comment board backend: comments with a signed like counter, served over
//! a JSON HTTP API and stored in PostgreSQL.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
