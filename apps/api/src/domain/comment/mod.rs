pub mod entity;
pub mod errors;
pub mod reaction;
pub mod repository;
