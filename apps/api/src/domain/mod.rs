pub mod comment;
pub mod shared;
