pub mod datetime;
pub mod dto;
pub mod use_case;
pub mod validation;
