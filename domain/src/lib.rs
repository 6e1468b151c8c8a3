pub mod error;
pub mod purchase;
