pub mod health;
pub mod purchases;
