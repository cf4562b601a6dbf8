pub mod health;
pub mod tracks;
