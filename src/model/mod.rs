pub mod history;
pub mod language;
pub mod sign;
pub mod translation;
