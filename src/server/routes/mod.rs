//! One router per resource. Each is self-contained and only touches its own table.

pub mod exercise;
pub mod goals;
pub mod health;
pub mod sleep;
pub mod todo;
pub mod wellness;
