//! Lambda handlers and request processing

pub mod health;
pub mod helpers;
pub mod parsing;
pub mod submit;
pub mod update_intent;
