mod health;
mod submit;

pub use health::health_handler;
pub use submit::submit_handler;
