mod health;
mod samples;

pub use health::health_check;
pub use samples::list_samples;
