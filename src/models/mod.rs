pub mod health;
pub mod module;

pub use health::HealthSummary;
pub use module::{ModuleCard, ModuleDetail};
