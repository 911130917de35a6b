pub mod cleaner;
pub mod configurations;
pub mod logger;
pub mod targets;
