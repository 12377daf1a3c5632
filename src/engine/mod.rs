pub mod classifier;
pub mod memory;
pub mod navigator;
pub mod runstate;
pub mod scheduler;
pub mod watchdog;
