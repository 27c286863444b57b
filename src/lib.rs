pub mod battle;
pub mod log_store;
pub mod rng;
