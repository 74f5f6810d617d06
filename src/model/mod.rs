pub mod config;
pub mod mutation;
pub mod pileup;
pub mod types;
