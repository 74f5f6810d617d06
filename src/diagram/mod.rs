pub mod aggregate;
pub mod resolve;
pub mod scale;
pub mod state;
