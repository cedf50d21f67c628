pub mod config;
pub mod emit;
pub mod extract;
pub mod fuzz;
pub mod units;
