// Randomized unit-conversion test generation checked against an external oracle

pub mod case;
pub mod error;
pub mod generator;
pub mod oracle;


pub use case::{render_preamble, CompoundUnit, FuzzCase, Operator};
pub use error::{GenerateError, OracleError};
pub use generator::{FuzzGenerator, RetryPolicy};
pub use oracle::{classify, Oracle, UnitsOracle};
