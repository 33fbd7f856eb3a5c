pub mod sse;

pub use sse::{sum_squared_error, Reduction, SquaredErrorLoss};
