pub mod squared_difference;

pub use squared_difference::squared_difference_op;
