// Export foundational arithmetic operations directly
pub mod add;
pub mod mul;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use mul::mul_op;
pub use pow::{pow_op, powf_op};
pub use sub::sub_op;
