//! `std::ops` sugar over the n-ary operators, plus method forms on [`Node`].

use std::ops::{Add, Mul, Sub};

use crate::node::Node;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::add::add_nodes;
use crate::ops::arithmetic::mul::mul_nodes;
use crate::ops::arithmetic::pow::powf_op;
use crate::ops::arithmetic::sub::sub_nodes;
use crate::ops::loss::squared_difference_op;

impl Add for &Node {
    type Output = Node;

    fn add(self, rhs: Self) -> Node {
        add_nodes(&[self.clone(), rhs.clone()])
    }
}

impl Sub for &Node {
    type Output = Node;

    fn sub(self, rhs: Self) -> Node {
        sub_nodes(&[self.clone(), rhs.clone()])
    }
}

impl Mul for &Node {
    type Output = Node;

    fn mul(self, rhs: Self) -> Node {
        mul_nodes(&[self.clone(), rhs.clone()])
    }
}

impl Node {
    pub fn tanh(&self) -> Node {
        tanh_op(self)
    }

    pub fn powf(&self, exponent: f64) -> Node {
        powf_op(self, exponent)
    }

    pub fn squared_difference(&self, other: &Node) -> Node {
        squared_difference_op(self, other)
    }
}
