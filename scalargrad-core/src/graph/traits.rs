// scalargrad-core/src/graph/traits.rs
//
// `std::ops` sugar over the named operation functions. The operators take
// handles by value (`Value` is `Copy`) and panic on the one precondition
// the fallible functions report, mixing nodes from two different graphs.
// Plain `f64` operands are promoted to unlabeled leaf nodes, on whichever
// side of the operator they appear.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::graph::Value;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};

/// Two handles are equal when they designate the same node of the same
/// graph. Node contents are not compared.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for Value<'_> {}

impl<'g> Add for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Value<'g> {
        add_op(self, rhs).unwrap_or_else(|e| panic!("Value addition failed: {:?}", e))
    }
}

impl<'g> Add<f64> for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: f64) -> Value<'g> {
        let rhs = self.graph.leaf(rhs);
        add_op(self, rhs).unwrap_or_else(|e| panic!("Value addition failed: {:?}", e))
    }
}

impl<'g> Add<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Value<'g> {
        let lhs = rhs.graph.leaf(self);
        add_op(lhs, rhs).unwrap_or_else(|e| panic!("Value addition failed: {:?}", e))
    }
}

impl<'g> Sub for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Value<'g> {
        sub_op(self, rhs).unwrap_or_else(|e| panic!("Value subtraction failed: {:?}", e))
    }
}

impl<'g> Sub<f64> for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: f64) -> Value<'g> {
        let rhs = self.graph.leaf(rhs);
        sub_op(self, rhs).unwrap_or_else(|e| panic!("Value subtraction failed: {:?}", e))
    }
}

impl<'g> Sub<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Value<'g> {
        let lhs = rhs.graph.leaf(self);
        sub_op(lhs, rhs).unwrap_or_else(|e| panic!("Value subtraction failed: {:?}", e))
    }
}

impl<'g> Mul for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Value<'g> {
        mul_op(self, rhs).unwrap_or_else(|e| panic!("Value multiplication failed: {:?}", e))
    }
}

impl<'g> Mul<f64> for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: f64) -> Value<'g> {
        let rhs = self.graph.leaf(rhs);
        mul_op(self, rhs).unwrap_or_else(|e| panic!("Value multiplication failed: {:?}", e))
    }
}

impl<'g> Mul<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Value<'g> {
        let lhs = rhs.graph.leaf(self);
        mul_op(lhs, rhs).unwrap_or_else(|e| panic!("Value multiplication failed: {:?}", e))
    }
}

impl<'g> Div for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Value<'g> {
        div_op(self, rhs).unwrap_or_else(|e| panic!("Value division failed: {:?}", e))
    }
}

impl<'g> Div<f64> for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: f64) -> Value<'g> {
        let rhs = self.graph.leaf(rhs);
        div_op(self, rhs).unwrap_or_else(|e| panic!("Value division failed: {:?}", e))
    }
}

impl<'g> Div<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Value<'g> {
        let lhs = rhs.graph.leaf(self);
        div_op(lhs, rhs).unwrap_or_else(|e| panic!("Value division failed: {:?}", e))
    }
}

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self).unwrap_or_else(|e| panic!("Value negation failed: {:?}", e))
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_operator_forwards() {
        let graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(-3.0);
        assert_eq!((a + b).data(), -1.0);
        assert_eq!((a - b).data(), 5.0);
        assert_eq!((a * b).data(), -6.0);
        // Division is multiply-by-reciprocal-power, so compare with tolerance.
        assert_relative_eq!((a / b).data(), 2.0 / -3.0, epsilon = 1e-12);
        assert_eq!((-a).data(), -2.0);
    }

    #[test]
    fn test_scalar_promotion_both_sides() {
        let graph = Graph::new();
        let x = graph.leaf(4.0);
        assert_eq!((x + 1.0).data(), 5.0);
        assert_eq!((1.0 + x).data(), 5.0);
        assert_eq!((x - 1.0).data(), 3.0);
        assert_eq!((1.0 - x).data(), -3.0);
        assert_eq!((x * 2.0).data(), 8.0);
        assert_eq!((2.0 * x).data(), 8.0);
        assert_relative_eq!((x / 2.0).data(), 2.0, epsilon = 1e-12);
        assert_relative_eq!((2.0 / x).data(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(1.0);
        let alias = a;
        assert_eq!(a, alias);
        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "Value addition failed")]
    fn test_cross_graph_operator_panics() {
        let g1 = Graph::new();
        let g2 = Graph::new();
        let a = g1.leaf(1.0);
        let b = g2.leaf(2.0);
        let _ = a + b;
    }
}
