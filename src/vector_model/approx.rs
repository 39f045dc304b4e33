use float_cmp::{ApproxEq, F64Margin};

use super::*;

/// componentwise comparison, both `x` and `y` must be within `margin`
impl ApproxEq for Vector {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

impl Vector {
    pub fn approx_eq_default(&self, other: &Vector) -> bool {
        ApproxEq::approx_eq(*self, *other, F64Margin::default())
    }

    /// absolute tolerance `epsilon`, plus a few ulps for values far from zero
    pub fn approx_eq_eps(&self, other: &Vector, epsilon: f64) -> bool {
        ApproxEq::approx_eq(*self, *other, F64Margin { epsilon, ulps: 4 })
    }
}
