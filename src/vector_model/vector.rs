use std::fmt::{Display, Formatter};

use log::debug;

use crate::vector_error::VectorError;

/// mathmatic vector, a point or displacement in the plane
///
/// Every operation returns a new `Vector`, neither `self` nor any operand is modified.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ORIGIN: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// unit vector with the same direction
    ///
    /// zero vector gives NaN components, use [`Vector::try_normalized`] to catch it
    pub fn normalized(&self) -> Vector {
        let length = self.length();
        Vector::new(self.x / length, self.y / length)
    }

    pub fn try_normalized(&self) -> Result<Vector, VectorError> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            debug!("refuse to normalize degenerate vector {}", self);
            return Err(vector_err!(&format!(
                "can not normalize vector with length {}: {}",
                length,
                self.to_str()
            )));
        }
        Ok(Vector::new(self.x / length, self.y / length))
    }

    /// euclidean norm
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &Vector) -> f64 {
        Vector::subtract(self, other).length()
    }

    /// debug text, not meant to be parsed back
    pub fn to_str(&self) -> String {
        format!("x = {} y = {}", self.x, self.y)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x = {} y = {}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from(value: (f64, f64)) -> Self {
        Vector::new(value.0, value.1)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

#[cfg(test)]
mod test_vector {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};

    #[test]
    fn test_length_and_distance() {
        let v = Vector::new(3.0, 4.0);
        assert!(5.0_f64.approx_eq(v.length(), F64Margin::default()));

        let a = Vector::new(1.0, 1.0);
        let b = Vector::new(4.0, 5.0);
        assert!(5.0_f64.approx_eq(a.distance(&b), F64Margin::default()));
        assert!(5.0_f64.approx_eq(b.distance(&a), F64Margin::default()));
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_normalized_has_unit_length() {
        let samples = [
            Vector::new(3.0, 4.0),
            Vector::new(-0.001, 250.0),
            Vector::new(1e6, -1e6),
            Vector::new(-7.5, 0.0),
        ];
        for v in samples {
            let n = v.normalized();
            assert!((n.length() - 1.0).abs() < 1e-9, "{}", n);
            // same direction
            assert!(Vector::dot(&n, &v) > 0.0);
        }
    }

    #[test]
    fn test_normalized_zero_vector_is_nan() {
        let n = Vector::ORIGIN.normalized();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
    }

    #[test]
    fn test_try_normalized() {
        let _ = env_logger::builder().is_test(true).try_init();
        let n = Vector::new(0.0, -2.0).try_normalized().unwrap();
        assert_eq!(n, Vector::new(0.0, -1.0));

        let err = Vector::ORIGIN.try_normalized().unwrap_err();
        assert!(err.to_string().starts_with("[VectorError]: "));
        assert!(Vector::new(f64::INFINITY, 1.0).try_normalized().is_err());
        assert!(Vector::new(f64::NAN, 1.0).try_normalized().is_err());
    }

    #[test]
    fn test_to_str() {
        let v = Vector::new(1.5, -2.0);
        assert_eq!(v.to_str(), "x = 1.5 y = -2");
        assert_eq!(format!("{}", v), v.to_str());
    }

    #[test]
    fn test_nan_propagates() {
        let v = Vector::new(f64::NAN, 1.0);
        assert!(v.length().is_nan());
        assert!(v.scaled(2.0, 2.0).x.is_nan());
    }

    #[test]
    fn test_tuple_conversion() {
        let v: Vector = (2.0, 3.0).into();
        assert_eq!(v, Vector::new(2.0, 3.0));
        let t: (f64, f64) = v.into();
        assert_eq!(t, (2.0, 3.0));
        assert_eq!(Vector::default(), Vector::ORIGIN);
    }
}
