use std::ops::{Add, Mul, Neg, Sub};

use super::*;

impl Vector {
    /// `k * v`
    pub fn scalar(k: f64, v: &Vector) -> Vector {
        Vector::new(k * v.x, k * v.y)
    }

    pub fn dot(a: &Vector, b: &Vector) -> f64 {
        a.x * b.x + a.y * b.y
    }

    pub fn add(a: &Vector, b: &Vector) -> Vector {
        Vector::new(a.x + b.x, a.y + b.y)
    }

    /// `a - b`
    pub fn subtract(a: &Vector, b: &Vector) -> Vector {
        Vector::new(a.x - b.x, a.y - b.y)
    }
}

// operators delegate to the named functions above

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Self::Output {
        Vector::add(&self, &rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::subtract(&self, &rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::scalar(-1.0, &self)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Self::Output {
        Vector::scalar(k, &self)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Self::Output {
        Vector::scalar(self, &v)
    }
}
