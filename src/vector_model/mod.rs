mod approx;
mod center;
mod ops;
mod transform;
mod vector;

pub use self::vector::*;
