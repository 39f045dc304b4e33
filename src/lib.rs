//! 2D vector math kit
//!
//! A single [`Vector`](vector_model::Vector) value type: length, distance, normalization,
//! scaling and rotation about the origin or about a pivot, pseudo 3D axis tilts,
//! bounding box center and centroid of point sets, and basic vector algebra.
//!
//! ```
//! use vector2d::vector_model::*;
//!
//! let v = Vector::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let turned = v.rotated_about_point(90.0, &Vector::new(3.0, 0.0));
//! assert!(turned.approx_eq_eps(&Vector::new(-1.0, 0.0), 1e-9));
//!
//! assert_eq!(Vector::get_center(&[]), None);
//! ```

#[macro_use]
pub mod vector_error;
pub mod vector_model;
