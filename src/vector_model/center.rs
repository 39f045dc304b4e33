use log::debug;

use super::*;
use crate::vector_error::VectorError;

impl Vector {
    /// center of the axis aligned bounding box of `vectors`, not the mean
    ///
    /// `None` for empty input
    pub fn get_center(vectors: &[Vector]) -> Option<Vector> {
        let first = vectors.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for v in vectors {
            if v.x < min_x {
                min_x = v.x;
            }
            if v.x > max_x {
                max_x = v.x;
            }
            if v.y < min_y {
                min_y = v.y;
            }
            if v.y > max_y {
                max_y = v.y;
            }
        }
        Some(Vector::new((min_x + max_x) * 0.5, (min_y + max_y) * 0.5))
    }

    pub fn try_center(vectors: &[Vector]) -> Result<Vector, VectorError> {
        Vector::get_center(vectors).ok_or_else(|| {
            debug!("bounding box center requested for empty point set");
            vector_err!("can not get center of empty vector set")
        })
    }

    /// centroid, the arithmetic mean of `vectors`
    ///
    /// empty input divides by zero and gives NaN components,
    /// use [`Vector::try_weighted_center`] to get an error instead
    pub fn get_weighted_center(vectors: &[Vector]) -> Vector {
        let sum = vectors
            .iter()
            .fold(Vector::ORIGIN, |acc, v| Vector::add(&acc, v));
        let count = vectors.len() as f64;
        Vector::new(sum.x / count, sum.y / count)
    }

    pub fn try_weighted_center(vectors: &[Vector]) -> Result<Vector, VectorError> {
        if vectors.is_empty() {
            debug!("weighted center requested for empty point set");
            return Err(vector_err!("can not get weighted center of empty vector set"));
        }
        Ok(Vector::get_weighted_center(vectors))
    }
}
