use std::f64::consts::PI;

use super::*;

fn deg_to_rad(angle_in_deg: f64) -> f64 {
    angle_in_deg / 180.0 * PI
}

// rows of a 3x3 rotation applied to (x, y, 0), z of the result is dropped
fn project_rotation(rows: [[f64; 3]; 3], v: &Vector) -> Vector {
    let (x, y, z) = (v.x, v.y, 0.0);
    let mut out = [0.0_f64; 3];
    for (o, m) in out.iter_mut().zip(rows.iter()) {
        *o = m[0] * x + m[1] * y + m[2] * z;
    }
    Vector::new(out[0], out[1])
}

// translate by -center, transform, translate back
fn about_pivot<F>(v: &Vector, center: Option<&Vector>, transform: F) -> Vector
where
    F: Fn(&Vector) -> Vector,
{
    match center {
        Some(c) => Vector::add(&transform(&Vector::subtract(v, c)), c),
        None => transform(v),
    }
}

impl Vector {
    /// scale each axis independently about the origin
    pub fn scaled(&self, x_scale: f64, y_scale: f64) -> Vector {
        Vector::new(x_scale * self.x, y_scale * self.y)
    }

    /// scale each axis independently about `center`
    pub fn scaled_about_point(&self, x_scale: f64, y_scale: f64, center: &Vector) -> Vector {
        about_pivot(self, Some(center), |v| v.scaled(x_scale, y_scale))
    }

    /// rotate about the origin, angle measured in degrees and in the counterclockwise direction
    ///
    /// counterclockwise holds for a y-up frame, on a y-down screen the rotation looks clockwise
    pub fn rotated(&self, angle_in_deg: f64) -> Vector {
        let rad = deg_to_rad(angle_in_deg);
        let (sin, cos) = rad.sin_cos();
        Vector::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// rotate about `center`, angle in degrees
    pub fn rotated_about_point(&self, angle_in_deg: f64, center: &Vector) -> Vector {
        about_pivot(self, Some(center), |v| v.rotated(angle_in_deg))
    }

    /// tilt the point as if it were `(x, y, 0)` rotated about the X axis,
    /// then drop z. Result is `(x, y * cos)`, lossy for angles other than multiples of 360
    ///
    /// `None` center rotates about the origin
    pub fn rotate_about_x_axis(&self, angle_in_deg: f64, center: Option<&Vector>) -> Vector {
        let (sin, cos) = deg_to_rad(angle_in_deg).sin_cos();
        let rows = [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]];
        about_pivot(self, center, |v| project_rotation(rows, v))
    }

    /// same as [`Vector::rotate_about_x_axis`] for the Y axis, result is `(x * cos, y)`
    pub fn rotate_about_y_axis(&self, angle_in_deg: f64, center: Option<&Vector>) -> Vector {
        let (sin, cos) = deg_to_rad(angle_in_deg).sin_cos();
        let rows = [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]];
        about_pivot(self, center, |v| project_rotation(rows, v))
    }
}
