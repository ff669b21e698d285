use crate::*;

/// The DMP outputs quaternion components as fixed point numbers where `16384` corresponds to
/// `1.0`.
///
pub const QUATERNION_FIXED_POINT_SCALE: f32 = 16384.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion
{
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 4]> for Quaternion {
    fn from(values: [f32; 4]) -> Self {
        Self {
            w: values[0],
            x: values[1],
            y: values[2],
            z: values[3],
        }
    }
}

impl Quaternion
{
    /// Create a new quaternion with the given values.
    ///
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Returns the identity quaternion (no rotation)
    ///
    pub fn identity() -> Self {
        Quaternion {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Converts the raw `[w, x, y, z]` fixed point components the DMP writes into its FIFO packets
    /// into a unit scale quaternion.
    ///
    pub fn from_fixed_point(raw: [i16; 4]) -> Self {
        Quaternion {
            w: raw[0] as f32 / QUATERNION_FIXED_POINT_SCALE,
            x: raw[1] as f32 / QUATERNION_FIXED_POINT_SCALE,
            y: raw[2] as f32 / QUATERNION_FIXED_POINT_SCALE,
            z: raw[3] as f32 / QUATERNION_FIXED_POINT_SCALE,
        }
    }

    /// Inverse of `from_fixed_point`, components are rounded to the nearest fixed point step and
    /// saturate at the `i16` range.
    ///
    pub fn to_fixed_point(&self) -> [i16; 4] {
        let convert = |v: f32| libm::roundf(v * QUATERNION_FIXED_POINT_SCALE) as i16;
        [ convert(self.w), convert(self.x), convert(self.y), convert(self.z) ]
    }

    /// Builds the rotation of `angle` radians around the given axis, the axis does not need to be
    /// normalized.
    ///
    pub fn from_axis_angle(axis: &Vector, angle: f32) -> Self {
        let length = axis.magnitude();
        if length == 0.0 {
            return Quaternion::identity();
        }
        let s = libm::sinf(angle * 0.5) / length;
        Quaternion {
            w: libm::cosf(angle * 0.5),
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
        }
    }

    /// Get the magnitude of the quaternion.
    ///
    #[inline]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Direction of gravity in the sensor's body frame, for a device lying flat and level this
    /// is `(0, 0, 1)`.
    ///
    pub fn gravity(&self) -> Vector {
        Vector {
            x: 2.0 * (self.x * self.z - self.w * self.y),
            y: 2.0 * (self.w * self.x + self.y * self.z),
            z: self.w * self.w - self.x * self.x - self.y * self.y + self.z * self.z,
        }
    }

    /// Approximate equality check with a given tolerance.
    ///
    pub fn approx_eq(&self, other: &Quaternion, tol: f32) -> bool {
        libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
            && libm::fabsf(self.w - other.w) <= tol
    }

    /// Quaternion multiplication.
    ///
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }
}
