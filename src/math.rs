//! Small math extensions over the nalgebra types used by the filter.

use nalgebra::{UnitQuaternion, Vector3};

/// Degrees to radians conversion factor.
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
/// Radians to degrees conversion factor.
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Extension trait for `Vector3<f32>` operations
pub trait Vector3Ext {
    /// Normalize the vector, returning the zero vector if its magnitude is
    /// zero instead of dividing by it.
    fn safe_normalize(&self) -> Vector3<f32>;

    /// Convert each component from degrees to radians
    fn deg_to_rad(&self) -> Vector3<f32>;

    /// Convert each component from radians to degrees
    fn rad_to_deg(&self) -> Vector3<f32>;
}

impl Vector3Ext for Vector3<f32> {
    fn safe_normalize(&self) -> Vector3<f32> {
        let norm_squared = self.norm_squared();
        if norm_squared > 0.0 {
            self / norm_squared.sqrt()
        } else {
            Vector3::zeros()
        }
    }

    fn deg_to_rad(&self) -> Vector3<f32> {
        self * DEG_TO_RAD
    }

    fn rad_to_deg(&self) -> Vector3<f32> {
        self * RAD_TO_DEG
    }
}

/// Extension trait for `UnitQuaternion<f32>` operations
pub trait QuaternionExt {
    /// Convert to Euler angles (roll, pitch, yaw) in radians
    fn to_euler(&self) -> Vector3<f32>;

    /// Convert to Euler angles in degrees
    fn to_euler_degrees(&self) -> Vector3<f32>;

    /// Build a quaternion from Euler angles in radians
    fn from_euler(roll: f32, pitch: f32, yaw: f32) -> UnitQuaternion<f32>;

    /// Build a quaternion from Euler angles in degrees
    fn from_euler_degrees(roll: f32, pitch: f32, yaw: f32) -> UnitQuaternion<f32>;
}

impl QuaternionExt for UnitQuaternion<f32> {
    fn to_euler(&self) -> Vector3<f32> {
        let (roll, pitch, yaw) = self.euler_angles();
        Vector3::new(roll, pitch, yaw)
    }

    fn to_euler_degrees(&self) -> Vector3<f32> {
        self.to_euler().rad_to_deg()
    }

    fn from_euler(roll: f32, pitch: f32, yaw: f32) -> UnitQuaternion<f32> {
        UnitQuaternion::from_euler_angles(roll, pitch, yaw)
    }

    fn from_euler_degrees(roll: f32, pitch: f32, yaw: f32) -> UnitQuaternion<f32> {
        Self::from_euler(roll * DEG_TO_RAD, pitch * DEG_TO_RAD, yaw * DEG_TO_RAD)
    }
}
