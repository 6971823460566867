//! Madgwick orientation filter: gyroscope integration with gradient-descent
//! accelerometer correction.

use core::time::Duration;

use crate::math::{DEG_TO_RAD, Vector3Ext};
use nalgebra::{Matrix4x3, Quaternion, UnitQuaternion, Vector3, Vector4};

/// Gyroscope measurement error assumed by [`Madgwick::default`], in radians
/// per second (5°/s, a typical figure for a consumer MEMS gyroscope).
pub const DEFAULT_GYRO_MEASUREMENT_ERROR: f32 = 5.0 * DEG_TO_RAD;

/// Madgwick orientation filter
///
/// Fuses angular rate and acceleration samples into a running attitude
/// estimate. Each gyroscope reading is integrated into the orientation
/// quaternion, and the accelerometer's gravity direction is used as a
/// reference to remove the drift that integration accumulates: the filter
/// descends the gradient of the disagreement between measured and predicted
/// gravity, scaled by a gain derived from the expected gyroscope error.
///
/// The filter owns exactly two values: the orientation quaternion and the
/// fixed gain. Updates are O(1), allocation-free, and synchronous; sharing
/// one instance across threads requires external serialization because the
/// estimate is integrated incrementally.
#[derive(Debug, Clone, Copy)]
pub struct Madgwick {
    /// Current orientation estimate.
    quaternion: UnitQuaternion<f32>,
    /// Correction gain β, fixed at construction.
    beta: f32,
}

impl Madgwick {
    /// Create a new filter at the identity orientation.
    ///
    /// `gyro_measurement_error` is the estimated mean zero-rate error of the
    /// gyroscope in radians per second. The gain is derived from it as
    /// β = √(3/4) · error. Larger values weight the accelerometer more
    /// heavily, correcting gyroscope drift faster at the cost of more
    /// distortion from accelerometer noise. A value of 0 disables the
    /// accelerometer correction entirely, leaving pure gyroscope integration.
    pub fn new(gyro_measurement_error: f32) -> Self {
        Madgwick {
            quaternion: UnitQuaternion::identity(),
            beta: (3.0_f32 / 4.0).sqrt() * gyro_measurement_error,
        }
    }

    /// Advance the orientation estimate by one sample.
    ///
    /// # Arguments
    /// * `gyroscope` - Angular rate in radians per second
    /// * `accelerometer` - Acceleration in g; only the direction is used
    /// * `delta_time` - Time elapsed since the previous sample
    ///
    /// A zero `delta_time` leaves the orientation unchanged up to
    /// renormalization. A zero-magnitude accelerometer reading has no
    /// defined direction, so the correction is skipped for that sample and
    /// the update degrades to pure gyroscope integration. Non-finite inputs
    /// are not validated and propagate into the estimate.
    pub fn update(
        &mut self,
        gyroscope: Vector3<f32>,
        accelerometer: Vector3<f32>,
        delta_time: Duration,
    ) {
        let q = self.quaternion.into_inner();

        // Angular rate as a pure quaternion, and the rate of change of
        // orientation it implies: dq/dt = 0.5 * q ⊗ ω. Integrating this
        // alone would accumulate gyroscope drift.
        let gyro_quat = Quaternion::from_parts(0.0, gyroscope);
        let mut rate_of_change = (q * gyro_quat) * 0.5;

        // Only the direction of the measured acceleration matters.
        let accel = accelerometer.safe_normalize();
        if accel.norm_squared() > 0.0 {
            let (qw, qx, qy, qz) = (q.w, q.i, q.j, q.k);

            // Disagreement between the gravity direction predicted by the
            // current orientation and the measured direction.
            let objective = Vector3::new(
                2.0 * (qx * qz - qw * qy) - accel.x,
                2.0 * (qw * qx + qy * qz) - accel.y,
                2.0 * (0.5 - qx * qx - qy * qy) - accel.z,
            );

            // Jacobian of the objective with respect to the quaternion
            // components, one column per objective row, rows in [x, y, z, w]
            // component order.
            let jacobian = Matrix4x3::from_columns(&[
                Vector4::new(2.0 * qz, -2.0 * qw, 2.0 * qx, -2.0 * qy),
                Vector4::new(2.0 * qw, 2.0 * qz, 2.0 * qy, 2.0 * qx),
                Vector4::new(-4.0 * qx, -4.0 * qy, 0.0, 0.0),
            ]);

            // The gradient, read back as a quaternion, points along the
            // gyroscope error. Its magnitude is irrelevant; a zero gradient
            // means the orientation already agrees with the accelerometer
            // and there is nothing to correct.
            let gradient = Quaternion::from(jacobian * objective);
            if gradient.norm_squared() > 0.0 {
                rate_of_change = rate_of_change - gradient.normalize() * self.beta;
            }
        }

        // First-order integration, then renormalize: adding the scaled rate
        // of change leaves the quaternion slightly off unit length.
        let integrated = q + rate_of_change * delta_time.as_secs_f32();
        self.quaternion = UnitQuaternion::from_quaternion(integrated);
    }

    /// Current orientation estimate.
    ///
    /// nalgebra stores the vector part first, `[x, y, z, w]`, with the
    /// scalar accessed as `q.w` and the vector components as `q.i`, `q.j`,
    /// `q.k`. Note that some published references order quaternion
    /// components (w, x, y, z) instead; only the in-memory layout differs,
    /// not the rotation the value represents.
    pub fn quaternion(&self) -> UnitQuaternion<f32> {
        self.quaternion
    }

    /// Overwrite the orientation estimate.
    ///
    /// The filter never re-seeds itself; use this to impose an externally
    /// known attitude.
    pub fn set_quaternion(&mut self, quaternion: UnitQuaternion<f32>) {
        self.quaternion = quaternion;
    }

    /// Return the orientation to identity. The gain is untouched.
    pub fn reset(&mut self) {
        self.quaternion = UnitQuaternion::identity();
    }

    /// The correction gain β derived at construction.
    pub fn gain(&self) -> f32 {
        self.beta
    }

    /// Gravity direction in the sensor frame predicted by the current
    /// orientation. This is the reference each accelerometer sample is
    /// compared against; for a stationary sensor it converges toward the
    /// normalized accelerometer reading.
    pub fn gravity(&self) -> Vector3<f32> {
        let q = self.quaternion.as_ref();
        Vector3::new(
            2.0 * (q.i * q.k - q.w * q.j),
            2.0 * (q.w * q.i + q.j * q.k),
            2.0 * (0.5 - q.i * q.i - q.j * q.j),
        )
    }
}

impl Default for Madgwick {
    fn default() -> Self {
        Self::new(DEFAULT_GYRO_MEASUREMENT_ERROR)
    }
}
