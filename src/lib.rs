#![no_std]

//! Madgwick orientation filter for 6-axis IMU sensor fusion.
//!
//! This crate estimates 3-D orientation from gyroscope and accelerometer
//! samples. Gyroscope readings are integrated into a quaternion attitude
//! estimate, and each accelerometer sample serves as a gravity reference: a
//! closed-form gradient-descent step removes the drift that pure integration
//! accumulates. The approach is close to a Kalman filter in accuracy but far
//! cheaper to compute, which suits robotics, wearables, and flight
//! controllers running at sensor rate.
//!
//! # Features
//!
//! - Single-struct filter with one tuning parameter (the expected gyroscope
//!   measurement error)
//! - O(1), allocation-free updates over nalgebra value types
//! - Variable sample intervals: each update takes the elapsed `Duration`
//! - Euler-angle and gravity-direction helpers for downstream consumers
//! - `#![no_std]` compatible for embedded targets
//!
//! # Quick Start
//!
//! ```rust
//! use core::time::Duration;
//! use madgwick_ahrs::{DEG_TO_RAD, Madgwick, QuaternionExt};
//! use nalgebra::Vector3;
//!
//! // Gain derived from an expected gyroscope error of 5 deg/s.
//! let mut filter = Madgwick::new(5.0 * DEG_TO_RAD);
//!
//! // One sample: angular rate in rad/s, acceleration in g, elapsed time.
//! let gyroscope = Vector3::new(0.01, -0.02, 0.005);
//! let accelerometer = Vector3::new(0.02, 0.01, 0.98);
//! filter.update(gyroscope, accelerometer, Duration::from_millis(10));
//!
//! // Orientation as a unit quaternion, or as roll/pitch/yaw.
//! let quaternion = filter.quaternion();
//! let euler = quaternion.to_euler_degrees();
//! ```
//!
//! Inputs must already be in the expected units; the filter performs no
//! calibration, axis alignment, or unit conversion.

mod madgwick;
mod math;

pub use madgwick::{DEFAULT_GYRO_MEASUREMENT_ERROR, Madgwick};
pub use math::{DEG_TO_RAD, QuaternionExt, RAD_TO_DEG, Vector3Ext};
