use std::time::Duration;

use madgwick_ahrs::{DEG_TO_RAD, Madgwick, QuaternionExt, Vector3Ext};
use nalgebra::Vector3;

const SAMPLE_PERIOD: Duration = Duration::from_millis(10); // 100 Hz

fn main() {
    let mut filter = Madgwick::new(5.0 * DEG_TO_RAD);

    for _ in 0..10 {
        // this loop should repeat each time new sensor data is available
        let gyroscope = Vector3::new(0.0, 0.0, 5.0).deg_to_rad(); // replace with gyroscope data in deg/s
        let accelerometer = Vector3::new(0.0, 0.0, 1.0); // replace with accelerometer data in g

        filter.update(gyroscope, accelerometer, SAMPLE_PERIOD);

        let euler = filter.quaternion().to_euler_degrees();
        println!(
            "Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}",
            euler.x, euler.y, euler.z
        );
    }
}
