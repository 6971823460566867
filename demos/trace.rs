//! Replays the recorded IMU trace through the filter and renders the
//! estimated Euler angles to `orientation.png`.
//!
//! Run with: `cargo run --example trace`

use std::error::Error;
use std::time::Duration;

use madgwick_ahrs::{DEG_TO_RAD, Madgwick, QuaternionExt};
use nalgebra::Vector3;
use plotters::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TraceRecord {
    #[serde(rename = "Gyroscope X (rad/s)")]
    gyro_x: f32,
    #[serde(rename = "Gyroscope Y (rad/s)")]
    gyro_y: f32,
    #[serde(rename = "Gyroscope Z (rad/s)")]
    gyro_z: f32,
    #[serde(rename = "Accelerometer X (g)")]
    accel_x: f32,
    #[serde(rename = "Accelerometer Y (g)")]
    accel_y: f32,
    #[serde(rename = "Accelerometer Z (g)")]
    accel_z: f32,
    #[serde(rename = "Delta Time (ns)")]
    delta_ns: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut reader = csv::Reader::from_path("testdata/madgwick_trace.csv")?;
    let mut trace: Vec<TraceRecord> = Vec::new();

    for result in reader.deserialize() {
        trace.push(result?);
    }

    let mut filter = Madgwick::new(5.0 * DEG_TO_RAD);
    let mut time = 0.0f32;
    let mut euler_series: Vec<(f32, Vector3<f32>)> = Vec::with_capacity(trace.len());

    for record in &trace {
        let delta_time = Duration::from_nanos(record.delta_ns);
        time += delta_time.as_secs_f32();

        filter.update(
            Vector3::new(record.gyro_x, record.gyro_y, record.gyro_z),
            Vector3::new(record.accel_x, record.accel_y, record.accel_z),
            delta_time,
        );

        euler_series.push((time, filter.quaternion().to_euler_degrees()));
    }

    let q = filter.quaternion();
    println!(
        "Processed {} samples over {:.2} s; final orientation: w={:.6} x={:.6} y={:.6} z={:.6}",
        trace.len(),
        time,
        q.w,
        q.i,
        q.j,
        q.k
    );

    let root = BitMapBackend::new("orientation.png", (1024, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Estimated orientation", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0f32..time, -180.0f32..180.0f32)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Angle (deg)")
        .draw()?;

    for (label, component, color) in [
        ("Roll", 0usize, &RED),
        ("Pitch", 1, &GREEN),
        ("Yaw", 2, &BLUE),
    ] {
        chart
            .draw_series(LineSeries::new(
                euler_series.iter().map(|(t, euler)| (*t, euler[component])),
                color,
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    println!("Wrote orientation.png");

    Ok(())
}
