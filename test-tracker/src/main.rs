//! Replays recorded DMP quaternions through the simulated MPU6050 and the real orientation
//! tracker, and writes the resulting yaw/pitch/roll to `analysis/<input name>/ypr.csv`.
//!
//! Input is a CSV file with a header and rows of `time,w,x,y,z` (extra columns are ignored). An
//! optional second argument sets how many samples pile up in the FIFO between two reads.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p test-tracker -- recording.csv 3
//! ```

use std::{env, fs::{self, File}, io::Write, path::Path};
use math::Quaternion;
use mpu6050::{dmp::{DmpPacket, DMP_CODE_SIZE}, sim::{SimulatedDelay, SimulatedMpu, SimulatedPin}};
use mpu6050::{Offsets, OrientationTracker};

static RESULTS_DIR: &str = "analysis";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        panic!("Expected CSV file to read data from");
    }
    let batch: usize = args.get(2).map(|arg| arg.parse().unwrap()).unwrap_or(1).max(1);

    // Open the input CSV file.
    let in_path = Path::new(&args[1]);
    let in_file = File::open(in_path).unwrap();

    // Every input CSV file gets its own folder in the results directory.
    let out_dir = in_path.file_name().unwrap().to_str().unwrap().to_string().replace(".csv", "");
    let out_dir = format!("{}/{}", RESULTS_DIR, out_dir);
    fs::create_dir_all(&out_dir).unwrap();

    let mut ypr_file = File::create(format!("{}/{}", out_dir, "ypr.csv")).unwrap();
    ypr_file.write_all(b"time,yaw,pitch,roll\n").unwrap();

    // The simulated chip does not run the firmware, any image of the right size verifies.
    let firmware = vec![ 0u8; DMP_CODE_SIZE ];
    let mut tracker = OrientationTracker::new(SimulatedMpu::new(), SimulatedPin::new());
    tracker.init(Offsets::default(), &firmware, &mut SimulatedDelay::new()).unwrap();

    let mut samples = 0;
    let mut reader = csv::Reader::from_reader(in_file);
    for result in reader.deserialize::<Vec<f32>>() {
        let record = result.unwrap();
        let time = record[0];

        let packet = DmpPacket {
            quaternion: Quaternion::new(record[1], record[2], record[3], record[4]),
            gyro: [ 0; 3 ],
            accel: [ 0, 0, 8192 ],
        };
        tracker.device_mut().bus_mut().push_packet(&packet);
        tracker.interrupt_pin_mut().fire();
        samples += 1;

        if samples % batch != 0 || !tracker.data_available() {
            continue;
        }

        let ypr = tracker.pull_orientation().unwrap().to_degrees();
        ypr_file.write_all(format!(
            "{},{},{},{}\n",
            time, ypr.yaw, ypr.pitch, ypr.roll
        ).as_bytes()).unwrap();
    }

    let stats = tracker.device().bus().stats();
    log::info!(
        "Replayed {} samples, {} FIFO reads, {} FIFO resets",
        samples, stats.fifo_reads, stats.fifo_resets
    );
}
