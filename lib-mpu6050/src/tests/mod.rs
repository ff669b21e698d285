mod mpu6050;

/// Stand-in firmware image with the size of the real one and no repeating pattern inside a bank.
///
pub fn fake_firmware(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + i / 256) as u8).collect()
}
