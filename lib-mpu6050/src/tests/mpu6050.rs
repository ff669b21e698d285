use crate::dmp::*;
use crate::registers::*;
use crate::sim::{SimulatedBusError, SimulatedDelay, SimulatedMpu};
use crate::{AccelScaleRange, ClockSource, DLPFMode, Error, GyroScaleRange, I2cSlave, Mpu6050, Offsets};

use super::fake_firmware;

#[test]
fn test_connection() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    assert_eq!(mpu.get_device_id(), Ok(0x34));
    assert!(mpu.connection_okay());

    // Only bits 6:1 hold the id.
    mpu.bus_mut().set_who_am_i(0x69);
    assert!(mpu.connection_okay());

    mpu.bus_mut().set_who_am_i(0x70);
    assert!(!mpu.connection_okay());

    mpu.bus_mut().set_who_am_i(0x68);
    mpu.bus_mut().set_bus_failure(true);
    assert!(!mpu.connection_okay());
}

#[test]
fn test_initialize() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    mpu.initialize().unwrap();

    let pwr = mpu.bus().register(PWR_MGMT_1);
    assert_eq!(pwr & PWR_MGMT_1_SLEEP, 0);
    assert_eq!(ClockSource::from_register(pwr), Some(ClockSource::GyroX));
    assert_eq!(mpu.get_gyro_scale(), Ok(GyroScaleRange::D250));
    assert_eq!(AccelScaleRange::from_register(mpu.bus().register(ACCEL_CONFIG)), AccelScaleRange::G2);
}

#[test]
fn test_register_bits_keep_other_bits() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    mpu.set_register_value(CONFIG, 0b1100_0000).unwrap();
    mpu.set_external_frame_sync(EXT_SYNC_TEMP_OUT_L).unwrap();
    mpu.set_register_bits(CONFIG, 0b0000_0111, 3).unwrap();
    assert_eq!(mpu.get_register_value(CONFIG), Ok(0b1100_1011));
}

#[test]
fn test_scale_ranges() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    mpu.set_register_value(GYRO_CONFIG, 0b1110_0111).unwrap();
    mpu.set_gyro_scale(GyroScaleRange::D1000).unwrap();
    assert_eq!(mpu.get_register_value(GYRO_CONFIG), Ok(0b1111_0111));
    assert_eq!(mpu.get_gyro_scale(), Ok(GyroScaleRange::D1000));

    mpu.set_accel_scale(AccelScaleRange::G16).unwrap();
    assert_eq!(AccelScaleRange::from_register(mpu.bus().register(ACCEL_CONFIG)), AccelScaleRange::G16);
    assert_eq!(I2cSlave::Slave2.address_register(), I2C_SLV0_ADDR + 6);
}

#[test]
fn test_offsets() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    let offsets = Offsets::new(-1343, -1155, 1033, 19, -27, 16);
    mpu.set_active_offsets(&offsets).unwrap();

    assert_eq!(mpu.get_active_offsets(), Ok(offsets));
    let [msb, lsb] = (-1343i16).to_be_bytes();
    assert_eq!(mpu.bus().register(XA_OFFS_H), msb);
    assert_eq!(mpu.bus().register(XA_OFFS_H + 1), lsb);
}

#[test]
fn test_dmp_start_address() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    mpu.set_dmp_start_address(DMP_START_ADDRESS).unwrap();
    assert_eq!(mpu.bus().register(DMP_CFG_1), 0x03);
    assert_eq!(mpu.bus().register(DMP_CFG_2), 0x00);
}

#[test]
fn test_hardware_revision() {
    let mut sim = SimulatedMpu::new();
    sim.set_memory(0x10, 0x06, 0xA5);

    let mut mpu = Mpu6050::new(sim);
    assert_eq!(mpu.get_hardware_revision(), Ok(0xA5));
    assert_eq!(mpu.bus().register(DMP_BANK_SEL), 0);
}

#[test]
fn test_write_memory_block_crosses_banks() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    let data = fake_firmware(300);

    // Starts 10 bytes before the end of bank 3.
    assert_eq!(mpu.write_memory_block(&data, 3, 246, true), Ok(true));
    for (i, byte) in data.iter().enumerate() {
        let offset = 246 + i;
        let bank = 3 + (offset / DMP_MEMORY_BANK_SIZE) as u8;
        let address = (offset % DMP_MEMORY_BANK_SIZE) as u8;
        assert_eq!(mpu.bus().memory(bank, address), *byte, "byte {}", i);
    }
    assert_eq!(mpu.bus().stats().memory_bytes_written, data.len());
}

#[test]
fn test_write_memory_block_verify_mismatch() {
    let mut sim = SimulatedMpu::new();
    sim.corrupt_memory_at(1, 40);

    let mut mpu = Mpu6050::new(sim);
    let data = fake_firmware(DMP_CODE_SIZE);
    assert_eq!(mpu.write_memory_block(&data, 0, 0, true), Ok(false));

    // Stopped at the chunk holding the bad byte.
    let written = mpu.bus().stats().memory_bytes_written;
    assert_eq!(written, 256 + 48);
}

#[test]
fn test_write_memory_block_without_verify() {
    let mut sim = SimulatedMpu::new();
    sim.corrupt_memory_at(0, 5);

    let mut mpu = Mpu6050::new(sim);
    assert_eq!(mpu.write_memory_block(&[ 1, 2, 3, 4, 5, 6, 7, 8 ], 0, 0, false), Ok(true));
    assert_eq!(mpu.bus().memory(0, 5), !6);
}

#[test]
fn test_fifo_count_and_bytes() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    assert_eq!(mpu.dmp_packet_available(), Ok(false));

    mpu.bus_mut().push_fifo(&[ 9u8; 50 ]);
    assert_eq!(mpu.get_fifo_count(), Ok(50));
    assert_eq!(mpu.dmp_packet_available(), Ok(true));

    let mut buffer = [ 0u8; 42 ];
    mpu.get_fifo_bytes(&mut buffer).unwrap();
    assert_eq!(buffer, [ 9u8; 42 ]);
    assert_eq!(mpu.get_fifo_count(), Ok(8));

    mpu.reset_fifo().unwrap();
    assert_eq!(mpu.get_fifo_count(), Ok(0));
    assert_eq!(mpu.get_register_value(USER_CTRL).unwrap() & USER_CTRL_FIFO_RESET, 0);
}

#[test]
fn test_dmp_initialize() {
    let mut mpu = Mpu6050::new(SimulatedMpu::new());
    let mut delay = SimulatedDelay::new();
    let firmware = fake_firmware(DMP_CODE_SIZE);

    mpu.dmp_initialize(&firmware, &mut delay).unwrap();

    let sim = mpu.bus();
    for (i, byte) in firmware.iter().enumerate() {
        let bank = (i / DMP_MEMORY_BANK_SIZE) as u8;
        let address = (i % DMP_MEMORY_BANK_SIZE) as u8;
        if bank == DMP_FIFO_RATE_BANK && (address == DMP_FIFO_RATE_ADDRESS || address == DMP_FIFO_RATE_ADDRESS + 1) {
            continue;
        }
        assert_eq!(sim.memory(bank, address), *byte, "firmware byte {}", i);
    }
    assert_eq!(sim.memory(DMP_FIFO_RATE_BANK, DMP_FIFO_RATE_ADDRESS), 0x00);
    assert_eq!(sim.memory(DMP_FIFO_RATE_BANK, DMP_FIFO_RATE_ADDRESS + 1), DMP_FIFO_RATE_DIVISOR);

    assert_eq!(sim.register(PWR_MGMT_1) & PWR_MGMT_1_CLKSEL, ClockSource::GyroZ as u8);
    assert_eq!(sim.register(PWR_MGMT_1) & PWR_MGMT_1_SLEEP, 0);
    assert_eq!(sim.register(INT_ENABLE), 0x12);
    assert_eq!(sim.register(SMPLRT_DIV), 4);
    assert_eq!(sim.register(CONFIG), 0b0000_1011);
    assert_eq!(DLPFMode::from_register(sim.register(CONFIG)), Some(DLPFMode::Bw42Hz));
    assert_eq!(sim.register(GYRO_CONFIG), GyroScaleRange::D2000.as_register());
    assert_eq!(sim.register(DMP_CFG_1), 0x03);
    assert_eq!(sim.register(DMP_CFG_2), 0x00);
    assert_eq!(sim.register(XG_OFFS_TC) & OTP_BANK_VALID, 0);
    assert_eq!(sim.register(MOT_THR), 2);
    assert_eq!(sim.register(ZERO_MOT_THR), 156);
    assert_eq!(sim.register(MOT_DUR), 80);
    assert_eq!(sim.register(ZERO_MOT_DUR), 0);
    assert_eq!(sim.register(I2cSlave::Slave0.address_register()), 0x68);

    // FIFO on, DMP left off until the caller enables it.
    let user_ctrl = sim.register(USER_CTRL);
    assert_eq!(user_ctrl & USER_CTRL_FIFO_EN, USER_CTRL_FIFO_EN);
    assert_eq!(user_ctrl & USER_CTRL_DMP_EN, 0);
    assert_eq!(user_ctrl & USER_CTRL_I2C_MST_EN, 0);

    let stats = sim.stats();
    assert_eq!(stats.device_resets, 1);
    assert_eq!(stats.dmp_resets, 1);
    assert!(stats.fifo_resets >= 1);
    assert_eq!(delay.elapsed_ms(), 50);
}

#[test]
fn test_dmp_initialize_memory_load_failure() {
    let mut sim = SimulatedMpu::new();
    sim.corrupt_memory_at(5, 17);

    let mut mpu = Mpu6050::new(sim);
    let err = mpu.dmp_initialize(&fake_firmware(DMP_CODE_SIZE), &mut SimulatedDelay::new()).unwrap_err();
    assert_eq!(err, Error::MemoryLoad);
    assert_eq!(err.code(), Some(1));
    assert_eq!(mpu.get_dmp_enabled(), Ok(false));
}

#[test]
fn test_dmp_initialize_configuration_failure() {
    let mut sim = SimulatedMpu::new();
    sim.corrupt_memory_at(DMP_FIFO_RATE_BANK, DMP_FIFO_RATE_ADDRESS + 1);

    // A firmware image too short to reach the rate divisor.
    let mut mpu = Mpu6050::new(sim);
    let err = mpu.dmp_initialize(&fake_firmware(300), &mut SimulatedDelay::new()).unwrap_err();
    assert_eq!(err, Error::Configuration);
    assert_eq!(err.code(), Some(2));
}

#[test]
fn test_dmp_initialize_bus_failure() {
    let mut sim = SimulatedMpu::new();
    sim.set_bus_failure(true);

    let mut mpu = Mpu6050::new(sim);
    let err = mpu.dmp_initialize(&fake_firmware(DMP_CODE_SIZE), &mut SimulatedDelay::new()).unwrap_err();
    assert_eq!(err, Error::Bus(SimulatedBusError));
    assert_eq!(err.code(), None);
}
