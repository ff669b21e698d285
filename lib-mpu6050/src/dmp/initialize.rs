use embedded_hal::delay::DelayNs;

use crate::{registers::*, ClockSource, DLPFMode, Error, GyroScaleRange, I2cSlave, Mpu6050, RegisterBus};
use super::*;

impl<B: RegisterBus> Mpu6050<B>
{
    /// Initializes the DMP (Digital Motion Processor) so data can be read from the FIFO queue,
    /// this needs to be called each time the sensor boots up. `firmware` is the MotionApps 2.0
    /// image, which is uploaded and verified before anything else is configured.
    ///
    /// Because the DMP part of the chip seems to be mostly undocumented this method follows the
    /// `MPU6050_6Axis_MotionApps20::dmpInitialize()` function in Jeff Rowberg's `i2cdevlib` C++
    /// library step by step, the order of the register writes matters.
    ///
    /// The DMP is left disabled, enable it with `set_dmp_enabled(true)` once this returned `Ok`.
    ///
    pub fn dmp_initialize<D: DelayNs>(&mut self, firmware: &[u8], delay: &mut D) -> Result<(), Error<B::Error>> {

        log::info!("Resetting MPU6050");
        self.reset()?;
        delay.delay_ms(30);

        self.set_sleep(false)?;

        // Only used for diagnostics, nothing depends on the value.
        let revision = self.get_hardware_revision()?;
        log::info!("Hardware revision: {:#04x}", revision);

        let otp_bank_valid = self.get_otp_bank_valid()?;
        log::info!("OTP bank valid: {}", otp_bank_valid);

        // Point the internal I2C master's slave 0 at the MPU itself and disable master mode, the
        // DMP firmware does not work without this. There is no actual slave device connected.
        self.set_slave_address(I2cSlave::Slave0, 0x7F)?;
        self.set_i2c_master_mode(false)?;
        self.set_slave_address(I2cSlave::Slave0, crate::MPU6505_DEFAULT_I2C_ADDR)?;
        self.reset_i2c_master()?;
        delay.delay_ms(20);

        self.set_clock_source(ClockSource::GyroZ)?;

        log::info!("Enabling DMP and FIFO_OFLOW interrupts");
        self.set_interrupts_enabled(INT_FIFO_OFLOW | INT_DMP)?;

        // 1khz / (1 + 4) = 200 Hz
        self.set_sample_rate_divider(4)?;
        self.set_external_frame_sync(EXT_SYNC_TEMP_OUT_L)?;
        self.set_dlpf_mode(DLPFMode::Bw42Hz)?;
        self.set_gyro_scale(GyroScaleRange::D2000)?;

        if firmware.len() != DMP_CODE_SIZE {
            log::warn!("DMP firmware is {} bytes, expected {}", firmware.len(), DMP_CODE_SIZE);
        }
        log::info!("Writing DMP code to MPU memory banks ({} bytes)", firmware.len());
        if !self.write_memory_block(firmware, 0, 0, true)? {
            log::error!("DMP initialization failed (code 1)");
            return Err(Error::MemoryLoad);
        }
        log::info!("DMP code written and verified");

        // Set the FIFO rate divisor in the DMP firmware memory.
        let dmp_update = [ 0x00, DMP_FIFO_RATE_DIVISOR ];
        if !self.write_memory_block(&dmp_update, DMP_FIFO_RATE_BANK, DMP_FIFO_RATE_ADDRESS, true)? {
            log::error!("DMP initialization failed (code 2)");
            return Err(Error::Configuration);
        }

        self.set_dmp_start_address(DMP_START_ADDRESS)?;

        self.set_otp_bank_valid(false)?;

        // Motion detection settings, only used by the low power wake features.
        self.set_register_value(MOT_THR, 2)?;
        self.set_register_value(ZERO_MOT_THR, 156)?;
        self.set_register_value(MOT_DUR, 80)?;
        self.set_register_value(ZERO_MOT_DUR, 0)?;

        self.set_fifo_enabled(true)?;
        self.reset_dmp()?;
        self.set_dmp_enabled(false)?;

        self.reset_fifo()?;
        self.get_int_status()?;

        log::info!("Finished setting up DMP");
        Ok(())
    }
}
