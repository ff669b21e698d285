use crate::{registers::*, AccelScaleRange, ClockSource, DLPFMode, GyroScaleRange, I2cSlave, Offsets, RegisterBus, MPU6050_DEVICE_ID};
use crate::dmp::{DMP_MEMORY_BANK_SIZE, DMP_MEMORY_CHUNK_SIZE, DMP_PACKET_SIZE};

/// Register level driver for the MPU6050, only covering what is needed to run the DMP.
///
pub struct Mpu6050<B: RegisterBus>
{
    bus: B,
}

impl<B: RegisterBus> Mpu6050<B>
{
    /// Create a new MPU 6050 instance on the given register bus.
    ///
    pub fn new(bus: B) -> Self {
        Mpu6050 { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn release(self) -> B {
        self.bus
    }

    /// Basic power up configuration: clock from the X gyro, the most sensitive gyro and accel
    /// ranges and sleep disabled.
    ///
    pub fn initialize(&mut self) -> Result<(), B::Error> {
        self.set_clock_source(ClockSource::GyroX)?;
        self.set_gyro_scale(GyroScaleRange::D250)?;
        self.set_accel_scale(AccelScaleRange::G2)?;
        self.set_sleep(false)
    }

    /// Resets all registers to their power on defaults. The chip needs some time before it
    /// responds again, callers have to wait (at least 30ms) afterwards.
    ///
    pub fn reset(&mut self) -> Result<(), B::Error> {
        self.set_register_bits(PWR_MGMT_1, PWR_MGMT_1_DEVICE_RESET, PWR_MGMT_1_DEVICE_RESET)
    }

    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), B::Error> {
        self.set_register_flag(PWR_MGMT_1, PWR_MGMT_1_SLEEP, sleep)
    }

    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), B::Error> {
        log::debug!("Setting clock source={:?}", source);
        self.set_register_bits(PWR_MGMT_1, PWR_MGMT_1_CLKSEL, source as u8)
    }

    pub fn set_accel_scale(&mut self, scale: AccelScaleRange) -> Result<(), B::Error> {
        self.set_register_bits(ACCEL_CONFIG, 0b0001_1000, scale.as_register())
    }

    pub fn set_gyro_scale(&mut self, scale: GyroScaleRange) -> Result<(), B::Error> {
        self.set_register_bits(GYRO_CONFIG, 0b0001_1000, scale.as_register())
    }

    pub fn get_gyro_scale(&mut self) -> Result<GyroScaleRange, B::Error> {
        Ok(GyroScaleRange::from_register(self.get_register_value(GYRO_CONFIG)?))
    }

    /// Set digital low-pass filter configuration
    ///
    pub fn set_dlpf_mode(&mut self, mode: DLPFMode) -> Result<(), B::Error> {
        self.set_register_bits(CONFIG, 0b0000_0111, mode as u8)
    }

    pub fn set_external_frame_sync(&mut self, sync: u8) -> Result<(), B::Error> {
        self.set_register_bits(CONFIG, 0b0011_1000, (sync & 0b111) << 3)
    }

    /// Sets the sample rate based on the divider using the following formula:
    /// `1khz / (1 + divider) = sample_rate`
    ///
    /// For example: `1khz / (1 + 4) = 200 Hz`
    ///
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), B::Error> {
        self.set_register_value(SMPLRT_DIV, divider)
    }

    /// Replaces the set of enabled interrupt sources, see the `INT_*` bits.
    ///
    pub fn set_interrupts_enabled(&mut self, sources: u8) -> Result<(), B::Error> {
        self.set_register_value(INT_ENABLE, sources)
    }

    /// Reads the interrupt status register, this also clears it on the chip.
    ///
    pub fn get_int_status(&mut self) -> Result<u8, B::Error> {
        self.get_register_value(INT_STATUS)
    }

    /// Gets the device ID of this MPU6050 chip, practically speaking this just gets the contents
    /// of the `WHO_AM_I` register.
    ///
    pub fn get_device_id(&mut self) -> Result<u8, B::Error> {
        let value = self.get_register_value(WHO_AM_I)?;
        Ok((value & 0b0111_1110) >> 1)
    }

    /// Checks if the i2c connection with the MPU6050 chip is working as expected, practically
    /// speaking this function just checks if it can read the device ID and if the device ID is
    /// the expected value.
    ///
    pub fn connection_okay(&mut self) -> bool {
        self.get_device_id().map(|id| id == MPU6050_DEVICE_ID).unwrap_or(false)
    }

    /// Writes the six factory calibration offsets, the order does not matter.
    ///
    pub fn set_active_offsets(&mut self, offsets: &Offsets) -> Result<(), B::Error> {
        let accel_registers = [ XA_OFFS_H, YA_OFFS_H, ZA_OFFS_H ];
        let gyro_registers = [ XG_OFFS_USRH, YG_OFFS_USRH, ZG_OFFS_USRH ];
        for (register, value) in accel_registers.iter().zip(offsets.accel.iter()) {
            self.set_register_value_i16(*register, *value)?;
        }
        for (register, value) in gyro_registers.iter().zip(offsets.gyro.iter()) {
            self.set_register_value_i16(*register, *value)?;
        }
        Ok(())
    }

    pub fn get_active_offsets(&mut self) -> Result<Offsets, B::Error> {
        Ok(Offsets {
            accel: [
                self.get_register_value_i16(XA_OFFS_H)?,
                self.get_register_value_i16(YA_OFFS_H)?,
                self.get_register_value_i16(ZA_OFFS_H)?,
            ],
            gyro: [
                self.get_register_value_i16(XG_OFFS_USRH)?,
                self.get_register_value_i16(YG_OFFS_USRH)?,
                self.get_register_value_i16(ZG_OFFS_USRH)?,
            ],
        })
    }

    /// Get the MPU hardware revision, practically this reads a magical undocumented byte in the
    /// MPU's memory. It is only useful for diagnostics.
    ///
    pub fn get_hardware_revision(&mut self) -> Result<u8, B::Error> {
        self.set_memory_bank(0x10, true, true)?;
        self.set_memory_start_address(0x06)?;
        let revision = self.read_memory_byte()?;
        self.set_memory_bank(0, false, false)?;
        Ok(revision)
    }

    pub fn get_otp_bank_valid(&mut self) -> Result<bool, B::Error> {
        Ok(self.get_register_value(XG_OFFS_TC)? & OTP_BANK_VALID > 0)
    }

    pub fn set_otp_bank_valid(&mut self, valid: bool) -> Result<(), B::Error> {
        self.set_register_flag(XG_OFFS_TC, OTP_BANK_VALID, valid)
    }

    /// Sets the i2c address at which the MPU6050 should expect to find the given slave.
    ///
    pub fn set_slave_address(&mut self, slave: I2cSlave, address: u8) -> Result<(), B::Error> {
        self.set_register_value(slave.address_register(), address)
    }

    pub fn set_i2c_master_mode(&mut self, enable: bool) -> Result<(), B::Error> {
        log::debug!("Setting I2C master mode enabled={}", enable);
        self.set_register_flag(USER_CTRL, USER_CTRL_I2C_MST_EN, enable)
    }

    pub fn reset_i2c_master(&mut self) -> Result<(), B::Error> {
        log::debug!("Resetting I2C master");
        self.set_register_flag(USER_CTRL, USER_CTRL_I2C_MST_RESET, true)
    }

    /// Check if the DMP (Digital Motion Processor) is enabled.
    ///
    pub fn get_dmp_enabled(&mut self) -> Result<bool, B::Error> {
        Ok(self.get_register_value(USER_CTRL)? & USER_CTRL_DMP_EN > 0)
    }

    /// Enable or disable the DMP (Digital Motion Processor).
    ///
    pub fn set_dmp_enabled(&mut self, enabled: bool) -> Result<(), B::Error> {
        self.set_register_flag(USER_CTRL, USER_CTRL_DMP_EN, enabled)
    }

    pub fn reset_dmp(&mut self) -> Result<(), B::Error> {
        log::debug!("Reset DMP");
        self.set_register_flag(USER_CTRL, USER_CTRL_DMP_RESET, true)
    }

    /// Writes the DMP program start address, `DMP_CFG_1` holds the MSB and `DMP_CFG_2` the LSB.
    ///
    pub fn set_dmp_start_address(&mut self, address: u16) -> Result<(), B::Error> {
        let [msb, lsb] = address.to_be_bytes();
        self.set_register_value(DMP_CFG_1, msb)?;
        self.set_register_value(DMP_CFG_2, lsb)
    }

    pub fn get_fifo_enabled(&mut self) -> Result<bool, B::Error> {
        Ok(self.get_register_value(USER_CTRL)? & USER_CTRL_FIFO_EN > 0)
    }

    pub fn set_fifo_enabled(&mut self, enabled: bool) -> Result<(), B::Error> {
        self.set_register_flag(USER_CTRL, USER_CTRL_FIFO_EN, enabled)
    }

    /// Throws away everything currently in the FIFO buffer, the reset bit clears itself.
    ///
    pub fn reset_fifo(&mut self) -> Result<(), B::Error> {
        log::debug!("Reset FIFO");
        self.set_register_flag(USER_CTRL, USER_CTRL_FIFO_RESET, true)
    }

    /// Gets the number of bytes currently available inside FIFO buffer.
    ///
    pub fn get_fifo_count(&mut self) -> Result<u16, B::Error> {
        let mut data = [ 0u8; 2 ];
        self.bus.read_block(FIFO_COUNT_H, &mut data)?;
        Ok(u16::from_be_bytes(data))
    }

    /// Reads `buffer.len()` bytes from the FIFO buffer.
    ///
    pub fn get_fifo_bytes(&mut self, buffer: &mut [u8]) -> Result<(), B::Error> {
        self.bus.read_block(FIFO_R_W, buffer)
    }

    /// Checks if there is currently at least one DMP packet worth of bytes in the FIFO queue.
    ///
    pub fn dmp_packet_available(&mut self) -> Result<bool, B::Error> {
        Ok(self.get_fifo_count()? >= DMP_PACKET_SIZE)
    }

    /// Writes `data` into the DMP's memory starting at the given bank and address, crossing into
    /// the next banks when needed. With `verify` set every chunk is read back after writing and
    /// `Ok(false)` is returned on the first mismatch.
    ///
    pub fn write_memory_block(&mut self, data: &[u8], mut bank: u8, mut address: u8, verify: bool) -> Result<bool, B::Error> {
        self.set_memory_bank(bank, false, false)?;
        self.set_memory_start_address(address)?;

        let mut written: usize = 0;
        let mut readback = [ 0u8; DMP_MEMORY_CHUNK_SIZE ];
        while written < data.len()
        {
            let left_in_bank = DMP_MEMORY_BANK_SIZE - address as usize;
            let chunk_size = DMP_MEMORY_CHUNK_SIZE.min(data.len() - written).min(left_in_bank);
            let chunk = &data[written .. written + chunk_size];

            self.bus.write_block(DMP_MEM_R_W, chunk)?;

            if verify {
                self.set_memory_bank(bank, false, false)?;
                self.set_memory_start_address(address)?;
                let readback = &mut readback[.. chunk_size];
                self.bus.read_block(DMP_MEM_R_W, readback)?;
                if let Some(i) = chunk.iter().zip(readback.iter()).position(|(a, b)| a != b) {
                    log::error!(
                        "Verify of mem data failed: bank {}, address {}: found {} expected {}",
                        bank, address as usize + i, readback[i], chunk[i]
                    );
                    return Ok(false);
                }
            }

            written += chunk_size;
            let next = address as usize + chunk_size;
            if next >= DMP_MEMORY_BANK_SIZE {
                log::debug!("Finished writing to bank: {}", bank);
                bank = bank.wrapping_add(1);
                address = 0;
            } else {
                address = next as u8;
            }
            self.set_memory_bank(bank, false, false)?;
            self.set_memory_start_address(address)?;
        }

        Ok(true)
    }

    pub fn read_memory_byte(&mut self) -> Result<u8, B::Error> {
        self.get_register_value(DMP_MEM_R_W)
    }

    pub fn set_memory_start_address(&mut self, address: u8) -> Result<(), B::Error> {
        self.set_register_value(DMP_MEM_START_ADDR, address)
    }

    pub fn set_memory_bank(&mut self, mut bank: u8, prefetch: bool, user_bank: bool) -> Result<(), B::Error> {
        bank &= BANK_SEL_BANK;
        if user_bank {
            bank |= BANK_SEL_USER_BANK;
        }
        if prefetch {
            bank |= BANK_SEL_PREFETCH;
        }
        self.set_register_value(DMP_BANK_SEL, bank)
    }

    pub fn get_register_value(&mut self, register: u8) -> Result<u8, B::Error> {
        self.bus.read_byte(register)
    }

    pub fn set_register_value(&mut self, register: u8, value: u8) -> Result<(), B::Error> {
        self.bus.write_byte(register, value)
    }

    /// Read-modify-write: replaces the bits selected by `mask` with those of `value`.
    ///
    pub fn set_register_bits(&mut self, register: u8, mask: u8, value: u8) -> Result<(), B::Error> {
        let state = self.get_register_value(register)?;
        self.set_register_value(register, (state & !mask) | (value & mask))
    }

    /// Sets or clears all bits of `mask` in the register.
    ///
    pub fn set_register_flag(&mut self, register: u8, mask: u8, enabled: bool) -> Result<(), B::Error> {
        self.set_register_bits(register, mask, if enabled { mask } else { 0 })
    }

    /// Reads a signed 16 bit integer from the register and the next register, i.e. to read the
    /// XA_OFFS_H and XA_OFFS_L registers (at 0x06 and 0x07 respectively), you should call this
    /// method with XA_OFFS_H as argument:
    ///
    /// ```rs
    /// let offset = self.get_register_value_i16(XA_OFFS_H)?;
    /// ```
    ///
    pub fn get_register_value_i16(&mut self, register: u8) -> Result<i16, B::Error> {
        let mut state = [ 0u8, 0u8 ];
        self.bus.read_block(register, &mut state)?;
        Ok(i16::from_be_bytes(state))
    }

    pub fn set_register_value_i16(&mut self, register: u8, value: i16) -> Result<(), B::Error> {
        self.bus.write_block(register, &value.to_be_bytes())
    }
}
