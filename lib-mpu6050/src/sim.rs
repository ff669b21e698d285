//! A simulated MPU6050 for running the driver without hardware: a register map, DMP memory banks
//! and a FIFO, plus an interrupt pin and a delay that only keep track of what was asked of them.

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;

use crate::dmp::{DmpPacket, DMP_MEMORY_BANK_SIZE};
use crate::registers::*;
use crate::{DataReady, InterruptPin, RegisterBus, MPU6050_DEVICE_ID};

/// Hardware FIFO size of the MPU6050.
///
pub const FIFO_CAPACITY: usize = 1024;

const MEMORY_BANKS: usize = 32;

/// Returned by the simulated bus while `SimulatedMpu::set_bus_failure(true)` is in effect.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedBusError;

/// What the driver did to the simulated chip.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub device_resets: usize,
    pub fifo_resets: usize,
    pub dmp_resets: usize,
    pub fifo_count_reads: usize,
    /// Number of reads from `FIFO_R_W`.
    pub fifo_reads: usize,
    pub fifo_bytes_read: usize,
    pub int_status_reads: usize,
    /// Number of bytes written to DMP memory.
    pub memory_bytes_written: usize,
}

pub struct SimulatedMpu {
    registers: [u8; 128],
    memory: Vec<[u8; DMP_MEMORY_BANK_SIZE]>,
    fifo: VecDeque<u8>,
    who_am_i: u8,
    int_status: u8,
    bus_failure: bool,
    corrupt_memory_at: Option<(u8, u8)>,
    arrive_after_count: Vec<u8>,
    stats: SimStats,
}

impl Default for SimulatedMpu {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedMpu {

    /// A freshly powered chip that answers with the MPU6050 device id.
    ///
    pub fn new() -> Self {
        let mut sim = SimulatedMpu {
            registers: [ 0u8; 128 ],
            memory: vec![ [ 0u8; DMP_MEMORY_BANK_SIZE ]; MEMORY_BANKS ],
            fifo: VecDeque::with_capacity(FIFO_CAPACITY),
            who_am_i: MPU6050_DEVICE_ID << 1,
            int_status: 0,
            bus_failure: false,
            corrupt_memory_at: None,
            arrive_after_count: Vec::new(),
            stats: SimStats::default(),
        };
        sim.power_on_registers();
        sim
    }

    fn power_on_registers(&mut self) {
        self.registers = [ 0u8; 128 ];
        self.registers[PWR_MGMT_1 as usize] = PWR_MGMT_1_SLEEP;
        self.registers[XG_OFFS_TC as usize] = OTP_BANK_VALID;
    }

    /// Value returned for `WHO_AM_I`, anything but `0x68` makes the connection test fail.
    ///
    pub fn set_who_am_i(&mut self, value: u8) {
        self.who_am_i = value;
    }

    /// Makes every bus transfer fail.
    ///
    pub fn set_bus_failure(&mut self, fail: bool) {
        self.bus_failure = fail;
    }

    /// Flips all bits of whatever gets written to the given DMP memory location.
    ///
    pub fn corrupt_memory_at(&mut self, bank: u8, address: u8) {
        self.corrupt_memory_at = Some((bank, address));
    }

    pub fn push_fifo(&mut self, bytes: &[u8]) {
        for byte in bytes {
            if self.fifo.len() >= FIFO_CAPACITY {
                self.fifo.pop_front();
                self.int_status |= INT_FIFO_OFLOW;
            }
            self.fifo.push_back(*byte);
        }
        self.int_status |= INT_DMP;
    }

    pub fn push_packet(&mut self, packet: &DmpPacket) {
        self.push_fifo(&packet.to_bytes());
    }

    /// Appends `bytes` to the FIFO right after the next FIFO count has been read, i.e. data that
    /// arrives while the driver is busy draining.
    ///
    pub fn arrive_after_next_count(&mut self, bytes: &[u8]) {
        self.arrive_after_count.extend_from_slice(bytes);
    }

    pub fn fifo_len(&self) -> usize {
        self.fifo.len()
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    pub fn memory(&self, bank: u8, address: u8) -> u8 {
        self.memory[(bank & BANK_SEL_BANK) as usize][address as usize]
    }

    pub fn set_memory(&mut self, bank: u8, address: u8, value: u8) {
        self.memory[(bank & BANK_SEL_BANK) as usize][address as usize] = value;
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    pub fn clear_stats(&mut self) {
        self.stats = SimStats::default();
    }

    fn check(&self) -> Result<(), SimulatedBusError> {
        if self.bus_failure { Err(SimulatedBusError) } else { Ok(()) }
    }

    fn memory_cursor(&self) -> (usize, usize) {
        let bank = (self.registers[DMP_BANK_SEL as usize] & BANK_SEL_BANK) as usize;
        let address = self.registers[DMP_MEM_START_ADDR as usize] as usize;
        (bank, address)
    }

    fn advance_memory_cursor(&mut self) {
        let address = &mut self.registers[DMP_MEM_START_ADDR as usize];
        *address = address.wrapping_add(1);
    }

    fn read_register(&mut self, register: u8) -> u8 {
        match register {
            WHO_AM_I => self.who_am_i,
            INT_STATUS => {
                self.stats.int_status_reads += 1;
                core::mem::take(&mut self.int_status)
            },
            FIFO_R_W => self.fifo.pop_front().unwrap_or(0),
            DMP_MEM_R_W => {
                let (bank, address) = self.memory_cursor();
                let value = self.memory[bank][address];
                self.advance_memory_cursor();
                value
            },
            _ => self.registers[register as usize & 0x7F],
        }
    }

    fn write_register(&mut self, register: u8, value: u8) {
        match register {
            PWR_MGMT_1 if value & PWR_MGMT_1_DEVICE_RESET > 0 => {
                self.stats.device_resets += 1;
                self.power_on_registers();
                self.fifo.clear();
            },
            USER_CTRL => {
                if value & USER_CTRL_FIFO_RESET > 0 {
                    self.stats.fifo_resets += 1;
                    self.fifo.clear();
                }
                if value & USER_CTRL_DMP_RESET > 0 {
                    self.stats.dmp_resets += 1;
                }
                // Reset bits clear themselves.
                self.registers[USER_CTRL as usize] = value & 0b1111_0000;
            },
            DMP_MEM_R_W => {
                let (bank, address) = self.memory_cursor();
                let value = match self.corrupt_memory_at {
                    Some((b, a)) if b as usize == bank && a as usize == address => !value,
                    _ => value,
                };
                self.memory[bank][address] = value;
                self.stats.memory_bytes_written += 1;
                self.advance_memory_cursor();
            },
            _ => self.registers[register as usize & 0x7F] = value,
        }
    }
}

impl RegisterBus for SimulatedMpu {
    type Error = SimulatedBusError;

    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error> {
        self.check()?;
        if register == FIFO_R_W {
            self.stats.fifo_reads += 1;
            self.stats.fifo_bytes_read += 1;
        }
        Ok(self.read_register(register))
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.check()?;
        self.write_register(register, value);
        Ok(())
    }

    fn read_block(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.check()?;
        match register {
            FIFO_COUNT_H => {
                let count = (self.fifo.len() as u16).to_be_bytes();
                for (i, byte) in buffer.iter_mut().enumerate() {
                    *byte = count.get(i).copied().unwrap_or(0);
                }
                self.stats.fifo_count_reads += 1;
                let arriving = core::mem::take(&mut self.arrive_after_count);
                if !arriving.is_empty() {
                    self.push_fifo(&arriving);
                }
            },
            FIFO_R_W | DMP_MEM_R_W => {
                if register == FIFO_R_W {
                    self.stats.fifo_reads += 1;
                    self.stats.fifo_bytes_read += buffer.len();
                }
                for byte in buffer.iter_mut() {
                    *byte = self.read_register(register);
                }
            },
            _ => {
                for (i, byte) in buffer.iter_mut().enumerate() {
                    *byte = self.read_register(register.wrapping_add(i as u8));
                }
            },
        }
        Ok(())
    }

    fn write_block(&mut self, register: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check()?;
        for (i, byte) in bytes.iter().enumerate() {
            let target = if register == DMP_MEM_R_W { register } else { register.wrapping_add(i as u8) };
            self.write_register(target, *byte);
        }
        Ok(())
    }
}

/// An interrupt pin that remembers the flag it was armed with, `fire` plays the interrupt
/// handler.
///
#[derive(Default)]
pub struct SimulatedPin {
    flag: Option<&'static DataReady>,
    fail: bool,
}

impl SimulatedPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pin that refuses to be armed.
    ///
    pub fn failing() -> Self {
        SimulatedPin { flag: None, fail: true }
    }

    pub fn is_armed(&self) -> bool {
        self.flag.is_some()
    }

    /// Simulates a falling edge on the pin.
    ///
    pub fn fire(&self) {
        if let Some(flag) = self.flag {
            flag.signal();
        }
    }
}

impl InterruptPin for SimulatedPin {
    type Error = SimulatedBusError;

    fn on_falling_edge(&mut self, flag: &'static DataReady) -> Result<(), Self::Error> {
        if self.fail {
            return Err(SimulatedBusError);
        }
        self.flag = Some(flag);
        Ok(())
    }
}

/// A delay that returns immediately and only adds up how long it was asked to wait.
///
#[derive(Debug, Default)]
pub struct SimulatedDelay {
    total_ns: u64,
}

impl SimulatedDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for SimulatedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
