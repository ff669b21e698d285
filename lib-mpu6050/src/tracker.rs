use embedded_hal::delay::DelayNs;
use math::YawPitchRoll;

use crate::dmp::{DmpPacket, DMP_PACKET_LEN, DMP_PACKET_SIZE};
use crate::{DataReady, Error, InterruptPin, Mpu6050, Offsets, RegisterBus, TrackerConfig, MPU_INTERRUPT};

/// Size of the scratch buffer packets are read into, large enough for one DMP packet.
///
pub const FIFO_BUFFER_SIZE: usize = 64;

const _: () = assert!(DMP_PACKET_LEN <= FIFO_BUFFER_SIZE);

/// Reads yaw/pitch/roll from the MPU6050's DMP.
///
/// Typical use from a main loop:
///
/// ```ignore
/// let mut tracker = OrientationTracker::new(I2cBus::new(i2c), interrupt_pin);
/// tracker.init(Offsets::new(-1343, -1155, 1033, 19, -27, 16), &DMP_FIRMWARE, &mut delay)?;
/// loop {
///     if tracker.data_available() {
///         let ypr = tracker.pull_orientation()?;
///     }
/// }
/// ```
///
pub struct OrientationTracker<B: RegisterBus, P: InterruptPin>
{
    mpu: Mpu6050<B>,
    interrupt_pin: P,

    /// Raised by the interrupt handler, cleared by `pull_orientation`.
    data_ready: &'static DataReady,

    config: TrackerConfig,

    /// Set once `init` succeeded, there is no way back.
    dmp_ready: bool,

    /// Expected DMP packet size in bytes.
    packet_size: u16,

    fifo_buffer: [u8; FIFO_BUFFER_SIZE],

    /// Most recent result, returned again whenever a FIFO read has to be thrown away.
    ypr: YawPitchRoll,

    last_packet: Option<DmpPacket>,
}

impl<B: RegisterBus, P: InterruptPin> OrientationTracker<B, P>
{
    /// Creates a tracker signalled through the process wide `MPU_INTERRUPT` flag.
    ///
    pub fn new(bus: B, interrupt_pin: P) -> Self {
        Self::with_config(bus, interrupt_pin, &MPU_INTERRUPT, TrackerConfig::default())
    }

    pub fn with_config(bus: B, interrupt_pin: P, data_ready: &'static DataReady, config: TrackerConfig) -> Self {
        OrientationTracker {
            mpu: Mpu6050::new(bus),
            interrupt_pin,
            data_ready,
            config,
            dmp_ready: false,
            packet_size: DMP_PACKET_SIZE,
            fifo_buffer: [ 0u8; FIFO_BUFFER_SIZE ],
            ypr: YawPitchRoll::zero(),
            last_packet: None,
        }
    }

    /// One time setup: checks that the chip responds, uploads and configures the DMP firmware,
    /// applies the calibration offsets, enables the DMP and arms the interrupt pin.
    ///
    /// Any error leaves the DMP disabled and the tracker unusable, the only way to recover is to
    /// call `init` again.
    ///
    pub fn init<D: DelayNs>(&mut self, offsets: Offsets, firmware: &[u8], delay: &mut D) -> Result<(), Error<B::Error>> {
        let mut attempts: u8 = 0;
        while !self.mpu.connection_okay() {
            attempts += 1;
            if attempts >= self.config.connection_attempts {
                log::error!("MPU6050 connection failed after {} attempts", attempts);
                return Err(Error::ConnectionFailed);
            }
            log::warn!("MPU6050 connection failed, retrying ({}/{})", attempts, self.config.connection_attempts);
            delay.delay_ms(self.config.connection_retry_delay_ms);
        }
        self.mpu.initialize()?;

        if let Err(err) = self.mpu.dmp_initialize(firmware, delay) {
            match err.code() {
                Some(code) => log::error!("DMP Initialization failed (code {})", code),
                None => log::error!("DMP Initialization failed: {}", err),
            }
            return Err(err);
        }

        self.mpu.set_active_offsets(&offsets)?;

        self.mpu.set_dmp_enabled(true)?;
        if let Err(err) = self.arm_interrupt() {
            // Report `err`, not a failure of this write.
            let _ = self.mpu.set_dmp_enabled(false);
            return Err(err);
        }

        self.packet_size = DMP_PACKET_SIZE;
        self.dmp_ready = true;
        log::info!("DMP ready, waiting for first interrupt");
        Ok(())
    }

    fn arm_interrupt(&mut self) -> Result<(), Error<B::Error>> {
        self.interrupt_pin.on_falling_edge(self.data_ready).map_err(|err| {
            log::error!("Could not attach interrupt: {:?}", err);
            Error::Interrupt
        })?;
        let status = self.mpu.get_int_status()?;
        log::debug!("Interrupt status: {:#04x}", status);
        Ok(())
    }

    /// Did the sensor signal new data since the last `pull_orientation`? This only looks at the
    /// interrupt flag and is cheap enough to call from a tight loop.
    ///
    #[inline]
    pub fn data_available(&self) -> bool {
        self.data_ready.is_set()
    }

    /// Drains the FIFO and returns the orientation from the newest packet in it, older packets
    /// are skipped. Only call this after `data_available()` returned true.
    ///
    /// If the FIFO does not hold a whole number of packets, or holds so many that it may have
    /// overflowed, its contents cannot be trusted: the FIFO is reset and the previous orientation
    /// is returned unchanged. Only bus failures are reported as errors.
    ///
    pub fn pull_orientation(&mut self) -> Result<YawPitchRoll, Error<B::Error>> {
        // Clear first so an interrupt arriving while we read is not lost.
        self.data_ready.clear();

        if !self.dmp_ready {
            return Err(Error::NotInitialized);
        }

        let packet_size = self.packet_size;
        let mut fifo_count = self.mpu.get_fifo_count()?;

        if fifo_count % packet_size != 0
            || fifo_count > packet_size.saturating_mul(self.config.max_packets)
            || fifo_count < packet_size
        {
            log::warn!("Discarding FIFO with {} bytes", fifo_count);
            self.mpu.get_int_status()?;
            self.mpu.reset_fifo()?;
            // The reset may have latched a new status.
            self.mpu.get_int_status()?;
            return Ok(self.ypr);
        }

        let packet = &mut self.fifo_buffer[.. packet_size as usize];
        let mut packets_read = 0;
        while fifo_count >= packet_size {
            self.mpu.get_fifo_bytes(packet)?;
            fifo_count -= packet_size;
            packets_read += 1;
        }
        log::debug!("Drained {} packets from FIFO", packets_read);

        let newest: [u8; DMP_PACKET_LEN] = core::array::from_fn(|i| self.fifo_buffer[i]);
        let dmp_packet = DmpPacket::from_bytes(&newest);
        let gravity = dmp_packet.quaternion.gravity();
        let ypr = YawPitchRoll::from_quaternion(&dmp_packet.quaternion, &gravity);

        // Anything that arrived while draining would leave the FIFO out of step with packet
        // boundaries.
        let leftover = self.mpu.get_fifo_count()?;
        if leftover > 0 {
            log::debug!("{} bytes arrived during read, resetting FIFO", leftover);
            self.mpu.reset_fifo()?;
        }

        self.ypr = ypr;
        self.last_packet = Some(dmp_packet);
        Ok(ypr)
    }

    /// The last orientation returned by `pull_orientation`, all zeros before the first packet.
    ///
    pub fn orientation(&self) -> YawPitchRoll {
        self.ypr
    }

    /// The last packet successfully decoded by `pull_orientation`.
    ///
    pub fn last_packet(&self) -> Option<&DmpPacket> {
        self.last_packet.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.dmp_ready
    }

    pub fn packet_size(&self) -> u16 {
        self.packet_size
    }

    pub fn device(&self) -> &Mpu6050<B> {
        &self.mpu
    }

    pub fn device_mut(&mut self) -> &mut Mpu6050<B> {
        &mut self.mpu
    }

    pub fn interrupt_pin_mut(&mut self) -> &mut P {
        &mut self.interrupt_pin
    }
}
