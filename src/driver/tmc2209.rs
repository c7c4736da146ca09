//! TMC2209 stepper driver, configured over its single-wire UART.
//!
//! Only the registers needed for bring-up are written; reads are never issued, so the
//! link may be transmit-only.
//!
//! # UART Protocol
//!
//! Write datagrams are eight bytes:
//! - Sync byte: 0x05
//! - Node address (0-3, set by MS1/MS2)
//! - Register address with the write bit (0x80) set
//! - Data (4 bytes, big-endian)
//! - CRC8 over the first seven bytes

use embedded_io::Write;

use crate::config::units::Percent;

use super::MotorDriver;

/// Register addresses used during bring-up.
pub mod reg {
    /// General configuration
    pub const GCONF: u8 = 0x00;
    /// Hold/run current settings
    pub const IHOLD_IRUN: u8 = 0x10;
    /// CoolStep configuration
    pub const COOLCONF: u8 = 0x42;
    /// Chopper configuration
    pub const CHOPCONF: u8 = 0x6C;
    /// StealthChop PWM configuration
    pub const PWMCONF: u8 = 0x70;
}

const SYNC_BYTE: u8 = 0x05;
const WRITE_BIT: u8 = 0x80;

// GCONF: pdn_disable | mstep_reg_select | multistep_filt
const GCONF_UART_CONTROL: u32 = (1 << 6) | (1 << 7) | (1 << 8);
// CHOPCONF reset value with TOFF cleared
const CHOPCONF_BASE: u32 = 0x1000_0050;
const TOFF_ENABLED: u32 = 3;
const PWMCONF_RESET: u32 = 0xC10D_0024;
// COOLCONF: semin = 1, semax = 0
const COOLCONF_ENABLED: u32 = 1;

const CURRENT_SCALE_MAX: u8 = 31;
const HOLD_DELAY_MAX: u8 = 15;

/// CRC8 as specified for the TMC22xx UART (polynomial 0x07, bytes fed LSB first).
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        let mut current = byte;
        for _ in 0..8 {
            if ((crc >> 7) ^ (current & 0x01)) != 0 {
                crc = (crc << 1) ^ 0x07;
            } else {
                crc <<= 1;
            }
            current >>= 1;
        }
    }
    crc
}

/// Build a register write datagram.
pub fn write_datagram(address: u8, register: u8, data: u32) -> [u8; 8] {
    let mut datagram = [0u8; 8];
    datagram[0] = SYNC_BYTE;
    datagram[1] = address;
    datagram[2] = register | WRITE_BIT;
    datagram[3..7].copy_from_slice(&data.to_be_bytes());
    datagram[7] = crc8(&datagram[..7]);
    datagram
}

/// TMC2209 configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tmc2209Error<E> {
    /// A register write was attempted before `initialize`
    NotInitialized,
    /// The UART reported an error
    Serial(E),
}

/// TMC2209 driver over a UART implementing [`embedded_io::Write`].
#[derive(Debug)]
pub struct Tmc2209<W> {
    serial: Option<W>,
    address: u8,
    chopconf: u32,
    pwmconf: u32,
}

impl<W: Write> Tmc2209<W> {
    /// Create a driver for the chip at `address`. Nothing is sent until `initialize`.
    ///
    /// The node address is two bits wide; only the low two bits of `address` are kept,
    /// so 4 addresses node 0.
    pub fn new(address: u8) -> Self {
        Self {
            serial: None,
            address: address & 0x03,
            chopconf: CHOPCONF_BASE,
            pwmconf: PWMCONF_RESET,
        }
    }

    /// Node address.
    #[inline]
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Whether the output stage has been enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.chopconf & 0x0F != 0
    }

    /// Write one register.
    pub fn write_register(&mut self, register: u8, data: u32) -> Result<(), Tmc2209Error<W::Error>> {
        let datagram = write_datagram(self.address, register, data);
        let serial = self.serial.as_mut().ok_or(Tmc2209Error::NotInitialized)?;
        serial.write_all(&datagram).map_err(Tmc2209Error::Serial)?;
        serial.flush().map_err(Tmc2209Error::Serial)
    }

    /// Release the UART.
    pub fn release(self) -> Option<W> {
        self.serial
    }
}

impl<W: Write> MotorDriver for Tmc2209<W> {
    type Channel = W;
    type Error = Tmc2209Error<W::Error>;

    fn initialize(&mut self, channel: W) -> Result<(), Self::Error> {
        self.serial = Some(channel);
        self.chopconf = CHOPCONF_BASE;
        self.write_register(reg::GCONF, GCONF_UART_CONTROL)?;
        self.write_register(reg::CHOPCONF, self.chopconf)
    }

    fn set_current_limits(
        &mut self,
        run: Percent,
        hold: Percent,
        hold_delay: Percent,
    ) -> Result<(), Self::Error> {
        let ihold = hold.scale_to(CURRENT_SCALE_MAX) as u32;
        let irun = run.scale_to(CURRENT_SCALE_MAX) as u32;
        let iholddelay = hold_delay.scale_to(HOLD_DELAY_MAX) as u32;
        self.write_register(reg::IHOLD_IRUN, ihold | (irun << 8) | (iholddelay << 16))
    }

    fn enable_power_saving_mode(&mut self) -> Result<(), Self::Error> {
        self.write_register(reg::COOLCONF, COOLCONF_ENABLED)
    }

    fn set_power(&mut self, level: u8) -> Result<(), Self::Error> {
        self.pwmconf = (self.pwmconf & !0xFF) | level as u32;
        self.write_register(reg::PWMCONF, self.pwmconf)
    }

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.chopconf = (self.chopconf & !0x0F) | TOFF_ENABLED;
        self.write_register(reg::CHOPCONF, self.chopconf)
    }
}
