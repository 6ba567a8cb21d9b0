//! Typed `scanner` commands.

use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `scanner_set_parameters` (class 0x05, id 0x06).
    pub fn scanner_set_parameters(&self, mode: u8, interval: u16, window: u16) -> Result<()> {
        let args = [Value::U8(mode), Value::U16(interval), Value::U16(window)];
        self.call(&cmd::SCANNER_SET_PARAMETERS, &args)?.success()?;
        Ok(())
    }

    /// `scanner_stop` (class 0x05, id 0x05).
    pub fn scanner_stop(&self) -> Result<()> {
        self.call(&cmd::SCANNER_STOP, &[])?.success()?;
        Ok(())
    }

    /// `scanner_set_timing` (class 0x05, id 0x01).
    pub fn scanner_set_timing(&self, phys: u8, scan_interval: u16, scan_window: u16) -> Result<()> {
        let args = [
            Value::U8(phys),
            Value::U16(scan_interval),
            Value::U16(scan_window),
        ];
        self.call(&cmd::SCANNER_SET_TIMING, &args)?.success()?;
        Ok(())
    }

    /// `scanner_set_mode` (class 0x05, id 0x02).
    pub fn scanner_set_mode(&self, phys: u8, scan_mode: u8) -> Result<()> {
        let args = [Value::U8(phys), Value::U8(scan_mode)];
        self.call(&cmd::SCANNER_SET_MODE, &args)?.success()?;
        Ok(())
    }

    /// `scanner_start` (class 0x05, id 0x03).
    pub fn scanner_start(&self, scanning_phy: u8, discover_mode: u8) -> Result<()> {
        let args = [Value::U8(scanning_phy), Value::U8(discover_mode)];
        self.call(&cmd::SCANNER_START, &args)?.success()?;
        Ok(())
    }
}
