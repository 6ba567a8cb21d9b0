//! Typed `sync` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `sync_set_parameters` (class 0x42, id 0x02).
    pub fn sync_set_parameters(&self, skip: u16, timeout: u16, flags: u32) -> Result<()> {
        let args = [Value::U16(skip), Value::U16(timeout), Value::U32(flags)];
        self.call(&cmd::SYNC_SET_PARAMETERS, &args)?.success()?;
        Ok(())
    }

    /// `sync_open` (class 0x42, id 0x00).
    pub fn sync_open(&self, address: &[u8; 6], address_type: u8, adv_sid: u8) -> Result<u16> {
        let args = [
            Value::Blob(Bytes::copy_from_slice(address)),
            Value::U8(address_type),
            Value::U8(adv_sid),
        ];
        let reply = self.call(&cmd::SYNC_OPEN, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `sync_set_reporting_mode` (class 0x42, id 0x03).
    pub fn sync_set_reporting_mode(&self, sync: u16, reporting_mode: u8) -> Result<()> {
        let args = [Value::U16(sync), Value::U8(reporting_mode)];
        self.call(&cmd::SYNC_SET_REPORTING_MODE, &args)?.success()?;
        Ok(())
    }

    /// `sync_close` (class 0x42, id 0x01).
    pub fn sync_close(&self, sync: u16) -> Result<()> {
        self.call(&cmd::SYNC_CLOSE, &[Value::U16(sync)])?.success()?;
        Ok(())
    }
}
