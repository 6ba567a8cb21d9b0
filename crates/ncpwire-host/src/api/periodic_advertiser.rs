//! Typed `periodic_advertiser` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `periodic_advertiser_set_data` (class 0x58, id 0x00).
    pub fn periodic_advertiser_set_data(&self, advertising_set: u8, data: &[u8]) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::Array(Bytes::copy_from_slice(data)),
        ];
        self.call(&cmd::PERIODIC_ADVERTISER_SET_DATA, &args)?.success()?;
        Ok(())
    }

    /// `periodic_advertiser_set_long_data` (class 0x58, id 0x01).
    pub fn periodic_advertiser_set_long_data(&self, advertising_set: u8) -> Result<()> {
        let args = [Value::U8(advertising_set)];
        self.call(&cmd::PERIODIC_ADVERTISER_SET_LONG_DATA, &args)?.success()?;
        Ok(())
    }

    /// `periodic_advertiser_start` (class 0x58, id 0x02).
    pub fn periodic_advertiser_start(
        &self,
        advertising_set: u8,
        interval_min: u16,
        interval_max: u16,
        flags: u32,
    ) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U16(interval_min),
            Value::U16(interval_max),
            Value::U32(flags),
        ];
        self.call(&cmd::PERIODIC_ADVERTISER_START, &args)?.success()?;
        Ok(())
    }

    /// `periodic_advertiser_stop` (class 0x58, id 0x03).
    pub fn periodic_advertiser_stop(&self, advertising_set: u8) -> Result<()> {
        let args = [Value::U8(advertising_set)];
        self.call(&cmd::PERIODIC_ADVERTISER_STOP, &args)?.success()?;
        Ok(())
    }
}
