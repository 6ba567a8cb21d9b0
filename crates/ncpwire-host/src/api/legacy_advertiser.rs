//! Typed `legacy_advertiser` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `legacy_advertiser_set_data` (class 0x56, id 0x00).
    pub fn legacy_advertiser_set_data(
        &self,
        advertising_set: u8,
        r#type: u8,
        data: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U8(r#type),
            Value::Array(Bytes::copy_from_slice(data)),
        ];
        self.call(&cmd::LEGACY_ADVERTISER_SET_DATA, &args)?.success()?;
        Ok(())
    }

    /// `legacy_advertiser_generate_data` (class 0x56, id 0x01).
    pub fn legacy_advertiser_generate_data(&self, advertising_set: u8, discover: u8) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U8(discover)];
        self.call(&cmd::LEGACY_ADVERTISER_GENERATE_DATA, &args)?.success()?;
        Ok(())
    }

    /// `legacy_advertiser_start` (class 0x56, id 0x02).
    pub fn legacy_advertiser_start(&self, advertising_set: u8, connect: u8) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U8(connect)];
        self.call(&cmd::LEGACY_ADVERTISER_START, &args)?.success()?;
        Ok(())
    }

    /// `legacy_advertiser_start_directed` (class 0x56, id 0x03).
    pub fn legacy_advertiser_start_directed(
        &self,
        advertising_set: u8,
        connect: u8,
        peer_addr: &[u8; 6],
        peer_addr_type: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U8(connect),
            Value::Blob(Bytes::copy_from_slice(peer_addr)),
            Value::U8(peer_addr_type),
        ];
        self.call(&cmd::LEGACY_ADVERTISER_START_DIRECTED, &args)?.success()?;
        Ok(())
    }
}
