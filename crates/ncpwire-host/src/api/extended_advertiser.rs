//! Typed `extended_advertiser` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `extended_advertiser_set_phy` (class 0x57, id 0x00).
    pub fn extended_advertiser_set_phy(
        &self,
        advertising_set: u8,
        primary_phy: u8,
        secondary_phy: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U8(primary_phy),
            Value::U8(secondary_phy),
        ];
        self.call(&cmd::EXTENDED_ADVERTISER_SET_PHY, &args)?.success()?;
        Ok(())
    }

    /// `extended_advertiser_set_data` (class 0x57, id 0x01).
    pub fn extended_advertiser_set_data(&self, advertising_set: u8, data: &[u8]) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::Array(Bytes::copy_from_slice(data)),
        ];
        self.call(&cmd::EXTENDED_ADVERTISER_SET_DATA, &args)?.success()?;
        Ok(())
    }

    /// `extended_advertiser_set_long_data` (class 0x57, id 0x02).
    pub fn extended_advertiser_set_long_data(&self, advertising_set: u8) -> Result<()> {
        let args = [Value::U8(advertising_set)];
        self.call(&cmd::EXTENDED_ADVERTISER_SET_LONG_DATA, &args)?.success()?;
        Ok(())
    }

    /// `extended_advertiser_generate_data` (class 0x57, id 0x03).
    pub fn extended_advertiser_generate_data(
        &self,
        advertising_set: u8,
        discover: u8,
    ) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U8(discover)];
        self.call(&cmd::EXTENDED_ADVERTISER_GENERATE_DATA, &args)?.success()?;
        Ok(())
    }

    /// `extended_advertiser_start` (class 0x57, id 0x04).
    pub fn extended_advertiser_start(
        &self,
        advertising_set: u8,
        connect: u8,
        flags: u32,
    ) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U8(connect),
            Value::U32(flags),
        ];
        self.call(&cmd::EXTENDED_ADVERTISER_START, &args)?.success()?;
        Ok(())
    }

    /// `extended_advertiser_start_directed` (class 0x57, id 0x05).
    pub fn extended_advertiser_start_directed(
        &self,
        advertising_set: u8,
        connect: u8,
        flags: u32,
        peer_addr: &[u8; 6],
        peer_addr_type: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U8(connect),
            Value::U32(flags),
            Value::Blob(Bytes::copy_from_slice(peer_addr)),
            Value::U8(peer_addr_type),
        ];
        self.call(&cmd::EXTENDED_ADVERTISER_START_DIRECTED, &args)?.success()?;
        Ok(())
    }
}
