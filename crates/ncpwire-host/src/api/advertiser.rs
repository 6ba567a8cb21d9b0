//! Typed `advertiser` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `advertiser_create_set` (class 0x04, id 0x01).
    pub fn advertiser_create_set(&self) -> Result<u8> {
        let reply = self.call(&cmd::ADVERTISER_CREATE_SET, &[])?.success()?;
        Ok(reply.u8(1)?)
    }

    /// `advertiser_configure` (class 0x04, id 0x12).
    pub fn advertiser_configure(&self, advertising_set: u8, flags: u32) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U32(flags)];
        self.call(&cmd::ADVERTISER_CONFIGURE, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_set_timing` (class 0x04, id 0x03).
    pub fn advertiser_set_timing(
        &self,
        advertising_set: u8,
        interval_min: u32,
        interval_max: u32,
        duration: u16,
        maxevents: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U32(interval_min),
            Value::U32(interval_max),
            Value::U16(duration),
            Value::U8(maxevents),
        ];
        self.call(&cmd::ADVERTISER_SET_TIMING, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_set_channel_map` (class 0x04, id 0x04).
    pub fn advertiser_set_channel_map(&self, advertising_set: u8, channel_map: u8) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U8(channel_map)];
        self.call(&cmd::ADVERTISER_SET_CHANNEL_MAP, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_set_tx_power` (class 0x04, id 0x0b).
    pub fn advertiser_set_tx_power(&self, advertising_set: u8, power: i16) -> Result<i16> {
        let args = [Value::U8(advertising_set), Value::I16(power)];
        let reply = self.call(&cmd::ADVERTISER_SET_TX_POWER, &args)?.success()?;
        Ok(reply.i16(1)?)
    }

    /// `advertiser_set_report_scan_request` (class 0x04, id 0x05).
    pub fn advertiser_set_report_scan_request(
        &self,
        advertising_set: u8,
        report_scan_req: u8,
    ) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U8(report_scan_req)];
        self.call(&cmd::ADVERTISER_SET_REPORT_SCAN_REQUEST, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_set_random_address` (class 0x04, id 0x10).
    pub fn advertiser_set_random_address(
        &self,
        advertising_set: u8,
        addr_type: u8,
        address: &[u8; 6],
    ) -> Result<[u8; 6]> {
        let args = [
            Value::U8(advertising_set),
            Value::U8(addr_type),
            Value::Blob(Bytes::copy_from_slice(address)),
        ];
        let reply = self.call(&cmd::ADVERTISER_SET_RANDOM_ADDRESS, &args)?.success()?;
        Ok(reply.blob(1)?)
    }

    /// `advertiser_clear_random_address` (class 0x04, id 0x11).
    pub fn advertiser_clear_random_address(&self, advertising_set: u8) -> Result<()> {
        let args = [Value::U8(advertising_set)];
        self.call(&cmd::ADVERTISER_CLEAR_RANDOM_ADDRESS, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_stop` (class 0x04, id 0x0a).
    pub fn advertiser_stop(&self, advertising_set: u8) -> Result<()> {
        self.call(&cmd::ADVERTISER_STOP, &[Value::U8(advertising_set)])?.success()?;
        Ok(())
    }

    /// `advertiser_delete_set` (class 0x04, id 0x02).
    pub fn advertiser_delete_set(&self, advertising_set: u8) -> Result<()> {
        self.call(&cmd::ADVERTISER_DELETE_SET, &[Value::U8(advertising_set)])?.success()?;
        Ok(())
    }

    /// `advertiser_set_phy` (class 0x04, id 0x06).
    #[deprecated]
    pub fn advertiser_set_phy(
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
        self.call(&cmd::ADVERTISER_SET_PHY, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_set_configuration` (class 0x04, id 0x07).
    #[deprecated]
    pub fn advertiser_set_configuration(
        &self,
        advertising_set: u8,
        configurations: u32,
    ) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U32(configurations)];
        self.call(&cmd::ADVERTISER_SET_CONFIGURATION, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_clear_configuration` (class 0x04, id 0x08).
    #[deprecated]
    pub fn advertiser_clear_configuration(
        &self,
        advertising_set: u8,
        configurations: u32,
    ) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U32(configurations)];
        self.call(&cmd::ADVERTISER_CLEAR_CONFIGURATION, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_set_data` (class 0x04, id 0x0f).
    #[deprecated]
    pub fn advertiser_set_data(
        &self,
        advertising_set: u8,
        packet_type: u8,
        adv_data: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U8(packet_type),
            Value::Array(Bytes::copy_from_slice(adv_data)),
        ];
        self.call(&cmd::ADVERTISER_SET_DATA, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_set_long_data` (class 0x04, id 0x0e).
    #[deprecated]
    pub fn advertiser_set_long_data(&self, advertising_set: u8, packet_type: u8) -> Result<()> {
        let args = [Value::U8(advertising_set), Value::U8(packet_type)];
        self.call(&cmd::ADVERTISER_SET_LONG_DATA, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_start` (class 0x04, id 0x09).
    #[deprecated]
    pub fn advertiser_start(&self, advertising_set: u8, discover: u8, connect: u8) -> Result<()> {
        let args = [
            Value::U8(advertising_set),
            Value::U8(discover),
            Value::U8(connect),
        ];
        self.call(&cmd::ADVERTISER_START, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_start_periodic_advertising` (class 0x04, id 0x0c).
    #[deprecated]
    pub fn advertiser_start_periodic_advertising(
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
        self.call(&cmd::ADVERTISER_START_PERIODIC_ADVERTISING, &args)?.success()?;
        Ok(())
    }

    /// `advertiser_stop_periodic_advertising` (class 0x04, id 0x0d).
    #[deprecated]
    pub fn advertiser_stop_periodic_advertising(&self, advertising_set: u8) -> Result<()> {
        let args = [Value::U8(advertising_set)];
        self.call(&cmd::ADVERTISER_STOP_PERIODIC_ADVERTISING, &args)?.success()?;
        Ok(())
    }
}
