//! Typed `ota` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `ota_set_device_name` (class 0x10, id 0x01).
    pub fn ota_set_device_name(&self, name: &[u8]) -> Result<()> {
        let args = [Value::Array(Bytes::copy_from_slice(name))];
        self.call(&cmd::OTA_SET_DEVICE_NAME, &args)?.success()?;
        Ok(())
    }

    /// `ota_set_advertising_data` (class 0x10, id 0x02).
    pub fn ota_set_advertising_data(&self, packet_type: u8, adv_data: &[u8]) -> Result<()> {
        let args = [
            Value::U8(packet_type),
            Value::Array(Bytes::copy_from_slice(adv_data)),
        ];
        self.call(&cmd::OTA_SET_ADVERTISING_DATA, &args)?.success()?;
        Ok(())
    }

    /// `ota_set_configuration` (class 0x10, id 0x03).
    pub fn ota_set_configuration(&self, flags: u32) -> Result<()> {
        self.call(&cmd::OTA_SET_CONFIGURATION, &[Value::U32(flags)])?.success()?;
        Ok(())
    }

    /// `ota_set_rf_path` (class 0x10, id 0x04).
    pub fn ota_set_rf_path(&self, enable: u8, antenna: u8) -> Result<()> {
        let args = [Value::U8(enable), Value::U8(antenna)];
        self.call(&cmd::OTA_SET_RF_PATH, &args)?.success()?;
        Ok(())
    }
}
