//! Typed `gap` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `gap_set_privacy_mode` (class 0x02, id 0x01).
    pub fn gap_set_privacy_mode(&self, privacy: u8, interval: u8) -> Result<()> {
        let args = [Value::U8(privacy), Value::U8(interval)];
        self.call(&cmd::GAP_SET_PRIVACY_MODE, &args)?.success()?;
        Ok(())
    }

    /// `gap_set_data_channel_classification` (class 0x02, id 0x02).
    pub fn gap_set_data_channel_classification(&self, channel_map: &[u8]) -> Result<()> {
        let args = [Value::Array(Bytes::copy_from_slice(channel_map))];
        self.call(&cmd::GAP_SET_DATA_CHANNEL_CLASSIFICATION, &args)?.success()?;
        Ok(())
    }

    /// `gap_enable_whitelisting` (class 0x02, id 0x03).
    pub fn gap_enable_whitelisting(&self, enable: u8) -> Result<()> {
        self.call(&cmd::GAP_ENABLE_WHITELISTING, &[Value::U8(enable)])?.success()?;
        Ok(())
    }
}
