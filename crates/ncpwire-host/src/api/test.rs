//! Typed `test` commands.

use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `test_dtm_tx_v4` (class 0x0e, id 0x03).
    pub fn test_dtm_tx_v4(
        &self,
        packet_type: u8,
        length: u8,
        channel: u8,
        phy: u8,
        power_level: i8,
    ) -> Result<()> {
        let args = [
            Value::U8(packet_type),
            Value::U8(length),
            Value::U8(channel),
            Value::U8(phy),
            Value::I8(power_level),
        ];
        self.call(&cmd::TEST_DTM_TX_V4, &args)?.success()?;
        Ok(())
    }

    /// `test_dtm_tx_cw` (class 0x0e, id 0x04).
    pub fn test_dtm_tx_cw(
        &self,
        packet_type: u8,
        channel: u8,
        phy: u8,
        power_level: i16,
    ) -> Result<()> {
        let args = [
            Value::U8(packet_type),
            Value::U8(channel),
            Value::U8(phy),
            Value::I16(power_level),
        ];
        self.call(&cmd::TEST_DTM_TX_CW, &args)?.success()?;
        Ok(())
    }

    /// `test_dtm_rx` (class 0x0e, id 0x01).
    pub fn test_dtm_rx(&self, channel: u8, phy: u8) -> Result<()> {
        self.call(&cmd::TEST_DTM_RX, &[Value::U8(channel), Value::U8(phy)])?.success()?;
        Ok(())
    }

    /// `test_dtm_end` (class 0x0e, id 0x02).
    pub fn test_dtm_end(&self) -> Result<()> {
        self.call(&cmd::TEST_DTM_END, &[])?.success()?;
        Ok(())
    }
}
