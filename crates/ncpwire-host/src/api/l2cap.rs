//! Typed `l2cap` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `l2cap_open_le_channel` (class 0x43, id 0x01).
    pub fn l2cap_open_le_channel(
        &self,
        connection: u8,
        spsm: u16,
        max_sdu: u16,
        max_pdu: u16,
        credit: u16,
    ) -> Result<u16> {
        let args = [
            Value::U8(connection),
            Value::U16(spsm),
            Value::U16(max_sdu),
            Value::U16(max_pdu),
            Value::U16(credit),
        ];
        let reply = self.call(&cmd::L2CAP_OPEN_LE_CHANNEL, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `l2cap_send_le_channel_open_response` (class 0x43, id 0x02).
    pub fn l2cap_send_le_channel_open_response(
        &self,
        connection: u8,
        cid: u16,
        max_sdu: u16,
        max_pdu: u16,
        credit: u16,
        errorcode: u16,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(cid),
            Value::U16(max_sdu),
            Value::U16(max_pdu),
            Value::U16(credit),
            Value::U16(errorcode),
        ];
        self.call(&cmd::L2CAP_SEND_LE_CHANNEL_OPEN_RESPONSE, &args)?.success()?;
        Ok(())
    }

    /// `l2cap_channel_send_data` (class 0x43, id 0x03).
    pub fn l2cap_channel_send_data(&self, connection: u8, cid: u16, data: &[u8]) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(cid),
            Value::Array(Bytes::copy_from_slice(data)),
        ];
        self.call(&cmd::L2CAP_CHANNEL_SEND_DATA, &args)?.success()?;
        Ok(())
    }

    /// `l2cap_channel_send_credit` (class 0x43, id 0x04).
    pub fn l2cap_channel_send_credit(&self, connection: u8, cid: u16, credit: u16) -> Result<()> {
        let args = [Value::U8(connection), Value::U16(cid), Value::U16(credit)];
        self.call(&cmd::L2CAP_CHANNEL_SEND_CREDIT, &args)?.success()?;
        Ok(())
    }

    /// `l2cap_close_channel` (class 0x43, id 0x05).
    pub fn l2cap_close_channel(&self, connection: u8, cid: u16) -> Result<()> {
        let args = [Value::U8(connection), Value::U16(cid)];
        self.call(&cmd::L2CAP_CLOSE_CHANNEL, &args)?.success()?;
        Ok(())
    }
}
