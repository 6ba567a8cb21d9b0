//! Typed `gatt_server` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `gatt_server_set_max_mtu` (class 0x0a, id 0x0a).
    pub fn gatt_server_set_max_mtu(&self, max_mtu: u16) -> Result<u16> {
        let reply = self.call(&cmd::GATT_SERVER_SET_MAX_MTU, &[Value::U16(max_mtu)])?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_server_get_mtu` (class 0x0a, id 0x0b).
    pub fn gatt_server_get_mtu(&self, connection: u8) -> Result<u16> {
        let reply = self.call(&cmd::GATT_SERVER_GET_MTU, &[Value::U8(connection)])?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_server_find_attribute` (class 0x0a, id 0x06).
    pub fn gatt_server_find_attribute(&self, start: u16, r#type: &[u8]) -> Result<u16> {
        let args = [
            Value::U16(start),
            Value::Array(Bytes::copy_from_slice(r#type)),
        ];
        let reply = self.call(&cmd::GATT_SERVER_FIND_ATTRIBUTE, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_server_read_attribute_value` (class 0x0a, id 0x00).
    ///
    /// Variable-length output is copied into the caller's buffer, truncated to
    /// its capacity; the reported length is always the full length.
    pub fn gatt_server_read_attribute_value(
        &self,
        attribute: u16,
        offset: u16,
        value: &mut [u8],
    ) -> Result<usize> {
        let args = [Value::U16(attribute), Value::U16(offset)];
        let reply = self.call(&cmd::GATT_SERVER_READ_ATTRIBUTE_VALUE, &args)?.success()?;
        Ok(reply.copy_array(1, value)?)
    }

    /// `gatt_server_read_attribute_type` (class 0x0a, id 0x01).
    ///
    /// Variable-length output is copied into the caller's buffer, truncated to
    /// its capacity; the reported length is always the full length.
    pub fn gatt_server_read_attribute_type(
        &self,
        attribute: u16,
        r#type: &mut [u8],
    ) -> Result<usize> {
        let args = [Value::U16(attribute)];
        let reply = self.call(&cmd::GATT_SERVER_READ_ATTRIBUTE_TYPE, &args)?.success()?;
        Ok(reply.copy_array(1, r#type)?)
    }

    /// `gatt_server_write_attribute_value` (class 0x0a, id 0x02).
    pub fn gatt_server_write_attribute_value(
        &self,
        attribute: u16,
        offset: u16,
        value: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U16(attribute),
            Value::U16(offset),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        self.call(&cmd::GATT_SERVER_WRITE_ATTRIBUTE_VALUE, &args)?.success()?;
        Ok(())
    }

    /// `gatt_server_send_user_read_response` (class 0x0a, id 0x03).
    pub fn gatt_server_send_user_read_response(
        &self,
        connection: u8,
        characteristic: u16,
        att_errorcode: u8,
        value: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::U8(att_errorcode),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        let reply = self.call(&cmd::GATT_SERVER_SEND_USER_READ_RESPONSE, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_server_send_user_write_response` (class 0x0a, id 0x04).
    pub fn gatt_server_send_user_write_response(
        &self,
        connection: u8,
        characteristic: u16,
        att_errorcode: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::U8(att_errorcode),
        ];
        self.call(&cmd::GATT_SERVER_SEND_USER_WRITE_RESPONSE, &args)?.success()?;
        Ok(())
    }

    /// `gatt_server_send_notification` (class 0x0a, id 0x0f).
    pub fn gatt_server_send_notification(
        &self,
        connection: u8,
        characteristic: u16,
        value: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        self.call(&cmd::GATT_SERVER_SEND_NOTIFICATION, &args)?.success()?;
        Ok(())
    }

    /// `gatt_server_send_indication` (class 0x0a, id 0x10).
    pub fn gatt_server_send_indication(
        &self,
        connection: u8,
        characteristic: u16,
        value: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        self.call(&cmd::GATT_SERVER_SEND_INDICATION, &args)?.success()?;
        Ok(())
    }

    /// `gatt_server_notify_all` (class 0x0a, id 0x11).
    pub fn gatt_server_notify_all(&self, characteristic: u16, value: &[u8]) -> Result<()> {
        let args = [
            Value::U16(characteristic),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        self.call(&cmd::GATT_SERVER_NOTIFY_ALL, &args)?.success()?;
        Ok(())
    }

    /// `gatt_server_read_client_configuration` (class 0x0a, id 0x12).
    pub fn gatt_server_read_client_configuration(
        &self,
        connection: u8,
        characteristic: u16,
    ) -> Result<u16> {
        let args = [Value::U8(connection), Value::U16(characteristic)];
        let reply = self.call(&cmd::GATT_SERVER_READ_CLIENT_CONFIGURATION, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_server_send_user_prepare_write_response` (class 0x0a, id 0x14).
    pub fn gatt_server_send_user_prepare_write_response(
        &self,
        connection: u8,
        characteristic: u16,
        att_errorcode: u8,
        offset: u16,
        value: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::U8(att_errorcode),
            Value::U16(offset),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        self.call(&cmd::GATT_SERVER_SEND_USER_PREPARE_WRITE_RESPONSE, &args)?.success()?;
        Ok(())
    }

    /// `gatt_server_set_capabilities` (class 0x0a, id 0x08).
    pub fn gatt_server_set_capabilities(&self, caps: u32, reserved: u32) -> Result<()> {
        let args = [Value::U32(caps), Value::U32(reserved)];
        self.call(&cmd::GATT_SERVER_SET_CAPABILITIES, &args)?.success()?;
        Ok(())
    }

    /// `gatt_server_enable_capabilities` (class 0x0a, id 0x0c).
    pub fn gatt_server_enable_capabilities(&self, caps: u32) -> Result<()> {
        self.call(&cmd::GATT_SERVER_ENABLE_CAPABILITIES, &[Value::U32(caps)])?.success()?;
        Ok(())
    }

    /// `gatt_server_disable_capabilities` (class 0x0a, id 0x0d).
    pub fn gatt_server_disable_capabilities(&self, caps: u32) -> Result<()> {
        self.call(&cmd::GATT_SERVER_DISABLE_CAPABILITIES, &[Value::U32(caps)])?.success()?;
        Ok(())
    }

    /// `gatt_server_get_enabled_capabilities` (class 0x0a, id 0x0e).
    pub fn gatt_server_get_enabled_capabilities(&self) -> Result<u32> {
        let reply = self.call(&cmd::GATT_SERVER_GET_ENABLED_CAPABILITIES, &[])?.success()?;
        Ok(reply.u32(1)?)
    }

    /// `gatt_server_read_client_supported_features` (class 0x0a, id 0x15).
    pub fn gatt_server_read_client_supported_features(&self, connection: u8) -> Result<u8> {
        let args = [Value::U8(connection)];
        let reply = self.call(&cmd::GATT_SERVER_READ_CLIENT_SUPPORTED_FEATURES, &args)?.success()?;
        Ok(reply.u8(1)?)
    }
}
