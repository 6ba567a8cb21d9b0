//! Typed `gatt` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `gatt_set_max_mtu` (class 0x09, id 0x00).
    pub fn gatt_set_max_mtu(&self, max_mtu: u16) -> Result<u16> {
        let reply = self.call(&cmd::GATT_SET_MAX_MTU, &[Value::U16(max_mtu)])?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_discover_primary_services` (class 0x09, id 0x01).
    pub fn gatt_discover_primary_services(&self, connection: u8) -> Result<()> {
        let args = [Value::U8(connection)];
        self.call(&cmd::GATT_DISCOVER_PRIMARY_SERVICES, &args)?.success()?;
        Ok(())
    }

    /// `gatt_discover_primary_services_by_uuid` (class 0x09, id 0x02).
    pub fn gatt_discover_primary_services_by_uuid(
        &self,
        connection: u8,
        uuid: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::Array(Bytes::copy_from_slice(uuid)),
        ];
        self.call(&cmd::GATT_DISCOVER_PRIMARY_SERVICES_BY_UUID, &args)?.success()?;
        Ok(())
    }

    /// `gatt_find_included_services` (class 0x09, id 0x10).
    pub fn gatt_find_included_services(&self, connection: u8, service: u32) -> Result<()> {
        let args = [Value::U8(connection), Value::U32(service)];
        self.call(&cmd::GATT_FIND_INCLUDED_SERVICES, &args)?.success()?;
        Ok(())
    }

    /// `gatt_discover_characteristics` (class 0x09, id 0x03).
    pub fn gatt_discover_characteristics(&self, connection: u8, service: u32) -> Result<()> {
        let args = [Value::U8(connection), Value::U32(service)];
        self.call(&cmd::GATT_DISCOVER_CHARACTERISTICS, &args)?.success()?;
        Ok(())
    }

    /// `gatt_discover_characteristics_by_uuid` (class 0x09, id 0x04).
    pub fn gatt_discover_characteristics_by_uuid(
        &self,
        connection: u8,
        service: u32,
        uuid: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U32(service),
            Value::Array(Bytes::copy_from_slice(uuid)),
        ];
        self.call(&cmd::GATT_DISCOVER_CHARACTERISTICS_BY_UUID, &args)?.success()?;
        Ok(())
    }

    /// `gatt_discover_descriptors` (class 0x09, id 0x06).
    pub fn gatt_discover_descriptors(&self, connection: u8, characteristic: u16) -> Result<()> {
        let args = [Value::U8(connection), Value::U16(characteristic)];
        self.call(&cmd::GATT_DISCOVER_DESCRIPTORS, &args)?.success()?;
        Ok(())
    }

    /// `gatt_set_characteristic_notification` (class 0x09, id 0x05).
    pub fn gatt_set_characteristic_notification(
        &self,
        connection: u8,
        characteristic: u16,
        flags: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::U8(flags),
        ];
        self.call(&cmd::GATT_SET_CHARACTERISTIC_NOTIFICATION, &args)?.success()?;
        Ok(())
    }

    /// `gatt_send_characteristic_confirmation` (class 0x09, id 0x0d).
    pub fn gatt_send_characteristic_confirmation(&self, connection: u8) -> Result<()> {
        let args = [Value::U8(connection)];
        self.call(&cmd::GATT_SEND_CHARACTERISTIC_CONFIRMATION, &args)?.success()?;
        Ok(())
    }

    /// `gatt_read_characteristic_value` (class 0x09, id 0x07).
    pub fn gatt_read_characteristic_value(
        &self,
        connection: u8,
        characteristic: u16,
    ) -> Result<()> {
        let args = [Value::U8(connection), Value::U16(characteristic)];
        self.call(&cmd::GATT_READ_CHARACTERISTIC_VALUE, &args)?.success()?;
        Ok(())
    }

    /// `gatt_read_characteristic_value_from_offset` (class 0x09, id 0x12).
    pub fn gatt_read_characteristic_value_from_offset(
        &self,
        connection: u8,
        characteristic: u16,
        offset: u16,
        maxlen: u16,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::U16(offset),
            Value::U16(maxlen),
        ];
        self.call(&cmd::GATT_READ_CHARACTERISTIC_VALUE_FROM_OFFSET, &args)?.success()?;
        Ok(())
    }

    /// `gatt_read_multiple_characteristic_values` (class 0x09, id 0x11).
    pub fn gatt_read_multiple_characteristic_values(
        &self,
        connection: u8,
        characteristic_list: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::Array(Bytes::copy_from_slice(characteristic_list)),
        ];
        self.call(&cmd::GATT_READ_MULTIPLE_CHARACTERISTIC_VALUES, &args)?.success()?;
        Ok(())
    }

    /// `gatt_read_characteristic_value_by_uuid` (class 0x09, id 0x08).
    pub fn gatt_read_characteristic_value_by_uuid(
        &self,
        connection: u8,
        service: u32,
        uuid: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U32(service),
            Value::Array(Bytes::copy_from_slice(uuid)),
        ];
        self.call(&cmd::GATT_READ_CHARACTERISTIC_VALUE_BY_UUID, &args)?.success()?;
        Ok(())
    }

    /// `gatt_write_characteristic_value` (class 0x09, id 0x09).
    pub fn gatt_write_characteristic_value(
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
        self.call(&cmd::GATT_WRITE_CHARACTERISTIC_VALUE, &args)?.success()?;
        Ok(())
    }

    /// `gatt_write_characteristic_value_without_response` (class 0x09, id 0x0a).
    pub fn gatt_write_characteristic_value_without_response(
        &self,
        connection: u8,
        characteristic: u16,
        value: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        let reply = self
            .call(
                &cmd::GATT_WRITE_CHARACTERISTIC_VALUE_WITHOUT_RESPONSE,
                &args,
            )?
            .success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_prepare_characteristic_value_write` (class 0x09, id 0x0b).
    pub fn gatt_prepare_characteristic_value_write(
        &self,
        connection: u8,
        characteristic: u16,
        offset: u16,
        value: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::U16(offset),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        let reply = self.call(&cmd::GATT_PREPARE_CHARACTERISTIC_VALUE_WRITE, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_prepare_characteristic_value_reliable_write` (class 0x09, id 0x13).
    pub fn gatt_prepare_characteristic_value_reliable_write(
        &self,
        connection: u8,
        characteristic: u16,
        offset: u16,
        value: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U8(connection),
            Value::U16(characteristic),
            Value::U16(offset),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        let reply = self
            .call(
                &cmd::GATT_PREPARE_CHARACTERISTIC_VALUE_RELIABLE_WRITE,
                &args,
            )?
            .success()?;
        Ok(reply.u16(1)?)
    }

    /// `gatt_execute_characteristic_value_write` (class 0x09, id 0x0c).
    pub fn gatt_execute_characteristic_value_write(&self, connection: u8, flags: u8) -> Result<()> {
        let args = [Value::U8(connection), Value::U8(flags)];
        self.call(&cmd::GATT_EXECUTE_CHARACTERISTIC_VALUE_WRITE, &args)?.success()?;
        Ok(())
    }

    /// `gatt_read_descriptor_value` (class 0x09, id 0x0e).
    pub fn gatt_read_descriptor_value(&self, connection: u8, descriptor: u16) -> Result<()> {
        let args = [Value::U8(connection), Value::U16(descriptor)];
        self.call(&cmd::GATT_READ_DESCRIPTOR_VALUE, &args)?.success()?;
        Ok(())
    }

    /// `gatt_write_descriptor_value` (class 0x09, id 0x0f).
    pub fn gatt_write_descriptor_value(
        &self,
        connection: u8,
        descriptor: u16,
        value: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(descriptor),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        self.call(&cmd::GATT_WRITE_DESCRIPTOR_VALUE, &args)?.success()?;
        Ok(())
    }
}
