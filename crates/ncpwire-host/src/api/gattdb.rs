//! Typed `gattdb` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `gattdb_new_session` (class 0x46, id 0x00).
    pub fn gattdb_new_session(&self) -> Result<u16> {
        let reply = self.call(&cmd::GATTDB_NEW_SESSION, &[])?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gattdb_add_service` (class 0x46, id 0x01).
    pub fn gattdb_add_service(
        &self,
        session: u16,
        r#type: u8,
        property: u8,
        uuid: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U16(session),
            Value::U8(r#type),
            Value::U8(property),
            Value::Array(Bytes::copy_from_slice(uuid)),
        ];
        let reply = self.call(&cmd::GATTDB_ADD_SERVICE, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gattdb_remove_service` (class 0x46, id 0x02).
    pub fn gattdb_remove_service(&self, session: u16, service: u16) -> Result<()> {
        let args = [Value::U16(session), Value::U16(service)];
        self.call(&cmd::GATTDB_REMOVE_SERVICE, &args)?.success()?;
        Ok(())
    }

    /// `gattdb_add_included_service` (class 0x46, id 0x03).
    pub fn gattdb_add_included_service(
        &self,
        session: u16,
        service: u16,
        included_service: u16,
    ) -> Result<u16> {
        let args = [
            Value::U16(session),
            Value::U16(service),
            Value::U16(included_service),
        ];
        let reply = self.call(&cmd::GATTDB_ADD_INCLUDED_SERVICE, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gattdb_remove_included_service` (class 0x46, id 0x04).
    pub fn gattdb_remove_included_service(&self, session: u16, attribute: u16) -> Result<()> {
        let args = [Value::U16(session), Value::U16(attribute)];
        self.call(&cmd::GATTDB_REMOVE_INCLUDED_SERVICE, &args)?.success()?;
        Ok(())
    }

    /// `gattdb_add_uuid16_characteristic` (class 0x46, id 0x05).
    pub fn gattdb_add_uuid16_characteristic(
        &self,
        session: u16,
        service: u16,
        property: u16,
        security: u16,
        flag: u8,
        uuid: &[u8; 2],
        value_type: u8,
        maxlen: u16,
        value: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U16(session),
            Value::U16(service),
            Value::U16(property),
            Value::U16(security),
            Value::U8(flag),
            Value::Blob(Bytes::copy_from_slice(uuid)),
            Value::U8(value_type),
            Value::U16(maxlen),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        let reply = self.call(&cmd::GATTDB_ADD_UUID16_CHARACTERISTIC, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gattdb_add_uuid128_characteristic` (class 0x46, id 0x06).
    pub fn gattdb_add_uuid128_characteristic(
        &self,
        session: u16,
        service: u16,
        property: u16,
        security: u16,
        flag: u8,
        uuid: &[u8; 16],
        value_type: u8,
        maxlen: u16,
        value: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U16(session),
            Value::U16(service),
            Value::U16(property),
            Value::U16(security),
            Value::U8(flag),
            Value::Blob(Bytes::copy_from_slice(uuid)),
            Value::U8(value_type),
            Value::U16(maxlen),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        let reply = self.call(&cmd::GATTDB_ADD_UUID128_CHARACTERISTIC, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gattdb_remove_characteristic` (class 0x46, id 0x07).
    pub fn gattdb_remove_characteristic(&self, session: u16, characteristic: u16) -> Result<()> {
        let args = [Value::U16(session), Value::U16(characteristic)];
        self.call(&cmd::GATTDB_REMOVE_CHARACTERISTIC, &args)?.success()?;
        Ok(())
    }

    /// `gattdb_add_uuid16_descriptor` (class 0x46, id 0x08).
    pub fn gattdb_add_uuid16_descriptor(
        &self,
        session: u16,
        characteristic: u16,
        property: u16,
        security: u16,
        uuid: &[u8; 2],
        value_type: u8,
        maxlen: u16,
        value: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U16(session),
            Value::U16(characteristic),
            Value::U16(property),
            Value::U16(security),
            Value::Blob(Bytes::copy_from_slice(uuid)),
            Value::U8(value_type),
            Value::U16(maxlen),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        let reply = self.call(&cmd::GATTDB_ADD_UUID16_DESCRIPTOR, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gattdb_add_uuid128_descriptor` (class 0x46, id 0x09).
    pub fn gattdb_add_uuid128_descriptor(
        &self,
        session: u16,
        characteristic: u16,
        property: u16,
        security: u16,
        uuid: &[u8; 16],
        value_type: u8,
        maxlen: u16,
        value: &[u8],
    ) -> Result<u16> {
        let args = [
            Value::U16(session),
            Value::U16(characteristic),
            Value::U16(property),
            Value::U16(security),
            Value::Blob(Bytes::copy_from_slice(uuid)),
            Value::U8(value_type),
            Value::U16(maxlen),
            Value::Array(Bytes::copy_from_slice(value)),
        ];
        let reply = self.call(&cmd::GATTDB_ADD_UUID128_DESCRIPTOR, &args)?.success()?;
        Ok(reply.u16(1)?)
    }

    /// `gattdb_remove_descriptor` (class 0x46, id 0x0a).
    pub fn gattdb_remove_descriptor(&self, session: u16, descriptor: u16) -> Result<()> {
        let args = [Value::U16(session), Value::U16(descriptor)];
        self.call(&cmd::GATTDB_REMOVE_DESCRIPTOR, &args)?.success()?;
        Ok(())
    }

    /// `gattdb_start_service` (class 0x46, id 0x0b).
    pub fn gattdb_start_service(&self, session: u16, service: u16) -> Result<()> {
        let args = [Value::U16(session), Value::U16(service)];
        self.call(&cmd::GATTDB_START_SERVICE, &args)?.success()?;
        Ok(())
    }

    /// `gattdb_stop_service` (class 0x46, id 0x0c).
    pub fn gattdb_stop_service(&self, session: u16, service: u16) -> Result<()> {
        let args = [Value::U16(session), Value::U16(service)];
        self.call(&cmd::GATTDB_STOP_SERVICE, &args)?.success()?;
        Ok(())
    }

    /// `gattdb_start_characteristic` (class 0x46, id 0x0d).
    pub fn gattdb_start_characteristic(&self, session: u16, characteristic: u16) -> Result<()> {
        let args = [Value::U16(session), Value::U16(characteristic)];
        self.call(&cmd::GATTDB_START_CHARACTERISTIC, &args)?.success()?;
        Ok(())
    }

    /// `gattdb_stop_characteristic` (class 0x46, id 0x0e).
    pub fn gattdb_stop_characteristic(&self, session: u16, characteristic: u16) -> Result<()> {
        let args = [Value::U16(session), Value::U16(characteristic)];
        self.call(&cmd::GATTDB_STOP_CHARACTERISTIC, &args)?.success()?;
        Ok(())
    }

    /// `gattdb_commit` (class 0x46, id 0x0f).
    pub fn gattdb_commit(&self, session: u16) -> Result<()> {
        self.call(&cmd::GATTDB_COMMIT, &[Value::U16(session)])?.success()?;
        Ok(())
    }

    /// `gattdb_abort` (class 0x46, id 0x10).
    pub fn gattdb_abort(&self, session: u16) -> Result<()> {
        self.call(&cmd::GATTDB_ABORT, &[Value::U16(session)])?.success()?;
        Ok(())
    }
}
