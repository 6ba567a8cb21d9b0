//! Typed `sm` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

/// Output of [`Dispatcher::sm_get_bonding_handles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmGetBondingHandlesResponse {
    pub num_bondings: u32,
    pub bondings_len: usize,
}

/// Output of [`Dispatcher::sm_get_bonding_details`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmGetBondingDetailsResponse {
    pub address: [u8; 6],
    pub address_type: u8,
    pub security_mode: u8,
    pub key_size: u8,
}

/// Output of [`Dispatcher::sm_find_bonding_by_address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmFindBondingByAddressResponse {
    pub bonding: u32,
    pub security_mode: u8,
    pub key_size: u8,
}

/// Output of [`Dispatcher::sm_set_oob`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmSetOobResponse {
    pub random: [u8; 16],
    pub confirm: [u8; 16],
}

impl<T: Transport> Dispatcher<T> {
    /// `sm_configure` (class 0x0f, id 0x01).
    pub fn sm_configure(&self, flags: u8, io_capabilities: u8) -> Result<()> {
        let args = [Value::U8(flags), Value::U8(io_capabilities)];
        self.call(&cmd::SM_CONFIGURE, &args)?.success()?;
        Ok(())
    }

    /// `sm_set_minimum_key_size` (class 0x0f, id 0x14).
    pub fn sm_set_minimum_key_size(&self, minimum_key_size: u8) -> Result<()> {
        let args = [Value::U8(minimum_key_size)];
        self.call(&cmd::SM_SET_MINIMUM_KEY_SIZE, &args)?.success()?;
        Ok(())
    }

    /// `sm_set_debug_mode` (class 0x0f, id 0x0f).
    pub fn sm_set_debug_mode(&self) -> Result<()> {
        self.call(&cmd::SM_SET_DEBUG_MODE, &[])?.success()?;
        Ok(())
    }

    /// `sm_add_to_whitelist` (class 0x0f, id 0x13).
    pub fn sm_add_to_whitelist(&self, address: &[u8; 6], address_type: u8) -> Result<()> {
        let args = [
            Value::Blob(Bytes::copy_from_slice(address)),
            Value::U8(address_type),
        ];
        self.call(&cmd::SM_ADD_TO_WHITELIST, &args)?.success()?;
        Ok(())
    }

    /// `sm_store_bonding_configuration` (class 0x0f, id 0x02).
    pub fn sm_store_bonding_configuration(
        &self,
        max_bonding_count: u8,
        policy_flags: u8,
    ) -> Result<()> {
        let args = [Value::U8(max_bonding_count), Value::U8(policy_flags)];
        self.call(&cmd::SM_STORE_BONDING_CONFIGURATION, &args)?.success()?;
        Ok(())
    }

    /// `sm_set_bondable_mode` (class 0x0f, id 0x00).
    pub fn sm_set_bondable_mode(&self, bondable: u8) -> Result<()> {
        self.call(&cmd::SM_SET_BONDABLE_MODE, &[Value::U8(bondable)])?.success()?;
        Ok(())
    }

    /// `sm_set_passkey` (class 0x0f, id 0x10).
    pub fn sm_set_passkey(&self, passkey: i32) -> Result<()> {
        self.call(&cmd::SM_SET_PASSKEY, &[Value::I32(passkey)])?.success()?;
        Ok(())
    }

    /// `sm_increase_security` (class 0x0f, id 0x04).
    pub fn sm_increase_security(&self, connection: u8) -> Result<()> {
        self.call(&cmd::SM_INCREASE_SECURITY, &[Value::U8(connection)])?.success()?;
        Ok(())
    }

    /// `sm_enter_passkey` (class 0x0f, id 0x08).
    pub fn sm_enter_passkey(&self, connection: u8, passkey: i32) -> Result<()> {
        let args = [Value::U8(connection), Value::I32(passkey)];
        self.call(&cmd::SM_ENTER_PASSKEY, &args)?.success()?;
        Ok(())
    }

    /// `sm_passkey_confirm` (class 0x0f, id 0x09).
    pub fn sm_passkey_confirm(&self, connection: u8, confirm: u8) -> Result<()> {
        let args = [Value::U8(connection), Value::U8(confirm)];
        self.call(&cmd::SM_PASSKEY_CONFIRM, &args)?.success()?;
        Ok(())
    }

    /// `sm_bonding_confirm` (class 0x0f, id 0x0e).
    pub fn sm_bonding_confirm(&self, connection: u8, confirm: u8) -> Result<()> {
        let args = [Value::U8(connection), Value::U8(confirm)];
        self.call(&cmd::SM_BONDING_CONFIRM, &args)?.success()?;
        Ok(())
    }

    /// `sm_delete_bonding` (class 0x0f, id 0x06).
    pub fn sm_delete_bonding(&self, bonding: u8) -> Result<()> {
        self.call(&cmd::SM_DELETE_BONDING, &[Value::U8(bonding)])?.success()?;
        Ok(())
    }

    /// `sm_delete_bondings` (class 0x0f, id 0x07).
    pub fn sm_delete_bondings(&self) -> Result<()> {
        self.call(&cmd::SM_DELETE_BONDINGS, &[])?.success()?;
        Ok(())
    }

    /// `sm_get_bonding_handles` (class 0x0f, id 0x15).
    ///
    /// Variable-length output is copied into the caller's buffer, truncated to
    /// its capacity; the reported length is always the full length.
    pub fn sm_get_bonding_handles(
        &self,
        reserved: u32,
        bondings: &mut [u8],
    ) -> Result<SmGetBondingHandlesResponse> {
        let reply = self.call(&cmd::SM_GET_BONDING_HANDLES, &[Value::U32(reserved)])?.success()?;
        Ok(SmGetBondingHandlesResponse {
            num_bondings: reply.u32(1)?,
            bondings_len: reply.copy_array(2, bondings)?,
        })
    }

    /// `sm_get_bonding_details` (class 0x0f, id 0x16).
    pub fn sm_get_bonding_details(&self, bonding: u32) -> Result<SmGetBondingDetailsResponse> {
        let reply = self.call(&cmd::SM_GET_BONDING_DETAILS, &[Value::U32(bonding)])?.success()?;
        Ok(SmGetBondingDetailsResponse {
            address: reply.blob(1)?,
            address_type: reply.u8(2)?,
            security_mode: reply.u8(3)?,
            key_size: reply.u8(4)?,
        })
    }

    /// `sm_find_bonding_by_address` (class 0x0f, id 0x17).
    pub fn sm_find_bonding_by_address(
        &self,
        address: &[u8; 6],
    ) -> Result<SmFindBondingByAddressResponse> {
        let args = [Value::Blob(Bytes::copy_from_slice(address))];
        let reply = self.call(&cmd::SM_FIND_BONDING_BY_ADDRESS, &args)?.success()?;
        Ok(SmFindBondingByAddressResponse {
            bonding: reply.u32(1)?,
            security_mode: reply.u8(2)?,
            key_size: reply.u8(3)?,
        })
    }

    /// `sm_set_bonding_key` (class 0x0f, id 0x18).
    pub fn sm_set_bonding_key(&self, bonding: u32, key_type: u8, key: &[u8; 16]) -> Result<()> {
        let args = [
            Value::U32(bonding),
            Value::U8(key_type),
            Value::Blob(Bytes::copy_from_slice(key)),
        ];
        self.call(&cmd::SM_SET_BONDING_KEY, &args)?.success()?;
        Ok(())
    }

    /// `sm_set_legacy_oob` (class 0x0f, id 0x19).
    pub fn sm_set_legacy_oob(&self, enable: u8, oob_data: &[u8; 16]) -> Result<()> {
        let args = [
            Value::U8(enable),
            Value::Blob(Bytes::copy_from_slice(oob_data)),
        ];
        self.call(&cmd::SM_SET_LEGACY_OOB, &args)?.success()?;
        Ok(())
    }

    /// `sm_set_oob` (class 0x0f, id 0x1a).
    pub fn sm_set_oob(&self, enable: u8) -> Result<SmSetOobResponse> {
        let reply = self.call(&cmd::SM_SET_OOB, &[Value::U8(enable)])?.success()?;
        Ok(SmSetOobResponse {
            random: reply.blob(1)?,
            confirm: reply.blob(2)?,
        })
    }

    /// `sm_set_remote_oob` (class 0x0f, id 0x1b).
    pub fn sm_set_remote_oob(
        &self,
        enable: u8,
        random: &[u8; 16],
        confirm: &[u8; 16],
    ) -> Result<()> {
        let args = [
            Value::U8(enable),
            Value::Blob(Bytes::copy_from_slice(random)),
            Value::Blob(Bytes::copy_from_slice(confirm)),
        ];
        self.call(&cmd::SM_SET_REMOTE_OOB, &args)?.success()?;
        Ok(())
    }

    /// `sm_set_bonding_data` (class 0x0f, id 0x1c).
    pub fn sm_set_bonding_data(&self, connection: u8, r#type: u8, data: &[u8]) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U8(r#type),
            Value::Array(Bytes::copy_from_slice(data)),
        ];
        self.call(&cmd::SM_SET_BONDING_DATA, &args)?.success()?;
        Ok(())
    }
}
