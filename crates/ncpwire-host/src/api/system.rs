//! Typed `system` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

/// Output of [`Dispatcher::system_get_version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemGetVersionResponse {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    pub build: u16,
    pub bootloader: u32,
    pub hash: u32,
}

/// Output of [`Dispatcher::system_set_tx_power`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemSetTxPowerResponse {
    pub set_min: i16,
    pub set_max: i16,
}

/// Output of [`Dispatcher::system_get_tx_power_setting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemGetTxPowerSettingResponse {
    pub support_min: i16,
    pub support_max: i16,
    pub set_min: i16,
    pub set_max: i16,
    pub rf_path_gain: i16,
}

/// Output of [`Dispatcher::system_get_identity_address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemGetIdentityAddressResponse {
    pub address: [u8; 6],
    pub r#type: u8,
}

/// Output of [`Dispatcher::system_get_counters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemGetCountersResponse {
    pub tx_packets: u16,
    pub rx_packets: u16,
    pub crc_errors: u16,
    pub failures: u16,
}

impl<T: Transport> Dispatcher<T> {
    /// `system_hello` (class 0x01, id 0x00).
    pub fn system_hello(&self) -> Result<()> {
        self.call(&cmd::SYSTEM_HELLO, &[])?.success()?;
        Ok(())
    }

    /// `system_start_bluetooth` (class 0x01, id 0x1c).
    pub fn system_start_bluetooth(&self) -> Result<()> {
        self.call(&cmd::SYSTEM_START_BLUETOOTH, &[])?.success()?;
        Ok(())
    }

    /// `system_stop_bluetooth` (class 0x01, id 0x1d).
    pub fn system_stop_bluetooth(&self) -> Result<()> {
        self.call(&cmd::SYSTEM_STOP_BLUETOOTH, &[])?.success()?;
        Ok(())
    }

    /// `system_get_version` (class 0x01, id 0x1b).
    pub fn system_get_version(&self) -> Result<SystemGetVersionResponse> {
        let reply = self.call(&cmd::SYSTEM_GET_VERSION, &[])?.success()?;
        Ok(SystemGetVersionResponse {
            major: reply.u16(1)?,
            minor: reply.u16(2)?,
            patch: reply.u16(3)?,
            build: reply.u16(4)?,
            bootloader: reply.u32(5)?,
            hash: reply.u32(6)?,
        })
    }

    /// `system_reset` (class 0x01, id 0x01).
    ///
    /// Fire-and-forget: returns once the command is written.
    pub fn system_reset(&self, dfu: u8) -> Result<()> {
        self.notify(&cmd::SYSTEM_RESET, &[Value::U8(dfu)])
    }

    /// `system_halt` (class 0x01, id 0x0c).
    pub fn system_halt(&self, halt: u8) -> Result<()> {
        self.call(&cmd::SYSTEM_HALT, &[Value::U8(halt)])?.success()?;
        Ok(())
    }

    /// `system_linklayer_configure` (class 0x01, id 0x0e).
    pub fn system_linklayer_configure(&self, key: u8, data: &[u8]) -> Result<()> {
        let args = [Value::U8(key), Value::Array(Bytes::copy_from_slice(data))];
        self.call(&cmd::SYSTEM_LINKLAYER_CONFIGURE, &args)?.success()?;
        Ok(())
    }

    /// `system_set_tx_power` (class 0x01, id 0x17).
    pub fn system_set_tx_power(
        &self,
        min_power: i16,
        max_power: i16,
    ) -> Result<SystemSetTxPowerResponse> {
        let args = [Value::I16(min_power), Value::I16(max_power)];
        let reply = self.call(&cmd::SYSTEM_SET_TX_POWER, &args)?.success()?;
        Ok(SystemSetTxPowerResponse {
            set_min: reply.i16(1)?,
            set_max: reply.i16(2)?,
        })
    }

    /// `system_get_tx_power_setting` (class 0x01, id 0x18).
    pub fn system_get_tx_power_setting(&self) -> Result<SystemGetTxPowerSettingResponse> {
        let reply = self.call(&cmd::SYSTEM_GET_TX_POWER_SETTING, &[])?.success()?;
        Ok(SystemGetTxPowerSettingResponse {
            support_min: reply.i16(1)?,
            support_max: reply.i16(2)?,
            set_min: reply.i16(3)?,
            set_max: reply.i16(4)?,
            rf_path_gain: reply.i16(5)?,
        })
    }

    /// `system_set_identity_address` (class 0x01, id 0x13).
    pub fn system_set_identity_address(&self, address: &[u8; 6], r#type: u8) -> Result<()> {
        let args = [
            Value::Blob(Bytes::copy_from_slice(address)),
            Value::U8(r#type),
        ];
        self.call(&cmd::SYSTEM_SET_IDENTITY_ADDRESS, &args)?.success()?;
        Ok(())
    }

    /// `system_get_identity_address` (class 0x01, id 0x15).
    pub fn system_get_identity_address(&self) -> Result<SystemGetIdentityAddressResponse> {
        let reply = self.call(&cmd::SYSTEM_GET_IDENTITY_ADDRESS, &[])?.success()?;
        Ok(SystemGetIdentityAddressResponse {
            address: reply.blob(1)?,
            r#type: reply.u8(2)?,
        })
    }

    /// `system_get_random_data` (class 0x01, id 0x0b).
    ///
    /// Variable-length output is copied into the caller's buffer, truncated to
    /// its capacity; the reported length is always the full length.
    pub fn system_get_random_data(&self, length: u8, data: &mut [u8]) -> Result<usize> {
        let reply = self.call(&cmd::SYSTEM_GET_RANDOM_DATA, &[Value::U8(length)])?.success()?;
        Ok(reply.copy_array(1, data)?)
    }

    /// `system_data_buffer_write` (class 0x01, id 0x12).
    pub fn system_data_buffer_write(&self, data: &[u8]) -> Result<()> {
        let args = [Value::Array(Bytes::copy_from_slice(data))];
        self.call(&cmd::SYSTEM_DATA_BUFFER_WRITE, &args)?.success()?;
        Ok(())
    }

    /// `system_data_buffer_clear` (class 0x01, id 0x14).
    pub fn system_data_buffer_clear(&self) -> Result<()> {
        self.call(&cmd::SYSTEM_DATA_BUFFER_CLEAR, &[])?.success()?;
        Ok(())
    }

    /// `system_get_counters` (class 0x01, id 0x0f).
    pub fn system_get_counters(&self, reset: u8) -> Result<SystemGetCountersResponse> {
        let reply = self.call(&cmd::SYSTEM_GET_COUNTERS, &[Value::U8(reset)])?.success()?;
        Ok(SystemGetCountersResponse {
            tx_packets: reply.u16(1)?,
            rx_packets: reply.u16(2)?,
            crc_errors: reply.u16(3)?,
            failures: reply.u16(4)?,
        })
    }

    /// `system_set_lazy_soft_timer` (class 0x01, id 0x1a).
    pub fn system_set_lazy_soft_timer(
        &self,
        time: u32,
        slack: u32,
        handle: u8,
        single_shot: u8,
    ) -> Result<()> {
        let args = [
            Value::U32(time),
            Value::U32(slack),
            Value::U8(handle),
            Value::U8(single_shot),
        ];
        self.call(&cmd::SYSTEM_SET_LAZY_SOFT_TIMER, &args)?.success()?;
        Ok(())
    }
}
