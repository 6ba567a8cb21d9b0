//! Typed `cte_receiver` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `cte_receiver_set_dtm_parameters` (class 0x45, id 0x05).
    pub fn cte_receiver_set_dtm_parameters(
        &self,
        cte_length: u8,
        cte_type: u8,
        slot_durations: u8,
        switching_pattern: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(cte_length),
            Value::U8(cte_type),
            Value::U8(slot_durations),
            Value::Array(Bytes::copy_from_slice(switching_pattern)),
        ];
        self.call(&cmd::CTE_RECEIVER_SET_DTM_PARAMETERS, &args)?.success()?;
        Ok(())
    }

    /// `cte_receiver_clear_dtm_parameters` (class 0x45, id 0x06).
    pub fn cte_receiver_clear_dtm_parameters(&self) -> Result<()> {
        self.call(&cmd::CTE_RECEIVER_CLEAR_DTM_PARAMETERS, &[])?.success()?;
        Ok(())
    }

    /// `cte_receiver_set_sync_cte_type` (class 0x45, id 0x09).
    pub fn cte_receiver_set_sync_cte_type(&self, sync_cte_type: u8) -> Result<()> {
        let args = [Value::U8(sync_cte_type)];
        self.call(&cmd::CTE_RECEIVER_SET_SYNC_CTE_TYPE, &args)?.success()?;
        Ok(())
    }

    /// `cte_receiver_set_default_sync_receive_parameters` (class 0x45, id 0x0a).
    pub fn cte_receiver_set_default_sync_receive_parameters(
        &self,
        mode: u8,
        skip: u16,
        timeout: u16,
        sync_cte_type: u8,
        reporting_mode: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(mode),
            Value::U16(skip),
            Value::U16(timeout),
            Value::U8(sync_cte_type),
            Value::U8(reporting_mode),
        ];
        self.call(
            &cmd::CTE_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS,
            &args,
        )?
        .success()?;
        Ok(())
    }

    /// `cte_receiver_set_sync_receive_parameters` (class 0x45, id 0x0b).
    pub fn cte_receiver_set_sync_receive_parameters(
        &self,
        connection: u8,
        mode: u8,
        skip: u16,
        timeout: u16,
        sync_cte_type: u8,
        reporting_mode: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U8(mode),
            Value::U16(skip),
            Value::U16(timeout),
            Value::U8(sync_cte_type),
            Value::U8(reporting_mode),
        ];
        self.call(&cmd::CTE_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS, &args)?.success()?;
        Ok(())
    }

    /// `cte_receiver_configure` (class 0x45, id 0x00).
    pub fn cte_receiver_configure(&self, flags: u8) -> Result<()> {
        self.call(&cmd::CTE_RECEIVER_CONFIGURE, &[Value::U8(flags)])?.success()?;
        Ok(())
    }

    /// `cte_receiver_enable_connection_cte` (class 0x45, id 0x01).
    pub fn cte_receiver_enable_connection_cte(
        &self,
        connection: u8,
        interval: u16,
        cte_length: u8,
        cte_type: u8,
        slot_durations: u8,
        switching_pattern: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(interval),
            Value::U8(cte_length),
            Value::U8(cte_type),
            Value::U8(slot_durations),
            Value::Array(Bytes::copy_from_slice(switching_pattern)),
        ];
        self.call(&cmd::CTE_RECEIVER_ENABLE_CONNECTION_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_receiver_disable_connection_cte` (class 0x45, id 0x02).
    pub fn cte_receiver_disable_connection_cte(&self, connection: u8) -> Result<()> {
        let args = [Value::U8(connection)];
        self.call(&cmd::CTE_RECEIVER_DISABLE_CONNECTION_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_receiver_enable_connectionless_cte` (class 0x45, id 0x03).
    pub fn cte_receiver_enable_connectionless_cte(
        &self,
        sync: u16,
        slot_durations: u8,
        cte_count: u8,
        switching_pattern: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U16(sync),
            Value::U8(slot_durations),
            Value::U8(cte_count),
            Value::Array(Bytes::copy_from_slice(switching_pattern)),
        ];
        self.call(&cmd::CTE_RECEIVER_ENABLE_CONNECTIONLESS_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_receiver_disable_connectionless_cte` (class 0x45, id 0x04).
    pub fn cte_receiver_disable_connectionless_cte(&self, sync: u16) -> Result<()> {
        let args = [Value::U16(sync)];
        self.call(&cmd::CTE_RECEIVER_DISABLE_CONNECTIONLESS_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_receiver_enable_silabs_cte` (class 0x45, id 0x07).
    pub fn cte_receiver_enable_silabs_cte(
        &self,
        slot_durations: u8,
        cte_count: u8,
        switching_pattern: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(slot_durations),
            Value::U8(cte_count),
            Value::Array(Bytes::copy_from_slice(switching_pattern)),
        ];
        self.call(&cmd::CTE_RECEIVER_ENABLE_SILABS_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_receiver_disable_silabs_cte` (class 0x45, id 0x08).
    pub fn cte_receiver_disable_silabs_cte(&self) -> Result<()> {
        self.call(&cmd::CTE_RECEIVER_DISABLE_SILABS_CTE, &[])?.success()?;
        Ok(())
    }
}
