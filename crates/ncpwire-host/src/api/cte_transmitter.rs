//! Typed `cte_transmitter` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `cte_transmitter_set_dtm_parameters` (class 0x44, id 0x04).
    pub fn cte_transmitter_set_dtm_parameters(
        &self,
        cte_length: u8,
        cte_type: u8,
        switching_pattern: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(cte_length),
            Value::U8(cte_type),
            Value::Array(Bytes::copy_from_slice(switching_pattern)),
        ];
        self.call(&cmd::CTE_TRANSMITTER_SET_DTM_PARAMETERS, &args)?.success()?;
        Ok(())
    }

    /// `cte_transmitter_clear_dtm_parameters` (class 0x44, id 0x05).
    pub fn cte_transmitter_clear_dtm_parameters(&self) -> Result<()> {
        self.call(&cmd::CTE_TRANSMITTER_CLEAR_DTM_PARAMETERS, &[])?.success()?;
        Ok(())
    }

    /// `cte_transmitter_enable_connection_cte` (class 0x44, id 0x00).
    pub fn cte_transmitter_enable_connection_cte(
        &self,
        connection: u8,
        cte_types: u8,
        switching_pattern: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U8(cte_types),
            Value::Array(Bytes::copy_from_slice(switching_pattern)),
        ];
        self.call(&cmd::CTE_TRANSMITTER_ENABLE_CONNECTION_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_transmitter_disable_connection_cte` (class 0x44, id 0x01).
    pub fn cte_transmitter_disable_connection_cte(&self, connection: u8) -> Result<()> {
        let args = [Value::U8(connection)];
        self.call(&cmd::CTE_TRANSMITTER_DISABLE_CONNECTION_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_transmitter_enable_connectionless_cte` (class 0x44, id 0x02).
    pub fn cte_transmitter_enable_connectionless_cte(
        &self,
        handle: u8,
        cte_length: u8,
        cte_type: u8,
        cte_count: u8,
        switching_pattern: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(handle),
            Value::U8(cte_length),
            Value::U8(cte_type),
            Value::U8(cte_count),
            Value::Array(Bytes::copy_from_slice(switching_pattern)),
        ];
        self.call(&cmd::CTE_TRANSMITTER_ENABLE_CONNECTIONLESS_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_transmitter_disable_connectionless_cte` (class 0x44, id 0x03).
    pub fn cte_transmitter_disable_connectionless_cte(&self, handle: u8) -> Result<()> {
        let args = [Value::U8(handle)];
        self.call(&cmd::CTE_TRANSMITTER_DISABLE_CONNECTIONLESS_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_transmitter_enable_silabs_cte` (class 0x44, id 0x06).
    pub fn cte_transmitter_enable_silabs_cte(
        &self,
        handle: u8,
        cte_length: u8,
        cte_type: u8,
        cte_count: u8,
        switching_pattern: &[u8],
    ) -> Result<()> {
        let args = [
            Value::U8(handle),
            Value::U8(cte_length),
            Value::U8(cte_type),
            Value::U8(cte_count),
            Value::Array(Bytes::copy_from_slice(switching_pattern)),
        ];
        self.call(&cmd::CTE_TRANSMITTER_ENABLE_SILABS_CTE, &args)?.success()?;
        Ok(())
    }

    /// `cte_transmitter_disable_silabs_cte` (class 0x44, id 0x07).
    pub fn cte_transmitter_disable_silabs_cte(&self, handle: u8) -> Result<()> {
        let args = [Value::U8(handle)];
        self.call(&cmd::CTE_TRANSMITTER_DISABLE_SILABS_CTE, &args)?.success()?;
        Ok(())
    }
}
