//! Typed `connection` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

/// Output of [`Dispatcher::connection_get_tx_power`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionGetTxPowerResponse {
    pub current_level: i8,
    pub max_level: i8,
}

/// Output of [`Dispatcher::connection_get_security_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionGetSecurityStatusResponse {
    pub security_mode: u8,
    pub key_size: u8,
    pub bonding_handle: u8,
}

impl<T: Transport> Dispatcher<T> {
    /// `connection_set_default_parameters` (class 0x06, id 0x00).
    pub fn connection_set_default_parameters(
        &self,
        min_interval: u16,
        max_interval: u16,
        latency: u16,
        timeout: u16,
        min_ce_length: u16,
        max_ce_length: u16,
    ) -> Result<()> {
        let args = [
            Value::U16(min_interval),
            Value::U16(max_interval),
            Value::U16(latency),
            Value::U16(timeout),
            Value::U16(min_ce_length),
            Value::U16(max_ce_length),
        ];
        self.call(&cmd::CONNECTION_SET_DEFAULT_PARAMETERS, &args)?.success()?;
        Ok(())
    }

    /// `connection_set_default_preferred_phy` (class 0x06, id 0x01).
    pub fn connection_set_default_preferred_phy(
        &self,
        preferred_phy: u8,
        accepted_phy: u8,
    ) -> Result<()> {
        let args = [Value::U8(preferred_phy), Value::U8(accepted_phy)];
        self.call(&cmd::CONNECTION_SET_DEFAULT_PREFERRED_PHY, &args)?.success()?;
        Ok(())
    }

    /// `connection_open` (class 0x06, id 0x04).
    pub fn connection_open(
        &self,
        address: &[u8; 6],
        address_type: u8,
        initiating_phy: u8,
    ) -> Result<u8> {
        let args = [
            Value::Blob(Bytes::copy_from_slice(address)),
            Value::U8(address_type),
            Value::U8(initiating_phy),
        ];
        let reply = self.call(&cmd::CONNECTION_OPEN, &args)?.success()?;
        Ok(reply.u8(1)?)
    }

    /// `connection_set_parameters` (class 0x06, id 0x06).
    pub fn connection_set_parameters(
        &self,
        connection: u8,
        min_interval: u16,
        max_interval: u16,
        latency: u16,
        timeout: u16,
        min_ce_length: u16,
        max_ce_length: u16,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(min_interval),
            Value::U16(max_interval),
            Value::U16(latency),
            Value::U16(timeout),
            Value::U16(min_ce_length),
            Value::U16(max_ce_length),
        ];
        self.call(&cmd::CONNECTION_SET_PARAMETERS, &args)?.success()?;
        Ok(())
    }

    /// `connection_set_preferred_phy` (class 0x06, id 0x08).
    pub fn connection_set_preferred_phy(
        &self,
        connection: u8,
        preferred_phy: u8,
        accepted_phy: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U8(preferred_phy),
            Value::U8(accepted_phy),
        ];
        self.call(&cmd::CONNECTION_SET_PREFERRED_PHY, &args)?.success()?;
        Ok(())
    }

    /// `connection_disable_slave_latency` (class 0x06, id 0x03).
    pub fn connection_disable_slave_latency(&self, connection: u8, disable: u8) -> Result<()> {
        let args = [Value::U8(connection), Value::U8(disable)];
        self.call(&cmd::CONNECTION_DISABLE_SLAVE_LATENCY, &args)?.success()?;
        Ok(())
    }

    /// `connection_get_rssi` (class 0x06, id 0x02).
    pub fn connection_get_rssi(&self, connection: u8) -> Result<()> {
        self.call(&cmd::CONNECTION_GET_RSSI, &[Value::U8(connection)])?.success()?;
        Ok(())
    }

    /// `connection_read_channel_map` (class 0x06, id 0x07).
    ///
    /// Variable-length output is copied into the caller's buffer, truncated to
    /// its capacity; the reported length is always the full length.
    pub fn connection_read_channel_map(
        &self,
        connection: u8,
        channel_map: &mut [u8],
    ) -> Result<usize> {
        let args = [Value::U8(connection)];
        let reply = self.call(&cmd::CONNECTION_READ_CHANNEL_MAP, &args)?.success()?;
        Ok(reply.copy_array(1, channel_map)?)
    }

    /// `connection_set_power_reporting` (class 0x06, id 0x09).
    pub fn connection_set_power_reporting(&self, connection: u8, mode: u8) -> Result<()> {
        let args = [Value::U8(connection), Value::U8(mode)];
        self.call(&cmd::CONNECTION_SET_POWER_REPORTING, &args)?.success()?;
        Ok(())
    }

    /// `connection_set_remote_power_reporting` (class 0x06, id 0x0a).
    pub fn connection_set_remote_power_reporting(&self, connection: u8, mode: u8) -> Result<()> {
        let args = [Value::U8(connection), Value::U8(mode)];
        self.call(&cmd::CONNECTION_SET_REMOTE_POWER_REPORTING, &args)?.success()?;
        Ok(())
    }

    /// `connection_get_tx_power` (class 0x06, id 0x0b).
    pub fn connection_get_tx_power(
        &self,
        connection: u8,
        phy: u8,
    ) -> Result<ConnectionGetTxPowerResponse> {
        let args = [Value::U8(connection), Value::U8(phy)];
        let reply = self.call(&cmd::CONNECTION_GET_TX_POWER, &args)?.success()?;
        Ok(ConnectionGetTxPowerResponse {
            current_level: reply.i8(1)?,
            max_level: reply.i8(2)?,
        })
    }

    /// `connection_get_remote_tx_power` (class 0x06, id 0x0c).
    pub fn connection_get_remote_tx_power(&self, connection: u8, phy: u8) -> Result<()> {
        let args = [Value::U8(connection), Value::U8(phy)];
        self.call(&cmd::CONNECTION_GET_REMOTE_TX_POWER, &args)?.success()?;
        Ok(())
    }

    /// `connection_close` (class 0x06, id 0x05).
    pub fn connection_close(&self, connection: u8) -> Result<()> {
        self.call(&cmd::CONNECTION_CLOSE, &[Value::U8(connection)])?.success()?;
        Ok(())
    }

    /// `connection_read_remote_used_features` (class 0x06, id 0x0d).
    pub fn connection_read_remote_used_features(&self, connection: u8) -> Result<()> {
        let args = [Value::U8(connection)];
        self.call(&cmd::CONNECTION_READ_REMOTE_USED_FEATURES, &args)?.success()?;
        Ok(())
    }

    /// `connection_get_security_status` (class 0x06, id 0x0e).
    pub fn connection_get_security_status(
        &self,
        connection: u8,
    ) -> Result<ConnectionGetSecurityStatusResponse> {
        let args = [Value::U8(connection)];
        let reply = self.call(&cmd::CONNECTION_GET_SECURITY_STATUS, &args)?.success()?;
        Ok(ConnectionGetSecurityStatusResponse {
            security_mode: reply.u8(1)?,
            key_size: reply.u8(2)?,
            bonding_handle: reply.u8(3)?,
        })
    }
}
