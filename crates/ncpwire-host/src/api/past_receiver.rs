//! Typed `past_receiver` commands.

use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `past_receiver_set_default_sync_receive_parameters` (class 0x51, id 0x00).
    pub fn past_receiver_set_default_sync_receive_parameters(
        &self,
        mode: u8,
        skip: u16,
        timeout: u16,
        reporting_mode: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(mode),
            Value::U16(skip),
            Value::U16(timeout),
            Value::U8(reporting_mode),
        ];
        self.call(
            &cmd::PAST_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS,
            &args,
        )?
        .success()?;
        Ok(())
    }

    /// `past_receiver_set_sync_receive_parameters` (class 0x51, id 0x01).
    pub fn past_receiver_set_sync_receive_parameters(
        &self,
        connection: u8,
        mode: u8,
        skip: u16,
        timeout: u16,
        reporting_mode: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U8(mode),
            Value::U16(skip),
            Value::U16(timeout),
            Value::U8(reporting_mode),
        ];
        self.call(&cmd::PAST_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS, &args)?.success()?;
        Ok(())
    }
}
