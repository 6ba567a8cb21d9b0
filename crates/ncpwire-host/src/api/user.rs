//! Typed `user` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `user_message_to_target` (class 0xff, id 0x00).
    ///
    /// Variable-length output is copied into the caller's buffer, truncated to
    /// its capacity; the reported length is always the full length.
    pub fn user_message_to_target(&self, data: &[u8], response: &mut [u8]) -> Result<usize> {
        let args = [Value::Array(Bytes::copy_from_slice(data))];
        let reply = self.call(&cmd::USER_MESSAGE_TO_TARGET, &args)?.success()?;
        Ok(reply.copy_array(1, response)?)
    }

    /// `user_manage_event_filter` (class 0xff, id 0x01).
    pub fn user_manage_event_filter(&self, data: &[u8]) -> Result<()> {
        let args = [Value::Array(Bytes::copy_from_slice(data))];
        self.call(&cmd::USER_MANAGE_EVENT_FILTER, &args)?.success()?;
        Ok(())
    }

    /// `user_reset_to_dfu` (class 0xff, id 0x02).
    ///
    /// Fire-and-forget: returns once the command is written.
    pub fn user_reset_to_dfu(&self) -> Result<()> {
        self.notify(&cmd::USER_RESET_TO_DFU, &[])
    }
}
