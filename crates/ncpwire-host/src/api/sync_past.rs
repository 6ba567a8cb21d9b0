//! Typed `sync_past` commands.

use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `sync_past_transfer` (class 0x5b, id 0x00).
    pub fn sync_past_transfer(&self, connection: u8, service_data: u16, sync: u16) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(service_data),
            Value::U16(sync),
        ];
        self.call(&cmd::SYNC_PAST_TRANSFER, &args)?.success()?;
        Ok(())
    }
}
