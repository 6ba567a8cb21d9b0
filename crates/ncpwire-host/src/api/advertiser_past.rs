//! Typed `advertiser_past` commands.

use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `advertiser_past_transfer` (class 0x52, id 0x00).
    pub fn advertiser_past_transfer(
        &self,
        connection: u8,
        service_data: u16,
        advertising_set: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(connection),
            Value::U16(service_data),
            Value::U8(advertising_set),
        ];
        self.call(&cmd::ADVERTISER_PAST_TRANSFER, &args)?.success()?;
        Ok(())
    }
}
