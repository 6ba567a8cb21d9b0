//! Typed `dfu` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `dfu_reset` (class 0x00, id 0x00).
    ///
    /// Fire-and-forget: returns once the command is written.
    #[deprecated]
    pub fn dfu_reset(&self, dfu: u8) -> Result<()> {
        self.notify(&cmd::DFU_RESET, &[Value::U8(dfu)])
    }

    /// `dfu_flash_set_address` (class 0x00, id 0x01).
    pub fn dfu_flash_set_address(&self, address: u32) -> Result<()> {
        self.call(&cmd::DFU_FLASH_SET_ADDRESS, &[Value::U32(address)])?.success()?;
        Ok(())
    }

    /// `dfu_flash_upload` (class 0x00, id 0x02).
    pub fn dfu_flash_upload(&self, data: &[u8]) -> Result<()> {
        let args = [Value::Array(Bytes::copy_from_slice(data))];
        self.call(&cmd::DFU_FLASH_UPLOAD, &args)?.success()?;
        Ok(())
    }

    /// `dfu_flash_upload_finish` (class 0x00, id 0x03).
    pub fn dfu_flash_upload_finish(&self) -> Result<()> {
        self.call(&cmd::DFU_FLASH_UPLOAD_FINISH, &[])?.success()?;
        Ok(())
    }
}
