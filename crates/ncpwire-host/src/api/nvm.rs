//! Typed `nvm` commands.

use bytes::Bytes;
use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `nvm_save` (class 0x0d, id 0x02).
    pub fn nvm_save(&self, key: u16, value: &[u8]) -> Result<()> {
        let args = [Value::U16(key), Value::Array(Bytes::copy_from_slice(value))];
        self.call(&cmd::NVM_SAVE, &args)?.success()?;
        Ok(())
    }

    /// `nvm_load` (class 0x0d, id 0x03).
    ///
    /// Variable-length output is copied into the caller's buffer, truncated to
    /// its capacity; the reported length is always the full length.
    pub fn nvm_load(&self, key: u16, value: &mut [u8]) -> Result<usize> {
        let reply = self.call(&cmd::NVM_LOAD, &[Value::U16(key)])?.success()?;
        Ok(reply.copy_array(1, value)?)
    }

    /// `nvm_erase` (class 0x0d, id 0x04).
    pub fn nvm_erase(&self, key: u16) -> Result<()> {
        self.call(&cmd::NVM_ERASE, &[Value::U16(key)])?.success()?;
        Ok(())
    }

    /// `nvm_erase_all` (class 0x0d, id 0x01).
    pub fn nvm_erase_all(&self) -> Result<()> {
        self.call(&cmd::NVM_ERASE_ALL, &[])?.success()?;
        Ok(())
    }
}
