//! Typed `coex` commands.

use ncpwire_catalog::table::cmd;
use ncpwire_catalog::Value;
use ncpwire_transport::Transport;

use crate::dispatcher::Dispatcher;
use crate::error::Result;

impl<T: Transport> Dispatcher<T> {
    /// `coex_set_options` (class 0x20, id 0x00).
    pub fn coex_set_options(&self, mask: u32, options: u32) -> Result<()> {
        let args = [Value::U32(mask), Value::U32(options)];
        self.call(&cmd::COEX_SET_OPTIONS, &args)?.success()?;
        Ok(())
    }

    /// `coex_set_parameters` (class 0x20, id 0x02).
    pub fn coex_set_parameters(
        &self,
        priority: u8,
        request: u8,
        pwm_period: u8,
        pwm_dutycycle: u8,
    ) -> Result<()> {
        let args = [
            Value::U8(priority),
            Value::U8(request),
            Value::U8(pwm_period),
            Value::U8(pwm_dutycycle),
        ];
        self.call(&cmd::COEX_SET_PARAMETERS, &args)?.success()?;
        Ok(())
    }

    /// `coex_set_directional_priority_pulse` (class 0x20, id 0x03).
    pub fn coex_set_directional_priority_pulse(&self, pulse: u8) -> Result<()> {
        let args = [Value::U8(pulse)];
        self.call(&cmd::COEX_SET_DIRECTIONAL_PRIORITY_PULSE, &args)?.success()?;
        Ok(())
    }

    /// `coex_get_counters` (class 0x20, id 0x01).
    ///
    /// Variable-length output is copied into the caller's buffer, truncated to
    /// its capacity; the reported length is always the full length.
    pub fn coex_get_counters(&self, reset: u8, counters: &mut [u8]) -> Result<usize> {
        let reply = self.call(&cmd::COEX_GET_COUNTERS, &[Value::U8(reset)])?.success()?;
        Ok(reply.copy_array(1, counters)?)
    }
}
