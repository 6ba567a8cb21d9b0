//! One typed method per catalog command.
//!
//! Every method follows the same shape: pack the arguments against the
//! command's descriptor, dispatch, check the status, then unpack the outputs.
//! Scalars map to Rust integers, fixed blobs to `[u8; N]`, and
//! variable-length arrays to `&[u8]` inputs or caller-owned `&mut [u8]`
//! outputs.

#![allow(clippy::too_many_arguments)]

pub mod advertiser;
pub mod advertiser_past;
pub mod coex;
pub mod connection;
pub mod cte_receiver;
pub mod cte_transmitter;
pub mod dfu;
pub mod extended_advertiser;
pub mod gap;
pub mod gatt;
pub mod gatt_server;
pub mod gattdb;
pub mod l2cap;
pub mod legacy_advertiser;
pub mod nvm;
pub mod ota;
pub mod past_receiver;
pub mod periodic_advertiser;
pub mod scanner;
pub mod sm;
pub mod sync;
pub mod sync_past;
pub mod system;
pub mod test;
pub mod user;

pub use connection::{ConnectionGetSecurityStatusResponse, ConnectionGetTxPowerResponse};
pub use sm::{
    SmFindBondingByAddressResponse, SmGetBondingDetailsResponse, SmGetBondingHandlesResponse,
    SmSetOobResponse,
};
pub use system::{
    SystemGetCountersResponse, SystemGetIdentityAddressResponse, SystemGetTxPowerSettingResponse,
    SystemGetVersionResponse, SystemSetTxPowerResponse,
};
