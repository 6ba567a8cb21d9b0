//! Message catalog and payload codec for the NCP protocol.
//!
//! Every command, response and event is described by an ordered field
//! layout. The [`payload`] codec encodes and decodes against those layouts;
//! the [`Catalog`] indexes them by `(class_id, id)` so a frame can be
//! decoded knowing only its header.
//!
//! The built-in tables in [`table`] cover the Bluetooth NCP command set.

pub mod class;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod message;
pub mod payload;
pub mod registry;
pub mod table;
pub mod value;

pub use descriptor::{CommandDescriptor, EventDescriptor};
pub use error::{CodecError, Result};
pub use field::{Field, FieldType, LengthPrefix};
pub use message::Message;
pub use payload::{copy_out, decode_payload, encode_payload, encoded_len, MAX_PAYLOAD};
pub use registry::Catalog;
pub use value::Value;
