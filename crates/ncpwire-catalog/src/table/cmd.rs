//! Command descriptors.
//!
//! One entry per command: its request parameters and, unless the command is
//! fire-and-forget, the response layout (always led by the `result` status).

use crate::class;
use crate::descriptor::CommandDescriptor;
use crate::field::Field;

const DFU_RESET_PARAMS: &[Field] = &[Field::u8("dfu")];
pub static DFU_RESET: CommandDescriptor = CommandDescriptor {
    class_id: class::DFU,
    id: 0x00,
    name: "dfu_reset",
    params: DFU_RESET_PARAMS,
    response: None,
    deprecated: true,
};

const DFU_FLASH_SET_ADDRESS_PARAMS: &[Field] = &[Field::u32("address")];
const DFU_FLASH_SET_ADDRESS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static DFU_FLASH_SET_ADDRESS: CommandDescriptor = CommandDescriptor {
    class_id: class::DFU,
    id: 0x01,
    name: "dfu_flash_set_address",
    params: DFU_FLASH_SET_ADDRESS_PARAMS,
    response: Some(DFU_FLASH_SET_ADDRESS_RESPONSE),
    deprecated: false,
};

const DFU_FLASH_UPLOAD_PARAMS: &[Field] = &[Field::array8("data")];
const DFU_FLASH_UPLOAD_RESPONSE: &[Field] = &[Field::u16("result")];
pub static DFU_FLASH_UPLOAD: CommandDescriptor = CommandDescriptor {
    class_id: class::DFU,
    id: 0x02,
    name: "dfu_flash_upload",
    params: DFU_FLASH_UPLOAD_PARAMS,
    response: Some(DFU_FLASH_UPLOAD_RESPONSE),
    deprecated: false,
};

const DFU_FLASH_UPLOAD_FINISH_RESPONSE: &[Field] = &[Field::u16("result")];
pub static DFU_FLASH_UPLOAD_FINISH: CommandDescriptor = CommandDescriptor {
    class_id: class::DFU,
    id: 0x03,
    name: "dfu_flash_upload_finish",
    params: &[],
    response: Some(DFU_FLASH_UPLOAD_FINISH_RESPONSE),
    deprecated: false,
};

const SYSTEM_HELLO_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_HELLO: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x00,
    name: "system_hello",
    params: &[],
    response: Some(SYSTEM_HELLO_RESPONSE),
    deprecated: false,
};

const SYSTEM_START_BLUETOOTH_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_START_BLUETOOTH: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x1c,
    name: "system_start_bluetooth",
    params: &[],
    response: Some(SYSTEM_START_BLUETOOTH_RESPONSE),
    deprecated: false,
};

const SYSTEM_STOP_BLUETOOTH_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_STOP_BLUETOOTH: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x1d,
    name: "system_stop_bluetooth",
    params: &[],
    response: Some(SYSTEM_STOP_BLUETOOTH_RESPONSE),
    deprecated: false,
};

const SYSTEM_GET_VERSION_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("major"),
    Field::u16("minor"),
    Field::u16("patch"),
    Field::u16("build"),
    Field::u32("bootloader"),
    Field::u32("hash"),
];
pub static SYSTEM_GET_VERSION: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x1b,
    name: "system_get_version",
    params: &[],
    response: Some(SYSTEM_GET_VERSION_RESPONSE),
    deprecated: false,
};

const SYSTEM_RESET_PARAMS: &[Field] = &[Field::u8("dfu")];
pub static SYSTEM_RESET: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x01,
    name: "system_reset",
    params: SYSTEM_RESET_PARAMS,
    response: None,
    deprecated: false,
};

const SYSTEM_HALT_PARAMS: &[Field] = &[Field::u8("halt")];
const SYSTEM_HALT_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_HALT: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x0c,
    name: "system_halt",
    params: SYSTEM_HALT_PARAMS,
    response: Some(SYSTEM_HALT_RESPONSE),
    deprecated: false,
};

const SYSTEM_LINKLAYER_CONFIGURE_PARAMS: &[Field] = &[Field::u8("key"), Field::array8("data")];
const SYSTEM_LINKLAYER_CONFIGURE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_LINKLAYER_CONFIGURE: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x0e,
    name: "system_linklayer_configure",
    params: SYSTEM_LINKLAYER_CONFIGURE_PARAMS,
    response: Some(SYSTEM_LINKLAYER_CONFIGURE_RESPONSE),
    deprecated: false,
};

const SYSTEM_SET_TX_POWER_PARAMS: &[Field] = &[Field::i16("min_power"), Field::i16("max_power")];
const SYSTEM_SET_TX_POWER_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::i16("set_min"),
    Field::i16("set_max"),
];
pub static SYSTEM_SET_TX_POWER: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x17,
    name: "system_set_tx_power",
    params: SYSTEM_SET_TX_POWER_PARAMS,
    response: Some(SYSTEM_SET_TX_POWER_RESPONSE),
    deprecated: false,
};

const SYSTEM_GET_TX_POWER_SETTING_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::i16("support_min"),
    Field::i16("support_max"),
    Field::i16("set_min"),
    Field::i16("set_max"),
    Field::i16("rf_path_gain"),
];
pub static SYSTEM_GET_TX_POWER_SETTING: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x18,
    name: "system_get_tx_power_setting",
    params: &[],
    response: Some(SYSTEM_GET_TX_POWER_SETTING_RESPONSE),
    deprecated: false,
};

const SYSTEM_SET_IDENTITY_ADDRESS_PARAMS: &[Field] = &[Field::addr("address"), Field::u8("type")];
const SYSTEM_SET_IDENTITY_ADDRESS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_SET_IDENTITY_ADDRESS: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x13,
    name: "system_set_identity_address",
    params: SYSTEM_SET_IDENTITY_ADDRESS_PARAMS,
    response: Some(SYSTEM_SET_IDENTITY_ADDRESS_RESPONSE),
    deprecated: false,
};

const SYSTEM_GET_IDENTITY_ADDRESS_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::addr("address"),
    Field::u8("type"),
];
pub static SYSTEM_GET_IDENTITY_ADDRESS: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x15,
    name: "system_get_identity_address",
    params: &[],
    response: Some(SYSTEM_GET_IDENTITY_ADDRESS_RESPONSE),
    deprecated: false,
};

const SYSTEM_GET_RANDOM_DATA_PARAMS: &[Field] = &[Field::u8("length")];
const SYSTEM_GET_RANDOM_DATA_RESPONSE: &[Field] = &[Field::u16("result"), Field::array8("data")];
pub static SYSTEM_GET_RANDOM_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x0b,
    name: "system_get_random_data",
    params: SYSTEM_GET_RANDOM_DATA_PARAMS,
    response: Some(SYSTEM_GET_RANDOM_DATA_RESPONSE),
    deprecated: false,
};

const SYSTEM_DATA_BUFFER_WRITE_PARAMS: &[Field] = &[Field::array8("data")];
const SYSTEM_DATA_BUFFER_WRITE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_DATA_BUFFER_WRITE: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x12,
    name: "system_data_buffer_write",
    params: SYSTEM_DATA_BUFFER_WRITE_PARAMS,
    response: Some(SYSTEM_DATA_BUFFER_WRITE_RESPONSE),
    deprecated: false,
};

const SYSTEM_DATA_BUFFER_CLEAR_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_DATA_BUFFER_CLEAR: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x14,
    name: "system_data_buffer_clear",
    params: &[],
    response: Some(SYSTEM_DATA_BUFFER_CLEAR_RESPONSE),
    deprecated: false,
};

const SYSTEM_GET_COUNTERS_PARAMS: &[Field] = &[Field::u8("reset")];
const SYSTEM_GET_COUNTERS_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("tx_packets"),
    Field::u16("rx_packets"),
    Field::u16("crc_errors"),
    Field::u16("failures"),
];
pub static SYSTEM_GET_COUNTERS: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x0f,
    name: "system_get_counters",
    params: SYSTEM_GET_COUNTERS_PARAMS,
    response: Some(SYSTEM_GET_COUNTERS_RESPONSE),
    deprecated: false,
};

const SYSTEM_SET_LAZY_SOFT_TIMER_PARAMS: &[Field] = &[
    Field::u32("time"),
    Field::u32("slack"),
    Field::u8("handle"),
    Field::u8("single_shot"),
];
const SYSTEM_SET_LAZY_SOFT_TIMER_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYSTEM_SET_LAZY_SOFT_TIMER: CommandDescriptor = CommandDescriptor {
    class_id: class::SYSTEM,
    id: 0x1a,
    name: "system_set_lazy_soft_timer",
    params: SYSTEM_SET_LAZY_SOFT_TIMER_PARAMS,
    response: Some(SYSTEM_SET_LAZY_SOFT_TIMER_RESPONSE),
    deprecated: false,
};

const GAP_SET_PRIVACY_MODE_PARAMS: &[Field] = &[Field::u8("privacy"), Field::u8("interval")];
const GAP_SET_PRIVACY_MODE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GAP_SET_PRIVACY_MODE: CommandDescriptor = CommandDescriptor {
    class_id: class::GAP,
    id: 0x01,
    name: "gap_set_privacy_mode",
    params: GAP_SET_PRIVACY_MODE_PARAMS,
    response: Some(GAP_SET_PRIVACY_MODE_RESPONSE),
    deprecated: false,
};

const GAP_SET_DATA_CHANNEL_CLASSIFICATION_PARAMS: &[Field] = &[Field::array8("channel_map")];
const GAP_SET_DATA_CHANNEL_CLASSIFICATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GAP_SET_DATA_CHANNEL_CLASSIFICATION: CommandDescriptor = CommandDescriptor {
    class_id: class::GAP,
    id: 0x02,
    name: "gap_set_data_channel_classification",
    params: GAP_SET_DATA_CHANNEL_CLASSIFICATION_PARAMS,
    response: Some(GAP_SET_DATA_CHANNEL_CLASSIFICATION_RESPONSE),
    deprecated: false,
};

const GAP_ENABLE_WHITELISTING_PARAMS: &[Field] = &[Field::u8("enable")];
const GAP_ENABLE_WHITELISTING_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GAP_ENABLE_WHITELISTING: CommandDescriptor = CommandDescriptor {
    class_id: class::GAP,
    id: 0x03,
    name: "gap_enable_whitelisting",
    params: GAP_ENABLE_WHITELISTING_PARAMS,
    response: Some(GAP_ENABLE_WHITELISTING_RESPONSE),
    deprecated: false,
};

const ADVERTISER_CREATE_SET_RESPONSE: &[Field] = &[Field::u16("result"), Field::u8("handle")];
pub static ADVERTISER_CREATE_SET: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x01,
    name: "advertiser_create_set",
    params: &[],
    response: Some(ADVERTISER_CREATE_SET_RESPONSE),
    deprecated: false,
};

const ADVERTISER_CONFIGURE_PARAMS: &[Field] = &[Field::u8("advertising_set"), Field::u32("flags")];
const ADVERTISER_CONFIGURE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_CONFIGURE: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x12,
    name: "advertiser_configure",
    params: ADVERTISER_CONFIGURE_PARAMS,
    response: Some(ADVERTISER_CONFIGURE_RESPONSE),
    deprecated: false,
};

const ADVERTISER_SET_TIMING_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u32("interval_min"),
    Field::u32("interval_max"),
    Field::u16("duration"),
    Field::u8("maxevents"),
];
const ADVERTISER_SET_TIMING_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_SET_TIMING: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x03,
    name: "advertiser_set_timing",
    params: ADVERTISER_SET_TIMING_PARAMS,
    response: Some(ADVERTISER_SET_TIMING_RESPONSE),
    deprecated: false,
};

const ADVERTISER_SET_CHANNEL_MAP_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("channel_map"),
];
const ADVERTISER_SET_CHANNEL_MAP_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_SET_CHANNEL_MAP: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x04,
    name: "advertiser_set_channel_map",
    params: ADVERTISER_SET_CHANNEL_MAP_PARAMS,
    response: Some(ADVERTISER_SET_CHANNEL_MAP_RESPONSE),
    deprecated: false,
};

const ADVERTISER_SET_TX_POWER_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::i16("power"),
];
const ADVERTISER_SET_TX_POWER_RESPONSE: &[Field] = &[Field::u16("result"), Field::i16("set_power")];
pub static ADVERTISER_SET_TX_POWER: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x0b,
    name: "advertiser_set_tx_power",
    params: ADVERTISER_SET_TX_POWER_PARAMS,
    response: Some(ADVERTISER_SET_TX_POWER_RESPONSE),
    deprecated: false,
};

const ADVERTISER_SET_REPORT_SCAN_REQUEST_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("report_scan_req"),
];
const ADVERTISER_SET_REPORT_SCAN_REQUEST_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_SET_REPORT_SCAN_REQUEST: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x05,
    name: "advertiser_set_report_scan_request",
    params: ADVERTISER_SET_REPORT_SCAN_REQUEST_PARAMS,
    response: Some(ADVERTISER_SET_REPORT_SCAN_REQUEST_RESPONSE),
    deprecated: false,
};

const ADVERTISER_SET_RANDOM_ADDRESS_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("addr_type"),
    Field::addr("address"),
];
const ADVERTISER_SET_RANDOM_ADDRESS_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::addr("address_out"),
];
pub static ADVERTISER_SET_RANDOM_ADDRESS: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x10,
    name: "advertiser_set_random_address",
    params: ADVERTISER_SET_RANDOM_ADDRESS_PARAMS,
    response: Some(ADVERTISER_SET_RANDOM_ADDRESS_RESPONSE),
    deprecated: false,
};

const ADVERTISER_CLEAR_RANDOM_ADDRESS_PARAMS: &[Field] = &[Field::u8("advertising_set")];
const ADVERTISER_CLEAR_RANDOM_ADDRESS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_CLEAR_RANDOM_ADDRESS: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x11,
    name: "advertiser_clear_random_address",
    params: ADVERTISER_CLEAR_RANDOM_ADDRESS_PARAMS,
    response: Some(ADVERTISER_CLEAR_RANDOM_ADDRESS_RESPONSE),
    deprecated: false,
};

const ADVERTISER_STOP_PARAMS: &[Field] = &[Field::u8("advertising_set")];
const ADVERTISER_STOP_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_STOP: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x0a,
    name: "advertiser_stop",
    params: ADVERTISER_STOP_PARAMS,
    response: Some(ADVERTISER_STOP_RESPONSE),
    deprecated: false,
};

const ADVERTISER_DELETE_SET_PARAMS: &[Field] = &[Field::u8("advertising_set")];
const ADVERTISER_DELETE_SET_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_DELETE_SET: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x02,
    name: "advertiser_delete_set",
    params: ADVERTISER_DELETE_SET_PARAMS,
    response: Some(ADVERTISER_DELETE_SET_RESPONSE),
    deprecated: false,
};

const ADVERTISER_SET_PHY_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("primary_phy"),
    Field::u8("secondary_phy"),
];
const ADVERTISER_SET_PHY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_SET_PHY: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x06,
    name: "advertiser_set_phy",
    params: ADVERTISER_SET_PHY_PARAMS,
    response: Some(ADVERTISER_SET_PHY_RESPONSE),
    deprecated: true,
};

const ADVERTISER_SET_CONFIGURATION_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u32("configurations"),
];
const ADVERTISER_SET_CONFIGURATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_SET_CONFIGURATION: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x07,
    name: "advertiser_set_configuration",
    params: ADVERTISER_SET_CONFIGURATION_PARAMS,
    response: Some(ADVERTISER_SET_CONFIGURATION_RESPONSE),
    deprecated: true,
};

const ADVERTISER_CLEAR_CONFIGURATION_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u32("configurations"),
];
const ADVERTISER_CLEAR_CONFIGURATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_CLEAR_CONFIGURATION: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x08,
    name: "advertiser_clear_configuration",
    params: ADVERTISER_CLEAR_CONFIGURATION_PARAMS,
    response: Some(ADVERTISER_CLEAR_CONFIGURATION_RESPONSE),
    deprecated: true,
};

const ADVERTISER_SET_DATA_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("packet_type"),
    Field::array8("adv_data"),
];
const ADVERTISER_SET_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_SET_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x0f,
    name: "advertiser_set_data",
    params: ADVERTISER_SET_DATA_PARAMS,
    response: Some(ADVERTISER_SET_DATA_RESPONSE),
    deprecated: true,
};

const ADVERTISER_SET_LONG_DATA_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("packet_type"),
];
const ADVERTISER_SET_LONG_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_SET_LONG_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x0e,
    name: "advertiser_set_long_data",
    params: ADVERTISER_SET_LONG_DATA_PARAMS,
    response: Some(ADVERTISER_SET_LONG_DATA_RESPONSE),
    deprecated: true,
};

const ADVERTISER_START_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("discover"),
    Field::u8("connect"),
];
const ADVERTISER_START_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_START: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x09,
    name: "advertiser_start",
    params: ADVERTISER_START_PARAMS,
    response: Some(ADVERTISER_START_RESPONSE),
    deprecated: true,
};

const ADVERTISER_START_PERIODIC_ADVERTISING_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u16("interval_min"),
    Field::u16("interval_max"),
    Field::u32("flags"),
];
const ADVERTISER_START_PERIODIC_ADVERTISING_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_START_PERIODIC_ADVERTISING: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x0c,
    name: "advertiser_start_periodic_advertising",
    params: ADVERTISER_START_PERIODIC_ADVERTISING_PARAMS,
    response: Some(ADVERTISER_START_PERIODIC_ADVERTISING_RESPONSE),
    deprecated: true,
};

const ADVERTISER_STOP_PERIODIC_ADVERTISING_PARAMS: &[Field] = &[Field::u8("advertising_set")];
const ADVERTISER_STOP_PERIODIC_ADVERTISING_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_STOP_PERIODIC_ADVERTISING: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER,
    id: 0x0d,
    name: "advertiser_stop_periodic_advertising",
    params: ADVERTISER_STOP_PERIODIC_ADVERTISING_PARAMS,
    response: Some(ADVERTISER_STOP_PERIODIC_ADVERTISING_RESPONSE),
    deprecated: true,
};

const LEGACY_ADVERTISER_SET_DATA_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("type"),
    Field::array8("data"),
];
const LEGACY_ADVERTISER_SET_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static LEGACY_ADVERTISER_SET_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::LEGACY_ADVERTISER,
    id: 0x00,
    name: "legacy_advertiser_set_data",
    params: LEGACY_ADVERTISER_SET_DATA_PARAMS,
    response: Some(LEGACY_ADVERTISER_SET_DATA_RESPONSE),
    deprecated: false,
};

const LEGACY_ADVERTISER_GENERATE_DATA_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("discover"),
];
const LEGACY_ADVERTISER_GENERATE_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static LEGACY_ADVERTISER_GENERATE_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::LEGACY_ADVERTISER,
    id: 0x01,
    name: "legacy_advertiser_generate_data",
    params: LEGACY_ADVERTISER_GENERATE_DATA_PARAMS,
    response: Some(LEGACY_ADVERTISER_GENERATE_DATA_RESPONSE),
    deprecated: false,
};

const LEGACY_ADVERTISER_START_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("connect"),
];
const LEGACY_ADVERTISER_START_RESPONSE: &[Field] = &[Field::u16("result")];
pub static LEGACY_ADVERTISER_START: CommandDescriptor = CommandDescriptor {
    class_id: class::LEGACY_ADVERTISER,
    id: 0x02,
    name: "legacy_advertiser_start",
    params: LEGACY_ADVERTISER_START_PARAMS,
    response: Some(LEGACY_ADVERTISER_START_RESPONSE),
    deprecated: false,
};

const LEGACY_ADVERTISER_START_DIRECTED_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("connect"),
    Field::addr("peer_addr"),
    Field::u8("peer_addr_type"),
];
const LEGACY_ADVERTISER_START_DIRECTED_RESPONSE: &[Field] = &[Field::u16("result")];
pub static LEGACY_ADVERTISER_START_DIRECTED: CommandDescriptor = CommandDescriptor {
    class_id: class::LEGACY_ADVERTISER,
    id: 0x03,
    name: "legacy_advertiser_start_directed",
    params: LEGACY_ADVERTISER_START_DIRECTED_PARAMS,
    response: Some(LEGACY_ADVERTISER_START_DIRECTED_RESPONSE),
    deprecated: false,
};

const EXTENDED_ADVERTISER_SET_PHY_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("primary_phy"),
    Field::u8("secondary_phy"),
];
const EXTENDED_ADVERTISER_SET_PHY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static EXTENDED_ADVERTISER_SET_PHY: CommandDescriptor = CommandDescriptor {
    class_id: class::EXTENDED_ADVERTISER,
    id: 0x00,
    name: "extended_advertiser_set_phy",
    params: EXTENDED_ADVERTISER_SET_PHY_PARAMS,
    response: Some(EXTENDED_ADVERTISER_SET_PHY_RESPONSE),
    deprecated: false,
};

const EXTENDED_ADVERTISER_SET_DATA_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::array8("data"),
];
const EXTENDED_ADVERTISER_SET_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static EXTENDED_ADVERTISER_SET_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::EXTENDED_ADVERTISER,
    id: 0x01,
    name: "extended_advertiser_set_data",
    params: EXTENDED_ADVERTISER_SET_DATA_PARAMS,
    response: Some(EXTENDED_ADVERTISER_SET_DATA_RESPONSE),
    deprecated: false,
};

const EXTENDED_ADVERTISER_SET_LONG_DATA_PARAMS: &[Field] = &[Field::u8("advertising_set")];
const EXTENDED_ADVERTISER_SET_LONG_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static EXTENDED_ADVERTISER_SET_LONG_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::EXTENDED_ADVERTISER,
    id: 0x02,
    name: "extended_advertiser_set_long_data",
    params: EXTENDED_ADVERTISER_SET_LONG_DATA_PARAMS,
    response: Some(EXTENDED_ADVERTISER_SET_LONG_DATA_RESPONSE),
    deprecated: false,
};

const EXTENDED_ADVERTISER_GENERATE_DATA_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("discover"),
];
const EXTENDED_ADVERTISER_GENERATE_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static EXTENDED_ADVERTISER_GENERATE_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::EXTENDED_ADVERTISER,
    id: 0x03,
    name: "extended_advertiser_generate_data",
    params: EXTENDED_ADVERTISER_GENERATE_DATA_PARAMS,
    response: Some(EXTENDED_ADVERTISER_GENERATE_DATA_RESPONSE),
    deprecated: false,
};

const EXTENDED_ADVERTISER_START_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("connect"),
    Field::u32("flags"),
];
const EXTENDED_ADVERTISER_START_RESPONSE: &[Field] = &[Field::u16("result")];
pub static EXTENDED_ADVERTISER_START: CommandDescriptor = CommandDescriptor {
    class_id: class::EXTENDED_ADVERTISER,
    id: 0x04,
    name: "extended_advertiser_start",
    params: EXTENDED_ADVERTISER_START_PARAMS,
    response: Some(EXTENDED_ADVERTISER_START_RESPONSE),
    deprecated: false,
};

const EXTENDED_ADVERTISER_START_DIRECTED_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u8("connect"),
    Field::u32("flags"),
    Field::addr("peer_addr"),
    Field::u8("peer_addr_type"),
];
const EXTENDED_ADVERTISER_START_DIRECTED_RESPONSE: &[Field] = &[Field::u16("result")];
pub static EXTENDED_ADVERTISER_START_DIRECTED: CommandDescriptor = CommandDescriptor {
    class_id: class::EXTENDED_ADVERTISER,
    id: 0x05,
    name: "extended_advertiser_start_directed",
    params: EXTENDED_ADVERTISER_START_DIRECTED_PARAMS,
    response: Some(EXTENDED_ADVERTISER_START_DIRECTED_RESPONSE),
    deprecated: false,
};

const PERIODIC_ADVERTISER_SET_DATA_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::array8("data"),
];
const PERIODIC_ADVERTISER_SET_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static PERIODIC_ADVERTISER_SET_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::PERIODIC_ADVERTISER,
    id: 0x00,
    name: "periodic_advertiser_set_data",
    params: PERIODIC_ADVERTISER_SET_DATA_PARAMS,
    response: Some(PERIODIC_ADVERTISER_SET_DATA_RESPONSE),
    deprecated: false,
};

const PERIODIC_ADVERTISER_SET_LONG_DATA_PARAMS: &[Field] = &[Field::u8("advertising_set")];
const PERIODIC_ADVERTISER_SET_LONG_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static PERIODIC_ADVERTISER_SET_LONG_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::PERIODIC_ADVERTISER,
    id: 0x01,
    name: "periodic_advertiser_set_long_data",
    params: PERIODIC_ADVERTISER_SET_LONG_DATA_PARAMS,
    response: Some(PERIODIC_ADVERTISER_SET_LONG_DATA_RESPONSE),
    deprecated: false,
};

const PERIODIC_ADVERTISER_START_PARAMS: &[Field] = &[
    Field::u8("advertising_set"),
    Field::u16("interval_min"),
    Field::u16("interval_max"),
    Field::u32("flags"),
];
const PERIODIC_ADVERTISER_START_RESPONSE: &[Field] = &[Field::u16("result")];
pub static PERIODIC_ADVERTISER_START: CommandDescriptor = CommandDescriptor {
    class_id: class::PERIODIC_ADVERTISER,
    id: 0x02,
    name: "periodic_advertiser_start",
    params: PERIODIC_ADVERTISER_START_PARAMS,
    response: Some(PERIODIC_ADVERTISER_START_RESPONSE),
    deprecated: false,
};

const PERIODIC_ADVERTISER_STOP_PARAMS: &[Field] = &[Field::u8("advertising_set")];
const PERIODIC_ADVERTISER_STOP_RESPONSE: &[Field] = &[Field::u16("result")];
pub static PERIODIC_ADVERTISER_STOP: CommandDescriptor = CommandDescriptor {
    class_id: class::PERIODIC_ADVERTISER,
    id: 0x03,
    name: "periodic_advertiser_stop",
    params: PERIODIC_ADVERTISER_STOP_PARAMS,
    response: Some(PERIODIC_ADVERTISER_STOP_RESPONSE),
    deprecated: false,
};

const SCANNER_SET_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("mode"),
    Field::u16("interval"),
    Field::u16("window"),
];
const SCANNER_SET_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SCANNER_SET_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::SCANNER,
    id: 0x06,
    name: "scanner_set_parameters",
    params: SCANNER_SET_PARAMETERS_PARAMS,
    response: Some(SCANNER_SET_PARAMETERS_RESPONSE),
    deprecated: false,
};

const SCANNER_STOP_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SCANNER_STOP: CommandDescriptor = CommandDescriptor {
    class_id: class::SCANNER,
    id: 0x05,
    name: "scanner_stop",
    params: &[],
    response: Some(SCANNER_STOP_RESPONSE),
    deprecated: false,
};

const SCANNER_SET_TIMING_PARAMS: &[Field] = &[
    Field::u8("phys"),
    Field::u16("scan_interval"),
    Field::u16("scan_window"),
];
const SCANNER_SET_TIMING_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SCANNER_SET_TIMING: CommandDescriptor = CommandDescriptor {
    class_id: class::SCANNER,
    id: 0x01,
    name: "scanner_set_timing",
    params: SCANNER_SET_TIMING_PARAMS,
    response: Some(SCANNER_SET_TIMING_RESPONSE),
    deprecated: false,
};

const SCANNER_SET_MODE_PARAMS: &[Field] = &[Field::u8("phys"), Field::u8("scan_mode")];
const SCANNER_SET_MODE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SCANNER_SET_MODE: CommandDescriptor = CommandDescriptor {
    class_id: class::SCANNER,
    id: 0x02,
    name: "scanner_set_mode",
    params: SCANNER_SET_MODE_PARAMS,
    response: Some(SCANNER_SET_MODE_RESPONSE),
    deprecated: false,
};

const SCANNER_START_PARAMS: &[Field] = &[Field::u8("scanning_phy"), Field::u8("discover_mode")];
const SCANNER_START_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SCANNER_START: CommandDescriptor = CommandDescriptor {
    class_id: class::SCANNER,
    id: 0x03,
    name: "scanner_start",
    params: SCANNER_START_PARAMS,
    response: Some(SCANNER_START_RESPONSE),
    deprecated: false,
};

const SYNC_SET_PARAMETERS_PARAMS: &[Field] = &[
    Field::u16("skip"),
    Field::u16("timeout"),
    Field::u32("flags"),
];
const SYNC_SET_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYNC_SET_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::SYNC,
    id: 0x02,
    name: "sync_set_parameters",
    params: SYNC_SET_PARAMETERS_PARAMS,
    response: Some(SYNC_SET_PARAMETERS_RESPONSE),
    deprecated: false,
};

const SYNC_OPEN_PARAMS: &[Field] = &[
    Field::addr("address"),
    Field::u8("address_type"),
    Field::u8("adv_sid"),
];
const SYNC_OPEN_RESPONSE: &[Field] = &[Field::u16("result"), Field::u16("sync")];
pub static SYNC_OPEN: CommandDescriptor = CommandDescriptor {
    class_id: class::SYNC,
    id: 0x00,
    name: "sync_open",
    params: SYNC_OPEN_PARAMS,
    response: Some(SYNC_OPEN_RESPONSE),
    deprecated: false,
};

const SYNC_SET_REPORTING_MODE_PARAMS: &[Field] = &[Field::u16("sync"), Field::u8("reporting_mode")];
const SYNC_SET_REPORTING_MODE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYNC_SET_REPORTING_MODE: CommandDescriptor = CommandDescriptor {
    class_id: class::SYNC,
    id: 0x03,
    name: "sync_set_reporting_mode",
    params: SYNC_SET_REPORTING_MODE_PARAMS,
    response: Some(SYNC_SET_REPORTING_MODE_RESPONSE),
    deprecated: false,
};

const SYNC_CLOSE_PARAMS: &[Field] = &[Field::u16("sync")];
const SYNC_CLOSE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYNC_CLOSE: CommandDescriptor = CommandDescriptor {
    class_id: class::SYNC,
    id: 0x01,
    name: "sync_close",
    params: SYNC_CLOSE_PARAMS,
    response: Some(SYNC_CLOSE_RESPONSE),
    deprecated: false,
};

const PAST_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("mode"),
    Field::u16("skip"),
    Field::u16("timeout"),
    Field::u8("reporting_mode"),
];
const PAST_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS_RESPONSE: &[Field] = &[
    Field::u16("result"),
];
pub static PAST_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS: CommandDescriptor =
    CommandDescriptor {
        class_id: class::PAST_RECEIVER,
        id: 0x00,
        name: "past_receiver_set_default_sync_receive_parameters",
        params: PAST_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS_PARAMS,
        response: Some(PAST_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS_RESPONSE),
        deprecated: false,
    };

const PAST_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("mode"),
    Field::u16("skip"),
    Field::u16("timeout"),
    Field::u8("reporting_mode"),
];
const PAST_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static PAST_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::PAST_RECEIVER,
    id: 0x01,
    name: "past_receiver_set_sync_receive_parameters",
    params: PAST_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS_PARAMS,
    response: Some(PAST_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS_RESPONSE),
    deprecated: false,
};

const ADVERTISER_PAST_TRANSFER_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("service_data"),
    Field::u8("advertising_set"),
];
const ADVERTISER_PAST_TRANSFER_RESPONSE: &[Field] = &[Field::u16("result")];
pub static ADVERTISER_PAST_TRANSFER: CommandDescriptor = CommandDescriptor {
    class_id: class::ADVERTISER_PAST,
    id: 0x00,
    name: "advertiser_past_transfer",
    params: ADVERTISER_PAST_TRANSFER_PARAMS,
    response: Some(ADVERTISER_PAST_TRANSFER_RESPONSE),
    deprecated: false,
};

const SYNC_PAST_TRANSFER_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("service_data"),
    Field::u16("sync"),
];
const SYNC_PAST_TRANSFER_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SYNC_PAST_TRANSFER: CommandDescriptor = CommandDescriptor {
    class_id: class::SYNC_PAST,
    id: 0x00,
    name: "sync_past_transfer",
    params: SYNC_PAST_TRANSFER_PARAMS,
    response: Some(SYNC_PAST_TRANSFER_RESPONSE),
    deprecated: false,
};

const CONNECTION_SET_DEFAULT_PARAMETERS_PARAMS: &[Field] = &[
    Field::u16("min_interval"),
    Field::u16("max_interval"),
    Field::u16("latency"),
    Field::u16("timeout"),
    Field::u16("min_ce_length"),
    Field::u16("max_ce_length"),
];
const CONNECTION_SET_DEFAULT_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_SET_DEFAULT_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x00,
    name: "connection_set_default_parameters",
    params: CONNECTION_SET_DEFAULT_PARAMETERS_PARAMS,
    response: Some(CONNECTION_SET_DEFAULT_PARAMETERS_RESPONSE),
    deprecated: false,
};

const CONNECTION_SET_DEFAULT_PREFERRED_PHY_PARAMS: &[Field] = &[
    Field::u8("preferred_phy"),
    Field::u8("accepted_phy"),
];
const CONNECTION_SET_DEFAULT_PREFERRED_PHY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_SET_DEFAULT_PREFERRED_PHY: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x01,
    name: "connection_set_default_preferred_phy",
    params: CONNECTION_SET_DEFAULT_PREFERRED_PHY_PARAMS,
    response: Some(CONNECTION_SET_DEFAULT_PREFERRED_PHY_RESPONSE),
    deprecated: false,
};

const CONNECTION_OPEN_PARAMS: &[Field] = &[
    Field::addr("address"),
    Field::u8("address_type"),
    Field::u8("initiating_phy"),
];
const CONNECTION_OPEN_RESPONSE: &[Field] = &[Field::u16("result"), Field::u8("connection")];
pub static CONNECTION_OPEN: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x04,
    name: "connection_open",
    params: CONNECTION_OPEN_PARAMS,
    response: Some(CONNECTION_OPEN_RESPONSE),
    deprecated: false,
};

const CONNECTION_SET_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("min_interval"),
    Field::u16("max_interval"),
    Field::u16("latency"),
    Field::u16("timeout"),
    Field::u16("min_ce_length"),
    Field::u16("max_ce_length"),
];
const CONNECTION_SET_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_SET_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x06,
    name: "connection_set_parameters",
    params: CONNECTION_SET_PARAMETERS_PARAMS,
    response: Some(CONNECTION_SET_PARAMETERS_RESPONSE),
    deprecated: false,
};

const CONNECTION_SET_PREFERRED_PHY_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("preferred_phy"),
    Field::u8("accepted_phy"),
];
const CONNECTION_SET_PREFERRED_PHY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_SET_PREFERRED_PHY: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x08,
    name: "connection_set_preferred_phy",
    params: CONNECTION_SET_PREFERRED_PHY_PARAMS,
    response: Some(CONNECTION_SET_PREFERRED_PHY_RESPONSE),
    deprecated: false,
};

const CONNECTION_DISABLE_SLAVE_LATENCY_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("disable"),
];
const CONNECTION_DISABLE_SLAVE_LATENCY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_DISABLE_SLAVE_LATENCY: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x03,
    name: "connection_disable_slave_latency",
    params: CONNECTION_DISABLE_SLAVE_LATENCY_PARAMS,
    response: Some(CONNECTION_DISABLE_SLAVE_LATENCY_RESPONSE),
    deprecated: false,
};

const CONNECTION_GET_RSSI_PARAMS: &[Field] = &[Field::u8("connection")];
const CONNECTION_GET_RSSI_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_GET_RSSI: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x02,
    name: "connection_get_rssi",
    params: CONNECTION_GET_RSSI_PARAMS,
    response: Some(CONNECTION_GET_RSSI_RESPONSE),
    deprecated: false,
};

const CONNECTION_READ_CHANNEL_MAP_PARAMS: &[Field] = &[Field::u8("connection")];
const CONNECTION_READ_CHANNEL_MAP_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::array8("channel_map"),
];
pub static CONNECTION_READ_CHANNEL_MAP: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x07,
    name: "connection_read_channel_map",
    params: CONNECTION_READ_CHANNEL_MAP_PARAMS,
    response: Some(CONNECTION_READ_CHANNEL_MAP_RESPONSE),
    deprecated: false,
};

const CONNECTION_SET_POWER_REPORTING_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("mode"),
];
const CONNECTION_SET_POWER_REPORTING_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_SET_POWER_REPORTING: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x09,
    name: "connection_set_power_reporting",
    params: CONNECTION_SET_POWER_REPORTING_PARAMS,
    response: Some(CONNECTION_SET_POWER_REPORTING_RESPONSE),
    deprecated: false,
};

const CONNECTION_SET_REMOTE_POWER_REPORTING_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("mode"),
];
const CONNECTION_SET_REMOTE_POWER_REPORTING_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_SET_REMOTE_POWER_REPORTING: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x0a,
    name: "connection_set_remote_power_reporting",
    params: CONNECTION_SET_REMOTE_POWER_REPORTING_PARAMS,
    response: Some(CONNECTION_SET_REMOTE_POWER_REPORTING_RESPONSE),
    deprecated: false,
};

const CONNECTION_GET_TX_POWER_PARAMS: &[Field] = &[Field::u8("connection"), Field::u8("phy")];
const CONNECTION_GET_TX_POWER_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::i8("current_level"),
    Field::i8("max_level"),
];
pub static CONNECTION_GET_TX_POWER: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x0b,
    name: "connection_get_tx_power",
    params: CONNECTION_GET_TX_POWER_PARAMS,
    response: Some(CONNECTION_GET_TX_POWER_RESPONSE),
    deprecated: false,
};

const CONNECTION_GET_REMOTE_TX_POWER_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("phy"),
];
const CONNECTION_GET_REMOTE_TX_POWER_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_GET_REMOTE_TX_POWER: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x0c,
    name: "connection_get_remote_tx_power",
    params: CONNECTION_GET_REMOTE_TX_POWER_PARAMS,
    response: Some(CONNECTION_GET_REMOTE_TX_POWER_RESPONSE),
    deprecated: false,
};

const CONNECTION_CLOSE_PARAMS: &[Field] = &[Field::u8("connection")];
const CONNECTION_CLOSE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_CLOSE: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x05,
    name: "connection_close",
    params: CONNECTION_CLOSE_PARAMS,
    response: Some(CONNECTION_CLOSE_RESPONSE),
    deprecated: false,
};

const CONNECTION_READ_REMOTE_USED_FEATURES_PARAMS: &[Field] = &[Field::u8("connection")];
const CONNECTION_READ_REMOTE_USED_FEATURES_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CONNECTION_READ_REMOTE_USED_FEATURES: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x0d,
    name: "connection_read_remote_used_features",
    params: CONNECTION_READ_REMOTE_USED_FEATURES_PARAMS,
    response: Some(CONNECTION_READ_REMOTE_USED_FEATURES_RESPONSE),
    deprecated: false,
};

const CONNECTION_GET_SECURITY_STATUS_PARAMS: &[Field] = &[Field::u8("connection")];
const CONNECTION_GET_SECURITY_STATUS_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u8("security_mode"),
    Field::u8("key_size"),
    Field::u8("bonding_handle"),
];
pub static CONNECTION_GET_SECURITY_STATUS: CommandDescriptor = CommandDescriptor {
    class_id: class::CONNECTION,
    id: 0x0e,
    name: "connection_get_security_status",
    params: CONNECTION_GET_SECURITY_STATUS_PARAMS,
    response: Some(CONNECTION_GET_SECURITY_STATUS_RESPONSE),
    deprecated: false,
};

const GATT_SET_MAX_MTU_PARAMS: &[Field] = &[Field::u16("max_mtu")];
const GATT_SET_MAX_MTU_RESPONSE: &[Field] = &[Field::u16("result"), Field::u16("max_mtu_out")];
pub static GATT_SET_MAX_MTU: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x00,
    name: "gatt_set_max_mtu",
    params: GATT_SET_MAX_MTU_PARAMS,
    response: Some(GATT_SET_MAX_MTU_RESPONSE),
    deprecated: false,
};

const GATT_DISCOVER_PRIMARY_SERVICES_PARAMS: &[Field] = &[Field::u8("connection")];
const GATT_DISCOVER_PRIMARY_SERVICES_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_DISCOVER_PRIMARY_SERVICES: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x01,
    name: "gatt_discover_primary_services",
    params: GATT_DISCOVER_PRIMARY_SERVICES_PARAMS,
    response: Some(GATT_DISCOVER_PRIMARY_SERVICES_RESPONSE),
    deprecated: false,
};

const GATT_DISCOVER_PRIMARY_SERVICES_BY_UUID_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::array8("uuid"),
];
const GATT_DISCOVER_PRIMARY_SERVICES_BY_UUID_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_DISCOVER_PRIMARY_SERVICES_BY_UUID: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x02,
    name: "gatt_discover_primary_services_by_uuid",
    params: GATT_DISCOVER_PRIMARY_SERVICES_BY_UUID_PARAMS,
    response: Some(GATT_DISCOVER_PRIMARY_SERVICES_BY_UUID_RESPONSE),
    deprecated: false,
};

const GATT_FIND_INCLUDED_SERVICES_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u32("service"),
];
const GATT_FIND_INCLUDED_SERVICES_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_FIND_INCLUDED_SERVICES: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x10,
    name: "gatt_find_included_services",
    params: GATT_FIND_INCLUDED_SERVICES_PARAMS,
    response: Some(GATT_FIND_INCLUDED_SERVICES_RESPONSE),
    deprecated: false,
};

const GATT_DISCOVER_CHARACTERISTICS_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u32("service"),
];
const GATT_DISCOVER_CHARACTERISTICS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_DISCOVER_CHARACTERISTICS: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x03,
    name: "gatt_discover_characteristics",
    params: GATT_DISCOVER_CHARACTERISTICS_PARAMS,
    response: Some(GATT_DISCOVER_CHARACTERISTICS_RESPONSE),
    deprecated: false,
};

const GATT_DISCOVER_CHARACTERISTICS_BY_UUID_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u32("service"),
    Field::array8("uuid"),
];
const GATT_DISCOVER_CHARACTERISTICS_BY_UUID_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_DISCOVER_CHARACTERISTICS_BY_UUID: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x04,
    name: "gatt_discover_characteristics_by_uuid",
    params: GATT_DISCOVER_CHARACTERISTICS_BY_UUID_PARAMS,
    response: Some(GATT_DISCOVER_CHARACTERISTICS_BY_UUID_RESPONSE),
    deprecated: false,
};

const GATT_DISCOVER_DESCRIPTORS_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
];
const GATT_DISCOVER_DESCRIPTORS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_DISCOVER_DESCRIPTORS: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x06,
    name: "gatt_discover_descriptors",
    params: GATT_DISCOVER_DESCRIPTORS_PARAMS,
    response: Some(GATT_DISCOVER_DESCRIPTORS_RESPONSE),
    deprecated: false,
};

const GATT_SET_CHARACTERISTIC_NOTIFICATION_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::u8("flags"),
];
const GATT_SET_CHARACTERISTIC_NOTIFICATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SET_CHARACTERISTIC_NOTIFICATION: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x05,
    name: "gatt_set_characteristic_notification",
    params: GATT_SET_CHARACTERISTIC_NOTIFICATION_PARAMS,
    response: Some(GATT_SET_CHARACTERISTIC_NOTIFICATION_RESPONSE),
    deprecated: false,
};

const GATT_SEND_CHARACTERISTIC_CONFIRMATION_PARAMS: &[Field] = &[Field::u8("connection")];
const GATT_SEND_CHARACTERISTIC_CONFIRMATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SEND_CHARACTERISTIC_CONFIRMATION: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x0d,
    name: "gatt_send_characteristic_confirmation",
    params: GATT_SEND_CHARACTERISTIC_CONFIRMATION_PARAMS,
    response: Some(GATT_SEND_CHARACTERISTIC_CONFIRMATION_RESPONSE),
    deprecated: false,
};

const GATT_READ_CHARACTERISTIC_VALUE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
];
const GATT_READ_CHARACTERISTIC_VALUE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_READ_CHARACTERISTIC_VALUE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x07,
    name: "gatt_read_characteristic_value",
    params: GATT_READ_CHARACTERISTIC_VALUE_PARAMS,
    response: Some(GATT_READ_CHARACTERISTIC_VALUE_RESPONSE),
    deprecated: false,
};

const GATT_READ_CHARACTERISTIC_VALUE_FROM_OFFSET_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::u16("offset"),
    Field::u16("maxlen"),
];
const GATT_READ_CHARACTERISTIC_VALUE_FROM_OFFSET_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_READ_CHARACTERISTIC_VALUE_FROM_OFFSET: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x12,
    name: "gatt_read_characteristic_value_from_offset",
    params: GATT_READ_CHARACTERISTIC_VALUE_FROM_OFFSET_PARAMS,
    response: Some(GATT_READ_CHARACTERISTIC_VALUE_FROM_OFFSET_RESPONSE),
    deprecated: false,
};

const GATT_READ_MULTIPLE_CHARACTERISTIC_VALUES_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::array8("characteristic_list"),
];
const GATT_READ_MULTIPLE_CHARACTERISTIC_VALUES_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_READ_MULTIPLE_CHARACTERISTIC_VALUES: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x11,
    name: "gatt_read_multiple_characteristic_values",
    params: GATT_READ_MULTIPLE_CHARACTERISTIC_VALUES_PARAMS,
    response: Some(GATT_READ_MULTIPLE_CHARACTERISTIC_VALUES_RESPONSE),
    deprecated: false,
};

const GATT_READ_CHARACTERISTIC_VALUE_BY_UUID_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u32("service"),
    Field::array8("uuid"),
];
const GATT_READ_CHARACTERISTIC_VALUE_BY_UUID_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_READ_CHARACTERISTIC_VALUE_BY_UUID: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x08,
    name: "gatt_read_characteristic_value_by_uuid",
    params: GATT_READ_CHARACTERISTIC_VALUE_BY_UUID_PARAMS,
    response: Some(GATT_READ_CHARACTERISTIC_VALUE_BY_UUID_RESPONSE),
    deprecated: false,
};

const GATT_WRITE_CHARACTERISTIC_VALUE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::array8("value"),
];
const GATT_WRITE_CHARACTERISTIC_VALUE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_WRITE_CHARACTERISTIC_VALUE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x09,
    name: "gatt_write_characteristic_value",
    params: GATT_WRITE_CHARACTERISTIC_VALUE_PARAMS,
    response: Some(GATT_WRITE_CHARACTERISTIC_VALUE_RESPONSE),
    deprecated: false,
};

const GATT_WRITE_CHARACTERISTIC_VALUE_WITHOUT_RESPONSE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::array8("value"),
];
const GATT_WRITE_CHARACTERISTIC_VALUE_WITHOUT_RESPONSE_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("sent_len"),
];
pub static GATT_WRITE_CHARACTERISTIC_VALUE_WITHOUT_RESPONSE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x0a,
    name: "gatt_write_characteristic_value_without_response",
    params: GATT_WRITE_CHARACTERISTIC_VALUE_WITHOUT_RESPONSE_PARAMS,
    response: Some(GATT_WRITE_CHARACTERISTIC_VALUE_WITHOUT_RESPONSE_RESPONSE),
    deprecated: false,
};

const GATT_PREPARE_CHARACTERISTIC_VALUE_WRITE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::u16("offset"),
    Field::array8("value"),
];
const GATT_PREPARE_CHARACTERISTIC_VALUE_WRITE_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("sent_len"),
];
pub static GATT_PREPARE_CHARACTERISTIC_VALUE_WRITE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x0b,
    name: "gatt_prepare_characteristic_value_write",
    params: GATT_PREPARE_CHARACTERISTIC_VALUE_WRITE_PARAMS,
    response: Some(GATT_PREPARE_CHARACTERISTIC_VALUE_WRITE_RESPONSE),
    deprecated: false,
};

const GATT_PREPARE_CHARACTERISTIC_VALUE_RELIABLE_WRITE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::u16("offset"),
    Field::array8("value"),
];
const GATT_PREPARE_CHARACTERISTIC_VALUE_RELIABLE_WRITE_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("sent_len"),
];
pub static GATT_PREPARE_CHARACTERISTIC_VALUE_RELIABLE_WRITE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x13,
    name: "gatt_prepare_characteristic_value_reliable_write",
    params: GATT_PREPARE_CHARACTERISTIC_VALUE_RELIABLE_WRITE_PARAMS,
    response: Some(GATT_PREPARE_CHARACTERISTIC_VALUE_RELIABLE_WRITE_RESPONSE),
    deprecated: false,
};

const GATT_EXECUTE_CHARACTERISTIC_VALUE_WRITE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("flags"),
];
const GATT_EXECUTE_CHARACTERISTIC_VALUE_WRITE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_EXECUTE_CHARACTERISTIC_VALUE_WRITE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x0c,
    name: "gatt_execute_characteristic_value_write",
    params: GATT_EXECUTE_CHARACTERISTIC_VALUE_WRITE_PARAMS,
    response: Some(GATT_EXECUTE_CHARACTERISTIC_VALUE_WRITE_RESPONSE),
    deprecated: false,
};

const GATT_READ_DESCRIPTOR_VALUE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("descriptor"),
];
const GATT_READ_DESCRIPTOR_VALUE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_READ_DESCRIPTOR_VALUE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x0e,
    name: "gatt_read_descriptor_value",
    params: GATT_READ_DESCRIPTOR_VALUE_PARAMS,
    response: Some(GATT_READ_DESCRIPTOR_VALUE_RESPONSE),
    deprecated: false,
};

const GATT_WRITE_DESCRIPTOR_VALUE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("descriptor"),
    Field::array8("value"),
];
const GATT_WRITE_DESCRIPTOR_VALUE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_WRITE_DESCRIPTOR_VALUE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT,
    id: 0x0f,
    name: "gatt_write_descriptor_value",
    params: GATT_WRITE_DESCRIPTOR_VALUE_PARAMS,
    response: Some(GATT_WRITE_DESCRIPTOR_VALUE_RESPONSE),
    deprecated: false,
};

const GATTDB_NEW_SESSION_RESPONSE: &[Field] = &[Field::u16("result"), Field::u16("session")];
pub static GATTDB_NEW_SESSION: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x00,
    name: "gattdb_new_session",
    params: &[],
    response: Some(GATTDB_NEW_SESSION_RESPONSE),
    deprecated: false,
};

const GATTDB_ADD_SERVICE_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u8("type"),
    Field::u8("property"),
    Field::array8("uuid"),
];
const GATTDB_ADD_SERVICE_RESPONSE: &[Field] = &[Field::u16("result"), Field::u16("service")];
pub static GATTDB_ADD_SERVICE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x01,
    name: "gattdb_add_service",
    params: GATTDB_ADD_SERVICE_PARAMS,
    response: Some(GATTDB_ADD_SERVICE_RESPONSE),
    deprecated: false,
};

const GATTDB_REMOVE_SERVICE_PARAMS: &[Field] = &[Field::u16("session"), Field::u16("service")];
const GATTDB_REMOVE_SERVICE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_REMOVE_SERVICE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x02,
    name: "gattdb_remove_service",
    params: GATTDB_REMOVE_SERVICE_PARAMS,
    response: Some(GATTDB_REMOVE_SERVICE_RESPONSE),
    deprecated: false,
};

const GATTDB_ADD_INCLUDED_SERVICE_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("service"),
    Field::u16("included_service"),
];
const GATTDB_ADD_INCLUDED_SERVICE_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("attribute"),
];
pub static GATTDB_ADD_INCLUDED_SERVICE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x03,
    name: "gattdb_add_included_service",
    params: GATTDB_ADD_INCLUDED_SERVICE_PARAMS,
    response: Some(GATTDB_ADD_INCLUDED_SERVICE_RESPONSE),
    deprecated: false,
};

const GATTDB_REMOVE_INCLUDED_SERVICE_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("attribute"),
];
const GATTDB_REMOVE_INCLUDED_SERVICE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_REMOVE_INCLUDED_SERVICE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x04,
    name: "gattdb_remove_included_service",
    params: GATTDB_REMOVE_INCLUDED_SERVICE_PARAMS,
    response: Some(GATTDB_REMOVE_INCLUDED_SERVICE_RESPONSE),
    deprecated: false,
};

const GATTDB_ADD_UUID16_CHARACTERISTIC_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("service"),
    Field::u16("property"),
    Field::u16("security"),
    Field::u8("flag"),
    Field::uuid16("uuid"),
    Field::u8("value_type"),
    Field::u16("maxlen"),
    Field::array16("value"),
];
const GATTDB_ADD_UUID16_CHARACTERISTIC_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("characteristic"),
];
pub static GATTDB_ADD_UUID16_CHARACTERISTIC: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x05,
    name: "gattdb_add_uuid16_characteristic",
    params: GATTDB_ADD_UUID16_CHARACTERISTIC_PARAMS,
    response: Some(GATTDB_ADD_UUID16_CHARACTERISTIC_RESPONSE),
    deprecated: false,
};

const GATTDB_ADD_UUID128_CHARACTERISTIC_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("service"),
    Field::u16("property"),
    Field::u16("security"),
    Field::u8("flag"),
    Field::uuid128("uuid"),
    Field::u8("value_type"),
    Field::u16("maxlen"),
    Field::array16("value"),
];
const GATTDB_ADD_UUID128_CHARACTERISTIC_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("characteristic"),
];
pub static GATTDB_ADD_UUID128_CHARACTERISTIC: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x06,
    name: "gattdb_add_uuid128_characteristic",
    params: GATTDB_ADD_UUID128_CHARACTERISTIC_PARAMS,
    response: Some(GATTDB_ADD_UUID128_CHARACTERISTIC_RESPONSE),
    deprecated: false,
};

const GATTDB_REMOVE_CHARACTERISTIC_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("characteristic"),
];
const GATTDB_REMOVE_CHARACTERISTIC_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_REMOVE_CHARACTERISTIC: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x07,
    name: "gattdb_remove_characteristic",
    params: GATTDB_REMOVE_CHARACTERISTIC_PARAMS,
    response: Some(GATTDB_REMOVE_CHARACTERISTIC_RESPONSE),
    deprecated: false,
};

const GATTDB_ADD_UUID16_DESCRIPTOR_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("characteristic"),
    Field::u16("property"),
    Field::u16("security"),
    Field::uuid16("uuid"),
    Field::u8("value_type"),
    Field::u16("maxlen"),
    Field::array16("value"),
];
const GATTDB_ADD_UUID16_DESCRIPTOR_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("descriptor"),
];
pub static GATTDB_ADD_UUID16_DESCRIPTOR: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x08,
    name: "gattdb_add_uuid16_descriptor",
    params: GATTDB_ADD_UUID16_DESCRIPTOR_PARAMS,
    response: Some(GATTDB_ADD_UUID16_DESCRIPTOR_RESPONSE),
    deprecated: false,
};

const GATTDB_ADD_UUID128_DESCRIPTOR_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("characteristic"),
    Field::u16("property"),
    Field::u16("security"),
    Field::uuid128("uuid"),
    Field::u8("value_type"),
    Field::u16("maxlen"),
    Field::array16("value"),
];
const GATTDB_ADD_UUID128_DESCRIPTOR_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("descriptor"),
];
pub static GATTDB_ADD_UUID128_DESCRIPTOR: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x09,
    name: "gattdb_add_uuid128_descriptor",
    params: GATTDB_ADD_UUID128_DESCRIPTOR_PARAMS,
    response: Some(GATTDB_ADD_UUID128_DESCRIPTOR_RESPONSE),
    deprecated: false,
};

const GATTDB_REMOVE_DESCRIPTOR_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("descriptor"),
];
const GATTDB_REMOVE_DESCRIPTOR_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_REMOVE_DESCRIPTOR: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x0a,
    name: "gattdb_remove_descriptor",
    params: GATTDB_REMOVE_DESCRIPTOR_PARAMS,
    response: Some(GATTDB_REMOVE_DESCRIPTOR_RESPONSE),
    deprecated: false,
};

const GATTDB_START_SERVICE_PARAMS: &[Field] = &[Field::u16("session"), Field::u16("service")];
const GATTDB_START_SERVICE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_START_SERVICE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x0b,
    name: "gattdb_start_service",
    params: GATTDB_START_SERVICE_PARAMS,
    response: Some(GATTDB_START_SERVICE_RESPONSE),
    deprecated: false,
};

const GATTDB_STOP_SERVICE_PARAMS: &[Field] = &[Field::u16("session"), Field::u16("service")];
const GATTDB_STOP_SERVICE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_STOP_SERVICE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x0c,
    name: "gattdb_stop_service",
    params: GATTDB_STOP_SERVICE_PARAMS,
    response: Some(GATTDB_STOP_SERVICE_RESPONSE),
    deprecated: false,
};

const GATTDB_START_CHARACTERISTIC_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("characteristic"),
];
const GATTDB_START_CHARACTERISTIC_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_START_CHARACTERISTIC: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x0d,
    name: "gattdb_start_characteristic",
    params: GATTDB_START_CHARACTERISTIC_PARAMS,
    response: Some(GATTDB_START_CHARACTERISTIC_RESPONSE),
    deprecated: false,
};

const GATTDB_STOP_CHARACTERISTIC_PARAMS: &[Field] = &[
    Field::u16("session"),
    Field::u16("characteristic"),
];
const GATTDB_STOP_CHARACTERISTIC_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_STOP_CHARACTERISTIC: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x0e,
    name: "gattdb_stop_characteristic",
    params: GATTDB_STOP_CHARACTERISTIC_PARAMS,
    response: Some(GATTDB_STOP_CHARACTERISTIC_RESPONSE),
    deprecated: false,
};

const GATTDB_COMMIT_PARAMS: &[Field] = &[Field::u16("session")];
const GATTDB_COMMIT_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_COMMIT: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x0f,
    name: "gattdb_commit",
    params: GATTDB_COMMIT_PARAMS,
    response: Some(GATTDB_COMMIT_RESPONSE),
    deprecated: false,
};

const GATTDB_ABORT_PARAMS: &[Field] = &[Field::u16("session")];
const GATTDB_ABORT_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATTDB_ABORT: CommandDescriptor = CommandDescriptor {
    class_id: class::GATTDB,
    id: 0x10,
    name: "gattdb_abort",
    params: GATTDB_ABORT_PARAMS,
    response: Some(GATTDB_ABORT_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_SET_MAX_MTU_PARAMS: &[Field] = &[Field::u16("max_mtu")];
const GATT_SERVER_SET_MAX_MTU_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("max_mtu_out"),
];
pub static GATT_SERVER_SET_MAX_MTU: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x0a,
    name: "gatt_server_set_max_mtu",
    params: GATT_SERVER_SET_MAX_MTU_PARAMS,
    response: Some(GATT_SERVER_SET_MAX_MTU_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_GET_MTU_PARAMS: &[Field] = &[Field::u8("connection")];
const GATT_SERVER_GET_MTU_RESPONSE: &[Field] = &[Field::u16("result"), Field::u16("mtu")];
pub static GATT_SERVER_GET_MTU: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x0b,
    name: "gatt_server_get_mtu",
    params: GATT_SERVER_GET_MTU_PARAMS,
    response: Some(GATT_SERVER_GET_MTU_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_FIND_ATTRIBUTE_PARAMS: &[Field] = &[Field::u16("start"), Field::array8("type")];
const GATT_SERVER_FIND_ATTRIBUTE_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("attribute"),
];
pub static GATT_SERVER_FIND_ATTRIBUTE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x06,
    name: "gatt_server_find_attribute",
    params: GATT_SERVER_FIND_ATTRIBUTE_PARAMS,
    response: Some(GATT_SERVER_FIND_ATTRIBUTE_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_READ_ATTRIBUTE_VALUE_PARAMS: &[Field] = &[
    Field::u16("attribute"),
    Field::u16("offset"),
];
const GATT_SERVER_READ_ATTRIBUTE_VALUE_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::array8("value"),
];
pub static GATT_SERVER_READ_ATTRIBUTE_VALUE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x00,
    name: "gatt_server_read_attribute_value",
    params: GATT_SERVER_READ_ATTRIBUTE_VALUE_PARAMS,
    response: Some(GATT_SERVER_READ_ATTRIBUTE_VALUE_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_READ_ATTRIBUTE_TYPE_PARAMS: &[Field] = &[Field::u16("attribute")];
const GATT_SERVER_READ_ATTRIBUTE_TYPE_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::array8("type"),
];
pub static GATT_SERVER_READ_ATTRIBUTE_TYPE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x01,
    name: "gatt_server_read_attribute_type",
    params: GATT_SERVER_READ_ATTRIBUTE_TYPE_PARAMS,
    response: Some(GATT_SERVER_READ_ATTRIBUTE_TYPE_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_WRITE_ATTRIBUTE_VALUE_PARAMS: &[Field] = &[
    Field::u16("attribute"),
    Field::u16("offset"),
    Field::array8("value"),
];
const GATT_SERVER_WRITE_ATTRIBUTE_VALUE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_WRITE_ATTRIBUTE_VALUE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x02,
    name: "gatt_server_write_attribute_value",
    params: GATT_SERVER_WRITE_ATTRIBUTE_VALUE_PARAMS,
    response: Some(GATT_SERVER_WRITE_ATTRIBUTE_VALUE_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_SEND_USER_READ_RESPONSE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::u8("att_errorcode"),
    Field::array8("value"),
];
const GATT_SERVER_SEND_USER_READ_RESPONSE_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("sent_len"),
];
pub static GATT_SERVER_SEND_USER_READ_RESPONSE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x03,
    name: "gatt_server_send_user_read_response",
    params: GATT_SERVER_SEND_USER_READ_RESPONSE_PARAMS,
    response: Some(GATT_SERVER_SEND_USER_READ_RESPONSE_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_SEND_USER_WRITE_RESPONSE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::u8("att_errorcode"),
];
const GATT_SERVER_SEND_USER_WRITE_RESPONSE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_SEND_USER_WRITE_RESPONSE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x04,
    name: "gatt_server_send_user_write_response",
    params: GATT_SERVER_SEND_USER_WRITE_RESPONSE_PARAMS,
    response: Some(GATT_SERVER_SEND_USER_WRITE_RESPONSE_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_SEND_NOTIFICATION_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::array8("value"),
];
const GATT_SERVER_SEND_NOTIFICATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_SEND_NOTIFICATION: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x0f,
    name: "gatt_server_send_notification",
    params: GATT_SERVER_SEND_NOTIFICATION_PARAMS,
    response: Some(GATT_SERVER_SEND_NOTIFICATION_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_SEND_INDICATION_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::array8("value"),
];
const GATT_SERVER_SEND_INDICATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_SEND_INDICATION: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x10,
    name: "gatt_server_send_indication",
    params: GATT_SERVER_SEND_INDICATION_PARAMS,
    response: Some(GATT_SERVER_SEND_INDICATION_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_NOTIFY_ALL_PARAMS: &[Field] = &[
    Field::u16("characteristic"),
    Field::array8("value"),
];
const GATT_SERVER_NOTIFY_ALL_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_NOTIFY_ALL: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x11,
    name: "gatt_server_notify_all",
    params: GATT_SERVER_NOTIFY_ALL_PARAMS,
    response: Some(GATT_SERVER_NOTIFY_ALL_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_READ_CLIENT_CONFIGURATION_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
];
const GATT_SERVER_READ_CLIENT_CONFIGURATION_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u16("client_config_flags"),
];
pub static GATT_SERVER_READ_CLIENT_CONFIGURATION: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x12,
    name: "gatt_server_read_client_configuration",
    params: GATT_SERVER_READ_CLIENT_CONFIGURATION_PARAMS,
    response: Some(GATT_SERVER_READ_CLIENT_CONFIGURATION_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_SEND_USER_PREPARE_WRITE_RESPONSE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("characteristic"),
    Field::u8("att_errorcode"),
    Field::u16("offset"),
    Field::array8("value"),
];
const GATT_SERVER_SEND_USER_PREPARE_WRITE_RESPONSE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_SEND_USER_PREPARE_WRITE_RESPONSE: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x14,
    name: "gatt_server_send_user_prepare_write_response",
    params: GATT_SERVER_SEND_USER_PREPARE_WRITE_RESPONSE_PARAMS,
    response: Some(GATT_SERVER_SEND_USER_PREPARE_WRITE_RESPONSE_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_SET_CAPABILITIES_PARAMS: &[Field] = &[Field::u32("caps"), Field::u32("reserved")];
const GATT_SERVER_SET_CAPABILITIES_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_SET_CAPABILITIES: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x08,
    name: "gatt_server_set_capabilities",
    params: GATT_SERVER_SET_CAPABILITIES_PARAMS,
    response: Some(GATT_SERVER_SET_CAPABILITIES_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_ENABLE_CAPABILITIES_PARAMS: &[Field] = &[Field::u32("caps")];
const GATT_SERVER_ENABLE_CAPABILITIES_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_ENABLE_CAPABILITIES: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x0c,
    name: "gatt_server_enable_capabilities",
    params: GATT_SERVER_ENABLE_CAPABILITIES_PARAMS,
    response: Some(GATT_SERVER_ENABLE_CAPABILITIES_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_DISABLE_CAPABILITIES_PARAMS: &[Field] = &[Field::u32("caps")];
const GATT_SERVER_DISABLE_CAPABILITIES_RESPONSE: &[Field] = &[Field::u16("result")];
pub static GATT_SERVER_DISABLE_CAPABILITIES: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x0d,
    name: "gatt_server_disable_capabilities",
    params: GATT_SERVER_DISABLE_CAPABILITIES_PARAMS,
    response: Some(GATT_SERVER_DISABLE_CAPABILITIES_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_GET_ENABLED_CAPABILITIES_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u32("caps"),
];
pub static GATT_SERVER_GET_ENABLED_CAPABILITIES: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x0e,
    name: "gatt_server_get_enabled_capabilities",
    params: &[],
    response: Some(GATT_SERVER_GET_ENABLED_CAPABILITIES_RESPONSE),
    deprecated: false,
};

const GATT_SERVER_READ_CLIENT_SUPPORTED_FEATURES_PARAMS: &[Field] = &[Field::u8("connection")];
const GATT_SERVER_READ_CLIENT_SUPPORTED_FEATURES_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u8("client_features"),
];
pub static GATT_SERVER_READ_CLIENT_SUPPORTED_FEATURES: CommandDescriptor = CommandDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x15,
    name: "gatt_server_read_client_supported_features",
    params: GATT_SERVER_READ_CLIENT_SUPPORTED_FEATURES_PARAMS,
    response: Some(GATT_SERVER_READ_CLIENT_SUPPORTED_FEATURES_RESPONSE),
    deprecated: false,
};

const NVM_SAVE_PARAMS: &[Field] = &[Field::u16("key"), Field::array8("value")];
const NVM_SAVE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static NVM_SAVE: CommandDescriptor = CommandDescriptor {
    class_id: class::NVM,
    id: 0x02,
    name: "nvm_save",
    params: NVM_SAVE_PARAMS,
    response: Some(NVM_SAVE_RESPONSE),
    deprecated: false,
};

const NVM_LOAD_PARAMS: &[Field] = &[Field::u16("key")];
const NVM_LOAD_RESPONSE: &[Field] = &[Field::u16("result"), Field::array8("value")];
pub static NVM_LOAD: CommandDescriptor = CommandDescriptor {
    class_id: class::NVM,
    id: 0x03,
    name: "nvm_load",
    params: NVM_LOAD_PARAMS,
    response: Some(NVM_LOAD_RESPONSE),
    deprecated: false,
};

const NVM_ERASE_PARAMS: &[Field] = &[Field::u16("key")];
const NVM_ERASE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static NVM_ERASE: CommandDescriptor = CommandDescriptor {
    class_id: class::NVM,
    id: 0x04,
    name: "nvm_erase",
    params: NVM_ERASE_PARAMS,
    response: Some(NVM_ERASE_RESPONSE),
    deprecated: false,
};

const NVM_ERASE_ALL_RESPONSE: &[Field] = &[Field::u16("result")];
pub static NVM_ERASE_ALL: CommandDescriptor = CommandDescriptor {
    class_id: class::NVM,
    id: 0x01,
    name: "nvm_erase_all",
    params: &[],
    response: Some(NVM_ERASE_ALL_RESPONSE),
    deprecated: false,
};

const TEST_DTM_TX_V4_PARAMS: &[Field] = &[
    Field::u8("packet_type"),
    Field::u8("length"),
    Field::u8("channel"),
    Field::u8("phy"),
    Field::i8("power_level"),
];
const TEST_DTM_TX_V4_RESPONSE: &[Field] = &[Field::u16("result")];
pub static TEST_DTM_TX_V4: CommandDescriptor = CommandDescriptor {
    class_id: class::TEST,
    id: 0x03,
    name: "test_dtm_tx_v4",
    params: TEST_DTM_TX_V4_PARAMS,
    response: Some(TEST_DTM_TX_V4_RESPONSE),
    deprecated: false,
};

const TEST_DTM_TX_CW_PARAMS: &[Field] = &[
    Field::u8("packet_type"),
    Field::u8("channel"),
    Field::u8("phy"),
    Field::i16("power_level"),
];
const TEST_DTM_TX_CW_RESPONSE: &[Field] = &[Field::u16("result")];
pub static TEST_DTM_TX_CW: CommandDescriptor = CommandDescriptor {
    class_id: class::TEST,
    id: 0x04,
    name: "test_dtm_tx_cw",
    params: TEST_DTM_TX_CW_PARAMS,
    response: Some(TEST_DTM_TX_CW_RESPONSE),
    deprecated: false,
};

const TEST_DTM_RX_PARAMS: &[Field] = &[Field::u8("channel"), Field::u8("phy")];
const TEST_DTM_RX_RESPONSE: &[Field] = &[Field::u16("result")];
pub static TEST_DTM_RX: CommandDescriptor = CommandDescriptor {
    class_id: class::TEST,
    id: 0x01,
    name: "test_dtm_rx",
    params: TEST_DTM_RX_PARAMS,
    response: Some(TEST_DTM_RX_RESPONSE),
    deprecated: false,
};

const TEST_DTM_END_RESPONSE: &[Field] = &[Field::u16("result")];
pub static TEST_DTM_END: CommandDescriptor = CommandDescriptor {
    class_id: class::TEST,
    id: 0x02,
    name: "test_dtm_end",
    params: &[],
    response: Some(TEST_DTM_END_RESPONSE),
    deprecated: false,
};

const SM_CONFIGURE_PARAMS: &[Field] = &[Field::u8("flags"), Field::u8("io_capabilities")];
const SM_CONFIGURE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_CONFIGURE: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x01,
    name: "sm_configure",
    params: SM_CONFIGURE_PARAMS,
    response: Some(SM_CONFIGURE_RESPONSE),
    deprecated: false,
};

const SM_SET_MINIMUM_KEY_SIZE_PARAMS: &[Field] = &[Field::u8("minimum_key_size")];
const SM_SET_MINIMUM_KEY_SIZE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_SET_MINIMUM_KEY_SIZE: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x14,
    name: "sm_set_minimum_key_size",
    params: SM_SET_MINIMUM_KEY_SIZE_PARAMS,
    response: Some(SM_SET_MINIMUM_KEY_SIZE_RESPONSE),
    deprecated: false,
};

const SM_SET_DEBUG_MODE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_SET_DEBUG_MODE: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x0f,
    name: "sm_set_debug_mode",
    params: &[],
    response: Some(SM_SET_DEBUG_MODE_RESPONSE),
    deprecated: false,
};

const SM_ADD_TO_WHITELIST_PARAMS: &[Field] = &[Field::addr("address"), Field::u8("address_type")];
const SM_ADD_TO_WHITELIST_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_ADD_TO_WHITELIST: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x13,
    name: "sm_add_to_whitelist",
    params: SM_ADD_TO_WHITELIST_PARAMS,
    response: Some(SM_ADD_TO_WHITELIST_RESPONSE),
    deprecated: false,
};

const SM_STORE_BONDING_CONFIGURATION_PARAMS: &[Field] = &[
    Field::u8("max_bonding_count"),
    Field::u8("policy_flags"),
];
const SM_STORE_BONDING_CONFIGURATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_STORE_BONDING_CONFIGURATION: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x02,
    name: "sm_store_bonding_configuration",
    params: SM_STORE_BONDING_CONFIGURATION_PARAMS,
    response: Some(SM_STORE_BONDING_CONFIGURATION_RESPONSE),
    deprecated: false,
};

const SM_SET_BONDABLE_MODE_PARAMS: &[Field] = &[Field::u8("bondable")];
const SM_SET_BONDABLE_MODE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_SET_BONDABLE_MODE: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x00,
    name: "sm_set_bondable_mode",
    params: SM_SET_BONDABLE_MODE_PARAMS,
    response: Some(SM_SET_BONDABLE_MODE_RESPONSE),
    deprecated: false,
};

const SM_SET_PASSKEY_PARAMS: &[Field] = &[Field::i32("passkey")];
const SM_SET_PASSKEY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_SET_PASSKEY: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x10,
    name: "sm_set_passkey",
    params: SM_SET_PASSKEY_PARAMS,
    response: Some(SM_SET_PASSKEY_RESPONSE),
    deprecated: false,
};

const SM_INCREASE_SECURITY_PARAMS: &[Field] = &[Field::u8("connection")];
const SM_INCREASE_SECURITY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_INCREASE_SECURITY: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x04,
    name: "sm_increase_security",
    params: SM_INCREASE_SECURITY_PARAMS,
    response: Some(SM_INCREASE_SECURITY_RESPONSE),
    deprecated: false,
};

const SM_ENTER_PASSKEY_PARAMS: &[Field] = &[Field::u8("connection"), Field::i32("passkey")];
const SM_ENTER_PASSKEY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_ENTER_PASSKEY: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x08,
    name: "sm_enter_passkey",
    params: SM_ENTER_PASSKEY_PARAMS,
    response: Some(SM_ENTER_PASSKEY_RESPONSE),
    deprecated: false,
};

const SM_PASSKEY_CONFIRM_PARAMS: &[Field] = &[Field::u8("connection"), Field::u8("confirm")];
const SM_PASSKEY_CONFIRM_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_PASSKEY_CONFIRM: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x09,
    name: "sm_passkey_confirm",
    params: SM_PASSKEY_CONFIRM_PARAMS,
    response: Some(SM_PASSKEY_CONFIRM_RESPONSE),
    deprecated: false,
};

const SM_BONDING_CONFIRM_PARAMS: &[Field] = &[Field::u8("connection"), Field::u8("confirm")];
const SM_BONDING_CONFIRM_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_BONDING_CONFIRM: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x0e,
    name: "sm_bonding_confirm",
    params: SM_BONDING_CONFIRM_PARAMS,
    response: Some(SM_BONDING_CONFIRM_RESPONSE),
    deprecated: false,
};

const SM_DELETE_BONDING_PARAMS: &[Field] = &[Field::u8("bonding")];
const SM_DELETE_BONDING_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_DELETE_BONDING: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x06,
    name: "sm_delete_bonding",
    params: SM_DELETE_BONDING_PARAMS,
    response: Some(SM_DELETE_BONDING_RESPONSE),
    deprecated: false,
};

const SM_DELETE_BONDINGS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_DELETE_BONDINGS: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x07,
    name: "sm_delete_bondings",
    params: &[],
    response: Some(SM_DELETE_BONDINGS_RESPONSE),
    deprecated: false,
};

const SM_GET_BONDING_HANDLES_PARAMS: &[Field] = &[Field::u32("reserved")];
const SM_GET_BONDING_HANDLES_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u32("num_bondings"),
    Field::array8("bondings"),
];
pub static SM_GET_BONDING_HANDLES: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x15,
    name: "sm_get_bonding_handles",
    params: SM_GET_BONDING_HANDLES_PARAMS,
    response: Some(SM_GET_BONDING_HANDLES_RESPONSE),
    deprecated: false,
};

const SM_GET_BONDING_DETAILS_PARAMS: &[Field] = &[Field::u32("bonding")];
const SM_GET_BONDING_DETAILS_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::addr("address"),
    Field::u8("address_type"),
    Field::u8("security_mode"),
    Field::u8("key_size"),
];
pub static SM_GET_BONDING_DETAILS: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x16,
    name: "sm_get_bonding_details",
    params: SM_GET_BONDING_DETAILS_PARAMS,
    response: Some(SM_GET_BONDING_DETAILS_RESPONSE),
    deprecated: false,
};

const SM_FIND_BONDING_BY_ADDRESS_PARAMS: &[Field] = &[Field::addr("address")];
const SM_FIND_BONDING_BY_ADDRESS_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::u32("bonding"),
    Field::u8("security_mode"),
    Field::u8("key_size"),
];
pub static SM_FIND_BONDING_BY_ADDRESS: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x17,
    name: "sm_find_bonding_by_address",
    params: SM_FIND_BONDING_BY_ADDRESS_PARAMS,
    response: Some(SM_FIND_BONDING_BY_ADDRESS_RESPONSE),
    deprecated: false,
};

const SM_SET_BONDING_KEY_PARAMS: &[Field] = &[
    Field::u32("bonding"),
    Field::u8("key_type"),
    Field::key128("key"),
];
const SM_SET_BONDING_KEY_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_SET_BONDING_KEY: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x18,
    name: "sm_set_bonding_key",
    params: SM_SET_BONDING_KEY_PARAMS,
    response: Some(SM_SET_BONDING_KEY_RESPONSE),
    deprecated: false,
};

const SM_SET_LEGACY_OOB_PARAMS: &[Field] = &[Field::u8("enable"), Field::key128("oob_data")];
const SM_SET_LEGACY_OOB_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_SET_LEGACY_OOB: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x19,
    name: "sm_set_legacy_oob",
    params: SM_SET_LEGACY_OOB_PARAMS,
    response: Some(SM_SET_LEGACY_OOB_RESPONSE),
    deprecated: false,
};

const SM_SET_OOB_PARAMS: &[Field] = &[Field::u8("enable")];
const SM_SET_OOB_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::key128("random"),
    Field::key128("confirm"),
];
pub static SM_SET_OOB: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x1a,
    name: "sm_set_oob",
    params: SM_SET_OOB_PARAMS,
    response: Some(SM_SET_OOB_RESPONSE),
    deprecated: false,
};

const SM_SET_REMOTE_OOB_PARAMS: &[Field] = &[
    Field::u8("enable"),
    Field::key128("random"),
    Field::key128("confirm"),
];
const SM_SET_REMOTE_OOB_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_SET_REMOTE_OOB: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x1b,
    name: "sm_set_remote_oob",
    params: SM_SET_REMOTE_OOB_PARAMS,
    response: Some(SM_SET_REMOTE_OOB_RESPONSE),
    deprecated: false,
};

const SM_SET_BONDING_DATA_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("type"),
    Field::array8("data"),
];
const SM_SET_BONDING_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static SM_SET_BONDING_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::SM,
    id: 0x1c,
    name: "sm_set_bonding_data",
    params: SM_SET_BONDING_DATA_PARAMS,
    response: Some(SM_SET_BONDING_DATA_RESPONSE),
    deprecated: false,
};

const OTA_SET_DEVICE_NAME_PARAMS: &[Field] = &[Field::array8("name")];
const OTA_SET_DEVICE_NAME_RESPONSE: &[Field] = &[Field::u16("result")];
pub static OTA_SET_DEVICE_NAME: CommandDescriptor = CommandDescriptor {
    class_id: class::OTA,
    id: 0x01,
    name: "ota_set_device_name",
    params: OTA_SET_DEVICE_NAME_PARAMS,
    response: Some(OTA_SET_DEVICE_NAME_RESPONSE),
    deprecated: false,
};

const OTA_SET_ADVERTISING_DATA_PARAMS: &[Field] = &[
    Field::u8("packet_type"),
    Field::array8("adv_data"),
];
const OTA_SET_ADVERTISING_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static OTA_SET_ADVERTISING_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::OTA,
    id: 0x02,
    name: "ota_set_advertising_data",
    params: OTA_SET_ADVERTISING_DATA_PARAMS,
    response: Some(OTA_SET_ADVERTISING_DATA_RESPONSE),
    deprecated: false,
};

const OTA_SET_CONFIGURATION_PARAMS: &[Field] = &[Field::u32("flags")];
const OTA_SET_CONFIGURATION_RESPONSE: &[Field] = &[Field::u16("result")];
pub static OTA_SET_CONFIGURATION: CommandDescriptor = CommandDescriptor {
    class_id: class::OTA,
    id: 0x03,
    name: "ota_set_configuration",
    params: OTA_SET_CONFIGURATION_PARAMS,
    response: Some(OTA_SET_CONFIGURATION_RESPONSE),
    deprecated: false,
};

const OTA_SET_RF_PATH_PARAMS: &[Field] = &[Field::u8("enable"), Field::u8("antenna")];
const OTA_SET_RF_PATH_RESPONSE: &[Field] = &[Field::u16("result")];
pub static OTA_SET_RF_PATH: CommandDescriptor = CommandDescriptor {
    class_id: class::OTA,
    id: 0x04,
    name: "ota_set_rf_path",
    params: OTA_SET_RF_PATH_PARAMS,
    response: Some(OTA_SET_RF_PATH_RESPONSE),
    deprecated: false,
};

const COEX_SET_OPTIONS_PARAMS: &[Field] = &[Field::u32("mask"), Field::u32("options")];
const COEX_SET_OPTIONS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static COEX_SET_OPTIONS: CommandDescriptor = CommandDescriptor {
    class_id: class::COEX,
    id: 0x00,
    name: "coex_set_options",
    params: COEX_SET_OPTIONS_PARAMS,
    response: Some(COEX_SET_OPTIONS_RESPONSE),
    deprecated: false,
};

const COEX_SET_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("priority"),
    Field::u8("request"),
    Field::u8("pwm_period"),
    Field::u8("pwm_dutycycle"),
];
const COEX_SET_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static COEX_SET_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::COEX,
    id: 0x02,
    name: "coex_set_parameters",
    params: COEX_SET_PARAMETERS_PARAMS,
    response: Some(COEX_SET_PARAMETERS_RESPONSE),
    deprecated: false,
};

const COEX_SET_DIRECTIONAL_PRIORITY_PULSE_PARAMS: &[Field] = &[Field::u8("pulse")];
const COEX_SET_DIRECTIONAL_PRIORITY_PULSE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static COEX_SET_DIRECTIONAL_PRIORITY_PULSE: CommandDescriptor = CommandDescriptor {
    class_id: class::COEX,
    id: 0x03,
    name: "coex_set_directional_priority_pulse",
    params: COEX_SET_DIRECTIONAL_PRIORITY_PULSE_PARAMS,
    response: Some(COEX_SET_DIRECTIONAL_PRIORITY_PULSE_RESPONSE),
    deprecated: false,
};

const COEX_GET_COUNTERS_PARAMS: &[Field] = &[Field::u8("reset")];
const COEX_GET_COUNTERS_RESPONSE: &[Field] = &[Field::u16("result"), Field::array8("counters")];
pub static COEX_GET_COUNTERS: CommandDescriptor = CommandDescriptor {
    class_id: class::COEX,
    id: 0x01,
    name: "coex_get_counters",
    params: COEX_GET_COUNTERS_PARAMS,
    response: Some(COEX_GET_COUNTERS_RESPONSE),
    deprecated: false,
};

const L2CAP_OPEN_LE_CHANNEL_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("spsm"),
    Field::u16("max_sdu"),
    Field::u16("max_pdu"),
    Field::u16("credit"),
];
const L2CAP_OPEN_LE_CHANNEL_RESPONSE: &[Field] = &[Field::u16("result"), Field::u16("cid")];
pub static L2CAP_OPEN_LE_CHANNEL: CommandDescriptor = CommandDescriptor {
    class_id: class::L2CAP,
    id: 0x01,
    name: "l2cap_open_le_channel",
    params: L2CAP_OPEN_LE_CHANNEL_PARAMS,
    response: Some(L2CAP_OPEN_LE_CHANNEL_RESPONSE),
    deprecated: false,
};

const L2CAP_SEND_LE_CHANNEL_OPEN_RESPONSE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("cid"),
    Field::u16("max_sdu"),
    Field::u16("max_pdu"),
    Field::u16("credit"),
    Field::u16("errorcode"),
];
const L2CAP_SEND_LE_CHANNEL_OPEN_RESPONSE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static L2CAP_SEND_LE_CHANNEL_OPEN_RESPONSE: CommandDescriptor = CommandDescriptor {
    class_id: class::L2CAP,
    id: 0x02,
    name: "l2cap_send_le_channel_open_response",
    params: L2CAP_SEND_LE_CHANNEL_OPEN_RESPONSE_PARAMS,
    response: Some(L2CAP_SEND_LE_CHANNEL_OPEN_RESPONSE_RESPONSE),
    deprecated: false,
};

const L2CAP_CHANNEL_SEND_DATA_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("cid"),
    Field::array8("data"),
];
const L2CAP_CHANNEL_SEND_DATA_RESPONSE: &[Field] = &[Field::u16("result")];
pub static L2CAP_CHANNEL_SEND_DATA: CommandDescriptor = CommandDescriptor {
    class_id: class::L2CAP,
    id: 0x03,
    name: "l2cap_channel_send_data",
    params: L2CAP_CHANNEL_SEND_DATA_PARAMS,
    response: Some(L2CAP_CHANNEL_SEND_DATA_RESPONSE),
    deprecated: false,
};

const L2CAP_CHANNEL_SEND_CREDIT_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("cid"),
    Field::u16("credit"),
];
const L2CAP_CHANNEL_SEND_CREDIT_RESPONSE: &[Field] = &[Field::u16("result")];
pub static L2CAP_CHANNEL_SEND_CREDIT: CommandDescriptor = CommandDescriptor {
    class_id: class::L2CAP,
    id: 0x04,
    name: "l2cap_channel_send_credit",
    params: L2CAP_CHANNEL_SEND_CREDIT_PARAMS,
    response: Some(L2CAP_CHANNEL_SEND_CREDIT_RESPONSE),
    deprecated: false,
};

const L2CAP_CLOSE_CHANNEL_PARAMS: &[Field] = &[Field::u8("connection"), Field::u16("cid")];
const L2CAP_CLOSE_CHANNEL_RESPONSE: &[Field] = &[Field::u16("result")];
pub static L2CAP_CLOSE_CHANNEL: CommandDescriptor = CommandDescriptor {
    class_id: class::L2CAP,
    id: 0x05,
    name: "l2cap_close_channel",
    params: L2CAP_CLOSE_CHANNEL_PARAMS,
    response: Some(L2CAP_CLOSE_CHANNEL_RESPONSE),
    deprecated: false,
};

const CTE_TRANSMITTER_SET_DTM_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("cte_length"),
    Field::u8("cte_type"),
    Field::array8("switching_pattern"),
];
const CTE_TRANSMITTER_SET_DTM_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_TRANSMITTER_SET_DTM_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_TRANSMITTER,
    id: 0x04,
    name: "cte_transmitter_set_dtm_parameters",
    params: CTE_TRANSMITTER_SET_DTM_PARAMETERS_PARAMS,
    response: Some(CTE_TRANSMITTER_SET_DTM_PARAMETERS_RESPONSE),
    deprecated: false,
};

const CTE_TRANSMITTER_CLEAR_DTM_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_TRANSMITTER_CLEAR_DTM_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_TRANSMITTER,
    id: 0x05,
    name: "cte_transmitter_clear_dtm_parameters",
    params: &[],
    response: Some(CTE_TRANSMITTER_CLEAR_DTM_PARAMETERS_RESPONSE),
    deprecated: false,
};

const CTE_TRANSMITTER_ENABLE_CONNECTION_CTE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("cte_types"),
    Field::array8("switching_pattern"),
];
const CTE_TRANSMITTER_ENABLE_CONNECTION_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_TRANSMITTER_ENABLE_CONNECTION_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_TRANSMITTER,
    id: 0x00,
    name: "cte_transmitter_enable_connection_cte",
    params: CTE_TRANSMITTER_ENABLE_CONNECTION_CTE_PARAMS,
    response: Some(CTE_TRANSMITTER_ENABLE_CONNECTION_CTE_RESPONSE),
    deprecated: false,
};

const CTE_TRANSMITTER_DISABLE_CONNECTION_CTE_PARAMS: &[Field] = &[Field::u8("connection")];
const CTE_TRANSMITTER_DISABLE_CONNECTION_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_TRANSMITTER_DISABLE_CONNECTION_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_TRANSMITTER,
    id: 0x01,
    name: "cte_transmitter_disable_connection_cte",
    params: CTE_TRANSMITTER_DISABLE_CONNECTION_CTE_PARAMS,
    response: Some(CTE_TRANSMITTER_DISABLE_CONNECTION_CTE_RESPONSE),
    deprecated: false,
};

const CTE_TRANSMITTER_ENABLE_CONNECTIONLESS_CTE_PARAMS: &[Field] = &[
    Field::u8("handle"),
    Field::u8("cte_length"),
    Field::u8("cte_type"),
    Field::u8("cte_count"),
    Field::array8("switching_pattern"),
];
const CTE_TRANSMITTER_ENABLE_CONNECTIONLESS_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_TRANSMITTER_ENABLE_CONNECTIONLESS_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_TRANSMITTER,
    id: 0x02,
    name: "cte_transmitter_enable_connectionless_cte",
    params: CTE_TRANSMITTER_ENABLE_CONNECTIONLESS_CTE_PARAMS,
    response: Some(CTE_TRANSMITTER_ENABLE_CONNECTIONLESS_CTE_RESPONSE),
    deprecated: false,
};

const CTE_TRANSMITTER_DISABLE_CONNECTIONLESS_CTE_PARAMS: &[Field] = &[Field::u8("handle")];
const CTE_TRANSMITTER_DISABLE_CONNECTIONLESS_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_TRANSMITTER_DISABLE_CONNECTIONLESS_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_TRANSMITTER,
    id: 0x03,
    name: "cte_transmitter_disable_connectionless_cte",
    params: CTE_TRANSMITTER_DISABLE_CONNECTIONLESS_CTE_PARAMS,
    response: Some(CTE_TRANSMITTER_DISABLE_CONNECTIONLESS_CTE_RESPONSE),
    deprecated: false,
};

const CTE_TRANSMITTER_ENABLE_SILABS_CTE_PARAMS: &[Field] = &[
    Field::u8("handle"),
    Field::u8("cte_length"),
    Field::u8("cte_type"),
    Field::u8("cte_count"),
    Field::array8("switching_pattern"),
];
const CTE_TRANSMITTER_ENABLE_SILABS_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_TRANSMITTER_ENABLE_SILABS_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_TRANSMITTER,
    id: 0x06,
    name: "cte_transmitter_enable_silabs_cte",
    params: CTE_TRANSMITTER_ENABLE_SILABS_CTE_PARAMS,
    response: Some(CTE_TRANSMITTER_ENABLE_SILABS_CTE_RESPONSE),
    deprecated: false,
};

const CTE_TRANSMITTER_DISABLE_SILABS_CTE_PARAMS: &[Field] = &[Field::u8("handle")];
const CTE_TRANSMITTER_DISABLE_SILABS_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_TRANSMITTER_DISABLE_SILABS_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_TRANSMITTER,
    id: 0x07,
    name: "cte_transmitter_disable_silabs_cte",
    params: CTE_TRANSMITTER_DISABLE_SILABS_CTE_PARAMS,
    response: Some(CTE_TRANSMITTER_DISABLE_SILABS_CTE_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_SET_DTM_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("cte_length"),
    Field::u8("cte_type"),
    Field::u8("slot_durations"),
    Field::array8("switching_pattern"),
];
const CTE_RECEIVER_SET_DTM_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_SET_DTM_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x05,
    name: "cte_receiver_set_dtm_parameters",
    params: CTE_RECEIVER_SET_DTM_PARAMETERS_PARAMS,
    response: Some(CTE_RECEIVER_SET_DTM_PARAMETERS_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_CLEAR_DTM_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_CLEAR_DTM_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x06,
    name: "cte_receiver_clear_dtm_parameters",
    params: &[],
    response: Some(CTE_RECEIVER_CLEAR_DTM_PARAMETERS_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_SET_SYNC_CTE_TYPE_PARAMS: &[Field] = &[Field::u8("sync_cte_type")];
const CTE_RECEIVER_SET_SYNC_CTE_TYPE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_SET_SYNC_CTE_TYPE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x09,
    name: "cte_receiver_set_sync_cte_type",
    params: CTE_RECEIVER_SET_SYNC_CTE_TYPE_PARAMS,
    response: Some(CTE_RECEIVER_SET_SYNC_CTE_TYPE_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("mode"),
    Field::u16("skip"),
    Field::u16("timeout"),
    Field::u8("sync_cte_type"),
    Field::u8("reporting_mode"),
];
const CTE_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x0a,
    name: "cte_receiver_set_default_sync_receive_parameters",
    params: CTE_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS_PARAMS,
    response: Some(CTE_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u8("mode"),
    Field::u16("skip"),
    Field::u16("timeout"),
    Field::u8("sync_cte_type"),
    Field::u8("reporting_mode"),
];
const CTE_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x0b,
    name: "cte_receiver_set_sync_receive_parameters",
    params: CTE_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS_PARAMS,
    response: Some(CTE_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_CONFIGURE_PARAMS: &[Field] = &[Field::u8("flags")];
const CTE_RECEIVER_CONFIGURE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_CONFIGURE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x00,
    name: "cte_receiver_configure",
    params: CTE_RECEIVER_CONFIGURE_PARAMS,
    response: Some(CTE_RECEIVER_CONFIGURE_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_ENABLE_CONNECTION_CTE_PARAMS: &[Field] = &[
    Field::u8("connection"),
    Field::u16("interval"),
    Field::u8("cte_length"),
    Field::u8("cte_type"),
    Field::u8("slot_durations"),
    Field::array8("switching_pattern"),
];
const CTE_RECEIVER_ENABLE_CONNECTION_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_ENABLE_CONNECTION_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x01,
    name: "cte_receiver_enable_connection_cte",
    params: CTE_RECEIVER_ENABLE_CONNECTION_CTE_PARAMS,
    response: Some(CTE_RECEIVER_ENABLE_CONNECTION_CTE_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_DISABLE_CONNECTION_CTE_PARAMS: &[Field] = &[Field::u8("connection")];
const CTE_RECEIVER_DISABLE_CONNECTION_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_DISABLE_CONNECTION_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x02,
    name: "cte_receiver_disable_connection_cte",
    params: CTE_RECEIVER_DISABLE_CONNECTION_CTE_PARAMS,
    response: Some(CTE_RECEIVER_DISABLE_CONNECTION_CTE_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_ENABLE_CONNECTIONLESS_CTE_PARAMS: &[Field] = &[
    Field::u16("sync"),
    Field::u8("slot_durations"),
    Field::u8("cte_count"),
    Field::array8("switching_pattern"),
];
const CTE_RECEIVER_ENABLE_CONNECTIONLESS_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_ENABLE_CONNECTIONLESS_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x03,
    name: "cte_receiver_enable_connectionless_cte",
    params: CTE_RECEIVER_ENABLE_CONNECTIONLESS_CTE_PARAMS,
    response: Some(CTE_RECEIVER_ENABLE_CONNECTIONLESS_CTE_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_DISABLE_CONNECTIONLESS_CTE_PARAMS: &[Field] = &[Field::u16("sync")];
const CTE_RECEIVER_DISABLE_CONNECTIONLESS_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_DISABLE_CONNECTIONLESS_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x04,
    name: "cte_receiver_disable_connectionless_cte",
    params: CTE_RECEIVER_DISABLE_CONNECTIONLESS_CTE_PARAMS,
    response: Some(CTE_RECEIVER_DISABLE_CONNECTIONLESS_CTE_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_ENABLE_SILABS_CTE_PARAMS: &[Field] = &[
    Field::u8("slot_durations"),
    Field::u8("cte_count"),
    Field::array8("switching_pattern"),
];
const CTE_RECEIVER_ENABLE_SILABS_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_ENABLE_SILABS_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x07,
    name: "cte_receiver_enable_silabs_cte",
    params: CTE_RECEIVER_ENABLE_SILABS_CTE_PARAMS,
    response: Some(CTE_RECEIVER_ENABLE_SILABS_CTE_RESPONSE),
    deprecated: false,
};

const CTE_RECEIVER_DISABLE_SILABS_CTE_RESPONSE: &[Field] = &[Field::u16("result")];
pub static CTE_RECEIVER_DISABLE_SILABS_CTE: CommandDescriptor = CommandDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x08,
    name: "cte_receiver_disable_silabs_cte",
    params: &[],
    response: Some(CTE_RECEIVER_DISABLE_SILABS_CTE_RESPONSE),
    deprecated: false,
};

const USER_MESSAGE_TO_TARGET_PARAMS: &[Field] = &[Field::array8("data")];
const USER_MESSAGE_TO_TARGET_RESPONSE: &[Field] = &[
    Field::u16("result"),
    Field::array8("response"),
];
pub static USER_MESSAGE_TO_TARGET: CommandDescriptor = CommandDescriptor {
    class_id: class::USER,
    id: 0x00,
    name: "user_message_to_target",
    params: USER_MESSAGE_TO_TARGET_PARAMS,
    response: Some(USER_MESSAGE_TO_TARGET_RESPONSE),
    deprecated: false,
};

const USER_MANAGE_EVENT_FILTER_PARAMS: &[Field] = &[Field::array8("data")];
const USER_MANAGE_EVENT_FILTER_RESPONSE: &[Field] = &[Field::u16("result")];
pub static USER_MANAGE_EVENT_FILTER: CommandDescriptor = CommandDescriptor {
    class_id: class::USER,
    id: 0x01,
    name: "user_manage_event_filter",
    params: USER_MANAGE_EVENT_FILTER_PARAMS,
    response: Some(USER_MANAGE_EVENT_FILTER_RESPONSE),
    deprecated: false,
};

pub static USER_RESET_TO_DFU: CommandDescriptor = CommandDescriptor {
    class_id: class::USER,
    id: 0x02,
    name: "user_reset_to_dfu",
    params: &[],
    response: None,
    deprecated: false,
};

/// Every command in the catalog.
pub static COMMANDS: &[&CommandDescriptor] = &[
    &DFU_RESET,
    &DFU_FLASH_SET_ADDRESS,
    &DFU_FLASH_UPLOAD,
    &DFU_FLASH_UPLOAD_FINISH,
    &SYSTEM_HELLO,
    &SYSTEM_START_BLUETOOTH,
    &SYSTEM_STOP_BLUETOOTH,
    &SYSTEM_GET_VERSION,
    &SYSTEM_RESET,
    &SYSTEM_HALT,
    &SYSTEM_LINKLAYER_CONFIGURE,
    &SYSTEM_SET_TX_POWER,
    &SYSTEM_GET_TX_POWER_SETTING,
    &SYSTEM_SET_IDENTITY_ADDRESS,
    &SYSTEM_GET_IDENTITY_ADDRESS,
    &SYSTEM_GET_RANDOM_DATA,
    &SYSTEM_DATA_BUFFER_WRITE,
    &SYSTEM_DATA_BUFFER_CLEAR,
    &SYSTEM_GET_COUNTERS,
    &SYSTEM_SET_LAZY_SOFT_TIMER,
    &GAP_SET_PRIVACY_MODE,
    &GAP_SET_DATA_CHANNEL_CLASSIFICATION,
    &GAP_ENABLE_WHITELISTING,
    &ADVERTISER_CREATE_SET,
    &ADVERTISER_CONFIGURE,
    &ADVERTISER_SET_TIMING,
    &ADVERTISER_SET_CHANNEL_MAP,
    &ADVERTISER_SET_TX_POWER,
    &ADVERTISER_SET_REPORT_SCAN_REQUEST,
    &ADVERTISER_SET_RANDOM_ADDRESS,
    &ADVERTISER_CLEAR_RANDOM_ADDRESS,
    &ADVERTISER_STOP,
    &ADVERTISER_DELETE_SET,
    &ADVERTISER_SET_PHY,
    &ADVERTISER_SET_CONFIGURATION,
    &ADVERTISER_CLEAR_CONFIGURATION,
    &ADVERTISER_SET_DATA,
    &ADVERTISER_SET_LONG_DATA,
    &ADVERTISER_START,
    &ADVERTISER_START_PERIODIC_ADVERTISING,
    &ADVERTISER_STOP_PERIODIC_ADVERTISING,
    &LEGACY_ADVERTISER_SET_DATA,
    &LEGACY_ADVERTISER_GENERATE_DATA,
    &LEGACY_ADVERTISER_START,
    &LEGACY_ADVERTISER_START_DIRECTED,
    &EXTENDED_ADVERTISER_SET_PHY,
    &EXTENDED_ADVERTISER_SET_DATA,
    &EXTENDED_ADVERTISER_SET_LONG_DATA,
    &EXTENDED_ADVERTISER_GENERATE_DATA,
    &EXTENDED_ADVERTISER_START,
    &EXTENDED_ADVERTISER_START_DIRECTED,
    &PERIODIC_ADVERTISER_SET_DATA,
    &PERIODIC_ADVERTISER_SET_LONG_DATA,
    &PERIODIC_ADVERTISER_START,
    &PERIODIC_ADVERTISER_STOP,
    &SCANNER_SET_PARAMETERS,
    &SCANNER_STOP,
    &SCANNER_SET_TIMING,
    &SCANNER_SET_MODE,
    &SCANNER_START,
    &SYNC_SET_PARAMETERS,
    &SYNC_OPEN,
    &SYNC_SET_REPORTING_MODE,
    &SYNC_CLOSE,
    &PAST_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS,
    &PAST_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS,
    &ADVERTISER_PAST_TRANSFER,
    &SYNC_PAST_TRANSFER,
    &CONNECTION_SET_DEFAULT_PARAMETERS,
    &CONNECTION_SET_DEFAULT_PREFERRED_PHY,
    &CONNECTION_OPEN,
    &CONNECTION_SET_PARAMETERS,
    &CONNECTION_SET_PREFERRED_PHY,
    &CONNECTION_DISABLE_SLAVE_LATENCY,
    &CONNECTION_GET_RSSI,
    &CONNECTION_READ_CHANNEL_MAP,
    &CONNECTION_SET_POWER_REPORTING,
    &CONNECTION_SET_REMOTE_POWER_REPORTING,
    &CONNECTION_GET_TX_POWER,
    &CONNECTION_GET_REMOTE_TX_POWER,
    &CONNECTION_CLOSE,
    &CONNECTION_READ_REMOTE_USED_FEATURES,
    &CONNECTION_GET_SECURITY_STATUS,
    &GATT_SET_MAX_MTU,
    &GATT_DISCOVER_PRIMARY_SERVICES,
    &GATT_DISCOVER_PRIMARY_SERVICES_BY_UUID,
    &GATT_FIND_INCLUDED_SERVICES,
    &GATT_DISCOVER_CHARACTERISTICS,
    &GATT_DISCOVER_CHARACTERISTICS_BY_UUID,
    &GATT_DISCOVER_DESCRIPTORS,
    &GATT_SET_CHARACTERISTIC_NOTIFICATION,
    &GATT_SEND_CHARACTERISTIC_CONFIRMATION,
    &GATT_READ_CHARACTERISTIC_VALUE,
    &GATT_READ_CHARACTERISTIC_VALUE_FROM_OFFSET,
    &GATT_READ_MULTIPLE_CHARACTERISTIC_VALUES,
    &GATT_READ_CHARACTERISTIC_VALUE_BY_UUID,
    &GATT_WRITE_CHARACTERISTIC_VALUE,
    &GATT_WRITE_CHARACTERISTIC_VALUE_WITHOUT_RESPONSE,
    &GATT_PREPARE_CHARACTERISTIC_VALUE_WRITE,
    &GATT_PREPARE_CHARACTERISTIC_VALUE_RELIABLE_WRITE,
    &GATT_EXECUTE_CHARACTERISTIC_VALUE_WRITE,
    &GATT_READ_DESCRIPTOR_VALUE,
    &GATT_WRITE_DESCRIPTOR_VALUE,
    &GATTDB_NEW_SESSION,
    &GATTDB_ADD_SERVICE,
    &GATTDB_REMOVE_SERVICE,
    &GATTDB_ADD_INCLUDED_SERVICE,
    &GATTDB_REMOVE_INCLUDED_SERVICE,
    &GATTDB_ADD_UUID16_CHARACTERISTIC,
    &GATTDB_ADD_UUID128_CHARACTERISTIC,
    &GATTDB_REMOVE_CHARACTERISTIC,
    &GATTDB_ADD_UUID16_DESCRIPTOR,
    &GATTDB_ADD_UUID128_DESCRIPTOR,
    &GATTDB_REMOVE_DESCRIPTOR,
    &GATTDB_START_SERVICE,
    &GATTDB_STOP_SERVICE,
    &GATTDB_START_CHARACTERISTIC,
    &GATTDB_STOP_CHARACTERISTIC,
    &GATTDB_COMMIT,
    &GATTDB_ABORT,
    &GATT_SERVER_SET_MAX_MTU,
    &GATT_SERVER_GET_MTU,
    &GATT_SERVER_FIND_ATTRIBUTE,
    &GATT_SERVER_READ_ATTRIBUTE_VALUE,
    &GATT_SERVER_READ_ATTRIBUTE_TYPE,
    &GATT_SERVER_WRITE_ATTRIBUTE_VALUE,
    &GATT_SERVER_SEND_USER_READ_RESPONSE,
    &GATT_SERVER_SEND_USER_WRITE_RESPONSE,
    &GATT_SERVER_SEND_NOTIFICATION,
    &GATT_SERVER_SEND_INDICATION,
    &GATT_SERVER_NOTIFY_ALL,
    &GATT_SERVER_READ_CLIENT_CONFIGURATION,
    &GATT_SERVER_SEND_USER_PREPARE_WRITE_RESPONSE,
    &GATT_SERVER_SET_CAPABILITIES,
    &GATT_SERVER_ENABLE_CAPABILITIES,
    &GATT_SERVER_DISABLE_CAPABILITIES,
    &GATT_SERVER_GET_ENABLED_CAPABILITIES,
    &GATT_SERVER_READ_CLIENT_SUPPORTED_FEATURES,
    &NVM_SAVE,
    &NVM_LOAD,
    &NVM_ERASE,
    &NVM_ERASE_ALL,
    &TEST_DTM_TX_V4,
    &TEST_DTM_TX_CW,
    &TEST_DTM_RX,
    &TEST_DTM_END,
    &SM_CONFIGURE,
    &SM_SET_MINIMUM_KEY_SIZE,
    &SM_SET_DEBUG_MODE,
    &SM_ADD_TO_WHITELIST,
    &SM_STORE_BONDING_CONFIGURATION,
    &SM_SET_BONDABLE_MODE,
    &SM_SET_PASSKEY,
    &SM_INCREASE_SECURITY,
    &SM_ENTER_PASSKEY,
    &SM_PASSKEY_CONFIRM,
    &SM_BONDING_CONFIRM,
    &SM_DELETE_BONDING,
    &SM_DELETE_BONDINGS,
    &SM_GET_BONDING_HANDLES,
    &SM_GET_BONDING_DETAILS,
    &SM_FIND_BONDING_BY_ADDRESS,
    &SM_SET_BONDING_KEY,
    &SM_SET_LEGACY_OOB,
    &SM_SET_OOB,
    &SM_SET_REMOTE_OOB,
    &SM_SET_BONDING_DATA,
    &OTA_SET_DEVICE_NAME,
    &OTA_SET_ADVERTISING_DATA,
    &OTA_SET_CONFIGURATION,
    &OTA_SET_RF_PATH,
    &COEX_SET_OPTIONS,
    &COEX_SET_PARAMETERS,
    &COEX_SET_DIRECTIONAL_PRIORITY_PULSE,
    &COEX_GET_COUNTERS,
    &L2CAP_OPEN_LE_CHANNEL,
    &L2CAP_SEND_LE_CHANNEL_OPEN_RESPONSE,
    &L2CAP_CHANNEL_SEND_DATA,
    &L2CAP_CHANNEL_SEND_CREDIT,
    &L2CAP_CLOSE_CHANNEL,
    &CTE_TRANSMITTER_SET_DTM_PARAMETERS,
    &CTE_TRANSMITTER_CLEAR_DTM_PARAMETERS,
    &CTE_TRANSMITTER_ENABLE_CONNECTION_CTE,
    &CTE_TRANSMITTER_DISABLE_CONNECTION_CTE,
    &CTE_TRANSMITTER_ENABLE_CONNECTIONLESS_CTE,
    &CTE_TRANSMITTER_DISABLE_CONNECTIONLESS_CTE,
    &CTE_TRANSMITTER_ENABLE_SILABS_CTE,
    &CTE_TRANSMITTER_DISABLE_SILABS_CTE,
    &CTE_RECEIVER_SET_DTM_PARAMETERS,
    &CTE_RECEIVER_CLEAR_DTM_PARAMETERS,
    &CTE_RECEIVER_SET_SYNC_CTE_TYPE,
    &CTE_RECEIVER_SET_DEFAULT_SYNC_RECEIVE_PARAMETERS,
    &CTE_RECEIVER_SET_SYNC_RECEIVE_PARAMETERS,
    &CTE_RECEIVER_CONFIGURE,
    &CTE_RECEIVER_ENABLE_CONNECTION_CTE,
    &CTE_RECEIVER_DISABLE_CONNECTION_CTE,
    &CTE_RECEIVER_ENABLE_CONNECTIONLESS_CTE,
    &CTE_RECEIVER_DISABLE_CONNECTIONLESS_CTE,
    &CTE_RECEIVER_ENABLE_SILABS_CTE,
    &CTE_RECEIVER_DISABLE_SILABS_CTE,
    &USER_MESSAGE_TO_TARGET,
    &USER_MANAGE_EVENT_FILTER,
    &USER_RESET_TO_DFU,
];
