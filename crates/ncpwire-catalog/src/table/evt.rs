//! Event descriptors.

use crate::class;
use crate::descriptor::EventDescriptor;
use crate::field::Field;

pub static DFU_BOOT: EventDescriptor = EventDescriptor {
    class_id: class::DFU,
    id: 0x00,
    name: "dfu_boot",
    fields: &[Field::u32("version")],
};

pub static DFU_BOOT_FAILURE: EventDescriptor = EventDescriptor {
    class_id: class::DFU,
    id: 0x01,
    name: "dfu_boot_failure",
    fields: &[Field::u16("reason")],
};

pub static SYSTEM_BOOT: EventDescriptor = EventDescriptor {
    class_id: class::SYSTEM,
    id: 0x00,
    name: "system_boot",
    fields: &[
        Field::u16("major"),
        Field::u16("minor"),
        Field::u16("patch"),
        Field::u16("build"),
        Field::u32("bootloader"),
        Field::u16("hw"),
        Field::u32("hash"),
    ],
};

pub static SYSTEM_ERROR: EventDescriptor = EventDescriptor {
    class_id: class::SYSTEM,
    id: 0x06,
    name: "system_error",
    fields: &[Field::u16("reason"), Field::array8("data")],
};

pub static SYSTEM_HARDWARE_ERROR: EventDescriptor = EventDescriptor {
    class_id: class::SYSTEM,
    id: 0x05,
    name: "system_hardware_error",
    fields: &[Field::u16("status")],
};

pub static SYSTEM_EXTERNAL_SIGNAL: EventDescriptor = EventDescriptor {
    class_id: class::SYSTEM,
    id: 0x03,
    name: "system_external_signal",
    fields: &[Field::u32("extsignals")],
};

pub static SYSTEM_AWAKE: EventDescriptor = EventDescriptor {
    class_id: class::SYSTEM,
    id: 0x04,
    name: "system_awake",
    fields: &[],
};

pub static SYSTEM_SOFT_TIMER: EventDescriptor = EventDescriptor {
    class_id: class::SYSTEM,
    id: 0x07,
    name: "system_soft_timer",
    fields: &[Field::u8("handle")],
};

pub static ADVERTISER_TIMEOUT: EventDescriptor = EventDescriptor {
    class_id: class::ADVERTISER,
    id: 0x01,
    name: "advertiser_timeout",
    fields: &[Field::u8("handle")],
};

pub static ADVERTISER_SCAN_REQUEST: EventDescriptor = EventDescriptor {
    class_id: class::ADVERTISER,
    id: 0x02,
    name: "advertiser_scan_request",
    fields: &[
        Field::u8("handle"),
        Field::addr("address"),
        Field::u8("address_type"),
        Field::u8("bonding"),
    ],
};

pub static PERIODIC_ADVERTISER_STATUS: EventDescriptor = EventDescriptor {
    class_id: class::PERIODIC_ADVERTISER,
    id: 0x00,
    name: "periodic_advertiser_status",
    fields: &[Field::u8("sid"), Field::u32("status")],
};

pub static SCANNER_LEGACY_ADVERTISEMENT_REPORT: EventDescriptor = EventDescriptor {
    class_id: class::SCANNER,
    id: 0x00,
    name: "scanner_legacy_advertisement_report",
    fields: &[
        Field::u8("event_flags"),
        Field::addr("address"),
        Field::u8("address_type"),
        Field::u8("bonding"),
        Field::i8("rssi"),
        Field::u8("channel"),
        Field::addr("target_address"),
        Field::u8("target_address_type"),
        Field::array8("data"),
    ],
};

pub static SCANNER_EXTENDED_ADVERTISEMENT_REPORT: EventDescriptor = EventDescriptor {
    class_id: class::SCANNER,
    id: 0x02,
    name: "scanner_extended_advertisement_report",
    fields: &[
        Field::u8("event_flags"),
        Field::addr("address"),
        Field::u8("address_type"),
        Field::u8("bonding"),
        Field::i8("rssi"),
        Field::u8("channel"),
        Field::addr("target_address"),
        Field::u8("target_address_type"),
        Field::u8("adv_sid"),
        Field::u8("primary_phy"),
        Field::u8("secondary_phy"),
        Field::i8("tx_power"),
        Field::u16("periodic_interval"),
        Field::u8("data_completeness"),
        Field::u8("counter"),
        Field::array8("data"),
    ],
};

pub static SCANNER_SCAN_REPORT: EventDescriptor = EventDescriptor {
    class_id: class::SCANNER,
    id: 0x01,
    name: "scanner_scan_report",
    fields: &[
        Field::u8("packet_type"),
        Field::addr("address"),
        Field::u8("address_type"),
        Field::u8("bonding"),
        Field::u8("primary_phy"),
        Field::u8("secondary_phy"),
        Field::u8("adv_sid"),
        Field::i8("tx_power"),
        Field::i8("rssi"),
        Field::u8("channel"),
        Field::u16("periodic_interval"),
        Field::array8("data"),
    ],
};

pub static SYNC_OPENED: EventDescriptor = EventDescriptor {
    class_id: class::SYNC,
    id: 0x00,
    name: "sync_opened",
    fields: &[
        Field::u16("sync"),
        Field::u8("adv_sid"),
        Field::addr("address"),
        Field::u8("address_type"),
        Field::u8("adv_phy"),
        Field::u16("adv_interval"),
        Field::u16("clock_accuracy"),
        Field::u8("bonding"),
    ],
};

pub static SYNC_TRANSFER_RECEIVED: EventDescriptor = EventDescriptor {
    class_id: class::SYNC,
    id: 0x03,
    name: "sync_transfer_received",
    fields: &[
        Field::u16("status"),
        Field::u16("sync"),
        Field::u16("service_data"),
        Field::u8("connection"),
        Field::u8("adv_sid"),
        Field::addr("address"),
        Field::u8("address_type"),
        Field::u8("adv_phy"),
        Field::u16("adv_interval"),
        Field::u16("clock_accuracy"),
        Field::u8("bonding"),
    ],
};

pub static SYNC_DATA: EventDescriptor = EventDescriptor {
    class_id: class::SYNC,
    id: 0x02,
    name: "sync_data",
    fields: &[
        Field::u16("sync"),
        Field::i8("tx_power"),
        Field::i8("rssi"),
        Field::u8("cte_type"),
        Field::u8("data_status"),
        Field::u8("counter"),
        Field::array8("data"),
    ],
};

pub static SYNC_CLOSED: EventDescriptor = EventDescriptor {
    class_id: class::SYNC,
    id: 0x01,
    name: "sync_closed",
    fields: &[Field::u16("reason"), Field::u16("sync")],
};

pub static CONNECTION_OPENED: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x00,
    name: "connection_opened",
    fields: &[
        Field::addr("address"),
        Field::u8("address_type"),
        Field::u8("master"),
        Field::u8("connection"),
        Field::u8("bonding"),
        Field::u8("advertiser"),
        Field::u16("sync"),
    ],
};

pub static CONNECTION_PARAMETERS: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x02,
    name: "connection_parameters",
    fields: &[
        Field::u8("connection"),
        Field::u16("interval"),
        Field::u16("latency"),
        Field::u16("timeout"),
        Field::u8("security_mode"),
        Field::u16("txsize"),
    ],
};

pub static CONNECTION_PHY_STATUS: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x04,
    name: "connection_phy_status",
    fields: &[Field::u8("connection"), Field::u8("phy")],
};

pub static CONNECTION_RSSI: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x03,
    name: "connection_rssi",
    fields: &[
        Field::u8("connection"),
        Field::u8("status"),
        Field::i8("rssi"),
    ],
};

pub static CONNECTION_GET_REMOTE_TX_POWER_COMPLETED: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x05,
    name: "connection_get_remote_tx_power_completed",
    fields: &[
        Field::u16("status"),
        Field::u8("connection"),
        Field::u8("phy"),
        Field::i8("power_level"),
        Field::u8("flags"),
        Field::i8("delta"),
    ],
};

pub static CONNECTION_TX_POWER: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x06,
    name: "connection_tx_power",
    fields: &[
        Field::u8("connection"),
        Field::u8("phy"),
        Field::i8("power_level"),
        Field::u8("flags"),
        Field::i8("delta"),
    ],
};

pub static CONNECTION_REMOTE_TX_POWER: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x07,
    name: "connection_remote_tx_power",
    fields: &[
        Field::u8("connection"),
        Field::u8("phy"),
        Field::i8("power_level"),
        Field::u8("flags"),
        Field::i8("delta"),
    ],
};

pub static CONNECTION_CLOSED: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x01,
    name: "connection_closed",
    fields: &[Field::u16("reason"), Field::u8("connection")],
};

pub static CONNECTION_REMOTE_USED_FEATURES: EventDescriptor = EventDescriptor {
    class_id: class::CONNECTION,
    id: 0x08,
    name: "connection_remote_used_features",
    fields: &[Field::u8("connection"), Field::array8("features")],
};

pub static GATT_MTU_EXCHANGED: EventDescriptor = EventDescriptor {
    class_id: class::GATT,
    id: 0x00,
    name: "gatt_mtu_exchanged",
    fields: &[Field::u8("connection"), Field::u16("mtu")],
};

pub static GATT_SERVICE: EventDescriptor = EventDescriptor {
    class_id: class::GATT,
    id: 0x01,
    name: "gatt_service",
    fields: &[
        Field::u8("connection"),
        Field::u32("service"),
        Field::array8("uuid"),
    ],
};

pub static GATT_CHARACTERISTIC: EventDescriptor = EventDescriptor {
    class_id: class::GATT,
    id: 0x02,
    name: "gatt_characteristic",
    fields: &[
        Field::u8("connection"),
        Field::u16("characteristic"),
        Field::u8("properties"),
        Field::array8("uuid"),
    ],
};

pub static GATT_DESCRIPTOR: EventDescriptor = EventDescriptor {
    class_id: class::GATT,
    id: 0x03,
    name: "gatt_descriptor",
    fields: &[
        Field::u8("connection"),
        Field::u16("descriptor"),
        Field::array8("uuid"),
    ],
};

pub static GATT_CHARACTERISTIC_VALUE: EventDescriptor = EventDescriptor {
    class_id: class::GATT,
    id: 0x04,
    name: "gatt_characteristic_value",
    fields: &[
        Field::u8("connection"),
        Field::u16("characteristic"),
        Field::u8("att_opcode"),
        Field::u16("offset"),
        Field::array8("value"),
    ],
};

pub static GATT_DESCRIPTOR_VALUE: EventDescriptor = EventDescriptor {
    class_id: class::GATT,
    id: 0x05,
    name: "gatt_descriptor_value",
    fields: &[
        Field::u8("connection"),
        Field::u16("descriptor"),
        Field::u16("offset"),
        Field::array8("value"),
    ],
};

pub static GATT_PROCEDURE_COMPLETED: EventDescriptor = EventDescriptor {
    class_id: class::GATT,
    id: 0x06,
    name: "gatt_procedure_completed",
    fields: &[Field::u8("connection"), Field::u16("result")],
};

pub static GATT_SERVER_ATTRIBUTE_VALUE: EventDescriptor = EventDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x00,
    name: "gatt_server_attribute_value",
    fields: &[
        Field::u8("connection"),
        Field::u16("attribute"),
        Field::u8("att_opcode"),
        Field::u16("offset"),
        Field::array8("value"),
    ],
};

pub static GATT_SERVER_USER_READ_REQUEST: EventDescriptor = EventDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x01,
    name: "gatt_server_user_read_request",
    fields: &[
        Field::u8("connection"),
        Field::u16("characteristic"),
        Field::u8("att_opcode"),
        Field::u16("offset"),
    ],
};

pub static GATT_SERVER_USER_WRITE_REQUEST: EventDescriptor = EventDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x02,
    name: "gatt_server_user_write_request",
    fields: &[
        Field::u8("connection"),
        Field::u16("characteristic"),
        Field::u8("att_opcode"),
        Field::u16("offset"),
        Field::array8("value"),
    ],
};

pub static GATT_SERVER_CHARACTERISTIC_STATUS: EventDescriptor = EventDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x03,
    name: "gatt_server_characteristic_status",
    fields: &[
        Field::u8("connection"),
        Field::u16("characteristic"),
        Field::u8("status_flags"),
        Field::u16("client_config_flags"),
        Field::u16("client_config"),
    ],
};

pub static GATT_SERVER_EXECUTE_WRITE_COMPLETED: EventDescriptor = EventDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x04,
    name: "gatt_server_execute_write_completed",
    fields: &[Field::u8("connection"), Field::u16("result")],
};

pub static GATT_SERVER_INDICATION_TIMEOUT: EventDescriptor = EventDescriptor {
    class_id: class::GATT_SERVER,
    id: 0x05,
    name: "gatt_server_indication_timeout",
    fields: &[Field::u8("connection")],
};

pub static TEST_DTM_COMPLETED: EventDescriptor = EventDescriptor {
    class_id: class::TEST,
    id: 0x00,
    name: "test_dtm_completed",
    fields: &[Field::u16("result"), Field::u16("number_of_packets")],
};

pub static SM_PASSKEY_DISPLAY: EventDescriptor = EventDescriptor {
    class_id: class::SM,
    id: 0x00,
    name: "sm_passkey_display",
    fields: &[Field::u8("connection"), Field::u32("passkey")],
};

pub static SM_PASSKEY_REQUEST: EventDescriptor = EventDescriptor {
    class_id: class::SM,
    id: 0x01,
    name: "sm_passkey_request",
    fields: &[Field::u8("connection")],
};

pub static SM_CONFIRM_PASSKEY: EventDescriptor = EventDescriptor {
    class_id: class::SM,
    id: 0x02,
    name: "sm_confirm_passkey",
    fields: &[Field::u8("connection"), Field::u32("passkey")],
};

pub static SM_BONDED: EventDescriptor = EventDescriptor {
    class_id: class::SM,
    id: 0x03,
    name: "sm_bonded",
    fields: &[
        Field::u8("connection"),
        Field::u8("bonding"),
        Field::u8("security_mode"),
    ],
};

pub static SM_BONDING_FAILED: EventDescriptor = EventDescriptor {
    class_id: class::SM,
    id: 0x04,
    name: "sm_bonding_failed",
    fields: &[Field::u8("connection"), Field::u16("reason")],
};

pub static SM_CONFIRM_BONDING: EventDescriptor = EventDescriptor {
    class_id: class::SM,
    id: 0x09,
    name: "sm_confirm_bonding",
    fields: &[Field::u8("connection"), Field::i8("bonding_handle")],
};

pub static L2CAP_LE_CHANNEL_OPEN_REQUEST: EventDescriptor = EventDescriptor {
    class_id: class::L2CAP,
    id: 0x01,
    name: "l2cap_le_channel_open_request",
    fields: &[
        Field::u8("connection"),
        Field::u16("spsm"),
        Field::u16("cid"),
        Field::u16("max_sdu"),
        Field::u16("max_pdu"),
        Field::u16("credit"),
        Field::u16("remote_cid"),
    ],
};

pub static L2CAP_LE_CHANNEL_OPEN_RESPONSE: EventDescriptor = EventDescriptor {
    class_id: class::L2CAP,
    id: 0x02,
    name: "l2cap_le_channel_open_response",
    fields: &[
        Field::u8("connection"),
        Field::u16("cid"),
        Field::u16("max_sdu"),
        Field::u16("max_pdu"),
        Field::u16("credit"),
        Field::u16("errorcode"),
    ],
};

pub static L2CAP_CHANNEL_DATA: EventDescriptor = EventDescriptor {
    class_id: class::L2CAP,
    id: 0x03,
    name: "l2cap_channel_data",
    fields: &[
        Field::u8("connection"),
        Field::u16("cid"),
        Field::array8("data"),
    ],
};

pub static L2CAP_CHANNEL_CREDIT: EventDescriptor = EventDescriptor {
    class_id: class::L2CAP,
    id: 0x04,
    name: "l2cap_channel_credit",
    fields: &[
        Field::u8("connection"),
        Field::u16("cid"),
        Field::u16("credit"),
    ],
};

pub static L2CAP_CHANNEL_CLOSED: EventDescriptor = EventDescriptor {
    class_id: class::L2CAP,
    id: 0x05,
    name: "l2cap_channel_closed",
    fields: &[
        Field::u8("connection"),
        Field::u16("cid"),
        Field::u16("reason"),
    ],
};

pub static L2CAP_COMMAND_REJECTED: EventDescriptor = EventDescriptor {
    class_id: class::L2CAP,
    id: 0x06,
    name: "l2cap_command_rejected",
    fields: &[
        Field::u8("connection"),
        Field::u8("code"),
        Field::u16("reason"),
    ],
};

pub static CTE_RECEIVER_DTM_IQ_REPORT: EventDescriptor = EventDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x02,
    name: "cte_receiver_dtm_iq_report",
    fields: &[
        Field::u16("status"),
        Field::u8("channel"),
        Field::i8("rssi"),
        Field::u8("rssi_antenna_id"),
        Field::u8("cte_type"),
        Field::u8("slot_durations"),
        Field::u16("event_counter"),
        Field::array8("samples"),
    ],
};

pub static CTE_RECEIVER_CONNECTION_IQ_REPORT: EventDescriptor = EventDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x00,
    name: "cte_receiver_connection_iq_report",
    fields: &[
        Field::u16("status"),
        Field::u8("connection"),
        Field::u8("phy"),
        Field::u8("channel"),
        Field::i8("rssi"),
        Field::u8("rssi_antenna_id"),
        Field::u8("cte_type"),
        Field::u8("slot_durations"),
        Field::u16("event_counter"),
        Field::array8("samples"),
    ],
};

pub static CTE_RECEIVER_CONNECTIONLESS_IQ_REPORT: EventDescriptor = EventDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x01,
    name: "cte_receiver_connectionless_iq_report",
    fields: &[
        Field::u16("status"),
        Field::u16("sync"),
        Field::u8("channel"),
        Field::i8("rssi"),
        Field::u8("rssi_antenna_id"),
        Field::u8("cte_type"),
        Field::u8("slot_durations"),
        Field::u16("event_counter"),
        Field::array8("samples"),
    ],
};

pub static CTE_RECEIVER_SILABS_IQ_REPORT: EventDescriptor = EventDescriptor {
    class_id: class::CTE_RECEIVER,
    id: 0x03,
    name: "cte_receiver_silabs_iq_report",
    fields: &[
        Field::u16("status"),
        Field::addr("address"),
        Field::u8("address_type"),
        Field::u8("phy"),
        Field::u8("channel"),
        Field::i8("rssi"),
        Field::u8("rssi_antenna_id"),
        Field::u8("cte_type"),
        Field::u8("slot_durations"),
        Field::u16("packet_counter"),
        Field::array8("samples"),
    ],
};

pub static USER_MESSAGE_TO_HOST: EventDescriptor = EventDescriptor {
    class_id: class::USER,
    id: 0x00,
    name: "user_message_to_host",
    fields: &[Field::array8("message")],
};

/// Every event in the catalog.
pub static EVENTS: &[&EventDescriptor] = &[
    &DFU_BOOT,
    &DFU_BOOT_FAILURE,
    &SYSTEM_BOOT,
    &SYSTEM_ERROR,
    &SYSTEM_HARDWARE_ERROR,
    &SYSTEM_EXTERNAL_SIGNAL,
    &SYSTEM_AWAKE,
    &SYSTEM_SOFT_TIMER,
    &ADVERTISER_TIMEOUT,
    &ADVERTISER_SCAN_REQUEST,
    &PERIODIC_ADVERTISER_STATUS,
    &SCANNER_LEGACY_ADVERTISEMENT_REPORT,
    &SCANNER_EXTENDED_ADVERTISEMENT_REPORT,
    &SCANNER_SCAN_REPORT,
    &SYNC_OPENED,
    &SYNC_TRANSFER_RECEIVED,
    &SYNC_DATA,
    &SYNC_CLOSED,
    &CONNECTION_OPENED,
    &CONNECTION_PARAMETERS,
    &CONNECTION_PHY_STATUS,
    &CONNECTION_RSSI,
    &CONNECTION_GET_REMOTE_TX_POWER_COMPLETED,
    &CONNECTION_TX_POWER,
    &CONNECTION_REMOTE_TX_POWER,
    &CONNECTION_CLOSED,
    &CONNECTION_REMOTE_USED_FEATURES,
    &GATT_MTU_EXCHANGED,
    &GATT_SERVICE,
    &GATT_CHARACTERISTIC,
    &GATT_DESCRIPTOR,
    &GATT_CHARACTERISTIC_VALUE,
    &GATT_DESCRIPTOR_VALUE,
    &GATT_PROCEDURE_COMPLETED,
    &GATT_SERVER_ATTRIBUTE_VALUE,
    &GATT_SERVER_USER_READ_REQUEST,
    &GATT_SERVER_USER_WRITE_REQUEST,
    &GATT_SERVER_CHARACTERISTIC_STATUS,
    &GATT_SERVER_EXECUTE_WRITE_COMPLETED,
    &GATT_SERVER_INDICATION_TIMEOUT,
    &TEST_DTM_COMPLETED,
    &SM_PASSKEY_DISPLAY,
    &SM_PASSKEY_REQUEST,
    &SM_CONFIRM_PASSKEY,
    &SM_BONDED,
    &SM_BONDING_FAILED,
    &SM_CONFIRM_BONDING,
    &L2CAP_LE_CHANNEL_OPEN_REQUEST,
    &L2CAP_LE_CHANNEL_OPEN_RESPONSE,
    &L2CAP_CHANNEL_DATA,
    &L2CAP_CHANNEL_CREDIT,
    &L2CAP_CHANNEL_CLOSED,
    &L2CAP_COMMAND_REJECTED,
    &CTE_RECEIVER_DTM_IQ_REPORT,
    &CTE_RECEIVER_CONNECTION_IQ_REPORT,
    &CTE_RECEIVER_CONNECTIONLESS_IQ_REPORT,
    &CTE_RECEIVER_SILABS_IQ_REPORT,
    &USER_MESSAGE_TO_HOST,
];
