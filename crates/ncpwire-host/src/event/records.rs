//! Typed event records.
//!
//! [`Event`] has one variant per catalog event. Records are built from a
//! [`Message`] decoded against the event's descriptor, so a variant can only
//! hold the shape its `(class_id, id)` key selects.

use bytes::Bytes;
use ncpwire_catalog::{class, CodecError, Message, Value};
use ncpwire_frame::MessageKey;

/// `dfu_boot` event (class 0x00, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfuBoot {
    pub version: u32,
}

/// `dfu_boot_failure` event (class 0x00, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfuBootFailure {
    pub reason: u16,
}

/// `system_boot` event (class 0x01, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemBoot {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    pub build: u16,
    pub bootloader: u32,
    pub hw: u16,
    pub hash: u32,
}

/// `system_error` event (class 0x01, id 0x06).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemError {
    pub reason: u16,
    pub data: Bytes,
}

/// `system_hardware_error` event (class 0x01, id 0x05).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemHardwareError {
    pub status: u16,
}

/// `system_external_signal` event (class 0x01, id 0x03).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemExternalSignal {
    pub extsignals: u32,
}

/// `system_awake` event (class 0x01, id 0x04).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemAwake;

/// `system_soft_timer` event (class 0x01, id 0x07).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSoftTimer {
    pub handle: u8,
}

/// `advertiser_timeout` event (class 0x04, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertiserTimeout {
    pub handle: u8,
}

/// `advertiser_scan_request` event (class 0x04, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertiserScanRequest {
    pub handle: u8,
    pub address: [u8; 6],
    pub address_type: u8,
    pub bonding: u8,
}

/// `periodic_advertiser_status` event (class 0x58, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicAdvertiserStatus {
    pub sid: u8,
    pub status: u32,
}

/// `scanner_legacy_advertisement_report` event (class 0x05, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerLegacyAdvertisementReport {
    pub event_flags: u8,
    pub address: [u8; 6],
    pub address_type: u8,
    pub bonding: u8,
    pub rssi: i8,
    pub channel: u8,
    pub target_address: [u8; 6],
    pub target_address_type: u8,
    pub data: Bytes,
}

/// `scanner_extended_advertisement_report` event (class 0x05, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerExtendedAdvertisementReport {
    pub event_flags: u8,
    pub address: [u8; 6],
    pub address_type: u8,
    pub bonding: u8,
    pub rssi: i8,
    pub channel: u8,
    pub target_address: [u8; 6],
    pub target_address_type: u8,
    pub adv_sid: u8,
    pub primary_phy: u8,
    pub secondary_phy: u8,
    pub tx_power: i8,
    pub periodic_interval: u16,
    pub data_completeness: u8,
    pub counter: u8,
    pub data: Bytes,
}

/// `scanner_scan_report` event (class 0x05, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerScanReport {
    pub packet_type: u8,
    pub address: [u8; 6],
    pub address_type: u8,
    pub bonding: u8,
    pub primary_phy: u8,
    pub secondary_phy: u8,
    pub adv_sid: u8,
    pub tx_power: i8,
    pub rssi: i8,
    pub channel: u8,
    pub periodic_interval: u16,
    pub data: Bytes,
}

/// `sync_opened` event (class 0x42, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOpened {
    pub sync: u16,
    pub adv_sid: u8,
    pub address: [u8; 6],
    pub address_type: u8,
    pub adv_phy: u8,
    pub adv_interval: u16,
    pub clock_accuracy: u16,
    pub bonding: u8,
}

/// `sync_transfer_received` event (class 0x42, id 0x03).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTransferReceived {
    pub status: u16,
    pub sync: u16,
    pub service_data: u16,
    pub connection: u8,
    pub adv_sid: u8,
    pub address: [u8; 6],
    pub address_type: u8,
    pub adv_phy: u8,
    pub adv_interval: u16,
    pub clock_accuracy: u16,
    pub bonding: u8,
}

/// `sync_data` event (class 0x42, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncData {
    pub sync: u16,
    pub tx_power: i8,
    pub rssi: i8,
    pub cte_type: u8,
    pub data_status: u8,
    pub counter: u8,
    pub data: Bytes,
}

/// `sync_closed` event (class 0x42, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncClosed {
    pub reason: u16,
    pub sync: u16,
}

/// `connection_opened` event (class 0x06, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionOpened {
    pub address: [u8; 6],
    pub address_type: u8,
    pub master: u8,
    pub connection: u8,
    pub bonding: u8,
    pub advertiser: u8,
    pub sync: u16,
}

/// `connection_parameters` event (class 0x06, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParameters {
    pub connection: u8,
    pub interval: u16,
    pub latency: u16,
    pub timeout: u16,
    pub security_mode: u8,
    pub txsize: u16,
}

/// `connection_phy_status` event (class 0x06, id 0x04).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPhyStatus {
    pub connection: u8,
    pub phy: u8,
}

/// `connection_rssi` event (class 0x06, id 0x03).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRssi {
    pub connection: u8,
    pub status: u8,
    pub rssi: i8,
}

/// `connection_get_remote_tx_power_completed` event (class 0x06, id 0x05).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionGetRemoteTxPowerCompleted {
    pub status: u16,
    pub connection: u8,
    pub phy: u8,
    pub power_level: i8,
    pub flags: u8,
    pub delta: i8,
}

/// `connection_tx_power` event (class 0x06, id 0x06).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTxPower {
    pub connection: u8,
    pub phy: u8,
    pub power_level: i8,
    pub flags: u8,
    pub delta: i8,
}

/// `connection_remote_tx_power` event (class 0x06, id 0x07).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRemoteTxPower {
    pub connection: u8,
    pub phy: u8,
    pub power_level: i8,
    pub flags: u8,
    pub delta: i8,
}

/// `connection_closed` event (class 0x06, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionClosed {
    pub reason: u16,
    pub connection: u8,
}

/// `connection_remote_used_features` event (class 0x06, id 0x08).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRemoteUsedFeatures {
    pub connection: u8,
    pub features: Bytes,
}

/// `gatt_mtu_exchanged` event (class 0x09, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattMtuExchanged {
    pub connection: u8,
    pub mtu: u16,
}

/// `gatt_service` event (class 0x09, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattService {
    pub connection: u8,
    pub service: u32,
    pub uuid: Bytes,
}

/// `gatt_characteristic` event (class 0x09, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattCharacteristic {
    pub connection: u8,
    pub characteristic: u16,
    pub properties: u8,
    pub uuid: Bytes,
}

/// `gatt_descriptor` event (class 0x09, id 0x03).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattDescriptor {
    pub connection: u8,
    pub descriptor: u16,
    pub uuid: Bytes,
}

/// `gatt_characteristic_value` event (class 0x09, id 0x04).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattCharacteristicValue {
    pub connection: u8,
    pub characteristic: u16,
    pub att_opcode: u8,
    pub offset: u16,
    pub value: Bytes,
}

/// `gatt_descriptor_value` event (class 0x09, id 0x05).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattDescriptorValue {
    pub connection: u8,
    pub descriptor: u16,
    pub offset: u16,
    pub value: Bytes,
}

/// `gatt_procedure_completed` event (class 0x09, id 0x06).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattProcedureCompleted {
    pub connection: u8,
    pub result: u16,
}

/// `gatt_server_attribute_value` event (class 0x0a, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattServerAttributeValue {
    pub connection: u8,
    pub attribute: u16,
    pub att_opcode: u8,
    pub offset: u16,
    pub value: Bytes,
}

/// `gatt_server_user_read_request` event (class 0x0a, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattServerUserReadRequest {
    pub connection: u8,
    pub characteristic: u16,
    pub att_opcode: u8,
    pub offset: u16,
}

/// `gatt_server_user_write_request` event (class 0x0a, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattServerUserWriteRequest {
    pub connection: u8,
    pub characteristic: u16,
    pub att_opcode: u8,
    pub offset: u16,
    pub value: Bytes,
}

/// `gatt_server_characteristic_status` event (class 0x0a, id 0x03).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattServerCharacteristicStatus {
    pub connection: u8,
    pub characteristic: u16,
    pub status_flags: u8,
    pub client_config_flags: u16,
    pub client_config: u16,
}

/// `gatt_server_execute_write_completed` event (class 0x0a, id 0x04).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattServerExecuteWriteCompleted {
    pub connection: u8,
    pub result: u16,
}

/// `gatt_server_indication_timeout` event (class 0x0a, id 0x05).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattServerIndicationTimeout {
    pub connection: u8,
}

/// `test_dtm_completed` event (class 0x0e, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDtmCompleted {
    pub result: u16,
    pub number_of_packets: u16,
}

/// `sm_passkey_display` event (class 0x0f, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmPasskeyDisplay {
    pub connection: u8,
    pub passkey: u32,
}

/// `sm_passkey_request` event (class 0x0f, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmPasskeyRequest {
    pub connection: u8,
}

/// `sm_confirm_passkey` event (class 0x0f, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmConfirmPasskey {
    pub connection: u8,
    pub passkey: u32,
}

/// `sm_bonded` event (class 0x0f, id 0x03).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmBonded {
    pub connection: u8,
    pub bonding: u8,
    pub security_mode: u8,
}

/// `sm_bonding_failed` event (class 0x0f, id 0x04).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmBondingFailed {
    pub connection: u8,
    pub reason: u16,
}

/// `sm_confirm_bonding` event (class 0x0f, id 0x09).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmConfirmBonding {
    pub connection: u8,
    pub bonding_handle: i8,
}

/// `l2cap_le_channel_open_request` event (class 0x43, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2capLeChannelOpenRequest {
    pub connection: u8,
    pub spsm: u16,
    pub cid: u16,
    pub max_sdu: u16,
    pub max_pdu: u16,
    pub credit: u16,
    pub remote_cid: u16,
}

/// `l2cap_le_channel_open_response` event (class 0x43, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2capLeChannelOpenResponse {
    pub connection: u8,
    pub cid: u16,
    pub max_sdu: u16,
    pub max_pdu: u16,
    pub credit: u16,
    pub errorcode: u16,
}

/// `l2cap_channel_data` event (class 0x43, id 0x03).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2capChannelData {
    pub connection: u8,
    pub cid: u16,
    pub data: Bytes,
}

/// `l2cap_channel_credit` event (class 0x43, id 0x04).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2capChannelCredit {
    pub connection: u8,
    pub cid: u16,
    pub credit: u16,
}

/// `l2cap_channel_closed` event (class 0x43, id 0x05).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2capChannelClosed {
    pub connection: u8,
    pub cid: u16,
    pub reason: u16,
}

/// `l2cap_command_rejected` event (class 0x43, id 0x06).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2capCommandRejected {
    pub connection: u8,
    pub code: u8,
    pub reason: u16,
}

/// `cte_receiver_dtm_iq_report` event (class 0x45, id 0x02).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CteReceiverDtmIqReport {
    pub status: u16,
    pub channel: u8,
    pub rssi: i8,
    pub rssi_antenna_id: u8,
    pub cte_type: u8,
    pub slot_durations: u8,
    pub event_counter: u16,
    pub samples: Bytes,
}

/// `cte_receiver_connection_iq_report` event (class 0x45, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CteReceiverConnectionIqReport {
    pub status: u16,
    pub connection: u8,
    pub phy: u8,
    pub channel: u8,
    pub rssi: i8,
    pub rssi_antenna_id: u8,
    pub cte_type: u8,
    pub slot_durations: u8,
    pub event_counter: u16,
    pub samples: Bytes,
}

/// `cte_receiver_connectionless_iq_report` event (class 0x45, id 0x01).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CteReceiverConnectionlessIqReport {
    pub status: u16,
    pub sync: u16,
    pub channel: u8,
    pub rssi: i8,
    pub rssi_antenna_id: u8,
    pub cte_type: u8,
    pub slot_durations: u8,
    pub event_counter: u16,
    pub samples: Bytes,
}

/// `cte_receiver_silabs_iq_report` event (class 0x45, id 0x03).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CteReceiverSilabsIqReport {
    pub status: u16,
    pub address: [u8; 6],
    pub address_type: u8,
    pub phy: u8,
    pub channel: u8,
    pub rssi: i8,
    pub rssi_antenna_id: u8,
    pub cte_type: u8,
    pub slot_durations: u8,
    pub packet_counter: u16,
    pub samples: Bytes,
}

/// `user_message_to_host` event (class 0xff, id 0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessageToHost {
    pub message: Bytes,
}

/// An event decoded from the NCP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    DfuBoot(DfuBoot),
    DfuBootFailure(DfuBootFailure),
    SystemBoot(SystemBoot),
    SystemError(SystemError),
    SystemHardwareError(SystemHardwareError),
    SystemExternalSignal(SystemExternalSignal),
    SystemAwake(SystemAwake),
    SystemSoftTimer(SystemSoftTimer),
    AdvertiserTimeout(AdvertiserTimeout),
    AdvertiserScanRequest(AdvertiserScanRequest),
    PeriodicAdvertiserStatus(PeriodicAdvertiserStatus),
    ScannerLegacyAdvertisementReport(ScannerLegacyAdvertisementReport),
    ScannerExtendedAdvertisementReport(ScannerExtendedAdvertisementReport),
    ScannerScanReport(ScannerScanReport),
    SyncOpened(SyncOpened),
    SyncTransferReceived(SyncTransferReceived),
    SyncData(SyncData),
    SyncClosed(SyncClosed),
    ConnectionOpened(ConnectionOpened),
    ConnectionParameters(ConnectionParameters),
    ConnectionPhyStatus(ConnectionPhyStatus),
    ConnectionRssi(ConnectionRssi),
    ConnectionGetRemoteTxPowerCompleted(ConnectionGetRemoteTxPowerCompleted),
    ConnectionTxPower(ConnectionTxPower),
    ConnectionRemoteTxPower(ConnectionRemoteTxPower),
    ConnectionClosed(ConnectionClosed),
    ConnectionRemoteUsedFeatures(ConnectionRemoteUsedFeatures),
    GattMtuExchanged(GattMtuExchanged),
    GattService(GattService),
    GattCharacteristic(GattCharacteristic),
    GattDescriptor(GattDescriptor),
    GattCharacteristicValue(GattCharacteristicValue),
    GattDescriptorValue(GattDescriptorValue),
    GattProcedureCompleted(GattProcedureCompleted),
    GattServerAttributeValue(GattServerAttributeValue),
    GattServerUserReadRequest(GattServerUserReadRequest),
    GattServerUserWriteRequest(GattServerUserWriteRequest),
    GattServerCharacteristicStatus(GattServerCharacteristicStatus),
    GattServerExecuteWriteCompleted(GattServerExecuteWriteCompleted),
    GattServerIndicationTimeout(GattServerIndicationTimeout),
    TestDtmCompleted(TestDtmCompleted),
    SmPasskeyDisplay(SmPasskeyDisplay),
    SmPasskeyRequest(SmPasskeyRequest),
    SmConfirmPasskey(SmConfirmPasskey),
    SmBonded(SmBonded),
    SmBondingFailed(SmBondingFailed),
    SmConfirmBonding(SmConfirmBonding),
    L2capLeChannelOpenRequest(L2capLeChannelOpenRequest),
    L2capLeChannelOpenResponse(L2capLeChannelOpenResponse),
    L2capChannelData(L2capChannelData),
    L2capChannelCredit(L2capChannelCredit),
    L2capChannelClosed(L2capChannelClosed),
    L2capCommandRejected(L2capCommandRejected),
    CteReceiverDtmIqReport(CteReceiverDtmIqReport),
    CteReceiverConnectionIqReport(CteReceiverConnectionIqReport),
    CteReceiverConnectionlessIqReport(CteReceiverConnectionlessIqReport),
    CteReceiverSilabsIqReport(CteReceiverSilabsIqReport),
    UserMessageToHost(UserMessageToHost),
}

impl Event {
    /// Build a typed event from a decoded event message.
    pub fn from_message(message: &Message) -> Result<Self, CodecError> {
        let key = message.key();
        let event = match (key.class_id, key.id) {
            (class::DFU, 0x00) => Event::DfuBoot(DfuBoot {
                version: message.u32(0)?,
            }),
            (class::DFU, 0x01) => Event::DfuBootFailure(DfuBootFailure {
                reason: message.u16(0)?,
            }),
            (class::SYSTEM, 0x00) => Event::SystemBoot(SystemBoot {
                major: message.u16(0)?,
                minor: message.u16(1)?,
                patch: message.u16(2)?,
                build: message.u16(3)?,
                bootloader: message.u32(4)?,
                hw: message.u16(5)?,
                hash: message.u32(6)?,
            }),
            (class::SYSTEM, 0x06) => Event::SystemError(SystemError {
                reason: message.u16(0)?,
                data: message.bytes(1)?,
            }),
            (class::SYSTEM, 0x05) => Event::SystemHardwareError(SystemHardwareError {
                status: message.u16(0)?,
            }),
            (class::SYSTEM, 0x03) => Event::SystemExternalSignal(SystemExternalSignal {
                extsignals: message.u32(0)?,
            }),
            (class::SYSTEM, 0x04) => Event::SystemAwake(SystemAwake),
            (class::SYSTEM, 0x07) => Event::SystemSoftTimer(SystemSoftTimer {
                handle: message.u8(0)?,
            }),
            (class::ADVERTISER, 0x01) => Event::AdvertiserTimeout(AdvertiserTimeout {
                handle: message.u8(0)?,
            }),
            (class::ADVERTISER, 0x02) => Event::AdvertiserScanRequest(AdvertiserScanRequest {
                handle: message.u8(0)?,
                address: message.blob(1)?,
                address_type: message.u8(2)?,
                bonding: message.u8(3)?,
            }),
            (class::PERIODIC_ADVERTISER, 0x00) => {
                Event::PeriodicAdvertiserStatus(PeriodicAdvertiserStatus {
                    sid: message.u8(0)?,
                    status: message.u32(1)?,
                })
            }
            (class::SCANNER, 0x00) => {
                Event::ScannerLegacyAdvertisementReport(ScannerLegacyAdvertisementReport {
                    event_flags: message.u8(0)?,
                    address: message.blob(1)?,
                    address_type: message.u8(2)?,
                    bonding: message.u8(3)?,
                    rssi: message.i8(4)?,
                    channel: message.u8(5)?,
                    target_address: message.blob(6)?,
                    target_address_type: message.u8(7)?,
                    data: message.bytes(8)?,
                })
            }
            (class::SCANNER, 0x02) => {
                Event::ScannerExtendedAdvertisementReport(ScannerExtendedAdvertisementReport {
                    event_flags: message.u8(0)?,
                    address: message.blob(1)?,
                    address_type: message.u8(2)?,
                    bonding: message.u8(3)?,
                    rssi: message.i8(4)?,
                    channel: message.u8(5)?,
                    target_address: message.blob(6)?,
                    target_address_type: message.u8(7)?,
                    adv_sid: message.u8(8)?,
                    primary_phy: message.u8(9)?,
                    secondary_phy: message.u8(10)?,
                    tx_power: message.i8(11)?,
                    periodic_interval: message.u16(12)?,
                    data_completeness: message.u8(13)?,
                    counter: message.u8(14)?,
                    data: message.bytes(15)?,
                })
            }
            (class::SCANNER, 0x01) => Event::ScannerScanReport(ScannerScanReport {
                packet_type: message.u8(0)?,
                address: message.blob(1)?,
                address_type: message.u8(2)?,
                bonding: message.u8(3)?,
                primary_phy: message.u8(4)?,
                secondary_phy: message.u8(5)?,
                adv_sid: message.u8(6)?,
                tx_power: message.i8(7)?,
                rssi: message.i8(8)?,
                channel: message.u8(9)?,
                periodic_interval: message.u16(10)?,
                data: message.bytes(11)?,
            }),
            (class::SYNC, 0x00) => Event::SyncOpened(SyncOpened {
                sync: message.u16(0)?,
                adv_sid: message.u8(1)?,
                address: message.blob(2)?,
                address_type: message.u8(3)?,
                adv_phy: message.u8(4)?,
                adv_interval: message.u16(5)?,
                clock_accuracy: message.u16(6)?,
                bonding: message.u8(7)?,
            }),
            (class::SYNC, 0x03) => Event::SyncTransferReceived(SyncTransferReceived {
                status: message.u16(0)?,
                sync: message.u16(1)?,
                service_data: message.u16(2)?,
                connection: message.u8(3)?,
                adv_sid: message.u8(4)?,
                address: message.blob(5)?,
                address_type: message.u8(6)?,
                adv_phy: message.u8(7)?,
                adv_interval: message.u16(8)?,
                clock_accuracy: message.u16(9)?,
                bonding: message.u8(10)?,
            }),
            (class::SYNC, 0x02) => Event::SyncData(SyncData {
                sync: message.u16(0)?,
                tx_power: message.i8(1)?,
                rssi: message.i8(2)?,
                cte_type: message.u8(3)?,
                data_status: message.u8(4)?,
                counter: message.u8(5)?,
                data: message.bytes(6)?,
            }),
            (class::SYNC, 0x01) => Event::SyncClosed(SyncClosed {
                reason: message.u16(0)?,
                sync: message.u16(1)?,
            }),
            (class::CONNECTION, 0x00) => Event::ConnectionOpened(ConnectionOpened {
                address: message.blob(0)?,
                address_type: message.u8(1)?,
                master: message.u8(2)?,
                connection: message.u8(3)?,
                bonding: message.u8(4)?,
                advertiser: message.u8(5)?,
                sync: message.u16(6)?,
            }),
            (class::CONNECTION, 0x02) => Event::ConnectionParameters(ConnectionParameters {
                connection: message.u8(0)?,
                interval: message.u16(1)?,
                latency: message.u16(2)?,
                timeout: message.u16(3)?,
                security_mode: message.u8(4)?,
                txsize: message.u16(5)?,
            }),
            (class::CONNECTION, 0x04) => Event::ConnectionPhyStatus(ConnectionPhyStatus {
                connection: message.u8(0)?,
                phy: message.u8(1)?,
            }),
            (class::CONNECTION, 0x03) => Event::ConnectionRssi(ConnectionRssi {
                connection: message.u8(0)?,
                status: message.u8(1)?,
                rssi: message.i8(2)?,
            }),
            (class::CONNECTION, 0x05) => {
                Event::ConnectionGetRemoteTxPowerCompleted(ConnectionGetRemoteTxPowerCompleted {
                    status: message.u16(0)?,
                    connection: message.u8(1)?,
                    phy: message.u8(2)?,
                    power_level: message.i8(3)?,
                    flags: message.u8(4)?,
                    delta: message.i8(5)?,
                })
            }
            (class::CONNECTION, 0x06) => Event::ConnectionTxPower(ConnectionTxPower {
                connection: message.u8(0)?,
                phy: message.u8(1)?,
                power_level: message.i8(2)?,
                flags: message.u8(3)?,
                delta: message.i8(4)?,
            }),
            (class::CONNECTION, 0x07) => Event::ConnectionRemoteTxPower(ConnectionRemoteTxPower {
                connection: message.u8(0)?,
                phy: message.u8(1)?,
                power_level: message.i8(2)?,
                flags: message.u8(3)?,
                delta: message.i8(4)?,
            }),
            (class::CONNECTION, 0x01) => Event::ConnectionClosed(ConnectionClosed {
                reason: message.u16(0)?,
                connection: message.u8(1)?,
            }),
            (class::CONNECTION, 0x08) => {
                Event::ConnectionRemoteUsedFeatures(ConnectionRemoteUsedFeatures {
                    connection: message.u8(0)?,
                    features: message.bytes(1)?,
                })
            }
            (class::GATT, 0x00) => Event::GattMtuExchanged(GattMtuExchanged {
                connection: message.u8(0)?,
                mtu: message.u16(1)?,
            }),
            (class::GATT, 0x01) => Event::GattService(GattService {
                connection: message.u8(0)?,
                service: message.u32(1)?,
                uuid: message.bytes(2)?,
            }),
            (class::GATT, 0x02) => Event::GattCharacteristic(GattCharacteristic {
                connection: message.u8(0)?,
                characteristic: message.u16(1)?,
                properties: message.u8(2)?,
                uuid: message.bytes(3)?,
            }),
            (class::GATT, 0x03) => Event::GattDescriptor(GattDescriptor {
                connection: message.u8(0)?,
                descriptor: message.u16(1)?,
                uuid: message.bytes(2)?,
            }),
            (class::GATT, 0x04) => Event::GattCharacteristicValue(GattCharacteristicValue {
                connection: message.u8(0)?,
                characteristic: message.u16(1)?,
                att_opcode: message.u8(2)?,
                offset: message.u16(3)?,
                value: message.bytes(4)?,
            }),
            (class::GATT, 0x05) => Event::GattDescriptorValue(GattDescriptorValue {
                connection: message.u8(0)?,
                descriptor: message.u16(1)?,
                offset: message.u16(2)?,
                value: message.bytes(3)?,
            }),
            (class::GATT, 0x06) => Event::GattProcedureCompleted(GattProcedureCompleted {
                connection: message.u8(0)?,
                result: message.u16(1)?,
            }),
            (class::GATT_SERVER, 0x00) => Event::GattServerAttributeValue(GattServerAttributeValue {
                connection: message.u8(0)?,
                attribute: message.u16(1)?,
                att_opcode: message.u8(2)?,
                offset: message.u16(3)?,
                value: message.bytes(4)?,
            }),
            (class::GATT_SERVER, 0x01) => {
                Event::GattServerUserReadRequest(GattServerUserReadRequest {
                    connection: message.u8(0)?,
                    characteristic: message.u16(1)?,
                    att_opcode: message.u8(2)?,
                    offset: message.u16(3)?,
                })
            }
            (class::GATT_SERVER, 0x02) => {
                Event::GattServerUserWriteRequest(GattServerUserWriteRequest {
                    connection: message.u8(0)?,
                    characteristic: message.u16(1)?,
                    att_opcode: message.u8(2)?,
                    offset: message.u16(3)?,
                    value: message.bytes(4)?,
                })
            }
            (class::GATT_SERVER, 0x03) => {
                Event::GattServerCharacteristicStatus(GattServerCharacteristicStatus {
                    connection: message.u8(0)?,
                    characteristic: message.u16(1)?,
                    status_flags: message.u8(2)?,
                    client_config_flags: message.u16(3)?,
                    client_config: message.u16(4)?,
                })
            }
            (class::GATT_SERVER, 0x04) => {
                Event::GattServerExecuteWriteCompleted(GattServerExecuteWriteCompleted {
                    connection: message.u8(0)?,
                    result: message.u16(1)?,
                })
            }
            (class::GATT_SERVER, 0x05) => {
                Event::GattServerIndicationTimeout(GattServerIndicationTimeout {
                    connection: message.u8(0)?,
                })
            }
            (class::TEST, 0x00) => Event::TestDtmCompleted(TestDtmCompleted {
                result: message.u16(0)?,
                number_of_packets: message.u16(1)?,
            }),
            (class::SM, 0x00) => Event::SmPasskeyDisplay(SmPasskeyDisplay {
                connection: message.u8(0)?,
                passkey: message.u32(1)?,
            }),
            (class::SM, 0x01) => Event::SmPasskeyRequest(SmPasskeyRequest {
                connection: message.u8(0)?,
            }),
            (class::SM, 0x02) => Event::SmConfirmPasskey(SmConfirmPasskey {
                connection: message.u8(0)?,
                passkey: message.u32(1)?,
            }),
            (class::SM, 0x03) => Event::SmBonded(SmBonded {
                connection: message.u8(0)?,
                bonding: message.u8(1)?,
                security_mode: message.u8(2)?,
            }),
            (class::SM, 0x04) => Event::SmBondingFailed(SmBondingFailed {
                connection: message.u8(0)?,
                reason: message.u16(1)?,
            }),
            (class::SM, 0x09) => Event::SmConfirmBonding(SmConfirmBonding {
                connection: message.u8(0)?,
                bonding_handle: message.i8(1)?,
            }),
            (class::L2CAP, 0x01) => Event::L2capLeChannelOpenRequest(L2capLeChannelOpenRequest {
                connection: message.u8(0)?,
                spsm: message.u16(1)?,
                cid: message.u16(2)?,
                max_sdu: message.u16(3)?,
                max_pdu: message.u16(4)?,
                credit: message.u16(5)?,
                remote_cid: message.u16(6)?,
            }),
            (class::L2CAP, 0x02) => Event::L2capLeChannelOpenResponse(L2capLeChannelOpenResponse {
                connection: message.u8(0)?,
                cid: message.u16(1)?,
                max_sdu: message.u16(2)?,
                max_pdu: message.u16(3)?,
                credit: message.u16(4)?,
                errorcode: message.u16(5)?,
            }),
            (class::L2CAP, 0x03) => Event::L2capChannelData(L2capChannelData {
                connection: message.u8(0)?,
                cid: message.u16(1)?,
                data: message.bytes(2)?,
            }),
            (class::L2CAP, 0x04) => Event::L2capChannelCredit(L2capChannelCredit {
                connection: message.u8(0)?,
                cid: message.u16(1)?,
                credit: message.u16(2)?,
            }),
            (class::L2CAP, 0x05) => Event::L2capChannelClosed(L2capChannelClosed {
                connection: message.u8(0)?,
                cid: message.u16(1)?,
                reason: message.u16(2)?,
            }),
            (class::L2CAP, 0x06) => Event::L2capCommandRejected(L2capCommandRejected {
                connection: message.u8(0)?,
                code: message.u8(1)?,
                reason: message.u16(2)?,
            }),
            (class::CTE_RECEIVER, 0x02) => Event::CteReceiverDtmIqReport(CteReceiverDtmIqReport {
                status: message.u16(0)?,
                channel: message.u8(1)?,
                rssi: message.i8(2)?,
                rssi_antenna_id: message.u8(3)?,
                cte_type: message.u8(4)?,
                slot_durations: message.u8(5)?,
                event_counter: message.u16(6)?,
                samples: message.bytes(7)?,
            }),
            (class::CTE_RECEIVER, 0x00) => {
                Event::CteReceiverConnectionIqReport(CteReceiverConnectionIqReport {
                    status: message.u16(0)?,
                    connection: message.u8(1)?,
                    phy: message.u8(2)?,
                    channel: message.u8(3)?,
                    rssi: message.i8(4)?,
                    rssi_antenna_id: message.u8(5)?,
                    cte_type: message.u8(6)?,
                    slot_durations: message.u8(7)?,
                    event_counter: message.u16(8)?,
                    samples: message.bytes(9)?,
                })
            }
            (class::CTE_RECEIVER, 0x01) => {
                Event::CteReceiverConnectionlessIqReport(CteReceiverConnectionlessIqReport {
                    status: message.u16(0)?,
                    sync: message.u16(1)?,
                    channel: message.u8(2)?,
                    rssi: message.i8(3)?,
                    rssi_antenna_id: message.u8(4)?,
                    cte_type: message.u8(5)?,
                    slot_durations: message.u8(6)?,
                    event_counter: message.u16(7)?,
                    samples: message.bytes(8)?,
                })
            }
            (class::CTE_RECEIVER, 0x03) => {
                Event::CteReceiverSilabsIqReport(CteReceiverSilabsIqReport {
                    status: message.u16(0)?,
                    address: message.blob(1)?,
                    address_type: message.u8(2)?,
                    phy: message.u8(3)?,
                    channel: message.u8(4)?,
                    rssi: message.i8(5)?,
                    rssi_antenna_id: message.u8(6)?,
                    cte_type: message.u8(7)?,
                    slot_durations: message.u8(8)?,
                    packet_counter: message.u16(9)?,
                    samples: message.bytes(10)?,
                })
            }
            (class::USER, 0x00) => Event::UserMessageToHost(UserMessageToHost {
                message: message.bytes(0)?,
            }),
            _ => {
                return Err(CodecError::UnknownMessage {
                    kind: message.kind(),
                    key,
                })
            }
        };
        Ok(event)
    }

    /// Field values in wire order, laid out as the event's descriptor expects.
    pub fn values(&self) -> Vec<Value> {
        match self {
            Event::DfuBoot(e) => vec![Value::U32(e.version)],
            Event::DfuBootFailure(e) => vec![Value::U16(e.reason)],
            Event::SystemBoot(e) => vec![
                Value::U16(e.major),
                Value::U16(e.minor),
                Value::U16(e.patch),
                Value::U16(e.build),
                Value::U32(e.bootloader),
                Value::U16(e.hw),
                Value::U32(e.hash),
            ],
            Event::SystemError(e) => vec![Value::U16(e.reason), Value::Array(e.data.clone())],
            Event::SystemHardwareError(e) => vec![Value::U16(e.status)],
            Event::SystemExternalSignal(e) => vec![Value::U32(e.extsignals)],
            Event::SystemAwake(_) => Vec::new(),
            Event::SystemSoftTimer(e) => vec![Value::U8(e.handle)],
            Event::AdvertiserTimeout(e) => vec![Value::U8(e.handle)],
            Event::AdvertiserScanRequest(e) => vec![
                Value::U8(e.handle),
                Value::Blob(Bytes::copy_from_slice(&e.address)),
                Value::U8(e.address_type),
                Value::U8(e.bonding),
            ],
            Event::PeriodicAdvertiserStatus(e) => vec![Value::U8(e.sid), Value::U32(e.status)],
            Event::ScannerLegacyAdvertisementReport(e) => vec![
                Value::U8(e.event_flags),
                Value::Blob(Bytes::copy_from_slice(&e.address)),
                Value::U8(e.address_type),
                Value::U8(e.bonding),
                Value::I8(e.rssi),
                Value::U8(e.channel),
                Value::Blob(Bytes::copy_from_slice(&e.target_address)),
                Value::U8(e.target_address_type),
                Value::Array(e.data.clone()),
            ],
            Event::ScannerExtendedAdvertisementReport(e) => vec![
                Value::U8(e.event_flags),
                Value::Blob(Bytes::copy_from_slice(&e.address)),
                Value::U8(e.address_type),
                Value::U8(e.bonding),
                Value::I8(e.rssi),
                Value::U8(e.channel),
                Value::Blob(Bytes::copy_from_slice(&e.target_address)),
                Value::U8(e.target_address_type),
                Value::U8(e.adv_sid),
                Value::U8(e.primary_phy),
                Value::U8(e.secondary_phy),
                Value::I8(e.tx_power),
                Value::U16(e.periodic_interval),
                Value::U8(e.data_completeness),
                Value::U8(e.counter),
                Value::Array(e.data.clone()),
            ],
            Event::ScannerScanReport(e) => vec![
                Value::U8(e.packet_type),
                Value::Blob(Bytes::copy_from_slice(&e.address)),
                Value::U8(e.address_type),
                Value::U8(e.bonding),
                Value::U8(e.primary_phy),
                Value::U8(e.secondary_phy),
                Value::U8(e.adv_sid),
                Value::I8(e.tx_power),
                Value::I8(e.rssi),
                Value::U8(e.channel),
                Value::U16(e.periodic_interval),
                Value::Array(e.data.clone()),
            ],
            Event::SyncOpened(e) => vec![
                Value::U16(e.sync),
                Value::U8(e.adv_sid),
                Value::Blob(Bytes::copy_from_slice(&e.address)),
                Value::U8(e.address_type),
                Value::U8(e.adv_phy),
                Value::U16(e.adv_interval),
                Value::U16(e.clock_accuracy),
                Value::U8(e.bonding),
            ],
            Event::SyncTransferReceived(e) => vec![
                Value::U16(e.status),
                Value::U16(e.sync),
                Value::U16(e.service_data),
                Value::U8(e.connection),
                Value::U8(e.adv_sid),
                Value::Blob(Bytes::copy_from_slice(&e.address)),
                Value::U8(e.address_type),
                Value::U8(e.adv_phy),
                Value::U16(e.adv_interval),
                Value::U16(e.clock_accuracy),
                Value::U8(e.bonding),
            ],
            Event::SyncData(e) => vec![
                Value::U16(e.sync),
                Value::I8(e.tx_power),
                Value::I8(e.rssi),
                Value::U8(e.cte_type),
                Value::U8(e.data_status),
                Value::U8(e.counter),
                Value::Array(e.data.clone()),
            ],
            Event::SyncClosed(e) => vec![Value::U16(e.reason), Value::U16(e.sync)],
            Event::ConnectionOpened(e) => vec![
                Value::Blob(Bytes::copy_from_slice(&e.address)),
                Value::U8(e.address_type),
                Value::U8(e.master),
                Value::U8(e.connection),
                Value::U8(e.bonding),
                Value::U8(e.advertiser),
                Value::U16(e.sync),
            ],
            Event::ConnectionParameters(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.interval),
                Value::U16(e.latency),
                Value::U16(e.timeout),
                Value::U8(e.security_mode),
                Value::U16(e.txsize),
            ],
            Event::ConnectionPhyStatus(e) => vec![Value::U8(e.connection), Value::U8(e.phy)],
            Event::ConnectionRssi(e) => vec![
                Value::U8(e.connection),
                Value::U8(e.status),
                Value::I8(e.rssi),
            ],
            Event::ConnectionGetRemoteTxPowerCompleted(e) => vec![
                Value::U16(e.status),
                Value::U8(e.connection),
                Value::U8(e.phy),
                Value::I8(e.power_level),
                Value::U8(e.flags),
                Value::I8(e.delta),
            ],
            Event::ConnectionTxPower(e) => vec![
                Value::U8(e.connection),
                Value::U8(e.phy),
                Value::I8(e.power_level),
                Value::U8(e.flags),
                Value::I8(e.delta),
            ],
            Event::ConnectionRemoteTxPower(e) => vec![
                Value::U8(e.connection),
                Value::U8(e.phy),
                Value::I8(e.power_level),
                Value::U8(e.flags),
                Value::I8(e.delta),
            ],
            Event::ConnectionClosed(e) => vec![Value::U16(e.reason), Value::U8(e.connection)],
            Event::ConnectionRemoteUsedFeatures(e) => vec![
                Value::U8(e.connection),
                Value::Array(e.features.clone()),
            ],
            Event::GattMtuExchanged(e) => vec![Value::U8(e.connection), Value::U16(e.mtu)],
            Event::GattService(e) => vec![
                Value::U8(e.connection),
                Value::U32(e.service),
                Value::Array(e.uuid.clone()),
            ],
            Event::GattCharacteristic(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.characteristic),
                Value::U8(e.properties),
                Value::Array(e.uuid.clone()),
            ],
            Event::GattDescriptor(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.descriptor),
                Value::Array(e.uuid.clone()),
            ],
            Event::GattCharacteristicValue(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.characteristic),
                Value::U8(e.att_opcode),
                Value::U16(e.offset),
                Value::Array(e.value.clone()),
            ],
            Event::GattDescriptorValue(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.descriptor),
                Value::U16(e.offset),
                Value::Array(e.value.clone()),
            ],
            Event::GattProcedureCompleted(e) => vec![Value::U8(e.connection), Value::U16(e.result)],
            Event::GattServerAttributeValue(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.attribute),
                Value::U8(e.att_opcode),
                Value::U16(e.offset),
                Value::Array(e.value.clone()),
            ],
            Event::GattServerUserReadRequest(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.characteristic),
                Value::U8(e.att_opcode),
                Value::U16(e.offset),
            ],
            Event::GattServerUserWriteRequest(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.characteristic),
                Value::U8(e.att_opcode),
                Value::U16(e.offset),
                Value::Array(e.value.clone()),
            ],
            Event::GattServerCharacteristicStatus(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.characteristic),
                Value::U8(e.status_flags),
                Value::U16(e.client_config_flags),
                Value::U16(e.client_config),
            ],
            Event::GattServerExecuteWriteCompleted(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.result),
            ],
            Event::GattServerIndicationTimeout(e) => vec![Value::U8(e.connection)],
            Event::TestDtmCompleted(e) => vec![
                Value::U16(e.result),
                Value::U16(e.number_of_packets),
            ],
            Event::SmPasskeyDisplay(e) => vec![Value::U8(e.connection), Value::U32(e.passkey)],
            Event::SmPasskeyRequest(e) => vec![Value::U8(e.connection)],
            Event::SmConfirmPasskey(e) => vec![Value::U8(e.connection), Value::U32(e.passkey)],
            Event::SmBonded(e) => vec![
                Value::U8(e.connection),
                Value::U8(e.bonding),
                Value::U8(e.security_mode),
            ],
            Event::SmBondingFailed(e) => vec![Value::U8(e.connection), Value::U16(e.reason)],
            Event::SmConfirmBonding(e) => vec![
                Value::U8(e.connection),
                Value::I8(e.bonding_handle),
            ],
            Event::L2capLeChannelOpenRequest(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.spsm),
                Value::U16(e.cid),
                Value::U16(e.max_sdu),
                Value::U16(e.max_pdu),
                Value::U16(e.credit),
                Value::U16(e.remote_cid),
            ],
            Event::L2capLeChannelOpenResponse(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.cid),
                Value::U16(e.max_sdu),
                Value::U16(e.max_pdu),
                Value::U16(e.credit),
                Value::U16(e.errorcode),
            ],
            Event::L2capChannelData(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.cid),
                Value::Array(e.data.clone()),
            ],
            Event::L2capChannelCredit(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.cid),
                Value::U16(e.credit),
            ],
            Event::L2capChannelClosed(e) => vec![
                Value::U8(e.connection),
                Value::U16(e.cid),
                Value::U16(e.reason),
            ],
            Event::L2capCommandRejected(e) => vec![
                Value::U8(e.connection),
                Value::U8(e.code),
                Value::U16(e.reason),
            ],
            Event::CteReceiverDtmIqReport(e) => vec![
                Value::U16(e.status),
                Value::U8(e.channel),
                Value::I8(e.rssi),
                Value::U8(e.rssi_antenna_id),
                Value::U8(e.cte_type),
                Value::U8(e.slot_durations),
                Value::U16(e.event_counter),
                Value::Array(e.samples.clone()),
            ],
            Event::CteReceiverConnectionIqReport(e) => vec![
                Value::U16(e.status),
                Value::U8(e.connection),
                Value::U8(e.phy),
                Value::U8(e.channel),
                Value::I8(e.rssi),
                Value::U8(e.rssi_antenna_id),
                Value::U8(e.cte_type),
                Value::U8(e.slot_durations),
                Value::U16(e.event_counter),
                Value::Array(e.samples.clone()),
            ],
            Event::CteReceiverConnectionlessIqReport(e) => vec![
                Value::U16(e.status),
                Value::U16(e.sync),
                Value::U8(e.channel),
                Value::I8(e.rssi),
                Value::U8(e.rssi_antenna_id),
                Value::U8(e.cte_type),
                Value::U8(e.slot_durations),
                Value::U16(e.event_counter),
                Value::Array(e.samples.clone()),
            ],
            Event::CteReceiverSilabsIqReport(e) => vec![
                Value::U16(e.status),
                Value::Blob(Bytes::copy_from_slice(&e.address)),
                Value::U8(e.address_type),
                Value::U8(e.phy),
                Value::U8(e.channel),
                Value::I8(e.rssi),
                Value::U8(e.rssi_antenna_id),
                Value::U8(e.cte_type),
                Value::U8(e.slot_durations),
                Value::U16(e.packet_counter),
                Value::Array(e.samples.clone()),
            ],
            Event::UserMessageToHost(e) => vec![Value::Array(e.message.clone())],
        }
    }

    /// Catalog key of this event.
    pub fn key(&self) -> MessageKey {
        match self {
            Event::DfuBoot(_) => MessageKey::new(class::DFU, 0x00),
            Event::DfuBootFailure(_) => MessageKey::new(class::DFU, 0x01),
            Event::SystemBoot(_) => MessageKey::new(class::SYSTEM, 0x00),
            Event::SystemError(_) => MessageKey::new(class::SYSTEM, 0x06),
            Event::SystemHardwareError(_) => MessageKey::new(class::SYSTEM, 0x05),
            Event::SystemExternalSignal(_) => MessageKey::new(class::SYSTEM, 0x03),
            Event::SystemAwake(_) => MessageKey::new(class::SYSTEM, 0x04),
            Event::SystemSoftTimer(_) => MessageKey::new(class::SYSTEM, 0x07),
            Event::AdvertiserTimeout(_) => MessageKey::new(class::ADVERTISER, 0x01),
            Event::AdvertiserScanRequest(_) => MessageKey::new(class::ADVERTISER, 0x02),
            Event::PeriodicAdvertiserStatus(_) => MessageKey::new(class::PERIODIC_ADVERTISER, 0x00),
            Event::ScannerLegacyAdvertisementReport(_) => MessageKey::new(class::SCANNER, 0x00),
            Event::ScannerExtendedAdvertisementReport(_) => MessageKey::new(class::SCANNER, 0x02),
            Event::ScannerScanReport(_) => MessageKey::new(class::SCANNER, 0x01),
            Event::SyncOpened(_) => MessageKey::new(class::SYNC, 0x00),
            Event::SyncTransferReceived(_) => MessageKey::new(class::SYNC, 0x03),
            Event::SyncData(_) => MessageKey::new(class::SYNC, 0x02),
            Event::SyncClosed(_) => MessageKey::new(class::SYNC, 0x01),
            Event::ConnectionOpened(_) => MessageKey::new(class::CONNECTION, 0x00),
            Event::ConnectionParameters(_) => MessageKey::new(class::CONNECTION, 0x02),
            Event::ConnectionPhyStatus(_) => MessageKey::new(class::CONNECTION, 0x04),
            Event::ConnectionRssi(_) => MessageKey::new(class::CONNECTION, 0x03),
            Event::ConnectionGetRemoteTxPowerCompleted(_) => {
                MessageKey::new(class::CONNECTION, 0x05)
            }
            Event::ConnectionTxPower(_) => MessageKey::new(class::CONNECTION, 0x06),
            Event::ConnectionRemoteTxPower(_) => MessageKey::new(class::CONNECTION, 0x07),
            Event::ConnectionClosed(_) => MessageKey::new(class::CONNECTION, 0x01),
            Event::ConnectionRemoteUsedFeatures(_) => MessageKey::new(class::CONNECTION, 0x08),
            Event::GattMtuExchanged(_) => MessageKey::new(class::GATT, 0x00),
            Event::GattService(_) => MessageKey::new(class::GATT, 0x01),
            Event::GattCharacteristic(_) => MessageKey::new(class::GATT, 0x02),
            Event::GattDescriptor(_) => MessageKey::new(class::GATT, 0x03),
            Event::GattCharacteristicValue(_) => MessageKey::new(class::GATT, 0x04),
            Event::GattDescriptorValue(_) => MessageKey::new(class::GATT, 0x05),
            Event::GattProcedureCompleted(_) => MessageKey::new(class::GATT, 0x06),
            Event::GattServerAttributeValue(_) => MessageKey::new(class::GATT_SERVER, 0x00),
            Event::GattServerUserReadRequest(_) => MessageKey::new(class::GATT_SERVER, 0x01),
            Event::GattServerUserWriteRequest(_) => MessageKey::new(class::GATT_SERVER, 0x02),
            Event::GattServerCharacteristicStatus(_) => MessageKey::new(class::GATT_SERVER, 0x03),
            Event::GattServerExecuteWriteCompleted(_) => MessageKey::new(class::GATT_SERVER, 0x04),
            Event::GattServerIndicationTimeout(_) => MessageKey::new(class::GATT_SERVER, 0x05),
            Event::TestDtmCompleted(_) => MessageKey::new(class::TEST, 0x00),
            Event::SmPasskeyDisplay(_) => MessageKey::new(class::SM, 0x00),
            Event::SmPasskeyRequest(_) => MessageKey::new(class::SM, 0x01),
            Event::SmConfirmPasskey(_) => MessageKey::new(class::SM, 0x02),
            Event::SmBonded(_) => MessageKey::new(class::SM, 0x03),
            Event::SmBondingFailed(_) => MessageKey::new(class::SM, 0x04),
            Event::SmConfirmBonding(_) => MessageKey::new(class::SM, 0x09),
            Event::L2capLeChannelOpenRequest(_) => MessageKey::new(class::L2CAP, 0x01),
            Event::L2capLeChannelOpenResponse(_) => MessageKey::new(class::L2CAP, 0x02),
            Event::L2capChannelData(_) => MessageKey::new(class::L2CAP, 0x03),
            Event::L2capChannelCredit(_) => MessageKey::new(class::L2CAP, 0x04),
            Event::L2capChannelClosed(_) => MessageKey::new(class::L2CAP, 0x05),
            Event::L2capCommandRejected(_) => MessageKey::new(class::L2CAP, 0x06),
            Event::CteReceiverDtmIqReport(_) => MessageKey::new(class::CTE_RECEIVER, 0x02),
            Event::CteReceiverConnectionIqReport(_) => MessageKey::new(class::CTE_RECEIVER, 0x00),
            Event::CteReceiverConnectionlessIqReport(_) => {
                MessageKey::new(class::CTE_RECEIVER, 0x01)
            }
            Event::CteReceiverSilabsIqReport(_) => MessageKey::new(class::CTE_RECEIVER, 0x03),
            Event::UserMessageToHost(_) => MessageKey::new(class::USER, 0x00),
        }
    }

    /// Catalog name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::DfuBoot(_) => "dfu_boot",
            Event::DfuBootFailure(_) => "dfu_boot_failure",
            Event::SystemBoot(_) => "system_boot",
            Event::SystemError(_) => "system_error",
            Event::SystemHardwareError(_) => "system_hardware_error",
            Event::SystemExternalSignal(_) => "system_external_signal",
            Event::SystemAwake(_) => "system_awake",
            Event::SystemSoftTimer(_) => "system_soft_timer",
            Event::AdvertiserTimeout(_) => "advertiser_timeout",
            Event::AdvertiserScanRequest(_) => "advertiser_scan_request",
            Event::PeriodicAdvertiserStatus(_) => "periodic_advertiser_status",
            Event::ScannerLegacyAdvertisementReport(_) => "scanner_legacy_advertisement_report",
            Event::ScannerExtendedAdvertisementReport(_) => "scanner_extended_advertisement_report",
            Event::ScannerScanReport(_) => "scanner_scan_report",
            Event::SyncOpened(_) => "sync_opened",
            Event::SyncTransferReceived(_) => "sync_transfer_received",
            Event::SyncData(_) => "sync_data",
            Event::SyncClosed(_) => "sync_closed",
            Event::ConnectionOpened(_) => "connection_opened",
            Event::ConnectionParameters(_) => "connection_parameters",
            Event::ConnectionPhyStatus(_) => "connection_phy_status",
            Event::ConnectionRssi(_) => "connection_rssi",
            Event::ConnectionGetRemoteTxPowerCompleted(_) => {
                "connection_get_remote_tx_power_completed"
            }
            Event::ConnectionTxPower(_) => "connection_tx_power",
            Event::ConnectionRemoteTxPower(_) => "connection_remote_tx_power",
            Event::ConnectionClosed(_) => "connection_closed",
            Event::ConnectionRemoteUsedFeatures(_) => "connection_remote_used_features",
            Event::GattMtuExchanged(_) => "gatt_mtu_exchanged",
            Event::GattService(_) => "gatt_service",
            Event::GattCharacteristic(_) => "gatt_characteristic",
            Event::GattDescriptor(_) => "gatt_descriptor",
            Event::GattCharacteristicValue(_) => "gatt_characteristic_value",
            Event::GattDescriptorValue(_) => "gatt_descriptor_value",
            Event::GattProcedureCompleted(_) => "gatt_procedure_completed",
            Event::GattServerAttributeValue(_) => "gatt_server_attribute_value",
            Event::GattServerUserReadRequest(_) => "gatt_server_user_read_request",
            Event::GattServerUserWriteRequest(_) => "gatt_server_user_write_request",
            Event::GattServerCharacteristicStatus(_) => "gatt_server_characteristic_status",
            Event::GattServerExecuteWriteCompleted(_) => "gatt_server_execute_write_completed",
            Event::GattServerIndicationTimeout(_) => "gatt_server_indication_timeout",
            Event::TestDtmCompleted(_) => "test_dtm_completed",
            Event::SmPasskeyDisplay(_) => "sm_passkey_display",
            Event::SmPasskeyRequest(_) => "sm_passkey_request",
            Event::SmConfirmPasskey(_) => "sm_confirm_passkey",
            Event::SmBonded(_) => "sm_bonded",
            Event::SmBondingFailed(_) => "sm_bonding_failed",
            Event::SmConfirmBonding(_) => "sm_confirm_bonding",
            Event::L2capLeChannelOpenRequest(_) => "l2cap_le_channel_open_request",
            Event::L2capLeChannelOpenResponse(_) => "l2cap_le_channel_open_response",
            Event::L2capChannelData(_) => "l2cap_channel_data",
            Event::L2capChannelCredit(_) => "l2cap_channel_credit",
            Event::L2capChannelClosed(_) => "l2cap_channel_closed",
            Event::L2capCommandRejected(_) => "l2cap_command_rejected",
            Event::CteReceiverDtmIqReport(_) => "cte_receiver_dtm_iq_report",
            Event::CteReceiverConnectionIqReport(_) => "cte_receiver_connection_iq_report",
            Event::CteReceiverConnectionlessIqReport(_) => "cte_receiver_connectionless_iq_report",
            Event::CteReceiverSilabsIqReport(_) => "cte_receiver_silabs_iq_report",
            Event::UserMessageToHost(_) => "user_message_to_host",
        }
    }
}
