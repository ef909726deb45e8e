//! Types shared between the lsusb parsers and the tree display
use std::collections::HashMap;
use std::fmt;

/// Identifies a physical device across all three lsusb outputs: bus number and device number as printed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceKey {
    /// Bus number string, e.g. "002"
    pub bus: String,
    /// Device number string, e.g. "004"
    pub device: String,
}

impl DeviceKey {
    /// New key from bus and device number strings
    pub fn new(bus: &str, device: &str) -> Self {
        DeviceKey {
            bus: bus.to_string(),
            device: device.to_string(),
        }
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.bus, self.device)
    }
}

/// A bus root or interface line from `lsusb -t`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Owning bus; "Unknown" if no bus was seen before an interface line
    pub bus: String,
    /// Port number within parent
    pub port: String,
    /// Device number, unique within a bus
    pub device: String,
    /// Interface number, only present for `|__` interface lines
    pub interface: Option<String>,
    /// Class as printed, e.g. "root_hub" or "Human Interface Device"
    pub class: String,
    /// Driver as printed, e.g. "xhci_hcd/4p"
    pub driver: String,
    /// Link speed in Mb/s as printed, may be fractional "1.5"
    pub speed_raw: String,
    /// Speed label from [`crate::lsusb::names::speed_category`]
    pub speed_category: String,
}

impl DeviceRecord {
    /// The [`DeviceKey`] used to merge with summary and descriptor data
    pub fn key(&self) -> DeviceKey {
        DeviceKey::new(&self.bus, &self.device)
    }

    /// Interface lines are nested under a bus root
    pub fn is_interface(&self) -> bool {
        self.interface.is_some()
    }
}

/// A device line from plain `lsusb`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryInfo {
    /// Vendor ID hex as printed
    pub vendor_id: String,
    /// Product ID hex as printed
    pub product_id: String,
    /// Name from [`crate::lsusb::names::vendor`]
    pub vendor_name: String,
    /// Whole line, which already has the lsusb product description
    pub raw_line: String,
}

impl SummaryInfo {
    /// lsusb names root hubs "x.0 root hub"
    pub fn is_root_hub(&self) -> bool {
        self.raw_line.to_lowercase().contains("root hub")
    }
}

/// Device header and string descriptors from `lsusb -v`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptorInfo {
    /// Vendor ID hex as printed
    pub vendor_id: String,
    /// Product ID hex as printed
    pub product_id: String,
    /// Name from [`crate::lsusb::names::vendor`]
    pub vendor_name: String,
    /// Remainder of the device header after the ID
    pub product_name: String,
    /// iManufacturer string
    pub manufacturer: Option<String>,
    /// iProduct string
    pub product: Option<String>,
    /// iSerial string
    pub serial: Option<String>,
}

/// Parsed `lsusb` summary lines
pub type SummaryMap = HashMap<DeviceKey, SummaryInfo>;
/// Parsed `lsusb -v` device blocks
pub type DescriptorMap = HashMap<DeviceKey, DescriptorInfo>;
