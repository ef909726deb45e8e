//! Parser for `lsusb -v` string descriptors
//!
//! Each device block starts with the same header as plain `lsusb` and string descriptors follow as `iName index string`:
//!
//! ```text
//! Bus 002 Device 004: ID 046d:c534 Logitech, Inc. Unifying Receiver
//! Device Descriptor:
//!   iManufacturer           1 Logitech
//!   iProduct                2 USB Receiver
//!   iSerial                 0
//! ```
use regex::Regex;

use super::names;
use crate::types::{DescriptorInfo, DescriptorMap, DeviceKey};

lazy_static! {
    static ref DEVICE_HEADER: Regex =
        Regex::new(r"(?i)^Bus (\d{3}) Device (\d{3}): ID ([0-9a-f]{4}):([0-9a-f]{4}) (.+)")
            .expect("valid lsusb -v header pattern");
}

/// String descriptor fields of a device block, checked in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringDescriptor {
    Manufacturer,
    Product,
    Serial,
}

impl StringDescriptor {
    const ALL: [StringDescriptor; 3] = [
        StringDescriptor::Manufacturer,
        StringDescriptor::Product,
        StringDescriptor::Serial,
    ];

    fn marker(&self) -> &'static str {
        match self {
            StringDescriptor::Manufacturer => "iManufacturer",
            StringDescriptor::Product => "iProduct",
            StringDescriptor::Serial => "iSerial",
        }
    }

    /// First descriptor marker found in `line`
    fn find(line: &str) -> Option<StringDescriptor> {
        Self::ALL.into_iter().find(|d| line.contains(d.marker()))
    }

    fn field<'a>(&self, info: &'a mut DescriptorInfo) -> &'a mut Option<String> {
        match self {
            StringDescriptor::Manufacturer => &mut info.manufacturer,
            StringDescriptor::Product => &mut info.product,
            StringDescriptor::Serial => &mut info.serial,
        }
    }
}

/// Text after the descriptor name and index tokens, empty when the device has no string
fn descriptor_string(line: &str) -> String {
    let mut rest = line.trim_start();
    for _ in 0..2 {
        rest = rest
            .find(char::is_whitespace)
            .map_or("", |i| rest[i..].trim_start());
    }
    rest.trim_end().to_string()
}

/// Parse `lsusb -v` output into [`DescriptorInfo`] keyed by bus and device number.
///
/// Descriptor lines before the first device header are ignored. Empty output, such as when `lsusb -v` failed, returns an empty map.
pub fn parse(verbose_output: &str) -> DescriptorMap {
    let mut devices = DescriptorMap::new();
    let mut current: Option<DeviceKey> = None;

    for line in verbose_output.lines() {
        if let Some(caps) = DEVICE_HEADER.captures(line) {
            let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
            let key = DeviceKey::new(group(1), group(2));
            log::trace!("lsusb -v device {}", key);
            devices.insert(
                key.clone(),
                DescriptorInfo {
                    vendor_id: group(3).to_string(),
                    product_id: group(4).to_string(),
                    vendor_name: names::vendor(group(3)),
                    product_name: group(5).trim().to_string(),
                    ..Default::default()
                },
            );
            current = Some(key);
        } else if let Some(info) = current.as_ref().and_then(|k| devices.get_mut(k)) {
            if let Some(descriptor) = StringDescriptor::find(line) {
                *descriptor.field(info) = Some(descriptor_string(line));
            }
        }
    }

    log::debug!("Parsed {} lsusb -v devices", devices.len());
    devices
}
