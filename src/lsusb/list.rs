//! Parser for plain `lsusb` output: one line per device
//!
//! ```text
//! Bus 002 Device 004: ID 046d:c534 Logitech, Inc. Unifying Receiver
//! ```
use regex::Regex;

use super::names;
use crate::types::{DeviceKey, SummaryInfo, SummaryMap};

lazy_static! {
    static ref DEVICE_LINE: Regex =
        Regex::new(r"(?i)^Bus (\d+) Device (\d+): ID ([0-9a-f]{4}):([0-9a-f]{4})")
            .expect("valid lsusb device pattern");
}

/// Parse `lsusb` output into [`SummaryInfo`] keyed by bus and device number. Lines which do not match are skipped.
///
/// ```
/// use usbtree::lsusb::list;
/// use usbtree::types::DeviceKey;
///
/// let summary = list::parse("Bus 002 Device 004: ID 046d:c534 Logitech, Inc. Unifying Receiver");
/// let info = &summary[&DeviceKey::new("002", "004")];
/// assert_eq!(info.vendor_name, "Logitech Inc.");
/// ```
pub fn parse(lsusb_output: &str) -> SummaryMap {
    let mut details = SummaryMap::new();

    for line in lsusb_output.lines() {
        match DEVICE_LINE.captures(line) {
            Some(caps) => {
                let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
                let vid = group(3);
                details.insert(
                    DeviceKey::new(group(1), group(2)),
                    SummaryInfo {
                        vendor_id: vid.to_string(),
                        product_id: group(4).to_string(),
                        vendor_name: names::vendor(vid),
                        raw_line: line.to_string(),
                    },
                );
            }
            None => log::trace!("Skipping lsusb line {:?}", line),
        }
    }

    log::debug!("Parsed {} lsusb devices", details.len());
    details
}
