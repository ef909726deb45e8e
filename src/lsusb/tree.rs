//! Parser for `lsusb -t` port tree output
//!
//! ```text
//! /:  Bus 002.Port 001: Dev 001, Class=root_hub, Driver=xhci_hcd/4p, 480M
//!     |__ Port 003: Dev 004, If 0, Class=Human Interface Device, Driver=usbhid, 12M
//! ```
//!
//! Only one bus is tracked at a time: interface lines are owned by the last bus root seen regardless of indent depth, which is enough to key devices since device numbers are unique within a bus.
use regex::Regex;

use super::names;
use crate::types::DeviceRecord;

lazy_static! {
    static ref ROOT_LINE: Regex = Regex::new(
        r"^/.*Bus (\d+)\.Port (\d+): Dev (\d+), Class=([^,]+), Driver=([^,]+), (\d+(?:\.\d+)?)M"
    )
    .expect("valid bus root pattern");
    static ref INTERFACE_LINE: Regex = Regex::new(
        r"^(\s*)\|__ Port (\d+): Dev (\d+), If (\d+), Class=([^,]+), Driver=([^,]+), (\d+(?:\.\d+)?)M"
    )
    .expect("valid interface pattern");
    static ref BUS_ONLY: Regex = Regex::new(r"^/.*Bus (\d+)").expect("valid bus pattern");
}

const UNKNOWN_BUS: &str = "Unknown";

/// Parse `lsusb -t` output into [`DeviceRecord`]s in the order printed. Lines which do not match are skipped.
///
/// ```
/// use usbtree::lsusb::tree;
/// let records = tree::parse("/:  Bus 002.Port 001: Dev 001, Class=root_hub, Driver=ehci-pci/3p, 480M");
/// assert_eq!(records[0].bus, "002");
/// assert_eq!(records[0].speed_category, "USB 2.0");
/// ```
pub fn parse(tree_output: &str) -> Vec<DeviceRecord> {
    let mut devices = Vec::new();
    let mut current_bus: Option<&str> = None;
    let mut bus_stack: Vec<&str> = Vec::new();

    for line in tree_output.lines() {
        if let Some(caps) = ROOT_LINE.captures(line) {
            let bus = caps.get(1).map_or("", |m| m.as_str());
            current_bus = Some(bus);
            bus_stack = vec![bus];
            devices.push(new_record(bus, &caps, None));
            continue;
        }

        if let Some(caps) = INTERFACE_LINE.captures(line) {
            let bus = bus_stack
                .first()
                .copied()
                .or(current_bus)
                .unwrap_or(UNKNOWN_BUS);
            let interface = caps.get(4).map(|m| m.as_str().to_string());
            devices.push(new_record(bus, &caps, interface));
        } else {
            log::trace!("Skipping tree line {:?}", line);
        }

        if let Some(caps) = BUS_ONLY.captures(line) {
            current_bus = caps.get(1).map(|m| m.as_str());
        }
    }

    log::debug!("Parsed {} records from lsusb tree", devices.len());
    devices
}

/// Both patterns capture port and device as groups 2 and 3; class, driver and speed are always the last three groups
fn new_record(bus: &str, caps: &regex::Captures, interface: Option<String>) -> DeviceRecord {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
    let last = caps.len() - 1;
    let speed_raw = group(last);

    DeviceRecord {
        bus: bus.to_string(),
        port: group(2),
        device: group(3),
        interface,
        class: group(last - 2),
        driver: group(last - 1),
        speed_category: names::speed_category(&speed_raw),
        speed_raw,
    }
}
