//! Gathers lsusb output from an [`Enumerate`] source into [`UsbData`] for display
use crate::error::Result;
use crate::lsusb::{self, Enumerate};
use crate::types::{DescriptorMap, DeviceRecord, SummaryMap};

/// All parsed lsusb data, merged by [`crate::types::DeviceKey`] at display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsbData {
    /// Tree records in `lsusb -t` order, with duplicates for multi-interface devices
    pub devices: Vec<DeviceRecord>,
    /// Plain `lsusb` lines
    pub summary: SummaryMap,
    /// `lsusb -v` string descriptors; empty if verbose output was not available
    pub descriptors: DescriptorMap,
}

impl UsbData {
    /// Parse the three lsusb text outputs
    pub fn from_text(tree_output: &str, list_output: &str, verbose_output: &str) -> Self {
        UsbData {
            devices: lsusb::tree::parse(tree_output),
            summary: lsusb::list::parse(list_output),
            descriptors: lsusb::verbose::parse(verbose_output),
        }
    }
}

/// Get [`UsbData`] from `source`.
///
/// The tree and list outputs are required and their Err is returned. Verbose output failing only means descriptor strings are missing so is logged and treated as empty.
///
/// All output is gathered before parsing so nothing is displayed when a required output fails.
pub fn get_usb_data<E: Enumerate>(source: &E) -> Result<UsbData> {
    let tree_output = source.tree()?;
    let list_output = source.list()?;
    let verbose_output = source.verbose().unwrap_or_else(|e| {
        log::warn!("Failed to get verbose lsusb output, descriptor strings will be missing: {:#}", e);
        String::new()
    });

    Ok(UsbData::from_text(&tree_output, &list_output, &verbose_output))
}
