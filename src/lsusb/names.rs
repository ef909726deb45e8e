//! Name lookups for lsusb data: link speed categories and a small vendor table.
//!
//! Unlike a full USB IDs database, only well known vendors are listed; anything else is labelled with its hex ID so it can still be searched for.
use std::collections::HashMap;

lazy_static! {
    /// Link speed in Mb/s as printed by `lsusb -t` to USB generation
    pub static ref USB_SPEEDS: HashMap<&'static str, &'static str> = {
        HashMap::from([
            ("5000", "USB 3.0"),
            ("10000", "USB 3.1"),
            ("480", "USB 2.0"),
            ("12", "USB 1.1"),
            ("1.5", "USB 1.0"),
        ])
    };

    /// Lowercase vendor ID hex to vendor name
    pub static ref USB_VENDORS: HashMap<&'static str, &'static str> = {
        HashMap::from([
            ("046d", "Logitech Inc."),
            ("04b3", "IBM Corporation"),
            ("05ac", "Apple"),
            ("0403", "Future Technology Devices International Limited"),
            ("04e8", "Samsung Electronics Co., Ltd."),
            ("045e", "Microsoft Corporation"),
        ])
    };
}

/// Get USB generation of link `speed`, exact match only so "480.0" is unknown
///
/// ```
/// use usbtree::lsusb::names;
/// assert_eq!(names::speed_category("480"), "USB 2.0");
/// assert_eq!(names::speed_category("20000"), "Unknown (20000M)");
/// ```
pub fn speed_category(speed: &str) -> String {
    USB_SPEEDS
        .get(speed)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Unknown ({}M)", speed))
}

/// Get name of vendor from hex `vid`, case insensitive. Unknown vendors keep the case given.
///
/// ```
/// use usbtree::lsusb::names;
/// assert_eq!(names::vendor("046D"), "Logitech Inc.");
/// assert_eq!(names::vendor("FFFF"), "Unknown (0xFFFF)");
/// ```
pub fn vendor(vid: &str) -> String {
    USB_VENDORS
        .get(vid.to_lowercase().as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Unknown (0x{})", vid))
}
