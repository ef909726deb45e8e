//! Printing of [`UsbData`] as a bus tree with markers
//!
//! Each physical device is printed once even if `lsusb -t` lists it once per interface. Devices in plain `lsusb` are shown with that line, others with what `lsusb -t` knows about them.
use colored::*;
use itertools::Itertools;
use std::fmt;
use std::io::{self, Write};

use crate::profiler::UsbData;
use crate::types::{DescriptorInfo, DeviceRecord, SummaryInfo};

const ROOT_INDENT: &str = "  ";
const INTERFACE_INDENT: &str = "    ";
const DETAIL_INDENT: &str = "   ";

/// Markers placed before tree lines; alternate formatting `{:#}` is coloured with utf-8 icons, otherwise plain ascii brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// Start of a bus section with the bus number
    Bus(&'a str),
    /// Device is a root hub
    RootHub,
    /// Port number annotation
    Port,
    /// Any other device
    Device,
    /// Field name of descriptor strings
    Label(&'a str),
}

impl Marker<'_> {
    /// Colour of coloured marker
    pub fn colour(&self, s: &str) -> ColoredString {
        match self {
            Marker::Bus(_) => s.bold().cyan(),
            Marker::RootHub => s.bold().magenta(),
            Marker::Port => s.bold().yellow(),
            Marker::Device => s.bold().green(),
            Marker::Label(_) => s.bold().white(),
        }
    }
}

impl fmt::Display for Marker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            let s = match self {
                Marker::Bus(bus) => format!("\u{25A0} BUS {} \u{25A0}", bus), // ■
                Marker::RootHub => "\u{25B2} ROOT HUB".into(),                  // ▲
                Marker::Port => "\u{25B6} PORT".into(),                         // ▶
                Marker::Device => "\u{25CF} DEVICE".into(),                     // ●
                Marker::Label(name) => format!("{}:", name),
            };
            write!(f, "{}", self.colour(&s))
        } else {
            match self {
                Marker::Bus(bus) => write!(f, "=== BUS {} ===", bus),
                Marker::RootHub => write!(f, "[ROOT HUB]"),
                Marker::Port => write!(f, "[PORT]"),
                Marker::Device => write!(f, "[DEVICE]"),
                Marker::Label(name) => write!(f, "{}:", name),
            }
        }
    }
}

/// Options for [`print_tree`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrintSettings {
    /// Coloured markers, see [`colour_supported`]
    pub colour: bool,
    /// Add `lsusb -v` string descriptors below devices
    pub extra: bool,
}

impl PrintSettings {
    fn marker(&self, marker: Marker) -> String {
        if self.colour {
            format!("{:#}", marker)
        } else {
            format!("{}", marker)
        }
    }
}

/// Whether the terminal can show coloured output; plain markers should be used if not
pub fn colour_supported() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// Print `data` to `w` as a tree grouped by bus, in `lsusb -t` order
pub fn print_tree<W: Write>(w: &mut W, data: &UsbData, settings: &PrintSettings) -> io::Result<()> {
    if data.devices.is_empty() {
        writeln!(w, "No USB devices found.")?;
        return Ok(());
    }
    log::debug!("Printing tree with {:?}", settings);

    let mut last_bus: Option<&str> = None;
    for device in data.devices.iter().unique_by(|d| d.key()) {
        if last_bus != Some(device.bus.as_str()) {
            writeln!(w)?;
            writeln!(w, "{}", settings.marker(Marker::Bus(&device.bus)))?;
            last_bus = Some(&device.bus);
        }

        let indent = if device.is_interface() {
            INTERFACE_INDENT
        } else {
            ROOT_INDENT
        };
        let key = device.key();

        match data.summary.get(&key) {
            Some(info) => print_listed_device(w, device, info, indent, settings)?,
            None => {
                log::debug!("{} not in lsusb list, using tree data", key);
                print_tree_device(w, device, indent, settings)?
            }
        }

        if settings.extra {
            if let Some(descriptors) = data.descriptors.get(&key) {
                print_descriptors(w, descriptors, indent, settings)?;
            }
        }
    }

    Ok(())
}

fn print_listed_device<W: Write>(
    w: &mut W,
    device: &DeviceRecord,
    info: &SummaryInfo,
    indent: &str,
    settings: &PrintSettings,
) -> io::Result<()> {
    let marker = if info.is_root_hub() {
        Marker::RootHub
    } else {
        Marker::Device
    };
    writeln!(w, "{}{}  {}", indent, settings.marker(marker), info.raw_line)?;

    // lsusb list has no port so only skipped if description happens to have it
    if !device.port.is_empty() && !info.raw_line.contains(&format!("Port {}", device.port)) {
        writeln!(
            w,
            "{}{}  Port: {}",
            indent,
            settings.marker(Marker::Port),
            device.port
        )?;
    }

    writeln!(
        w,
        "{}{}Vendor: {}, Speed: {} Mbps, Category: {}",
        indent, DETAIL_INDENT, info.vendor_name, device.speed_raw, device.speed_category
    )
}

fn print_tree_device<W: Write>(
    w: &mut W,
    device: &DeviceRecord,
    indent: &str,
    settings: &PrintSettings,
) -> io::Result<()> {
    writeln!(
        w,
        "{}{}  Port {} -> {}  Device {}",
        indent,
        settings.marker(Marker::Port),
        device.port,
        settings.marker(Marker::Device),
        device.device
    )?;
    writeln!(
        w,
        "{}{}Class: {}, Driver: {}, Speed: {} Mbps, Category: {}",
        indent,
        DETAIL_INDENT,
        device.class,
        device.driver,
        device.speed_raw,
        device.speed_category
    )
}

fn print_descriptors<W: Write>(
    w: &mut W,
    descriptors: &DescriptorInfo,
    indent: &str,
    settings: &PrintSettings,
) -> io::Result<()> {
    let fields = [
        ("Product Name", Some(&descriptors.product_name)),
        ("Manufacturer", descriptors.manufacturer.as_ref()),
        ("Product", descriptors.product.as_ref()),
        ("Serial", descriptors.serial.as_ref()),
    ];

    for (name, value) in fields {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            writeln!(
                w,
                "{}{}{} {}",
                indent,
                DETAIL_INDENT,
                settings.marker(Marker::Label(name)),
                v
            )?;
        }
    }

    Ok(())
}
