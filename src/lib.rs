//! Show attached USB devices as a tree by merging the three output styles of `lsusb`: the port tree, the device list and the verbose descriptor dump.
//!
//! ```no_run
//! use usbtree::{display, lsusb, profiler};
//!
//! let lsusb = lsusb::Lsusb::new().unwrap();
//! let data = profiler::get_usb_data(&lsusb).unwrap();
//! let settings = display::PrintSettings { colour: display::colour_supported(), extra: true };
//! display::print_tree(&mut std::io::stdout(), &data, &settings).unwrap();
//! ```
#![warn(missing_docs)]
use simple_logger::SimpleLogger;

#[macro_use]
extern crate lazy_static;
pub mod display;
pub mod error;
pub mod lsusb;
pub mod profiler;
pub mod types;

/// Set usbtree module and binary log `level`, logging to stderr so tree output is untouched
pub fn set_log_level(level: log::LevelFilter) -> crate::error::Result<()> {
    SimpleLogger::new()
        .with_utc_timestamps()
        .with_level(level)
        .init()
        .map_err(|e| {
            crate::error::Error::new(
                crate::error::ErrorKind::Other("simple_logger"),
                &format!("Failed to set log level: {}", e),
            )
        })?;

    Ok(())
}
