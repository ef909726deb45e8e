//! Runs the `lsusb` command and parses its three output styles
//!
//! * `lsusb -t`: port tree, parsed by [`tree`]
//! * `lsusb`: device list, parsed by [`list`]
//! * `lsusb -v`: verbose descriptors, parsed by [`verbose`]
//!
//! The parsers are infallible; lines they do not understand are skipped since the lsusb output format is not fixed between usbutils releases.
//!
//! ```no_run
//! use usbtree::lsusb::{self, Enumerate};
//!
//! let lsusb = lsusb::Lsusb::new().unwrap();
//! let records = lsusb::tree::parse(&lsusb.tree().unwrap());
//! ```
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, ErrorKind, Result};

pub mod list;
pub mod names;
pub mod tree;
pub mod verbose;

/// Name of the command looked up on `PATH`
pub const LSUSB_COMMAND: &str = "lsusb";

/// Source of the three lsusb text outputs
///
/// Implemented by [`Lsusb`] for the system command; anything else providing the same text, such as a saved dump, can be rendered too.
pub trait Enumerate {
    /// Port tree text as `lsusb -t`
    fn tree(&self) -> Result<String>;
    /// One line per device text as `lsusb`
    fn list(&self) -> Result<String>;
    /// Verbose descriptor text as `lsusb -v`
    fn verbose(&self) -> Result<String>;
}

/// The system `lsusb` command
#[derive(Debug, Clone)]
pub struct Lsusb {
    path: PathBuf,
}

impl Lsusb {
    /// Find `lsusb` on `PATH`; Err with [`ErrorKind::NotInstalled`] if it is not
    pub fn new() -> Result<Self> {
        let path = which::which(LSUSB_COMMAND)?;
        log::debug!("Using {}", path.display());
        Ok(Lsusb { path })
    }

    /// Full path to the executable found
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: &[&str], stderr: Stdio) -> Result<String> {
        let output = Command::new(&self.path)
            .args(args)
            .stderr(stderr)
            .output()
            .map_err(|e| {
                Error::new(
                    ErrorKind::Lsusb,
                    &format!("Failed to run {}: Error({})", self.path.display(), e),
                )
            })?;

        if output.status.success() {
            Ok(String::from_utf8(output.stdout)?)
        } else {
            log::error!(
                "lsusb {:?} returned non-zero stderr: {:?}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
            Err(Error::new(
                ErrorKind::Lsusb,
                &format!("'lsusb {}' returned {}", args.join(" "), output.status),
            ))
        }
    }
}

impl Enumerate for Lsusb {
    fn tree(&self) -> Result<String> {
        self.run(&["-t"], Stdio::piped())
    }

    fn list(&self) -> Result<String> {
        self.run(&[], Stdio::piped())
    }

    /// Non-root users get "Couldn't open device" for most devices on stderr, which is discarded
    fn verbose(&self) -> Result<String> {
        self.run(&["-v"], Stdio::null())
    }
}
