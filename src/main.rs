//! Where the magic happens for `usbtree` binary!
use clap::Parser;
use std::io::{self, Write};

use usbtree::display::{self, PrintSettings};
use usbtree::error::{ErrorKind, Result};
use usbtree::lsusb::Lsusb;
use usbtree::profiler;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Disable coloured output
    #[arg(long = "no-color", visible_alias = "no-colour", default_value_t = false)]
    no_colour: bool,

    /// Hide extra details from lsusb -v
    #[arg(long, default_value_t = false)]
    no_extra: bool,
}

fn usbtree(args: Args) -> Result<()> {
    let lsusb = Lsusb::new()?;
    let data = profiler::get_usb_data(&lsusb)?;

    let settings = PrintSettings {
        colour: !args.no_colour && display::colour_supported(),
        extra: !args.no_extra,
    };

    let mut stdout = io::stdout().lock();
    display::print_tree(&mut stdout, &data, &settings)?;
    stdout.flush()?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = usbtree::set_log_level(log::LevelFilter::Warn) {
        eprintln!("{:#}", e);
    }

    if let Err(e) = usbtree(args) {
        match e.kind() {
            ErrorKind::Lsusb | ErrorKind::Decoding => eprintln!("Error running lsusb: {:#}", e),
            _ => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}
