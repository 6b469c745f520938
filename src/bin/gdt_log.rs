use clap::Parser;
use dotenv::dotenv;
use eyre::{eyre, Result};

use gdt_console::catalog;
use gdt_console::configure::load_config;
use gdt_console::logger;
use gdt_console::message_code::Band;
use gdt_console::{gdt_log_error, gdt_log_warning, DiagnosticEmitter, MessageCode};

#[derive(Parser)]
#[clap(author, version, about = "Emit one data-transport diagnostic", long_about = None)]
struct Args {
    /// Numeric message code
    #[clap(long, default_value_t = 2)]
    code: i64,
    /// Emit at error level (reports a fault after logging)
    #[clap(long, action = clap::ArgAction::SetTrue)]
    error: bool,
    /// Print the message catalog and exit
    #[clap(long, action = clap::ArgAction::SetTrue)]
    list: bool,
    /// Message text
    #[clap(default_value = "")]
    message: String,
}

fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();

    if args.list {
        for (code, label) in catalog::entries() {
            let band = match code.band() {
                Band::Warning => "warning",
                Band::Error => "error",
            };
            println!("{:>5}  {:<7}  {}", code.code(), band, label);
        }
        return Ok(());
    }

    logger::setup_logger().map_err(|e| eyre!("Failed to set up logger: {}", e))?;
    let config = load_config()?;
    let emitter = DiagnosticEmitter::from_config(&config);

    let code = MessageCode::try_from(args.code)
        .map_err(|e| eyre!("{} ({})", e, catalog::render_raw(args.code)))?;

    if args.error {
        gdt_log_error!(emitter, code, "{}", args.message);
    } else {
        gdt_log_warning!(emitter, code, "{}", args.message);
    }

    Ok(())
}
