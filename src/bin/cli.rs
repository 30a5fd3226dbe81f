//! jtag-client CLI
//!
//! Issues a single JTAG-to-Avalon-MM register read or write.
//!
//! Note: the Avalon-MM read/write addresses are byte-based, so the address
//! value must be 32-bit aligned.

use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use jtag_client::protocol::{parse_literal, parse_port, validate};
use jtag_client::{Config, Executor, JtagError, Operation, OperationKind, Outcome};
use tracing_subscriber::{fmt, EnvFilter};

/// JTAG-to-Avalon-MM client
#[derive(Parser, Debug)]
#[command(name = "jtag-client")]
#[command(about = "JTAG-to-Avalon-MM client")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Args {
    /// Help (this message)
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,

    /// Hostname or IP of server [default: localhost]
    #[arg(short = 'n', long)]
    hostname: Option<String>,

    /// Server port number (decimal or 0x-hex)
    #[arg(short, long, default_value = "2540", value_parser = port_arg)]
    port: u16,

    /// Read address
    #[arg(short, long, value_name = "ADDRESS", conflicts_with = "write")]
    read: Option<String>,

    /// Write address
    #[arg(short, long, value_name = "ADDRESS")]
    write: Option<String>,

    /// Write data (32-bit)
    #[arg(short, long, value_name = "DATA")]
    data: Option<String>,

    /// Connect/read/write timeout in milliseconds (0 = wait forever)
    #[arg(short, long, value_name = "MS", default_value_t = 0)]
    timeout: u64,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn port_arg(text: &str) -> Result<u16, String> {
    parse_port(text).ok_or_else(|| format!("invalid server port argument '{}'", text))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.help {
        let _ = Args::command().print_help();
        return ExitCode::FAILURE;
    }

    // Initialize tracing/logging
    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("jtag-client v{}", jtag_client::VERSION);

    let (kind, address) = match (&args.read, &args.write) {
        (_, Some(address)) => (OperationKind::Write, Some(address)),
        (Some(address), None) => (OperationKind::Read, Some(address)),
        (None, None) => (OperationKind::Read, None),
    };
    let address = address.and_then(|a| parse_literal(a));
    let data = args.data.as_deref().and_then(parse_literal);

    let transaction = match validate(address, kind, data) {
        Ok(t) => t,
        Err(e) => return report(&JtagError::from(e)),
    };

    // Build config from args
    let mut builder = Config::builder().port(args.port).timeout_ms(args.timeout);
    if let Some(host) = &args.hostname {
        builder = builder.host(host);
    }
    let config = builder.build();

    let mut executor = Executor::new(config);

    // stdout carries only the result line
    eprintln!(
        "Connect to server {}:{}",
        executor.config().host.as_deref().unwrap_or("localhost"),
        executor.config().port
    );

    match executor.execute(&transaction) {
        Ok(Outcome::ReadResult(value)) => {
            println!(
                "JTAG read (address, data) = (0x{:08X}, 0x{:08X})",
                transaction.address(),
                value
            );
            ExitCode::SUCCESS
        }
        Ok(Outcome::WriteAcknowledged) => {
            let data = match transaction.operation() {
                Operation::Write { data } => data,
                Operation::Read => 0,
            };
            println!(
                "JTAG write (address, data) = (0x{:08X}, 0x{:08X})",
                transaction.address(),
                data
            );
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

/// Print an error (and its hint) for the user
fn report(error: &JtagError) -> ExitCode {
    tracing::debug!("Transaction aborted: {:?}", error);
    eprintln!("Error: {}", error);
    if let Some(hint) = error.hint() {
        eprintln!("{}", hint);
    }
    ExitCode::FAILURE
}
