//! CLI Tests
//!
//! Runs the `jtag-client` binary and checks:
//! - Exit status for success, usage and transaction errors
//! - Result lines on stdout
//! - Error messages and hints on stderr

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};
use std::time::Duration;

// =============================================================================
// Helper Functions
// =============================================================================

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jtag-client"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// One-shot server: reads one command line, sends `reply`, waits for close
fn spawn_server(reply: &'static [u8]) -> (u16, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (stream, _): (TcpStream, _) = listener.accept().unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();

        let mut writer = stream;
        writer.write_all(reply).unwrap();

        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        line
    });
    (port, handle)
}

// =============================================================================
// Usage Tests
// =============================================================================

#[test]
fn test_help_exits_nonzero() {
    let output = run(&["-h"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("--hostname"));
    assert!(stdout(&output).contains("--write"));

    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_address() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("a valid address must be supplied"));
    assert!(stderr(&output).contains("Use --help to see the correct usage."));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unparsable_address_is_missing() {
    let output = run(&["-r", "nope"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("a valid address must be supplied"));
}

#[test]
fn test_misaligned_address() {
    let output = run(&["-r", "0x3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("32-bit aligned"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_write_without_data() {
    let output = run(&["-w", "0x4"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("valid write data must be supplied"));
}

#[test]
fn test_read_and_write_conflict() {
    let output = run(&["-r", "0x4", "-w", "0x8", "-d", "1"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_bad_port_is_usage_error() {
    let output = run(&["-p", "port", "-r", "0x4"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid server port argument"));
}

// =============================================================================
// Transaction Tests
// =============================================================================

#[test]
fn test_refused_connection_prints_hint() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let output = run(&["-n", "127.0.0.1", "-p", &port.to_string(), "-r", "0x0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please check that the JTAG server is running."));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_read_prints_result() {
    let (port, server) = spawn_server(b"0x00001234");

    let output = run(&[
        "-n", "127.0.0.1", "-p", &port.to_string(), "-t", "5000", "-r", "0x1000",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "JTAG read (address, data) = (0x00001000, 0x00001234)\n"
    );
    assert!(stderr(&output).contains(&format!("Connect to server 127.0.0.1:{}", port)));

    assert_eq!(server.join().unwrap(), "jtag_read 0x00001000\n");
}

#[test]
fn test_write_prints_result() {
    let (port, server) = spawn_server(b"");
    let hex_port = format!("0x{:X}", port);

    let output = run(&[
        "--hostname", "127.0.0.1", "--port", &hex_port, "--timeout", "5000",
        "--write", "8192", "--data", "0xDEADBEEF",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "JTAG write (address, data) = (0x00002000, 0xDEADBEEF)\n"
    );

    assert_eq!(server.join().unwrap(), "jtag_write 0x00002000 0xDEADBEEF\n");
}
