//! Stick Ping - sends middle C on/off to the MIDI stick every second
//!
//! # How to run
//!
//! ```sh
//! cargo run --bin stick_ping
//! RUST_LOG=debug cargo run --bin stick_ping   # also log ports and messages
//! ```
//!
//! Plug the stick in first. The first output port whose name contains
//! "Stick" is used. Press Enter (or Ctrl+C) to stop; when stdin is not a
//! terminal only Ctrl+C stops it.

use std::io::IsTerminal;
use std::sync::mpsc;
use std::{io, thread};

use stick_ping::{report, run, MidirBackend, Pacer, PulseConfig};

fn main() -> anyhow::Result<()> {
  env_logger::init();

  let config: PulseConfig = PulseConfig::default();
  let backend: MidirBackend = MidirBackend::new(&config.client_name, &config.connection_name)?;

  // Enter can only be pressed on a terminal.
  let mut pacer: Pacer = if io::stdin().is_terminal() {
    let (tx_stop, rx_stop): (mpsc::Sender<()>, mpsc::Receiver<()>) = mpsc::channel();
    let _stdin_thread: thread::JoinHandle<()> = thread::spawn(move || watch_stdin(tx_stop));
    Pacer::with_stop(rx_stop)
  } else {
    Pacer::unstoppable()
  };

  let mut stdout: io::Stdout = io::stdout();
  match run(backend, &config, &mut pacer, &mut stdout) {
    Ok(_) => Ok(()),
    Err(err) => {
      let code: i32 = report(err, &mut stdout)?;
      std::process::exit(code);
    }
  }
}

/// Requests a stop when Enter is pressed.
fn watch_stdin(tx_stop: mpsc::Sender<()>) {
  let mut input: String = String::new();
  match io::stdin().read_line(&mut input) {
    Ok(n) if n > 0 => {
      let _ = tx_stop.send(());
    }
    _ => {}
  }
}
