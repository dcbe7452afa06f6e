//! Find the stick, open it, ping it.

use std::io::Write;
use std::time::Duration;

use log::info;

use crate::backend::MidiBackend;
use crate::error::StickError;
use crate::ports::{select_port, PortInfo, STICK_NEEDLE};
use crate::sender::{send_forever, Pacer};

/// The fixed settings of a ping session.
#[derive(Debug, Clone)]
pub struct PulseConfig {
  /// Substring the output port name must contain.
  pub needle: String,
  pub client_name: String,
  pub connection_name: String,
  /// Pause after each message.
  pub interval: Duration,
}

impl Default for PulseConfig {
  fn default() -> Self {
    PulseConfig {
      needle: STICK_NEEDLE.to_string(),
      client_name: "stick-ping".to_string(),
      connection_name: "stick-ping-out".to_string(),
      interval: Duration::from_secs(1),
    }
  }
}

/// Selects the first matching output port and pings it until the pacer is
/// stopped. Nothing is opened when no port matches. Console lines go to `out`.
pub fn run<B: MidiBackend, W: Write>(
  backend: B,
  config: &PulseConfig,
  pacer: &mut Pacer,
  out: &mut W,
) -> Result<u64, StickError> {
  let names: Vec<String> = backend.output_port_names()?;
  let chosen: PortInfo = select_port(&names, &config.needle).ok_or(StickError::PortNotFound)?;
  let mut sink: B::Sink = backend.open(chosen.index)?;
  writeln!(out, "Opened port: {}", chosen.name)?;

  writeln!(out, "Start sending notes.")?;
  if pacer.is_stoppable() {
    writeln!(out, "Press Enter to stop...")?;
  }
  out.flush()?;
  let sent: u64 = send_forever(&mut sink, pacer, config.interval)?;
  info!("stopped after {} messages", sent);
  Ok(sent)
}

/// Process exit status for errors that end the program with a plain
/// message rather than an error report.
pub fn exit_code(err: &StickError) -> Option<i32> {
  match err {
    StickError::PortNotFound => Some(-1),
    _ => None,
  }
}

/// Prints the message for an error that has an exit status and returns that
/// status. Other errors are handed back to be propagated.
pub fn report<W: Write>(err: StickError, out: &mut W) -> Result<i32, StickError> {
  match exit_code(&err) {
    Some(code) => {
      writeln!(out, "{}", err)?;
      out.flush()?;
      Ok(code)
    }
    None => Err(err),
  }
}
