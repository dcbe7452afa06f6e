//! The MIDI subsystem as seen by the pinger: enumerate, open, send.
//!
//! `MidirBackend` talks to the host through `midir`; tests swap in their own.

use log::{debug, info, warn};
use midir::{MidiOutput, MidiOutputConnection, MidiOutputPort};

use crate::error::StickError;

/// Anything raw MIDI bytes can be written to.
pub trait MessageSink {
  fn send(&mut self, message: &[u8]) -> Result<(), StickError>;
}

/// A MIDI subsystem offering output ports.
pub trait MidiBackend {
  type Sink: MessageSink;

  /// Output port names, in the order the subsystem reports them.
  fn output_port_names(&self) -> Result<Vec<String>, StickError>;

  /// Opens the output port at `index`. Consumes the backend, like
  /// `midir::MidiOutput::connect` does.
  fn open(self, index: usize) -> Result<Self::Sink, StickError>;
}

pub struct MidirBackend {
  midi_out: MidiOutput,
  connection_name: String,
}

impl MidirBackend {
  pub fn new(client_name: &str, connection_name: &str) -> Result<Self, StickError> {
    let midi_out: MidiOutput = MidiOutput::new(client_name)?;
    Ok(MidirBackend { midi_out, connection_name: connection_name.to_string() })
  }
}

impl MidiBackend for MidirBackend {
  type Sink = StickPort;

  fn output_port_names(&self) -> Result<Vec<String>, StickError> {
    let ports: Vec<MidiOutputPort> = self.midi_out.ports();
    let mut names: Vec<String> = Vec::with_capacity(ports.len());
    for (index, port) in ports.iter().enumerate() {
      // An unreadable name still occupies its index.
      let name: String = match self.midi_out.port_name(port) {
        Ok(name) => name,
        Err(err) => {
          warn!("could not read name of output port {}: {}", index, err);
          String::new()
        }
      };
      debug!("output port {}: {}", index, name);
      names.push(name);
    }
    Ok(names)
  }

  fn open(self, index: usize) -> Result<StickPort, StickError> {
    let ports: Vec<MidiOutputPort> = self.midi_out.ports();
    let port: &MidiOutputPort = ports.get(index).ok_or_else(|| StickError::Connect {
      index,
      reason: format!("only {} output ports available", ports.len()),
    })?;
    let conn: MidiOutputConnection = self
      .midi_out
      .connect(port, &self.connection_name)
      .map_err(|err| StickError::Connect { index, reason: err.to_string() })?;
    info!("opened output port {}", index);
    Ok(StickPort { index, conn: Some(conn) })
  }
}

/// An open output port, closed when dropped.
pub struct StickPort {
  index: usize,
  // Only taken in `drop`, so `close()` can consume the connection.
  conn: Option<MidiOutputConnection>,
}

impl MessageSink for StickPort {
  fn send(&mut self, message: &[u8]) -> Result<(), StickError> {
    if let Some(conn) = self.conn.as_mut() {
      conn.send(message)?;
    }
    Ok(())
  }
}

impl Drop for StickPort {
  fn drop(&mut self) {
    if let Some(conn) = self.conn.take() {
      let _: MidiOutput = conn.close();
      info!("closed output port {}", self.index);
    }
  }
}
