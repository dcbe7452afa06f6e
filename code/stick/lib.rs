//! Stick Ping - checks that a MIDI stick is receiving
//!
//! Opens the first MIDI output port whose name contains "Stick" and sends
//! middle C on, then off, one second apart, until stopped.
//!
//! The binary lives in `code/demos/stick_ping.rs`; this library holds the
//! pieces so they can be driven without real hardware.

pub mod app;
pub mod backend;
pub mod error;
pub mod message;
pub mod ports;
pub mod sender;

pub use app::{exit_code, report, run, PulseConfig};
pub use backend::{MessageSink, MidiBackend, MidirBackend, StickPort};
pub use error::StickError;
pub use message::{MidiMessage, NOTE_OFF, NOTE_ON};
pub use ports::{select_port, PortInfo, STICK_NEEDLE};
pub use sender::{send_forever, Pacer};
