//! Errors raised while finding, opening and driving the stick's port.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StickError {
  /// No output port name contains the needle. Also raised for an empty port list.
  #[error("Didn't fin any valid port.")]
  PortNotFound,
  #[error("could not create MIDI output client: {0}")]
  Init(#[from] midir::InitError),
  #[error("could not open MIDI output port {index}: {reason}")]
  Connect { index: usize, reason: String },
  #[error("could not send MIDI message: {0}")]
  Send(#[from] midir::SendError),
  /// Writing console output failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
