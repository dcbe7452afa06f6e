//! The note-on / note-off loop.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use log::debug;

use crate::backend::MessageSink;
use crate::error::StickError;
use crate::message::{MidiMessage, NOTE_OFF, NOTE_ON};

/// Waits between sends. A stop request on the channel cuts the wait short
/// and ends the loop.
pub struct Pacer {
  stop: Option<mpsc::Receiver<()>>,
}

impl Pacer {
  /// Sleeps the full interval every time; only process termination stops it.
  pub fn unstoppable() -> Self {
    Pacer { stop: None }
  }

  pub fn with_stop(stop: mpsc::Receiver<()>) -> Self {
    Pacer { stop: Some(stop) }
  }

  pub fn is_stoppable(&self) -> bool {
    self.stop.is_some()
  }

  /// Returns false once a stop has been requested.
  pub fn wait(&mut self, interval: Duration) -> bool {
    let result: Result<(), mpsc::RecvTimeoutError> = match &self.stop {
      None => {
        thread::sleep(interval);
        return true;
      }
      Some(rx) => rx.recv_timeout(interval),
    };
    match result {
      Ok(()) => false,
      Err(mpsc::RecvTimeoutError::Timeout) => true,
      Err(mpsc::RecvTimeoutError::Disconnected) => {
        // Nobody can ask us to stop any more; fall back to plain sleeping.
        self.stop = None;
        thread::sleep(interval);
        true
      }
    }
  }
}

/// Sends NOTE_ON, waits, sends NOTE_OFF, waits, and repeats until the pacer
/// is stopped. Returns how many messages went out. A failed send ends the
/// loop at once with the error.
pub fn send_forever<S: MessageSink>(
  sink: &mut S,
  pacer: &mut Pacer,
  interval: Duration,
) -> Result<u64, StickError> {
  let pair: [MidiMessage; 2] = [NOTE_ON, NOTE_OFF];
  let mut sent: u64 = 0;
  for message in pair.iter().cycle() {
    sink.send(message.as_bytes())?;
    sent += 1;
    debug!("sent {:02X?}", message.as_bytes());
    if !pacer.wait(interval) {
      break;
    }
  }
  Ok(sent)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Instant;

  struct Recorder {
    sent: Vec<Vec<u8>>,
    stop_after: usize,
    stop: mpsc::Sender<()>,
  }

  impl MessageSink for Recorder {
    fn send(&mut self, message: &[u8]) -> Result<(), StickError> {
      self.sent.push(message.to_vec());
      if self.sent.len() == self.stop_after {
        let _ = self.stop.send(());
      }
      Ok(())
    }
  }

  #[test]
  fn alternates_on_and_off_until_stopped() {
    let (tx, rx): (mpsc::Sender<()>, mpsc::Receiver<()>) = mpsc::channel();
    let mut sink: Recorder = Recorder { sent: Vec::new(), stop_after: 5, stop: tx };
    let mut pacer: Pacer = Pacer::with_stop(rx);
    let sent: u64 = send_forever(&mut sink, &mut pacer, Duration::ZERO).unwrap();
    assert_eq!(sent, 5);
    let on: Vec<u8> = vec![0x90, 60, 112];
    let off: Vec<u8> = vec![0x80, 60, 0];
    assert_eq!(sink.sent, vec![on.clone(), off.clone(), on.clone(), off, on]);
  }

  #[test]
  fn stop_request_cuts_a_long_wait_short() {
    let (tx, rx): (mpsc::Sender<()>, mpsc::Receiver<()>) = mpsc::channel();
    let mut pacer: Pacer = Pacer::with_stop(rx);
    tx.send(()).unwrap();
    let started: Instant = Instant::now();
    assert!(!pacer.wait(Duration::from_secs(30)));
    assert!(started.elapsed() < Duration::from_secs(5));
  }

  #[test]
  fn dropped_stop_channel_keeps_the_loop_going() {
    let (tx, rx): (mpsc::Sender<()>, mpsc::Receiver<()>) = mpsc::channel();
    drop(tx);
    let mut pacer: Pacer = Pacer::with_stop(rx);
    assert!(pacer.wait(Duration::ZERO));
    assert!(pacer.wait(Duration::ZERO));
    assert!(Pacer::unstoppable().wait(Duration::ZERO));
  }
}
