//! The two raw MIDI messages the stick is pinged with.

/// A three-byte channel voice message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiMessage([u8; 3]);

const NOTE_ON_STATUS: u8 = 0x90;
const NOTE_OFF_STATUS: u8 = 0x80;
const MIDDLE_C: u8 = 60;
const PING_VELOCITY: u8 = 112;

/// Channel 1, middle C, velocity 112.
pub const NOTE_ON: MidiMessage = MidiMessage::note_on(0, MIDDLE_C, PING_VELOCITY);
/// Channel 1, middle C, velocity 0.
pub const NOTE_OFF: MidiMessage = MidiMessage::note_off(0, MIDDLE_C);

impl MidiMessage {
  /// `channel` is 0-based (0 = channel 1).
  pub const fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
    MidiMessage([NOTE_ON_STATUS | (channel & 0x0F), note & 0x7F, velocity & 0x7F])
  }

  pub const fn note_off(channel: u8, note: u8) -> Self {
    MidiMessage([NOTE_OFF_STATUS | (channel & 0x0F), note & 0x7F, 0])
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}
