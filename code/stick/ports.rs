//! Picks the stick out of the enumerated output ports.

/// Substring identifying the stick among output port names.
pub const STICK_NEEDLE: &str = "Stick";

/// An output port as enumerated by the MIDI subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortInfo {
  /// Zero-based position in enumeration order.
  pub index: usize,
  pub name: String,
}

/// Returns the first port whose name contains `needle` (case-sensitive).
/// `None` when nothing matches, including when `names` is empty.
pub fn select_port<S: AsRef<str>>(names: &[S], needle: &str) -> Option<PortInfo> {
  names
    .iter()
    .enumerate()
    .find(|(_, name)| name.as_ref().contains(needle))
    .map(|(index, name)| PortInfo { index, name: name.as_ref().to_string() })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn picks_first_match_by_enumeration_order() {
    let names: Vec<&str> = vec!["IAC Driver", "MIDI Stick 2", "Stick 3"];
    assert_eq!(
      select_port(&names, STICK_NEEDLE),
      Some(PortInfo { index: 1, name: "MIDI Stick 2".to_string() })
    );
  }

  #[test]
  fn match_is_case_sensitive_and_anywhere_in_name() {
    let names: Vec<&str> = vec!["stick lower", "STICK upper", "MyStickPort"];
    let chosen: PortInfo = select_port(&names, STICK_NEEDLE).unwrap();
    assert_eq!(chosen.index, 2);
    assert_eq!(chosen.name, "MyStickPort");
  }

  #[test]
  fn no_match_or_empty_list_is_none() {
    let none: Vec<String> = Vec::new();
    assert_eq!(select_port(&none, STICK_NEEDLE), None);
    let others: Vec<&str> = vec!["IAC Driver", "Midi Through"];
    assert_eq!(select_port(&others, STICK_NEEDLE), None);
  }
}
