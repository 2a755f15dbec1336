//! Error types for the Enigma library.

use thiserror::Error;

use crate::config::RotorModel;

/// Errors produced by the Enigma library.
///
/// Configuration errors are raised once, at machine construction; a machine
/// is never partially usable. Input errors are raised per encode call and
/// leave the machine state untouched (no rotor steps for rejected input).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Number of configured rotors does not match the machine kind.
    #[error("machine kind requires {expected} rotors, {found} configured")]
    RotorCountMismatch {
        /// Rotor count required by the machine kind.
        expected: usize,
        /// Rotor count actually configured.
        found: usize,
    },
    /// The same rotor model appears in more than one slot.
    #[error("rotor model {0} is configured more than once")]
    DuplicateRotor(RotorModel),
    /// A four-rotor machine's leftmost slot holds a non-Greek rotor.
    #[error("leftmost rotor of a four-rotor machine must be beta or gamma, found {0}")]
    GreekRotorRequired(RotorModel),
    /// Ring setting outside 1..=26.
    #[error("ring setting {value} for rotor slot {slot} is outside 1..=26")]
    RingSettingOutOfRange {
        /// Zero-based rotor slot, counted from the left.
        slot: usize,
        /// The rejected ring setting.
        value: u8,
    },
    /// Initial rotor position is not a letter A-Z.
    #[error("initial position {value:?} for rotor slot {slot} is not a letter A-Z")]
    PositionNotALetter {
        /// Zero-based rotor slot, counted from the left.
        slot: usize,
        /// The rejected position character.
        value: char,
    },
    /// More than 13 plugboard pairs configured.
    #[error("plugboard accepts at most 13 pairs, {0} configured")]
    PlugboardTooManyPairs(usize),
    /// A plugboard pair is not exactly two distinct letters A-Z.
    #[error("plugboard pair {0:?} must be exactly two distinct letters A-Z")]
    PlugboardInvalidPair(String),
    /// A letter appears in more than one plugboard pair.
    #[error("letter {0:?} appears in more than one plugboard pair")]
    PlugboardDuplicateLetter(char),
    /// Unrecognized rotor model name.
    #[error("unknown rotor model {0:?}")]
    UnknownRotorModel(String),
    /// Unrecognized reflector name.
    #[error("unknown reflector {0:?}, expected \"B\" or \"C\"")]
    UnknownReflector(String),
    /// A character fed to the machine is not a letter A-Z.
    #[error("input character {0:?} is not a letter A-Z")]
    NonAlphabeticInput(char),
    /// An empty message was passed to `encode_message`.
    #[error("message must contain at least one letter")]
    EmptyMessage,
}
