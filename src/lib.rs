//! Enigma rotor cipher machine simulator.
//!
//! Simulates the Enigma I / M3 Army and M4 Navy machines: one letter at a
//! time, an electrical signal runs through the plugboard, the rotating
//! substitution wheels and the reflector, and back out, while the stepping
//! mechanism advances the rotors before every keystroke — including the
//! double-stepping anomaly of the middle rotor.
//!
//! # Architecture
//!
//! ```text
//! alphabet   (A-Z <-> 0-25 index arithmetic, mod 26)
//!     ↑
//! wiring     (static per-model substitution tables + turnover letters)
//!     ↑
//! Rotor / Plugboard   (stateful signal-path units)
//!     ↑
//! Enigma     (orchestrator — signal chain + stepping state machine)
//! ```
//!
//! # Examples
//!
//! Encode and decode with the same starting configuration (the machine is
//! its own inverse):
//!
//! ```
//! use enigma::config::MachineConfig;
//! use enigma::Enigma;
//!
//! let mut encoder = Enigma::new(MachineConfig::default()).unwrap();
//! let ciphertext = encoder.encode_message("WETTERBERICHT").unwrap();
//!
//! let mut decoder = Enigma::new(MachineConfig::default()).unwrap();
//! assert_eq!(decoder.encode_message(&ciphertext).unwrap(), "WETTERBERICHT");
//! ```
//!
//! Configure a four-rotor M4 with plugboard leads:
//!
//! ```
//! use enigma::config::{MachineConfig, MachineKind, ReflectorModel, RotorConfig, RotorModel};
//! use enigma::Enigma;
//!
//! let config = MachineConfig {
//!     kind: MachineKind::M4,
//!     rotors: vec![
//!         RotorConfig::new(RotorModel::Beta, 1, 'V'),
//!         RotorConfig::new(RotorModel::II, 1, 'J'),
//!         RotorConfig::new(RotorModel::IV, 1, 'N'),
//!         RotorConfig::new(RotorModel::I, 22, 'A'),
//!     ],
//!     reflector: ReflectorModel::B,
//!     plugboard: vec!["AT".into(), "BL".into(), "DF".into()],
//! };
//!
//! let mut machine = Enigma::new(config).unwrap();
//! assert_eq!(machine.displayed_letters(), "VJNA");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;

pub(crate) mod alphabet;
mod enigma;
pub(crate) mod plugboard;
pub(crate) mod rotor;
pub(crate) mod wiring;

pub use enigma::Enigma;
