//! Machine configuration and its validation.
//!
//! A [`MachineConfig`] describes everything an operator sets before keying:
//! machine kind, rotor selection with ring settings and start positions
//! (listed left-to-right, as read off the machine), reflector, and the
//! plugboard pair list. Validation runs once, inside [`crate::Enigma::new`];
//! no partially-built machine is ever exposed.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::EnigmaError;

/// Rotor wheel models of the Enigma I / M3 / M4 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum RotorModel {
    /// Enigma I wheel I (turnover Q).
    I,
    /// Enigma I wheel II (turnover E).
    II,
    /// Enigma I wheel III (turnover V).
    III,
    /// M3 wheel IV (turnover J).
    IV,
    /// M3 wheel V (turnover Z).
    V,
    /// M3/M4 naval wheel VI (turnovers Z and M).
    VI,
    /// M3/M4 naval wheel VII (turnovers Z and M).
    VII,
    /// M3/M4 naval wheel VIII (turnovers Z and M).
    VIII,
    /// M4 Greek wheel beta (leftmost slot only, never steps).
    Beta,
    /// M4 Greek wheel gamma (leftmost slot only, never steps).
    Gamma,
}

impl RotorModel {
    /// True for the M4 Greek wheels, which fit only the non-stepping
    /// leftmost slot of a four-rotor machine.
    pub fn is_greek(self) -> bool {
        matches!(self, RotorModel::Beta | RotorModel::Gamma)
    }
}

impl fmt::Display for RotorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorModel::I => "I",
            RotorModel::II => "II",
            RotorModel::III => "III",
            RotorModel::IV => "IV",
            RotorModel::V => "V",
            RotorModel::VI => "VI",
            RotorModel::VII => "VII",
            RotorModel::VIII => "VIII",
            RotorModel::Beta => "beta",
            RotorModel::Gamma => "gamma",
        };
        f.write_str(name)
    }
}

impl FromStr for RotorModel {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(RotorModel::I),
            "II" => Ok(RotorModel::II),
            "III" => Ok(RotorModel::III),
            "IV" => Ok(RotorModel::IV),
            "V" => Ok(RotorModel::V),
            "VI" => Ok(RotorModel::VI),
            "VII" => Ok(RotorModel::VII),
            "VIII" => Ok(RotorModel::VIII),
            "beta" => Ok(RotorModel::Beta),
            "gamma" => Ok(RotorModel::Gamma),
            other => Err(EnigmaError::UnknownRotorModel(other.to_string())),
        }
    }
}

/// Reflector (Umkehrwalze) models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectorModel {
    /// UKW-B.
    B,
    /// UKW-C.
    C,
}

impl fmt::Display for ReflectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectorModel::B => f.write_str("UKW-B"),
            ReflectorModel::C => f.write_str("UKW-C"),
        }
    }
}

impl FromStr for ReflectorModel {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" | "UKW-B" => Ok(ReflectorModel::B),
            "C" | "UKW-C" => Ok(ReflectorModel::C),
            other => Err(EnigmaError::UnknownReflector(other.to_string())),
        }
    }
}

/// Machine kind: three-rotor (Enigma I / M3) or four-rotor (M4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineKind {
    /// Three rotors plus reflector.
    M3,
    /// Four rotors, the leftmost a non-stepping Greek wheel.
    M4,
}

impl MachineKind {
    /// Number of rotor slots for this machine kind.
    pub fn rotor_count(self) -> usize {
        match self {
            MachineKind::M3 => 3,
            MachineKind::M4 => 4,
        }
    }
}

/// Per-slot rotor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorConfig {
    /// Which wheel sits in this slot.
    pub model: RotorModel,
    /// Ring setting (Ringstellung), 1..=26 as engraved on the ring.
    pub ring_setting: u8,
    /// Start position (Grundstellung) shown in the window, 'A'..='Z'.
    pub position: char,
}

impl RotorConfig {
    /// Convenience constructor.
    pub fn new(model: RotorModel, ring_setting: u8, position: char) -> Self {
        RotorConfig {
            model,
            ring_setting,
            position,
        }
    }
}

/// Full machine configuration, rotors listed left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Machine kind; must agree with the rotor list length.
    pub kind: MachineKind,
    /// Rotor slots, leftmost first.
    pub rotors: Vec<RotorConfig>,
    /// Reflector model.
    pub reflector: ReflectorModel,
    /// Plugboard pairs, each exactly two distinct letters (e.g. `"AZ"`).
    pub plugboard: Vec<String>,
}

impl Default for MachineConfig {
    /// The classic bench setup: wheels I, II, III left-to-right, UKW-B,
    /// all ring settings at 1, all positions at 'A', no plugboard leads.
    fn default() -> Self {
        MachineConfig {
            kind: MachineKind::M3,
            rotors: vec![
                RotorConfig::new(RotorModel::I, 1, 'A'),
                RotorConfig::new(RotorModel::II, 1, 'A'),
                RotorConfig::new(RotorModel::III, 1, 'A'),
            ],
            reflector: ReflectorModel::B,
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Checks the whole configuration against the machine's mechanical
    /// constraints.
    ///
    /// # Errors
    /// Returns the first violated rule:
    /// - rotor count must match the machine kind;
    /// - a four-rotor machine's leftmost slot must hold beta or gamma;
    /// - no wheel model may appear twice;
    /// - ring settings must lie in 1..=26, positions in 'A'..='Z';
    /// - plugboard pairs must satisfy the rules in
    ///   [`Plugboard`](crate::plugboard::Plugboard) construction
    ///   (at most 13 pairs, all letters distinct).
    pub(crate) fn validate(&self) -> Result<(), EnigmaError> {
        let expected = self.kind.rotor_count();
        if self.rotors.len() != expected {
            return Err(EnigmaError::RotorCountMismatch {
                expected,
                found: self.rotors.len(),
            });
        }

        if self.kind == MachineKind::M4 && !self.rotors[0].model.is_greek() {
            return Err(EnigmaError::GreekRotorRequired(self.rotors[0].model));
        }

        for (slot, rotor) in self.rotors.iter().enumerate() {
            if self.rotors[..slot].iter().any(|r| r.model == rotor.model) {
                return Err(EnigmaError::DuplicateRotor(rotor.model));
            }
            if !(1..=26).contains(&rotor.ring_setting) {
                return Err(EnigmaError::RingSettingOutOfRange {
                    slot,
                    value: rotor.ring_setting,
                });
            }
            if alphabet::idx(rotor.position).is_none() {
                return Err(EnigmaError::PositionNotALetter {
                    slot,
                    value: rotor.position,
                });
            }
        }

        Self::validate_plugboard(&self.plugboard)
    }

    /// Checks the plugboard pair list in isolation.
    pub(crate) fn validate_plugboard(pairs: &[String]) -> Result<(), EnigmaError> {
        if pairs.len() > 13 {
            return Err(EnigmaError::PlugboardTooManyPairs(pairs.len()));
        }

        let mut used = [false; 26];
        for pair in pairs {
            let mut chars = pair.chars();
            let (a, b) = match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => return Err(EnigmaError::PlugboardInvalidPair(pair.clone())),
            };
            let (na, nb) = match (alphabet::idx(a), alphabet::idx(b)) {
                (Some(na), Some(nb)) if na != nb => (na, nb),
                _ => return Err(EnigmaError::PlugboardInvalidPair(pair.clone())),
            };
            for (n, c) in [(na, a), (nb, b)] {
                if used[n as usize] {
                    return Err(EnigmaError::PlugboardDuplicateLetter(
                        c.to_ascii_uppercase(),
                    ));
                }
                used[n as usize] = true;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MachineConfig::default().validate().is_ok());
    }

    #[test]
    fn rotor_count_must_match_kind() {
        let mut config = MachineConfig::default();
        config.rotors.push(RotorConfig::new(RotorModel::IV, 1, 'A'));
        assert_eq!(
            config.validate(),
            Err(EnigmaError::RotorCountMismatch {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn m4_requires_greek_leftmost() {
        let config = MachineConfig {
            kind: MachineKind::M4,
            rotors: vec![
                RotorConfig::new(RotorModel::IV, 1, 'A'),
                RotorConfig::new(RotorModel::I, 1, 'A'),
                RotorConfig::new(RotorModel::II, 1, 'A'),
                RotorConfig::new(RotorModel::III, 1, 'A'),
            ],
            reflector: ReflectorModel::B,
            plugboard: Vec::new(),
        };
        assert_eq!(
            config.validate(),
            Err(EnigmaError::GreekRotorRequired(RotorModel::IV))
        );
    }

    #[test]
    fn m4_with_beta_leftmost_is_valid() {
        let config = MachineConfig {
            kind: MachineKind::M4,
            rotors: vec![
                RotorConfig::new(RotorModel::Beta, 1, 'A'),
                RotorConfig::new(RotorModel::I, 1, 'A'),
                RotorConfig::new(RotorModel::II, 1, 'A'),
                RotorConfig::new(RotorModel::III, 1, 'A'),
            ],
            reflector: ReflectorModel::B,
            plugboard: Vec::new(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn duplicate_rotor_model_rejected() {
        let mut config = MachineConfig::default();
        config.rotors[2].model = RotorModel::I;
        assert_eq!(
            config.validate(),
            Err(EnigmaError::DuplicateRotor(RotorModel::I))
        );
    }

    #[test]
    fn ring_setting_range_enforced() {
        let mut config = MachineConfig::default();
        config.rotors[1].ring_setting = 0;
        assert_eq!(
            config.validate(),
            Err(EnigmaError::RingSettingOutOfRange { slot: 1, value: 0 })
        );
        config.rotors[1].ring_setting = 27;
        assert_eq!(
            config.validate(),
            Err(EnigmaError::RingSettingOutOfRange { slot: 1, value: 27 })
        );
    }

    #[test]
    fn position_must_be_a_letter() {
        let mut config = MachineConfig::default();
        config.rotors[0].position = '3';
        assert_eq!(
            config.validate(),
            Err(EnigmaError::PositionNotALetter {
                slot: 0,
                value: '3'
            })
        );
    }

    #[test]
    fn plugboard_shared_letter_rejected() {
        let pairs = vec!["AB".to_string(), "AC".to_string()];
        assert_eq!(
            MachineConfig::validate_plugboard(&pairs),
            Err(EnigmaError::PlugboardDuplicateLetter('A'))
        );
    }

    #[test]
    fn plugboard_pair_shape_enforced() {
        for bad in ["A", "ABC", "AA", "A1", ""] {
            let pairs = vec![bad.to_string()];
            assert_eq!(
                MachineConfig::validate_plugboard(&pairs),
                Err(EnigmaError::PlugboardInvalidPair(bad.to_string())),
                "pair {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn plugboard_fourteen_pairs_rejected() {
        let pairs: Vec<String> = (0..14).map(|_| "AB".to_string()).collect();
        assert_eq!(
            MachineConfig::validate_plugboard(&pairs),
            Err(EnigmaError::PlugboardTooManyPairs(14))
        );
    }

    #[test]
    fn plugboard_full_thirteen_pairs_accepted() {
        let pairs: Vec<String> = (0..13)
            .map(|i| {
                let a = (b'A' + 2 * i) as char;
                let b = (b'A' + 2 * i + 1) as char;
                format!("{}{}", a, b)
            })
            .collect();
        assert!(MachineConfig::validate_plugboard(&pairs).is_ok());
    }

    #[test]
    fn rotor_model_round_trips_through_strings() {
        for name in ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "beta", "gamma"] {
            let model: RotorModel = name.parse().unwrap();
            assert_eq!(model.to_string(), name);
        }
    }

    #[test]
    fn unknown_names_rejected() {
        assert_eq!(
            "IX".parse::<RotorModel>(),
            Err(EnigmaError::UnknownRotorModel("IX".to_string()))
        );
        assert_eq!(
            "D".parse::<ReflectorModel>(),
            Err(EnigmaError::UnknownReflector("D".to_string()))
        );
    }

    #[test]
    fn reflector_accepts_short_and_long_names() {
        assert_eq!("B".parse::<ReflectorModel>(), Ok(ReflectorModel::B));
        assert_eq!("UKW-C".parse::<ReflectorModel>(), Ok(ReflectorModel::C));
    }
}
