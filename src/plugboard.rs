//! Plugboard (Steckerbrett): symmetric pairwise letter swap.
//!
//! Each patch cable exchanges two letters in both directions, so a single
//! self-inverse mapping serves the inbound and the outbound pass. Letters
//! without a cable map to themselves.

use crate::alphabet;
use crate::config::MachineConfig;
use crate::error::EnigmaError;

/// Self-inverse letter mapping built once from the configured pair list.
pub(crate) struct Plugboard {
    mapping: [u8; 26],
}

impl Plugboard {
    /// Builds a plugboard from unordered letter pairs.
    ///
    /// # Errors
    /// Rejects more than 13 pairs, pairs that are not exactly two distinct
    /// letters, and letters appearing in more than one pair.
    pub(crate) fn from_pairs(pairs: &[String]) -> Result<Self, EnigmaError> {
        MachineConfig::validate_plugboard(pairs)?;

        let mut mapping = [0u8; 26];
        for (i, slot) in mapping.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for pair in pairs {
            let mut chars = pair.chars();
            // Shape already checked by validate_plugboard.
            let a = chars.next().and_then(alphabet::idx).unwrap_or(0);
            let b = chars.next().and_then(alphabet::idx).unwrap_or(0);
            mapping[a as usize] = b;
            mapping[b as usize] = a;
        }
        Ok(Plugboard { mapping })
    }

    /// Swaps an alphabet index through the patch cables. The mapping is an
    /// involution, so the same call serves both signal directions.
    pub(crate) fn exchange(&self, n: u8) -> u8 {
        self.mapping[n as usize]
    }
}

impl std::fmt::Debug for Plugboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters: String = self.mapping.iter().map(|&n| alphabet::chr(n)).collect();
        f.debug_struct("Plugboard")
            .field("mapping", &letters)
            .finish()
    }
}
