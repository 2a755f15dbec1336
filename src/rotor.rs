//! Rotor: a substitution wheel with ring setting and rotational position.
//!
//! A `Rotor` models one wheel on the spindle. The fixed internal wiring
//! rotates relative to the stationary entry contacts, so every substitution
//! shifts the signal into wiring coordinates on entry and back out into
//! contact coordinates on exit. The same type also serves for the entry
//! wheel and the reflector, which sit on the spindle but never rotate.

use crate::alphabet;
use crate::wiring::Wiring;

/// One wheel on the spindle: wiring reference plus rotational state.
pub(crate) struct Rotor {
    /// Forward substitution, wiring coordinates: index -> image.
    forward_map: [u8; 26],
    /// Inverse of `forward_map`, for the return path from the reflector.
    reverse_map: [u8; 26],
    /// Bit `n` set iff the window letter `n` is a turnover position.
    turnover_mask: u32,
    /// Ring setting, already reduced to 0..=25.
    ring_setting: u8,
    /// Current rotational position, 0..=25. Mutated by `advance`.
    position: u8,
    /// False for the entry wheel and reflector: substitution ignores
    /// position and `advance` is never called on them.
    rotating: bool,
}

impl Rotor {
    /// Builds a rotating rotor from a wiring entry.
    ///
    /// # Parameters
    /// - `wiring`: Static wiring table entry for the wheel model.
    /// - `ring_setting`: Ring offset, 0..=25 (already converted from the
    ///   1-based operator setting).
    /// - `position`: Initial window position, 0..=25.
    pub(crate) fn rotating(wiring: &'static Wiring, ring_setting: u8, position: u8) -> Self {
        Self::build(wiring, ring_setting, position, true)
    }

    /// Builds a fixed wheel (entry wheel or reflector): offset pinned to
    /// zero, never advanced by the stepping mechanism.
    pub(crate) fn fixed(wiring: &'static Wiring) -> Self {
        Self::build(wiring, 0, 0, false)
    }

    fn build(wiring: &'static Wiring, ring_setting: u8, position: u8, rotating: bool) -> Self {
        let mut forward_map = [0u8; 26];
        let mut reverse_map = [0u8; 26];
        for (i, &b) in wiring.substitution.iter().enumerate() {
            let image = b - b'A';
            forward_map[i] = image;
            reverse_map[image as usize] = i as u8;
        }

        let mut turnover_mask = 0u32;
        for c in wiring.turnover.chars() {
            turnover_mask |= 1 << (c as u8 - b'A');
        }

        Rotor {
            forward_map,
            reverse_map,
            turnover_mask,
            ring_setting,
            position,
            rotating,
        }
    }

    /// Substitutes an alphabet index along the path toward the reflector.
    ///
    /// The signal enters at a fixed contact, so it is shifted by the ring
    /// setting and the current rotation into wiring coordinates, passed
    /// through the permutation, and shifted back out.
    pub(crate) fn forward(&self, n: u8) -> u8 {
        let offset = self.offset();
        let n = alphabet::sub(n, self.ring_setting);
        let n = alphabet::add(n, offset);
        let n = self.forward_map[n as usize];
        let n = alphabet::sub(n, offset);
        alphabet::add(n, self.ring_setting)
    }

    /// Substitutes an alphabet index along the return path from the
    /// reflector. Exact inverse of [`forward`](Self::forward) for any
    /// fixed rotor state.
    pub(crate) fn reverse(&self, n: u8) -> u8 {
        let offset = self.offset();
        let n = alphabet::sub(n, self.ring_setting);
        let n = alphabet::add(n, offset);
        let n = self.reverse_map[n as usize];
        let n = alphabet::sub(n, offset);
        alphabet::add(n, self.ring_setting)
    }

    /// Letter currently visible in the operator window.
    pub(crate) fn current_display(&self) -> char {
        alphabet::chr(self.position)
    }

    /// True iff the window shows a turnover letter, i.e. the wheel's notch
    /// is engaged and the next keystroke will drive the wheel to its left.
    /// Always false for wheels without a notch.
    pub(crate) fn at_turnover(&self) -> bool {
        self.turnover_mask & (1 << self.position) != 0
    }

    /// Advances the wheel one step. The stepping policy in the machine
    /// decides when to call this; the rotor itself never cascades.
    pub(crate) fn advance(&mut self) {
        self.position = alphabet::add(self.position, 1);
    }

    fn offset(&self) -> u8 {
        if self.rotating {
            self.position
        } else {
            0
        }
    }
}
