//! Enigma: signal path and stepping mechanism.
//!
//! Composes the plugboard, entry wheel, rotor stack and reflector into the
//! fixed signal chain and owns the stepping state machine, including the
//! double-stepping anomaly of the middle rotor. Rotors hold no references
//! to each other; the machine alone decides which wheels advance.

use crate::alphabet;
use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::rotor::Rotor;
use crate::wiring;

/// Simulated Enigma machine.
///
/// # Signal path
///
/// ```text
/// key -> plugboard -> ETW -> rotors right-to-left -> reflector
///     -> rotors left-to-right -> ETW -> plugboard -> lamp
/// ```
///
/// The mechanism advances **before** the circuit closes, exactly as the key
/// press first moved the wheels on the physical machine. Because the
/// reflector makes the whole chain an involution, encoding a ciphertext
/// from the same starting configuration reproduces the plaintext.
///
/// The machine is single-session mutable state: concurrent use from several
/// threads must be serialized by the caller.
pub struct Enigma {
    config: MachineConfig,
    plugboard: Plugboard,
    entry_wheel: Rotor,
    /// Rotor stack, leftmost first (matching the operator's view).
    rotors: Vec<Rotor>,
    reflector: Rotor,
}

impl Enigma {
    /// Validates a configuration and builds the machine.
    ///
    /// # Errors
    /// Returns a configuration error (see [`EnigmaError`]) if the rotor
    /// count does not match the machine kind, a wheel model is duplicated,
    /// a four-rotor machine lacks a Greek wheel in the leftmost slot, a
    /// ring setting or position is out of range, or the plugboard pair
    /// list is illegal. No partially-built machine is ever returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::config::MachineConfig;
    /// use enigma::Enigma;
    ///
    /// let machine = Enigma::new(MachineConfig::default()).unwrap();
    /// assert_eq!(machine.displayed_letters(), "AAA");
    /// ```
    pub fn new(config: MachineConfig) -> Result<Self, EnigmaError> {
        config.validate()?;

        let plugboard = Plugboard::from_pairs(&config.plugboard)?;
        let entry_wheel = Rotor::fixed(&wiring::ETW);
        let reflector = Rotor::fixed(wiring::reflector_wiring(config.reflector));
        let rotors = Self::build_rotors(&config);

        Ok(Enigma {
            config,
            plugboard,
            entry_wheel,
            rotors,
            reflector,
        })
    }

    /// Encodes a single letter.
    ///
    /// The stepping mechanism runs once before the substitution, so the
    /// machine state advances on every accepted keystroke. Lowercase input
    /// is accepted and encoded as its uppercase form.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NonAlphabeticInput`] for anything outside
    /// A-Z / a-z. Rejected input does not move the rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::config::MachineConfig;
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(MachineConfig::default()).unwrap();
    /// assert_eq!(machine.encode_letter('A').unwrap(), 'B');
    /// assert_eq!(machine.displayed_letters(), "AAB");
    /// ```
    pub fn encode_letter(&mut self, letter: char) -> Result<char, EnigmaError> {
        let n = alphabet::idx(letter).ok_or(EnigmaError::NonAlphabeticInput(letter))?;
        self.step();
        Ok(alphabet::chr(self.scramble(n)))
    }

    /// Encodes a message letter by letter.
    ///
    /// The whole text is validated before any rotor moves: an empty text or
    /// any non-alphabetic character rejects the entire operation and leaves
    /// the machine state untouched.
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyMessage`] for an empty text and
    /// [`EnigmaError::NonAlphabeticInput`] for the first character outside
    /// A-Z / a-z.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::config::MachineConfig;
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(MachineConfig::default()).unwrap();
    /// let ciphertext = machine.encode_message("AAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap();
    /// assert_eq!(ciphertext, "BDZGOWCXLTKSBTMCDLPBMUQOFX");
    /// ```
    pub fn encode_message(&mut self, text: &str) -> Result<String, EnigmaError> {
        if text.is_empty() {
            return Err(EnigmaError::EmptyMessage);
        }
        let mut indices = Vec::with_capacity(text.len());
        for c in text.chars() {
            indices.push(alphabet::idx(c).ok_or(EnigmaError::NonAlphabeticInput(c))?);
        }

        let mut out = String::with_capacity(indices.len());
        for n in indices {
            self.step();
            out.push(alphabet::chr(self.scramble(n)));
        }
        Ok(out)
    }

    /// Returns the letters visible in the rotor windows, leftmost first.
    pub fn displayed_letters(&self) -> String {
        self.rotors.iter().map(Rotor::current_display).collect()
    }

    /// Restores the initial rotor positions from the stored configuration.
    ///
    /// The configuration was validated at construction and is not
    /// revalidated; the plugboard and fixed wheels carry no mutable state
    /// and are kept as built.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::config::MachineConfig;
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(MachineConfig::default()).unwrap();
    /// let first = machine.encode_message("TURING").unwrap();
    /// machine.reset();
    /// assert_eq!(machine.encode_message("TURING").unwrap(), first);
    /// ```
    pub fn reset(&mut self) {
        self.rotors = Self::build_rotors(&self.config);
    }

    /// Returns the configuration the machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    fn build_rotors(config: &MachineConfig) -> Vec<Rotor> {
        config
            .rotors
            .iter()
            .map(|rc| {
                // Ranges were checked by MachineConfig::validate.
                let position = alphabet::idx(rc.position).unwrap_or(0);
                Rotor::rotating(
                    wiring::rotor_wiring(rc.model),
                    rc.ring_setting - 1,
                    position,
                )
            })
            .collect()
    }

    /// Advances the mechanism one keystroke.
    ///
    /// Turnover conditions are evaluated on the positions as they stand
    /// before this keystroke, then all advances apply: a middle rotor at
    /// its notch drives the left rotor and steps itself again (the
    /// double-stepping anomaly); otherwise a right rotor at its notch
    /// drives the middle rotor; the right rotor always steps. The Greek
    /// wheel of a four-rotor machine sits left of the stepping rotors and
    /// never moves.
    fn step(&mut self) {
        let right = self.rotors.len() - 1;
        let middle = right - 1;
        let left = right - 2;

        if self.rotors[middle].at_turnover() {
            self.rotors[left].advance();
            self.rotors[middle].advance();
        } else if self.rotors[right].at_turnover() {
            self.rotors[middle].advance();
        }
        self.rotors[right].advance();
    }

    /// Pushes one alphabet index through the closed circuit with the
    /// rotors frozen at their current positions.
    fn scramble(&self, n: u8) -> u8 {
        let n = self.plugboard.exchange(n);
        let n = self.entry_wheel.forward(n);
        let n = self.rotors.iter().rev().fold(n, |n, r| r.forward(n));
        let n = self.reflector.forward(n);
        let n = self.rotors.iter().fold(n, |n, r| r.reverse(n));
        let n = self.entry_wheel.reverse(n);
        self.plugboard.exchange(n)
    }

    /// Number of rotors on the spindle (3 or 4).
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }
}

impl std::fmt::Debug for Enigma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enigma")
            .field("kind", &self.config.kind)
            .field("windows", &self.displayed_letters())
            .finish()
    }
}
