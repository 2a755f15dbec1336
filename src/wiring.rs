//! Static rotor and reflector wiring tables.
//!
//! One entry per wheel model: the substitution permutation (given as the
//! image of A..Z, in order) and the turnover letters at which the wheel's
//! notch engages the next rotor's ratchet. Tables follow the Enigma I /
//! M3 Army / M4 Navy wheels documented at
//! <http://www.cryptomuseum.com/crypto/enigma/wiring.htm>.
//!
//! Entries are shared, read-only, process-wide data; rotors reference them
//! and never mutate them.

use crate::config::{ReflectorModel, RotorModel};

/// Wiring of a single wheel model.
pub(crate) struct Wiring {
    /// Substitution permutation: byte `i` is the image of letter `i`.
    pub(crate) substitution: &'static [u8; 26],
    /// Window letters at which the notch engages (empty for wheels
    /// without a notch).
    pub(crate) turnover: &'static str,
}

/// Entry wheel (ETW): identity substitution, no notch.
pub(crate) static ETW: Wiring = Wiring {
    substitution: b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    turnover: "",
};

static ROTOR_I: Wiring = Wiring {
    substitution: b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    turnover: "Q",
};

static ROTOR_II: Wiring = Wiring {
    substitution: b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
    turnover: "E",
};

static ROTOR_III: Wiring = Wiring {
    substitution: b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
    turnover: "V",
};

static ROTOR_IV: Wiring = Wiring {
    substitution: b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
    turnover: "J",
};

static ROTOR_V: Wiring = Wiring {
    substitution: b"VZBRGITYUPSDNHLXAWMJQOFECK",
    turnover: "Z",
};

// The naval wheels VI-VIII carry two notches each.
static ROTOR_VI: Wiring = Wiring {
    substitution: b"JPGVOUMFYQBENHZRDKASXLICTW",
    turnover: "ZM",
};

static ROTOR_VII: Wiring = Wiring {
    substitution: b"NZJHGRCXMYSWBOUFAIVLPEKQDT",
    turnover: "ZM",
};

static ROTOR_VIII: Wiring = Wiring {
    substitution: b"FKQHTLXOCBJSPDZRAMEWNIUYGV",
    turnover: "ZM",
};

// Greek wheels for the leftmost M4 slot. They have no notch and are never
// driven by the stepping mechanism.
static ROTOR_BETA: Wiring = Wiring {
    substitution: b"LEYJVCNIXWPBQMDRTAKZGFUHOS",
    turnover: "",
};

static ROTOR_GAMMA: Wiring = Wiring {
    substitution: b"FSOKANUERHMBTIYCWLQPZXVGJD",
    turnover: "",
};

static UKW_B: Wiring = Wiring {
    substitution: b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
    turnover: "",
};

static UKW_C: Wiring = Wiring {
    substitution: b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
    turnover: "",
};

/// Returns the wiring entry for a rotor model.
pub(crate) fn rotor_wiring(model: RotorModel) -> &'static Wiring {
    match model {
        RotorModel::I => &ROTOR_I,
        RotorModel::II => &ROTOR_II,
        RotorModel::III => &ROTOR_III,
        RotorModel::IV => &ROTOR_IV,
        RotorModel::V => &ROTOR_V,
        RotorModel::VI => &ROTOR_VI,
        RotorModel::VII => &ROTOR_VII,
        RotorModel::VIII => &ROTOR_VIII,
        RotorModel::Beta => &ROTOR_BETA,
        RotorModel::Gamma => &ROTOR_GAMMA,
    }
}

/// Returns the wiring entry for a reflector model.
pub(crate) fn reflector_wiring(model: ReflectorModel) -> &'static Wiring {
    match model {
        ReflectorModel::B => &UKW_B,
        ReflectorModel::C => &UKW_C,
    }
}
