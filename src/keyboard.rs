//! Keyboard adjacency table used to generate realistic typing errors.
//!
//! Misspellings produced by real users are dominated by slips onto physically
//! nearby keys, so keyboard-adjacent substitution draws its replacement from
//! this table rather than from the whole alphabet. The table is pure data
//! (a match over characters), read-only, and shared freely across callers.

use rand::Rng;

/// The QWERTY letter keys, used as the candidate alphabet for character
/// insertion and for uniform substitution.
pub const KEYS: [char; 26] = [
    'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', 'a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l',
    'z', 'x', 'c', 'v', 'b', 'n', 'm',
];

/// QWERTY keyboard layout queries.
pub struct Qwerty;

impl Qwerty {
    /// Get nearby keys on a QWERTY keyboard for a given character.
    pub fn nearby_keys(ch: char) -> Vec<char> {
        match ch.to_ascii_lowercase() {
            'q' => vec!['w', 'a', 's'],
            'w' => vec!['q', 'e', 'a', 's', 'd'],
            'e' => vec!['w', 'r', 's', 'd', 'f'],
            'r' => vec!['e', 't', 'd', 'f', 'g'],
            't' => vec!['r', 'y', 'f', 'g', 'h'],
            'y' => vec!['t', 'u', 'g', 'h', 'j'],
            'u' => vec!['y', 'i', 'h', 'j', 'k'],
            'i' => vec!['u', 'o', 'j', 'k', 'l'],
            'o' => vec!['i', 'p', 'k', 'l'],
            'p' => vec!['o', 'l'],
            'a' => vec!['q', 'w', 's', 'z'],
            's' => vec!['a', 'd', 'w', 'e', 'z', 'x'],
            'd' => vec!['s', 'f', 'e', 'r', 'x', 'c'],
            'f' => vec!['d', 'g', 'r', 't', 'c', 'v'],
            'g' => vec!['f', 'h', 't', 'y', 'v', 'b'],
            'h' => vec!['g', 'j', 'y', 'u', 'b', 'n'],
            'j' => vec!['h', 'k', 'u', 'i', 'n', 'm'],
            'k' => vec!['j', 'l', 'i', 'o', 'm'],
            'l' => vec!['k', 'o', 'p', 'm'],
            'z' => vec!['a', 's', 'x'],
            'x' => vec!['z', 'c', 's', 'd'],
            'c' => vec!['x', 'v', 'd', 'f'],
            'v' => vec!['c', 'b', 'f', 'g'],
            'b' => vec!['v', 'n', 'g', 'h'],
            'n' => vec!['b', 'm', 'h', 'j'],
            'm' => vec!['n', 'j', 'k', 'l'],
            _ => vec![],
        }
    }

    /// Pick a uniformly random key.
    pub fn random_key<R: Rng>(rng: &mut R) -> char {
        KEYS[rng.random_range(0..KEYS.len())]
    }

    /// Pick a uniformly random key different from `exclude`.
    pub fn random_key_excluding<R: Rng>(rng: &mut R, exclude: char) -> char {
        let candidates: Vec<char> = KEYS
            .iter()
            .copied()
            .filter(|&k| k != exclude.to_ascii_lowercase())
            .collect();
        candidates[rng.random_range(0..candidates.len())]
    }

    /// Pick a random key physically adjacent to `ch`.
    ///
    /// Characters without an adjacency entry (digits, punctuation) fall back
    /// to a uniform choice over the full key set, excluding `ch` itself.
    pub fn random_neighbor<R: Rng>(rng: &mut R, ch: char) -> char {
        let nearby = Self::nearby_keys(ch);
        if nearby.is_empty() {
            Self::random_key_excluding(rng, ch)
        } else {
            nearby[rng.random_range(0..nearby.len())]
        }
    }
}
