//! Random salt generation for secret-like fields.
//!
//! Salts are drawn with `rand::thread_rng` for convenience. They are a
//! starting point for local and CI installs, not a hardened secret source.

use crate::environment::ResolvedEnvironment;
use rand::Rng;

/// Default number of characters in a generated salt.
pub const DEFAULT_SALT_LENGTH: usize = 64;

/// Characters a salt is drawn from: letters, digits and punctuation.
///
/// Space appears in both punctuation groups, so the alphabet is 93 bytes
/// long and a space is drawn twice as often as any other character.
pub const SALT_ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    "! @#$%^&*()",
    "-_ []{}<>~`+=,.;:/?|",
);

/// Generate a string of exactly `length` characters, each picked
/// independently and uniformly from [`SALT_ALPHABET`].
pub fn generate_salt(length: usize) -> String {
    let alphabet = SALT_ALPHABET.as_bytes();
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Overwrite every key in `keys` with its own freshly generated salt.
pub fn apply_salts(env: &mut ResolvedEnvironment, keys: &[String], length: usize) {
    for key in keys {
        env.set(key.as_str(), generate_salt(length));
    }
    tracing::debug!(count = keys.len(), length, "generated salts");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Value;

    #[test]
    fn zero_length_salt_is_empty() {
        assert_eq!(generate_salt(0), "");
    }

    #[test]
    fn salt_has_requested_length_and_alphabet() {
        let salt = generate_salt(DEFAULT_SALT_LENGTH);

        assert_eq!(salt.chars().count(), 64);
        assert!(salt.chars().all(|c| SALT_ALPHABET.contains(c)));
    }

    #[test]
    fn consecutive_salts_differ() {
        let mut previous = generate_salt(64);
        for _ in 0..100 {
            let next = generate_salt(64);
            assert_ne!(previous, next);
            previous = next;
        }
    }

    #[test]
    fn alphabet_is_ascii() {
        assert!(SALT_ALPHABET.is_ascii());
        assert_eq!(SALT_ALPHABET.len(), 93);
    }

    #[test]
    fn apply_salts_overwrites_each_key_independently() {
        let mut env = ResolvedEnvironment::new();
        env.set("AUTH_KEY", "");
        env.set("NONCE_KEY", "");
        env.set("WP_ENV", "production");

        let keys = vec!["AUTH_KEY".to_string(), "NONCE_KEY".to_string()];
        apply_salts(&mut env, &keys, 32);

        let auth = env.get("AUTH_KEY").unwrap().render();
        let nonce = env.get("NONCE_KEY").unwrap().render();
        assert_eq!(auth.len(), 32);
        assert_eq!(nonce.len(), 32);
        assert_ne!(auth, nonce);
        assert_eq!(env.get("WP_ENV"), Some(&Value::from("production")));
    }
}
