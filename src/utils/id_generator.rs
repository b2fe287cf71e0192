//! Minisite id generation.

use rand::Rng;

/// Length of generated minisite ids.
const ID_LENGTH: usize = 24;

const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// Generates a random 24-character lowercase hex minisite id.
///
/// The id space (16^24) makes collisions practically impossible; the unique
/// index on the id column is the backstop.
pub fn generate_minisite_id() -> String {
    let mut rng = rand::rng();

    (0..ID_LENGTH)
        .map(|_| HEX_CHARS[rng.random_range(0..HEX_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_length() {
        assert_eq!(generate_minisite_id().len(), 24);
    }

    #[test]
    fn test_id_is_lowercase_hex() {
        let id = generate_minisite_id();
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            ids.insert(generate_minisite_id());
        }
        assert_eq!(ids.len(), 1000);
    }
}
