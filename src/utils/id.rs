use sha2::{Digest, Sha256};

/* Records have no id in the exports, so it is deterministically created from the
fields that make them unique. Importing the same file twice gives the same ids. */
pub fn generate_id(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update(b"|");
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_deterministic() {
        let first = generate_id(&["2024-01-02", "IT0000000001", "-1000"]);
        let second = generate_id(&["2024-01-02", "IT0000000001", "-1000"]);
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_generate_id_separates_parts() {
        assert_ne!(generate_id(&["ab", "c"]), generate_id(&["a", "bc"]));
    }
}
