use sha2::{Digest, Sha256};

use crate::model::language::Language;

pub fn hash_norm(language: Language, norm: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(language.code().as_bytes());
    hasher.update(b"\n");
    hasher.update(norm.as_bytes());
    hex::encode(hasher.finalize())
}
