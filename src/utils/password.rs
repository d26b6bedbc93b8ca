use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a password for storage. The original system stored plaintext; every
/// new or re-registered account gets a bcrypt hash instead.
pub fn hash_password(plain: &str) -> Result<String, String> {
    hash(plain, DEFAULT_COST).map_err(|e| format!("Failed to hash password: {}", e))
}

/// Verify a login attempt against the stored hash. Bcrypt's comparison is
/// constant-time internally.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}
