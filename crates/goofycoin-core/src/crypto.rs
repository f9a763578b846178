//! Cryptographic primitives: ECDSA over NIST P-256 and SHA-256 hashing.
//!
//! The free functions [`generate_keypair`], [`sign`] and [`verify`] form the
//! key service. They hold no state; the only side effect is drawing entropy
//! from the operating system. [`generate_keypair_with`] takes the random
//! source explicitly.

use p256::ecdsa::signature::{RandomizedSigner, Verifier};
use p256::ecdsa::{Signature as EcdsaSignature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::CoreError;

/// Attempts at drawing a valid P-256 scalar before giving up on the random source.
pub const MAX_KEYGEN_ATTEMPTS: usize = 8;

/// A 32-byte SHA-256 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sha256Hash(pub [u8; 32]);

impl Sha256Hash {
    /// Compute the SHA-256 hash of data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA256({}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Sha256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Sha256Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A P-256 public key.
#[derive(Clone)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// SEC1 encoding (compressed, 33 bytes).
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }

    /// Parse a SEC1-encoded point (compressed or uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(Self)
            .map_err(|e| CoreError::InvalidPublicKey(e.to_string()))
    }

    /// Convert to hex string (compressed SEC1).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_sec1_bytes())
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s).map_err(|e| CoreError::InvalidPublicKey(e.to_string()))?;
        Self::from_sec1_bytes(&bytes)
    }

    /// Verify a signature over a message. See [`verify`].
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool, CoreError> {
        verify(self, message, signature)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_sec1_bytes() == other.to_sec1_bytes()
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P256Pub({}...)", &self.to_hex()[..16])
    }
}

/// A P-256 private key. Never serialized, never printed.
#[derive(Clone)]
pub struct PrivateKey(SigningKey);

impl PrivateKey {
    /// Derive the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key().clone())
    }

    /// Sign a message. See [`sign`].
    pub fn sign(&self, message: &[u8]) -> Result<Signature, CoreError> {
        sign(self, message)
    }
}

// Scalars and points are in bijection, so comparing public keys avoids
// touching secret bytes.
impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("P256Priv(<redacted>)")
    }
}

/// A 64-byte ECDSA signature in fixed `r || s` form.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(#[serde(with = "signature_bytes")] pub [u8; 64]);

impl Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, rejecting anything that is not exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; 64] = bytes.try_into().map_err(|_| {
            CoreError::InvalidSignatureEncoding(format!("expected 64 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes =
            hex::decode(s).map_err(|e| CoreError::InvalidSignatureEncoding(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    fn to_ecdsa(self) -> Result<EcdsaSignature, CoreError> {
        EcdsaSignature::from_slice(&self.0)
            .map_err(|_| CoreError::InvalidSignatureEncoding("r or s out of range".into()))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sig({}...)", &self.to_hex()[..8])
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for Signature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

// serde only derives arrays up to 32 elements.
mod signature_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 64], D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 64 signature bytes"))
    }
}

/// A P-256 keypair.
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    private: PrivateKey,
    public: PublicKey,
}

impl Keypair {
    /// Generate a new random keypair. See [`generate_keypair`].
    pub fn generate() -> Result<Self, CoreError> {
        generate_keypair()
    }

    /// Create from a 32-byte secret scalar.
    ///
    /// Fails if the seed is zero or not below the curve order.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, CoreError> {
        SigningKey::from_slice(seed)
            .map(Self::from_signing_key)
            .map_err(|_| CoreError::InvalidPrivateKey("seed is not a valid P-256 scalar".into()))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let public = PublicKey(signing_key.verifying_key().clone());
        Self {
            private: PrivateKey(signing_key),
            public,
        }
    }

    /// Get the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Get the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Split into `(private, public)`.
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }

    /// Sign a message with the private half.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, CoreError> {
        sign(&self.private, message)
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.public)
    }
}

/// A key-generation function, as held by an identity registry.
pub type KeySource = fn() -> Result<Keypair, CoreError>;

/// Generate a fresh P-256 keypair from the OS random source.
pub fn generate_keypair() -> Result<Keypair, CoreError> {
    generate_keypair_with(&mut OsRng)
}

/// Generate a keypair from `rng`.
///
/// A failing source, or one that yields no valid scalar within
/// [`MAX_KEYGEN_ATTEMPTS`] draws, is reported as `CryptoUnavailable`.
pub fn generate_keypair_with<R>(rng: &mut R) -> Result<Keypair, CoreError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let mut seed = [0u8; 32];
    for _ in 0..MAX_KEYGEN_ATTEMPTS {
        rng.try_fill_bytes(&mut seed)
            .map_err(|e| CoreError::CryptoUnavailable(e.to_string()))?;

        // Zero and values >= n are rejected; draw again.
        if let Ok(signing_key) = SigningKey::from_slice(&seed) {
            seed.fill(0);
            return Ok(Keypair::from_signing_key(signing_key));
        }
    }
    seed.fill(0);
    Err(CoreError::CryptoUnavailable(
        "random source produced no valid P-256 scalar".into(),
    ))
}

/// Produce a randomized ECDSA/SHA-256 signature over `payload`.
pub fn sign(private_key: &PrivateKey, payload: &[u8]) -> Result<Signature, CoreError> {
    let signature: EcdsaSignature = private_key
        .0
        .try_sign_with_rng(&mut OsRng, payload)
        .map_err(|e| CoreError::SigningFailed(e.to_string()))?;

    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(&signature.to_bytes());
    Ok(Signature(bytes))
}

/// Check `signature` over `payload` against `public_key`.
///
/// Returns `Ok(false)` for any mismatch. Only a structurally malformed
/// signature yields an error.
pub fn verify(
    public_key: &PublicKey,
    payload: &[u8],
    signature: &Signature,
) -> Result<bool, CoreError> {
    let signature = signature.to_ecdsa()?;
    Ok(public_key.0.verify(payload, &signature).is_ok())
}
