//! Passphrase-based envelope encryption.
//!
//! # Format
//!
//! ```text
//! IV:<32 lowercase hex digits>
//! DATA:<standard base64 ciphertext>
//! ```
//!
//! The key is derived with scrypt (N = 2^14, r = 8, p = 1) over a fixed
//! salt and the payload is AES-256-CBC with PKCS#7 padding. The fixed salt
//! keeps files written by earlier releases of the tool readable.

use std::fmt;

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{ForgeError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Length of the derived key in bytes.
pub const KEY_LEN: usize = 32;

/// Length of the initialization vector in bytes.
pub const IV_LEN: usize = 16;

const SCRYPT_SALT: &[u8] = b"salt";
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

const IV_PREFIX: &str = "IV:";
const DATA_PREFIX: &str = "DATA:";

/// Derive the AES key for `passphrase`.
///
/// # Errors
///
/// Returns [`ForgeError::Encryption`] if the scrypt parameters are rejected.
pub fn derive_key(passphrase: &str) -> Result<[u8; KEY_LEN]> {
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN).map_err(|e| {
        ForgeError::Encryption {
            message: e.to_string(),
        }
    })?;

    let mut key = [0u8; KEY_LEN];
    scrypt::scrypt(passphrase.as_bytes(), SCRYPT_SALT, &params, &mut key).map_err(|e| {
        ForgeError::Encryption {
            message: e.to_string(),
        }
    })?;
    Ok(key)
}

/// An encrypted payload and the IV it was sealed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    iv: [u8; IV_LEN],
    data: Vec<u8>,
}

impl Envelope {
    /// Encrypt `plaintext` with a fresh random IV.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Encryption`] if key derivation fails.
    pub fn seal(plaintext: &[u8], passphrase: &str) -> Result<Self> {
        Self::seal_with_iv(plaintext, passphrase, rand::random())
    }

    /// Encrypt `plaintext` with the given IV.
    pub fn seal_with_iv(plaintext: &[u8], passphrase: &str, iv: [u8; IV_LEN]) -> Result<Self> {
        let key = derive_key(passphrase)?;
        let cipher = Aes256CbcEnc::new_from_slices(&key, &iv).map_err(|e| ForgeError::Encryption {
            message: e.to_string(),
        })?;
        let data = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);
        Ok(Self { iv, data })
    }

    /// Decrypt the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Decryption`] for a wrong passphrase or
    /// corrupted data.
    pub fn open(&self, passphrase: &str) -> Result<Vec<u8>> {
        let key = derive_key(passphrase)?;
        let cipher =
            Aes256CbcDec::new_from_slices(&key, &self.iv).map_err(|e| ForgeError::Decryption {
                message: e.to_string(),
            })?;
        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(&self.data)
            .map_err(|_| ForgeError::Decryption {
                message: "wrong key or corrupted data".to_string(),
            })
    }

    /// Parse the text form. Returns `None` if the layout is not recognized.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix(IV_PREFIX)?;
        let (iv_hex, rest) = rest.split_once('\n')?;
        if iv_hex.is_empty() || !iv_hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return None;
        }
        let iv: [u8; IV_LEN] = hex::decode(iv_hex).ok()?.try_into().ok()?;

        let start = rest.find(DATA_PREFIX)? + DATA_PREFIX.len();
        let encoded = rest[start..].trim();
        if encoded.is_empty() {
            return None;
        }
        let data = STANDARD.decode(encoded).ok()?;

        Some(Self { iv, data })
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{IV_PREFIX}{}\n{DATA_PREFIX}{}",
            hex::encode(self.iv),
            STANDARD.encode(&self.data)
        )
    }
}
