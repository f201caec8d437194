//! Symmetric encryption of `.env` files.

mod envelope;
mod files;

pub use envelope::{derive_key, Envelope, IV_LEN, KEY_LEN};
pub use files::{
    decrypt_file, decrypted_path, encrypt_file, encrypted_path, Direction, DECRYPTED_EXTENSION,
    ENCRYPTED_EXTENSION,
};
