//! File-level encryption and decryption.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::envelope::Envelope;
use crate::error::{ForgeError, Result};

/// Extension appended to encrypted files.
pub const ENCRYPTED_EXTENSION: &str = "enc";

/// Extension used for decrypted output.
pub const DECRYPTED_EXTENSION: &str = "dec";

/// Direction of a batch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to envelope.
    Encrypt,
    /// Envelope to plaintext.
    Decrypt,
}

impl Direction {
    /// Noun used in operator messages ("Encryption").
    pub fn noun(self) -> &'static str {
        match self {
            Direction::Encrypt => "Encryption",
            Direction::Decrypt => "Decryption",
        }
    }

    /// Past participle used in operator messages ("encrypted").
    pub fn past(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypted",
            Direction::Decrypt => "decrypted",
        }
    }

    /// Where the result for `file` is written.
    pub fn output_path(self, file: &Path) -> PathBuf {
        match self {
            Direction::Encrypt => encrypted_path(file),
            Direction::Decrypt => decrypted_path(file),
        }
    }

    /// Process one file, returning the written path.
    ///
    /// # Errors
    ///
    /// See [`encrypt_file`] and [`decrypt_file`].
    pub fn apply(self, file: &Path, passphrase: &str) -> Result<PathBuf> {
        match self {
            Direction::Encrypt => encrypt_file(file, passphrase),
            Direction::Decrypt => decrypt_file(file, passphrase),
        }
    }
}

/// `secrets.env` → `secrets.env.enc`.
pub fn encrypted_path(file: &Path) -> PathBuf {
    append_extension(file, ENCRYPTED_EXTENSION)
}

/// `secrets.env.enc` → `secrets.env.dec`; anything else gets `.dec` appended.
pub fn decrypted_path(file: &Path) -> PathBuf {
    if file.extension().is_some_and(|ext| ext == ENCRYPTED_EXTENSION) {
        file.with_extension(DECRYPTED_EXTENSION)
    } else {
        append_extension(file, DECRYPTED_EXTENSION)
    }
}

fn append_extension(file: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(file.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(ForgeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read(path).map_err(|e| ForgeError::io("read", path, e))
}

/// Encrypt `file` into `<file>.enc`.
///
/// # Errors
///
/// Returns [`ForgeError::FileNotFound`] for a missing input, IO errors with
/// path context, or [`ForgeError::Encryption`].
pub fn encrypt_file(file: &Path, passphrase: &str) -> Result<PathBuf> {
    let plaintext = read_input(file)?;
    let envelope = Envelope::seal(&plaintext, passphrase)?;

    let output = encrypted_path(file);
    fs::write(&output, envelope.to_string()).map_err(|e| ForgeError::io("write", &output, e))?;
    debug!(input = %file.display(), output = %output.display(), "encrypted file");

    Ok(output)
}

/// Decrypt an envelope file into its `.dec` counterpart.
///
/// # Errors
///
/// Returns [`ForgeError::FileNotFound`] for a missing input,
/// [`ForgeError::InvalidEnvelope`] if the file is not an envelope, or
/// [`ForgeError::Decryption`] for a wrong key.
pub fn decrypt_file(file: &Path, passphrase: &str) -> Result<PathBuf> {
    let bytes = read_input(file)?;
    let text = String::from_utf8(bytes).map_err(|_| ForgeError::InvalidEnvelope {
        path: file.to_path_buf(),
    })?;
    let envelope = Envelope::parse(&text).ok_or_else(|| ForgeError::InvalidEnvelope {
        path: file.to_path_buf(),
    })?;
    let plaintext = envelope.open(passphrase)?;

    let output = decrypted_path(file);
    fs::write(&output, plaintext).map_err(|e| ForgeError::io("write", &output, e))?;
    debug!(input = %file.display(), output = %output.display(), "decrypted file");

    Ok(output)
}
