//! Identity resolution: the key a wallpaper's tag row is stored under.

use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Chunk size used when hashing file contents.
pub const BUF_SIZE: usize = 1024;

/// Where a wallpaper's identity comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// A user-chosen opaque key, used as-is.
    Key(String),
    /// A file whose contents are hashed to produce the key.
    File(PathBuf),
}

impl Identity {
    /// Produce the lookup key.
    ///
    /// Explicit keys never touch the filesystem. Files are hashed with MD5.
    pub fn resolve(&self) -> Result<String> {
        match self {
            Self::Key(key) => Ok(key.clone()),
            Self::File(path) => file_digest(path),
        }
    }
}

/// Lowercase hex MD5 digest of the file at `path`, read in `BUF_SIZE` chunks.
pub fn file_digest(path: &Path) -> Result<String> {
    let read_err = |source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_err)?;
    let mut hasher = Md5::new();

    let mut buffer = [0u8; BUF_SIZE];
    loop {
        let bytes_read = file.read(&mut buffer).map_err(read_err)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let digest = format!("{:x}", hasher.finalize());
    log::debug!("Hashed {} -> {}", path.display(), digest);
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_key_resolves_unchanged() {
        let identity = Identity::Key("my-wallpaper".to_string());
        assert_eq!(identity.resolve().unwrap(), "my-wallpaper");
    }

    #[test]
    fn test_key_never_touches_filesystem() {
        // A key that looks like a path to a missing file is still just a key.
        let identity = Identity::Key("/definitely/not/here.png".to_string());
        assert_eq!(identity.resolve().unwrap(), "/definitely/not/here.png");
    }

    #[test]
    fn test_file_digest_known_values() {
        let temp_dir = TempDir::new().unwrap();

        let empty = temp_dir.path().join("empty.png");
        fs::write(&empty, b"").unwrap();
        assert_eq!(
            file_digest(&empty).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );

        let hello = temp_dir.path().join("hello.png");
        fs::write(&hello, b"hello world").unwrap();
        assert_eq!(
            file_digest(&hello).unwrap(),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }

    #[test]
    fn test_file_digest_spans_multiple_chunks() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("large.jpg");
        let contents: Vec<u8> = (0..BUF_SIZE * 5 + 17).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &contents).unwrap();

        let expected = format!("{:x}", Md5::digest(&contents));
        assert_eq!(file_digest(&path).unwrap(), expected);
    }

    #[test]
    fn test_same_content_same_key() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.png");
        let b = temp_dir.path().join("b.png");
        fs::write(&a, b"same bytes").unwrap();
        fs::write(&b, b"same bytes").unwrap();

        let key_a = Identity::File(a.clone()).resolve().unwrap();
        assert_eq!(key_a, Identity::File(a).resolve().unwrap());
        assert_eq!(key_a, Identity::File(b).resolve().unwrap());
        assert_eq!(key_a.len(), 32);
        assert!(key_a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.png");

        let err = Identity::File(missing.clone()).resolve().unwrap_err();
        match err {
            Error::FileRead { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
