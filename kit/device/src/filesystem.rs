//! The filesystem capability.

use std::io;
use std::path::Path;

use rill_core::{CapabilityError, NativeModule};
use tracing::debug;

/// Name the filesystem module registers under.
pub const NAME: &str = "Filesystem";

/// The `Filesystem` capability module.
///
/// Paths are resolved by the platform's own filesystem; sandboxing and
/// root confinement are the embedder's responsibility.
#[derive(Debug, Default)]
pub struct FilesystemModule;

impl FilesystemModule {
    /// Creates the filesystem module.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reads a file and decodes it as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::Io`] when the file cannot be read or its
    /// contents are not valid UTF-8.
    pub async fn read_to_string(&self, path: impl AsRef<Path>) -> Result<String, CapabilityError> {
        let bytes = async_fs::read(path.as_ref()).await?;
        let text = String::from_utf8(bytes)
            .map_err(|source| io::Error::new(io::ErrorKind::InvalidData, source))?;
        Ok(text)
    }

    /// Writes `contents` to a file, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::Io`] when the file cannot be written.
    pub async fn write(
        &self,
        path: impl AsRef<Path>,
        contents: impl AsRef<[u8]>,
    ) -> Result<(), CapabilityError> {
        async_fs::write(path.as_ref(), contents.as_ref()).await?;
        Ok(())
    }
}

impl NativeModule for FilesystemModule {
    fn name(&self) -> &str {
        NAME
    }

    fn initialize(&self) {
        debug!(module = NAME, "initialized");
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rill-device-{}-{name}", std::process::id()))
    }

    #[test]
    fn write_then_read_round_trips() {
        let path = scratch_path("roundtrip.txt");
        let module = FilesystemModule::new();

        block_on(module.write(&path, "stored by rill")).unwrap();
        let text = block_on(module.read_to_string(&path)).unwrap();
        assert_eq!(text, "stored by rill");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_resolves_to_io_error() {
        let module = FilesystemModule::new();
        let result = block_on(module.read_to_string(scratch_path("missing.txt")));
        assert!(matches!(result, Err(CapabilityError::Io(_))));
    }

    #[test]
    fn invalid_utf8_resolves_to_io_error() {
        let path = scratch_path("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let module = FilesystemModule::new();
        let result = block_on(module.read_to_string(&path));
        assert!(matches!(result, Err(CapabilityError::Io(_))));

        std::fs::remove_file(&path).ok();
    }
}
