//! Platform conventions for native extension artifacts.

/// Returns the file extension used for native extension artifacts on
/// the current platform.
///
/// Compiled source units are emitted as dynamic libraries and loaded
/// through the host's module system, so the artifact follows the
/// platform's shared-library naming convention.
pub fn native_extension() -> &'static str {
    if cfg!(target_os = "windows") {
        "dll"
    } else if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    }
}
