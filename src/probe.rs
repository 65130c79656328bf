use std::{fs, path::Path};

/// Decides whether a candidate path names a runnable program.
pub trait Probe {
    fn is_executable_file(&self, candidate: &Path) -> bool;
}

/// Asks the host file system: execute access for the current user, a
/// successful `stat`, and a regular file.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProbe;

impl Probe for HostProbe {
    fn is_executable_file(&self, candidate: &Path) -> bool {
        has_execute_access(candidate)
            && fs::metadata(candidate)
                .map(|metadata| metadata.is_file())
                .unwrap_or(false)
    }
}

#[cfg(unix)]
fn has_execute_access(path: &Path) -> bool {
    use std::{ffi::CString, os::unix::ffi::OsStrExt};

    let Ok(cstr) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `cstr` is a valid NUL-terminated string for the whole call.
    unsafe { libc::access(cstr.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(not(unix))]
fn has_execute_access(path: &Path) -> bool {
    path.exists()
}
