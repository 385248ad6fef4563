//! Host platform identification
//!
//! The playback launcher picks one of three OS "open with default
//! application" mechanisms. The variant set is deliberately closed: anything
//! that is not Windows or macOS gets the freedesktop opener.

/// Host operating system family, as seen by the playback launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    /// Identify the platform this process is running on
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` string to a platform family
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os() {
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("linux"), Platform::Other);
        assert_eq!(Platform::from_os("freebsd"), Platform::Other);
        assert_eq!(Platform::from_os(""), Platform::Other);
    }

    #[test]
    fn test_current_does_not_panic() {
        let _ = Platform::current();
    }
}
