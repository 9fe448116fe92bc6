/// Operating system family the build runs on.
///
/// Passed explicitly so synthesis can be exercised for either host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Unix,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        self == HostPlatform::Windows
    }

    pub fn separator(self) -> char {
        match self {
            HostPlatform::Windows => '\\',
            HostPlatform::Unix => '/',
        }
    }

    pub fn exe_suffix(self) -> &'static str {
        match self {
            HostPlatform::Windows => ".exe",
            HostPlatform::Unix => "",
        }
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::current()
    }
}
