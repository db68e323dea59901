//! Server version comparison.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A server version reduced to its first three numeric components.
///
/// Servers report strings such as `10.0.3.3` or `8.2.1`; anything after the
/// third component is ignored and missing components count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub patch: u32,
}

impl ServerVersion {
    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for ServerVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = [0u32; 3];
        let mut components = s.trim().split('.');

        for (index, slot) in parts.iter_mut().enumerate() {
            match components.next() {
                Some(component) => {
                    *slot = component.parse().map_err(|_| {
                        AppError::configuration(format!("Invalid server version: '{s}'"))
                    })?;
                }
                None if index > 0 => break,
                None => {
                    return Err(AppError::configuration(format!(
                        "Invalid server version: '{s}'"
                    )));
                }
            }
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
