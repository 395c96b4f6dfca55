use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,
    #[error("major version '{0}' is not a number")]
    InvalidMajor(String),
}

/// Strips the series/arch suffix from `juju version` output.
///
/// `"3.6.0-ubuntu-amd64"` becomes `"3.6.0"`.
pub fn version_number(raw: &str) -> &str {
    let raw = raw.trim();
    raw.split('-').next().unwrap_or(raw).trim()
}

pub fn parse_major_version(raw: &str) -> Result<u32, VersionError> {
    let number = version_number(raw);
    if number.is_empty() {
        return Err(VersionError::Empty);
    }
    let major = number.split('.').next().unwrap_or(number);
    major
        .parse::<u32>()
        .map_err(|_| VersionError::InvalidMajor(major.to_string()))
}
