use anyhow::bail;
use anyhow::Context;
use log::debug;
use log::info;
use log::warn;
use regex::Regex;
use semver::Version;
use std::path::Path;
use std::process::Command;

/// Ask MiXCR for its version. `mixcr -v` prints something like "MiXCR v4.6.0 (built Thu Jan 11 2024; ...)"
pub fn get_mixcr_version(path_mixcr: &Path) -> anyhow::Result<Version> {
    debug!("Checking MiXCR version of {:?}", path_mixcr);
    let output = Command::new(path_mixcr)
        .arg("-v")
        .output()
        .with_context(|| format!("Failed to run {:?} -v", path_mixcr))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if let Some(version) = parse_version_output(&text) {
        info!("Found MiXCR {}", version);
        Ok(version)
    } else {
        bail!("Could not find a version number in the output of {:?} -v", path_mixcr)
    }
}

/// First X.Y.Z token of a version banner
pub fn parse_version_output(text: &str) -> Option<Version> {
    let re = Regex::new(r"v?(\d+)\.(\d+)\.(\d+)").ok()?;
    let caps = re.captures(text)?;
    Some(Version::new(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

/// Accepts "4", "4.6", "4.6.0" and "v4.6.0"; missing components are zero
pub fn parse_loose_version(s: &str) -> anyhow::Result<Version> {
    let s = s.trim().trim_start_matches('v');
    let mut parts = s.split('.');
    let mut next = |name: &str| -> anyhow::Result<u64> {
        match parts.next() {
            Some(p) => p
                .parse::<u64>()
                .with_context(|| format!("Invalid {} component in version '{}'", name, s)),
            None => Ok(0),
        }
    };
    let major = next("major")?;
    let minor = next("minor")?;
    let patch = next("patch")?;
    if parts.next().is_some() {
        bail!("Version '{}' has more than three components", s);
    }
    Ok(Version::new(major, minor, patch))
}

/// MiXCR changes preset and library formats between minor versions, so major.minor must agree
pub fn is_compatible(expected: &Version, found: &Version) -> bool {
    expected.major == found.major && expected.minor == found.minor
}

/// Compare the configured version against the installed tool. Problems are only warned about
pub fn check_mixcr_version(path_mixcr: &Path, expected: &str) {
    let expected = match parse_loose_version(expected) {
        Ok(v) => v,
        Err(e) => {
            warn!("Ignoring configured version: {:#}", e);
            return;
        }
    };
    match get_mixcr_version(path_mixcr) {
        Ok(found) => {
            if !is_compatible(&expected, &found) {
                warn!(
                    "Configuration was written for MiXCR {} but {:?} reports {}",
                    expected, path_mixcr, found
                );
            }
        }
        Err(e) => warn!("Could not determine MiXCR version: {:#}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_output() {
        let text = "MiXCR v4.6.0 (built Thu Jan 11 10:51:37 CET 2024; rev=1a2b3c; lib=repseqio.v4.0)\n";
        assert_eq!(parse_version_output(text), Some(Version::new(4, 6, 0)));
        assert_eq!(parse_version_output("no version here"), None);
    }

    #[test]
    fn test_parse_loose_version() {
        assert_eq!(parse_loose_version("4").unwrap(), Version::new(4, 0, 0));
        assert_eq!(parse_loose_version("v4.6").unwrap(), Version::new(4, 6, 0));
        assert_eq!(parse_loose_version(" 4.6.1 ").unwrap(), Version::new(4, 6, 1));
        assert!(parse_loose_version("4.x").is_err());
        assert!(parse_loose_version("1.2.3.4").is_err());
    }

    #[test]
    fn test_is_compatible() {
        let v460 = Version::new(4, 6, 0);
        assert!(is_compatible(&v460, &Version::new(4, 6, 3)));
        assert!(!is_compatible(&v460, &Version::new(4, 7, 0)));
        assert!(!is_compatible(&v460, &Version::new(3, 6, 0)));
    }
}
