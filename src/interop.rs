//! Conversions to and from the `semver` crate

use crate::error::VersionError;
use crate::version::Version;

impl TryFrom<&Version> for semver::Version {
    type Error = VersionError;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        let pre = match version.pre_release() {
            Some(pre) => semver::Prerelease::new(pre.as_str())?,
            None => semver::Prerelease::EMPTY,
        };
        let build = match version.build_metadata() {
            Some(build) => semver::BuildMetadata::new(build.as_str())?,
            None => semver::BuildMetadata::EMPTY,
        };
        Ok(semver::Version {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre,
            build,
        })
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = VersionError;

    fn try_from(version: &semver::Version) -> Result<Self, Self::Error> {
        Version::with_identifiers(
            version.major,
            version.minor,
            version.patch,
            non_empty(version.pre.as_str()),
            non_empty(version.build.as_str()),
        )
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
