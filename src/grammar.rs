//! SemVer 2.0.0 grammar
//!
//! The string parser and the explicit constructors both validate against the
//! patterns defined here:
//!
//! - numeric component: `0` or a digit sequence without a leading zero
//! - pre-release identifier: `[0-9A-Za-z-]+`, where an all-digit identifier
//!   must not start with `0` unless it is exactly `0`
//! - build identifier: `[0-9A-Za-z-]+`, leading zeros allowed

use std::sync::LazyLock;

use regex::Regex;

const NUMERIC: &str = r"0|[1-9][0-9]*";

const PRE_RELEASE_IDENTIFIER: &str = r"0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*";

const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";

fn dotted(identifier: &str) -> String {
    format!(r"(?:{identifier})(?:\.(?:{identifier}))*")
}

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?P<major>{NUMERIC})\.(?P<minor>{NUMERIC})\.(?P<patch>{NUMERIC})(?:-(?P<pre>{pre}))?(?:\+(?P<build>{build}))?$",
        pre = dotted(PRE_RELEASE_IDENTIFIER),
        build = dotted(BUILD_IDENTIFIER),
    );
    Regex::new(&pattern).expect("version pattern is valid")
});

static PRE_RELEASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", dotted(PRE_RELEASE_IDENTIFIER)))
        .expect("pre-release pattern is valid")
});

static BUILD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", dotted(BUILD_IDENTIFIER))).expect("build pattern is valid")
});

/// Raw pieces of a version string that matched the full grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Captures<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    pub pre_release: Option<&'a str>,
    pub build_metadata: Option<&'a str>,
}

/// Match `input` against the full version grammar.
pub(crate) fn split(input: &str) -> Option<Captures<'_>> {
    let caps = VERSION_RE.captures(input)?;
    let non_empty = |name: &str| caps.name(name).map(|m| m.as_str()).filter(|s| !s.is_empty());
    Some(Captures {
        major: caps.name("major")?.as_str(),
        minor: caps.name("minor")?.as_str(),
        patch: caps.name("patch")?.as_str(),
        pre_release: non_empty("pre"),
        build_metadata: non_empty("build"),
    })
}

pub(crate) fn is_valid_pre_release(value: &str) -> bool {
    PRE_RELEASE_RE.is_match(value)
}

pub(crate) fn is_valid_build_metadata(value: &str) -> bool {
    BUILD_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_version() {
        let caps = split("3.17.4-beta12-3.4+1build17").unwrap();
        assert_eq!(caps.major, "3");
        assert_eq!(caps.minor, "17");
        assert_eq!(caps.patch, "4");
        assert_eq!(caps.pre_release, Some("beta12-3.4"));
        assert_eq!(caps.build_metadata, Some("1build17"));
    }

    #[test]
    fn test_split_core_only() {
        let caps = split("0.1.0").unwrap();
        assert_eq!(caps.pre_release, None);
        assert_eq!(caps.build_metadata, None);
    }

    #[test]
    fn test_split_rejects_structure() {
        for input in [
            "",
            "1",
            "1.2",
            "1.2.3.4",
            "a3.17.4",
            "3.a17.4",
            "3.17.a4",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-a..b",
            "1.2.3+a..b",
            "1.2.3-a_b",
            "01.2.3",
            "1.02.3",
            "1.2.03",
            " 1.2.3",
            "1.2.3\n",
            "v1.2.3",
        ] {
            assert!(split(input).is_none(), "{input:?} should not match");
        }
    }

    #[test]
    fn test_pre_release_leading_zeros() {
        assert!(is_valid_pre_release("0"));
        assert!(is_valid_pre_release("01a"));
        assert!(is_valid_pre_release("alpha.0.1"));
        assert!(is_valid_pre_release("-01"));
        assert!(!is_valid_pre_release("01"));
        assert!(!is_valid_pre_release("alpha.00"));
        assert!(!is_valid_pre_release(""));
    }

    #[test]
    fn test_build_allows_leading_zeros() {
        assert!(is_valid_build_metadata("04-1.abc-1"));
        assert!(is_valid_build_metadata("001"));
        assert!(!is_valid_build_metadata("a+b"));
        assert!(!is_valid_build_metadata(""));
        assert!(!is_valid_build_metadata("a."));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(split("١.2.3").is_none());
        assert!(!is_valid_pre_release("alpha.١"));
    }
}
