//! Spec page version strings and the textual `+0.1` bump applied on update.

use crate::error::CoreError;

/// Version assigned to a sign type's first spec page.
pub const INITIAL_SPEC_VERSION: &str = "v1.0";

/// Bump a spec version string by `+0.1`, e.g. `"v1.0"` -> `"v1.1"`.
///
/// The leading `v` is optional on input and always present on output. The
/// numeric part is formatted back to one decimal place, so `"v1.9"` rolls
/// over to `"v2.0"`. A version that does not parse as a number is a
/// validation error; stored versions only ever come from
/// [`INITIAL_SPEC_VERSION`] or a previous bump.
pub fn bump_version(version: &str) -> Result<String, CoreError> {
    let numeric = version.strip_prefix('v').unwrap_or(version);
    let parsed: f64 = numeric.trim().parse().map_err(|_| {
        CoreError::Validation(format!("Invalid spec version string '{version}'"))
    })?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(CoreError::Validation(format!(
            "Invalid spec version string '{version}'"
        )));
    }
    Ok(format!("v{:.1}", parsed + 0.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bumps_initial_version() {
        assert_eq!(bump_version("v1.0").unwrap(), "v1.1");
    }

    #[test]
    fn bumps_mid_series() {
        assert_eq!(bump_version("v1.4").unwrap(), "v1.5");
    }

    #[test]
    fn rolls_over_at_point_nine() {
        assert_eq!(bump_version("v1.9").unwrap(), "v2.0");
    }

    #[test]
    fn accepts_missing_v_prefix() {
        assert_eq!(bump_version("2.3").unwrap(), "v2.4");
    }

    #[test]
    fn repeated_bumps_walk_the_series() {
        let mut version = INITIAL_SPEC_VERSION.to_string();
        for _ in 0..3 {
            version = bump_version(&version).unwrap();
        }
        assert_eq!(version, "v1.3");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(bump_version("stale_v1.0").is_err());
        assert!(bump_version("").is_err());
        assert!(bump_version("vNaN").is_err());
    }

    #[test]
    fn negative_is_rejected() {
        assert!(bump_version("v-1.0").is_err());
    }
}
