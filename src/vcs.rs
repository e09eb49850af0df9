//! Build version derived from version-control metadata.
//!
//! The build script records the commit the binary was built from. Version
//! display is best-effort: missing metadata yields an empty or partial string,
//! never an error.

use std::sync::OnceLock;

const REVISION_KEY: &str = "vcs.revision";
const MODIFIED_KEY: &str = "vcs.modified";
const TIME_KEY: &str = "vcs.time";

/// Shape of the resolved version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStyle {
    /// `{revision}`
    Revision,
    /// `{time}-{revision}`
    Timestamped,
}

/// Returns the version of the running binary, computed once.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| resolve(embedded_settings(), VersionStyle::Timestamped))
}

/// Build settings captured at compile time, keyed like `vcs.revision`.
fn embedded_settings() -> Vec<(&'static str, &'static str)> {
    [
        (REVISION_KEY, option_env!("GREENLIGHT_VCS_REVISION")),
        (MODIFIED_KEY, option_env!("GREENLIGHT_VCS_MODIFIED")),
        (TIME_KEY, option_env!("GREENLIGHT_VCS_TIME")),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| (key, v)))
    .collect()
}

/// Composes a version string from build settings.
///
/// Unknown keys are ignored. A `vcs.modified` value other than `"true"`
/// counts as a clean tree.
pub fn resolve<'a, I>(settings: I, style: VersionStyle) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut revision = "";
    let mut time = "";
    let mut modified = false;

    for (key, value) in settings {
        match key {
            REVISION_KEY => revision = value,
            MODIFIED_KEY => modified = value == "true",
            TIME_KEY => time = value,
            _ => {}
        }
    }

    let mut version = match style {
        VersionStyle::Revision => revision.to_string(),
        VersionStyle::Timestamped => format!("{time}-{revision}"),
    };

    if modified {
        version.push_str("-dirty");
    }

    version
}
