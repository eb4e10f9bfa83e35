use anyhow::{bail, Result};

/// Substitution marker the build pipeline replaces with compiled Elm output.
pub const MARKER: &str = "ELM_CODE";

/// Compiled Elm application source. The committed file is a placeholder;
/// deployment overwrites it with `elm make` output.
pub const BUNDLE: &str = include_str!("../assets/app.js");

/// Replace the marker with the bundle source.
///
/// The marker must occur exactly once in the template. Zero or repeated
/// occurrences mean the template was mangled before the build, so injection
/// refuses rather than serving a broken shell.
pub fn inject(template: &str, bundle: &str) -> Result<String> {
    match template.matches(MARKER).count() {
        1 => Ok(template.replacen(MARKER, bundle, 1)),
        0 => bail!("substitution marker {} not found in template", MARKER),
        n => bail!("substitution marker {} found {} times in template", MARKER, n),
    }
}
