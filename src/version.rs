//! Version string assembly.
//!
//! Dev builds carry the git commit hash emitted by the build script;
//! official builds (`--features release`) use the bare crate version.

/// Full version string for `--version` output.
pub fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => {
            let short = &sha[..sha.len().min(7)];
            format!("{} ({})", env!("CARGO_PKG_VERSION"), short)
        }
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}
