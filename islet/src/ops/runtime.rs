//! Runtime operation - gate on the host runtime version.

use islet_core::{RuntimeInfo, VersionError, ensure_min_version, probe_runtime};
use islet_manifest::RuntimeConfig;
use tracing::info;

/// Resolve the configured runtime and fail if it is older than `min_version`.
pub fn ensure_runtime(config: &RuntimeConfig) -> Result<RuntimeInfo, VersionError> {
    let runtime = probe_runtime(&config.executable)?;
    ensure_min_version(&runtime.version, &config.min_version, &runtime.path)?;

    info!(
        path = %runtime.path.display(),
        version = %runtime.version,
        "runtime accepted"
    );
    Ok(runtime)
}
