// =============================================================================
// Artifact locations
// =============================================================================
// All paths are relative to the project root and fixed at definition time.
// The checker never discovers files; it only looks in these places.

/// Package `__init__.py` carrying the `__version__` assignment. Mandatory.
pub const PACKAGE_INIT: &str = "ai_data_collector/__init__.py";

/// Build manifest with a `version = "..."` line. Mandatory.
pub const BUILD_MANIFEST: &str = "pyproject.toml";

/// Legacy packaging script. Optional.
pub const SETUP_SCRIPT: &str = "setup.py";

/// Container build file with an `ARG VERSION=` declaration. Optional.
pub const CONTAINER_FILE: &str = "docker/Dockerfile";

/// CI workflow with a `VERSION:` environment entry. Optional.
pub const CI_WORKFLOW: &str = ".github/workflows/ci.yml";
