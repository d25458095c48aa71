//! Web-root-confined path resolution
//!
//! This module maps request paths onto filesystem paths, guaranteeing that
//! every resolved path stays inside the configured web root.

use crate::config::StaticFileConfig;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};

/// Why a request path did not resolve to a servable file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// No regular file exists at the resolved location
    NotFound,
    /// The path resolved outside the web root and must never be served
    OutsideRoot,
}

/// Resolves request paths against the web root.
///
/// The root is canonicalized once at construction; every resolved path is
/// canonicalized and checked for containment, so dot-dot sequences and
/// symlinks cannot escape the root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    index: String,
}

impl PathResolver {
    /// Creates a resolver for the configured web root.
    ///
    /// Fails when the root does not exist: the filesystem contract requires
    /// it at startup.
    pub fn new(cfg: &StaticFileConfig) -> anyhow::Result<Self> {
        let root = cfg
            .root
            .canonicalize()
            .with_context(|| format!("web root {} is not accessible", cfg.root.display()))?;

        Ok(Self {
            root,
            index: cfg.index.clone(),
        })
    }

    /// The canonicalized web root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a request path to the file it names under the web root.
    ///
    /// `/` rewrites to the configured index document. Paths carrying a root
    /// or drive prefix, and paths whose canonical form leaves the web root,
    /// are rejected with `OutsideRoot`.
    pub fn resolve(&self, request_path: &str) -> Result<PathBuf, ResolveError> {
        let relative = if request_path == "/" {
            self.index.as_str()
        } else {
            request_path.trim_start_matches('/')
        };

        // Reject absolute paths and drive-letter prefixes outright; a join
        // with either would replace the root instead of extending it.
        let has_rooted_component = Path::new(relative)
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
        if has_rooted_component {
            return Err(ResolveError::OutsideRoot);
        }

        let candidate = self.root.join(relative);

        // Canonicalization fails for paths that do not exist and collapses
        // dot-dot segments and symlinks for those that do.
        let resolved = candidate
            .canonicalize()
            .map_err(|_| ResolveError::NotFound)?;

        if !resolved.starts_with(&self.root) {
            return Err(ResolveError::OutsideRoot);
        }

        if !resolved.is_file() {
            return Err(ResolveError::NotFound);
        }

        Ok(resolved)
    }
}
