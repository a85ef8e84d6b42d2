//! Resolved inputs shared by every check.
//!
//! A [`CheckContext`] is built once at startup from the process environment,
//! an optional `.env` file and the project location. Checks read from it
//! rather than from process-wide state, so tests can hand them a fake
//! environment, a temp directory and a scripted process runner.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{HealthError, Result};
use crate::shell::{split_path, CommandResult, ProcessRunner, SystemRunner};

use super::env_file::{find_env_file, EnvFileParser};
use super::manifest::HealthManifest;

/// Default per-command timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variables visible to the checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self::from_os_pairs(std::env::vars_os())
    }

    /// Build a snapshot from OS strings, skipping pairs that are not UTF-8.
    pub fn from_os_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self {
            vars: pairs
                .into_iter()
                .filter_map(|(k, v)| match (k.into_string(), v.into_string()) {
                    (Ok(k), Ok(v)) => Some((k, v)),
                    (k, _) => {
                        tracing::debug!("Skipping non-UTF-8 environment variable {:?}", k);
                        None
                    }
                })
                .collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use adw_health::config::EnvSnapshot;
    ///
    /// let env = EnvSnapshot::from_pairs([("GITHUB_REPO_URL", "https://github.com/x/y")]);
    /// assert_eq!(env.get("GITHUB_REPO_URL"), Some("https://github.com/x/y"));
    /// assert_eq!(env.get("ANTHROPIC_API_KEY"), None);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Layer `overrides` on top of `base`; `overrides` wins on conflict.
    pub fn layered(base: HashMap<String, String>, overrides: &EnvSnapshot) -> Self {
        let mut vars = base;
        vars.extend(overrides.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { vars }
    }

    /// Raw value of a variable, empty or not.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of a variable, treating an empty value as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Whether a variable is present in the snapshot.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Directories listed in `PATH`.
    pub fn path_entries(&self) -> Vec<PathBuf> {
        self.get("PATH").map(split_path).unwrap_or_default()
    }
}

/// Find the ADW project root, starting at `start` and walking up.
///
/// The first directory containing an `adws/` directory wins; failing that,
/// the first one containing `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join("adws").is_dir())
        .or_else(|| start.ancestors().find(|dir| dir.join(".git").exists()))
        .map(Path::to_path_buf)
}

/// How to build a [`CheckContext`] from the outside world.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// Directory discovery starts from.
    pub cwd: PathBuf,
    /// Explicit project root; skips discovery.
    pub project: Option<PathBuf>,
    /// Explicit env file; must exist.
    pub env_file: Option<PathBuf>,
    /// Per-command timeout.
    pub timeout: Duration,
}

impl ContextOptions {
    /// Options with discovery from `cwd` and the default timeout.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            project: None,
            env_file: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Everything a check may look at.
pub struct CheckContext {
    /// Environment variables visible to the checks.
    pub env: EnvSnapshot,
    /// Project root; directory paths are relative to it.
    pub project_root: PathBuf,
    /// What to check for.
    pub manifest: HealthManifest,
    /// Per-command timeout.
    pub timeout: Duration,
    runner: Box<dyn ProcessRunner>,
}

impl CheckContext {
    /// Create a context with the default manifest and timeout.
    pub fn new(
        env: EnvSnapshot,
        project_root: impl Into<PathBuf>,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            env,
            project_root: project_root.into(),
            manifest: HealthManifest::default(),
            timeout: DEFAULT_TIMEOUT,
            runner,
        }
    }

    /// Replace the manifest.
    pub fn with_manifest(mut self, manifest: HealthManifest) -> Self {
        self.manifest = manifest;
        self
    }

    /// Replace the per-command timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a context from the process environment and filesystem.
    ///
    /// Values from the env file only fill in variables the process
    /// environment does not already define.
    pub fn load(options: &ContextOptions) -> Result<Self> {
        let project_root = match &options.project {
            Some(project) => project.clone(),
            None => find_project_root(&options.cwd).unwrap_or_else(|| options.cwd.clone()),
        };
        tracing::debug!("Project root: {}", project_root.display());

        let file_vars = match &options.env_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(HealthError::EnvFileNotFound { path: path.clone() });
                }
                load_env_file(path)?
            }
            None => match find_env_file(&project_root) {
                Some(path) => load_env_file(&path)?,
                None => HashMap::new(),
            },
        };

        let process = EnvSnapshot::from_process();
        let extra: HashMap<String, String> = file_vars
            .iter()
            .filter(|(k, _)| !process.contains(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let env = EnvSnapshot::layered(file_vars, &process);

        Ok(Self::new(env, project_root, Box::new(SystemRunner::with_env(extra)))
            .with_timeout(options.timeout))
    }

    /// The ADW directory; file paths are relative to it.
    pub fn adws_dir(&self) -> PathBuf {
        self.project_root.join(&self.manifest.adws_dir)
    }

    /// Run an external program under the context's timeout.
    pub fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        self.runner.run(program, args, self.timeout)
    }
}

fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    tracing::debug!("Loading env file {}", path.display());
    EnvFileParser::load(path).map_err(|e| HealthError::EnvFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
