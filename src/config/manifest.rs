//! Declarative requirement lists for an ADW checkout.
//!
//! Checks read what to look for from a [`HealthManifest`] instead of
//! hardcoding it, so the lists can be inspected and swapped in tests.

/// A Python package the ADW scripts import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonDependency {
    /// Distribution name shown to the user (e.g. `python-dotenv`).
    pub name: String,
    /// Module name passed to `import` (e.g. `dotenv`).
    pub module: String,
    /// Module attribute holding the version string, if the package has one.
    pub version_attr: Option<String>,
}

impl PythonDependency {
    /// Create a dependency description.
    pub fn new(name: &str, module: &str, version_attr: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            module: module.to_string(),
            version_attr: version_attr.map(String::from),
        }
    }

    /// Python source that imports the module and prints its version.
    pub fn import_script(&self) -> String {
        match &self.version_attr {
            Some(attr) => format!(
                "import {m}; print(getattr({m}, '{a}', ''))",
                m = self.module,
                a = attr
            ),
            None => format!("import {}", self.module),
        }
    }
}

/// Everything the built-in checks check for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthManifest {
    /// Variables that must be set and non-empty.
    pub required_vars: Vec<String>,
    /// Variables reported when present, warned about when absent.
    pub optional_vars: Vec<String>,
    /// Directories relative to the project root.
    pub required_dirs: Vec<String>,
    /// The ADW directory, relative to the project root.
    pub adws_dir: String,
    /// Files relative to the ADW directory.
    pub required_files: Vec<String>,
    /// Python packages that must be importable.
    pub python_dependencies: Vec<PythonDependency>,
    /// Interpreter names tried on PATH, in order.
    pub python_candidates: Vec<String>,
    /// Variable that overrides the interpreter.
    pub python_var: String,
    /// GitHub CLI program.
    pub github_cli: String,
    /// Shown when the GitHub CLI is missing.
    pub github_install_hint: String,
    /// Shown when the GitHub CLI is not logged in.
    pub github_auth_hint: String,
    /// Variable that overrides the Claude Code CLI path.
    pub claude_cli_var: String,
    /// Claude Code CLI program used when the variable is unset.
    pub claude_cli_default: String,
    /// Shown when the Claude Code CLI is missing.
    pub claude_install_hint: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for HealthManifest {
    fn default() -> Self {
        Self {
            required_vars: strings(&["ANTHROPIC_API_KEY", "GITHUB_REPO_URL"]),
            optional_vars: strings(&["CLAUDE_CODE_PATH", "GITHUB_PAT"]),
            required_dirs: strings(&[
                "adws",
                "adws/adw_modules",
                "adws/adw_triggers",
                "adws/adw_tests",
                "agents",
                "specs",
                ".claude/commands",
            ]),
            adws_dir: "adws".to_string(),
            required_files: strings(&[
                "adw_modules/__init__.py",
                "adw_modules/agent.py",
                "adw_modules/data_types.py",
                "adw_modules/github.py",
                "adw_modules/git_ops.py",
                "adw_modules/state.py",
                "adw_modules/utils.py",
                "adw_modules/workflow_ops.py",
                "adw_plan.py",
                "adw_build.py",
                "adw_test.py",
                "adw_plan_build.py",
                "adw_plan_build_test.py",
            ]),
            python_dependencies: vec![
                PythonDependency::new("pydantic", "pydantic", Some("VERSION")),
                PythonDependency::new("python-dotenv", "dotenv", None),
                PythonDependency::new("requests", "requests", Some("__version__")),
            ],
            python_candidates: strings(&["python3", "python"]),
            python_var: "ADW_PYTHON".to_string(),
            github_cli: "gh".to_string(),
            github_install_hint: "Install with: brew install gh".to_string(),
            github_auth_hint: "Run: gh auth login".to_string(),
            claude_cli_var: "CLAUDE_CODE_PATH".to_string(),
            claude_cli_default: "claude".to_string(),
            claude_install_hint:
                "Install from: https://docs.anthropic.com/en/docs/claude-code".to_string(),
        }
    }
}
