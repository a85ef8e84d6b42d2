//! Check registry.
//!
//! The [`CheckRegistry`] holds checks in the order they run. Unlike a map
//! keyed by id, registration order is preserved so the report reads the same
//! way every time.

use super::builtin::{
    AdwFilesCheck, ClaudeCliCheck, DirectoryStructureCheck, EnvVarsCheck, GitHubCliCheck,
    PythonDepsCheck,
};
use super::HealthCheck;

/// Ordered collection of health checks.
pub struct CheckRegistry {
    checks: Vec<Box<dyn HealthCheck>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with the six built-in ADW checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(EnvVarsCheck::new()));
        registry.register(Box::new(GitHubCliCheck));
        registry.register(Box::new(ClaudeCliCheck));
        registry.register(Box::new(PythonDepsCheck));
        registry.register(Box::new(DirectoryStructureCheck));
        registry.register(Box::new(AdwFilesCheck));
        registry
    }

    /// Append a check; it runs after every check registered before it.
    pub fn register(&mut self, check: Box<dyn HealthCheck>) {
        self.checks.push(check);
    }

    /// Get a check by id.
    pub fn get(&self, id: &str) -> Option<&dyn HealthCheck> {
        self.checks
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over checks in run order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn HealthCheck> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Display names in run order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|c| c.name()).collect()
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckStatus;
    use crate::config::CheckContext;
    use crate::error::Result;
    use crate::ui::UserInterface;

    struct NamedCheck(&'static str);

    impl HealthCheck for NamedCheck {
        fn id(&self) -> &str {
            self.0
        }
        fn name(&self) -> &str {
            self.0
        }
        fn title(&self) -> &str {
            "Checking..."
        }
        fn run(&self, _ctx: &CheckContext, _ui: &mut dyn UserInterface) -> Result<CheckStatus> {
            Ok(CheckStatus::Success)
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_preserves_registration_order() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(NamedCheck("zeta")));
        registry.register(Box::new(NamedCheck("alpha")));
        registry.register(Box::new(NamedCheck("mid")));

        assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn registry_get_by_id() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(NamedCheck("only")));

        assert!(registry.get("only").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn builtins_run_in_fixed_order() {
        let registry = CheckRegistry::with_builtins();

        assert_eq!(
            registry.names(),
            vec![
                "Environment Variables",
                "GitHub CLI",
                "Claude Code CLI",
                "Python Dependencies",
                "Directory Structure",
                "ADW Files",
            ]
        );
    }

    #[test]
    fn builtin_ids_are_unique() {
        let registry = CheckRegistry::with_builtins();
        let mut ids: Vec<_> = registry.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }
}
