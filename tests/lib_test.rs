//! Library integration tests.

use adw_health::checks::{CheckRegistry, CheckStatus, HealthCheck, Runner};
use adw_health::config::{CheckContext, EnvSnapshot, HealthManifest};
use adw_health::shell::ScriptedRunner;
use adw_health::ui::MockUI;
use adw_health::HealthError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PYDANTIC: &str = "python3 -c import pydantic; print(getattr(pydantic, 'VERSION', ''))";
const DOTENV: &str = "python3 -c import dotenv";
const REQUESTS: &str = "python3 -c import requests; print(getattr(requests, '__version__', ''))";

fn complete_layout(root: &Path, manifest: &HealthManifest) {
    for dir in &manifest.required_dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in &manifest.required_files {
        let path = root.join(&manifest.adws_dir).join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
}

fn good_env() -> EnvSnapshot {
    EnvSnapshot::from_pairs([
        ("ANTHROPIC_API_KEY", "sk-ant-0123456789abcdef"),
        ("GITHUB_REPO_URL", "https://github.com/acme/app"),
        ("ADW_PYTHON", "python3"),
    ])
}

fn healthy_runner() -> ScriptedRunner {
    ScriptedRunner::new()
        .succeed("gh --version", "gh version 2.40.0 (2023-12-07)\n")
        .succeed("gh auth status", "Logged in to github.com\n")
        .succeed("claude --version", "1.0.17 (Claude Code)\n")
        .succeed(PYDANTIC, "2.5.3\n")
        .succeed(DOTENV, "")
        .succeed(REQUESTS, "2.31.0\n")
}

#[test]
fn error_types_are_public() {
    let err = HealthError::CommandNotFound {
        program: "gh".into(),
    };
    assert!(err.to_string().contains("gh"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> adw_health::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn healthy_system_passes_every_check() {
    let temp = TempDir::new().unwrap();
    complete_layout(temp.path(), &HealthManifest::default());
    let ctx = CheckContext::new(good_env(), temp.path(), Box::new(healthy_runner()));
    let mut ui = MockUI::new();

    let report = Runner::new(&CheckRegistry::with_builtins()).run(&ctx, &mut ui);

    assert_eq!(report.passed(), 6);
    assert_eq!(report.exit_code(), 0);
    assert!(ui.contains("Results: 6/6 checks passed"));
    assert!(ui.contains("ADW system is healthy and ready to use!"));
}

#[test]
fn api_key_is_never_printed_in_full() {
    let temp = TempDir::new().unwrap();
    complete_layout(temp.path(), &HealthManifest::default());
    let ctx = CheckContext::new(good_env(), temp.path(), Box::new(healthy_runner()));
    let mut ui = MockUI::new();

    Runner::new(&CheckRegistry::with_builtins()).run(&ctx, &mut ui);

    assert!(ui.contains("ANTHROPIC_API_KEY: sk-ant-012..."));
    assert!(!ui.contains("sk-ant-0123456789abcdef"));
}

#[test]
fn auth_infrastructure_error_still_passes() {
    let temp = TempDir::new().unwrap();
    complete_layout(temp.path(), &HealthManifest::default());
    let runner = healthy_runner().on("gh auth status", || {
        Err(HealthError::Other(anyhow::anyhow!("keyring unavailable")))
    });
    let ctx = CheckContext::new(good_env(), temp.path(), Box::new(runner));
    let mut ui = MockUI::new();

    let report = Runner::new(&CheckRegistry::with_builtins()).run(&ctx, &mut ui);

    assert_eq!(report.results()[1].status, CheckStatus::Success);
    assert!(ui
        .warnings()
        .contains(&"Could not verify authentication: keyring unavailable".to_string()));
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn missing_gh_is_distinct_from_broken_gh() {
    let temp = TempDir::new().unwrap();
    let mut missing_ui = MockUI::new();
    let ctx = CheckContext::new(good_env(), temp.path(), Box::new(ScriptedRunner::new()));
    let registry = CheckRegistry::with_builtins();
    let gh = registry.get("github-cli").unwrap();

    let missing = gh.run(&ctx, &mut missing_ui).unwrap();

    let broken_ctx = CheckContext::new(
        good_env(),
        temp.path(),
        Box::new(ScriptedRunner::new().exit("gh --version", 1, "")),
    );
    let mut broken_ui = MockUI::new();
    let broken = gh.run(&broken_ctx, &mut broken_ui).unwrap();

    assert!(matches!(missing, CheckStatus::MissingRequirement { .. }));
    assert!(matches!(broken, CheckStatus::ExternalProcessFailure { .. }));
    assert!(missing_ui.contains("GitHub CLI not found"));
    assert!(broken_ui.contains("GitHub CLI not working (exit code: 1)"));
}

#[test]
fn custom_manifest_changes_requirements() {
    let temp = TempDir::new().unwrap();
    let manifest = HealthManifest {
        required_vars: vec!["CUSTOM_TOKEN".to_string()],
        optional_vars: Vec::new(),
        ..HealthManifest::default()
    };
    let ctx = CheckContext::new(
        EnvSnapshot::from_pairs([("CUSTOM_TOKEN", "abc")]),
        temp.path(),
        Box::new(ScriptedRunner::new()),
    )
    .with_manifest(manifest);
    let registry = CheckRegistry::with_builtins();
    let mut ui = MockUI::new();

    let status = registry.get("env-vars").unwrap().run(&ctx, &mut ui).unwrap();

    assert_eq!(status, CheckStatus::Success);
    assert!(ui.contains("CUSTOM_TOKEN: abc"));
}

#[test]
fn custom_check_can_be_registered() {
    struct AlwaysFails;

    impl HealthCheck for AlwaysFails {
        fn id(&self) -> &str {
            "always-fails"
        }
        fn name(&self) -> &str {
            "Always Fails"
        }
        fn title(&self) -> &str {
            "Checking nothing..."
        }
        fn run(
            &self,
            _ctx: &CheckContext,
            _ui: &mut dyn adw_health::ui::UserInterface,
        ) -> adw_health::Result<CheckStatus> {
            Ok(CheckStatus::UnexpectedError {
                detail: "nope".to_string(),
            })
        }
    }

    let mut registry = CheckRegistry::new();
    registry.register(Box::new(AlwaysFails));
    let ctx = CheckContext::new(
        EnvSnapshot::default(),
        "/work/app",
        Box::new(ScriptedRunner::new()),
    );
    let mut ui = MockUI::new();

    let report = Runner::new(&registry).run(&ctx, &mut ui);

    assert_eq!(report.exit_code(), 1);
    assert!(ui.contains("FAIL: Always Fails"));
}
