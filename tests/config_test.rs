//! Config file lifecycle: first run, secret entry, persistence, reload.

mod common;

use common::{Answer, ScriptedPrompter};
use serial_test::serial;

use gitcommit::config::{self, API_KEY_PLACEHOLDER, TASK_PREFIX_PLACEHOLDER};

#[test]
#[serial]
fn test_first_run_prompts_then_persists_secrets() {
    temp_env::with_var_unset("OPENAI_API_KEY", || {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = config::load(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.api_key, API_KEY_PLACEHOLDER);
        assert_eq!(config.task_prefix, TASK_PREFIX_PLACEHOLDER);

        let prompter = ScriptedPrompter::new(vec![
            Answer::Password("sk-live".to_string()),
            Answer::Input("IOS-".to_string()),
        ]);
        let changed = config::resolve_secrets(&mut config, &prompter).unwrap();
        assert!(changed);
        config::save(&path, &config).unwrap();

        let reloaded = config::load(&path).unwrap();
        assert_eq!(reloaded.api_key, "sk-live");
        assert_eq!(reloaded.task_prefix, "IOS-");

        // Nothing left to ask on the second run
        let mut reloaded = reloaded;
        let silent = ScriptedPrompter::default();
        assert!(!config::resolve_secrets(&mut reloaded, &silent).unwrap());
        assert!(silent.asked.borrow().is_empty());
    });
}

#[test]
#[serial]
fn test_saved_file_uses_upper_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    config::load(&path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    for key in [
        "MODEL_NAME",
        "OPENAI_API_KEY",
        "OPENAI_API_URL",
        "TASK_PREFIX",
        "MESSAGE_TEMPLATE",
        "MAX_TOKEN_COUNT",
    ] {
        assert!(raw.get(key).is_some(), "missing key {}", key);
    }
}

#[test]
#[serial]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "OPENAI_API_KEY": "sk-x", "TASK_PREFIX": "AND-", "MODEL_NAME": "gpt-4o-mini" }"#,
    )
    .unwrap();

    let config = config::load(&path).unwrap();

    assert_eq!(config.model_name, "gpt-4o-mini");
    assert_eq!(config.task_prefix, "AND-");
    assert_eq!(config.max_token_count, 4000);
    assert_eq!(config.git_command, vec!["git", "diff", "--cached"]);
    assert!(config.validate().is_ok());
}
