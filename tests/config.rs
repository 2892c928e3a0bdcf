use docqa::cli::Args;
use docqa::config::{
    expand_env_var_in_string, normalize_endpoint, parse_flag, Config, FileConfig,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
};
use docqa::error::DocqaError;
use docqa::session::DEFAULT_WINDOW_SIZE;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

fn required_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("OPENAI_API_KEY", "sk-test"),
        ("DOCQA_ACCESS_PASSWORD", "s3cret"),
    ]
}

#[test]
fn test_defaults() {
    let config = Config::resolve(
        &Args::default(),
        &FileConfig::default(),
        env_of(&required_env()),
    )
    .unwrap();

    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.access_password, "s3cret");
    assert_eq!(
        config.api_endpoint,
        "https://api.openai.com/v1/chat/completions"
    );
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(config.temperature, None);
    assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
    assert!(!config.verbose);
}

#[test]
fn test_missing_api_key_is_config_error() {
    let result = Config::resolve(
        &Args::default(),
        &FileConfig::default(),
        env_of(&[("DOCQA_ACCESS_PASSWORD", "s3cret")]),
    );
    assert!(matches!(result, Err(DocqaError::Config(_))));
}

#[test]
fn test_missing_password_is_config_error() {
    let result = Config::resolve(
        &Args::default(),
        &FileConfig::default(),
        env_of(&[("OPENAI_API_KEY", "sk-test")]),
    );
    assert!(matches!(result, Err(DocqaError::Config(_))));
}

#[test]
fn test_cli_overrides_env_and_file() {
    let args = Args {
        model: Some("gpt-4o-mini".to_string()),
        window_size: Some(6),
        max_tokens: Some(300),
        ..Default::default()
    };
    let mut file_config = FileConfig::default();
    file_config.model.name = Some("from-file".to_string());
    file_config.session.window_size = Some(10);

    let mut env = required_env();
    env.push(("DOCQA_MODEL", "from-env"));
    env.push(("DOCQA_WINDOW_SIZE", "8"));

    let config = Config::resolve(&args, &file_config, env_of(&env)).unwrap();

    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.window_size, 6);
    assert_eq!(config.max_tokens, 300);
}

#[test]
fn test_env_overrides_file() {
    let mut file_config = FileConfig::default();
    file_config.model.name = Some("from-file".to_string());
    file_config.session.verbose = Some(false);

    let mut env = required_env();
    env.push(("DOCQA_MODEL", "from-env"));
    env.push(("DOCQA_VERBOSE", "yes"));
    env.push(("DOCQA_TEMPERATURE", "0.3"));

    let config = Config::resolve(&Args::default(), &file_config, env_of(&env)).unwrap();

    assert_eq!(config.model, "from-env");
    assert!(config.verbose);
    assert_eq!(config.temperature, Some(0.3));
}

#[test]
fn test_invalid_env_number_is_config_error() {
    let mut env = required_env();
    env.push(("DOCQA_WINDOW_SIZE", "twenty"));

    let result = Config::resolve(&Args::default(), &FileConfig::default(), env_of(&env));
    assert!(matches!(result, Err(DocqaError::Config(_))));
}

#[test]
fn test_out_of_range_temperature_is_rejected() {
    let args = Args {
        temperature: Some(3.5),
        ..Default::default()
    };
    let result = Config::resolve(&args, &FileConfig::default(), env_of(&required_env()));
    assert!(matches!(result, Err(DocqaError::Config(_))));
}

#[test]
fn test_zero_window_is_allowed() {
    let args = Args {
        window_size: Some(0),
        ..Default::default()
    };
    let config = Config::resolve(&args, &FileConfig::default(), env_of(&required_env())).unwrap();
    assert_eq!(config.window_size, 0);
}

#[test]
fn test_file_secrets_expand_env_references() {
    let mut file_config = FileConfig::default();
    file_config.api.key = Some("${MY_KEY}".to_string());
    file_config.access.password = Some("${MY_PASSWORD}".to_string());

    let config = Config::resolve(
        &Args::default(),
        &file_config,
        env_of(&[("MY_KEY", "sk-file"), ("MY_PASSWORD", "pw")]),
    )
    .unwrap();

    assert_eq!(config.api_key, "sk-file");
    assert_eq!(config.access_password, "pw");
}

#[test]
fn test_unexpanded_secret_counts_as_missing() {
    let mut file_config = FileConfig::default();
    file_config.api.key = Some("${UNSET_KEY}".to_string());

    let result = Config::resolve(
        &Args::default(),
        &file_config,
        env_of(&[("DOCQA_ACCESS_PASSWORD", "pw")]),
    );
    assert!(matches!(result, Err(DocqaError::Config(_))));
}

#[test]
fn test_normalize_endpoint() {
    assert_eq!(
        normalize_endpoint("http://localhost:11434/v1"),
        "http://localhost:11434/v1/chat/completions"
    );
    assert_eq!(
        normalize_endpoint("http://localhost:11434/v1/"),
        "http://localhost:11434/v1/chat/completions"
    );
    assert_eq!(
        normalize_endpoint("http://localhost:8080/"),
        "http://localhost:8080/v1/chat/completions"
    );
    assert_eq!(
        normalize_endpoint("https://example.com/v1/chat/completions"),
        "https://example.com/v1/chat/completions"
    );
}

#[test]
fn test_expand_env_var_in_string() {
    let lookup = env_of(&[("HOST", "example.com")]);
    assert_eq!(
        expand_env_var_in_string("https://${HOST}/v1 ${MISSING}", lookup),
        "https://example.com/v1 ${MISSING}"
    );
}

#[test]
fn test_parse_flag() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag("1"), Some(true));
    assert_eq!(parse_flag("no"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn test_load_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("docqa.yaml");
    fs::write(
        &path,
        "model:\n  name: gpt-4o\n  max_tokens: 800\nsession:\n  window_size: 12\n",
    )
    .unwrap();

    let config = FileConfig::load_from(&path).unwrap();

    assert_eq!(config.model.name.as_deref(), Some("gpt-4o"));
    assert_eq!(config.model.max_tokens, Some(800));
    assert_eq!(config.session.window_size, Some(12));
    assert!(config.access.password.is_none());
}

#[test]
fn test_load_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".docqa.json");
    fs::write(&path, r#"{"api": {"endpoint": "http://localhost:11434/v1"}}"#).unwrap();

    let config = FileConfig::load_from(&path).unwrap();
    assert_eq!(
        config.api.endpoint.as_deref(),
        Some("http://localhost:11434/v1")
    );
}

#[test]
fn test_load_invalid_config_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("docqa.yaml");
    fs::write(&path, "model: [unclosed").unwrap();

    let err = FileConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("docqa.yaml"));
}

#[test]
fn test_init_writes_example_once() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("docqa");

    let path = FileConfig::init_in(&config_dir).unwrap();
    let written = FileConfig::load_from(&path).unwrap();
    assert_eq!(written.model.name.as_deref(), Some("gpt-3.5-turbo"));
    assert_eq!(written.session.window_size, Some(20));

    assert!(matches!(
        FileConfig::init_in(&config_dir),
        Err(DocqaError::Config(_))
    ));
}
