pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub const DEFAULT_MAX_TOKENS: u32 = 2500;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const EXAMPLE_CONFIG: &str = r#"# docqa configuration
# Values may reference environment variables with ${VAR_NAME}.

api:
  # endpoint: https://api.openai.com/v1
  key: ${OPENAI_API_KEY}
  timeout: 60

model:
  name: gpt-3.5-turbo
  max_tokens: 2500
  # temperature: 0.2
  system_prompt: You are a helpful assistant.

session:
  window_size: 20
  verbose: false

access:
  password: ${DOCQA_ACCESS_PASSWORD}
"#;
