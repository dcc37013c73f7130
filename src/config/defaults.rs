use crate::config::Settings;

pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
pub const DEFAULT_API_KEY: &str = "API-KEY";
pub const DEFAULT_INPUT_FILE: &str = "ai.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "llm_responses.json";

pub struct DefaultConfig;

impl DefaultConfig {
    pub fn create_default_config_file() -> String {
        format!(
            r#"[api]
url = "{DEFAULT_API_URL}"
key = "{DEFAULT_API_KEY}"

[files]
input = "{DEFAULT_INPUT_FILE}"
output = "{DEFAULT_OUTPUT_FILE}"

[output]
use_colors = true
"#
        )
    }

    pub fn get_default_settings() -> Settings {
        Settings::default()
    }
}
