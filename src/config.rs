use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_base: String,
    pub llm_model: String,
    /// Bearer credential for the completion service. Absence is reported per
    /// request as a configuration error, not at startup.
    pub llm_api_key: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| "https://integrate.api.nvidia.com/v1".to_string()),
            llm_model: env::var("LLM_MODEL")
                .unwrap_or_else(|_| "nvidia/llama-3.3-nemotron-super-49b-v1.5".to_string()),
            llm_api_key: env::var("NVIDIA_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            llm_api_base: "https://integrate.api.nvidia.com/v1".to_string(),
            llm_model: "nvidia/llama-3.3-nemotron-super-49b-v1.5".to_string(),
            llm_api_key: Some(SecretString::from("test_api_key".to_string())),
        }
    }

    #[cfg(test)]
    pub fn test_config_without_key() -> Self {
        Self {
            llm_api_key: None,
            ..Self::test_config()
        }
    }
}
