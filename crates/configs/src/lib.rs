use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_TOKEN: &str = "abcd1234";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: default_storage_path() }
    }
}

fn default_storage_path() -> String { "data/db.json".into() }

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_token")]
    pub token: String,
    /// Token for the `/users` routes; `token` is used when absent.
    #[serde(default)]
    pub users_token: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { token: default_token(), users_token: None }
    }
}

fn default_token() -> String { DEFAULT_TOKEN.into() }

impl AuthConfig {
    pub fn users_token(&self) -> &str {
        self.users_token.as_deref().unwrap_or(&self.token)
    }
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    /// Config file at `CONFIG_PATH` (default `config.toml`), or env vars over
    /// defaults when that file does not exist.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// Only a missing file falls back to env vars; a file that exists but
    /// cannot be read or parsed is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_env(),
            Err(e) => return Err(e.context(format!("failed to load config file {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(path) = std::env::var("DB_PATH") {
            cfg.storage.path = path;
        }
        if let Ok(token) = std::env::var("API_TOKEN") {
            cfg.auth.token = token;
        }
        if let Ok(token) = std::env::var("USERS_API_TOKEN") {
            cfg.auth.users_token = Some(token);
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!("storage.path is empty; set it in config.toml or via DB_PATH"));
        }
        Ok(())
    }
}

impl AuthConfig {
    fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(anyhow!("auth.token must not be empty"));
        }
        if matches!(&self.users_token, Some(t) if t.trim().is_empty()) {
            return Err(anyhow!("auth.users_token must not be empty when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_missing() -> Result<()> {
        let mut cfg = parse("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.storage.path, "data/db.json");
        assert_eq!(cfg.auth.token, DEFAULT_TOKEN);
        assert_eq!(cfg.auth.users_token(), DEFAULT_TOKEN);
        Ok(())
    }

    #[test]
    fn full_file_parses() -> Result<()> {
        let mut cfg = parse(
            r#"
            [server]
            host = ""
            port = 8080
            worker_threads = 0

            [storage]
            path = "/tmp/catalog.json"

            [auth]
            token = "t1"
            users_token = "t2"
            "#,
        )?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.storage.path, "/tmp/catalog.json");
        assert_eq!(cfg.auth.token, "t1");
        assert_eq!(cfg.auth.users_token(), "t2");
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error_not_a_fallback() -> Result<()> {
        let path = std::env::temp_dir().join(format!("catalog_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "[auth]\ntoken = \"operator-secret\"\n[server\nport = 9000\n")?;
        let res = AppConfig::load_or_env_from(&path.to_string_lossy());
        let _ = std::fs::remove_file(&path);

        let err = match res {
            Ok(cfg) => panic!("malformed config accepted with token {}", cfg.auth.token),
            Err(e) => e,
        };
        assert!(err.to_string().contains("failed to load config file"));
        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_defaults() -> Result<()> {
        let path = std::env::temp_dir().join("catalog_cfg_does_not_exist.toml");
        let cfg = AppConfig::load_or_env_from(&path.to_string_lossy())?;
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert!(!cfg.storage.path.trim().is_empty());
        Ok(())
    }

    #[test]
    fn rejects_zero_port_and_empty_values() {
        let mut cfg = parse("[server]\nhost = \"0.0.0.0\"\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = parse("[storage]\npath = \"  \"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = parse("[auth]\ntoken = \"\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = parse("[auth]\ntoken = \"x\"\nusers_token = \"\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
