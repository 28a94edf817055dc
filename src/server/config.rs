use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ClientConfig;

/// Substitute `$VAR` and `${VAR}` with values from the environment.
/// Unset variables expand to the empty string.
fn expand_env_vars(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut chars = input.chars().peekable();

  while let Some(c) = chars.next() {
    if c != '$' {
      out.push(c);
      continue;
    }

    let mut name = String::new();
    if chars.peek() == Some(&'{') {
      chars.next();
      let mut closed = false;
      for n in chars.by_ref() {
        if n == '}' {
          closed = true;
          break;
        }
        name.push(n);
      }
      if !closed {
        // Unterminated: keep the text as written
        out.push_str("${");
        out.push_str(&name);
        continue;
      }
    } else {
      while let Some(&n) = chars.peek() {
        if n.is_ascii_alphanumeric() || n == '_' {
          name.push(n);
          chars.next();
        } else {
          break;
        }
      }
      if name.is_empty() {
        out.push('$');
        continue;
      }
    }

    out.push_str(&std::env::var(&name).unwrap_or_default());
  }

  out
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub client: ClientConfig,
  #[serde(default)]
  pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// Directory holding the built WASM bundle (index.html, JS glue, .wasm)
  #[serde(default = "default_dist_dir")]
  pub dist_dir: PathBuf,
  /// Allowed CORS origins. Empty or containing "*" means permissive.
  #[serde(default)]
  pub cors_origins: Vec<String>,
}

fn default_host() -> String {
  "0.0.0.0".into()
}

fn default_port() -> u16 {
  8080
}

fn default_dist_dir() -> PathBuf {
  PathBuf::from("./dist")
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      dist_dir: default_dist_dir(),
      cors_origins: Vec::new(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}

fn default_level() -> String {
  "info".into()
}

impl Default for LoggingSection {
  fn default() -> Self {
    Self { level: default_level() }
  }
}

impl HostConfig {
  pub fn from_yaml(content: &str) -> Result<Self, anyhow::Error> {
    Ok(serde_yaml::from_str(&expand_env_vars(content))?)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
    let content = std::fs::read_to_string(&path)?;
    Self::from_yaml(&content)
  }

  /// Load `zipgate.yaml` or `zipgate.yml` from the working directory if present.
  pub fn find_and_load() -> Result<Option<Self>, anyhow::Error> {
    for p in ["zipgate.yaml", "zipgate.yml"] {
      if Path::new(p).exists() {
        tracing::info!("Loading config from {}", p);
        return Ok(Some(Self::from_file(p)?));
      }
    }
    Ok(None)
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }

  pub fn permissive_cors(&self) -> bool {
    self.server.cors_origins.is_empty() || self.server.cors_origins.iter().any(|o| o == "*")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_expand_braced_and_bare() {
    std::env::set_var("ZIPGATE_TEST_EXPAND", "value");
    assert_eq!(expand_env_vars("a ${ZIPGATE_TEST_EXPAND} b"), "a value b");
    assert_eq!(expand_env_vars("a $ZIPGATE_TEST_EXPAND/b"), "a value/b");
  }

  #[test]
  fn test_expand_unset_and_literal_dollar() {
    assert_eq!(expand_env_vars("x${ZIPGATE_TEST_UNSET_VAR}y"), "xy");
    assert_eq!(expand_env_vars("cost: $5"), "cost: ");
    assert_eq!(expand_env_vars("cost: $ 5"), "cost: $ 5");
    assert_eq!(expand_env_vars("open ${NOPE"), "open ${NOPE");
  }
}
