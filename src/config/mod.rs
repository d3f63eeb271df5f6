use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::PathBuf,
    time::Duration,
};

use directories::BaseDirs;
use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(default_config_path(), env::vars())
    }

    /// Defaults, then the rc file at `config_path`, then `vars` (known keys
    /// only, taking precedence).
    pub fn load_from<I>(config_path: PathBuf, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut map = default_map();

        // Read .cphrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().map_while(Result::ok) {
                    if let Some((k, v)) = parse_line(&line) {
                        map.insert(k, v);
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in vars {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    /// Defaults overlaid with the given pairs; neither the rc file nor the
    /// environment is consulted.
    #[cfg(test)]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = default_map();
        for (k, v) in pairs {
            map.insert(k.into(), v.into());
        }
        Self { inner: map, config_path: default_config_path() }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse::<u64>().ok())
    }

    pub fn template_dir(&self) -> PathBuf {
        self.get("CPH_TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_template_dir)
    }

    pub fn template_path(&self, language: &str) -> PathBuf {
        self.template_dir().join(format!("template.{language}"))
    }

    /// `None` when unset or zero.
    pub fn timeout(&self) -> Option<Duration> {
        self.get_u64("CPH_TIMEOUT")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn compiler(&self) -> String {
        self.get("CPH_CXX")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "g++".to_string())
    }

    pub fn log_level(&self) -> LevelFilter {
        self.get("CPH_LOG_LEVEL")
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn)
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    line.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &["CPH_TEMPLATE_DIR", "CPH_TIMEOUT", "CPH_CXX", "CPH_LOG_LEVEL"];
    KEYS.contains(&k)
}

fn config_base() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("cph")
}

fn default_config_path() -> PathBuf {
    config_base().join(".cphrc")
}

fn default_template_dir() -> PathBuf {
    config_base()
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert(
        "CPH_TEMPLATE_DIR".into(),
        default_template_dir().to_string_lossy().into_owned(),
    );
    m.insert("CPH_TIMEOUT".into(), "0".into());
    m.insert("CPH_CXX".into(), "g++".into());
    m.insert("CPH_LOG_LEVEL".into(), "warn".into());
    m
}
