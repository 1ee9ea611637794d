//! Process Configuration
//!
//! Settings are read from the environment first, then overridden by command-line
//! flags. Only the Redis address is part of the map contract; the rest controls
//! how the binary runs.

use anyhow::{Context, Result, bail};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";
pub const DEFAULT_REDIS_PORT: u16 = 6379;
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

/// Where map data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// A Redis server at `redis_host:redis_port`.
    Redis,
    /// The process-local store; nothing survives a restart.
    Memory,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(Backend::Redis),
            "memory" => Ok(Backend::Memory),
            other => bail!("Unknown backend '{}' (expected 'redis' or 'memory')", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub bind: SocketAddr,
    pub backend: Backend,
    pub run_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_host: DEFAULT_REDIS_HOST.to_string(),
            redis_port: DEFAULT_REDIS_PORT,
            bind: DEFAULT_BIND,
            backend: Backend::Redis,
            run_demo: true,
        }
    }
}

impl Config {
    /// Environment, then `std::env::args()`.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(|name| std::env::var(name).ok(), &args)
    }

    /// Builds a config from an environment lookup and the flags after the
    /// program name.
    pub fn from_sources<F>(env: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = env("REDIS_HOST") {
            config.redis_host = host;
        }
        if let Some(port) = env("REDIS_PORT") {
            config.redis_port = port
                .parse()
                .with_context(|| format!("REDIS_PORT is not a valid port: {}", port))?;
        }
        if let Some(bind) = env("REDIS_MAP_BIND") {
            config.bind = bind
                .parse()
                .with_context(|| format!("REDIS_MAP_BIND is not a socket address: {}", bind))?;
        }
        if let Some(backend) = env("REDIS_MAP_BACKEND") {
            config.backend = backend.parse().context("REDIS_MAP_BACKEND")?;
        }
        if let Some(demo) = env("REDIS_MAP_DEMO") {
            config.run_demo = demo
                .parse()
                .with_context(|| format!("REDIS_MAP_DEMO must be true or false: {}", demo))?;
        }

        config.apply_args(args)?;
        Ok(config)
    }

    fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--redis-host" => {
                    self.redis_host = flag_value(args, i)?.to_string();
                    i += 2;
                }
                "--redis-port" => {
                    let raw = flag_value(args, i)?;
                    self.redis_port = raw
                        .parse()
                        .with_context(|| format!("--redis-port is not a valid port: {}", raw))?;
                    i += 2;
                }
                "--bind" => {
                    let raw = flag_value(args, i)?;
                    self.bind = raw
                        .parse()
                        .with_context(|| format!("--bind is not a socket address: {}", raw))?;
                    i += 2;
                }
                "--backend" => {
                    self.backend = flag_value(args, i)?.parse().context("--backend")?;
                    i += 2;
                }
                "--no-demo" => {
                    self.run_demo = false;
                    i += 1;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(())
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} requires a value", args[i]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(|_| None, &[]).unwrap();

        assert_eq!(config.redis_host, DEFAULT_REDIS_HOST);
        assert_eq!(config.redis_port, DEFAULT_REDIS_PORT);
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(config.backend, Backend::Redis);
        assert!(config.run_demo);
        assert_eq!(config.redis_url(), "redis://127.0.0.1:6379/");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let env = env_from(&[
            ("REDIS_HOST", "cache.internal"),
            ("REDIS_PORT", "6380"),
            ("REDIS_MAP_BACKEND", "Memory"),
            ("REDIS_MAP_DEMO", "false"),
        ]);
        let config = Config::from_sources(env, &[]).unwrap();

        assert_eq!(config.redis_url(), "redis://cache.internal:6380/");
        assert_eq!(config.backend, Backend::Memory);
        assert!(!config.run_demo);
    }

    #[test]
    fn test_flags_override_environment() {
        let env = env_from(&[("REDIS_HOST", "from-env"), ("REDIS_PORT", "1111")]);
        let config = Config::from_sources(
            env,
            &args(&[
                "--redis-host",
                "from-flag",
                "--bind",
                "0.0.0.0:9000",
                "--no-demo",
            ]),
        )
        .unwrap();

        assert_eq!(config.redis_host, "from-flag");
        assert_eq!(config.redis_port, 1111);
        assert_eq!(config.bind.port(), 9000);
        assert!(!config.run_demo);
    }

    #[test]
    fn test_unknown_flags_are_skipped() {
        let config =
            Config::from_sources(|_| None, &args(&["--verbose", "--redis-port", "7000"])).unwrap();
        assert_eq!(config.redis_port, 7000);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_sources(|_| None, &args(&["--redis-port", "seventy"])).is_err());
        assert!(Config::from_sources(|_| None, &args(&["--redis-port", "70000"])).is_err());
        assert!(Config::from_sources(|_| None, &args(&["--bind", "localhost"])).is_err());
        assert!(Config::from_sources(|_| None, &args(&["--backend", "sled"])).is_err());
        assert!(Config::from_sources(env_from(&[("REDIS_MAP_DEMO", "yes")]), &[]).is_err());
    }

    #[test]
    fn test_flag_without_value_is_an_error() {
        let err = Config::from_sources(|_| None, &args(&["--bind"])).unwrap_err();
        assert!(err.to_string().contains("--bind requires a value"));
    }
}
