//! Runtime configuration read from environment variables

use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "tasks.json";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding the task collection
    pub data_file: PathBuf,
    pub addr: SocketAddr,
    /// Reject PATCH requests that carry none of the mutable fields
    pub patch_requires_field: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let data_file = lookup("TODO_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let host = lookup("TODO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .trim()
            .parse()
            .with_context(|| format!("invalid TODO_HOST `{}`", host))?;

        let port = match lookup("TODO_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid TODO_PORT `{}`", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            data_file,
            addr: SocketAddr::new(host, port),
            patch_requires_field: flag(lookup("TODO_PATCH_REQUIRES_FIELD"), false),
        })
    }
}

fn flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
