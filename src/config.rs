use std::{env, time::Duration};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_DELAY_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// pause between pages in all-pages mode
    pub page_delay: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_delay: Duration::from_secs(DEFAULT_PAGE_DELAY_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_delay = match lookup("TD_PAGE_DELAY_SECS") {
            Some(secs) => {
                log::info!("Using page delay from TD_PAGE_DELAY_SECS: {}", secs);
                Duration::from_secs(parse_secs("TD_PAGE_DELAY_SECS", &secs)?)
            }
            None => {
                log::info!("Using default page delay: {}s", DEFAULT_PAGE_DELAY_SECS);
                Duration::from_secs(DEFAULT_PAGE_DELAY_SECS)
            }
        };
        let connect_timeout = match lookup("TD_CONNECT_TIMEOUT_SECS") {
            Some(secs) => {
                log::info!("Using connect timeout from TD_CONNECT_TIMEOUT_SECS: {}", secs);
                Duration::from_secs(parse_secs("TD_CONNECT_TIMEOUT_SECS", &secs)?)
            }
            None => Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let user_agent = match lookup("TD_USER_AGENT") {
            Some(agent) if !agent.trim().is_empty() => agent,
            _ => default_user_agent(),
        };

        Ok(AppConfig {
            page_delay,
            connect_timeout,
            user_agent,
        })
    }
}

fn parse_secs(key: &str, value: &str) -> AppResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::invalid_config(key, &e.to_string()))
}

fn default_user_agent() -> String {
    format!("tumblr-download/{}", env!("CARGO_PKG_VERSION"))
}
