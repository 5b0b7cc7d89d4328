//! Server settings read from the environment.
//!
//! | Variable           | Default      |
//! |--------------------|--------------|
//! | `AMEN_BIND`        | `0.0.0.0`    |
//! | `AMEN_PORT`        | `5000`       |
//! | `AMEN_ENV`         | `Production` |
//! | `ALLOWED_ORIGIN`   | unset        |
//! | `AMEN_DATASET_DIR` | unset        |

use amen_core::{Error, Result};
use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

pub const BIND_ENV: &str = "AMEN_BIND";
pub const PORT_ENV: &str = "AMEN_PORT";
pub const ENVIRONMENT_ENV: &str = "AMEN_ENV";
pub const ALLOWED_ORIGIN_ENV: &str = "ALLOWED_ORIGIN";
pub const DATASET_DIR_ENV: &str = "AMEN_DATASET_DIR";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ENVIRONMENT: &str = "Production";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Deployment environment name. Only `Development` (any case) changes behavior.
    pub environment: String,
    /// Raw `ALLOWED_ORIGIN` value: `*`, or a comma-separated origin list.
    pub allowed_origin: Option<String>,
    /// Dataset directory; the built-in dataset is used when unset.
    pub dataset_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            allowed_origin: None,
            dataset_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            bind: parse_or(get(BIND_ENV), BIND_ENV, defaults.bind)?,
            port: parse_or(get(PORT_ENV), PORT_ENV, defaults.port)?,
            environment: get(ENVIRONMENT_ENV).map_or(defaults.environment, |v| v.trim().to_string()),
            allowed_origin: get(ALLOWED_ORIGIN_ENV),
            dataset_dir: get(DATASET_DIR_ENV).map(PathBuf::from),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// CORS policy for the configured origins.
    ///
    /// With no origin configured, any origin is allowed in `Development` and
    /// startup fails everywhere else.
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let base = CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(60 * 60));

        match self.allowed_origin.as_deref().map(str::trim) {
            None | Some("") => {
                if self.is_development() {
                    info!("{ALLOWED_ORIGIN_ENV} not set, allowing any origin in Development");
                    Ok(base.allow_origin(Any))
                } else {
                    Err(Error::Config(format!(
                        "{ALLOWED_ORIGIN_ENV} must be set outside Development \
                         (e.g. https://encourager.example.com); environment is '{}'",
                        self.environment
                    )))
                }
            },
            Some("*") => {
                warn!("CORS is configured with wildcard (*); not recommended for production");
                Ok(base.allow_origin(Any))
            },
            Some(list) => {
                let origins = parse_origins(list)?;
                info!("CORS allows {} origin(s)", origins.len());
                Ok(base.allow_origin(AllowOrigin::list(origins)))
            },
        }
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid {key} value '{value}': {e}")))
    })
}

fn parse_origins(list: &str) -> Result<Vec<HeaderValue>> {
    let origins = list
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| Error::Config(format!("Invalid origin '{origin}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    if origins.is_empty() {
        return Err(Error::Config(format!(
            "{ALLOWED_ORIGIN_ENV} contains no origins"
        )));
    }
    Ok(origins)
}
