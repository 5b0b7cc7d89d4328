//! Serve command implementation

use amen_server::ServerConfig;
use anyhow::{Context, Result};
use std::net::IpAddr;
use std::path::Path;

/// Run the HTTP API until interrupted.
///
/// Settings come from the environment; flags override them.
pub async fn execute(
    dataset_dir: Option<&Path>,
    bind: Option<IpAddr>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = ServerConfig::from_env().context("Invalid server configuration")?;
    apply_overrides(&mut config, dataset_dir, bind, port);
    amen_server::serve(config).await?;
    Ok(())
}

fn apply_overrides(
    config: &mut ServerConfig,
    dataset_dir: Option<&Path>,
    bind: Option<IpAddr>,
    port: Option<u16>,
) {
    if let Some(dir) = dataset_dir {
        config.dataset_dir = Some(dir.to_path_buf());
    }
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if let Some(port) = port {
        config.port = port;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::path::PathBuf;

    #[test]
    fn test_flags_override_environment() {
        let mut config = ServerConfig::default();
        apply_overrides(
            &mut config,
            Some(Path::new("/srv/verses")),
            Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            Some(8080),
        );
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.dataset_dir, Some(PathBuf::from("/srv/verses")));
    }

    #[test]
    fn test_absent_flags_keep_environment() {
        let mut config = ServerConfig {
            port: 9000,
            ..ServerConfig::default()
        };
        apply_overrides(&mut config, None, None, None);
        assert_eq!(config.port, 9000);
        assert!(config.dataset_dir.is_none());
    }
}
