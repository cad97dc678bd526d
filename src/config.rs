use std::net::{IpAddr, Ipv4Addr, SocketAddr};


pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);


#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Fixed seed for route jitter; `None` draws from OS entropy.
    pub route_seed: Option<u64>
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            route_seed: None
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT` and `ROUTE_SEED` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();

        Ok(Self {
            host: parse(&lookup, "HOST", "an IP address")?.unwrap_or(defaults.host),
            port: parse(&lookup, "PORT", "an integer in range 0-65535")?.unwrap_or(defaults.port),
            route_seed: parse(&lookup, "ROUTE_SEED", "an unsigned 64-bit integer")?
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}


fn parse<T, F>(lookup: &F, var: &'static str, expected: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, expected, value: raw })
    }
}
