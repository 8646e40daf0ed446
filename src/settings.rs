// settings
use once_cell::sync::Lazy;
use tracing::info;

pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::new);

const HOST: &str = "0.0.0.0";
const PORT: u16 = 3001;

/// Listener settings. These are fixed; nothing is read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
}

impl Settings {
    fn new() -> Self {
        let settings = Settings {
            host: HOST.to_string(),
            port: PORT,
        };
        info!("Settings: listening on {}", settings.addr());
        settings
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listens_on_fixed_port() {
        assert_eq!(SETTINGS.port, 3001);
        assert_eq!(SETTINGS.addr(), "0.0.0.0:3001");
    }
}
