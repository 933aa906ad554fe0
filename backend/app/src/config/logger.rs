use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct LoggerConfig {
    /// EnvFilter directive, e.g. `info,sea_orm=warn`.
    level: Option<String>,
    /// Colored output; off when logs go to a file or collector.
    ansi: Option<bool>,
}

impl LoggerConfig {
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn ansi(&self) -> bool {
        self.ansi.unwrap_or(true)
    }
}
