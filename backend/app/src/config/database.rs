use serde::Deserialize;

/// Either a full `url` or its parts. The url wins when both are set.
#[derive(Debug, Deserialize, Default)]
pub struct DatabaseConfig {
    url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    database: Option<String>,
    schema: Option<String>,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return url.to_string();
        }

        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username(),
            self.password(),
            self.host(),
            self.port(),
            self.database()
        )
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("localhost")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(5432)
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("postgres")
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }

    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or("assets")
    }

    pub fn schema(&self) -> &str {
        self.schema.as_deref().unwrap_or("public")
    }
}
