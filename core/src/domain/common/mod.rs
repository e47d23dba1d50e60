pub mod entities;

#[derive(Clone, Debug)]
pub struct FloorplanConfig {
    pub database: DatabaseConfig,
    pub geocoder: GeocoderConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct GeocoderConfig {
    pub base_url: String,
}
