use clap::Parser;
use floorplan_core::domain::common::{DatabaseConfig, FloorplanConfig, GeocoderConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "floorplan-api", about = "Floorplan indoor-map query API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub db: DatabaseArgs,
    #[command(flatten)]
    pub geocoder: GeocoderArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8980)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "floorplan")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "floorplan")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GeocoderArgs {
    #[arg(
        long,
        env = "GEOCODER_BASE_URL",
        default_value = "https://nominatim.openstreetmap.org"
    )]
    pub geocoder_base_url: String,
}

impl From<Args> for FloorplanConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.database_host,
                port: args.db.database_port,
                username: args.db.database_user,
                password: args.db.database_password,
                name: args.db.database_name,
            },
            geocoder: GeocoderConfig {
                base_url: args.geocoder.geocoder_base_url,
            },
        }
    }
}
