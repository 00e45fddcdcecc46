use crate::dataset::source::DatasetSource;
use crate::geometry::consts::DEFAULT_MAX_REJECTION_ATTEMPTS;
use crate::storage::consts::DEFAULT_SESSION_IDLE_TIMEOUT_SECS;
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Parser)]
#[command(about = "Serves a satellite imagery city guessing game.")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// GeoJSON feature collection of city polygons: an `http(s)://` URL or a file path.
    #[arg(long)]
    #[arg(default_value = "cities.geojson")]
    pub cities: DatasetSource,
    /// Feature property holding the city's display name.
    #[arg(long)]
    #[arg(default_value = "NAME")]
    pub name_property: String,
    /// Bounding-box draws per round before falling back to triangulation.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_MAX_REJECTION_ATTEMPTS)]
    pub max_sampling_attempts: u32,
    /// Seconds a session may go untouched before it is dropped.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_SESSION_IDLE_TIMEOUT_SECS)]
    pub session_idle_timeout: u64,
    /// CORS origins allowed to call the API, comma separated.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    /// Used when `RUST_LOG` is not set.
    #[arg(long)]
    #[arg(default_value = "satellite_guess_server=info")]
    pub log_filter: String,
}
