use crate::map::widgets::TileSource;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const SATELLITE_ZOOM: u8 = 16;
pub const GUESS_MAP_ZOOM: u8 = 2;
pub const RESULT_MAP_PADDING: [u32; 2] = [50, 50];
pub const RESULT_LINE_COLOR: &str = "red";
pub const ACTUAL_LOCATION_POPUP: &str = "Actual Location";
pub const GUESS_POPUP: &str = "Your Guess";

pub const SATELLITE_TILES: TileSource = TileSource {
    url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
    attribution: "Source: Esri, Maxar, Earthstar Geographics, and the GIS User Community",
    max_zoom: Some(19),
};

pub const BASEMAP_TILES: TileSource = TileSource {
    url: "https://services.arcgisonline.com/ArcGIS/rest/services/Canvas/World_Dark_Gray_Base/MapServer/tile/{z}/{y}/{x}",
    attribution: "&copy; Esri, HERE, Garmin, (c) OpenStreetMap contributors, and the GIS user community",
    max_zoom: None,
};
