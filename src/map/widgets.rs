//! Declarative descriptions of the three map panes the frontend renders.
//!
//! A [`MapWidget`] is owned by exactly one game session. Replacing or dropping it is the
//! signal for the frontend to tear the pane down, so every widget carries a fresh id.

use crate::map::consts::{
    ACTUAL_LOCATION_POPUP, BASEMAP_TILES, GUESS_MAP_ZOOM, GUESS_POPUP, RESULT_LINE_COLOR,
    RESULT_MAP_PADDING, SATELLITE_TILES, SATELLITE_ZOOM,
};
use crate::map::models::LatLng;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

pub static NEXT_WIDGET_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MapPane {
    Satellite,
    Guess,
    Result,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub zoom_control: bool,
    pub dragging: bool,
    pub scroll_wheel_zoom: bool,
    pub double_click_zoom: bool,
    pub box_zoom: bool,
    pub keyboard: bool,
    pub tap: bool,
    pub touch_zoom: bool,
}

impl Interaction {
    /// Nothing on the pane reacts to the user, so the view can't be panned away from the
    /// location it is meant to hide.
    pub const LOCKED: Self = Self {
        zoom_control: false,
        dragging: false,
        scroll_wheel_zoom: false,
        double_click_zoom: false,
        box_zoom: false,
        keyboard: false,
        tap: false,
        touch_zoom: false,
    };

    pub const FREE: Self = Self {
        zoom_control: true,
        dragging: true,
        scroll_wheel_zoom: true,
        double_click_zoom: true,
        box_zoom: true,
        keyboard: true,
        tap: true,
        touch_zoom: true,
    };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSource {
    pub url: &'static str,
    pub attribution: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u8>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlPosition {
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Layer {
    Marker {
        position: LatLng,
        #[serde(skip_serializing_if = "Option::is_none")]
        popup: Option<&'static str>,
        #[serde(rename = "popupOpen")]
        popup_open: bool,
    },
    Polyline {
        points: Vec<LatLng>,
        color: &'static str,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn around(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            south_west: *first,
            north_east: *first,
        };
        for point in rest {
            bounds.south_west.lat = bounds.south_west.lat.min(point.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(point.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(point.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(point.lng);
        }
        Some(bounds)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitBounds {
    pub bounds: LatLngBounds,
    /// Padding in pixels, `[x, y]`.
    pub padding: [u32; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDescriptor {
    pub id: usize,
    pub pane: MapPane,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
    pub interaction: Interaction,
    pub attribution_position: ControlPosition,
    pub world_copy_jump: bool,
    pub tiles: TileSource,
    pub layers: Vec<Layer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_bounds: Option<FitBounds>,
}

#[derive(Debug)]
pub struct MapWidget {
    descriptor: MapDescriptor,
}

impl MapWidget {
    /// Close-up imagery of the location to guess.
    pub fn satellite(center: LatLng) -> Self {
        Self::new(MapDescriptor {
            id: 0,
            pane: MapPane::Satellite,
            center: Some(center),
            zoom: Some(SATELLITE_ZOOM),
            interaction: Interaction::LOCKED,
            attribution_position: ControlPosition::BottomLeft,
            world_copy_jump: false,
            tiles: SATELLITE_TILES,
            layers: Vec::new(),
            fit_bounds: None,
        })
    }

    /// World map the player clicks on.
    pub fn guess() -> Self {
        Self::new(MapDescriptor {
            id: 0,
            pane: MapPane::Guess,
            center: Some(LatLng::new(0.0, 0.0)),
            zoom: Some(GUESS_MAP_ZOOM),
            interaction: Interaction::FREE,
            attribution_position: ControlPosition::BottomRight,
            world_copy_jump: true,
            tiles: BASEMAP_TILES,
            layers: Vec::new(),
            fit_bounds: None,
        })
    }

    /// Both markers joined by a line, framed so that both stay visible.
    pub fn result(actual: LatLng, guess: LatLng) -> Self {
        let mut widget = Self::new(MapDescriptor {
            id: 0,
            pane: MapPane::Result,
            center: None,
            zoom: None,
            interaction: Interaction::FREE,
            attribution_position: ControlPosition::BottomRight,
            world_copy_jump: false,
            tiles: BASEMAP_TILES,
            layers: Vec::new(),
            fit_bounds: None,
        });
        widget.draw_polyline(vec![actual, guess], RESULT_LINE_COLOR);
        if let Some(bounds) = LatLngBounds::around(&[actual, guess]) {
            widget.fit_bounds(bounds, RESULT_MAP_PADDING);
        }
        widget.place_marker(actual, Some(ACTUAL_LOCATION_POPUP), true);
        widget.place_marker(guess, Some(GUESS_POPUP), false);
        widget
    }

    fn new(mut descriptor: MapDescriptor) -> Self {
        descriptor.id = NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            widget_id = descriptor.id,
            pane = ?descriptor.pane,
            "Created map widget."
        );
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &MapDescriptor {
        &self.descriptor
    }

    pub fn place_marker(&mut self, position: LatLng, popup: Option<&'static str>, popup_open: bool) {
        self.descriptor.layers.push(Layer::Marker {
            position,
            popup,
            popup_open,
        });
    }

    pub fn remove_markers(&mut self) {
        self.descriptor
            .layers
            .retain(|layer| !matches!(layer, Layer::Marker { .. }));
    }

    pub fn draw_polyline(&mut self, points: Vec<LatLng>, color: &'static str) {
        self.descriptor.layers.push(Layer::Polyline { points, color });
    }

    pub fn fit_bounds(&mut self, bounds: LatLngBounds, padding: [u32; 2]) {
        self.descriptor.fit_bounds = Some(FitBounds { bounds, padding });
    }
}

#[cfg(test)]
impl Interaction {
    pub fn is_locked(&self) -> bool {
        *self == Self::LOCKED
    }
}

#[cfg(test)]
impl LatLngBounds {
    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }
}

#[cfg(test)]
impl MapWidget {
    pub fn id(&self) -> usize {
        self.descriptor.id
    }

    pub fn markers(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.descriptor.layers.iter().filter_map(|layer| match layer {
            Layer::Marker { position, .. } => Some(*position),
            Layer::Polyline { .. } => None,
        })
    }
}

impl Drop for MapWidget {
    fn drop(&mut self) {
        tracing::debug!(
            widget_id = self.descriptor.id,
            pane = ?self.descriptor.pane,
            "Removed map widget."
        );
    }
}
