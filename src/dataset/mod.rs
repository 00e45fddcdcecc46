use crate::cli::Args;
use anyhow::{bail, Context};
use geo::{Area, Coord, LineString, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson, Value};
use models::{City, Dataset};
use serde::{Deserialize, Serialize};
use source::DatasetSource;
use std::sync::{Arc, OnceLock};

pub mod models;
pub mod source;

/// Process-wide slot the dataset is published into once it has loaded.
#[derive(Clone, Default)]
pub struct DatasetCell {
    dataset: Arc<OnceLock<Dataset>>,
    failure: Arc<OnceLock<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DatasetStatus {
    Loading,
    Loaded { cities: usize },
    Failed { reason: String },
}

impl DatasetCell {
    pub fn get(&self) -> Option<&Dataset> {
        self.dataset.get()
    }

    /// Returns `false` if a dataset was already published.
    pub fn publish(&self, dataset: Dataset) -> bool {
        self.dataset.set(dataset).is_ok()
    }

    pub fn fail(&self, reason: String) {
        let _ = self.failure.set(reason);
    }

    pub fn status(&self) -> DatasetStatus {
        if let Some(dataset) = self.dataset.get() {
            return DatasetStatus::Loaded {
                cities: dataset.len(),
            };
        }
        match self.failure.get() {
            Some(reason) => DatasetStatus::Failed {
                reason: reason.clone(),
            },
            None => DatasetStatus::Loading,
        }
    }
}

/// Starts loading the dataset in the background. The game stays in its loading state until the
/// dataset is published; a failed load is logged and never retried.
pub fn init(args: &Args, cell: DatasetCell) {
    let source = args.cities.clone();
    let name_property = args.name_property.clone();
    tokio::spawn(async move {
        match load(&source, &name_property).await {
            Ok(dataset) => {
                let cities = dataset.len();
                if cell.publish(dataset) {
                    tracing::info!(
                        task = "dataset_load",
                        source = %source,
                        cities,
                        "Loaded the city dataset."
                    );
                } else {
                    tracing::warn!(
                        task = "dataset_load",
                        source = %source,
                        "A city dataset was already published, discarding the new one."
                    );
                }
            }
            Err(err) => {
                tracing::error!(
                    task = "dataset_load",
                    source = %source,
                    error = %format!("{err:#}"),
                    "Failed to load the city dataset, the game can't be played."
                );
                cell.fail(format!("{err:#}"));
            }
        }
    });
}

pub async fn load(source: &DatasetSource, name_property: &str) -> anyhow::Result<Dataset> {
    let raw = source.fetch().await?;
    parse(&raw, name_property).with_context(|| format!("Failed to parse `{source}`."))
}

/// Parses a GeoJSON feature collection, taking each city's name from the `name_property`
/// property. Features that can't be played are skipped.
pub fn parse(raw: &str, name_property: &str) -> anyhow::Result<Dataset> {
    let geojson: GeoJson = raw.parse().context("The dataset is not valid GeoJSON.")?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        bail!("The dataset must be a GeoJSON feature collection.");
    };
    let mut cities = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.iter().enumerate() {
        if let Some(city) = city_from_feature(index, feature, name_property)? {
            cities.push(city);
        }
    }
    Dataset::new(cities)
}

fn city_from_feature(
    index: usize,
    feature: &Feature,
    name_property: &str,
) -> anyhow::Result<Option<City>> {
    let Some(name) = feature
        .property(name_property)
        .and_then(|value| value.as_str())
    else {
        tracing::warn!(
            task = "dataset_load",
            feature = index,
            "Skipping a feature without a `{}` property.",
            name_property
        );
        return Ok(None);
    };
    let area = match feature.geometry.as_ref().map(|geometry| &geometry.value) {
        Some(Value::Polygon(rings)) => MultiPolygon::new(vec![polygon_from_rings(rings)?]),
        Some(Value::MultiPolygon(polygons)) => MultiPolygon::new(
            polygons
                .iter()
                .map(|rings| polygon_from_rings(rings))
                .collect::<anyhow::Result<Vec<_>>>()?,
        ),
        _ => {
            tracing::warn!(
                task = "dataset_load",
                feature = index,
                city = name,
                "Skipping a feature without a polygonal geometry."
            );
            return Ok(None);
        }
    };
    if area.unsigned_area() <= 0.0 {
        tracing::warn!(
            task = "dataset_load",
            feature = index,
            city = name,
            "Skipping a polygon that encloses no area."
        );
        return Ok(None);
    }
    Ok(Some(City {
        name: name.to_string(),
        area,
    }))
}

fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> anyhow::Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| line_string_from_positions(ring));
    let exterior = rings.next().transpose()?.unwrap_or_else(|| LineString::new(vec![]));
    let interiors = rings.collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn line_string_from_positions(positions: &[Vec<f64>]) -> anyhow::Result<LineString<f64>> {
    positions
        .iter()
        .map(|position| match position.as_slice() {
            [lng, lat, ..] => Ok(Coord { x: *lng, y: *lat }),
            _ => bail!("A position must hold at least a longitude and a latitude."),
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .map(LineString::new)
}
