use anyhow::bail;
use geo::MultiPolygon;

#[derive(Clone, Debug)]
pub struct City {
    pub name: String,
    /// Longitude on `x`, latitude on `y`.
    pub area: MultiPolygon<f64>,
}

/// Non-empty, read-only collection of cities.
#[derive(Debug)]
pub struct Dataset {
    cities: Vec<City>,
}

impl Dataset {
    pub fn new(cities: Vec<City>) -> anyhow::Result<Self> {
        if cities.is_empty() {
            bail!("The dataset contains no usable cities.");
        }
        Ok(Self { cities })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn get(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }
}

#[cfg(test)]
impl Dataset {
    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}
