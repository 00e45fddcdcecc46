use crate::geometry::consts::{DEFAULT_MAX_REJECTION_ATTEMPTS, MAX_TRIANGULATION_DRAWS};
use geo::{Area, BoundingRect, Contains, MultiPolygon, Point, Rect, Triangle, TriangulateEarcut};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SamplingConfig {
    pub max_rejection_attempts: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_rejection_attempts: DEFAULT_MAX_REJECTION_ATTEMPTS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SamplingStrategy {
    Rejection { attempts: u32 },
    Triangulation,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    pub point: Point<f64>,
    pub strategy: SamplingStrategy,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SamplingError {
    EmptyGeometry,
    ZeroArea,
    NoInteriorPoint,
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingError::EmptyGeometry => write!(f, "the geometry has no coordinates"),
            SamplingError::ZeroArea => write!(f, "the geometry encloses no area"),
            SamplingError::NoInteriorPoint => {
                write!(f, "no triangle draw landed inside the geometry")
            }
        }
    }
}

impl std::error::Error for SamplingError {}

/// Draws a point uniformly distributed over the interior of `area`.
///
/// Points are drawn from the bounding box until one lands strictly inside the area (holes
/// excluded). If `config.max_rejection_attempts` draws all miss, the area is triangulated and
/// the point is drawn from a triangle picked with probability proportional to its area, which
/// keeps the distribution uniform. Triangle draws on an edge, or in a triangle that a
/// self-intersecting ring put outside the area, are drawn again.
pub fn random_point_in<R>(
    area: &MultiPolygon<f64>,
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<Sample, SamplingError>
where
    R: Rng + ?Sized,
{
    let bbox = area.bounding_rect().ok_or(SamplingError::EmptyGeometry)?;
    for attempt in 1..=config.max_rejection_attempts {
        let candidate = random_point_in_rect(&bbox, rng);
        if area.contains(&candidate) {
            return Ok(Sample {
                point: candidate,
                strategy: SamplingStrategy::Rejection { attempts: attempt },
            });
        }
    }
    tracing::warn!(
        attempts = config.max_rejection_attempts,
        "Rejection sampling gave up, falling back to triangulation."
    );
    let point = random_point_by_triangulation(area, rng)?;
    Ok(Sample {
        point,
        strategy: SamplingStrategy::Triangulation,
    })
}

fn random_point_in_rect<R>(rect: &Rect<f64>, rng: &mut R) -> Point<f64>
where
    R: Rng + ?Sized,
{
    let min = rect.min();
    let max = rect.max();
    Point::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y))
}

fn random_point_by_triangulation<R>(
    area: &MultiPolygon<f64>,
    rng: &mut R,
) -> Result<Point<f64>, SamplingError>
where
    R: Rng + ?Sized,
{
    let triangles: Vec<Triangle<f64>> = area
        .0
        .iter()
        .flat_map(|polygon| polygon.earcut_triangles())
        .collect();
    let weights: Vec<f64> = triangles.iter().map(|t| t.unsigned_area()).collect();
    // Fails when there are no triangles or all of them are degenerate.
    let picker = WeightedIndex::<f64>::new(&weights).map_err(|_| SamplingError::ZeroArea)?;
    for _ in 0..MAX_TRIANGULATION_DRAWS {
        let candidate = random_point_in_triangle(&triangles[picker.sample(rng)], rng);
        if area.contains(&candidate) {
            return Ok(candidate);
        }
    }
    Err(SamplingError::NoInteriorPoint)
}

fn random_point_in_triangle<R>(triangle: &Triangle<f64>, rng: &mut R) -> Point<f64>
where
    R: Rng + ?Sized,
{
    let [a, b, c] = triangle.to_array();
    let mut u: f64 = rng.gen();
    let mut v: f64 = rng.gen();
    // Fold the far half of the parallelogram back onto the triangle.
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }
    Point::new(
        a.x + u * (b.x - a.x) + v * (c.x - a.x),
        a.y + u * (b.y - a.y) + v * (c.y - a.y),
    )
}
