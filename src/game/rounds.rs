use crate::dataset::models::Dataset;
use crate::game::errors::GameError;
use crate::game::models::{Guess, Round};
use crate::geometry::sampling::{self, SamplingConfig};
use crate::map;
use rand::Rng;

/// Picks a random city and a random location inside it.
#[derive(Clone, Copy, Debug)]
pub struct RoundGenerator<'a> {
    dataset: &'a Dataset,
    sampling: SamplingConfig,
}

impl<'a> RoundGenerator<'a> {
    pub fn new(dataset: &'a Dataset, sampling: SamplingConfig) -> Self {
        Self { dataset, sampling }
    }

    pub fn start_round<R>(&self, rng: &mut R) -> Result<Round, GameError>
    where
        R: Rng + ?Sized,
    {
        let city_index = rng.gen_range(0..self.dataset.len());
        let city = self
            .dataset
            .get(city_index)
            .ok_or(GameError::DatasetNotLoaded)?;
        let sample = sampling::random_point_in(&city.area, &self.sampling, rng).map_err(|err| {
            tracing::error!(
                task = "round_started",
                city = %city.name,
                error = %err,
                "Failed to pick a location inside the city."
            );
            GameError::UnsamplableCity
        })?;
        tracing::info!(
            task = "round_started",
            city = %city.name,
            strategy = ?sample.strategy,
            "Started a new round."
        );
        Ok(Round {
            city_index,
            city_name: city.name.clone(),
            true_point: sample.point.into(),
        })
    }
}

/// Distance in kilometers between the round's true location and the guess.
pub fn score(round: &Round, guess: &Guess) -> f64 {
    map::distance_km(round.true_point, guess.point)
}
