use crate::cli::Args;
use crate::dataset::DatasetCell;
use crate::game::rounds::RoundGenerator;
use crate::geometry::sampling::SamplingConfig;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;

#[derive(Clone, Default)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub dataset: DatasetCell,
    pub sampling: SamplingConfig,
}

impl<SS> AppContext<SS>
where
    SS: ISessionStorage,
{
    /// `None` until the dataset has loaded.
    pub fn round_generator(&self) -> Option<RoundGenerator<'_>> {
        self.dataset
            .get()
            .map(|dataset| RoundGenerator::new(dataset, self.sampling))
    }
}

pub fn init(args: &Args) -> AppContext<HashMapSessionsStorage> {
    AppContext {
        sessions: HashMapSessionsStorage::default(),
        dataset: DatasetCell::default(),
        sampling: SamplingConfig {
            max_rejection_attempts: args.max_sampling_attempts,
        },
    }
}
