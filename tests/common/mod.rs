use std::path::Path;
use std::sync::Arc;

use lextime_core::evaluation::{EvaluationService, GoalHistoryRepository};
use lextime_core::goals::{GoalRepository, GoalService};
use lextime_core::storage::FileDocumentStore;
use lextime_core::timesheet::{TimeEntryRepository, TimeEntryService};

pub type Timesheet = TimeEntryService<TimeEntryRepository<FileDocumentStore>>;
pub type Goals = GoalService<GoalRepository<FileDocumentStore>, Timesheet>;
pub type Evaluation =
    EvaluationService<GoalRepository<FileDocumentStore>, GoalHistoryRepository<FileDocumentStore>>;

/// Full service stack over a file-backed store rooted at `base_dir`.
pub struct TestContext {
    pub timesheet: Arc<Timesheet>,
    pub goal_service: Arc<Goals>,
    pub evaluation: Arc<Evaluation>,
}

impl TestContext {
    pub fn new(base_dir: &Path) -> Self {
        let store = Arc::new(FileDocumentStore::new(base_dir).unwrap());
        let goal_repo = Arc::new(GoalRepository::new(store.clone()));
        let entry_repo = Arc::new(TimeEntryRepository::new(store.clone()));
        let timesheet = Arc::new(TimeEntryService::new(entry_repo));
        let goal_service = Arc::new(GoalService::new(goal_repo.clone(), timesheet.clone()));
        let history_repo = Arc::new(GoalHistoryRepository::new(store));
        let evaluation = Arc::new(EvaluationService::new(goal_repo, history_repo));

        TestContext {
            timesheet,
            goal_service,
            evaluation,
        }
    }
}
