pub mod timesheet_model;
pub mod timesheet_repository;
pub mod timesheet_service;
pub mod timesheet_traits;

pub use timesheet_model::{NewTimeEntry, TimeEntry};
pub use timesheet_repository::TimeEntryRepository;
pub use timesheet_service::TimeEntryService;
pub use timesheet_traits::{TimeEntryRepositoryTrait, TimeEntryServiceTrait};
