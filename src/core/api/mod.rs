pub mod balance;
pub mod calendar;
pub mod dashboard;
pub mod debt_snapshot;
pub mod entries;
pub mod forecast;
pub mod loans;
pub mod payment_records;
pub mod salary_cycle;
pub mod schedules;
pub mod system;
