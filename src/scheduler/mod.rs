//! Background cron jobs.

pub mod growth_history;
