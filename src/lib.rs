pub mod api;
pub mod calendar;
pub mod cli;
pub mod core;
pub mod downloads;
pub mod jobs;
pub mod update;
pub mod web;
