pub mod aggregate;
pub mod badge;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod locate;
pub mod model;
pub mod parsers;
pub mod report;
