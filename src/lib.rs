pub mod author;
pub mod cli;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod rank;
pub mod render;
pub mod report;
pub mod stats;
