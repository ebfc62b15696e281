//! Infrastructure layer - process-level concerns around the domain

pub mod logging;
