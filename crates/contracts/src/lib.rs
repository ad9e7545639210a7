pub mod domain;
pub mod stats;
