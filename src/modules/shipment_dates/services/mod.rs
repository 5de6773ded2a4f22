pub mod rollup_service;

pub use rollup_service::RollupService;
