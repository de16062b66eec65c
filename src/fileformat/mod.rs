pub mod run_config;

pub use run_config::AnalysisSettings;
pub use run_config::LocatedFile;
pub use run_config::RunConfig;
