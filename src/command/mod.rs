pub mod analyze;
pub mod preflight;
pub mod prepare;

pub use analyze::Analyze;
pub use analyze::AnalyzeParams;

pub use prepare::MixcrHome;
pub use prepare::Prepare;
pub use prepare::PrepareParams;

pub use preflight::check_inputs;
