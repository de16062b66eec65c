pub mod run_cmd;

pub use run_cmd::RunCMD;
pub use run_cmd::USAGE;
