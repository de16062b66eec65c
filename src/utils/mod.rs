mod command_to_string;
mod detect_software;
mod path_utils;
mod run_utility;

pub use detect_software::check_mixcr_version;
pub use detect_software::get_mixcr_version;

pub use path_utils::expand_path;

pub use command_to_string::command_to_string;
pub use run_utility::run_utility;
