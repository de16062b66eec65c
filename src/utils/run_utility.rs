use log::debug;
use std::process::Command;

use crate::runtime::Error;
use crate::utils::command_to_string;

/// Run an external program to completion and return stdout followed by stderr.
///
/// A program that cannot be started is reported as not executable. A program that exits
/// unsuccessfully has its output printed before the error is returned, so the operator can
/// see what the tool said.
pub fn run_utility(utility: &str, cmd: &mut Command) -> Result<String, Error> {
    let cmd_string = command_to_string(cmd);
    debug!("Running: {}", cmd_string);

    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => {
            debug!("Failed to start {}: {}", utility, e);
            return Err(Error::utility_not_executable(
                cmd.get_program().to_string_lossy(),
            ));
        }
    };

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        println!("{} error:\n{}", utility, combined);
        return Err(Error::utility_execution_error(
            utility,
            cmd_string,
            Some(output.status.to_string()),
        ));
    }

    Ok(combined)
}
