use std::borrow::Cow;

/// Render a command the way an operator would type it. Arguments containing whitespace are single-quoted
pub fn command_to_string(cmd: &std::process::Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let mut parts = vec![quote_arg(program)];
    parts.extend(cmd.get_args().map(|arg| quote_arg(arg.to_string_lossy())));
    parts.join(" ")
}

fn quote_arg(arg: Cow<'_, str>) -> String {
    if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        format!("'{}'", arg.replace('\'', "'\\''"))
    } else {
        arg.into_owned()
    }
}
