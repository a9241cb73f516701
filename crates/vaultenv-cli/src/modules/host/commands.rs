use vaultenv_core::HostError;

pub(crate) fn escape_data(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn escape_property(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            ':' => out.push_str("%3A"),
            ',' => out.push_str("%2C"),
            _ => out.push(ch),
        }
    }
    out
}

/// `::name key=value,...::message`
pub(crate) fn workflow_command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut out = format!("::{name}");
    if !properties.is_empty() {
        let props = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect::<Vec<String>>()
            .join(",");
        out.push(' ');
        out.push_str(&props);
    }
    out.push_str("::");
    out.push_str(&escape_data(message));
    out
}

/// Heredoc entry for the `GITHUB_ENV` file, newline-terminated.
pub(crate) fn env_file_entry(
    name: &str,
    value: &str,
    delimiter: &str,
) -> Result<String, HostError> {
    if name.contains(delimiter) {
        return Err(HostError::DelimiterCollision {
            what: "name",
            delimiter: delimiter.to_string(),
        });
    }
    if value.contains(delimiter) {
        return Err(HostError::DelimiterCollision {
            what: "value",
            delimiter: delimiter.to_string(),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_escaping_keeps_commands_on_one_line() {
        assert_eq!(escape_data("a%b\r\nc"), "a%25b%0D%0Ac");
        assert_eq!(escape_data("plain: text, ok"), "plain: text, ok");
    }

    #[test]
    fn property_escaping_covers_separators() {
        assert_eq!(escape_property("a:b,c%\n"), "a%3Ab%2Cc%25%0A");
    }

    #[test]
    fn workflow_command_formats() {
        assert_eq!(workflow_command("add-mask", &[], "s3cr3t"), "::add-mask::s3cr3t");
        assert_eq!(
            workflow_command("set-env", &[("name", "A:B")], "line1\nline2"),
            "::set-env name=A%3AB::line1%0Aline2"
        );
    }

    #[test]
    fn env_file_entry_uses_heredoc() {
        let entry = env_file_entry("TOKEN", "multi\nline", "ghadelimiter_x").expect("entry");
        assert_eq!(entry, "TOKEN<<ghadelimiter_x\nmulti\nline\nghadelimiter_x\n");
    }

    #[test]
    fn env_file_entry_rejects_delimiter() {
        let err = env_file_entry("TOKEN", "x ghadelimiter_x", "ghadelimiter_x")
            .expect_err("collision");
        assert!(matches!(
            err,
            HostError::DelimiterCollision { what: "value", .. }
        ));
    }
}
