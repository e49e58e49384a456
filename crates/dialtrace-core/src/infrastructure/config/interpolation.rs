use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("Required environment variable not found: {0}")]
    RequiredVarNotFound(String),

    #[error("Recursive interpolation limit exceeded")]
    RecursionLimit,
}

pub type InterpolationResult<T> = Result<T, InterpolationError>;

const MAX_RECURSION_DEPTH: usize = 10;

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("Invalid regex pattern")
});

/// Expands `${VAR}` and `${VAR:-default}` from the process environment.
pub fn interpolate(input: &str) -> InterpolationResult<String> {
    interpolate_with(input, &|name| std::env::var(name).ok(), 0)
}

fn interpolate_with(
    input: &str,
    lookup: &dyn Fn(&str) -> Option<String>,
    depth: usize,
) -> InterpolationResult<String> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(InterpolationError::RecursionLimit);
    }

    let mut result = String::with_capacity(input.len());
    let mut last = 0;

    for cap in VAR_PATTERN.captures_iter(input) {
        let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };

        let replacement = match lookup(var_name.as_str()) {
            Some(value) => value,
            None => match cap.get(2) {
                Some(default) => interpolate_with(default.as_str(), lookup, depth + 1)?,
                None => {
                    return Err(InterpolationError::RequiredVarNotFound(
                        var_name.as_str().to_string(),
                    ));
                }
            },
        };

        result.push_str(&input[last..full_match.start()]);
        result.push_str(&replacement);
        last = full_match.end();
    }

    result.push_str(&input[last..]);
    Ok(result)
}

pub fn interpolate_toml(value: &mut toml::Value) -> InterpolationResult<()> {
    match value {
        toml::Value::String(s) => {
            *s = interpolate(s)?;
        }
        toml::Value::Array(arr) => {
            for item in arr {
                interpolate_toml(item)?;
            }
        }
        toml::Value::Table(table) => {
            for (_, v) in table.iter_mut() {
                interpolate_toml(v)?;
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(name: &str) -> Option<String> {
        match name {
            "DIALTRACE_TEST_HOST" => Some("0.0.0.0".to_string()),
            "DIALTRACE_TEST_PORT" => Some("5000".to_string()),
            _ => None,
        }
    }

    fn expand(input: &str) -> InterpolationResult<String> {
        interpolate_with(input, &vars, 0)
    }

    #[test]
    fn test_simple_var() {
        assert_eq!(expand("${DIALTRACE_TEST_HOST}").unwrap(), "0.0.0.0");
    }

    #[test]
    fn test_multiple_vars_with_text() {
        assert_eq!(
            expand("${DIALTRACE_TEST_HOST}:${DIALTRACE_TEST_PORT}/").unwrap(),
            "0.0.0.0:5000/"
        );
    }

    #[test]
    fn test_missing_var_error() {
        assert!(matches!(
            expand("${DIALTRACE_TEST_MISSING}"),
            Err(InterpolationError::RequiredVarNotFound(name)) if name == "DIALTRACE_TEST_MISSING"
        ));
    }

    #[test]
    fn test_default_value() {
        assert_eq!(expand("${DIALTRACE_TEST_MISSING:-fallback}").unwrap(), "fallback");
        assert_eq!(expand("key=${DIALTRACE_TEST_MISSING:-}").unwrap(), "key=");
    }

    #[test]
    fn test_interpolate_toml_tables() {
        let mut value: toml::Value = toml::from_str(
            r#"
            [server]
            bind_addr = "${DIALTRACE_TEST_UNSET_BIND:-127.0.0.1:5000}"
            "#,
        )
        .unwrap();

        interpolate_toml(&mut value).unwrap();

        assert_eq!(value["server"]["bind_addr"].as_str(), Some("127.0.0.1:5000"));
    }
}
