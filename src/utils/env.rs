use std::{env, str::FromStr};

/// Reads `key` from the environment, falling back to `default`, then to
/// the type's default when neither parses.
pub fn parse_env<T>(key: &str, default: &str) -> T
where
    T: FromStr + Default,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_owned());
    raw.parse().unwrap_or_default()
}

/// Like [`parse_env`] but unset, empty and unparseable all mean `None`.
pub fn parse_env_opt<T: FromStr>(key: &str) -> Option<T> {
    match env::var(key) {
        Ok(v) if !v.is_empty() => v.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_env_returns_value() {
        let key = "CAMPUS_TEST_PARSE_ENV_VALUE";
        unsafe {
            env::set_var(key, "42");
        }
        assert_eq!(parse_env::<u32>(key, "0"), 42);
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_env_returns_default_when_missing() {
        let key = "CAMPUS_TEST_PARSE_ENV_MISSING";
        unsafe {
            env::remove_var(key);
        }
        assert_eq!(parse_env::<u32>(key, "7"), 7);
    }

    #[test]
    fn test_parse_env_opt_none_when_unset() {
        let key = "CAMPUS_TEST_PARSE_ENV_OPT_UNSET";
        unsafe {
            env::remove_var(key);
        }
        assert_eq!(parse_env_opt::<u32>(key), None);
    }

    #[test]
    fn test_parse_env_opt_none_when_empty() {
        let key = "CAMPUS_TEST_PARSE_ENV_OPT_EMPTY";
        unsafe {
            env::set_var(key, "");
        }
        assert_eq!(parse_env_opt::<u32>(key), None);
        unsafe {
            env::remove_var(key);
        }
    }
}
