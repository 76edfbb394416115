use crate::error::Error;

pub struct Config {
    pub database_url: String,
    pub sql_logging: bool,
}

impl Config {
    /// Reads `DATABASE_URL` and the optional `DATABASE_SQL_LOGGING` flag.
    pub fn from_env() -> Result<Self, Error> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| Error::MissingEnvVar("DATABASE_URL".to_string()))?;

        let sql_logging = match std::env::var("DATABASE_SQL_LOGGING") {
            Ok(value) => parse_flag("DATABASE_SQL_LOGGING", &value)?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            sql_logging,
        })
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_truthy_and_falsy_flags() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag("FLAG", value).unwrap());
        }
        for value in ["0", "false", "No", "off", ""] {
            assert!(!parse_flag("FLAG", value).unwrap());
        }
    }

    #[test]
    fn rejects_garbage_flag() {
        let result = parse_flag("FLAG", "maybe");

        assert!(matches!(
            result,
            Err(Error::InvalidEnvValue { ref var, .. }) if var == "FLAG"
        ));
    }
}
