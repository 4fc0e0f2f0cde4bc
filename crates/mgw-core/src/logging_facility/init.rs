//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility. Logs go
//! to stderr so they never interleave with the REPL's stdout.

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Human-readable, errors only; the interactive default
    Quiet,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "mgw=debug,moneygowhere=debug",
            Profile::Production => "mgw=info,moneygowhere=info",
            Profile::Quiet => "mgw=error,moneygowhere=error",
            Profile::Test => "off",
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "quiet" => Ok(Profile::Quiet),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log profile: {}", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
}

/// Initialize the logging facility
///
/// This function should be called once at application startup.
/// It sets up the tracing subscriber based on the selected profile.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Quiet**: Human-readable logs, errors only
/// - **Test**: Capture mode for test assertions
///
/// # Example
///
/// ```
/// use mgw_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development | Profile::Quiet => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Test => {
            // Test capture is initialized separately via init_test_capture()
            tracing_subscriber::registry().init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("quiet".parse::<Profile>(), Ok(Profile::Quiet));
        assert_eq!("Development".parse::<Profile>(), Ok(Profile::Development));
        assert_eq!("prod".parse::<Profile>(), Ok(Profile::Production));
        assert!("loud".parse::<Profile>().is_err());
    }

    #[test]
    fn test_default_filters_cover_both_targets() {
        for profile in [Profile::Development, Profile::Production, Profile::Quiet] {
            let filter = profile.default_filter();
            assert!(filter.contains("mgw="), "{:?}", profile);
            assert!(filter.contains("moneygowhere="), "{:?}", profile);
        }
    }
}
