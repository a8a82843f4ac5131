//! Test configuration constants.

/// User agent sent by the test HTTP client to the mock feed server.
pub static TEST_USER_AGENT: &str = "flightdeck-tests/1.0 (ops@example.com)";

/// Path the mock server serves the VATSIM data feed at.
pub static VATSIM_FEED_PATH: &str = "/vatsim-data.json";

/// Path the mock server serves the IVAO whazzup feed at.
pub static IVAO_FEED_PATH: &str = "/whazzup";
