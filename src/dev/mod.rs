/// Development utilities module
///
/// Offline stand-ins for the ESPN client, used by tests and by the
/// `--mock` flag of development builds.

pub mod mock_client;
