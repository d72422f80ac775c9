/// Main configuration module.
///
/// Re-exports the server configuration submodule.
pub mod server;
