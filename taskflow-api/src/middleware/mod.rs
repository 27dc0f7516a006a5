/// Middleware modules for the API server
///
/// - `security`: OWASP security response headers

pub mod security;
