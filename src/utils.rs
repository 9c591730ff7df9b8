use serde::Serialize;

/// Body of every non-2xx JSON response: `{"success": false, "error": "..."}`.
/// The HTTP status code is the machine-readable signal; `error` is the
/// human-readable one.
#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Walk and print the chain of causes of an error. Used to implement `Debug`
/// on route error enums, so logs carry the full chain while the client sees
/// only `Display`.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}
