use worker::Error;

pub(crate) fn into_workers_err(e: impl std::fmt::Display) -> Error {
    Error::RustError(format!("{}", e))
}
