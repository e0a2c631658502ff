use serde::Serialize;

/// Who a verified token speaks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum Principal {
    /// Holder of the shared static secret; carries no user identity.
    Shared,
}
