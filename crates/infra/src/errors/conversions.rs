//! Conversions from external infrastructure errors into domain errors.

use contactsync_domain::ContactSyncError;
use reqwest::Error as HttpError;
use sqlx::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ContactSyncError);

impl From<InfraError> for ContactSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ContactSyncError> for InfraError {
    fn from(value: ContactSyncError) -> Self {
        InfraError(value)
    }
}

trait IntoContactSyncError {
    fn into_contactsync(self) -> ContactSyncError;
}

/* -------------------------------------------------------------------------- */
/* sqlx::Error → ContactSyncError */
/* -------------------------------------------------------------------------- */

impl IntoContactSyncError for SqlError {
    fn into_contactsync(self) -> ContactSyncError {
        match self {
            SqlError::RowNotFound => ContactSyncError::NotFound("no rows returned by query".into()),
            SqlError::PoolTimedOut => {
                ContactSyncError::Database("timed out acquiring a pooled connection".into())
            }
            SqlError::PoolClosed => ContactSyncError::Database("connection pool is closed".into()),
            SqlError::Io(err) => ContactSyncError::Database(format!("datastore I/O failure: {err}")),
            SqlError::Tls(err) => ContactSyncError::Database(format!("datastore TLS failure: {err}")),
            SqlError::Configuration(err) => {
                ContactSyncError::Config(format!("invalid datastore configuration: {err}"))
            }
            SqlError::ColumnNotFound(column) => {
                ContactSyncError::Database(format!("column not found: {column}"))
            }
            SqlError::ColumnDecode { index, source } => {
                ContactSyncError::Database(format!("failed to decode column {index}: {source}"))
            }
            SqlError::Database(err) => match err.code() {
                Some(code) => ContactSyncError::Database(format!("mysql error {code}: {}", err.message())),
                None => ContactSyncError::Database(err.message().to_string()),
            },
            other => ContactSyncError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_contactsync())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ContactSyncError */
/* -------------------------------------------------------------------------- */

impl IntoContactSyncError for HttpError {
    fn into_contactsync(self) -> ContactSyncError {
        if self.is_timeout() {
            return ContactSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ContactSyncError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return ContactSyncError::Internal(format!("invalid HTTP request: {self}"));
        }

        ContactSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_contactsync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
