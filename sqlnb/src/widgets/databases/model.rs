use std::fmt;

use serde::{Deserialize, Serialize};

/// Database engine behind a connection. Unknown kinds are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub(crate) enum ConnectionKind {
    Sqlite,
    Postgres,
    Other(String),
}

impl ConnectionKind {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            ConnectionKind::Sqlite => "sqlite",
            ConnectionKind::Postgres => "postgres",
            ConnectionKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ConnectionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sqlite" => ConnectionKind::Sqlite,
            "postgres" => ConnectionKind::Postgres,
            _ => ConnectionKind::Other(value),
        }
    }
}

impl From<ConnectionKind> for String {
    fn from(value: ConnectionKind) -> Self {
        match value {
            ConnectionKind::Other(kind) => kind,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the connection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Connection {
    pub(crate) name: String,
    pub(crate) kind: ConnectionKind,
}

impl Connection {
    pub(crate) fn new(name: impl Into<String>, kind: ConnectionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Read-only view model for the databases pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DatabasesViewModel<'a> {
    pub(crate) connections: &'a [Connection],
}
