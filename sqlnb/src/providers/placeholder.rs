use super::{ConnectionProvider, DirectoryProvider, NotebookProvider};
use crate::widgets::databases::{Connection, ConnectionKind};
use crate::widgets::explorer::Entry;
use crate::widgets::notebooks::{NotebookStatus, NotebookSummary};

/// Built-in data shown until a real provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PlaceholderProvider;

impl DirectoryProvider for PlaceholderProvider {
    fn entries(&self) -> Vec<Entry> {
        vec![
            Entry::directory(
                "data",
                vec![Entry::sized_file("info.txt", "2 KB")],
            ),
            Entry::directory(
                "static",
                vec![Entry::sized_file("logo.png", "12 KB")],
            ),
            Entry::file("scratch.sql"),
            Entry::sized_file("README.md", "1 KB"),
        ]
    }
}

impl NotebookProvider for PlaceholderProvider {
    fn notebooks(&self) -> Vec<NotebookSummary> {
        vec![
            NotebookSummary::new("sales.sql.nb", NotebookStatus::Running),
            NotebookSummary::new("scratch.sql.nb", NotebookStatus::Stopped),
        ]
    }
}

impl ConnectionProvider for PlaceholderProvider {
    fn connections(&self) -> Vec<Connection> {
        vec![
            Connection::new("local", ConnectionKind::Sqlite),
            Connection::new("warehouse", ConnectionKind::Postgres),
        ]
    }
}
