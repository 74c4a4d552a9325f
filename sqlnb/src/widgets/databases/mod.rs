mod model;
pub(crate) mod view;

pub(crate) use model::{Connection, ConnectionKind, DatabasesViewModel};
