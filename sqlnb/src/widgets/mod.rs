pub(crate) mod databases;
pub(crate) mod explorer;
pub(crate) mod notebook_area;
pub(crate) mod notebooks;
pub(crate) mod pane;
pub(crate) mod settings;
pub(crate) mod sidebar;
