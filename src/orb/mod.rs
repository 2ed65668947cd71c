pub(crate) mod state;
pub(crate) mod transition;
pub(crate) mod update;
