pub(crate) mod curve;
pub(crate) mod field;
pub(crate) mod geometry;
pub(crate) mod phases;
pub(crate) mod ring;
pub(crate) mod state;
