pub mod materialize;
pub mod status;
