pub(crate) mod inputs;
pub(crate) mod types;

pub(crate) use inputs::resolve_inputs;
pub(crate) use types::{ActionInputs, ExportSettings};
