mod commands;
mod workflow;

pub(crate) use workflow::ActionsHost;
