pub(crate) mod http;

pub(crate) use http::{build_client, VaultClient};
