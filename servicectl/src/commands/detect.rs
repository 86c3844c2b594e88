use crate::cli::DetectArgs;
use crate::common::load_probes;
use serde::Serialize;
use servicectl_core::{BackendKind, HostSystem};
use std::path::Path;

#[derive(Serialize)]
struct Detected {
    backend: BackendKind,
}

pub fn execute(args: DetectArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let probes = load_probes(config)?;
    let backend = servicectl_core::detect(&HostSystem, &probes)?;

    if args.json {
        println!("{}", serde_json::to_string(&Detected { backend })?);
    } else {
        println!("{}", backend);
    }
    Ok(())
}
