use std::io::Write;

use anyhow::Result;
use tracing::debug;

pub use config::{Args, Config, Env, Notation};
pub use error::WhichError;
pub use probe::{HostProbe, Probe};
pub use search::{Status, Which, SUFFIXES};

mod config;
mod error;
mod parse;
mod probe;
mod search;
mod utils;

/// Looks up every name of `args` along the `PATH` of `env`, writing matches
/// to `writer`.
///
/// Fails only when `PATH` is missing or `writer` breaks. Every name is
/// processed; the result is `Found` only when each of them was found.
pub fn run_which<W: Write, P: Probe>(
    args: &Args,
    env: &Env,
    probe: P,
    writer: W,
) -> Result<Status> {
    let path_list = env
        .get(config::PATH_VAR)
        .ok_or(WhichError::MissingPath(config::PATH_VAR))?;
    let path_list = utils::os_bytes(path_list);
    let config = Config::new(args, env);
    debug!(
        notation = config.notation.as_ref(),
        all_paths = config.all_paths,
        silent = config.silent,
        "starting lookup"
    );

    let mut which = Which::new(writer, probe, &config);
    let mut all_found = true;
    for name in &args.names {
        let status = which.lookup(&path_list, &utils::os_bytes(name))?;
        debug!(name = %name.to_string_lossy(), ?status, "lookup done");
        all_found &= status.is_found();
    }

    Ok(all_found.into())
}
