use std::{
    collections::HashMap,
    ffi::{OsStr, OsString},
};

use clap::Parser;
use strum::{AsRefStr, EnumString};

/// Name of the search path variable.
pub const PATH_VAR: &str = "PATH";

/// Set by MSYS shells (`bash` exports the last command as `$_`); `cmd.exe`
/// never sets it.
pub const MSYS_MARKER_VAR: &str = "_";

/// Windows `MAX_PATH`.
pub const DEFAULT_MAX_PATH: usize = 260;

#[derive(Debug, Parser)]
#[command(
    name = "which",
    override_usage = "which [-amsw] program ...",
    args_override_self = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// List all instances of executables found
    #[arg(short = 'a')]
    pub all: bool,

    /// Print paths in MSYS notation, `/c/...`
    #[arg(short = 'm', overrides_with = "windows")]
    pub msys: bool,

    /// No output, only the exit status
    #[arg(short = 's')]
    pub silent: bool,

    /// Print paths in Windows notation, `C:\...`
    #[arg(short = 'w', overrides_with = "msys")]
    pub windows: bool,

    /// Longest candidate path that may be tested
    #[arg(long, env = "WHICH_MAX_PATH", default_value_t = DEFAULT_MAX_PATH, hide = true)]
    pub max_path: usize,

    #[arg(required = true, value_name = "program")]
    pub names: Vec<OsString>,
}

/// Snapshot of the process environment taken once at startup.
#[derive(Debug, Default, Clone)]
pub struct Env {
    vars: HashMap<OsString, OsString>,
}

impl Env {
    pub fn from_process() -> Env {
        Env {
            vars: std::env::vars_os().collect(),
        }
    }

    pub fn with_var(mut self, k: &str, v: &str) -> Env {
        self.vars.insert(k.into(), v.into());
        self
    }

    pub fn with_var_os(mut self, k: &str, v: OsString) -> Env {
        self.vars.insert(k.into(), v);
        self
    }

    pub fn get(&self, k: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(k)).map(OsString::as_os_str)
    }

    pub fn contains(&self, k: &str) -> bool {
        self.vars.contains_key(OsStr::new(k))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum Notation {
    /// Paths are printed as found, `C:\bin\run.exe`.
    #[strum(serialize = "native")]
    Native,
    /// Paths are rewritten for MSYS shells, `/c/bin/run.exe`.
    #[strum(serialize = "unix")]
    Unix,
}

impl Notation {
    /// Default notation when neither `-m` nor `-w` is given: a process started
    /// from an MSYS shell sees the marker variable and gets MSYS paths.
    pub fn default_for(env: &Env) -> Notation {
        if env.contains(MSYS_MARKER_VAR) {
            Notation::Unix
        } else {
            Notation::Native
        }
    }
}

/// Run configuration, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub silent: bool,
    pub all_paths: bool,
    pub notation: Notation,
    pub max_path: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            silent: false,
            all_paths: false,
            notation: Notation::Native,
            max_path: DEFAULT_MAX_PATH,
        }
    }
}

impl Config {
    pub fn new(args: &Args, env: &Env) -> Config {
        let notation = match (args.msys, args.windows) {
            (true, _) => Notation::Unix,
            (_, true) => Notation::Native,
            _ => Notation::default_for(env),
        };
        Config {
            silent: args.silent,
            all_paths: args.all,
            notation,
            max_path: args.max_path,
        }
    }

    pub fn with_silent(mut self, silent: bool) -> Config {
        self.silent = silent;
        self
    }

    pub fn with_all_paths(mut self, all_paths: bool) -> Config {
        self.all_paths = all_paths;
        self
    }

    pub fn with_notation(mut self, notation: Notation) -> Config {
        self.notation = notation;
        self
    }

    pub fn with_max_path(mut self, max_path: usize) -> Config {
        self.max_path = max_path;
        self
    }
}
