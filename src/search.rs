use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, trace};

use crate::config::{Config, Notation};
use crate::parse::tokens;
use crate::probe::Probe;
use crate::utils::{
    bytes_path, has_separator, join_within, to_unix_path, DIR_SEPARATOR, PATH_DELIMITER,
};

/// Suffixes tried, in order, after every stem.
pub static SUFFIXES: [&str; 4] = ["", ".exe", ".bat", ".com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Found,
    NotFound,
}

impl Status {
    pub fn is_found(self) -> bool {
        self == Status::Found
    }
}

impl From<bool> for Status {
    fn from(found: bool) -> Status {
        if found {
            Status::Found
        } else {
            Status::NotFound
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> ExitCode {
        match status {
            Status::Found => ExitCode::SUCCESS,
            Status::NotFound => ExitCode::FAILURE,
        }
    }
}

#[derive(Debug)]
pub struct Which<'c, W: Write, P: Probe> {
    pub(crate) writer: W,
    probe: P,
    config: &'c Config,
}

impl<'c, W: Write, P: Probe> Which<'c, W, P> {
    pub fn new(writer: W, probe: P, config: &'c Config) -> Which<'c, W, P> {
        Which {
            writer,
            probe,
            config,
        }
    }

    /// Looks `name` up and reports the outcome, refusing names that could
    /// never fit in a candidate.
    pub fn lookup(&mut self, path_list: &[u8], name: &[u8]) -> Result<Status> {
        if name.len() >= self.config.max_path {
            debug!(
                name = %String::from_utf8_lossy(name),
                max_path = self.config.max_path,
                "name too long"
            );
            return Ok(Status::NotFound);
        }
        self.search(path_list, name)
    }

    /// Searches every directory of `path_list` for `name`.
    ///
    /// A name containing a separator is tested as is, without the path list.
    pub fn search(&mut self, path_list: &[u8], name: &[u8]) -> Result<Status> {
        if has_separator(name) {
            return self.test_executable(name).map(Status::from);
        }

        let mut found = false;
        for dir in tokens(path_list, PATH_DELIMITER) {
            let dir = if dir.is_empty() { b".".as_slice() } else { dir };
            let Some(stem) = join_within(&[dir, DIR_SEPARATOR, name], self.config.max_path) else {
                trace!(dir = %String::from_utf8_lossy(dir), "skipping directory, stem too long");
                continue;
            };
            debug!(stem = %String::from_utf8_lossy(&stem), "searching directory");
            if self.test_executable(&stem)? {
                found = true;
                if !self.config.all_paths {
                    break;
                }
            }
        }
        Ok(found.into())
    }

    /// Tests `stem` with every suffix and reports the first executable file.
    pub fn test_executable(&mut self, stem: &[u8]) -> Result<bool> {
        for suffix in SUFFIXES {
            let Some(candidate) = join_within(&[stem, suffix.as_bytes()], self.config.max_path)
            else {
                trace!(
                    stem = %String::from_utf8_lossy(stem),
                    suffix,
                    "skipping candidate, too long"
                );
                continue;
            };
            if self.probe.is_executable_file(&bytes_path(&candidate)) {
                debug!(candidate = %String::from_utf8_lossy(&candidate), "found executable");
                self.report(&candidate)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn report(&mut self, candidate: &[u8]) -> Result<()> {
        if self.config.silent {
            return Ok(());
        }
        match self.config.notation {
            Notation::Native => self.write_line(candidate),
            Notation::Unix => self.write_line(&to_unix_path(candidate)),
        }
    }

    fn write_line(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
fn run_test_with_files(
    config: &Config,
    files: &[&str],
    path_list: &str,
    names: &[&str],
) -> anyhow::Result<(Vec<Status>, String)> {
    use crate::probe::test::FakeProbe;

    let mut which = Which::new(Vec::new(), FakeProbe::with_files(files), config);
    let statuses = names
        .iter()
        .map(|name| which.lookup(path_list.as_bytes(), name.as_bytes()))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let output = String::from_utf8(which.writer)?;
    Ok((statuses, output))
}
