//! Oracle backed by long-lived child processes.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use parking_lot::Mutex;
use tsfix_diagnostic::DiagnosticRecord;

use super::wire::{self, Request, Response};
use super::{EvaluationRequest, Oracle, OracleError};

/// Runs an external oracle command and talks to it over stdin/stdout.
///
/// Processes are spawned lazily and pooled: each concurrent caller checks one
/// out, so the pool never grows past the number of worker threads. A process
/// that fails mid-request is dropped rather than returned to the pool.
pub struct CommandOracle {
    program: String,
    args: Vec<String>,
    idle: Mutex<Vec<OracleProcess>>,
}

impl CommandOracle {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandOracle {
            program: program.into(),
            args,
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Command line as typed, for messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn request(&self, request: &Request<'_>) -> Result<Response, OracleError> {
        let pooled = self.idle.lock().pop();
        let mut process = match pooled {
            Some(process) => process,
            None => self.spawn()?,
        };
        let response = process.round_trip(request)?;
        self.idle.lock().push(process);
        Ok(response)
    }

    fn spawn(&self) -> Result<OracleProcess, OracleError> {
        tracing::debug!(command = %self.command_line(), "spawning oracle process");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| OracleError::Spawn {
                command: self.command_line(),
                source,
            })?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            return Err(OracleError::Exited);
        };

        Ok(OracleProcess {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl Oracle for CommandOracle {
    fn version(&self) -> Result<String, OracleError> {
        self.request(&Request::Version)?.into_version()
    }

    fn evaluate(
        &self,
        request: &EvaluationRequest<'_>,
    ) -> Result<Vec<DiagnosticRecord>, OracleError> {
        self.request(&Request::evaluate(request))?.into_diagnostics()
    }
}

struct OracleProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl OracleProcess {
    fn round_trip(&mut self, request: &Request<'_>) -> Result<Response, OracleError> {
        let line = wire::encode(request)?;
        writeln!(self.stdin, "{line}")?;
        self.stdin.flush()?;

        let mut response = String::new();
        if self.stdout.read_line(&mut response)? == 0 {
            return Err(OracleError::Exited);
        }
        wire::decode(&response)
    }
}

impl Drop for OracleProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
