// ============================================================================
// src/cmd/derive.rs – one invocation: validate, build, derive, format
// ============================================================================

use std::ffi::OsString;
use std::io::Write;

use tracing::{debug, info};

use crate::cli::{self, Cli, Interrupt};
use crate::config::{self, RunConfig};
use crate::consts::EXIT_OK;
use crate::error::{ErrorKind, Pbkdf2Error};
use crate::kdf::{derive_key, PrfProvider, RustCryptoProvider};
use crate::mode::{self, RawArgs};
use crate::ui::{self, Report};
use crate::util::stopwatch::Stopwatch;

/// Where an invocation currently is. Moves strictly forward; `Done` and
/// `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Init,
    Validating,
    BuildingParameters,
    Deriving,
    Formatting,
    Done,
    Failed { kind: ErrorKind, message: String },
}

impl Phase {
    fn rank(&self) -> u8 {
        match self {
            Self::Init => 0,
            Self::Validating => 1,
            Self::BuildingParameters => 2,
            Self::Deriving => 3,
            Self::Formatting => 4,
            Self::Done | Self::Failed { .. } => 5,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed { .. })
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Validating => "validating",
            Self::BuildingParameters => "building-parameters",
            Self::Deriving => "deriving",
            Self::Formatting => "formatting",
            Self::Done => "done",
            Self::Failed { .. } => "failed",
        }
    }
}

/// State of a single run. Owns nothing past its own phase trail; buffers live
/// inside [`Invocation::execute`] and are dropped on every exit path.
#[derive(Debug)]
pub struct Invocation {
    phase: Phase,
    history: Vec<Phase>,
}

impl Default for Invocation {
    fn default() -> Self {
        Self::new()
    }
}

impl Invocation {
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            history: vec![Phase::Init],
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Every phase entered so far, starting with `Init`.
    pub fn history(&self) -> &[Phase] {
        &self.history
    }

    fn enter(&mut self, next: Phase) {
        debug_assert!(
            !self.phase.is_terminal() && next.rank() > self.phase.rank(),
            "illegal transition {:?} -> {:?}",
            self.phase,
            next
        );
        debug!(from = self.phase.name(), to = next.name(), "phase transition");
        self.history.push(next.clone());
        self.phase = next;
    }

    /// Run the pipeline once and return the text for stdout.
    ///
    /// The first error stops everything; nothing is printed for a failed run.
    pub fn execute<P: PrfProvider>(
        &mut self,
        provider: &P,
        config: &RunConfig,
        args: RawArgs<'_>,
    ) -> Result<String, Pbkdf2Error> {
        let result = self.drive(provider, config, args);
        match &result {
            Ok(_) => self.enter(Phase::Done),
            Err(err) => {
                debug!(kind = %err.kind(), step = self.phase.name(), "invocation failed");
                self.enter(Phase::Failed {
                    kind: err.kind(),
                    message: err.to_string(),
                });
            }
        }
        result
    }

    fn drive<P: PrfProvider>(
        &mut self,
        provider: &P,
        config: &RunConfig,
        args: RawArgs<'_>,
    ) -> Result<String, Pbkdf2Error> {
        self.enter(Phase::Validating);
        let validated = mode::validate_args(config.mode, args)?;

        self.enter(Phase::BuildingParameters);
        let prepared = mode::assemble(config.mode, config.native_width, validated)?;

        info!(
            algorithm = %prepared.params.algorithm,
            mode = %config.mode,
            iterations = prepared.params.iteration_count,
            salt_len = prepared.params.salt.len(),
            "deriving key"
        );

        self.enter(Phase::Deriving);
        let (key, duration) = Stopwatch::time(|| derive_key(provider, &prepared.params));
        let key = key?;

        self.enter(Phase::Formatting);
        let report = Report {
            salt: &prepared.salt,
            iteration_count: prepared.params.iteration_count,
            password: args.password,
            key: &key,
            duration,
        };
        Ok(report.render())
    }
}

/// Derive with an already parsed command line and return the exit code.
pub fn run_with<P, O, E>(provider: &P, cli: &Cli, out: &mut O, err: &mut E) -> u8
where
    P: PrfProvider,
    O: Write,
    E: Write,
{
    let config = RunConfig::from_cli(cli);
    let args = RawArgs {
        hash_type: &cli.hash_type,
        salt: &cli.salt,
        iteration_count: &cli.iteration_count,
        password: &cli.password,
    };

    let mut invocation = Invocation::new();
    let failure = match invocation.execute(provider, &config, args) {
        Ok(text) => match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            Ok(()) => return EXIT_OK,
            Err(e) => Pbkdf2Error::from(e),
        },
        Err(e) => e,
    };

    let _ = err.write_all(ui::error_line(&failure.to_string()).as_bytes());
    failure.exit_code()
}

/// Full command-line entry: parse `args` (program name first), set up
/// logging, derive, print. Returns the process exit code.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match cli::parse(args) {
        Ok(cli) => cli,
        Err(Interrupt::Info(text)) => {
            let _ = out.write_all(text.as_bytes());
            return EXIT_OK;
        }
        Err(Interrupt::Usage(reason)) => {
            let failure = Pbkdf2Error::Usage(reason);
            let _ = err.write_all(ui::usage(&failure.to_string()).as_bytes());
            return failure.exit_code();
        }
    };

    let config = RunConfig::from_cli(&cli);
    // Diagnostics are optional; a second subscriber in the same process is fine to skip.
    let _ = config::init_tracing(config.verbosity);

    run_with(&RustCryptoProvider, &cli, out, err)
}
