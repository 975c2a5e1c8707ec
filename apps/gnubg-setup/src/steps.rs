//! Setup steps. Each one reports a single [`StepReport`].

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use backgammon_ai::engine::locate::{is_executable_file, ENGINE_BINARY};
use serde::Serialize;
use tracing::{info, warn};

pub const REQUIRED_TOOLS: [&str; 5] = ["autoconf", "automake", "libtool", "pkg-config", "make"];

pub const CONFIGURE_FLAGS: [&str; 3] = ["--without-gtk", "--without-board3d", "--without-python"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StepReport {
    fn passed(step: &'static str) -> Self {
        Self {
            step,
            ok: true,
            detail: None,
        }
    }

    fn failed(step: &'static str, detail: impl Into<String>) -> Self {
        Self {
            step,
            ok: false,
            detail: Some(detail.into()),
        }
    }
}

/// One external command, run inside the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self, dir: &Path) -> Result<(), String> {
        info!(command = %self.display(), dir = %dir.display(), "Running");
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .status()
            .map_err(|e| format!("failed to run {}: {e}", self.display()))?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("{} exited with {status}", self.display()))
        }
    }
}

/// Tools from `tools` not found as executables in any of `search_dirs`.
pub fn missing_tools<'a>(tools: &[&'a str], search_dirs: &[PathBuf]) -> Vec<&'a str> {
    tools
        .iter()
        .copied()
        .filter(|tool| !search_dirs.iter().any(|dir| is_executable_file(&dir.join(tool))))
        .collect()
}

pub fn check() -> StepReport {
    let search_dirs: Vec<PathBuf> = env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).collect())
        .unwrap_or_default();
    let missing = missing_tools(&REQUIRED_TOOLS, &search_dirs);
    if missing.is_empty() {
        StepReport::passed("check")
    } else {
        warn!(?missing, "Missing build tools");
        StepReport::failed("check", format!("missing: {}", missing.join(", ")))
    }
}

/// `autogen.sh` first when the tree has no generated `configure` script.
pub fn configure_plan(source_dir: &Path) -> Vec<Invocation> {
    let mut plan = Vec::new();
    if !source_dir.join("configure").is_file() {
        plan.push(Invocation::new("sh", ["./autogen.sh"]));
    }
    plan.push(Invocation::new(
        "sh",
        std::iter::once("./configure").chain(CONFIGURE_FLAGS),
    ));
    plan
}

pub fn configure(source_dir: &Path) -> StepReport {
    if !source_dir.is_dir() {
        return StepReport::failed(
            "configure",
            format!("source directory {} not found", source_dir.display()),
        );
    }
    match configure_plan(source_dir)
        .iter()
        .try_for_each(|step| step.run(source_dir))
    {
        Ok(()) => StepReport::passed("configure"),
        Err(detail) => StepReport::failed("configure", detail),
    }
}

pub fn build_invocation(jobs: usize) -> Invocation {
    Invocation::new("make", [format!("-j{}", jobs.max(1))])
}

pub fn build(source_dir: &Path) -> StepReport {
    if !source_dir.join("Makefile").is_file() {
        return StepReport::failed("build", "not configured; run configure first");
    }
    if let Err(detail) = build_invocation(num_cpus::get()).run(source_dir) {
        return StepReport::failed("build", detail);
    }
    if source_dir.join(ENGINE_BINARY).is_file() {
        StepReport::passed("build")
    } else {
        StepReport::failed("build", "engine binary not found after build")
    }
}
