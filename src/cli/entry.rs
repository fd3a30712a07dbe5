use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use crate::error::Result;
use crate::utils::{OutputFormat, format_candidates};
use crate::workflow::{Finish, Workflow};

use super::{
    console::{ConsoleFrontend, ConsoleRenderer},
    context::CliContext,
    prompts::Prompt,
};

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Find and delete files an uninstalled program left behind",
    after_help = "Type the full program name for better results and double check your selection: checked paths are deleted for good."
)]
pub struct Args {
    /// Program name to search for (prompted for when omitted)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Treat NAME as a regular expression instead of literal text
    #[arg(long)]
    pub regex: bool,

    /// Disable interactive prompts: list matching paths for --name and exit
    #[arg(long)]
    pub non_interactive: bool,

    /// Output format for listings and the deletion report
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Config file with extra scan roots (default: ~/.config/ipurge/config.toml)
    #[arg(long, value_name = "PATH", env = "IPURGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: Args) -> Result<()> {
    let prompt = Prompt::new(!args.non_interactive);
    let ctx = CliContext::from_args(args, prompt)?;
    if ctx.is_non_interactive() {
        list_matches(&ctx)
    } else {
        purge_interactively(&ctx)
    }
}

fn list_matches(ctx: &CliContext) -> Result<()> {
    let name = ctx.ensure_name("Program name")?;
    let engine = ctx.engine();
    let pattern = engine.pattern(name)?;
    let candidates = engine.scan(&pattern);

    let mut out = std::io::stdout().lock();
    write!(out, "{}", format_candidates(&candidates, ctx.format())?)?;
    if ctx.format() == OutputFormat::Json {
        writeln!(out)?;
    }
    Ok(())
}

fn purge_interactively(ctx: &CliContext) -> Result<()> {
    let engine = ctx.engine();
    debug!(
        "interactive session over {} roots",
        ctx.resolved().roots.len()
    );

    let mut workflow = match ctx.name() {
        Some(name) => Workflow::with_name(&engine, name),
        None => Workflow::new(&engine),
    };
    let mut frontend = ConsoleFrontend::new(*ctx.prompt());
    let mut renderer = ConsoleRenderer::stdout(ctx.format());

    match workflow.drive(&mut frontend, &mut renderer)? {
        Finish::Cancelled => info!("cancelled, nothing deleted"),
        Finish::Completed(results) => {
            let deleted = results.iter().filter(|r| r.outcome.is_deleted()).count();
            info!(
                "deleted {} of {} selected path(s)",
                deleted,
                results.len()
            );
        }
    }
    Ok(())
}
