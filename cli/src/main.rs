//! CopyBolt CLI binary: render the directive for the current configuration and inspect the
//! template catalog, protocol rules and example prompts.
//!
//! Subcommands: `render`, `continue`, `templates`, `rules`, `examples`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::{
    build_snapshot, format_examples, format_rules, format_templates, load_policies, render,
    CliError, OutputFormat, RenderOptions,
};
use config::Settings;
use copybolt::{continue_prompt, DatabaseState, TemplateRegistry};

const APP_NAME: &str = "copybolt";

#[derive(Parser, Debug)]
#[command(name = "copybolt")]
#[command(about = "CopyBolt: assemble the copywriting agent directive")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Verbose: debug logs on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble the directive and print it to stdout
    Render(RenderArgs),
    /// Print the prompt that asks the agent to resume a truncated response
    Continue {
        /// Directory with policy YAML overrides
        #[arg(long, value_name = "DIR")]
        policy_dir: Option<PathBuf>,
    },
    /// List starter templates
    Templates(TemplatesArgs),
    /// List action protocol rules with their markers
    Rules,
    /// List suggested first messages
    Examples,
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Working directory shown to the agent (default: /home/project or COPYBOLT_WORK_DIR)
    #[arg(long, value_name = "DIR")]
    work_dir: Option<String>,

    /// Database state: disconnected, connected-no-project, connected-with-project
    #[arg(long, value_name = "STATE")]
    db_state: Option<DatabaseState>,

    /// Project URL (default: VITE_SUPABASE_URL)
    #[arg(long, value_name = "URL")]
    supabase_url: Option<String>,

    /// Anonymous key (default: VITE_SUPABASE_ANON_KEY)
    #[arg(long, value_name = "KEY")]
    anon_key: Option<String>,

    /// Design scheme JSON file
    #[arg(long, value_name = "FILE")]
    design: Option<PathBuf>,

    /// Full snapshot as a JSON or YAML file; flags still override its fields
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Directory with policy YAML overrides (default: COPYBOLT_POLICY_DIR or ./policies)
    #[arg(long, value_name = "DIR")]
    policy_dir: Option<PathBuf>,

    /// Print only the body of this section (e.g. database_instructions)
    #[arg(long, value_name = "TAG")]
    section: Option<String>,

    /// Output {"directive": ..., "database_state": ...} as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct TemplatesArgs {
    /// Only templates carrying this tag
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,

    /// Output format: yaml (default), json or text
    #[arg(long, value_name = "FORMAT", default_value = "yaml")]
    output: String,
}

impl From<RenderArgs> for RenderOptions {
    fn from(a: RenderArgs) -> Self {
        RenderOptions {
            work_dir: a.work_dir,
            db_state: a.db_state,
            supabase_url: a.supabase_url,
            anon_key: a.anon_key,
            design: a.design,
            snapshot: a.snapshot,
            policy_dir: a.policy_dir,
            section: a.section,
            json: a.json,
        }
    }
}

fn run(cmd: Command, settings: &Settings) -> Result<String, CliError> {
    match cmd {
        Command::Render(args) => {
            let opts = RenderOptions::from(args);
            let snapshot = build_snapshot(settings, &opts)?;
            let policies = load_policies(settings, opts.policy_dir.as_deref())?;
            tracing::debug!(
                work_dir = %snapshot.working_directory,
                state = %snapshot.database_state,
                "rendering directive"
            );
            render(&snapshot, &policies, &opts)
        }
        Command::Continue { policy_dir } => {
            let policies = load_policies(settings, policy_dir.as_deref())?;
            Ok(continue_prompt(&policies).to_string())
        }
        Command::Templates(args) => {
            let format: OutputFormat = args.output.parse()?;
            format_templates(&TemplateRegistry::builtin(), args.tag.as_deref(), format)
        }
        Command::Rules => Ok(format_rules()),
        Command::Examples => Ok(format_examples()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let settings = match config::load_and_apply(APP_NAME, None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", APP_NAME, e);
            std::process::exit(1);
        }
    };
    let default_filter = if args.verbose {
        "debug"
    } else {
        config::logging::DEFAULT_FILTER
    };
    config::logging::init(default_filter)?;

    match run(args.cmd, &settings) {
        Ok(out) => {
            println!("{}", out.trim_end_matches('\n'));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {}", APP_NAME, e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn render_flags_parse() {
        let args = Args::try_parse_from([
            "copybolt",
            "render",
            "--work-dir",
            "/srv/copy",
            "--db-state",
            "connected-no-project",
            "--section",
            "database_instructions",
        ])
        .unwrap();
        let Command::Render(r) = args.cmd else {
            panic!("expected render");
        };
        assert_eq!(r.work_dir.as_deref(), Some("/srv/copy"));
        assert_eq!(r.db_state, Some(DatabaseState::ConnectedNoProject));
        assert_eq!(r.section.as_deref(), Some("database_instructions"));
    }

    #[test]
    fn invalid_db_state_is_rejected() {
        assert!(Args::try_parse_from(["copybolt", "render", "--db-state", "online"]).is_err());
        assert!(Args::try_parse_from(["copybolt", "render", "--db-state", "connected"]).is_err());
    }

    #[test]
    fn run_rules_and_templates() {
        let settings = Settings::default();
        let rules = run(Command::Rules, &settings).unwrap();
        assert!(rules.contains("MIGRATION-TWIN-WRITE"));
        let text = run(
            Command::Templates(TemplatesArgs {
                tag: Some("ads".into()),
                output: "text".into(),
            }),
            &settings,
        )
        .unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
