//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use signcontrol::core::models::Serial;
use signcontrol::output::OutputMode;

/// signcontrol - Generate and sign Usenet control articles
#[derive(Parser, Debug)]
#[command(
    name = "signcontrol",
    version,
    about = "Generate and sign Usenet control articles",
    long_about = "Generate newgroup, rmgroup and checkgroups control articles for a Usenet \
                  hierarchy.\n\n\
                  Articles are signed with GnuPG and carry an X-PGP-Sig header that \
                  pgpverify-compatible news servers can check."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: ./signcontrol.toml, then the user config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory where articles are written (overrides output_dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Passphrase of the signing key (the signer prompts when absent)
    #[arg(long, global = true, env = "SIGNCONTROL_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a newgroup control article (create or change a newsgroup)
    Newgroup {
        /// Name of the newsgroup
        group: String,

        /// Description (should start with a capital and end in a period)
        #[arg(short, long)]
        description: String,

        /// The newsgroup is moderated
        #[arg(short, long)]
        moderated: bool,

        /// File holding the explanation text (default: configured template)
        #[arg(long, value_name = "FILE")]
        body_file: Option<PathBuf>,

        /// Continue despite description recommendations
        #[arg(short, long)]
        force: bool,

        /// Also record the group in the checkgroups file
        #[arg(long)]
        update_checkgroups: bool,

        /// Print the unsigned draft instead of signing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a rmgroup control article (remove a newsgroup)
    Rmgroup {
        /// Name of the newsgroup
        group: String,

        /// File holding the explanation text (default: configured template)
        #[arg(long, value_name = "FILE")]
        body_file: Option<PathBuf>,

        /// Also remove the group from the checkgroups file
        #[arg(long)]
        update_checkgroups: bool,

        /// Print the unsigned draft instead of signing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a checkgroups control article (list of newsgroups)
    Checkgroups {
        /// Revision of the day (0 for the first checkgroups of the day)
        #[arg(short, long, default_value = "0")]
        serial: Serial,

        /// Print the unsigned draft instead of signing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List the groups of the checkgroups file
    Groups,

    /// Manage signing keys (generate/import/export/remove/revoke)
    Keys {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum KeyAction {
    /// Show the installed secret keys
    List,

    /// Generate a new pair of secret/public keys
    Generate,

    /// Export a public key to public-key.asc
    ExportPublic {
        /// Key uid
        uid: String,
    },

    /// Export a secret key to private-key.asc
    ExportSecret {
        /// Key uid
        uid: String,
    },

    /// Import a secret key
    Import {
        /// Armored key file
        #[arg(default_value = "secret-key.asc")]
        file: PathBuf,
    },

    /// Remove a pair of secret/public keys
    Delete {
        /// Key uid
        uid: String,
    },

    /// Generate a revocation certificate
    Revoke {
        /// Key uid
        uid: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": signcontrol::VERSION,
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("signcontrol v{}", signcontrol::VERSION);
            println!("\nRun 'signcontrol --help' for usage");
        }
        return Ok(());
    };

    if let Command::Version = command {
        if output_mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "version": signcontrol::VERSION }));
        } else {
            println!("signcontrol v{}", signcontrol::VERSION);
        }
        return Ok(());
    }

    let ctx = Context::load(cli.config.as_deref(), output_mode, cli.passphrase, cli.output_dir)?;

    match command {
        Command::Newgroup {
            group,
            description,
            moderated,
            body_file,
            force,
            update_checkgroups,
            dry_run,
        } => commands::newgroup(
            &ctx,
            &commands::NewgroupArgs {
                group,
                description,
                moderated,
                body_file,
                force,
                update_checkgroups,
                dry_run,
            },
        ),
        Command::Rmgroup {
            group,
            body_file,
            update_checkgroups,
            dry_run,
        } => commands::rmgroup(&ctx, &group, body_file.as_deref(), update_checkgroups, dry_run),
        Command::Checkgroups { serial, dry_run } => commands::checkgroups(&ctx, serial, dry_run),
        Command::Groups => commands::groups(&ctx),
        Command::Keys { action } => commands::keys(&ctx, &action),
        Command::Version => Ok(()),
    }
}
