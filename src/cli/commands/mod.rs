//! Command implementations

mod checkgroups;
mod groups;
mod keys;
mod newgroup;
mod rmgroup;

pub use checkgroups::checkgroups;
pub use groups::groups;
pub use keys::keys;
pub use newgroup::{NewgroupArgs, newgroup};
pub use rmgroup::rmgroup;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use log::debug;

use signcontrol::adapters::{FileCheckgroupsStore, GnuPg, gpg};
use signcontrol::config::{Config, ConfigError};
use signcontrol::core::models::{ArticleRequest, Checkgroups, UnsignedDraft};
use signcontrol::core::ports::CheckgroupsStore;
use signcontrol::core::services::{expand_template, fan_out};
use signcontrol::output::{DraftInfo, DraftPreview, OutputMode, PublishReport};
use signcontrol::publish::{PublishSettings, VariantOutcome, publish};

/// State shared by all commands
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub mode: OutputMode,
    pub passphrase: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl Context {
    /// Locate and load the configuration
    pub fn load(
        explicit: Option<&Path>,
        mode: OutputMode,
        passphrase: Option<String>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let path = Config::locate(explicit)?;
        debug!("using configuration {}", path.display());
        let config = Config::load(&path)?;
        Ok(Self {
            config,
            mode,
            passphrase,
            output_dir,
        })
    }

    /// The configured signer, which must be installed
    pub fn signer(&self) -> Result<GnuPg, ConfigError> {
        gpg::locate_program(&self.config.gpg_program)
            .map(GnuPg::new)
            .ok_or_else(|| ConfigError::SignerNotFound(self.config.gpg_program.clone()))
    }

    /// The checkgroups store of the hierarchy
    pub fn store(&self) -> FileCheckgroupsStore {
        FileCheckgroupsStore::new(self.config.checkgroups_file.clone())
    }

    /// Load the checkgroups list; a malformed file aborts the command
    pub fn load_groups(&self, store: &FileCheckgroupsStore) -> anyhow::Result<Checkgroups> {
        store.load().with_context(|| {
            format!("{} must be corrected before going on", store.path().display())
        })
    }

    /// Where artifacts are written: the flag, else the configured directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| self.config.output_dir.clone())
    }

    fn settings(&self) -> PublishSettings {
        PublishSettings::from_config(&self.config, self.passphrase.clone(), Some(self.output_dir()))
    }
}

/// Explanation text of an article: the body file, else the template
fn explanation(body_file: Option<&Path>, template: &str, group: &str) -> anyhow::Result<String> {
    let text = match body_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => template.to_string(),
    };
    Ok(expand_template(&text, group))
}

/// Print the drafts that would be signed
fn preview(ctx: &Context, draft: &UnsignedDraft) -> anyhow::Result<()> {
    let variants = fan_out(draft, ctx.config.compatibility)?;
    DraftPreview {
        drafts: variants.iter().map(DraftInfo::from).collect(),
    }
    .render(ctx.mode);
    Ok(())
}

/// Sign every variant of `draft`
fn sign(ctx: &Context, draft: &UnsignedDraft) -> anyhow::Result<Vec<VariantOutcome>> {
    let signer = ctx.signer()?;
    Ok(publish(&signer, draft, &ctx.settings())?)
}

/// Report the signed articles; fails when any variant was not signed
fn finish(
    ctx: &Context,
    request: &ArticleRequest,
    outcomes: &[VariantOutcome],
    checkgroups_updated: bool,
) -> anyhow::Result<()> {
    let report = PublishReport {
        kind: request.kind().to_string(),
        group: request.group().map(ToString::to_string),
        articles: outcomes.iter().map(Into::into).collect(),
        checkgroups_updated,
    };
    report.render(ctx.mode);

    if !report.success() {
        anyhow::bail!("some articles were not signed");
    }
    Ok(())
}
