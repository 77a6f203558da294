//! Keys command - manage the signing keys

use std::path::Path;

use signcontrol::core::ports::KeyManager;
use signcontrol::output::OperationResult;
use signcontrol::paths;

use super::Context;
use crate::cli::app::KeyAction;

/// Run a key management action through the signer
pub fn keys(ctx: &Context, action: &KeyAction) -> anyhow::Result<()> {
    let gpg = ctx.signer()?;
    let message = manage(&gpg, action, &ctx.output_dir())?;
    OperationResult {
        success: true,
        message,
    }
    .render(ctx.mode);
    Ok(())
}

fn manage(keys: &dyn KeyManager, action: &KeyAction, dir: &Path) -> anyhow::Result<String> {
    match action {
        KeyAction::List => {
            keys.list_secret_keys()?;
            Ok("Listed secret keys.".to_string())
        },
        KeyAction::Generate => {
            keys.generate()?;
            Ok("Key pair generated.".to_string())
        },
        KeyAction::ExportPublic { uid } => {
            let output = dir.join(paths::PUBLIC_KEY_FILE);
            keys.export_public(uid, &output)?;
            Ok(format!("Public key of {uid} exported to {}.", output.display()))
        },
        KeyAction::ExportSecret { uid } => {
            let output = dir.join(paths::PRIVATE_KEY_FILE);
            keys.export_secret(uid, &output)?;
            Ok(format!(
                "Secret key of {uid} exported to {}. Keep it somewhere safe.",
                output.display()
            ))
        },
        KeyAction::Import { file } => {
            keys.import_secret(file)?;
            Ok(format!("Imported {}.", file.display()))
        },
        KeyAction::Delete { uid } => {
            keys.delete(uid)?;
            Ok(format!("Removed the keys of {uid}."))
        },
        KeyAction::Revoke { uid } => {
            keys.revoke(uid)?;
            Ok(format!("Revocation certificate of {uid} generated."))
        },
    }
}
