//! GnuPG adapter
//!
//! Implements [`Signer`] and [`KeyManager`] by running the `gpg` program.
//! Signing captures the tool's diagnostics; key management hands the
//! terminal over to it.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::core::ports::{KeyManager, SignError, SignRequest, Signer};

/// Digest forced for legacy-compatible signatures
pub const LEGACY_DIGEST: &str = "SHA1";

/// GnuPG-based signer and key manager
#[derive(Debug, Clone)]
pub struct GnuPg {
    program: PathBuf,
}

impl GnuPg {
    /// Create an adapter running `program`
    #[must_use]
    pub const fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Path of the program this adapter runs
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run_interactive(&self, args: &[&str]) -> anyhow::Result<()> {
        debug!("running {} {}", self.program.display(), args.join(" "));
        let status = Command::new(&self.program).args(args).status()?;
        if !status.success() {
            anyhow::bail!("{} {} failed ({status})", self.program.display(), args.join(" "));
        }
        Ok(())
    }
}

/// Arguments of a detached-signature invocation
#[must_use]
pub fn sign_arguments(request: &SignRequest<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "--armor",
        "--detach-sign",
        "--emit-version",
        "--yes",
        "--local-user",
        request.key_id,
    ]
    .into_iter()
    .map(OsString::from)
    .collect();

    args.push("--output".into());
    args.push(request.output.into());

    if request.legacy {
        args.push("--digest-algo".into());
        args.push(LEGACY_DIGEST.into());
    }
    if request.passphrase.is_some() {
        for arg in ["--batch", "--pinentry-mode", "loopback", "--passphrase-fd", "0"] {
            args.push(arg.into());
        }
    }

    args.push(request.input.into());
    args
}

/// Find a program: an explicit path must exist, a bare name is looked up in `PATH`
#[must_use]
pub fn locate_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    std::env::var_os("PATH").and_then(|paths| {
        std::env::split_paths(&paths).map(|dir| dir.join(program)).find(|path| path.is_file())
    })
}

impl Signer for GnuPg {
    fn sign(&self, request: &SignRequest<'_>) -> Result<String, SignError> {
        let args = sign_arguments(request);
        debug!("signing {} with key {}", request.input.display(), request.key_id);

        let mut command = Command::new(&self.program);
        command.args(&args).stdout(Stdio::null()).stderr(Stdio::piped());
        if request.passphrase.is_some() {
            command.stdin(Stdio::piped());
        }

        let mut child = command.spawn().map_err(|source| SignError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;

        // A signer that fails early closes its stdin; its exit status tells why
        let handed = match (request.passphrase, child.stdin.take()) {
            (Some(passphrase), Some(mut stdin)) => writeln!(stdin, "{passphrase}"),
            _ => Ok(()),
        };
        if let Err(err) = handed {
            debug!("could not hand the passphrase to the signer: {err}");
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(SignError::Failed {
                status: output.status.to_string(),
                diagnostic: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !request.output.is_file() {
            return Err(SignError::MissingOutput(request.output.to_path_buf()));
        }
        Ok(fs::read_to_string(request.output)?)
    }
}

impl KeyManager for GnuPg {
    fn list_secret_keys(&self) -> anyhow::Result<()> {
        self.run_interactive(&["--list-secret-keys"])
    }

    fn generate(&self) -> anyhow::Result<()> {
        self.run_interactive(&["--full-generate-key", "--allow-freeform-uid"])
    }

    fn export_public(&self, uid: &str, output: &Path) -> anyhow::Result<()> {
        let output = output.to_string_lossy();
        self.run_interactive(&["--armor", "--output", &*output, "--export", uid])
    }

    fn export_secret(&self, uid: &str, output: &Path) -> anyhow::Result<()> {
        let path = output.to_string_lossy();
        self.run_interactive(&["--armor", "--output", &*path, "--export-secret-keys", uid])?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(output, fs::Permissions::from_mode(0o400))?;
        }
        Ok(())
    }

    fn import_secret(&self, input: &Path) -> anyhow::Result<()> {
        let input = input.to_string_lossy();
        self.run_interactive(&["--import", &*input])
    }

    fn delete(&self, uid: &str) -> anyhow::Result<()> {
        self.run_interactive(&["--delete-secret-and-public-key", uid])
    }

    fn revoke(&self, uid: &str) -> anyhow::Result<()> {
        self.run_interactive(&["--gen-revoke", uid])
    }
}
