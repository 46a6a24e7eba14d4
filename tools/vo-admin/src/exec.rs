//! Container-exec adapter: runs daemon commands inside the validator
//! container through the container runtime CLI.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use shared_types::{CommandExecutor, ExecError};

/// [`CommandExecutor`] backed by `<runtime> exec <container> <tokens…>`.
///
/// The runtime binary is configurable (`docker`, `podman`); tokens are
/// passed through argv so no shell quoting is ever involved.
pub struct ContainerExecutor {
    runtime: String,
}

impl ContainerExecutor {
    /// Create an executor shelling out to the given container runtime.
    pub fn new(runtime: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
        }
    }
}

#[async_trait]
impl CommandExecutor for ContainerExecutor {
    async fn execute(&self, context: &str, command: &[String]) -> Result<Vec<u8>, ExecError> {
        debug!(runtime = %self.runtime, context, ?command, "exec in container");
        let output = Command::new(&self.runtime)
            .arg("exec")
            .arg(context)
            .args(command)
            .output()
            .await
            .map_err(|e| ExecError::Launch {
                program: self.runtime.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ExecError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
