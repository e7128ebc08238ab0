use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::clipboard::Clipboard,
};

/// Executes commands returned by `update`.
///
/// Clipboard writes happen inline. Terminal commands and render requests are
/// forwarded to the host over channels, since only the host owns the terminal.
pub struct CmdExecutor {
    clipboard: Box<dyn Clipboard>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            clipboard,
            tui_sender: None,
            render_req_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand on the host.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for host-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::CopyToClipboard { value } => {
                // Copy is fire-and-forget: the reviewer is never told it failed.
                if let Err(e) = self.clipboard.set_text(value) {
                    log::debug!("Clipboard write failed: {e}");
                }
            }

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => tx.send(tui_cmd.clone())?,
                None => log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}"),
            },

            Cmd::RequestRender => match &self.render_req_sender {
                Some(tx) => tx.send(())?,
                None => log::warn!("CmdExecutor: render sender not configured"),
            },

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute every command, logging failures instead of stopping early
    pub fn execute_commands(&mut self, commands: &[Cmd]) {
        for cmd in commands {
            if let Err(e) = self.execute_command(cmd) {
                log::error!("Failed to execute {}: {e}", cmd.name());
            }
        }
    }
}
