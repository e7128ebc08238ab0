use serde::{Deserialize, Serialize};

/// Terminal sub-commands executed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Hand `value` to the system clipboard; failures are not reported back
    CopyToClipboard { value: String },

    Tui(TuiCommand),
    /// Ask the host to draw a fresh frame
    RequestRender,

    Batch(Vec<Cmd>),

    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cmd::CopyToClipboard { .. } => "CopyToClipboard",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::RequestRender => "RequestRender",
            Cmd::Batch(..) => "Batch",
            Cmd::None => "None",
        }
    }
}
