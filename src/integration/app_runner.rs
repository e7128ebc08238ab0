use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::TuiCommand, cmd_executor::CmdExecutor, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update_state,
    },
    infrastructure::{clipboard::Clipboard, tui},
    presentation::components::Components,
};

/// Drives the Elm loop: terminal events in, `update`, commands out, render.
pub struct AppRunner<T: tui::TuiLike> {
    state: AppState,
    tui: T,
    executor: CmdExecutor,
    components: Components,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
}

impl<T: tui::TuiLike> AppRunner<T> {
    pub fn new(state: AppState, tui: T, clipboard: Box<dyn Clipboard>) -> Self {
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new(clipboard);
        executor.set_tui_sender(tui_tx);
        executor.set_render_request_sender(render_tx);

        Self {
            state,
            tui,
            executor,
            components: Components::new(),
            tui_rx,
            render_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Translate one raw message, run every resulting message through
    /// `update` and execute the commands it returns.
    pub fn handle_raw(&mut self, raw: RawMsg) {
        if !raw.is_frequent() {
            log::debug!("raw: {raw:?}");
        }
        for msg in translate_raw_to_domain(raw, &self.state) {
            let commands = update_state(msg, &mut self.state);
            self.executor.execute_commands(&commands);
        }
    }

    /// Run until quit is requested or the event source ends.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.render()?;

        while let Some(event) = self.tui.next().await {
            let mut needs_render = false;
            match event {
                tui::Event::Quit => self.handle_raw(RawMsg::Quit),
                tui::Event::Tick => self.handle_raw(RawMsg::Tick),
                tui::Event::Render => needs_render = true,
                tui::Event::Resize(w, h) => self.handle_raw(RawMsg::Resize(w, h)),
                tui::Event::Key(key) => {
                    self.handle_raw(RawMsg::Key(key));
                    needs_render = true;
                }
                tui::Event::Error => {
                    self.handle_raw(RawMsg::Error("terminal input error".to_string()));
                    needs_render = true;
                }
                tui::Event::Closed => self.handle_raw(RawMsg::Quit),
                tui::Event::Init
                | tui::Event::FocusGained
                | tui::Event::FocusLost
                | tui::Event::Paste(_)
                | tui::Event::Mouse(_) => {}
            }

            needs_render |= self.drain_host_commands()?;

            if self.state.system.should_suspend {
                self.tui.suspend()?;
                // Execution continues here once the shell resumes the process
                self.tui.resume()?;
                self.handle_raw(RawMsg::Resume);
                needs_render |= self.drain_host_commands()?;
            }

            if self.state.system.should_quit {
                break;
            }

            if needs_render {
                self.render()?;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Apply commands only the host can run. Returns whether a render is due.
    fn drain_host_commands(&mut self) -> Result<bool> {
        let mut needs_render = false;
        while let Ok(cmd) = self.tui_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui.resize(Rect::new(0, 0, width, height))?;
                    needs_render = true;
                }
            }
        }
        while self.render_rx.try_recv().is_ok() {
            needs_render = true;
        }
        Ok(needs_render)
    }

    fn render(&mut self) -> Result<()> {
        let Self {
            state,
            tui: terminal,
            components,
            ..
        } = self;
        terminal.draw(&mut |frame: &mut tui::Frame<'_>| components.render(frame, state))
    }
}
