use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tweetboard::dataset::load_dataset;
use tweetboard::ui::{App, LoadMessage};

#[tokio::main]
async fn main() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // The one network-bound operation: fetch the dataset once, off the UI
    // loop, and deliver the cached handle as a message.
    tokio::spawn(async move {
        let message = match load_dataset().await {
            Ok(dataset) => LoadMessage::Loaded(dataset),
            Err(error) => LoadMessage::Failed(error.to_string()),
        };
        let _ = tx.send(message);
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    rx: &mut mpsc::UnboundedReceiver<LoadMessage>,
) -> Result<()> {
    let mut app = App::new();

    loop {
        while let Ok(message) = rx.try_recv() {
            app.on_load(message);
        }

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
