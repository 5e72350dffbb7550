use std::io;
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::Game;
use crate::ui;
use make10_core::{Layout, SumRule};

/// Tile size in terminal cells. Terminal cells are roughly twice as tall as
/// they are wide, so the tile is wider than it is high.
pub const TILE_W: i32 = 7;
pub const TILE_H: i32 = 3;

pub fn run(rule: SumRule) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_run(rule))
}

async fn async_run(rule: SumRule) -> Result<(), Box<dyn std::error::Error>> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new(rule);
    let result = run_loop(&mut terminal, &mut game).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(50);

    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        let size = terminal.size()?;
        let layout = Layout::new(size.width as i32, size.height as i32, TILE_W, TILE_H);

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if handle_key(game, key, &layout) {
                            return Ok(());
                        }
                    }
                    Some(Ok(Event::Mouse(mouse))) => game.input.handle_mouse(&mouse),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
            _ = tokio::time::sleep(tick_rate) => {}
        }

        game.tick(&layout);
    }
}

/// Returns true when the game should quit.
fn handle_key(game: &mut Game, key: KeyEvent, layout: &Layout) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('n') => game.next_level(),
        KeyCode::Char('p') => game.prev_level(),
        KeyCode::Char('u') | KeyCode::Backspace => game.undo(),
        KeyCode::Char('d') => game.debug = !game.debug,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
            game.input.handle_key(&key, layout);
        }
        _ => {}
    }
    false
}
