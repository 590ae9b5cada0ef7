use crossterm::event::{self, Event, KeyCode};
use mystery_box::app::App;
use mystery_box::constants::{EVENT_POLL_MS, TICK_INTERVAL_MS};
use mystery_box::storage::{JsonFileStore, PrizeStore};
use mystery_box::ui::{self, settings_panel::SettingsPanel};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("mystery-box {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Mystery Box - Terminal Lottery Box\n");
                println!("Usage: mystery-box\n");
                println!("Keys:");
                println!("  Space      Start a draw");
                println!("  S          Open prize settings");
                println!("  Q / Esc    Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'mystery-box --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let store = JsonFileStore::new()?;
    let mut app = App::new(store);
    let mut panel = SettingsPanel::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut panel);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run<S: PrizeStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
    panel: &mut SettingsPanel,
) -> io::Result<()> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        panel.clamp_selection(app.registry().len());

        terminal.draw(|frame| {
            ui::draw_ui(frame, app, panel);
        })?;

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if app.settings_open {
                    handle_settings_key(key_event.code, app, panel)?;
                } else if handle_main_key(key_event.code, app) {
                    return Ok(());
                }
            }
        }

        // Advance the draw choreography on a fixed logic tick
        while last_tick.elapsed() >= tick_interval {
            app.tick();
            last_tick += tick_interval;
        }
    }
}

/// Key handling on the main scene. Returns true to quit.
fn handle_main_key<S: PrizeStore>(code: KeyCode, app: &mut App<S>) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Enter => {
            // Ignored while a draw is pending
            app.request_draw(&mut rand::thread_rng());
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.open_settings();
        }
        _ => {}
    }
    false
}

/// Key handling while the settings overlay is open.
fn handle_settings_key<S: PrizeStore>(
    code: KeyCode,
    app: &mut App<S>,
    panel: &mut SettingsPanel,
) -> io::Result<()> {
    if panel.is_editing() {
        match code {
            KeyCode::Enter => {
                if let Some(update) = panel.commit_edit() {
                    if let Some(id) = selected_prize_id(app, panel.selected) {
                        app.update_prize(&id, update)?;
                    }
                }
            }
            KeyCode::Esc => panel.cancel_edit(),
            KeyCode::Backspace => panel.handle_backspace(),
            KeyCode::Char(c) => panel.handle_char(c),
            _ => {}
        }
        return Ok(());
    }

    match code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => app.close_settings(),
        KeyCode::Up => panel.move_up(),
        KeyCode::Down => panel.move_down(app.registry().len()),
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => panel.toggle_field(),
        KeyCode::Enter => panel.begin_edit(app.registry()),
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.add_prize()?;
            // Jump to the new row
            panel.selected = app.registry().len().saturating_sub(1);
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if let Some(id) = selected_prize_id(app, panel.selected) {
                app.delete_prize(&id)?;
                panel.clamp_selection(app.registry().len());
            }
        }
        _ => {}
    }
    Ok(())
}

fn selected_prize_id<S: PrizeStore>(app: &App<S>, selected: usize) -> Option<String> {
    app.registry().prizes().get(selected).map(|p| p.id.clone())
}
