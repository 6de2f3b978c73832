pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::content::CtaLink;
use crate::scoring::Rating;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_log::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    // 250ms tick drives flash expiry
    let mut events = EventHandler::new(250);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_log::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Navigation (scrolls in Insights)
            KeyCode::Char('j') | KeyCode::Down => match app.current_view {
                app::View::Scorecard => app.next_category(),
                app::View::Insights => app.scroll_down(),
            },
            KeyCode::Char('k') | KeyCode::Up => match app.current_view {
                app::View::Scorecard => app.previous_category(),
                app::View::Insights => app.scroll_up(),
            },

            // Score buttons
            KeyCode::Char(c @ '1'..='5') if app.current_view == app::View::Scorecard => {
                if let Some(rating) = c.to_digit(10).and_then(|d| Rating::new(d as u8).ok()) {
                    app.rate_selected(rating);
                }
            }
            KeyCode::Char('l') | KeyCode::Right if app.current_view == app::View::Scorecard => {
                app.raise_selected()
            }
            KeyCode::Char('h') | KeyCode::Left if app.current_view == app::View::Scorecard => {
                app.lower_selected()
            }

            // Calls to action
            KeyCode::Char('a') => app.open_link(CtaLink::StrategyAudit),
            KeyCode::Char('m') => app.open_link(CtaLink::Masterclass),

            KeyCode::Tab => app.toggle_view(),
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
