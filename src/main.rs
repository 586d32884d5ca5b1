use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyward::constants::TICK_INTERVAL_MS;
use skyward::game::logic::process_tick;
use skyward::game::types::Session;
use skyward::input::{handle_key, InputResult};
use skyward::ui::background::Background;
use skyward::ui::scene::render_session;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let background = Background::new();
    let mut rng = rand::thread_rng();

    // The clock feeds spawn cadence only; physics is tick-counted.
    let clock = Instant::now();
    let mut session = Session::new(0);

    let tick_rate = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            render_session(frame, area, &session, &background);
        })?;

        // Drain every pending event before simulating this tick.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                let now_ms = clock.elapsed().as_millis() as i64;
                if handle_key(&mut session, key_event, now_ms) == InputResult::Quit {
                    return Ok(());
                }
            }
        }

        // Frame-rate governor: simulate once per tick interval, sleep the
        // remainder otherwise.
        if last_tick.elapsed() >= tick_rate {
            let now_ms = clock.elapsed().as_millis() as i64;
            process_tick(&mut session, now_ms, &mut rng);
            last_tick = Instant::now();
        } else {
            std::thread::sleep(tick_rate.saturating_sub(last_tick.elapsed()));
        }
    }
}
