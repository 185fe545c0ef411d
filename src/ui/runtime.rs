use crate::catalog::CatalogClient;
use crate::config::UiConfig;
use crate::preference::ThemeProvider;
use crate::ui::app::{App, AppOptions, PosterSource};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::CatalogWorker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

/// Run the interactive browser until the user quits.
///
/// `initial_year` pre-fills the year field and starts a search right away.
pub fn run(
    handle: &Handle,
    client: CatalogClient,
    theme: ThemeProvider,
    ui: &UiConfig,
    initial_year: Option<i32>,
) -> io::Result<()> {
    let settings = client.settings();
    let options = AppOptions {
        items_per_page: ui.items_per_page,
        posters: ui.posters.then(|| PosterSource {
            image_base_url: settings.image_base_url.clone(),
            size: settings.poster_size.clone(),
        }),
    };
    let tick_rate = Duration::from_millis(ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(theme, options);
    app.set_command_sender(CatalogWorker::spawn(handle, client, events.sender()));
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    if let Some(year) = initial_year {
        for digit in year.to_string().chars() {
            app.type_digit(digit);
        }
        app.submit();
    }
    info!("Browser started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Discovered {
                generation,
                request,
                result,
            }) => app.on_discovered(generation, request, result),
            Ok(AppEvent::PosterFetched {
                movie_id,
                poster_path,
                thumbnail,
            }) => app.on_poster_fetched(movie_id, &poster_path, thumbnail),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("Browser stopped");
    drop(guard);
    Ok(())
}
