use iced::alignment::Horizontal;
use iced::widget::{button, column, container, opaque, stack, text, vertical_space, Column, Space};
use iced::{keyboard, time, Alignment, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod assets;
mod state;
mod ui;

use assets::cache::PosterCache;
use assets::poster::{Poster, PosterError, PosterLibrary};
use state::catalog::{Catalog, CatalogStore};
use state::presentation::{PickTicket, Presentation};
use state::settings::Settings;
use ui::spin::Spin;

/// Main application state
struct MovieNight {
    /// Catalog store plus the on-screen state machine
    presentation: Presentation,
    /// Decoded posters by image key
    posters: PosterCache,
    /// Card flip played while a pick is in flight
    spin: Spin,
    /// Last animation frame time
    now: Instant,
    settings: Settings,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The window is up; show the first movie
    Appeared,
    /// User pressed "Pick a Movie"
    PickRequested,
    /// Shuffle delay elapsed for this pick
    PickSettled(PickTicket),
    /// User clicked the movie card
    CardTapped,
    /// User closed the detail sheet
    CloseRequested,
    /// Background poster decode finished
    PosterLoaded(String, Result<Poster, PosterError>),
    /// Animation frame
    Tick(Instant),
}

impl MovieNight {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring settings file, using defaults");
            Settings::default()
        });

        let catalog = load_catalog(&settings);
        tracing::info!(movies = catalog.len(), "🎬 Movie Night initialized");

        let library = PosterLibrary::new(settings.poster_dir());
        tracing::debug!(dir = %library.dir().display(), "poster directory");
        let mut posters = PosterCache::new();
        let poster_height = settings.poster_height;

        let mut tasks = vec![Task::done(Message::Appeared)];
        for movie in catalog.movies() {
            if !posters.begin(movie.image_key()) {
                continue;
            }

            let key = movie.image_key().to_string();
            let library = library.clone();
            tasks.push(Task::perform(
                async move {
                    let result = library.load(key.clone(), poster_height).await;
                    (key, result)
                },
                |(key, result)| Message::PosterLoaded(key, result),
            ));
        }

        let spin = Spin::new(settings.shuffle_delay() * 2);
        let app = MovieNight {
            presentation: Presentation::new(CatalogStore::new(catalog)),
            posters,
            spin,
            now: Instant::now(),
            settings,
        };

        (app, Task::batch(tasks))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Appeared => {
                if self.presentation.appear() {
                    if let Some(movie) = self.presentation.current_movie() {
                        tracing::info!(title = movie.title(), "first pick");
                    }
                }
                Task::none()
            }
            Message::PickRequested => {
                let Some(ticket) = self.presentation.request_pick() else {
                    return Task::none();
                };

                // Phase one: start the flip now, query the catalog after the delay
                self.now = Instant::now();
                self.spin.start(self.now);

                let delay = self.settings.shuffle_delay();
                Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        ticket
                    },
                    Message::PickSettled,
                )
            }
            Message::PickSettled(ticket) => {
                if let Some(movie) = self.presentation.settle_pick(ticket) {
                    tracing::info!(title = movie.title(), generation = ticket.generation(), "picked movie");
                }
                Task::none()
            }
            Message::CardTapped => {
                if self.presentation.card_tapped() {
                    self.spin.stop();
                }
                Task::none()
            }
            Message::CloseRequested => {
                self.presentation.close_requested();
                Task::none()
            }
            Message::PosterLoaded(key, result) => {
                self.posters.finish(key, result);
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let poster_height = self.settings.poster_height as f32;

        let card: Element<Message> = match self.presentation.current_movie() {
            Some(movie) => ui::card::view(
                movie,
                self.posters.handle(movie.image_key()),
                poster_height,
                self.spin.scale(self.now),
            ),
            None => Space::with_height(poster_height).into(),
        };

        let label = if self.presentation.animating() {
            "Picking..."
        } else {
            "Pick a Movie"
        };

        let pick = button(
            text(label)
                .size(22)
                .font(ui::style::BOLD)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press(Message::PickRequested)
        .width(Length::Fill)
        .padding(16)
        .style(ui::style::pick_button);

        let content: Column<Message> = column![
            text("Movie for Tonight")
                .size(36)
                .font(ui::style::BOLD),
            vertical_space(),
            card,
            vertical_space(),
            pick,
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Center);

        let screen = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::style::screen);

        match self.presentation.current_movie() {
            Some(movie) if self.presentation.details_visible() => {
                let sheet = ui::detail::view(
                    movie,
                    self.posters.handle(movie.image_key()),
                    poster_height * 1.25,
                );
                stack![screen, opaque(sheet)].into()
            }
            _ => screen.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(shortcut);

        let frames = if self.spin.is_running(self.now) {
            time::every(Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keys, frames])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Keyboard shortcuts: Space/Enter pick, D opens details, Escape closes them
fn shortcut(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;

    match key.as_ref() {
        keyboard::Key::Named(Named::Space | Named::Enter) => Some(Message::PickRequested),
        keyboard::Key::Named(Named::Escape) => Some(Message::CloseRequested),
        keyboard::Key::Character("d") => Some(Message::CardTapped),
        _ => None,
    }
}

/// Pick the catalog: a configured replacement if it loads, otherwise the bundled one
fn load_catalog(settings: &Settings) -> Catalog {
    if let Some(path) = &settings.catalog_path {
        match Catalog::load(path) {
            Ok(catalog) => return catalog,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to bundled catalog");
            }
        }
    }

    // The bundled catalog is compiled in; failing to parse it is a build defect
    Catalog::bundled().expect("bundled catalog must be a non-empty JSON array of movies")
}

/// Initialize logging. `RUST_LOG` overrides the default `info` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    iced::application(
        "Movie Night",
        MovieNight::update,
        MovieNight::view,
    )
    .subscription(MovieNight::subscription)
    .theme(MovieNight::theme)
    .centered()
    .run_with(MovieNight::new)
}
