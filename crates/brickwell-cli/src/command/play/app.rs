use std::time::{Duration, Instant};

use brickwell_engine::{
    GameSession, HighScoreStore, MemoryHighScoreStore, RandomPieceSource, WellSize,
};
use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::play::{
        StoreChoice,
        screens::{
            game::{GameReport, GameScreen},
            login::{LoginAction, LoginScreen},
        },
    },
    host::Cadence,
    store::JsonHighScoreStore,
    tui::{App, RenderMode, Runtime},
};

const TICK_INTERVAL: Duration = Duration::from_millis(10);
const FRAME_RATE: f64 = 60.0;

#[derive(Debug)]
enum Screen {
    Login(LoginScreen),
    Game(Box<GameScreen>),
}

/// Login screen, then one game session for the chosen player.
#[derive(Debug)]
pub(crate) struct PlayApp {
    size: WellSize,
    cadence: Cadence,
    pieces: Option<RandomPieceSource>,
    store: StoreChoice,
    player: Option<String>,
    key_release_events: bool,
    screen: Screen,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(
        size: WellSize,
        cadence: Cadence,
        pieces: RandomPieceSource,
        store: StoreChoice,
        player: Option<String>,
    ) -> Self {
        Self {
            size,
            cadence,
            pieces: Some(pieces),
            store,
            player,
            key_release_events: false,
            screen: Screen::Login(LoginScreen::new()),
            is_exiting: false,
        }
    }

    /// Final numbers of the game, if the login screen was passed.
    pub(crate) fn into_report(self) -> Option<GameReport> {
        match self.screen {
            Screen::Login(_) => None,
            Screen::Game(game) => Some(game.report()),
        }
    }

    fn open_game(&mut self, player: String, now: Instant) {
        let Some(pieces) = self.pieces.take() else {
            return;
        };
        let store: Box<dyn HighScoreStore> = match &self.store {
            StoreChoice::Json(path) => {
                Box::new(JsonHighScoreStore::new(path.clone()).with_seed(pieces.seed()))
            }
            StoreChoice::Memory => Box::new(MemoryHighScoreStore::new()),
        };
        let session = GameSession::with_piece_source(player, self.size, Box::new(pieces), store);
        let screen = GameScreen::new(session, self.cadence, self.key_release_events, now);
        self.screen = Screen::Game(Box::new(screen));
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(TICK_INTERVAL));
        runtime.set_render_mode(RenderMode::throttled_from_rate(FRAME_RATE));
        self.key_release_events = runtime.key_release_events();
        if let Some(player) = self.player.take() {
            self.open_game(player, Instant::now());
        }
    }

    fn should_exit(&self) -> bool {
        match &self.screen {
            Screen::Login(_) => self.is_exiting,
            Screen::Game(game) => game.is_exiting(),
        }
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        let now = Instant::now();
        match &mut self.screen {
            Screen::Login(login) => match login.handle_event(&event) {
                LoginAction::Stay => {}
                LoginAction::Submit(player) => self.open_game(player, now),
                LoginAction::Quit => self.is_exiting = true,
            },
            Screen::Game(game) => game.handle_event(&event, now),
        }
    }

    fn draw(&self, frame: &mut Frame) {
        match &self.screen {
            Screen::Login(login) => login.draw(frame),
            Screen::Game(game) => game.draw(frame),
        }
    }

    fn update(&mut self, _runtime: &mut Runtime, now: Instant) {
        if let Screen::Game(game) = &mut self.screen {
            game.update(now);
        }
    }
}
