/*
 * 对局记录与存储
 *
 * - Game：一局棋的记录（局面串、状态、双方、最后一步等），可序列化为 JSON
 * - GameRepository：按对局 id 存取记录，引擎本身不持有任何全局状态
 * - MemoryRepository：内存实现
 * - GameService：取当前对局 / 新建对局 / 走子并保存
 *
 * 注意
 * - 走子后只要出现将军，对局即结束（status = done），不判断是否真的将死
 */
use std::collections::BTreeMap;
use std::fmt;

use engine::constant::START_FEN;
use engine::engine::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Play,
    Done,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Play => write!(f, "play"),
            GameStatus::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Game {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "FEN")]
    pub fen: String,
    pub status: GameStatus,
    pub white: String,
    pub black: String,
    pub last_move: String,
    pub your_color: String,
    pub is_your_move: bool,
    pub offer_draw: String,
    pub winner: String,
}

impl Game {
    pub fn new(fen: &str) -> Self {
        Game {
            id: 0,
            fen: fen.to_owned(),
            status: GameStatus::Play,
            white: String::new(),
            black: String::new(),
            last_move: String::new(),
            your_color: "white".to_owned(),
            is_your_move: false,
            offer_draw: String::new(),
            winner: String::new(),
        }
    }

    pub fn engine(&self) -> Engine {
        Engine::new(&self.fen)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GameID = {}", self.id)?;
        writeln!(f, "FEN = {}", self.fen)?;
        writeln!(f, "Status = {}", self.status)?;
        writeln!(f, "White = {}", self.white)?;
        writeln!(f, "Black = {}", self.black)?;
        writeln!(f, "LastMove = {}", self.last_move)?;
        writeln!(f, "YourColor = {}", self.your_color)?;
        writeln!(f, "IsYourMove = {}", self.is_your_move)?;
        writeln!(f, "OfferDraw = {}", self.offer_draw)?;
        write!(f, "Winner = {}", self.winner)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game {0} not found")]
    NotFound(u64),
}

/// Storage of game records keyed by id.
pub trait GameRepository {
    /// The in-progress game with the lowest id.
    fn current(&self) -> Option<Game>;
    fn get(&self, id: u64) -> Option<Game>;
    /// Store a new record, assigning and returning its id.
    fn insert(&mut self, game: Game) -> u64;
    fn update(&mut self, game: &Game) -> Result<(), GameError>;
}

#[derive(Debug, Default)]
pub struct MemoryRepository {
    games: BTreeMap<u64, Game>,
    last_id: u64,
}

impl GameRepository for MemoryRepository {
    fn current(&self) -> Option<Game> {
        self.games
            .values()
            .find(|game| game.status == GameStatus::Play)
            .cloned()
    }

    fn get(&self, id: u64) -> Option<Game> {
        self.games.get(&id).cloned()
    }

    fn insert(&mut self, mut game: Game) -> u64 {
        self.last_id += 1;
        game.id = self.last_id;
        self.games.insert(game.id, game);
        self.last_id
    }

    fn update(&mut self, game: &Game) -> Result<(), GameError> {
        let stored = self.games.get_mut(&game.id).ok_or(GameError::NotFound(game.id))?;
        *stored = game.clone();
        Ok(())
    }
}

pub struct GameService<R> {
    repository: R,
    start_fen: String,
}

impl<R: GameRepository> GameService<R> {
    pub fn new(repository: R) -> Self {
        GameService::with_start_fen(repository, START_FEN)
    }

    /// Service whose new games start from `start_fen`.
    pub fn with_start_fen(repository: R, start_fen: &str) -> Self {
        GameService {
            repository,
            start_fen: start_fen.to_owned(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The current game, creating one if no game is in progress.
    pub fn current_game(&mut self) -> Game {
        if let Some(game) = self.repository.current() {
            return game;
        }
        let mut game = Game::new(&self.start_fen);
        game.id = self.repository.insert(game.clone());
        info!(id = game.id, fen = %game.fen, "new game");
        game
    }

    pub fn game(&self, id: u64) -> Result<Game, GameError> {
        self.repository.get(id).ok_or(GameError::NotFound(id))
    }

    /// Play `token` in game `id`.
    ///
    /// Finished games and rejected moves return the stored record unchanged.
    pub fn make_move(&mut self, id: u64, token: &str) -> Result<Game, GameError> {
        let mut game = self.game(id)?;
        if game.status != GameStatus::Play {
            debug!(id, token, "game is over, move ignored");
            return Ok(game);
        }

        let next = game.engine().apply(token);
        if next.fen() == game.fen {
            debug!(id, token, "move rejected");
            return Ok(game);
        }

        game.fen = next.fen().to_owned();
        game.last_move = token.to_owned();
        game.your_color = next.side_to_move().name().to_owned();
        if next.is_check() {
            game.status = GameStatus::Done;
            info!(id, token, "check, game over");
        }
        self.repository.update(&game)?;
        info!(id, token, fen = %game.fen, "move played");
        Ok(game)
    }
}
