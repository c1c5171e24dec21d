//! Match validator: dropping vowel tiles onto picture zones.
//!
//! A [`MatchBoard`] is built for the session's current level. It owns the
//! per-zone and per-tile flags; the session owns score and progress.

use super::catalog::Level;
use super::events::{GameEvent, GameObserver, LevelCompleted};
use super::session::{GameSession, Phase, SessionError};
use super::types::Vowel;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A drop target bound to one expected vowel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropZone {
    expected: Vowel,
    word: String,
    glyph: String,
    resolved: bool,
}

impl DropZone {
    /// The vowel this zone accepts.
    pub fn expected(&self) -> Vowel {
        self.expected
    }

    /// Word shown under the picture.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The picture.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// True once a correct tile has been dropped here.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// A draggable vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTile {
    vowel: Vowel,
    consumed: bool,
}

impl MatchTile {
    /// The vowel on the tile.
    pub fn vowel(&self) -> Vowel {
        self.vowel
    }

    /// True once the tile has been matched and can no longer be dragged.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// What a drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// The zone is resolved and the match was recorded.
    Correct {
        /// Present when this match completed the level.
        level_completed: Option<LevelCompleted>,
    },
    /// The tile does not belong here; nothing changed.
    Wrong,
    /// The zone was already resolved; nothing changed and nothing was signalled.
    Ignored,
}

/// Error that can occur when validating a drop.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DropError {
    /// No zone exists at this index.
    #[display("No drop zone at index {}", _0)]
    UnknownZone(usize),

    /// The level has no tile for this vowel.
    #[display("No tile for vowel {} in this level", _0)]
    UnknownTile(Vowel),

    /// The symbol is not one of the five vowels.
    #[display("'{}' is not a vowel symbol", _0)]
    UnknownSymbol(String),

    /// The tile has already been matched.
    #[display("Tile {} is already used", _0)]
    TileConsumed(Vowel),

    /// The board was built for a level or play-through the session has left.
    #[display("Board is for {} but the session is on {}", board, session)]
    StaleBoard {
        /// Where the board was built.
        board: BoardStamp,
        /// Where the session is now.
        session: BoardStamp,
    },

    /// The session rejected the transition.
    #[display("{}", _0)]
    Session(SessionError),
}

impl std::error::Error for DropError {}

impl From<SessionError> for DropError {
    fn from(err: SessionError) -> Self {
        DropError::Session(err)
    }
}

/// Returns true when a dragged vowel belongs on a zone.
pub fn is_match(dragged: Vowel, expected: Vowel) -> bool {
    dragged == expected
}

/// The play-through and level a [`MatchBoard`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("play-through {}, level index {}", generation, level_index)]
pub struct BoardStamp {
    /// Session generation, bumped by every reset.
    pub generation: u64,
    /// 0-based level index.
    pub level_index: usize,
}

impl BoardStamp {
    /// The stamp of the session's current level.
    pub fn of(session: &GameSession) -> Self {
        Self {
            generation: session.generation(),
            level_index: session.level_index(),
        }
    }
}

/// Zones and tiles for one level of the matching game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBoard {
    stamp: BoardStamp,
    zones: Vec<DropZone>,
    tiles: Vec<MatchTile>,
}

impl MatchBoard {
    /// Builds the board for a level.
    ///
    /// One zone per pair; one tile per distinct vowel, so duplicate vowels
    /// in the level's pairs yield a single tile.
    #[instrument(skip(level), fields(level = level.id()))]
    pub fn new(stamp: BoardStamp, level: &Level) -> Self {
        let zones = level
            .pairs()
            .iter()
            .map(|pair| DropZone {
                expected: pair.vowel(),
                word: pair.word().to_string(),
                glyph: pair.glyph().to_string(),
                resolved: false,
            })
            .collect::<Vec<_>>();
        let tiles = level
            .distinct_vowels()
            .into_iter()
            .map(|vowel| MatchTile {
                vowel,
                consumed: false,
            })
            .collect::<Vec<_>>();
        debug!(zones = zones.len(), tiles = tiles.len(), "Built match board");
        Self {
            stamp,
            zones,
            tiles,
        }
    }

    /// Builds the board for the session's current level.
    #[instrument(skip(session))]
    pub fn for_session(session: &GameSession) -> Result<Self, SessionError> {
        let level = session.current_level().ok_or(SessionError::NotStarted)?;
        Ok(Self::new(BoardStamp::of(session), level))
    }

    /// Drops a tile on a zone.
    ///
    /// Precondition failures (unknown zone or tile, used tile, stale board,
    /// inactive session) are errors and change nothing. A resolved zone
    /// silently ignores further drops.
    #[instrument(skip(self, session, observer), fields(level = self.stamp.level_index))]
    pub fn drop_tile(
        &mut self,
        session: &mut GameSession,
        vowel: Vowel,
        zone: usize,
        observer: &mut impl GameObserver,
    ) -> Result<DropOutcome, DropError> {
        let current = BoardStamp::of(session);
        if current != self.stamp {
            warn!(board = %self.stamp, session = %current, "Drop on a stale board");
            return Err(DropError::StaleBoard {
                board: self.stamp,
                session: current,
            });
        }

        let target = self.zones.get(zone).ok_or(DropError::UnknownZone(zone))?;
        if target.resolved {
            debug!(zone, "Zone already resolved, ignoring drop");
            return Ok(DropOutcome::Ignored);
        }
        let expected = target.expected;

        let tile_index = self
            .tiles
            .iter()
            .position(|t| t.vowel == vowel)
            .ok_or(DropError::UnknownTile(vowel))?;
        if self.tiles[tile_index].consumed {
            warn!(%vowel, "Consumed tile dropped");
            return Err(DropError::TileConsumed(vowel));
        }

        if !is_match(vowel, expected) {
            debug!(%vowel, %expected, zone, "Wrong drop");
            observer.notify(&GameEvent::WrongMatch { vowel, zone });
            return Ok(DropOutcome::Wrong);
        }

        // Check the session before committing zone or tile flags.
        if let Some(error) = session_inactive(session) {
            warn!(%error, "Session not accepting matches");
            return Err(error.into());
        }

        self.zones[zone].resolved = true;
        self.tiles[tile_index].consumed = true;
        info!(%vowel, zone, "Correct drop");
        observer.notify(&GameEvent::CorrectMatch { vowel, zone });

        let level_completed = session.record_correct_match(observer)?;
        Ok(DropOutcome::Correct { level_completed })
    }

    /// Drops a tile identified by its raw symbol, as forwarded from the UI.
    #[instrument(skip(self, session, observer))]
    pub fn drop_symbol(
        &mut self,
        session: &mut GameSession,
        symbol: &str,
        zone: usize,
        observer: &mut impl GameObserver,
    ) -> Result<DropOutcome, DropError> {
        let vowel =
            Vowel::from_symbol(symbol).ok_or_else(|| DropError::UnknownSymbol(symbol.to_string()))?;
        self.drop_tile(session, vowel, zone, observer)
    }

    /// Level index this board was built for.
    pub fn level_index(&self) -> usize {
        self.stamp.level_index
    }

    /// Play-through and level this board was built for.
    pub fn stamp(&self) -> BoardStamp {
        self.stamp
    }

    /// All zones in presentation order.
    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    /// All tiles, consumed or not.
    pub fn tiles(&self) -> &[MatchTile] {
        &self.tiles
    }

    /// Tiles that can still be dragged.
    pub fn available_tiles(&self) -> Vec<Vowel> {
        self.tiles
            .iter()
            .filter(|t| !t.consumed)
            .map(|t| t.vowel)
            .collect()
    }

    /// True when every zone is resolved.
    pub fn is_cleared(&self) -> bool {
        self.zones.iter().all(|z| z.resolved)
    }
}

fn session_inactive(session: &GameSession) -> Option<SessionError> {
    match session.current_level() {
        None => Some(SessionError::NotStarted),
        Some(_) if session.phase() != Phase::InLevel => {
            Some(SessionError::NoActiveLevel)
        }
        Some(_) => None,
    }
}
