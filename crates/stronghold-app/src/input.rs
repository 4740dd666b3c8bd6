//! Raw keyboard decoding into player intents.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use stronghold_core::commands::PlayerCommand;
use stronghold_core::enums::{Direction, GeneratorKind, StructureKind, TroopKind};

pub enum Intent {
    Command(PlayerCommand),
    Quit,
}

/// Wait up to `timeout` for a key and translate it; anything outside the key
/// map is swallowed.
pub fn poll_intent(timeout: Duration) -> Result<Option<Intent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
        return Ok(None);
    };
    if kind == KeyEventKind::Release {
        return Ok(None);
    }
    Ok(translate(code))
}

fn translate(code: KeyCode) -> Option<Intent> {
    let command = match code {
        KeyCode::Up | KeyCode::Char('w') => PlayerCommand::Move {
            direction: Direction::Up,
        },
        KeyCode::Down | KeyCode::Char('s') => PlayerCommand::Move {
            direction: Direction::Down,
        },
        KeyCode::Left | KeyCode::Char('a') => PlayerCommand::Move {
            direction: Direction::Left,
        },
        KeyCode::Right | KeyCode::Char('d') => PlayerCommand::Move {
            direction: Direction::Right,
        },
        KeyCode::Char('1') => PlayerCommand::Place {
            kind: StructureKind::Wall,
        },
        KeyCode::Char('2') => PlayerCommand::Place {
            kind: StructureKind::GoldMine,
        },
        KeyCode::Char('3') => PlayerCommand::Place {
            kind: StructureKind::ElixirCollector,
        },
        KeyCode::Char('g') => PlayerCommand::Collect {
            kind: GeneratorKind::GoldMine,
        },
        KeyCode::Char('e') => PlayerCommand::Collect {
            kind: GeneratorKind::ElixirCollector,
        },
        KeyCode::Char('t') => PlayerCommand::Train {
            kind: TroopKind::Archer,
        },
        KeyCode::Char('b') => PlayerCommand::Train {
            kind: TroopKind::Barbarian,
        },
        KeyCode::Char('q') | KeyCode::Esc => return Some(Intent::Quit),
        _ => return None,
    };
    Some(Intent::Command(command))
}
