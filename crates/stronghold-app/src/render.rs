//! Glyph-grid rendering of snapshots.
//!
//! Straight ANSI cursor addressing via crossterm: frame and sidebar first,
//! then structures, hostiles, troops, and the builder on top.

use std::io::Write;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use stronghold_core::catalog::structure_spec;
use stronghold_core::constants::{BOARD_HEIGHT, BOARD_WIDTH, SIDEBAR_WIDTH};
use stronghold_core::enums::StructureKind;
use stronghold_core::state::{GameStateSnapshot, StructureView};

pub fn draw(out: &mut impl Write, snapshot: &GameStateSnapshot) -> Result<()> {
    queue!(out, Clear(ClearType::All))?;
    draw_frame(out)?;
    draw_sidebar(out, snapshot)?;

    draw_structure(out, &snapshot.town_hall)?;
    for s in &snapshot.structures {
        draw_structure(out, s)?;
    }
    for h in &snapshot.hostiles {
        put(out, h.position.x, h.position.y, &h.glyph)?;
    }
    for t in &snapshot.troops {
        put(out, t.position.x, t.position.y, &t.glyph)?;
    }
    put(
        out,
        snapshot.player.position.x,
        snapshot.player.position.y,
        &snapshot.player.glyph,
    )?;

    if snapshot.game_over {
        let message = "GAME OVER - Town Hall Destroyed!";
        put(
            out,
            (BOARD_WIDTH - message.len() as i32) / 2,
            BOARD_HEIGHT / 2,
            message,
        )?;
    }
    out.flush()?;
    Ok(())
}

fn put(out: &mut impl Write, x: i32, y: i32, text: &str) -> Result<()> {
    queue!(out, MoveTo(x as u16, y as u16), Print(text))?;
    Ok(())
}

/// Outer border with a separator column between sidebar and field.
fn draw_frame(out: &mut impl Write) -> Result<()> {
    let mut horizontal = String::with_capacity(BOARD_WIDTH as usize);
    for x in 0..BOARD_WIDTH {
        horizontal.push(if x == 0 || x == SIDEBAR_WIDTH || x == BOARD_WIDTH - 1 {
            '+'
        } else {
            '-'
        });
    }
    put(out, 0, 0, &horizontal)?;
    put(out, 0, BOARD_HEIGHT - 1, &horizontal)?;
    for y in 1..BOARD_HEIGHT - 1 {
        put(out, 0, y, "|")?;
        put(out, SIDEBAR_WIDTH, y, "|")?;
        put(out, BOARD_WIDTH - 1, y, "|")?;
    }
    Ok(())
}

fn draw_sidebar(out: &mut impl Write, snapshot: &GameStateSnapshot) -> Result<()> {
    let count = |kind: StructureKind| {
        snapshot
            .structures
            .iter()
            .filter(|s| s.kind == kind)
            .count()
    };
    let lines = [
        format!("Gold = {}", snapshot.economy.gold),
        format!("Elixir = {}", snapshot.economy.elixir),
        format!(
            "Walls = {}/{}",
            count(StructureKind::Wall),
            structure_spec(StructureKind::Wall).max_instances
        ),
        format!(
            "Gold Mines = {}/{}",
            count(StructureKind::GoldMine),
            structure_spec(StructureKind::GoldMine).max_instances
        ),
        format!(
            "Elixir Collectors = {}/{}",
            count(StructureKind::ElixirCollector),
            structure_spec(StructureKind::ElixirCollector).max_instances
        ),
        format!("Town Hall HP = {}", snapshot.town_hall.health),
        format!("Hostiles = {}", snapshot.hostiles.len()),
        format!("Raiders = {}", snapshot.raiders_spawned),
        format!("Bombermen = {}", snapshot.bombermen_spawned),
        format!("Troops = {}", snapshot.troops.len()),
    ];
    for (i, line) in lines.iter().enumerate() {
        put(out, 1, 1 + i as i32, line)?;
    }
    Ok(())
}

fn draw_structure(out: &mut impl Write, view: &StructureView) -> Result<()> {
    let (x, y) = (view.position.x, view.position.y);
    if !view.bordered {
        return put(out, x, y, &view.glyph);
    }
    let (w, h) = (view.size.x, view.size.y);
    let horizontal = format!("+{}+", "-".repeat((w - 2).max(0) as usize));
    put(out, x, y, &horizontal)?;
    for row in 1..h - 1 {
        put(out, x, y + row, "|")?;
        put(out, x + w - 1, y + row, "|")?;
    }
    put(out, x, y + h - 1, &horizontal)?;
    put(out, x + w / 2, y + h / 2, &view.glyph)
}
