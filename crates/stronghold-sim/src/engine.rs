//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, arbitrates player intents, runs all
//! systems in a fixed order each tick, and produces `GameStateSnapshot`s.
//! Completely headless (no terminal dependency), enabling deterministic
//! testing.

use glam::IVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stronghold_core::catalog::{structure_spec, troop_spec};
use stronghold_core::commands::{CommandOutcome, PlaceError, PlayerCommand};
use stronghold_core::components::{ResourceTank, Structure};
use stronghold_core::constants::{
    BOARD_HEIGHT, BOARD_WIDTH, PLAYER_START, PLAYER_STEP_X, SIDEBAR_WIDTH, STARTING_ELIXIR,
    STARTING_GOLD,
};
use stronghold_core::enums::{Direction, GeneratorKind, StructureKind, TroopKind};
use stronghold_core::events::GameEvent;
use stronghold_core::state::GameStateSnapshot;
use stronghold_core::types::{BoundingBox, GridPos};

use crate::registry::WorldIndex;
use crate::systems;
use crate::systems::spawner::SpawnTally;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same assault.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The player's treasury. Only harvesting credits it; only purchases debit it.
#[derive(Debug, Clone, Copy)]
pub struct Stockpile {
    pub gold: u32,
    pub elixir: u32,
}

impl Default for Stockpile {
    fn default() -> Self {
        Self {
            gold: STARTING_GOLD,
            elixir: STARTING_ELIXIR,
        }
    }
}

/// The simulation engine. Owns the ECS world and all game state.
pub struct GameEngine {
    world: World,
    index: WorldIndex,
    rng: ChaCha8Rng,
    stockpile: Stockpile,
    tick: u64,
    spawn_counter: u32,
    tally: SpawnTally,
    game_over: bool,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new simulation with the town hall standing and the builder at
    /// its starting position.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let index = world_setup::setup_world(&mut world);
        Self {
            world,
            index,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            stockpile: Stockpile::default(),
            tick: 0,
            spawn_counter: 0,
            tally: SpawnTally::default(),
            game_over: false,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// After game over the state is frozen and only the snapshot is built.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if !self.game_over {
            self.run_systems();
            self.tick += 1;
        }
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.index,
            self.tick,
            self.game_over,
            &self.stockpile,
            &self.tally,
            events,
        )
    }

    /// Read-only snapshot without advancing the simulation.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.index,
            self.tick,
            self.game_over,
            &self.stockpile,
            &self.tally,
            Vec::new(),
        )
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn stockpile(&self) -> Stockpile {
        self.stockpile
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Execute a single player command, reporting its outcome. Commands
    /// issued after game over are ignored.
    pub fn execute(&mut self, command: PlayerCommand) -> CommandOutcome {
        if self.game_over {
            return CommandOutcome::Ignored;
        }
        match command {
            PlayerCommand::Move { direction } => {
                if self.try_move(direction) {
                    CommandOutcome::Moved
                } else {
                    CommandOutcome::MoveBlocked
                }
            }
            PlayerCommand::Place { kind } => match self.place_structure(kind) {
                Ok(()) => CommandOutcome::Placed { kind },
                Err(reason) => CommandOutcome::PlaceRejected { kind, reason },
            },
            PlayerCommand::Collect { kind } => {
                let amount = self.collect(kind);
                if amount > 0 {
                    CommandOutcome::Collected { kind, amount }
                } else {
                    CommandOutcome::NothingCollected { kind }
                }
            }
            PlayerCommand::Train { kind } => {
                if self.train_troop(kind) {
                    CommandOutcome::Trained { kind }
                } else {
                    CommandOutcome::TrainRejected { kind }
                }
            }
        }
    }

    /// Move the builder one step, unless out of bounds or into a wall.
    /// Generators stay walkable; the builder must stand on them to collect.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        let current = self.player_position();
        let next = match direction {
            Direction::Up if current.y > 1 => GridPos::new(current.x, current.y - 1),
            Direction::Down if current.y < BOARD_HEIGHT - 2 => {
                GridPos::new(current.x, current.y + 1)
            }
            Direction::Left if current.x > SIDEBAR_WIDTH + 2 => {
                GridPos::new(current.x - PLAYER_STEP_X, current.y)
            }
            Direction::Right if current.x < BOARD_WIDTH - 4 => {
                GridPos::new(current.x + PLAYER_STEP_X, current.y)
            }
            _ => return false,
        };

        let probe = BoundingBox::new(next, IVec2::ONE);
        let blocked = self
            .index
            .walls
            .iter()
            .any(|&wall| self.structure_box(wall).is_some_and(|b| b.overlaps(&probe)));
        if blocked {
            return false;
        }
        if let Ok(mut pos) = self.world.get::<&mut GridPos>(self.index.player) {
            *pos = next;
            true
        } else {
            false
        }
    }

    /// True iff the candidate footprint overlaps no standing structure.
    /// Touching edges do not count as occupied.
    pub fn placement_clear(&self, candidate: &BoundingBox, ignore: Option<Entity>) -> bool {
        let others = self
            .index
            .walls
            .iter()
            .chain(&self.index.gold_mines)
            .chain(&self.index.collectors)
            .chain(std::iter::once(&self.index.town_hall));
        for &entity in others {
            if Some(entity) == ignore {
                continue;
            }
            if self
                .structure_box(entity)
                .is_some_and(|b| b.overlaps(candidate))
            {
                return false;
            }
        }
        true
    }

    /// Place a structure at the builder: walls sit on the builder's cell,
    /// generators are centered on it. Rejection order: collision, instance
    /// cap, cost. On success exactly the kind's declared costs are debited.
    pub fn place_structure(&mut self, kind: StructureKind) -> Result<(), PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameOver);
        }
        let player = self.player_position();
        let spec = structure_spec(kind);
        let anchor = match kind {
            StructureKind::Wall => player,
            _ => player - spec.size / 2,
        };
        self.place_at(kind, anchor)
    }

    fn place_at(&mut self, kind: StructureKind, anchor: GridPos) -> Result<(), PlaceError> {
        let spec = structure_spec(kind);
        let candidate = BoundingBox::new(anchor, spec.size);
        if !self.placement_clear(&candidate, None) {
            return Err(PlaceError::Occupied);
        }
        if self.index.live_count(kind) >= spec.max_instances {
            return Err(PlaceError::LimitReached);
        }
        if self.stockpile.gold < spec.cost_gold || self.stockpile.elixir < spec.cost_elixir {
            return Err(PlaceError::InsufficientResources);
        }
        self.stockpile.gold -= spec.cost_gold;
        self.stockpile.elixir -= spec.cost_elixir;
        let entity = world_setup::spawn_structure(&mut self.world, kind, anchor);
        if let Some(list) = self.index.structure_list_mut(kind) {
            list.push(entity);
        }
        Ok(())
    }

    /// Harvest the first full generator of `kind` whose footprint contains
    /// the builder. Returns the amount credited, 0 if none qualifies.
    pub fn collect(&mut self, kind: GeneratorKind) -> u32 {
        if self.game_over {
            return 0;
        }
        let player = self.player_position();
        let generators: Vec<Entity> = self.index.generators(kind).to_vec();
        for entity in generators {
            let Some(bbox) = self.structure_box(entity) else {
                continue;
            };
            if !bbox.contains(player) {
                continue;
            }
            let harvested = match self.world.get::<&mut ResourceTank>(entity) {
                Ok(mut tank) if tank.amount >= tank.capacity => {
                    let amount = tank.amount;
                    tank.amount = 0;
                    amount
                }
                _ => continue,
            };
            match kind {
                GeneratorKind::GoldMine => self.stockpile.gold += harvested,
                GeneratorKind::ElixirCollector => self.stockpile.elixir += harvested,
            }
            return harvested;
        }
        0
    }

    /// Train a troop at the builder's position, debiting its elixir cost.
    pub fn train_troop(&mut self, kind: TroopKind) -> bool {
        if self.game_over {
            return false;
        }
        let spec = troop_spec(kind);
        if self.stockpile.elixir < spec.cost_elixir {
            return false;
        }
        self.stockpile.elixir -= spec.cost_elixir;
        let position = self.player_position();
        let entity = world_setup::spawn_troop(&mut self.world, kind, position);
        self.index.troops.push(entity);
        true
    }

    /// Order a troop to attack a hostile directly.
    pub fn troop_attack(&mut self, troop: Entity, target: Entity) -> bool {
        if self.game_over {
            return false;
        }
        systems::troop_combat::attack(&mut self.world, troop, target)
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.index,
            &mut self.spawn_counter,
            &mut self.tally,
            &mut self.events,
        );
        // 2. Hostile state machines; the pass halts the instant the hall falls
        let hall_destroyed = systems::hostile_ai::run(&mut self.world, &mut self.rng, &self.index);
        if hall_destroyed {
            self.game_over = true;
            self.events.push(GameEvent::TownHallDestroyed);
            tracing::info!("town hall destroyed, game over");
            // Pruning is skipped on the final tick; generators still accrue,
            // matching the original update order.
            systems::economy::run(&mut self.world, &mut self.events);
            return;
        }
        // 3. Troop engagement
        systems::troop_combat::run(&mut self.world, &self.index);
        // 4. Prune destroyed structures
        systems::cleanup::run(
            &mut self.world,
            &mut self.index,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 5. Resource accrual
        systems::economy::run(&mut self.world, &mut self.events);
    }

    fn player_position(&self) -> GridPos {
        self.world
            .get::<&GridPos>(self.index.player)
            .map(|p| *p)
            .unwrap_or(PLAYER_START)
    }

    fn structure_box(&self, entity: Entity) -> Option<BoundingBox> {
        let kind = self.world.get::<&Structure>(entity).ok()?.kind;
        let position = *self.world.get::<&GridPos>(entity).ok()?;
        Some(BoundingBox::new(position, structure_spec(kind).size))
    }

    // --- Test support ---

    /// Place a structure at an arbitrary anchor, bypassing the builder.
    #[cfg(test)]
    pub fn place_structure_at(
        &mut self,
        kind: StructureKind,
        anchor: GridPos,
    ) -> Result<(), PlaceError> {
        self.place_at(kind, anchor)
    }

    /// Spawn a hostile at an exact position.
    #[cfg(test)]
    pub fn spawn_hostile_at(
        &mut self,
        kind: stronghold_core::enums::HostileKind,
        position: GridPos,
    ) -> Entity {
        let entity = world_setup::spawn_hostile(&mut self.world, kind, position);
        self.index.hostiles.push(entity);
        entity
    }

    /// Spawn a troop at an exact position, free of charge.
    #[cfg(test)]
    pub fn spawn_troop_at(&mut self, kind: TroopKind, position: GridPos) -> Entity {
        let entity = world_setup::spawn_troop(&mut self.world, kind, position);
        self.index.troops.push(entity);
        entity
    }

    /// Move the builder to an exact position.
    #[cfg(test)]
    pub fn teleport_player(&mut self, position: GridPos) {
        if let Ok(mut pos) = self.world.get::<&mut GridPos>(self.index.player) {
            *pos = position;
        }
    }

    /// Overwrite a structure's health.
    #[cfg(test)]
    pub fn set_structure_health(&mut self, entity: Entity, health: i32) {
        if let Ok(mut s) = self.world.get::<&mut Structure>(entity) {
            s.health = health;
        }
    }

    /// Get a read-only reference to the entity index.
    #[cfg(test)]
    pub fn index(&self) -> &WorldIndex {
        &self.index
    }
}
