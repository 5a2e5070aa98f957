//! The simulation engine.
//!
//! [`Game`] owns every piece of mutable game state. Each presented frame the
//! main loop calls [`Game::render`] and then [`Game::update`] exactly once;
//! there is no fixed timestep, so one update is one vsync tick.
//!
//! # Coordinates
//!
//! The playfield is 224x256 with y pointing up: the player sits near row 32,
//! the swarm starts at row 128 and moves down towards the player.

use tracing::{debug, info};

use crate::animation::SpriteAnimation;
use crate::colors;
use crate::entity::{Alien, AlienType, Bullet, BulletPool, Player};
use crate::input::InputState;
use crate::render::{PixelBuffer, Sprite};
use crate::rng::{Xorshift32, DEFAULT_SEED};
use crate::sprites;

pub const WIDTH: u32 = 224;
pub const HEIGHT: u32 = 256;

const ALIEN_COLUMNS: usize = 11;
const ALIEN_ROWS: usize = 5;
pub const NUM_ALIENS: usize = ALIEN_COLUMNS * ALIEN_ROWS;

const ALIEN_SPACING_X: i32 = 16;
const ALIEN_SPACING_Y: i32 = 17;
const SWARM_BASE_Y: i32 = 128;
const SWARM_START_POSITION: i32 = 24;
const SWARM_RIGHT_MARGIN: i32 = 3;
const SWARM_STEP: i32 = 4;
const SWARM_DROP: i32 = 8;

/// Ticks between swarm steps at the start of a wave.
const ALIEN_UPDATE_FREQUENCY: usize = 120;
const KILLS_PER_SPEED_UP: usize = 15;
const DEATH_COUNTER_START: u32 = 10;
const ALIEN_BULLET_FRAME_DURATION: usize = 5;

const PLAYER_START_LIVES: usize = 3;
const PLAYER_Y: i32 = 32;
const PLAYER_SPEED: i32 = 2;
const PLAYER_BULLET_SPEED: i32 = 2;
const ALIEN_BULLET_SPEED: i32 = -2;

const HUD_DIVIDER_ROW: i32 = 16;
const HUD_MARGIN: i32 = 4;
const HUD_BASELINE: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// Terminal: only the score is shown until the process exits.
    GameOver,
}

/// Horizontal offset that centers an alien sprite inside the death sprite's
/// footprint. Aliens are placed in 13px slots and shift left by this much
/// when they explode.
fn slot_offset(sprite: &Sprite<'_>) -> i32 {
    (sprites::ALIEN_DEATH.width() as i32 - sprite.width() as i32) / 2
}

/// Rigid-body state of the alien grid.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Swarm {
    /// Left edge of the leftmost live alien's slot.
    position: i32,
    /// Largest `position` before the right edge would pass the margin.
    max_position: i32,
    direction: i32,
    update_frequency: usize,
    update_timer: usize,
    kills: usize,
    speed_up_pending: bool,
}

impl Swarm {
    fn new() -> Self {
        Self {
            position: SWARM_START_POSITION,
            max_position: SWARM_START_POSITION,
            direction: SWARM_STEP,
            update_frequency: ALIEN_UPDATE_FREQUENCY,
            update_timer: 0,
            kills: 0,
            speed_up_pending: false,
        }
    }
}

pub struct Game {
    width: i32,
    height: i32,
    aliens: Vec<Alien>,
    death_counters: Vec<u32>,
    bullets: BulletPool,
    player: Player,
    swarm: Swarm,
    alien_animations: [SpriteAnimation<'static>; 3],
    alien_bullet_animation: SpriteAnimation<'static>,
    rng: Xorshift32,
    score: usize,
    credits: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// A fresh session whose alien fire pattern is driven by `seed`.
    pub fn with_seed(seed: u32) -> Self {
        let width = WIDTH as i32;
        let mut game = Self {
            width,
            height: HEIGHT as i32,
            aliens: Vec::with_capacity(NUM_ALIENS),
            death_counters: Vec::with_capacity(NUM_ALIENS),
            bullets: BulletPool::new(),
            player: Player::new(
                width / 2 - sprites::PLAYER.width() as i32 / 2,
                PLAYER_Y,
                PLAYER_START_LIVES,
            ),
            swarm: Swarm::new(),
            alien_animations: sprites::ALIENS
                .map(|sheet| SpriteAnimation::looping(&sheet, ALIEN_UPDATE_FREQUENCY)),
            alien_bullet_animation: SpriteAnimation::looping(
                &sprites::ALIEN_BULLET,
                ALIEN_BULLET_FRAME_DURATION,
            ),
            rng: Xorshift32::new(seed),
            score: 0,
            credits: 0,
        };
        game.spawn_wave();
        game
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn state(&self) -> GameState {
        if self.player.is_alive() {
            GameState::Running
        } else {
            GameState::GameOver
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    pub fn kills(&self) -> usize {
        self.swarm.kills
    }

    pub fn swarm_position(&self) -> i32 {
        self.swarm.position
    }

    pub fn swarm_direction(&self) -> i32 {
        self.swarm.direction
    }

    fn aliens_remaining(&self) -> bool {
        self.aliens.iter().any(|alien| !alien.is_dead())
    }

    /// The sprite an alien is currently drawn (and hit-tested) with.
    fn alien_frame(&self, kind: AlienType) -> Option<Sprite<'static>> {
        let index = kind.animation_index()?;
        self.alien_animations[index].current_frame().copied()
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Advance the simulation by one frame.
    ///
    /// Consumes the fire request in `input` whether or not a bullet could be
    /// spawned. Does nothing once the game is over; the frame that takes the
    /// last life still runs to completion.
    pub fn update(&mut self, input: &mut InputState) {
        if self.state() == GameState::GameOver {
            return;
        }

        self.update_bullets();
        self.apply_speed_up();
        self.tick_death_counters();

        if self.swarm.update_timer >= self.swarm.update_frequency {
            self.swarm.update_timer = 0;
            self.step_swarm();
            self.fire_alien_bullet();
        }
        self.swarm.update_timer += 1;

        for animation in &mut self.alien_animations {
            animation.tick();
        }
        self.alien_bullet_animation.tick();

        self.move_player(input.move_direction);

        if self.aliens_remaining() {
            self.fit_swarm_bounds();
        } else {
            info!(score = self.score, "wave cleared");
            self.spawn_wave();
        }

        if input.take_fire() {
            self.fire_player_bullet();
        }
    }

    fn update_bullets(&mut self) {
        let bottom = sprites::PLAYER_BULLET.height() as i32;
        let mut bi = 0;
        while let Some(bullet) = self.bullets.get_mut(bi) {
            bullet.y += bullet.direction;
            let bullet = *bullet;

            if bullet.y >= self.height || bullet.y < bottom {
                self.bullets.swap_remove(bi);
                continue;
            }

            if !bullet.is_player_bullet() {
                let hit = bullet.sprite().overlaps(
                    bullet.x,
                    bullet.y,
                    &sprites::PLAYER,
                    self.player.x,
                    self.player.y,
                );
                if hit {
                    self.player.lives = self.player.lives.saturating_sub(1);
                    self.bullets.swap_remove(bi);
                    debug!(lives = self.player.lives, "player hit");
                    if !self.player.is_alive() {
                        info!(score = self.score, "game over");
                    }
                    break;
                }
            } else {
                if let Some(bj) = self.find_bullet_collision(bi, &bullet) {
                    self.bullets.swap_remove_pair(bi, bj);
                    continue;
                }
                if self.hit_alien(&bullet) {
                    self.bullets.swap_remove(bi);
                    continue;
                }
            }

            bi += 1;
        }
    }

    /// Index of any other bullet the player bullet at `bi` runs into.
    fn find_bullet_collision(&self, bi: usize, bullet: &Bullet) -> Option<usize> {
        let sprite = bullet.sprite();
        self.bullets.iter().enumerate().find_map(|(bj, other)| {
            let hit = bj != bi
                && sprite.overlaps(bullet.x, bullet.y, &other.sprite(), other.x, other.y);
            hit.then_some(bj)
        })
    }

    /// Resolve a player bullet against the swarm. Returns whether it hit.
    fn hit_alien(&mut self, bullet: &Bullet) -> bool {
        let sprite = bullet.sprite();
        for ai in 0..self.aliens.len() {
            let alien = self.aliens[ai];
            let Some(frame) = self.alien_frame(alien.kind) else {
                continue;
            };
            if !sprite.overlaps(bullet.x, bullet.y, &frame, alien.x, alien.y) {
                continue;
            }

            self.score += alien.kind.points();
            let alien = &mut self.aliens[ai];
            alien.kind = AlienType::Dead;
            alien.x -= slot_offset(&frame);

            self.swarm.kills += 1;
            if self.swarm.kills % KILLS_PER_SPEED_UP == 0 {
                self.swarm.speed_up_pending = true;
            }
            return true;
        }
        false
    }

    fn apply_speed_up(&mut self) {
        if !std::mem::take(&mut self.swarm.speed_up_pending) {
            return;
        }
        self.swarm.update_frequency = (self.swarm.update_frequency / 2).max(1);
        for animation in &mut self.alien_animations {
            animation.set_frame_duration(animation.frame_duration() / 2);
        }
        debug!(
            frequency = self.swarm.update_frequency,
            kills = self.swarm.kills,
            "swarm speed up"
        );
    }

    fn tick_death_counters(&mut self) {
        for (alien, counter) in self.aliens.iter().zip(self.death_counters.iter_mut()) {
            if alien.is_dead() && *counter > 0 {
                *counter -= 1;
            }
        }
    }

    /// One swarm step: bounce off the left edge (dropping a row), bounce off
    /// the right edge, or slide sideways.
    fn step_swarm(&mut self) {
        let direction = self.swarm.direction;
        if self.swarm.position + direction < 0 {
            self.swarm.direction = -direction;
            for alien in &mut self.aliens {
                alien.y -= SWARM_DROP;
            }
        } else if self.swarm.position + direction > self.swarm.max_position {
            self.swarm.direction = -direction;
        } else {
            self.swarm.position += direction;
            for alien in &mut self.aliens {
                alien.x += direction;
            }
        }
    }

    /// Drop a bullet from a random live alien.
    fn fire_alien_bullet(&mut self) {
        // Rejection sampling below only terminates while someone is alive.
        if !self.aliens_remaining() || self.bullets.is_full() {
            return;
        }

        let alien = loop {
            let candidate = self.aliens[self.rng.next_index(self.aliens.len())];
            if !candidate.is_dead() {
                break candidate;
            }
        };
        let Some(sprite) = alien.kind.sprite() else {
            return;
        };
        let bullet_height = sprites::ALIEN_BULLET.frame_height() as i32;
        self.bullets.push(Bullet::new(
            alien.x + sprite.width() as i32 / 2,
            alien.y - bullet_height,
            ALIEN_BULLET_SPEED,
        ));
    }

    fn move_player(&mut self, move_direction: i32) {
        let delta = PLAYER_SPEED * move_direction;
        if delta == 0 {
            return;
        }
        let max_x = self.width - sprites::PLAYER.width() as i32;
        self.player.x = (self.player.x + delta).clamp(0, max_x);
    }

    fn fire_player_bullet(&mut self) {
        let bullet = Bullet::new(
            self.player.x + sprites::PLAYER.width() as i32 / 2,
            self.player.y + sprites::PLAYER.height() as i32,
            PLAYER_BULLET_SPEED,
        );
        self.bullets.push(bullet);
    }

    /// Tighten the bounce bounds to the live aliens.
    fn fit_swarm_bounds(&mut self) {
        let slot_width = sprites::ALIEN_DEATH.width() as i32;
        let mut left = i32::MAX;
        let mut right = i32::MIN;
        for alien in &self.aliens {
            let Some(sprite) = alien.kind.sprite() else {
                continue;
            };
            let slot = alien.x - slot_offset(&sprite);
            left = left.min(slot);
            right = right.max(slot + slot_width);
        }
        if left > right {
            return;
        }
        self.swarm.position = left;
        self.swarm.max_position = self.width - SWARM_RIGHT_MARGIN - (right - left);
    }

    /// Reset the swarm to its starting grid and speed.
    fn spawn_wave(&mut self) {
        self.swarm = Swarm::new();
        for animation in &mut self.alien_animations {
            animation.set_frame_duration(ALIEN_UPDATE_FREQUENCY);
            animation.reset();
        }

        self.aliens.clear();
        for row in 0..ALIEN_ROWS {
            let kind = AlienType::for_row(row);
            let offset = kind.sprite().map_or(0, |sprite| slot_offset(&sprite));
            for column in 0..ALIEN_COLUMNS {
                self.aliens.push(Alien::new(
                    SWARM_START_POSITION + ALIEN_SPACING_X * column as i32 + offset,
                    SWARM_BASE_Y + ALIEN_SPACING_Y * row as i32,
                    kind,
                ));
            }
        }
        self.death_counters.clear();
        self.death_counters.resize(NUM_ALIENS, DEATH_COUNTER_START);

        self.fit_swarm_bounds();
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Compose the current frame into `buffer`.
    pub fn render(&self, buffer: &mut PixelBuffer) {
        buffer.clear(colors::BACKGROUND);

        if self.state() == GameState::GameOver {
            buffer.draw_text(
                &sprites::GLYPHS,
                "GAME OVER",
                self.width / 2 - 30,
                self.height / 2,
                colors::FOREGROUND,
            );
            self.draw_score(buffer);
            return;
        }

        self.draw_hud(buffer);

        for (alien, &counter) in self.aliens.iter().zip(&self.death_counters) {
            if counter == 0 {
                continue;
            }
            let sprite = if alien.is_dead() {
                Some(sprites::ALIEN_DEATH)
            } else {
                self.alien_frame(alien.kind)
            };
            if let Some(sprite) = sprite {
                buffer.draw_sprite(&sprite, alien.x, alien.y, colors::FOREGROUND);
            }
        }

        for bullet in self.bullets.iter() {
            let sprite = if bullet.is_player_bullet() {
                Some(sprites::PLAYER_BULLET)
            } else {
                self.alien_bullet_animation.current_frame().copied()
            };
            if let Some(sprite) = sprite {
                buffer.draw_sprite(&sprite, bullet.x, bullet.y, colors::FOREGROUND);
            }
        }

        buffer.draw_sprite(
            &sprites::PLAYER,
            self.player.x,
            self.player.y,
            colors::FOREGROUND,
        );
    }

    fn draw_score(&self, buffer: &mut PixelBuffer) {
        let glyph_height = sprites::GLYPHS.frame_height() as i32;
        let digit_width = sprites::DIGITS.frame_width() as i32;
        buffer.draw_text(
            &sprites::GLYPHS,
            "SCORE",
            HUD_MARGIN,
            self.height - glyph_height - HUD_BASELINE,
            colors::FOREGROUND,
        );
        buffer.draw_number(
            &sprites::DIGITS,
            self.score,
            HUD_MARGIN + 2 * digit_width,
            self.height - 2 * glyph_height - 12,
            colors::FOREGROUND,
        );
    }

    fn draw_hud(&self, buffer: &mut PixelBuffer) {
        self.draw_score(buffer);

        buffer.draw_text(
            &sprites::GLYPHS,
            &format!("CREDIT {:02}", self.credits),
            164,
            HUD_BASELINE,
            colors::FOREGROUND,
        );

        buffer.draw_number(
            &sprites::DIGITS,
            self.player.lives,
            HUD_MARGIN,
            HUD_BASELINE,
            colors::FOREGROUND,
        );
        let mut x = 11 + sprites::DIGITS.frame_width() as i32;
        for _ in 1..self.player.lives {
            buffer.draw_sprite(&sprites::PLAYER, x, HUD_BASELINE, colors::FOREGROUND);
            x += sprites::PLAYER.width() as i32 + 2;
        }

        buffer.draw_hline(HUD_DIVIDER_ROW, colors::FOREGROUND);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(game: &mut Game, input: &mut InputState, frames: usize) {
        for _ in 0..frames {
            game.update(input);
        }
    }

    fn fire(game: &mut Game) {
        let mut input = InputState::new();
        input.fire_pressed = true;
        game.update(&mut input);
        assert!(!input.fire_pressed);
    }

    #[test]
    fn session_starts_with_full_wave() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.player().lives, 3);
        assert_eq!(game.score(), 0);
        assert_eq!(game.aliens().len(), NUM_ALIENS);
        assert!(game.aliens().iter().all(|alien| !alien.is_dead()));
        assert!(game.bullets().is_empty());
        assert_eq!(game.swarm_position(), 24);
        assert_eq!(game.swarm_direction(), 4);
    }

    #[test]
    fn grid_layout_follows_rows() {
        let game = Game::new();
        // Bottom-left alien is a C (12 wide, 0 offset), top-left an A (8 wide, 2 offset).
        assert_eq!(game.aliens()[0], Alien::new(24, 128, AlienType::C));
        assert_eq!(game.aliens()[22], Alien::new(25, 162, AlienType::B));
        assert_eq!(game.aliens()[44], Alien::new(26, 196, AlienType::A));
        assert_eq!(game.aliens()[54], Alien::new(26 + 160, 196, AlienType::A));
    }

    #[test]
    fn firing_spawns_a_bullet_at_the_muzzle() {
        let mut game = Game::new();
        let player = *game.player();
        fire(&mut game);

        assert_eq!(game.bullets().len(), 1);
        let bullet = game.bullets().get(0).unwrap();
        assert_eq!(*bullet, Bullet::new(player.x + 5, player.y + 7, 2));
    }

    #[test]
    fn bullet_kills_the_alien_above_the_player() {
        let mut game = Game::new();
        let mut input = InputState::new();
        fire(&mut game);
        run(&mut game, &mut input, 60);

        // Column 5 of the bottom row sits right above the starting player.
        assert_eq!(game.aliens()[5].kind, AlienType::Dead);
        assert_eq!(game.aliens()[5].x, 104);
        assert_eq!(game.score(), 10);
        assert_eq!(game.kills(), 1);
        assert!(game.bullets().is_empty());
        assert_eq!(game.aliens().iter().filter(|a| a.is_dead()).count(), 1);
    }

    #[test]
    fn dead_alien_shift_recenters_death_sprite() {
        let mut game = Game::new();
        // Top row is type A (8 wide): the death sprite is 13 wide, so shift by 2.
        let target = game.aliens()[44];
        game.bullets.push(Bullet::new(target.x + 2, target.y - 4, 2));
        game.update(&mut InputState::new());

        assert_eq!(game.aliens()[44].kind, AlienType::Dead);
        assert_eq!(game.aliens()[44].x, target.x - 2);
        assert_eq!(game.score(), 30);
    }

    #[test]
    fn score_never_decreases() {
        let mut game = Game::new();
        let mut input = InputState::new();
        input.move_direction = 1;
        let mut last = game.score();
        for frame in 0..2_000 {
            input.fire_pressed = frame % 20 == 0;
            game.update(&mut input);
            assert!(game.score() >= last);
            assert!(game.bullets().len() <= crate::entity::MAX_BULLETS);
            last = game.score();
        }
    }

    #[test]
    fn swarm_steps_after_update_frequency_ticks() {
        let mut game = Game::new();
        let start: Vec<Alien> = game.aliens().to_vec();
        let mut input = InputState::new();

        run(&mut game, &mut input, ALIEN_UPDATE_FREQUENCY);
        assert_eq!(game.aliens(), &start[..]);
        assert!(game.bullets().is_empty());

        game.update(&mut input);
        assert_eq!(game.swarm_position(), 28);
        for (moved, original) in game.aliens().iter().zip(&start) {
            assert_eq!(moved.x, original.x + 4);
            assert_eq!(moved.y, original.y);
        }

        // Every step drops one alien bullet.
        assert_eq!(game.bullets().len(), 1);
        let bullet = game.bullets().get(0).unwrap();
        assert_eq!(bullet.direction, -2);
    }

    #[test]
    fn swarm_drops_and_reverses_at_left_edge() {
        let mut game = Game::new();
        let start: Vec<Alien> = game.aliens().to_vec();
        game.swarm.position = 2;
        game.swarm.direction = -4;
        game.swarm.update_timer = game.swarm.update_frequency;
        game.update(&mut InputState::new());

        assert_eq!(game.swarm_direction(), 4);
        for (moved, original) in game.aliens().iter().zip(&start) {
            assert_eq!(moved.x, original.x);
            assert_eq!(moved.y, original.y - 8);
        }
    }

    #[test]
    fn swarm_reverses_at_right_edge_without_dropping() {
        let mut game = Game::new();
        let start: Vec<Alien> = game.aliens().to_vec();
        game.swarm.position = game.swarm.max_position;
        game.swarm.update_timer = game.swarm.update_frequency;
        game.update(&mut InputState::new());

        assert_eq!(game.swarm_direction(), -4);
        assert_eq!(game.aliens(), &start[..]);
    }

    #[test]
    fn swarm_bounds_shrink_as_columns_die() {
        let mut game = Game::new();
        let initial_max = game.swarm.max_position;
        assert_eq!(initial_max, 224 - 3 - (16 * 10 + 13));

        for row in 0..ALIEN_ROWS {
            game.aliens[row * ALIEN_COLUMNS].kind = AlienType::Dead;
        }
        game.update(&mut InputState::new());
        assert_eq!(game.swarm_position(), 24 + 16);
        assert_eq!(game.swarm.max_position, initial_max + 16);
    }

    #[test]
    fn fifteenth_kill_speeds_up_the_swarm() {
        let mut game = Game::new();
        game.swarm.kills = 14;
        let target = game.aliens()[5];
        game.bullets.push(Bullet::new(target.x + 2, target.y - 4, 2));
        game.update(&mut InputState::new());

        assert_eq!(game.kills(), 15);
        assert_eq!(game.swarm.update_frequency, ALIEN_UPDATE_FREQUENCY / 2);
        for animation in &game.alien_animations {
            assert_eq!(animation.frame_duration(), ALIEN_UPDATE_FREQUENCY / 2);
        }
    }

    #[test]
    fn death_counter_runs_down_then_alien_disappears() {
        let mut game = Game::new();
        game.aliens[0].kind = AlienType::Dead;
        let mut input = InputState::new();
        run(&mut game, &mut input, 5);
        assert_eq!(game.death_counters[0], 5);
        run(&mut game, &mut input, 10);
        assert_eq!(game.death_counters[0], 0);
        assert_eq!(game.death_counters[1], DEATH_COUNTER_START);
    }

    #[test]
    fn clearing_the_wave_restores_the_starting_layout() {
        let fresh = Game::new();
        let mut game = Game::new();
        let mut input = InputState::new();
        input.move_direction = 1;
        run(&mut game, &mut input, 300);

        for alien in &mut game.aliens {
            alien.kind = AlienType::Dead;
        }
        game.swarm.kills = NUM_ALIENS;
        game.update(&mut InputState::new());

        assert_eq!(game.kills(), 0);
        assert_eq!(game.swarm_direction(), 4);
        assert_eq!(game.swarm_position(), 24);
        assert_eq!(game.swarm.update_timer, 0);
        assert_eq!(game.swarm.update_frequency, ALIEN_UPDATE_FREQUENCY);
        assert_eq!(game.aliens(), fresh.aliens());
        assert_eq!(game.death_counters, fresh.death_counters);
    }

    #[test]
    fn player_is_clamped_to_the_playfield() {
        let mut game = Game::new();
        let mut input = InputState::new();
        input.move_direction = -1;
        run(&mut game, &mut input, 100);
        assert_eq!(game.player().x, 0);

        input.move_direction = 1;
        run(&mut game, &mut input, 200);
        assert_eq!(game.player().x, 224 - 11);
    }

    #[test]
    fn bullets_leaving_the_playfield_are_removed() {
        let mut game = Game::new();
        game.bullets.push(Bullet::new(10, 254, 2));
        game.bullets.push(Bullet::new(10, 4, -2));
        game.update(&mut InputState::new());
        assert!(game.bullets().is_empty());
    }

    #[test]
    fn fire_is_dropped_when_the_pool_is_full() {
        let mut game = Game::new();
        // Two rows of 3px bullets packed edge to edge, so none overlap.
        for i in 0..crate::entity::MAX_BULLETS as i32 {
            assert!(game.bullets.push(Bullet::new(3 * (i % 64), 60 + 40 * (i / 64), 2)));
        }
        let mut input = InputState::new();
        input.fire_pressed = true;
        game.update(&mut input);

        assert!(!input.fire_pressed);
        assert_eq!(game.bullets().len(), crate::entity::MAX_BULLETS);
        assert!(game.bullets().iter().all(|bullet| bullet.y != 39));
    }

    #[test]
    fn player_bullet_cancels_alien_bullet() {
        let mut game = Game::new();
        game.bullets.push(Bullet::new(50, 100, -2));
        game.bullets.push(Bullet::new(50, 94, 2));
        game.update(&mut InputState::new());

        assert!(game.bullets().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn overlapping_player_bullets_cancel_each_other() {
        let mut game = Game::new();
        game.bullets.push(Bullet::new(50, 100, 2));
        game.bullets.push(Bullet::new(50, 102, 2));
        game.update(&mut InputState::new());

        assert!(game.bullets().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn alien_bullet_hit_stops_the_bullet_pass() {
        let mut game = Game::new();
        game.bullets.push(Bullet::new(110, 36, -2));
        game.bullets.push(Bullet::new(112, 36, -2));
        game.update(&mut InputState::new());

        assert_eq!(game.player().lives, 2);
        assert_eq!(game.bullets().len(), 1);
    }

    #[test]
    fn losing_the_last_life_freezes_the_game() {
        let mut game = Game::new();
        game.player.lives = 1;
        game.bullets.push(Bullet::new(110, 36, -2));
        game.bullets.push(Bullet::new(50, 200, -2));
        let mut input = InputState::new();
        game.update(&mut input);
        assert_eq!(game.state(), GameState::GameOver);

        let aliens = game.aliens().to_vec();
        let bullets = game.bullets().as_slice().to_vec();
        let player = *game.player();
        input.move_direction = 1;
        input.fire_pressed = true;
        run(&mut game, &mut input, 200);

        assert_eq!(game.aliens(), &aliens[..]);
        assert_eq!(game.bullets().as_slice(), &bullets[..]);
        assert_eq!(*game.player(), player);
    }

    #[test]
    fn fatal_hit_still_finishes_the_frame() {
        let mut game = Game::new();
        game.player.lives = 1;
        game.bullets.push(Bullet::new(110, 36, -2));
        let player = *game.player();
        let mut input = InputState::new();
        input.move_direction = 1;
        input.fire_pressed = true;
        game.update(&mut input);

        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.player().x, player.x + 2);
        assert_eq!(game.swarm.update_timer, 1);
        assert!(!input.fire_pressed);
        assert_eq!(
            game.bullets().as_slice(),
            &[Bullet::new(player.x + 2 + 5, player.y + 7, 2)]
        );
    }

    #[test]
    fn swarm_tick_with_no_live_aliens_resets_the_wave() {
        let fresh = Game::new();
        let mut game = Game::new();
        for alien in &mut game.aliens {
            alien.kind = AlienType::Dead;
        }
        game.swarm.kills = NUM_ALIENS;
        game.swarm.update_timer = game.swarm.update_frequency;
        game.update(&mut InputState::new());

        assert!(game.bullets().is_empty());
        assert_eq!(game.kills(), 0);
        assert_eq!(game.swarm.update_timer, 0);
        assert_eq!(game.aliens(), fresh.aliens());
    }

    #[test]
    fn running_frame_draws_hud_and_player() {
        let game = Game::new();
        let mut buffer = PixelBuffer::new(WIDTH, HEIGHT);
        game.render(&mut buffer);

        for x in 0..WIDTH as i32 {
            assert_eq!(buffer.get_pixel(x, HUD_DIVIDER_ROW), Some(colors::FOREGROUND));
        }
        // Tip of the ship's cannon.
        assert_eq!(buffer.get_pixel(112, 38), Some(colors::FOREGROUND));
        assert_eq!(buffer.get_pixel(112, 100), Some(colors::BACKGROUND));
    }

    #[test]
    fn game_over_frame_draws_only_text() {
        let mut game = Game::new();
        game.player.lives = 0;
        let mut buffer = PixelBuffer::new(WIDTH, HEIGHT);
        game.render(&mut buffer);

        assert_eq!(buffer.get_pixel(0, HUD_DIVIDER_ROW), Some(colors::BACKGROUND));
        assert_eq!(buffer.get_pixel(112, 38), Some(colors::BACKGROUND));
        let ink = buffer
            .pixels()
            .iter()
            .filter(|&&p| p == colors::FOREGROUND)
            .count();
        assert!(ink > 0);
    }
}
