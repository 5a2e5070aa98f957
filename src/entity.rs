//! Simulation entities.
//!
//! Positions are signed buffer pixels (row 0 = bottom of the playfield) so
//! that drifting past an edge produces a coordinate the renderer can reject
//! instead of an unsigned wrap-around.

use crate::render::Sprite;
use crate::sprites;

/// Maximum number of bullets alive at once, player and alien combined.
pub const MAX_BULLETS: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlienType {
    /// Exploded. Shows the death sprite until its counter runs out.
    #[default]
    Dead = 0,
    A = 1,
    B = 2,
    C = 3,
}

impl AlienType {
    /// Type for a swarm row, counted from the bottom: rows 0-1 are C,
    /// rows 2-3 are B, row 4 is A.
    pub fn for_row(row: usize) -> Self {
        match (5usize.saturating_sub(row)) / 2 + 1 {
            3 => AlienType::C,
            2 => AlienType::B,
            _ => AlienType::A,
        }
    }

    pub fn is_dead(self) -> bool {
        self == AlienType::Dead
    }

    /// Score for destroying an alien of this type: `10 * (4 - type)`.
    pub fn points(self) -> usize {
        match self {
            AlienType::Dead => 0,
            live => 10 * (4 - live as usize),
        }
    }

    /// Index into the per-type animation tables, `None` for dead aliens.
    pub fn animation_index(self) -> Option<usize> {
        match self {
            AlienType::Dead => None,
            live => Some(live as usize - 1),
        }
    }

    /// First animation frame for this type.
    pub fn sprite(self) -> Option<Sprite<'static>> {
        self.animation_index()
            .and_then(|i| sprites::ALIENS[i].frame(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub kind: AlienType,
}

impl Alien {
    pub fn new(x: i32, y: i32, kind: AlienType) -> Self {
        Self { x, y, kind }
    }

    pub fn is_dead(&self) -> bool {
        self.kind.is_dead()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Vertical speed; positive travels up (player), negative down (alien).
    pub direction: i32,
}

impl Bullet {
    pub fn new(x: i32, y: i32, direction: i32) -> Self {
        Self { x, y, direction }
    }

    pub fn is_player_bullet(&self) -> bool {
        self.direction > 0
    }

    pub fn sprite(&self) -> Sprite<'static> {
        if self.is_player_bullet() {
            sprites::PLAYER_BULLET
        } else {
            // Hit boxes use the first frame; both frames share a size.
            sprites::ALIEN_BULLET.frame(0).unwrap_or(sprites::PLAYER_BULLET)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: usize,
}

impl Player {
    pub fn new(x: i32, y: i32, lives: usize) -> Self {
        Self { x, y, lives }
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

/// Fixed-capacity, unordered bullet storage.
///
/// Removal swaps the last live bullet into the freed slot, so it is O(1) but
/// does not preserve order.
#[derive(Debug, Clone)]
pub struct BulletPool {
    bullets: [Bullet; MAX_BULLETS],
    len: usize,
}

impl Default for BulletPool {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletPool {
    pub fn new() -> Self {
        Self {
            bullets: [Bullet::new(0, 0, 0); MAX_BULLETS],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == MAX_BULLETS
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Add a bullet. Returns `false` (and drops the bullet) when full.
    pub fn push(&mut self, bullet: Bullet) -> bool {
        if self.is_full() {
            return false;
        }
        self.bullets[self.len] = bullet;
        self.len += 1;
        true
    }

    pub fn get(&self, index: usize) -> Option<&Bullet> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bullet> {
        self.bullets[..self.len].get_mut(index)
    }

    pub fn as_slice(&self) -> &[Bullet] {
        &self.bullets[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.as_slice().iter()
    }

    /// Remove the bullet at `index`, moving the last bullet into its slot.
    pub fn swap_remove(&mut self, index: usize) -> Option<Bullet> {
        if index >= self.len {
            return None;
        }
        let removed = self.bullets[index];
        self.bullets[index] = self.bullets[self.len - 1];
        self.len -= 1;
        Some(removed)
    }

    /// Remove two distinct bullets. The higher index goes first so the
    /// lower one is still where the caller saw it.
    pub fn swap_remove_pair(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.len || b >= self.len {
            return false;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        self.swap_remove(high);
        self.swap_remove(low);
        true
    }
}
