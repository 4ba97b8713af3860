// render.rs - Encode flakes for the canvas driver
//
// Output layout, one triplet per flake in population order:
//   [x, y, side]   all truncated toward zero
// where (x, y) is the sprite's top-left corner and side = size / depth.

use crate::sim::Snowflake;

pub const STRIDE: usize = 3;

pub struct SpriteEncoder {
    out: Vec<i32>,
}

impl SpriteEncoder {
    pub fn new(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity * STRIDE),
        }
    }

    pub fn clear(&mut self) {
        self.out.clear();
    }

    pub fn ptr(&self) -> *const i32 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.out
    }

    /// Re-encode the whole population
    pub fn encode_flakes(&mut self, flakes: &[Snowflake]) {
        self.out.clear();
        for flake in flakes {
            self.out.push(flake.position.x as i32);
            self.out.push(flake.position.y as i32);
            self.out.push(flake.render_side() as i32);
        }
    }
}
