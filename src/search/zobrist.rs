use crate::board::{Board, Cell, SIZE};
use std::sync::OnceLock;

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

const CELLS: usize = SIZE * SIZE;

static TABLE: OnceLock<[u64; 2 * CELLS]> = OnceLock::new();

fn init_table() -> &'static [u64; 2 * CELLS] {
    TABLE.get_or_init(|| {
        let mut t = [0u64; 2 * CELLS];
        let mut seed = 0x0A0A_F00D_5EED_0000;
        for v in &mut t {
            seed = splitmix64(seed);
            *v = seed;
        }
        t
    })
}

/// Position key: XOR of one table entry per marked cell. Side to move is
/// implied by the mark counts, so it carries no separate key.
pub fn compute(board: &Board) -> u64 {
    let table = init_table();
    let mut key = 0u64;
    for (mv, cell) in board.cells() {
        if let Cell::Mark(side) = cell {
            key ^= table[side.index() * CELLS + mv.row * SIZE + mv.col];
        }
    }
    key
}
