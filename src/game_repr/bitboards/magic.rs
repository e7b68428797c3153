//! Magic bitboard lookups for sliding pieces.
//!
//! For every square we keep the relevant blocker mask (the piece's rays with
//! the board edge removed), a multiplier found by seeded trial and error, and
//! a slice of a shared attack vector. A lookup is
//! `attacks[offset + ((occupied & mask) * magic) >> shift]`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAGIC_SEED: u64 = 0x6d61_6769_635f_6262;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl MagicEntry {
    #[inline(always)]
    fn index(&self, occupied: u64) -> usize {
        ((occupied & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

pub struct MagicTable {
    entries: [MagicEntry; 64],
    attacks: Vec<u64>,
}

impl MagicTable {
    /// Find magics for all 64 squares and fill the attack vector.
    pub fn build(slider: Slider) -> Self {
        let mut rng = StdRng::seed_from_u64(MAGIC_SEED ^ slider as u64);
        let mut entries = [MagicEntry::default(); 64];
        let mut attacks = Vec::new();

        for (square, entry) in entries.iter_mut().enumerate() {
            let mask = relevant_mask(slider, square);
            let bits = mask.count_ones();
            let size = 1usize << bits;

            let (blockers, reference): (Vec<u64>, Vec<u64>) = subsets(mask)
                .map(|occ| (occ, sliding_attacks(slider, square, occ)))
                .unzip();

            let shift = 64 - bits;
            let table = loop {
                let magic = sparse_random(&mut rng);
                if (mask.wrapping_mul(magic) & 0xFF00_0000_0000_0000).count_ones() < 6 {
                    continue;
                }
                let candidate = MagicEntry { mask, magic, shift, offset: 0 };
                if let Some(table) = try_fill(&candidate, &blockers, &reference, size) {
                    *entry = MagicEntry { offset: attacks.len(), ..candidate };
                    break table;
                }
            };
            attacks.extend(table);
        }

        Self { entries, attacks }
    }

    #[inline(always)]
    pub fn attacks(&self, square: usize, occupied: u64) -> u64 {
        let entry = &self.entries[square];
        self.attacks[entry.offset + entry.index(occupied)]
    }

    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

/// Place every blocker subset into a fresh table; `None` on a destructive
/// collision. Two subsets sharing a slot is fine when their attacks agree.
fn try_fill(
    entry: &MagicEntry,
    blockers: &[u64],
    reference: &[u64],
    size: usize,
) -> Option<Vec<u64>> {
    let mut table = vec![0u64; size];
    let mut used = vec![false; size];
    for (&occ, &att) in blockers.iter().zip(reference) {
        let idx = entry.index(occ);
        if !used[idx] {
            used[idx] = true;
            table[idx] = att;
        } else if table[idx] != att {
            return None;
        }
    }
    Some(table)
}

fn sparse_random(rng: &mut StdRng) -> u64 {
    rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>()
}

/// Squares whose occupancy can change the attack set: each ray minus its
/// final edge square.
pub fn relevant_mask(slider: Slider, square: usize) -> u64 {
    let rank = (square / 8) as i8;
    let file = (square % 8) as i8;
    let mut mask = 0u64;

    for (dr, df) in slider.directions() {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&(r + dr)) && (0..8).contains(&(f + df)) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Ray walk used to seed the tables (and to check them in tests).
pub fn sliding_attacks(slider: Slider, square: usize, occupied: u64) -> u64 {
    let rank = (square / 8) as i8;
    let file = (square % 8) as i8;
    let mut attacks = 0u64;

    for (dr, df) in slider.directions() {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let target = 1u64 << (r * 8 + f);
            attacks |= target;
            if occupied & target != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// All subsets of `mask`, empty set first (carry-rippler enumeration).
fn subsets(mask: u64) -> impl Iterator<Item = u64> {
    let mut next = Some(0u64);
    std::iter::from_fn(move || {
        let current = next?;
        let following = current.wrapping_sub(mask) & mask;
        next = if following == 0 { None } else { Some(following) };
        Some(current)
    })
}
