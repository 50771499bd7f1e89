use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use moverange_core::{Direction, Point, Range, Tile, TileMap};
use moverange_reach::{MoveRange, reachable};
use proptest::prelude::*;

/// A random rectangular board plus a start inside it.
fn board() -> impl Strategy<Value = (TileMap, Point)> {
    (1i32..8, 1i32..8).prop_flat_map(|(w, h)| {
        let n = (w * h) as usize;
        let tile = prop_oneof![
            6 => (0u32..4).prop_map(Tile::new),
            1 => Just(Tile::impassable()),
        ];
        (
            prop::collection::vec(tile, n),
            0..w,
            0..h,
        )
            .prop_map(move |(tiles, sx, sy)| {
                let map: TileMap = Range::new(0, 0, w, h).iter().zip(tiles).collect();
                (map, Point::new(sx, sy))
            })
    })
}

/// Cheapest entry cost from `start` to every passable cell, never moving on
/// from a cell once its cost has used up the whole budget.
fn cheapest_costs(map: &TileMap, start: Point, budget: u32) -> HashMap<Point, u32> {
    let mut dist = HashMap::new();
    let mut open = BinaryHeap::new();
    dist.insert(start, 0u32);
    open.push(Reverse((0u32, start)));
    while let Some(Reverse((d, p))) = open.pop() {
        if dist.get(&p).is_some_and(|&best| d > best) {
            continue;
        }
        if d >= budget {
            continue;
        }
        for np in Direction::ALL.iter().filter_map(|&dir| p.step(dir)) {
            let Some(tile) = map.get(np) else { continue };
            if tile.impassable {
                continue;
            }
            let nd = d + tile.movement_cost;
            if dist.get(&np).is_none_or(|&best| nd < best) {
                dist.insert(np, nd);
                open.push(Reverse((nd, np)));
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn zero_budget_is_start_only((map, start) in board()) {
        let pts = reachable(&map, start, 0).unwrap();
        prop_assert_eq!(pts, vec![start]);
    }

    #[test]
    fn start_first_and_no_duplicates((map, start) in board(), budget in 0i32..10) {
        let pts = reachable(&map, start, budget).unwrap();
        prop_assert_eq!(pts.first().copied(), Some(start));
        let unique: HashSet<Point> = pts.iter().copied().collect();
        prop_assert_eq!(unique.len(), pts.len());
    }

    #[test]
    fn never_enters_impassable((map, start) in board(), budget in 0i32..10) {
        let pts = reachable(&map, start, budget).unwrap();
        for p in pts.iter().skip(1) {
            prop_assert!(map.get(*p).is_some_and(|t| t.is_passable()), "entered {}", p);
        }
    }

    #[test]
    fn matches_cheapest_path_oracle((map, start) in board(), budget in 0i32..10) {
        let mut mr = MoveRange::new();
        let got: HashSet<Point> = mr.reachable(&map, start, budget).unwrap().iter().copied().collect();
        let costs = cheapest_costs(&map, start, budget as u32);
        let want: HashSet<Point> = costs
            .iter()
            .filter(|&(_, &c)| c <= budget as u32)
            .map(|(p, _)| *p)
            .collect();
        prop_assert_eq!(&got, &want);
        for p in &got {
            prop_assert_eq!(mr.cost_to(*p), costs.get(p).copied());
        }
    }

    #[test]
    fn monotone_in_budget((map, start) in board(), budget in 0i32..9) {
        let small: HashSet<Point> = reachable(&map, start, budget).unwrap().into_iter().collect();
        let large: HashSet<Point> = reachable(&map, start, budget + 1).unwrap().into_iter().collect();
        prop_assert!(small.is_subset(&large));
    }

    #[test]
    fn reused_range_is_idempotent((map, start) in board(), budget in 0i32..10) {
        let mut mr = MoveRange::new();
        let first = mr.reachable(&map, start, budget).unwrap().to_vec();
        let second = mr.reachable(&map, start, budget).unwrap().to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn map_is_never_modified((map, start) in board(), budget in 0i32..10) {
        let before = map.clone();
        let _ = reachable(&map, start, budget).unwrap();
        prop_assert_eq!(before, map);
    }
}
