use super::shanten::ShantenCalculator;
use crate::model::*;
use crate::util::multiset::count;

// [有効牌]

// 聴牌している13枚の手牌の和了牌 (聴牌でない場合や13枚でない場合は空)
pub fn winning_tiles(calc: &ShantenCalculator, hand: &[Tile]) -> Vec<Tile> {
    if hand.len() != 13 || calc.calc_shanten(hand) != TENPAI {
        return vec![];
    }
    scan_tiles(calc, hand, TENPAI)
}

// 追加すると向聴数が下がる牌 (向聴数は問わない)
pub fn effective_tiles(calc: &ShantenCalculator, hand: &[Tile]) -> Vec<Tile> {
    if hand.len() % 3 != 1 {
        return vec![];
    }
    scan_tiles(calc, hand, calc.calc_shanten(hand))
}

// 有効牌とその残り枚数 (手牌以外の見えている牌は考慮しない)
pub fn effective_tile_counts(calc: &ShantenCalculator, hand: &[Tile]) -> Vec<(Tile, usize)> {
    effective_tiles(calc, hand)
        .into_iter()
        .map(|t| (t, TILE - count(hand, &t)))
        .collect()
}

// 34種の牌それぞれについて手牌に追加した場合の向聴数を確認
// 4枚使いの牌は追加できないので除外
fn scan_tiles(calc: &ShantenCalculator, hand: &[Tile], base: Shanten) -> Vec<Tile> {
    let mut res = vec![];
    let mut h = hand.to_vec();
    for t in Tile::all() {
        if count(hand, &t) >= TILE {
            continue;
        }
        h.push(t);
        if calc.calc_shanten(&h) < base {
            res.push(t);
        }
        h.pop();
    }
    res
}

#[cfg(test)]
fn hand(exp: &str) -> Vec<Tile> {
    crate::util::parse::tiles_from_string(exp).unwrap()
}

#[test]
fn test_winning_tiles() {
    let calc = ShantenCalculator::new();
    assert_eq!(
        winning_tiles(&calc, &hand("m1234566677788")),
        hand("m134678")
    );
    // 七対子
    assert_eq!(
        winning_tiles(&calc, &hand("m1133p2244s6688z1")),
        vec![Tile::EAST]
    );
    // 国士無双13面待ち
    assert_eq!(
        winning_tiles(&calc, &hand("m19p19s19z1234567")),
        Tile::terminals_and_honors()
    );
}

#[test]
fn test_winning_tiles_empty() {
    let calc = ShantenCalculator::new();
    // 2向聴
    assert!(winning_tiles(&calc, &hand("m123p456s789z1234")).is_empty());
    // 14枚
    assert!(winning_tiles(&calc, &hand("m12345666777888")).is_empty());
    // 字牌の4枚使いは待ちにならない
    assert!(winning_tiles(&calc, &hand("m123p456s789z1111")).is_empty());
}

#[test]
fn test_effective_tiles() {
    let calc = ShantenCalculator::new();
    let h = hand("m123p456s789z1234");
    let ts = effective_tiles(&calc, &h);
    assert_eq!(ts, vec![Tile::EAST, Tile::SOUTH, Tile::WEST, Tile::NORTH]);

    let counts = effective_tile_counts(&calc, &h);
    assert_eq!(counts.len(), 4);
    assert!(counts.iter().all(|&(_, n)| n == 3));

    assert_eq!(
        effective_tiles(&calc, &hand("m1234566677788")),
        winning_tiles(&calc, &hand("m1234566677788"))
    );
    assert!(!effective_tiles(&calc, &hand("m1")).is_empty());
    assert!(effective_tiles(&calc, &hand("m123")).is_empty());
}
