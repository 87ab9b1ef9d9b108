// 手牌評価の不変条件をランダムな手牌で検証

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use mahjong_hand::hand::*;
use mahjong_hand::model::*;
use mahjong_hand::util::multiset::count;

// 136枚の山から先頭n枚
fn deal(seed: u64, n: usize) -> Vec<Tile> {
    let mut wall: Vec<Tile> = Tile::all().into_iter().flat_map(|t| [t; TILE]).collect();
    wall.shuffle(&mut StdRng::seed_from_u64(seed));
    wall.truncate(n);
    wall
}

// (面子の種類, 牌のインデックス)から4面子1雀頭の手牌を作成
// 5枚以上使う牌がある場合はNone
fn build_complete(sets: &[(bool, usize)], head: usize) -> Option<Vec<Tile>> {
    let all = Tile::all();
    let mut hand = vec![all[head % all.len()]; 2];
    for &(is_run, i) in sets {
        if is_run {
            let suit = SIMPLE_SUITS[i % 3];
            let rank = i % 7 + 1;
            for r in rank..rank + 3 {
                hand.push(Tile::simple(suit, r).ok()?);
            }
        } else {
            hand.extend([all[i % all.len()]; 3]);
        }
    }
    if hand.iter().any(|t| count(&hand, t) > TILE) {
        return None;
    }
    hand.sort();
    Some(hand)
}

fn sets_strategy() -> impl Strategy<Value = Vec<(bool, usize)>> {
    prop::collection::vec((any::<bool>(), 0usize..1000), SETS)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn shanten_never_increases_with_extra_tile(seed in 0u64..1_000_000) {
        let calc = ShantenCalculator::new();
        let tiles = deal(seed, 14);
        let s13 = calc.calc_shanten(&tiles[..13]);
        let s14 = calc.calc_shanten(&tiles);
        prop_assert!(s14 <= s13, "{:?}: {} -> {}", tiles, s13, s14);
        prop_assert!((TENPAI..=6).contains(&s13));
    }

    #[test]
    fn decompositions_cover_hand_exactly(seed in 0u64..1_000_000, n in 13usize..=14) {
        let mut tiles = deal(seed, n);
        tiles.sort();
        for d in decompose(&tiles) {
            prop_assert_eq!(d.tiles(), tiles.clone());
            prop_assert!(d.partial.len() <= 2);
        }
    }

    #[test]
    fn constructed_hand_is_win(sets in sets_strategy(), head in 0usize..34) {
        let hand = build_complete(&sets, head);
        prop_assume!(hand.is_some());
        let hand = hand.unwrap_or_default();

        let calc = ShantenCalculator::new();
        prop_assert_eq!(calc.calc_shanten(&hand), WIN);
        let ds = decompose(&hand);
        prop_assert!(!ds.is_empty());
        for d in &ds {
            prop_assert!(d.partial.is_empty());
            prop_assert_eq!(d.completed.len(), SETS + 1);
        }

        // 1枚抜いた手牌は聴牌でその牌で和了できる
        let rest = hand[1..].to_vec();
        prop_assert!(calc.is_tenpai(&rest));
        prop_assert!(winning_tiles(&calc, &rest).contains(&hand[0]));
    }

    #[test]
    fn best_score_covers_every_candidate(
        sets in sets_strategy(),
        head in 0usize..34,
        win in 0usize..14,
        is_tsumo in any::<bool>(),
    ) {
        let hand = build_complete(&sets, head);
        prop_assume!(hand.is_some());
        let hand = hand.unwrap_or_default();

        let method = if is_tsumo { WinMethod::Tsumo } else { WinMethod::Ron };
        let ctx = HandContext::new(hand[win], method);
        let calc = ShantenCalculator::new();
        let best = score_win(&calc, &hand, &ctx);

        for d in decompose(&hand) {
            let res = score_decomposition(&hand, Some(&d.completed), &ctx);
            prop_assert!(best.total_points >= res.total_points);
        }
        let res = score_decomposition(&hand, None, &ctx);
        prop_assert!(best.total_points >= res.total_points);
        prop_assert_eq!(
            best.total_points,
            best.roles.iter().map(|r| r.points).sum::<usize>()
        );
    }
}

#[test]
fn scattered_hand_is_far_from_win() {
    let hand = mahjong_hand::util::parse::tiles_from_string("m147p258s369z1234").unwrap();
    assert_eq!(hand.len(), 13);
    let calc = ShantenCalculator::new();
    assert!(calc.standard_shanten(&hand) > 0);
    assert!(seven_pairs_shanten(&hand) > 0);
    assert!(thirteen_orphans_shanten(&hand) > 0);
    assert!(calc.calc_shanten(&hand) > 0);
}

#[test]
fn shared_memo_between_calculators() {
    let calc = ShantenCalculator::new();
    for seed in 0..20 {
        calc.calc_shanten(&deal(seed, 13));
    }
    let entries = calc.memo().entries();
    assert!(!entries.is_empty());

    let other = ShantenCalculator::new();
    assert_eq!(other.import_memo(entries.clone()), entries.len());
    for seed in 0..20 {
        let hand = deal(seed, 13);
        assert_eq!(other.calc_shanten(&hand), calc.calc_shanten(&hand));
    }
    assert_eq!(other.memo().len(), entries.len());
}
