use crate::model::*;
use crate::util::multiset::{count, subtract, unique};

use SetPairType::*;

// [手牌の分解]
// 14枚(3n+2)の手牌は雀頭 + 面子, 13枚(3n+1)の手牌は面子候補(0~2枚の未完成部分) + 面子(+ 雀頭)に分解する
// それ以外の枚数の場合は空のリストを返却
pub fn decompose(hand: &[Tile]) -> Vec<Decomposition> {
    let mut tiles = hand.to_vec();
    tiles.sort();

    match tiles.len() % 3 {
        2 => divide_with_head(&tiles)
            .into_iter()
            .map(|completed| Decomposition {
                partial: vec![],
                completed,
            })
            .collect(),
        1 => divide_with_partial(&tiles),
        _ => vec![],
    }
}

// 雀頭を1つ抜いた残りを面子に分解. 雀頭候補は重複を除いた牌種ごとに試行
fn divide_with_head(tiles: &[Tile]) -> Vec<SetsComposition> {
    let mut res = vec![];
    for t in unique(tiles) {
        if count(tiles, &t) < 2 {
            continue;
        }
        let rest = subtract(tiles, &[t, t]);
        for sets in divide_into_sets(&rest) {
            let mut sc = SetsComposition::new();
            sc.push(SetPair(Pair, t));
            sc.sets.extend(sets);
            res.push(sc);
        }
    }
    res
}

// 面子候補(単騎, 対子, 両面/辺張, 嵌張)を抜いた残りを分解
// 単騎の場合は残りが面子のみ, それ以外は残りに雀頭がちょうど1つ含まれる
fn divide_with_partial(tiles: &[Tile]) -> Vec<Decomposition> {
    let mut res = vec![];
    for t in unique(tiles) {
        // 単騎
        let rest = subtract(tiles, &[t]);
        for sets in divide_into_sets(&rest) {
            res.push(Decomposition {
                partial: vec![t],
                completed: SetsComposition { sets },
            });
        }

        for partial in partial_shapes(tiles, t) {
            let rest = subtract(tiles, &partial);
            for completed in divide_with_head(&rest) {
                res.push(Decomposition {
                    partial: partial.clone(),
                    completed,
                });
            }
        }
    }
    res
}

// tを先頭とする2枚の面子候補のうち手牌に含まれるもの
fn partial_shapes(tiles: &[Tile], t: Tile) -> Vec<Vec<Tile>> {
    let mut res = vec![];
    if count(tiles, &t) >= 2 {
        res.push(vec![t, t]); // 対子
    }
    if let Some(t1) = t.next_in_run() {
        if tiles.contains(&t1) {
            res.push(vec![t, t1]); // 両面, 辺張
        }
        if let Some(t2) = t1.next_in_run() {
            if tiles.contains(&t2) {
                res.push(vec![t, t2]); // 嵌張
            }
        }
    }
    res
}

// 整列済みの牌を刻子と順子のみに分解する全パターン
// 最小の牌を含む面子を順に取り除いていくので同じ分解が重複することはない
// 空の場合は分解可能とみなし[[]]を返却
fn divide_into_sets(tiles: &[Tile]) -> Vec<Vec<SetPair>> {
    let first = match tiles.first() {
        Some(&t) => t,
        None => return vec![vec![]],
    };

    let mut res = vec![];

    // 刻子
    if count(tiles, &first) >= 3 {
        let rest = subtract(tiles, &[first, first, first]);
        for mut sets in divide_into_sets(&rest) {
            sets.insert(0, SetPair(Triple, first));
            res.push(sets);
        }
    }

    // 順子
    if let Some(t1) = first.next_in_run() {
        if let Some(t2) = t1.next_in_run() {
            if tiles.contains(&t1) && tiles.contains(&t2) {
                let rest = subtract(tiles, &[first, t1, t2]);
                for mut sets in divide_into_sets(&rest) {
                    sets.insert(0, SetPair(Run, first));
                    res.push(sets);
                }
            }
        }
    }

    res
}

#[cfg(test)]
fn hand(exp: &str) -> Vec<Tile> {
    crate::util::parse::tiles_from_string(exp).unwrap()
}

#[cfg(test)]
fn sorted(mut v: Vec<Tile>) -> Vec<Tile> {
    v.sort();
    v
}

#[test]
fn test_decompose_complete() {
    let h = hand("m12345666777888");
    let ds = decompose(&h);
    assert_eq!(ds.len(), 1);
    assert!(ds[0].partial.is_empty());
    assert_eq!(
        ds[0].completed.to_string(),
        "(m6m6) (m1m2m3) (m4m5m6) (m7m7m7) (m8m8m8)"
    );
    assert_eq!(ds[0].tiles(), sorted(h));
}

#[test]
fn test_decompose_multiple() {
    // 三連刻は刻子3つと順子3つの2通り
    let ds = decompose(&hand("m111222333p789s55"));
    assert_eq!(ds.len(), 2);
    let ss: Vec<String> = ds.iter().map(|d| d.completed.to_string()).collect();
    assert!(ss.contains(&"(s5s5) (m1m2m3) (m1m2m3) (m1m2m3) (p7p8p9)".to_string()));
    assert!(ss.contains(&"(s5s5) (p7p8p9) (m1m1m1) (m2m2m2) (m3m3m3)".to_string()));

    // 雀頭の位置が異なる分解
    let ds = decompose(&hand("m11223344p123s789"));
    assert_eq!(ds.len(), 2);
    for d in &ds {
        assert_eq!(d.completed.heads().len(), 1);
    }
}

#[test]
fn test_decompose_none() {
    assert!(decompose(&hand("m1133p2244s6688z11")).is_empty());
    assert!(decompose(&hand("m19p19s19z12345671")).is_empty());
    // 3の倍数
    assert!(decompose(&hand("m123456789")).is_empty());
    assert!(decompose(&[]).is_empty());
}

#[test]
fn test_decompose_partial() {
    let h = hand("m1234566677788");
    let ds = decompose(&h);
    assert!(!ds.is_empty());
    for d in &ds {
        assert!(d.partial.len() == 1 || d.partial.len() == 2);
        assert_eq!(d.tiles(), sorted(h.clone()));
        let heads = d.completed.heads().len();
        if d.partial.len() == 1 {
            assert_eq!(heads, 0);
        } else {
            assert_eq!(heads, 1);
        }
    }
    // 嵌張待ち (m6m8 + 雀頭m77) は見つかる
    assert!(ds
        .iter()
        .any(|d| d.partial == hand("m68") && d.completed.head() == hand("m7").first().copied()));
}

#[test]
fn test_decompose_tanki() {
    // 単騎待ち
    let ds = decompose(&hand("m123p456s789z1112"));
    assert!(ds.iter().any(|d| d.partial == vec![Tile::SOUTH]));
    let ds = decompose(&hand("m123p456s789z111z5"));
    assert_eq!(ds.len(), 1);
    assert_eq!(ds[0].partial, vec![Tile::WHITE]);
    assert!(ds[0].completed.heads().is_empty());
}
