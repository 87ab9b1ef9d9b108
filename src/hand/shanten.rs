use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::RwLock;

use crate::debug;
use crate::model::*;
use crate::util::multiset::{contains_all, count, subtract, unique};

// [向聴数計算]

pub type ReadyPoint = (usize, usize); // (完成面子数, 面子候補数)

// 牌種ごとの数字列 -> ReadyPointのメモ
// キーは昇順に並べた数字を空白区切りで連結した文字列 (例: "1 1 2 3")
// 同じキーに対する値は常に同じなので,競合して再計算・上書きされても問題ない
#[derive(Debug, Default)]
pub struct ShantenMemo {
    table: RwLock<HashMap<String, ReadyPoint>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoError {
    pub line: usize,
    pub text: String,
}

impl fmt::Display for MemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid memo record at line {}: '{}'", self.line, self.text)
    }
}

impl std::error::Error for MemoError {}

impl ShantenMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn get(&self, key: &str) -> Option<ReadyPoint> {
        self.read().get(key).copied()
    }

    pub fn insert(&self, key: String, rp: ReadyPoint) {
        self.write().insert(key, rp);
    }

    // 外部で計算済みのテーブルを一括登録. 登録後の件数を返却
    pub fn import<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (String, ReadyPoint)>,
    {
        let mut table = self.write();
        let mut n = 0;
        for (k, v) in entries {
            table.insert(k, v);
            n += 1;
        }
        debug!("memo imported {} entries (total: {})", n, table.len());
        table.len()
    }

    // キー順に整列したエントリのリスト
    pub fn entries(&self) -> Vec<(String, ReadyPoint)> {
        let table = self.read();
        let sorted: BTreeMap<&String, &ReadyPoint> = table.iter().collect();
        sorted.into_iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    // "KEY&完成面子数,面子候補数" 形式の行を解析
    // KEYは数値順に並べたもの(memo_key). 文字列順のKEY("1 11 4"など)も読み込めるが一致しないので再計算になる
    pub fn parse_table(text: &str) -> Result<Vec<(String, ReadyPoint)>, MemoError> {
        let mut res = vec![];
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let err = || MemoError {
                line: i + 1,
                text: line.to_string(),
            };
            let (key, value) = line.split_once('&').ok_or_else(err)?;
            let (s, t) = value.trim().split_once(',').ok_or_else(err)?;
            let s = s.trim().parse::<usize>().map_err(|_| err())?;
            let t = t.trim().parse::<usize>().map_err(|_| err())?;
            res.push((key.to_string(), (s, t)));
        }
        Ok(res)
    }

    pub fn dump_table(&self) -> String {
        let mut res = String::new();
        for (k, (s, t)) in self.entries() {
            res += &format!("{}&{},{}\n", k, s, t);
        }
        res
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let table = self.read();
        let sorted: BTreeMap<&String, &ReadyPoint> = table.iter().collect();
        serde_json::to_string(&sorted)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        let table: HashMap<String, ReadyPoint> = serde_json::from_str(s)?;
        Ok(Self {
            table: RwLock::new(table),
        })
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, ReadyPoint>> {
        self.table.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, ReadyPoint>> {
        self.table.write().unwrap_or_else(|e| e.into_inner())
    }
}

// 数値順の数字列をスペース区切りで連結 (字牌は "1 4 11" の順)
pub fn memo_key(ranks: &[Tnum]) -> String {
    let vs: Vec<String> = ranks.iter().map(|n| n.to_string()).collect();
    vs.join(" ")
}

// 萬子, 筒子, 索子, 字牌の4種に分けた数字列 (それぞれ昇順)
// 字牌はHONOR_KEY_*の値に置き換える
pub fn group_by_suit(hand: &[Tile]) -> [Vec<Tnum>; 4] {
    let mut groups: [Vec<Tnum>; 4] = Default::default();
    for t in hand {
        match (t.suit(), t.rank()) {
            (Suit::Characters, Some(r)) => groups[0].push(r),
            (Suit::Dots, Some(r)) => groups[1].push(r),
            (Suit::Bamboos, Some(r)) => groups[2].push(r),
            (s, _) => {
                if let Some(k) = s.honor_key() {
                    groups[3].push(k);
                }
            }
        }
    }
    for g in &mut groups {
        g.sort_unstable();
    }
    groups
}

// 面子候補が多すぎる場合の切り捨て数 (面子 + 面子候補は最大4)
#[inline]
fn overflow(s: usize, t: usize) -> usize {
    (s + t).saturating_sub(SETS)
}

// 評価値(2 * 面子 + 面子候補)が高い方を優先. 同値の場合は面子が多い方を優先
#[inline]
fn is_better(a: ReadyPoint, b: ReadyPoint) -> bool {
    let sa = 2 * a.0 + a.1;
    let sb = 2 * b.0 + b.1;
    sa > sb || (sa == sb && a.0 > b.0)
}

#[derive(Debug, Default)]
pub struct ShantenCalculator {
    memo: ShantenMemo,
}

impl ShantenCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memo(memo: ShantenMemo) -> Self {
        Self { memo }
    }

    pub fn memo(&self) -> &ShantenMemo {
        &self.memo
    }

    pub fn import_memo<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (String, ReadyPoint)>,
    {
        self.memo.import(entries)
    }

    // 一つの牌種の数字列から取り出せる(完成面子数, 面子候補数)の最良値
    pub fn ready_points(&self, ranks: &[Tnum]) -> ReadyPoint {
        let mut ranks = ranks.to_vec();
        ranks.sort_unstable();
        self.ready_points_sorted(&ranks)
    }

    fn ready_points_sorted(&self, ranks: &[Tnum]) -> ReadyPoint {
        let key = memo_key(ranks);
        if let Some(rp) = self.memo.get(&key) {
            return rp;
        }

        let mut best: Option<ReadyPoint> = None;
        for e in unique(ranks) {
            // 対子, 両面(辺張), 嵌張, 刻子, 順子
            let candidates = [
                vec![e, e],
                vec![e, e + 1],
                vec![e, e + 2],
                vec![e, e, e],
                vec![e, e + 1, e + 2],
            ];
            for c in &candidates {
                if !contains_all(ranks, c) {
                    continue;
                }
                let (s, t) = self.ready_points_sorted(&subtract(ranks, c));
                let (s, t) = if c.len() == 3 { (s + 1, t) } else { (s, t + 1) };
                let rp = (s, t.saturating_sub(overflow(s, t)));
                if best.map_or(true, |b| is_better(rp, b)) {
                    best = Some(rp);
                }
            }
        }

        let rp = best.unwrap_or((0, 0));
        self.memo.insert(key, rp);
        rp
    }

    fn sum_points(&self, groups: &[Vec<Tnum>]) -> ReadyPoint {
        groups.iter().fold((0, 0), |(s0, t0), g| {
            let (s, t) = self.ready_points_sorted(g);
            (s0 + s, t0 + t)
        })
    }

    // 通常形 (4面子1雀頭)
    pub fn standard_shanten(&self, hand: &[Tile]) -> Shanten {
        let groups = group_by_suit(hand);

        // 雀頭なし
        let (s, t) = self.sum_points(&groups);
        let mut res = 8 - 2 * s as Shanten - t as Shanten + overflow(s, t) as Shanten;

        // 各牌種の対子を雀頭として抜いた場合
        for i in 0..groups.len() {
            for e in unique(&groups[i]) {
                if count(&groups[i], &e) < 2 {
                    continue;
                }
                let mut gs = groups.clone();
                gs[i] = subtract(&groups[i], &[e, e]);
                let (s, t) = self.sum_points(&gs);
                let point = 2 * s as Shanten + t as Shanten - overflow(s, t) as Shanten + 1;
                res = res.min(8 - point);
            }
        }

        res
    }

    pub fn calc_shanten(&self, hand: &[Tile]) -> Shanten {
        self.standard_shanten(hand)
            .min(seven_pairs_shanten(hand))
            .min(thirteen_orphans_shanten(hand))
    }

    pub fn is_tenpai(&self, hand: &[Tile]) -> bool {
        self.calc_shanten(hand) == TENPAI
    }

    pub fn is_win(&self, hand: &[Tile]) -> bool {
        self.calc_shanten(hand) == WIN
    }
}

// 七対子
pub fn seven_pairs_shanten(hand: &[Tile]) -> Shanten {
    let kinds = unique(hand);
    let pairs = kinds.iter().filter(|t| count(hand, t) >= 2).count() as Shanten;
    if pairs == 6 {
        // 7種類目の牌がない場合(刻子, 槓子を含む)は対子を作るのに牌が足りない
        if kinds.len() >= 7 {
            0
        } else {
            1
        }
    } else {
        6 - pairs
    }
}

// 国士無双
pub fn thirteen_orphans_shanten(hand: &[Tile]) -> Shanten {
    let kinds: Vec<Tile> = unique(hand)
        .into_iter()
        .filter(|t| t.is_terminal_or_honor())
        .collect();
    let has_pair = kinds.iter().any(|t| count(hand, t) >= 2);
    13 - kinds.len() as Shanten - if has_pair { 1 } else { 0 }
}

#[cfg(test)]
fn hand(exp: &str) -> Vec<Tile> {
    crate::util::parse::tiles_from_string(exp).unwrap()
}

#[test]
fn test_ready_points() {
    let calc = ShantenCalculator::new();
    assert_eq!(calc.ready_points(&[]), (0, 0));
    assert_eq!(calc.ready_points(&[1, 2, 3]), (1, 0));
    assert_eq!(calc.ready_points(&[3, 1, 2]), (1, 0));
    assert_eq!(calc.ready_points(&[1, 3]), (0, 1));
    assert_eq!(calc.ready_points(&[1, 4, 7]), (0, 0));
    // 同じ評価値なら面子を優先 (111 222 > 123 11 22)
    assert_eq!(calc.ready_points(&[1, 1, 1, 2, 2, 2, 3]), (2, 0));
    // 面子 + 面子候補は4まで
    assert_eq!(calc.ready_points(&[1, 2, 4, 5, 7, 8, 9, 9, 9]), (1, 3));
    assert_eq!(calc.ready_points(&[1, 1, 3, 3, 5, 5, 7, 7, 9, 9]), (0, 4));
}

#[test]
fn test_memo() {
    let calc = ShantenCalculator::new();
    assert!(calc.memo().is_empty());
    calc.ready_points(&[1, 2, 3]);
    assert_eq!(calc.memo().get("1 2 3"), Some((1, 0)));
    assert_eq!(calc.memo().get(""), Some((0, 0)));

    // 登録済みのキーは再計算しない
    let calc = ShantenCalculator::new();
    calc.import_memo(vec![("1 1".to_string(), (0, 0))]);
    assert_eq!(calc.ready_points(&[1, 1]), (0, 0));
    assert_eq!(calc.ready_points(&[2, 2]), (0, 1));
}

#[test]
fn test_memo_table() {
    let text = "1 2 3&1,0\n\n1 1&0,1\n&0,0\n";
    let entries = ShantenMemo::parse_table(text).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2], ("".to_string(), (0, 0)));

    let memo = ShantenMemo::new();
    assert_eq!(memo.import(entries), 3);
    assert_eq!(memo.dump_table(), "&0,0\n1 1&0,1\n1 2 3&1,0\n");

    let json = memo.to_json().unwrap();
    let memo2 = ShantenMemo::from_json(&json).unwrap();
    assert_eq!(memo2.entries(), memo.entries());

    assert_eq!(
        ShantenMemo::parse_table("1 2 3&1\n"),
        Err(MemoError {
            line: 1,
            text: "1 2 3&1".to_string()
        })
    );
    assert!(ShantenMemo::parse_table("1 2 3\n").is_err());
    assert!(ShantenMemo::parse_table("1&a,0\n").is_err());
}

#[test]
fn test_memo_key_order() {
    // 白發東
    assert_eq!(memo_key(&[1, 4, 11]), "1 4 11");
    let entries = ShantenMemo::parse_table("1 11 4&2,2\n").unwrap();
    assert_eq!(entries, vec![("1 11 4".to_string(), (2, 2))]);

    let calc = ShantenCalculator::new();
    calc.import_memo(entries);
    assert_eq!(calc.standard_shanten(&hand("z156")), 8);
    assert_eq!(calc.memo().get("1 4 11"), Some((0, 0)));
    assert_eq!(calc.memo().get("1 11 4"), Some((2, 2)));
}

#[test]
fn test_ready_point_ties() {
    let calc = ShantenCalculator::new();
    // 途中の同値で面子が少ない方を選ぶと上限の切り捨てで(2, 2)になり2向聴と誤判定する
    assert_eq!(calc.ready_points(&[4, 5, 5, 5, 6, 6, 6, 8, 8, 8, 8, 9, 9]), (3, 1));
    assert_eq!(calc.standard_shanten(&hand("m4555666888899")), 1);
    assert_eq!(calc.calc_shanten(&hand("m4555666888899")), 1);
}

#[test]
fn test_standard_shanten() {
    let calc = ShantenCalculator::new();
    assert_eq!(calc.standard_shanten(&hand("m123456789p11s789")), -1);
    assert_eq!(calc.standard_shanten(&hand("m1234566677788")), 0);
    assert_eq!(calc.standard_shanten(&hand("m123p456s789z1122")), 0);
    assert_eq!(calc.standard_shanten(&hand("m147p258s369z1234")), 8);
    // 字牌同士は順子にならない
    assert_eq!(calc.standard_shanten(&hand("m123p456s789z1234")), 2);
    assert_eq!(calc.standard_shanten(&hand("m111222333p11z555")), -1);
}

#[test]
fn test_seven_pairs_shanten() {
    assert_eq!(seven_pairs_shanten(&hand("m1133p2244s6688z11")), -1);
    assert_eq!(seven_pairs_shanten(&hand("m1133p2244s6688z1")), 0);
    // 4枚使いは対子2つと見なさない
    assert_eq!(seven_pairs_shanten(&hand("m1111p2244s6688z1")), 1);
    assert_eq!(seven_pairs_shanten(&hand("m111p2244s6688z11")), 1);
    // 14枚の場合は1枚捨てて聴牌
    assert_eq!(seven_pairs_shanten(&hand("m1113p2244s6688z11")), 0);
    assert_eq!(seven_pairs_shanten(&hand("m147p258s369z1234")), 6);
}

#[test]
fn test_thirteen_orphans_shanten() {
    assert_eq!(thirteen_orphans_shanten(&hand("m19p19s19z12345671")), -1);
    assert_eq!(thirteen_orphans_shanten(&hand("m19p19s19z1234567")), 0);
    assert_eq!(thirteen_orphans_shanten(&hand("m119p19s19z123456")), 0);
    assert_eq!(thirteen_orphans_shanten(&hand("m147p258s369z1234")), 7);
}

#[test]
fn test_calc_shanten() {
    let calc = ShantenCalculator::new();

    let seven_pairs = hand("m1133p2244s6688z11");
    assert_eq!(calc.calc_shanten(&seven_pairs), -1);
    assert!(calc.standard_shanten(&seven_pairs) > -1);

    let orphans = hand("m19p19s19z12345671");
    assert_eq!(calc.calc_shanten(&orphans), -1);
    assert!(calc.standard_shanten(&orphans) > -1);
    assert!(seven_pairs_shanten(&orphans) > -1);

    let scattered = hand("m147p258s369z1234");
    assert_eq!(calc.calc_shanten(&scattered), 6);

    assert!(calc.is_tenpai(&hand("m1234566677788")));
    assert!(calc.is_win(&hand("m12345666777888")));
    assert!(!calc.is_tenpai(&scattered));
}

#[test]
fn test_shared_calculator() {
    let calc = ShantenCalculator::new();
    let hands = [hand("m1234566677788"), hand("m123p456s789z1234")];
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(calc.calc_shanten(&hands[0]), 0);
                assert_eq!(calc.calc_shanten(&hands[1]), 2);
            });
        }
    });
    assert!(calc.memo().len() > 0);
}
