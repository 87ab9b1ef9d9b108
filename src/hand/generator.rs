use rand::seq::SliceRandom;
use rand::Rng;

use super::shanten::ShantenCalculator;
use super::wait::effective_tile_counts;
use crate::info;
use crate::model::*;
use crate::util::parse::tiles_from_string;

// [清一色の聴牌形の生成]

// 数字cur以降を使ってrest枚になる数字列をすべて列挙 (同じ数字は最大4枚)
// 例: generate_all_hands(1, 2) -> ["89", "88", "79", ...]
pub fn generate_all_hands(cur: Tnum, rest: usize) -> Vec<String> {
    if rest == 0 {
        return vec![String::new()];
    }
    if cur == 0 || cur >= TNUM {
        return vec![];
    }

    let mut res = vec![];
    for n in 0..=TILE.min(rest) {
        let prefix = cur.to_string().repeat(n);
        for s in generate_all_hands(cur + 1, rest - n) {
            res.push(format!("{}{}", prefix, s));
        }
    }
    res
}

// 萬子のみで構成した手牌
fn characters(pattern: &str) -> Vec<Tile> {
    tiles_from_string(&format!("m{}", pattern)).unwrap_or_default()
}

// 聴牌かつ和了牌が1枚以上残っている
// 待ちがすべて手牌で4枚使いの場合(例: m4445556669999)は残り枚数のリストが空になる
fn has_live_wait(calc: &ShantenCalculator, hand: &[Tile]) -> bool {
    calc.is_tenpai(hand)
        && effective_tile_counts(calc, hand)
            .iter()
            .any(|&(_, n)| n != 0)
}

#[derive(Debug, Default)]
pub struct ReadyHandGenerator {
    patterns: Vec<String>,
}

impl ReadyHandGenerator {
    // 和了牌が残っている聴牌形のみを抽出
    pub fn build(calc: &ShantenCalculator) -> Self {
        let patterns: Vec<String> = generate_all_hands(1, 13)
            .into_iter()
            .filter(|p| has_live_wait(calc, &characters(p)))
            .collect();
        info!("ready hand patterns: {}", patterns.len());
        Self { patterns }
    }

    pub fn from_patterns(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn random_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<Tile>> {
        self.patterns.choose(rng).map(|p| characters(p))
    }

    pub fn dump(&self) -> String {
        let mut res = String::new();
        for p in &self.patterns {
            res += p;
            res += "\n";
        }
        res
    }
}

#[test]
fn test_generate_all_hands() {
    assert_eq!(generate_all_hands(1, 0), vec![String::new()]);
    assert_eq!(generate_all_hands(9, 1), vec!["9".to_string()]);
    assert!(generate_all_hands(9, 5).is_empty());
    assert_eq!(generate_all_hands(8, 2), vec!["99", "89", "88"]);

    let hands = generate_all_hands(1, 13);
    assert!(hands.iter().all(|h| h.len() == 13));
    assert!(hands.contains(&"1112345678999".to_string()));
    assert!(!hands.contains(&"1111123456789".to_string()));
}

#[test]
fn test_ready_hand_generator() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let calc = ShantenCalculator::new();
    let patterns: Vec<String> = ["1112345678999", "1234566677788", "1122334455667"]
        .iter()
        .map(|s| s.to_string())
        .filter(|p| calc.is_tenpai(&characters(p)))
        .collect();
    let generator = ReadyHandGenerator::from_patterns(patterns);
    assert_eq!(generator.len(), 3);
    assert_eq!(generator.dump().lines().count(), 3);

    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..10 {
        let hand = generator.random_one(&mut rng).unwrap();
        assert_eq!(hand.len(), 13);
        assert!(calc.is_tenpai(&hand));
    }
    assert!(ReadyHandGenerator::default().random_one(&mut rng).is_none());
}

#[test]
fn test_has_live_wait() {
    let calc = ShantenCalculator::new();
    assert!(has_live_wait(&calc, &characters("1112345678999")));

    // 待ちはm9のみで4枚とも手牌にある
    let hand = characters("4445556669999");
    assert!(calc.is_tenpai(&hand));
    assert!(effective_tile_counts(&calc, &hand).is_empty());
    assert!(!has_live_wait(&calc, &hand));

    // 聴牌でない
    assert!(!has_live_wait(&calc, &characters("1122446699135")));
}
