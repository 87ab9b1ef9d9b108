use super::*;

// [SetPair]
// 鳴き(Open)の面子は型として用意しているが,現状の手牌分解では生成されない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SetPairType {
    Pair,       // 雀頭
    Run,        // 順子 (暗)
    Triple,     // 刻子 (暗)
    OpenRun,    // 順子 (明)
    OpenTriple, // 刻子 (明)
}

use SetPairType::*;

impl SetPairType {
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, OpenRun | OpenTriple)
    }

    #[inline]
    pub fn is_run(self) -> bool {
        matches!(self, Run | OpenRun)
    }

    #[inline]
    pub fn is_triple(self) -> bool {
        matches!(self, Triple | OpenTriple)
    }
}

// Tileは順子の場合は先頭(最小)の牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetPair(pub SetPairType, pub Tile);

impl SetPair {
    // 構成する牌のリスト
    pub fn tiles(&self) -> Vec<Tile> {
        let SetPair(tp, t) = *self;
        match tp {
            Pair => vec![t, t],
            Triple | OpenTriple => vec![t, t, t],
            Run | OpenRun => {
                let mut res = vec![t];
                let mut cur = t;
                for _ in 0..2 {
                    match cur.next_in_run() {
                        Some(n) => {
                            res.push(n);
                            cur = n;
                        }
                        None => break,
                    }
                }
                res
            }
        }
    }

    #[inline]
    pub fn contains(&self, t: Tile) -> bool {
        self.tiles().contains(&t)
    }
}

impl fmt::Display for SetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts: Vec<String> = self.tiles().iter().map(|t| t.to_string()).collect();
        let s = ts.join("");
        if self.0.is_open() {
            write!(f, "[{}]", s)
        } else {
            write!(f, "({})", s)
        }
    }
}

// [SetsComposition]
// 完成した面子と雀頭の組み合わせ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetsComposition {
    pub sets: Vec<SetPair>,
}

impl SetsComposition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sp: SetPair) {
        self.sets.push(sp);
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn of_type(&self, tp: SetPairType) -> impl Iterator<Item = Tile> + '_ {
        self.sets
            .iter()
            .filter(move |sp| sp.0 == tp)
            .map(|sp| sp.1)
    }

    pub fn heads(&self) -> Vec<Tile> {
        self.of_type(Pair).collect()
    }

    pub fn head(&self) -> Option<Tile> {
        self.of_type(Pair).next()
    }

    // 順子 (暗, 明)
    pub fn runs(&self) -> Vec<Tile> {
        self.sets
            .iter()
            .filter(|sp| sp.0.is_run())
            .map(|sp| sp.1)
            .collect()
    }

    // 刻子 (暗, 明)
    pub fn triples(&self) -> Vec<Tile> {
        self.sets
            .iter()
            .filter(|sp| sp.0.is_triple())
            .map(|sp| sp.1)
            .collect()
    }

    pub fn concealed_runs(&self) -> Vec<Tile> {
        self.of_type(Run).collect()
    }

    pub fn concealed_triples(&self) -> Vec<Tile> {
        self.of_type(Triple).collect()
    }

    pub fn tiles(&self) -> Vec<Tile> {
        self.sets.iter().flat_map(|sp| sp.tiles()).collect()
    }
}

impl fmt::Display for SetsComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sets = self.sets.clone();
        sets.sort();
        let ss: Vec<String> = sets.iter().map(|sp| sp.to_string()).collect();
        write!(f, "{}", ss.join(" "))
    }
}

// [Decomposition]
// 手牌の分解候補: 完成面子 + 未完成の面子候補(0~2枚)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub partial: Vec<Tile>,
    pub completed: SetsComposition,
}

impl Decomposition {
    pub fn tiles(&self) -> Vec<Tile> {
        let mut res = self.completed.tiles();
        res.extend(self.partial.iter().copied());
        res.sort();
        res
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.completed)?;
        if !self.partial.is_empty() {
            let ps: Vec<String> = self.partial.iter().map(|t| t.to_string()).collect();
            write!(f, " +{}", ps.join(""))?;
        }
        Ok(())
    }
}

#[test]
fn test_set_pair_tiles() {
    let m7 = Tile::simple(Suit::Characters, 7).unwrap();
    let run = SetPair(Run, m7);
    assert_eq!(run.tiles().len(), 3);
    assert_eq!(run.to_string(), "(m7m8m9)");
    assert!(run.contains(Tile::simple(Suit::Characters, 9).unwrap()));
    assert_eq!(SetPair(OpenTriple, Tile::RED).to_string(), "[z7z7z7]");
    assert_eq!(SetPair(Pair, Tile::EAST).tiles(), vec![Tile::EAST, Tile::EAST]);
}

#[test]
fn test_composition_accessors() {
    let p1 = Tile::simple(Suit::Dots, 1).unwrap();
    let mut sc = SetsComposition::new();
    sc.push(SetPair(Run, p1));
    sc.push(SetPair(Triple, Tile::WHITE));
    sc.push(SetPair(Pair, Tile::EAST));
    assert_eq!(sc.runs(), vec![p1]);
    assert_eq!(sc.triples(), vec![Tile::WHITE]);
    assert_eq!(sc.head(), Some(Tile::EAST));
    assert_eq!(sc.tiles().len(), 8);
    assert_eq!(sc.to_string(), "(z1z1) (p1p2p3) (z5z5z5)");
}
