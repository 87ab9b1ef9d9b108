use serde::{de, ser};

use super::*;

// [Suit]
// 宣言順が牌の正規の並び順 (萬子, 筒子, 索子, 東南西北, 白發中)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Characters, // 萬子
    Dots,       // 筒子
    Bamboos,    // 索子
    East,       // 東
    South,      // 南
    West,       // 西
    North,      // 北
    White,      // 白
    Green,      // 發
    Red,        // 中
}

use Suit::*;

pub const SIMPLE_SUITS: [Suit; 3] = [Characters, Dots, Bamboos];
pub const WIND_SUITS: [Suit; 4] = [East, South, West, North];
pub const DRAGON_SUITS: [Suit; 3] = [White, Green, Red];
pub const HONOR_SUITS: [Suit; 7] = [East, South, West, North, White, Green, Red];

impl Suit {
    #[inline]
    pub fn is_simple(self) -> bool {
        matches!(self, Characters | Dots | Bamboos)
    }

    #[inline]
    pub fn is_honor(self) -> bool {
        !self.is_simple()
    }

    #[inline]
    pub fn is_wind(self) -> bool {
        matches!(self, East | South | West | North)
    }

    #[inline]
    pub fn is_dragon(self) -> bool {
        matches!(self, White | Green | Red)
    }

    // 牌表記の種別文字
    pub fn symbol(self) -> char {
        match self {
            Characters => 'm',
            Dots => 'p',
            Bamboos => 's',
            _ => 'z',
        }
    }

    // 字牌の表記上の番号 (東: 1 ~ 中: 7)
    pub fn honor_number(self) -> Option<Tnum> {
        HONOR_SUITS.iter().position(|&s| s == self).map(|i| i + 1)
    }

    pub fn from_honor_number(n: Tnum) -> Option<Suit> {
        if (1..=HONOR_SUITS.len()).contains(&n) {
            Some(HONOR_SUITS[n - 1])
        } else {
            None
        }
    }

    // 数牌の種別文字 ('z'は番号によって種別が決まるのでNone)
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            'm' => Some(Characters),
            'p' => Some(Dots),
            's' => Some(Bamboos),
            _ => None,
        }
    }

    // 向聴数計算で使う字牌の数値キー
    pub fn honor_key(self) -> Option<Tnum> {
        Some(match self {
            White => HONOR_KEY_WHITE,
            Green => HONOR_KEY_GREEN,
            Red => HONOR_KEY_RED,
            East => HONOR_KEY_EAST,
            South => HONOR_KEY_SOUTH,
            West => HONOR_KEY_WEST,
            North => HONOR_KEY_NORTH,
            _ => return None,
        })
    }
}

// [TileError]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    RankOnHonor { suit: Suit, rank: Tnum },
    MissingRank { suit: Suit },
    RankOutOfRange { suit: Suit, rank: Tnum },
    InvalidSymbol { symbol: String },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::RankOnHonor { suit, rank } => {
                write!(f, "honor tile {:?} cannot have rank {}", suit, rank)
            }
            TileError::MissingRank { suit } => write!(f, "simple tile {:?} needs a rank", suit),
            TileError::RankOutOfRange { suit, rank } => {
                write!(f, "rank {} is out of range for {:?}", rank, suit)
            }
            TileError::InvalidSymbol { symbol } => write!(f, "invalid tile symbol: '{}'", symbol),
        }
    }
}

impl std::error::Error for TileError {}

// [Tile]
// rankは数牌の場合のみSome(1~9), 字牌はNone
// フィールドを非公開にしてTile::newの検証を通らない牌を作らせない
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    suit: Suit,
    rank: Option<Tnum>,
}

impl Tile {
    pub const EAST: Tile = Tile::honor_const(East);
    pub const SOUTH: Tile = Tile::honor_const(South);
    pub const WEST: Tile = Tile::honor_const(West);
    pub const NORTH: Tile = Tile::honor_const(North);
    pub const WHITE: Tile = Tile::honor_const(White);
    pub const GREEN: Tile = Tile::honor_const(Green);
    pub const RED: Tile = Tile::honor_const(Red);

    const fn honor_const(suit: Suit) -> Self {
        Self { suit, rank: None }
    }

    pub fn new(suit: Suit, rank: Option<Tnum>) -> Result<Self, TileError> {
        match (suit.is_simple(), rank) {
            (true, Some(r)) if (1..=9).contains(&r) => Ok(Self { suit, rank }),
            (true, Some(r)) => Err(TileError::RankOutOfRange { suit, rank: r }),
            (true, None) => Err(TileError::MissingRank { suit }),
            (false, Some(r)) => Err(TileError::RankOnHonor { suit, rank: r }),
            (false, None) => Ok(Self { suit, rank }),
        }
    }

    pub fn simple(suit: Suit, rank: Tnum) -> Result<Self, TileError> {
        Self::new(suit, Some(rank))
    }

    pub fn honor(suit: Suit) -> Result<Self, TileError> {
        Self::new(suit, None)
    }

    // 全34種の牌を正規の並び順で返却
    pub fn all() -> Vec<Tile> {
        let mut res = vec![];
        for &suit in &SIMPLE_SUITS {
            for rank in 1..TNUM {
                res.push(Self {
                    suit,
                    rank: Some(rank),
                });
            }
        }
        for &suit in &HONOR_SUITS {
            res.push(Self::honor_const(suit));
        }
        res
    }

    // 么九牌13種
    pub fn terminals_and_honors() -> Vec<Tile> {
        Self::all()
            .into_iter()
            .filter(|t| t.is_terminal_or_honor())
            .collect()
    }

    // "m1", "z5"のような表記から生成
    pub fn from_symbol(s: &str) -> Result<Self, TileError> {
        let invalid = || TileError::InvalidSymbol {
            symbol: s.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }
        let n = chars[1].to_digit(10).ok_or_else(invalid)? as Tnum;
        if chars[0] == 'z' {
            let suit = Suit::from_honor_number(n).ok_or_else(invalid)?;
            Self::honor(suit)
        } else {
            let suit = Suit::from_symbol(chars[0]).ok_or_else(invalid)?;
            Self::simple(suit, n)
        }
    }

    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[inline]
    pub fn rank(&self) -> Option<Tnum> {
        self.rank
    }

    // 数牌
    #[inline]
    pub fn is_simple(&self) -> bool {
        self.suit.is_simple()
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.suit.is_honor()
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.rank, Some(1) | Some(9))
    }

    // 么九牌
    #[inline]
    pub fn is_terminal_or_honor(&self) -> bool {
        self.is_honor() || self.is_terminal()
    }

    // 中張牌
    #[inline]
    pub fn is_middle(&self) -> bool {
        !self.is_terminal_or_honor()
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        self.suit.is_wind()
    }

    // 三元牌
    #[inline]
    pub fn is_dragon(&self) -> bool {
        self.suit.is_dragon()
    }

    // 循環する次の牌 (9 -> 1, 北 -> 東, 中 -> 白)
    pub fn next(&self) -> Tile {
        match self.rank {
            Some(r) => Self {
                suit: self.suit,
                rank: Some(r % 9 + 1),
            },
            None => {
                let cycle: &[Suit] = if self.is_wind() {
                    &WIND_SUITS
                } else {
                    &DRAGON_SUITS
                };
                let i = cycle.iter().position(|&s| s == self.suit).unwrap_or(0);
                Self::honor_const(cycle[(i + 1) % cycle.len()])
            }
        }
    }

    // 順子を構成する次の牌 (9と字牌は存在しない)
    pub fn next_in_run(&self) -> Option<Tile> {
        match self.rank {
            Some(r) if r < 9 => Some(Self {
                suit: self.suit,
                rank: Some(r + 1),
            }),
            _ => None,
        }
    }

    pub fn unicode(&self) -> char {
        let code = match (self.suit, self.rank) {
            (Characters, Some(r)) => 0x1F007 + r as u32 - 1,
            (Bamboos, Some(r)) => 0x1F010 + r as u32 - 1,
            (Dots, Some(r)) => 0x1F019 + r as u32 - 1,
            (East, _) => 0x1F000,
            (South, _) => 0x1F001,
            (West, _) => 0x1F002,
            (North, _) => 0x1F003,
            (Red, _) => 0x1F004,
            (Green, _) => 0x1F005,
            (White, _) => 0x1F006,
            _ => 0x20,
        };
        std::char::from_u32(code).unwrap_or(' ')
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self.rank {
            Some(r) => r,
            None => self.suit.honor_number().unwrap_or(0),
        };
        write!(f, "{}{}", self.suit.symbol(), n)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

#[test]
fn test_tile_invariant() {
    assert!(Tile::simple(Characters, 1).is_ok());
    assert_eq!(
        Tile::new(East, Some(1)),
        Err(TileError::RankOnHonor { suit: East, rank: 1 })
    );
    assert_eq!(
        Tile::new(Dots, None),
        Err(TileError::MissingRank { suit: Dots })
    );
    assert_eq!(
        Tile::simple(Bamboos, 10),
        Err(TileError::RankOutOfRange {
            suit: Bamboos,
            rank: 10
        })
    );
    assert_eq!(Tile::honor(Red), Ok(Tile::RED));
}

#[test]
fn test_tile_next() {
    let m1 = Tile::simple(Characters, 1).unwrap();
    let m9 = Tile::simple(Characters, 9).unwrap();
    assert_eq!(m1.next(), Tile::simple(Characters, 2).unwrap());
    assert_eq!(m9.next(), m1);
    assert_eq!(m9.next_in_run(), None);
    assert_eq!(Tile::NORTH.next(), Tile::EAST);
    assert_eq!(Tile::EAST.next(), Tile::SOUTH);
    assert_eq!(Tile::WHITE.next(), Tile::GREEN);
    assert_eq!(Tile::RED.next(), Tile::WHITE);
    assert_eq!(Tile::RED.next_in_run(), None);
}

#[test]
fn test_tile_order() {
    let all = Tile::all();
    assert_eq!(all.len(), 34);
    let mut sorted = all.clone();
    sorted.sort();
    assert_eq!(all, sorted);
    assert!(Tile::simple(Bamboos, 9).unwrap() < Tile::EAST);
    assert!(Tile::NORTH < Tile::WHITE);
    assert_eq!(Tile::terminals_and_honors().len(), 13);
}

#[test]
fn test_tile_symbol() {
    for t in Tile::all() {
        assert_eq!(Tile::from_symbol(&t.to_string()), Ok(t));
    }
    assert_eq!(Tile::WHITE.to_string(), "z5");
    assert!(Tile::from_symbol("z8").is_err());
    assert!(Tile::from_symbol("m0").is_err());
    assert!(Tile::from_symbol("x1").is_err());
    assert_eq!(Tile::EAST.unicode(), '🀀');
    assert_eq!(Tile::simple(Characters, 1).unwrap().unicode(), '🀇');
}

#[test]
fn test_tile_serde() {
    let t = Tile::simple(Dots, 5).unwrap();
    let s = serde_json::to_string(&t).unwrap();
    assert_eq!(s, "\"p5\"");
    let t2: Tile = serde_json::from_str(&s).unwrap();
    assert_eq!(t, t2);
    assert!(serde_json::from_str::<Tile>("\"q1\"").is_err());
}
