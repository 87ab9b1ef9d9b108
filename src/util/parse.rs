use std::fmt;

use crate::model::*;

// 牌表記の文字列変換
// 表記: 種別文字(m,p,s,z)の後に数字を続ける. 例: "m123p456s789z1155"
// 字牌は z1~z4: 東南西北, z5~z7: 白發中

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    NumberBeforeType { input: String },
    InvalidChar { input: String, c: char },
    Tile(TileError),
    Wind { input: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NumberBeforeType { input } => {
                write!(f, "tile number before tile type: '{}'", input)
            }
            ParseError::InvalidChar { input, c } => {
                write!(f, "invalid char '{}' in '{}'", c, input)
            }
            ParseError::Tile(e) => write!(f, "{}", e),
            ParseError::Wind { input } => write!(f, "invalid wind symbol: '{}'", input),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<TileError> for ParseError {
    fn from(e: TileError) -> Self {
        ParseError::Tile(e)
    }
}

pub fn tiles_from_string(exp: &str) -> Result<Vec<Tile>, ParseError> {
    let mut tiles = vec![];
    let mut tp = None;
    for c in exp.chars() {
        match c {
            'm' | 'p' | 's' | 'z' => tp = Some(c),
            '0'..='9' => {
                let tp = tp.ok_or_else(|| ParseError::NumberBeforeType {
                    input: exp.to_string(),
                })?;
                let n = c.to_digit(10).unwrap_or(0) as Tnum;
                let t = if tp == 'z' {
                    match Suit::from_honor_number(n) {
                        Some(suit) => Tile::honor(suit)?,
                        None => {
                            return Err(ParseError::Tile(TileError::InvalidSymbol {
                                symbol: format!("z{}", n),
                            }))
                        }
                    }
                } else {
                    match Suit::from_symbol(tp) {
                        Some(suit) => Tile::simple(suit, n)?,
                        None => {
                            return Err(ParseError::InvalidChar {
                                input: exp.to_string(),
                                c: tp,
                            })
                        }
                    }
                };
                tiles.push(t);
            }
            ' ' => {}
            _ => {
                return Err(ParseError::InvalidChar {
                    input: exp.to_string(),
                    c,
                })
            }
        }
    }
    Ok(tiles)
}

// 正規の並び順に整列して種別ごとにまとめた表記を返却
pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut tiles = tiles.to_vec();
    tiles.sort();
    let mut res = String::new();
    let mut last = None;
    for t in &tiles {
        let s = t.to_string();
        let mut cs = s.chars();
        let (tp, n) = match (cs.next(), cs.next()) {
            (Some(tp), Some(n)) => (tp, n),
            _ => continue,
        };
        if last != Some(tp) {
            res.push(tp);
            last = Some(tp);
        }
        res.push(n);
    }
    res
}

pub fn tiles_to_unicode(tiles: &[Tile]) -> String {
    let mut tiles = tiles.to_vec();
    tiles.sort();
    tiles.iter().map(|t| t.unicode()).collect()
}

// 東南西北 (E, S, W, N) の風牌
pub fn wind_from_char(c: char) -> Result<Tile, ParseError> {
    Ok(match c {
        'E' => Tile::EAST,
        'S' => Tile::SOUTH,
        'W' => Tile::WEST,
        'N' => Tile::NORTH,
        _ => {
            return Err(ParseError::Wind {
                input: c.to_string(),
            })
        }
    })
}

#[test]
fn test_tiles_from_string() {
    let hand = tiles_from_string("m123p55z17").unwrap();
    assert_eq!(hand.len(), 7);
    assert_eq!(hand[0], Tile::simple(Suit::Characters, 1).unwrap());
    assert_eq!(hand[3], Tile::simple(Suit::Dots, 5).unwrap());
    assert_eq!(hand[5], Tile::EAST);
    assert_eq!(hand[6], Tile::RED);

    assert!(matches!(
        tiles_from_string("12m"),
        Err(ParseError::NumberBeforeType { .. })
    ));
    assert!(matches!(
        tiles_from_string("m1x"),
        Err(ParseError::InvalidChar { c: 'x', .. })
    ));
    assert!(matches!(tiles_from_string("m0"), Err(ParseError::Tile(_))));
    assert!(matches!(tiles_from_string("z8"), Err(ParseError::Tile(_))));
}

#[test]
fn test_tiles_to_string() {
    let exp = "m119p234s55z1777";
    let hand = tiles_from_string("z7z1s5m9p234m11z77s5").unwrap();
    assert_eq!(tiles_to_string(&hand), exp);
    assert_eq!(tiles_from_string(exp).unwrap().len(), hand.len());
    assert_eq!(tiles_to_unicode(&tiles_from_string("z12").unwrap()), "🀀🀁");
}

#[test]
fn test_wind_from_char() {
    assert_eq!(wind_from_char('W'), Ok(Tile::WEST));
    assert!(wind_from_char('X').is_err());
}
