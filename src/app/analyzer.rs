use crate::hand::HandEvaluator;
use crate::model::*;
use crate::util::log::{set_log_level, LEVEL_DEBUG};
use crate::util::misc::*;
use crate::util::parse::*;

use crate::error;

// 手牌の向聴数, 有効牌, 待ちごとの役を表示
#[derive(Debug)]
pub struct AnalyzerApp {
    args: Vec<String>,
    unicode: bool,
}

impl AnalyzerApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            unicode: false,
        }
    }

    pub fn run(&mut self) {
        let mut exp = "".to_string();
        let mut winds = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-u" => self.unicode = true,
                "-v" => set_log_level(LEVEL_DEBUG),
                "-w" => match next_value(&mut it, s) {
                    Ok(v) => winds = v,
                    Err(e) => {
                        error!("{}", e);
                        return;
                    }
                },
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if exp.is_empty() {
            print_usage();
            return;
        }

        if let Err(e) = self.analyze(&exp, &winds) {
            error!("{}", e);
        }
    }

    fn tiles(&self, tiles: &[Tile]) -> String {
        if self.unicode {
            tiles_to_unicode(tiles)
        } else {
            tiles_to_string(tiles)
        }
    }

    fn analyze(&self, exp: &str, winds: &str) -> Res {
        let hand = tiles_from_string(exp)?;
        let ctx = parse_winds(winds)?;
        let ev = HandEvaluator::new();

        println!("hand: {}", self.tiles(&hand));
        println!("shanten: {}", ev.calc_shanten(&hand));

        let counts = ev.effective_tile_counts(&hand);
        if !counts.is_empty() {
            let total: usize = counts.iter().map(|&(_, n)| n).sum();
            let tiles: Vec<Tile> = counts.iter().map(|&(t, _)| t).collect();
            println!("effective: {} ({} tiles)", self.tiles(&tiles), total);
        }

        for w in ev.evaluate_waits(&hand, &ctx) {
            println!(
                "wait {}: {:?} {} {}",
                self.tiles(&[w.tile]),
                w.score.role_names(),
                w.score.total_points,
                w.title
            );
        }
        Ok(())
    }
}

// 場風自風 (例: "ES"). 空文字列の場合は東場の親
fn parse_winds(winds: &str) -> Res<HandContext> {
    let mut ctx = HandContext::default();
    let chars: Vec<char> = winds.chars().collect();
    match chars.len() {
        0 => {}
        2 => {
            ctx.prevalent_wind = wind_from_char(chars[0])?;
            ctx.seat_wind = wind_from_char(chars[1])?;
        }
        _ => Err(format!("invalid winds: {}", winds))?,
    }
    ctx.is_leader = ctx.seat_wind == Tile::EAST;
    Ok(ctx)
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run W HAND [-w WINDS] [-u] [-v]
Options
    -w: prevalent and seat wind (ex: ES)
    -u: print tiles in unicode
    -v: print debug log
"
    );
}

#[test]
fn test_parse_winds() {
    let ctx = parse_winds("").unwrap();
    assert!(ctx.is_leader);
    let ctx = parse_winds("SW").unwrap();
    assert_eq!(ctx.prevalent_wind, Tile::SOUTH);
    assert_eq!(ctx.seat_wind, Tile::WEST);
    assert!(!ctx.is_leader);
    assert!(parse_winds("E").is_err());
}

#[test]
fn test_analyze() {
    let app = AnalyzerApp::new(vec![]);
    app.analyze("m1234566677788", "ES").unwrap();
    assert!(app.analyze("m123x", "").is_err());
}
