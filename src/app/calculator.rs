use std::fmt::Write;
use std::fs::File;
use std::io::{self, BufRead};

use crate::hand::{HandEvaluator, ScoreResult};
use crate::model::*;
use crate::util::log::{set_log_level, LEVEL_DEBUG};
use crate::util::misc::*;
use crate::util::parse::*;

use crate::error;

#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    detail: bool,
    context: Option<HandContext>,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
            context: None,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-v" => set_log_level(LEVEL_DEBUG),
                "-f" => match next_value(&mut it, s) {
                    Ok(v) => file_path = v,
                    Err(e) => {
                        error!("{}", e);
                        return;
                    }
                },
                "-j" => {
                    let ctx = next_value::<String>(&mut it, s)
                        .and_then(|v| Ok(serde_json::from_str::<HandContext>(&v)?));
                    match ctx {
                        Ok(ctx) => self.context = Some(ctx),
                        Err(e) => {
                            error!("{}", e);
                            return;
                        }
                    }
                }
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return;
        }

        let ev = HandEvaluator::new();
        if !exp.is_empty() {
            if let Err(e) = self.process_expression(&ev, &exp) {
                error!("{}", e);
                return;
            }
        }

        if !file_path.is_empty() {
            if let Err(e) = self.run_from_file(&ev, &file_path) {
                error!("{}", e);
            }
        }
    }

    fn run_from_file(&self, ev: &HandEvaluator, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(ev, &exp) {
                error!("{}", e);
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, ev: &HandEvaluator, exp: &str) -> Res {
        let mut calculator = Calculator::new(self.detail, self.context.clone());
        calculator.parse(exp)?;
        calculator.run(ev);
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

// 式の書式: 手牌[+]/場風自風/条件役(カンマ区切り)/翻数
// 手牌の最後の牌が和了牌. +がついている場合はロン和了
// 例: m123456789z11122+/ES/立直/6
#[derive(Debug)]
struct Calculator {
    detail: bool,
    hand: Vec<Tile>,
    ctx: HandContext,
    // score verify
    verify: bool,
    doubles: usize,
}

impl Calculator {
    fn new(detail: bool, ctx: Option<HandContext>) -> Self {
        Self {
            detail,
            hand: vec![],
            ctx: ctx.unwrap_or_default(),
            verify: false,
            doubles: 0,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').next().unwrap_or(""); // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        let len = exps.len();
        if len > 0 {
            self.parse_hand(exps[0])?;
        }
        if len > 1 {
            self.parse_stage_info(exps[1])?;
        }
        if len > 2 {
            self.parse_role_flags(exps[2])?;
        }
        if len > 3 {
            self.parse_score_verify(exps[3])?;
        }

        if self.detail {
            println!("{:?}", self);
        }

        Ok(())
    }

    fn run(&self, ev: &HandEvaluator) -> Verify {
        let res = ev.score_win(&self.hand, &self.ctx);
        if res == ScoreResult::default() && ev.calc_shanten(&self.hand) != WIN {
            println!("not win hand");
        } else {
            if self.detail {
                for d in ev.decompose(&self.hand) {
                    println!("decomposition: {}", d);
                }
                println!("{:?}", res);
            }

            let mut roles = "".to_string();
            for r in &res.roles {
                let _ = write!(roles, "{}({}), ", r.name, r.points);
            }
            println!("roles: {}", roles);
            println!(
                "doubles: {}, points: {}, {}",
                res.total_points,
                crate::hand::limit_points(self.ctx.is_leader, res.total_points),
                crate::hand::limit_title(res.total_points)
            );
        }

        let verify = if self.verify {
            if res.total_points == self.doubles {
                Verify::Ok
            } else {
                Verify::Error
            }
        } else {
            Verify::Skip
        };
        println!("verify: {:?}", verify);
        verify
    }

    fn parse_hand(&mut self, input: &str) -> Res {
        if input.ends_with('+') {
            self.ctx.win_method = WinMethod::Ron;
        }
        self.hand = tiles_from_string(&input.replace('+', ""))?;
        match self.hand.last() {
            Some(&t) => self.ctx.win_tile = t,
            None => Err(format!("empty hand: {}", input))?,
        }
        Ok(())
    }

    fn parse_stage_info(&mut self, input: &str) -> Res {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != 2 {
            Err(format!("stage info len is not 2: {}", input))?;
        }
        self.ctx.prevalent_wind = wind_from_char(chars[0])?;
        self.ctx.seat_wind = wind_from_char(chars[1])?;
        self.ctx.is_leader = self.ctx.seat_wind == Tile::EAST;
        Ok(())
    }

    fn parse_role_flags(&mut self, input: &str) -> Res {
        let ctx = &mut self.ctx;
        for y in input.split(',') {
            match y {
                "立直" => ctx.is_reach = true,
                "両立直" => ctx.is_double_reach = true,
                "一発" => ctx.is_reach_first_turn = true,
                "海底摸月" | "河底撈魚" => ctx.is_final_tile = true,
                "嶺上開花" => ctx.is_kings_tile_draw = true,
                "槍槓" => {
                    ctx.is_add_a_quad = true;
                    ctx.win_method = WinMethod::Quad;
                }
                "天和" => ctx.is_blessing_of_heaven = true,
                "地和" => ctx.is_blessing_of_earth = true,
                "副露" => ctx.is_concealed = false,
                "" => {}
                _ => Err(format!("invalid conditional role: {}", y))?,
            }
        }
        Ok(())
    }

    fn parse_score_verify(&mut self, input: &str) -> Res {
        self.doubles = input.parse::<usize>()?;
        self.verify = true;
        Ok(())
    }
}

fn print_usage() {
    error!(
        r#"invalid input
Usage
    $ cargo run C EXPRESSION [-d] [-v] [-j CONTEXT_JSON]
    $ cargo run C -f FILE [-d] [-v] [-j CONTEXT_JSON]
Options
    -d: print decompositions and detail
    -v: print debug log
    -f: read expresisons from file instead of a commandline expression
    -j: base context in json (ex: '{{"is_leader": true}}')
Expression
    HAND[+]/WINDS/FLAGS/DOUBLES (ex: m123456789z11122+/ES/立直/6)
"#
    );
}

#[test]
fn test_calculator() {
    let ev = HandEvaluator::new();
    let file = File::open("tests/win_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false, None);
            calculator.parse(&e).unwrap();
            assert_eq!(calculator.hand.len(), 14, "{}", e);
            assert_eq!(Verify::Ok, calculator.run(&ev));
        }
    }
}

#[test]
fn test_parse_expression() {
    let mut calculator = Calculator::new(false, None);
    calculator.parse("m123456789z11122+/ES/立直,一発/7").unwrap();
    assert_eq!(calculator.hand.len(), 14);
    assert_eq!(calculator.ctx.win_tile, Tile::SOUTH);
    assert_eq!(calculator.ctx.win_method, WinMethod::Ron);
    assert_eq!(calculator.ctx.seat_wind, Tile::SOUTH);
    assert!(!calculator.ctx.is_leader);
    assert!(calculator.ctx.is_reach && calculator.ctx.is_reach_first_turn);
    assert_eq!(calculator.doubles, 7);

    assert!(Calculator::new(false, None).parse("m123/EX").is_err());
    assert!(Calculator::new(false, None).parse("m123/ES/不明").is_err());
    assert!(Calculator::new(false, None).parse("m123/ES//x").is_err());
    assert!(Calculator::new(false, None).parse("+").is_err());
}

#[test]
fn test_print_usage() {
    // -j の例はそのままjsonとして読み込める
    let ctx: HandContext = serde_json::from_str(r#"{"is_leader": true}"#).unwrap();
    assert!(ctx.is_leader);
    print_usage();
}
