use crate::hand::{HandEvaluator, ShantenMemo};
use crate::util::log::{set_log_level, LEVEL_DEBUG};
use crate::util::misc::*;
use crate::util::parse::*;

use crate::{error, info};

// 向聴数計算のメモの読み込み, 追加計算, 書き出し
// ファイル名が.jsonで終わる場合はjson形式, それ以外は KEY&COMPLETED,PARTIAL の行形式
#[derive(Debug)]
pub struct MemoApp {
    args: Vec<String>,
    input: String,
    output: String,
    hands: Vec<String>,
}

impl MemoApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            input: "".to_string(),
            output: "".to_string(),
            hands: vec![],
        }
    }

    pub fn run(&mut self) {
        let args = self.args.clone();
        let mut it = args.iter();
        while let Some(s) = it.next() {
            let res = match s.as_str() {
                "-i" => next_value(&mut it, s).map(|v| self.input = v),
                "-o" => next_value(&mut it, s).map(|v| self.output = v),
                "-v" => {
                    set_log_level(LEVEL_DEBUG);
                    Ok(())
                }
                _ if s.starts_with('-') => Err(format!("unknown option: {}", s).into()),
                _ => {
                    self.hands.push(s.clone());
                    Ok(())
                }
            };
            if let Err(e) = res {
                error!("{}", e);
                return;
            }
        }

        if self.input.is_empty() && self.hands.is_empty() {
            print_usage();
            return;
        }

        if let Err(e) = self.process() {
            error!("{}", e);
        }
    }

    fn process(&self) -> Res {
        let memo = if self.input.is_empty() {
            ShantenMemo::new()
        } else {
            load_memo(&self.input)?
        };
        info!("memo loaded: {}", memo.len());

        let ev = HandEvaluator::with_memo(memo);
        for exp in &self.hands {
            let hand = tiles_from_string(exp)?;
            println!("{}: {}", tiles_to_string(&hand), ev.calc_shanten(&hand));
        }

        let memo = ev.calculator().memo();
        println!("memo entries: {}", memo.len());
        if !self.output.is_empty() {
            save_memo(memo, &self.output)?;
        }
        Ok(())
    }
}

fn is_json(file_path: &str) -> bool {
    file_path.ends_with(".json")
}

pub fn load_memo(file_path: &str) -> Res<ShantenMemo> {
    let data = read_from_file(file_path)?;
    let memo = ShantenMemo::new();
    if is_json(file_path) {
        memo.import(ShantenMemo::from_json(&data)?.entries());
    } else {
        memo.import(ShantenMemo::parse_table(&data)?);
    }
    Ok(memo)
}

pub fn save_memo(memo: &ShantenMemo, file_path: &str) -> Res {
    let data = if is_json(file_path) {
        memo.to_json()?
    } else {
        memo.dump_table()
    };
    write_to_file(file_path, &data)?;
    info!("memo saved: {} ({} entries)", file_path, memo.len());
    Ok(())
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run M [-i FILE] [-o FILE] [-v] HAND...
Options
    -i: import memo from file (*.json or KEY&COMPLETED,PARTIAL lines)
    -o: export memo to file
    -v: print debug log
"
    );
}

#[test]
fn test_memo_file() {
    let dir = std::env::temp_dir().join(format!("mahjong_hand_memo_{}", std::process::id()));
    let ev = HandEvaluator::new();
    ev.calc_shanten(&tiles_from_string("m123456p789s1199").unwrap());
    let memo = ev.calculator().memo();
    assert!(!memo.is_empty());

    for name in ["memo.txt", "memo.json"] {
        let path = dir.join(name);
        let path = path.to_str().unwrap();
        save_memo(memo, path).unwrap();
        let loaded = load_memo(path).unwrap();
        assert_eq!(loaded.entries(), memo.entries());
    }
    std::fs::remove_dir_all(&dir).unwrap();
}
