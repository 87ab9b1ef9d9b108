#![warn(rust_2018_idioms)]

use mahjong_hand::{app, error};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "C" => {
            // Calculator (役計算モード)
            app::CalculatorApp::new(args2).run();
        }
        "W" => {
            // Wait (待ち牌解析モード)
            app::AnalyzerApp::new(args2).run();
        }
        "G" => {
            // Generator (清一色聴牌形の出題モード)
            app::GeneratorApp::new(args2).run();
        }
        "M" => {
            // Memo (向聴数メモの作成モード)
            app::MemoApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
