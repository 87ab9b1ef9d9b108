// mainから直接呼び出すアプリケーションの動作モード(C, W, G, M)のモジュール

mod analyzer;
mod calculator;
mod generator;
mod memo;

pub use analyzer::AnalyzerApp;
pub use calculator::CalculatorApp;
pub use generator::GeneratorApp;
pub use memo::{load_memo, save_memo, MemoApp};
