// 汎用的な補助モジュール
pub mod log;
pub mod misc;
pub mod multiset;
pub mod parse;
