#![warn(rust_2018_idioms)]
// 構造的な意味合いや一貫性を保つために以下の警告は無効化
#![allow(clippy::needless_range_loop)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::new_without_default)]

// 日本式麻雀の手牌評価 (向聴数, 面子分解, 役判定)
pub mod app;
pub mod hand;
pub mod model;
pub mod util;
