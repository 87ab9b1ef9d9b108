// 麻雀のデータモデル
mod context;
mod define;
mod meld;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use context::*;
pub use define::*;
pub use meld::*;
pub use tile::*;
