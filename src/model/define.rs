// 型エイリアス
pub type Tnum = usize; // 牌の数字部分 (1~9)
pub type Point = i32; // 点数
pub type Shanten = i32; // 向聴数 (-1: 和了形, 0: 聴牌)

// Number
pub const TNUM: usize = 10; // 牌の数字部分の数 (1~9, 0は未使用)
pub const TILE: usize = 4; // 同種の牌の数
pub const SETS: usize = 4; // 和了形の面子の数 (雀頭を除く)

// 向聴数
pub const WIN: Shanten = -1; // 和了形
pub const TENPAI: Shanten = 0; // 聴牌

// 雀頭, 面子候補の評価用に字牌へ割り当てる数値
// 3以上離れているため字牌同士で順子や塔子が構成されることはない
pub const HONOR_KEY_WHITE: Tnum = 1;
pub const HONOR_KEY_GREEN: Tnum = 4;
pub const HONOR_KEY_RED: Tnum = 7;
pub const HONOR_KEY_EAST: Tnum = 11;
pub const HONOR_KEY_SOUTH: Tnum = 14;
pub const HONOR_KEY_WEST: Tnum = 17;
pub const HONOR_KEY_NORTH: Tnum = 20;
