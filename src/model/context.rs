use super::*;

// 和了牌の取得方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WinMethod {
    #[default]
    Tsumo, // 自摸
    Ron,  // 出和了
    Quad, // 槍槓
}

// 役判定に必要な局面の情報 (評価中は読み取り専用)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandContext {
    pub win_method: WinMethod,
    pub win_tile: Tile,            // 和了牌
    pub prevalent_wind: Tile,      // 場風
    pub seat_wind: Tile,           // 自風
    pub is_concealed: bool,        // 門前
    pub is_leader: bool,           // 親番
    pub is_reach: bool,            // 立直
    pub is_double_reach: bool,     // 両立直
    pub is_reach_first_turn: bool, // 一発
    pub is_final_tile: bool,       // 海底, 河底
    pub is_add_a_quad: bool,       // 槍槓
    pub is_kings_tile_draw: bool,  // 嶺上開花
    pub is_blessing_of_heaven: bool,
    pub is_blessing_of_earth: bool,
}

impl Default for HandContext {
    fn default() -> Self {
        Self {
            win_method: WinMethod::Tsumo,
            win_tile: Tile::EAST,
            prevalent_wind: Tile::EAST,
            seat_wind: Tile::EAST,
            is_concealed: true,
            is_leader: false,
            is_reach: false,
            is_double_reach: false,
            is_reach_first_turn: false,
            is_final_tile: false,
            is_add_a_quad: false,
            is_kings_tile_draw: false,
            is_blessing_of_heaven: false,
            is_blessing_of_earth: false,
        }
    }
}

impl HandContext {
    pub fn new(win_tile: Tile, win_method: WinMethod) -> Self {
        Self {
            win_tile,
            win_method,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_tsumo(&self) -> bool {
        self.win_method == WinMethod::Tsumo
    }

    // 役牌 (三元牌, 自風, 場風)
    pub fn value_tiles(&self) -> Vec<Tile> {
        vec![
            Tile::WHITE,
            Tile::GREEN,
            Tile::RED,
            self.seat_wind,
            self.prevalent_wind,
        ]
    }
}

#[test]
fn test_context_serde_default() {
    let ctx: HandContext =
        serde_json::from_str(r#"{"win_tile": "m5", "win_method": "Ron", "is_reach": true}"#)
            .unwrap();
    assert_eq!(ctx.win_method, WinMethod::Ron);
    assert_eq!(ctx.win_tile, Tile::simple(Suit::Characters, 5).unwrap());
    assert!(ctx.is_reach);
    assert!(ctx.is_concealed);
    assert_eq!(ctx.seat_wind, Tile::EAST);
}
