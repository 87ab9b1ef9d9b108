use std::fmt;

use serde::Serialize;

use crate::model::*;
use crate::util::multiset::{contains_all, count, subtract, unique};

use SetPairType::*;

// [役判定]
// compositionがNoneの場合は面子に分解しない手牌(七対子, 国士無双)として判定する
#[derive(Debug)]
pub struct RoleContext<'a> {
    hand: Vec<Tile>,                  // 和了時の手牌(14枚, 整列済み)
    composition: &'a SetsComposition, // 面子の組み合わせ(分解なしの場合は空)
    is_element_hand: bool,            // 面子に分解した手牌かどうか
    ctx: &'a HandContext,
    head: Option<Tile>,
    runs: Vec<Tile>,
    triples: Vec<Tile>,
    concealed_triples: usize, // 暗刻の数 (ロン和了の刻子は除く)
    double_runs: usize,       // 同じ順子の組の数 (一盃口, 二盃口用)
}

static EMPTY_COMPOSITION: SetsComposition = SetsComposition { sets: Vec::new() };

impl<'a> RoleContext<'a> {
    pub fn new(
        hand: &[Tile],
        composition: Option<&'a SetsComposition>,
        ctx: &'a HandContext,
    ) -> Self {
        let mut hand = hand.to_vec();
        hand.sort();
        let is_element_hand = composition.is_some();
        let composition = composition.unwrap_or(&EMPTY_COMPOSITION);
        let concealed_triples = count_concealed_triples(composition, ctx);
        let double_runs = count_double_runs(composition);

        Self {
            hand,
            composition,
            is_element_hand,
            ctx,
            head: composition.head(),
            runs: composition.runs(),
            triples: composition.triples(),
            concealed_triples,
            double_runs,
        }
    }

    // 成立した役のリスト. 役満が含まれている場合は役満のみを返却
    pub fn calc_roles(&self) -> Vec<&'static Role> {
        let is_open = !self.ctx.is_concealed;
        let roles: Vec<&'static Role> = ROLE_LIST
            .iter()
            .filter(|r| !(is_open && r.is_closed_only))
            .filter(|r| (r.func)(self))
            .collect();

        let limits: Vec<&'static Role> = roles.iter().copied().filter(|r| r.is_limit).collect();
        if limits.is_empty() {
            roles
        } else {
            limits
        }
    }

    // (役一覧, 翻数の合計)
    pub fn calc_points(&self) -> (Vec<&'static Role>, usize) {
        let is_open = !self.ctx.is_concealed;
        let roles = self.calc_roles();
        let total = roles.iter().map(|r| r.points(is_open)).sum();
        (roles, total)
    }

    fn has_triple(&self, t: Tile) -> bool {
        self.triples.contains(&t)
    }

    fn has_run(&self, t: Tile) -> bool {
        self.runs.contains(&t)
    }
}

// ロン和了の場合,和了牌で完成した刻子は明刻扱い
// ただし和了牌を順子や雀頭の一部とみなせる場合は暗刻のまま
fn count_concealed_triples(sc: &SetsComposition, ctx: &HandContext) -> usize {
    let triples = sc.concealed_triples();
    let n = triples.len();
    if ctx.is_tsumo() || !triples.contains(&ctx.win_tile) {
        return n;
    }
    let wt = ctx.win_tile;
    let in_other = sc.head() == Some(wt)
        || sc
            .concealed_runs()
            .iter()
            .any(|&t| SetPair(Run, t).contains(wt));
    if in_other {
        n
    } else {
        n - 1
    }
}

fn count_double_runs(sc: &SetsComposition) -> usize {
    let runs = sc.concealed_runs();
    unique(&runs).iter().map(|t| count(&runs, t) / 2).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoleKind {
    BigDragons,
    BlessingOfHeaven,
    BlessingOfEarth,
    AllGreen,
    AllTerminals,
    AllHonors,
    FourWinds,
    ThirteenOrphans,
    FourConcealedTriples,
    NineGates,
    FullFlush,
    TwoDoubleRuns,
    PureOutsideHand,
    HalfFlush,
    ThreeColorTriples,
    AllTerminalsAndHonors,
    LittleDragons,
    ThreeConcealedTriples,
    MixedOutsideHand,
    FullStraight,
    SevenPairs,
    ThreeColorRuns,
    AllTriples,
    DoubleReach,
    AddAQuad,
    KingsTileDraw,
    FinalTileWin,
    DoubleRun,
    FirstTurnWin,
    ConcealedSelfDraw,
    AllRuns,
    AllSimples,
    SeatEast,
    SeatSouth,
    SeatWest,
    SeatNorth,
    WhiteDragon,
    GreenDragon,
    RedDragon,
    FieldEast,
    FieldSouth,
    FieldWest,
    FieldNorth,
    Reach,
}

impl RoleKind {
    pub fn role(self) -> Option<&'static Role> {
        ROLE_LIST.iter().find(|r| r.kind == self)
    }
}

pub struct Role {
    pub kind: RoleKind,
    pub name: &'static str,
    pub func: fn(&RoleContext<'_>) -> bool,
    pub point_close: usize,        // 門前の翻
    pub point_open: Option<usize>, // 鳴きありの翻(食い下がり) Noneの場合は門前と同じ
    pub is_limit: bool,            // 役満
    pub is_closed_only: bool,      // 門前限定
}

impl Role {
    pub fn points(&self, is_open: bool) -> usize {
        if is_open {
            self.point_open.unwrap_or(self.point_close)
        } else {
            self.point_close
        }
    }
}

impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {:?})", self.name, self.point_close, self.point_open)
    }
}

macro_rules! role {
    ($k: ident, $n: expr, $f: expr, $c: expr, $o: expr, $l: expr, $co: expr) => {
        Role {
            kind: RoleKind::$k,
            name: $n,
            func: $f,
            point_close: $c,
            point_open: $o,
            is_limit: $l,
            is_closed_only: $co,
        }
    };
}

const L: bool = true; // 役満
const C: bool = true; // 門前限定
const N: bool = false;

pub static ROLE_LIST: &[Role] = &[
    role!(BigDragons, "Big Dragons", is_big_dragons, 15, None, L, N),
    role!(BlessingOfHeaven, "Blessing of Heaven", is_blessing_of_heaven, 15, None, L, N),
    role!(BlessingOfEarth, "Blessing of Earth", is_blessing_of_earth, 15, None, L, N),
    role!(AllGreen, "All Green", is_all_green, 15, None, L, N),
    role!(AllTerminals, "All Terminals", is_all_terminals, 15, None, L, N),
    role!(AllHonors, "All Honors", is_all_honors, 15, None, L, N),
    role!(FourWinds, "Four Winds", is_four_winds, 15, None, L, N),
    role!(ThirteenOrphans, "Thirteen Orphans", is_thirteen_orphans, 15, None, L, N),
    role!(FourConcealedTriples, "Four Concealed Triples", is_four_concealed_triples, 15, None, L, N),
    role!(NineGates, "Nine Gates", is_nine_gates, 15, None, L, C),
    role!(FullFlush, "Full Flush", is_full_flush, 6, Some(5), N, N),
    role!(TwoDoubleRuns, "Two Double Runs", is_two_double_runs, 3, None, N, C),
    role!(PureOutsideHand, "Pure Outside Hand", is_pure_outside_hand, 3, Some(2), N, N),
    role!(HalfFlush, "Half Flush", is_half_flush, 3, Some(2), N, N),
    role!(ThreeColorTriples, "Three Color Triples", is_three_color_triples, 2, Some(2), N, N),
    role!(AllTerminalsAndHonors, "All Terminals And Honors", is_all_terminals_and_honors, 2, Some(2), N, N),
    role!(LittleDragons, "Little Dragons", is_little_dragons, 2, Some(2), N, N),
    role!(ThreeConcealedTriples, "Three Concealed Triples", is_three_concealed_triples, 2, None, N, C),
    role!(MixedOutsideHand, "Mixed Outside Hand", is_mixed_outside_hand, 2, Some(1), N, N),
    role!(FullStraight, "Full Straight", is_full_straight, 2, Some(1), N, N),
    role!(SevenPairs, "Seven Pairs", is_seven_pairs, 2, None, N, C),
    role!(ThreeColorRuns, "Three Color Runs", is_three_color_runs, 2, Some(1), N, N),
    role!(AllTriples, "All Triples", is_all_triples, 2, Some(2), N, N),
    role!(DoubleReach, "Double Reach", is_double_reach, 2, None, N, C),
    role!(AddAQuad, "Add A Quad", is_add_a_quad, 1, Some(1), N, N),
    role!(KingsTileDraw, "King's Tile Draw", is_kings_tile_draw, 1, Some(1), N, N),
    role!(FinalTileWin, "Final Tile Win", is_final_tile_win, 1, Some(1), N, N),
    role!(DoubleRun, "Double Run", is_double_run, 1, None, N, C),
    role!(FirstTurnWin, "First Turn Win", is_first_turn_win, 1, None, N, C),
    role!(ConcealedSelfDraw, "Concealed Self Draw", is_concealed_self_draw, 1, None, N, C),
    role!(AllRuns, "All Runs", is_all_runs, 1, None, N, C),
    role!(AllSimples, "All Simples", is_all_simples, 1, Some(1), N, N),
    role!(SeatEast, "East", is_seat_east, 1, Some(1), N, N),
    role!(SeatSouth, "South", is_seat_south, 1, Some(1), N, N),
    role!(SeatWest, "West", is_seat_west, 1, Some(1), N, N),
    role!(SeatNorth, "North", is_seat_north, 1, Some(1), N, N),
    role!(WhiteDragon, "White Dragon", is_white_dragon, 1, Some(1), N, N),
    role!(GreenDragon, "Green Dragon", is_green_dragon, 1, Some(1), N, N),
    role!(RedDragon, "Red Dragon", is_red_dragon, 1, Some(1), N, N),
    role!(FieldEast, "Field East", is_field_east, 1, Some(1), N, N),
    role!(FieldSouth, "Field South", is_field_south, 1, Some(1), N, N),
    role!(FieldWest, "Field West", is_field_west, 1, Some(1), N, N),
    role!(FieldNorth, "Field North", is_field_north, 1, Some(1), N, N),
    role!(Reach, "Reach", is_reach, 1, None, N, C),
];

// 役の優先順位 =================================================================
// * 役満が存在する場合は役満以外の役は削除
// * 以下の役は排他的であり右側を優先
//     一盃口, 二盃口
//     混全帯么九, 純全帯么九
//     混老頭, 清老頭
//     混一色, 清一色
//     三暗刻, 四暗刻
//     立直, 両立直

// 大三元
fn is_big_dragons(rc: &RoleContext<'_>) -> bool {
    [Tile::WHITE, Tile::GREEN, Tile::RED]
        .iter()
        .all(|t| count(&rc.hand, t) >= 3)
}

// 天和
fn is_blessing_of_heaven(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_blessing_of_heaven
}

// 地和
fn is_blessing_of_earth(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_blessing_of_earth
}

// 緑一色
fn is_all_green(rc: &RoleContext<'_>) -> bool {
    rc.hand.iter().all(|t| {
        *t == Tile::GREEN
            || (t.suit() == Suit::Bamboos && matches!(t.rank(), Some(2 | 3 | 4 | 6 | 8)))
    })
}

// 清老頭
fn is_all_terminals(rc: &RoleContext<'_>) -> bool {
    rc.hand.iter().all(|t| t.is_terminal())
}

// 字一色
fn is_all_honors(rc: &RoleContext<'_>) -> bool {
    rc.hand.iter().all(|t| t.is_honor())
}

// 大四喜, 小四喜
fn is_four_winds(rc: &RoleContext<'_>) -> bool {
    let n = rc.triples.iter().filter(|t| t.is_wind()).count();
    let h = rc.head.map_or(0, |t| if t.is_wind() { 1 } else { 0 });
    n + h == 4
}

// 国士無双
fn is_thirteen_orphans(rc: &RoleContext<'_>) -> bool {
    let orphans = Tile::terminals_and_honors();
    if rc.hand.len() != orphans.len() + 1 || !contains_all(&rc.hand, &orphans) {
        return false;
    }
    let rest = subtract(&rc.hand, &orphans);
    rest.len() == 1 && rest[0].is_terminal_or_honor()
}

// 四暗刻
fn is_four_concealed_triples(rc: &RoleContext<'_>) -> bool {
    rc.concealed_triples == 4
}

// 九蓮宝燈
fn is_nine_gates(rc: &RoleContext<'_>) -> bool {
    let suit = match rc.hand.first() {
        Some(t) if t.is_simple() => t.suit(),
        _ => return false,
    };
    if rc.hand.len() != 14 || rc.hand.iter().any(|t| t.suit() != suit) {
        return false;
    }

    let n = |r| rc.hand.iter().filter(|t| t.rank() == Some(r)).count();
    n(1) >= 3 && n(9) >= 3 && (2..9).all(|r| n(r) >= 1)
}

// 清一色
fn is_full_flush(rc: &RoleContext<'_>) -> bool {
    match rc.hand.first() {
        Some(t0) => rc.hand.iter().all(|t| t.is_simple() && t.suit() == t0.suit()),
        None => false,
    }
}

// 二盃口
fn is_two_double_runs(rc: &RoleContext<'_>) -> bool {
    rc.double_runs == 2
}

// 純全帯么九
fn is_pure_outside_hand(rc: &RoleContext<'_>) -> bool {
    if !rc.is_element_hand || rc.runs.is_empty() {
        return false;
    }
    rc.composition
        .sets
        .iter()
        .all(|sp| sp.tiles().iter().any(|t| t.is_terminal()))
}

// 混一色
fn is_half_flush(rc: &RoleContext<'_>) -> bool {
    let suits = unique(
        &rc.hand
            .iter()
            .filter(|t| t.is_simple())
            .map(|t| t.suit())
            .collect::<Vec<Suit>>(),
    );
    suits.len() == 1 && rc.hand.iter().any(|t| t.is_honor())
}

// 三色同刻
fn is_three_color_triples(rc: &RoleContext<'_>) -> bool {
    (1..TNUM).any(|r| {
        SIMPLE_SUITS.iter().all(|&s| match Tile::simple(s, r) {
            Ok(t) => rc.has_triple(t),
            Err(_) => false,
        })
    })
}

// 混老頭
fn is_all_terminals_and_honors(rc: &RoleContext<'_>) -> bool {
    rc.hand.iter().all(|t| t.is_terminal_or_honor())
        && rc.hand.iter().any(|t| t.is_terminal())
        && rc.hand.iter().any(|t| t.is_honor())
}

// 小三元
fn is_little_dragons(rc: &RoleContext<'_>) -> bool {
    let n = rc.triples.iter().filter(|t| t.is_dragon()).count();
    n == 2 && rc.head.map_or(false, |t| t.is_dragon())
}

// 三暗刻
fn is_three_concealed_triples(rc: &RoleContext<'_>) -> bool {
    rc.concealed_triples == 3
}

// 混全帯么九
fn is_mixed_outside_hand(rc: &RoleContext<'_>) -> bool {
    if !rc.is_element_hand || rc.runs.is_empty() {
        return false;
    }
    let sets = &rc.composition.sets;
    sets.iter()
        .all(|sp| sp.tiles().iter().any(|t| t.is_terminal_or_honor()))
        && sets.iter().any(|sp| sp.1.is_honor())
}

// 一気通貫
fn is_full_straight(rc: &RoleContext<'_>) -> bool {
    SIMPLE_SUITS.iter().any(|&s| {
        [1, 4, 7].iter().all(|&r| match Tile::simple(s, r) {
            Ok(t) => rc.has_run(t),
            Err(_) => false,
        })
    })
}

// 七対子
fn is_seven_pairs(rc: &RoleContext<'_>) -> bool {
    if rc.is_element_hand || rc.hand.len() != 14 {
        return false;
    }
    let kinds = unique(&rc.hand);
    kinds.len() == 7 && kinds.iter().all(|t| count(&rc.hand, t) == 2)
}

// 三色同順
fn is_three_color_runs(rc: &RoleContext<'_>) -> bool {
    (1..=7).any(|r| {
        SIMPLE_SUITS.iter().all(|&s| match Tile::simple(s, r) {
            Ok(t) => rc.has_run(t),
            Err(_) => false,
        })
    })
}

// 対々和
fn is_all_triples(rc: &RoleContext<'_>) -> bool {
    rc.is_element_hand && rc.triples.len() == 4
}

// 両立直
fn is_double_reach(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_double_reach
}

// 槍槓
fn is_add_a_quad(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_add_a_quad || rc.ctx.win_method == WinMethod::Quad
}

// 嶺上開花
fn is_kings_tile_draw(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_kings_tile_draw
}

// 海底撈月, 河底撈魚
fn is_final_tile_win(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_final_tile
}

// 一盃口
fn is_double_run(rc: &RoleContext<'_>) -> bool {
    rc.double_runs == 1
}

// 一発
fn is_first_turn_win(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_reach_first_turn
}

// 門前清自摸和
fn is_concealed_self_draw(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_concealed && rc.ctx.is_tsumo()
}

// 平和
fn is_all_runs(rc: &RoleContext<'_>) -> bool {
    let head = match rc.head {
        Some(t) => t,
        None => return false,
    };
    if rc.ctx.value_tiles().contains(&head) || rc.composition.concealed_runs().len() != 4 {
        return false;
    }

    // 上がり牌の両面待ち判定
    let wt = rc.ctx.win_tile;
    let wr = match wt.rank() {
        Some(r) => r,
        None => return false,
    };
    rc.composition.concealed_runs().iter().any(|t| {
        if t.suit() != wt.suit() {
            return false;
        }
        match t.rank() {
            Some(r) if r == wr => r <= 6, // 両面の下側 (789の7は辺張)
            Some(r) if r + 2 == wr => r >= 2, // 両面の上側 (123の3は辺張)
            _ => false,
        }
    })
}

// 断么九
fn is_all_simples(rc: &RoleContext<'_>) -> bool {
    !rc.hand.is_empty() && rc.hand.iter().all(|t| t.is_middle())
}

fn is_seat_wind(rc: &RoleContext<'_>, wind: Tile) -> bool {
    rc.ctx.seat_wind == wind && rc.has_triple(wind)
}

fn is_prevalent_wind(rc: &RoleContext<'_>, wind: Tile) -> bool {
    rc.ctx.prevalent_wind == wind && rc.has_triple(wind)
}

// 自風
fn is_seat_east(rc: &RoleContext<'_>) -> bool {
    is_seat_wind(rc, Tile::EAST)
}

fn is_seat_south(rc: &RoleContext<'_>) -> bool {
    is_seat_wind(rc, Tile::SOUTH)
}

fn is_seat_west(rc: &RoleContext<'_>) -> bool {
    is_seat_wind(rc, Tile::WEST)
}

fn is_seat_north(rc: &RoleContext<'_>) -> bool {
    is_seat_wind(rc, Tile::NORTH)
}

// 白
fn is_white_dragon(rc: &RoleContext<'_>) -> bool {
    rc.has_triple(Tile::WHITE)
}

// 發
fn is_green_dragon(rc: &RoleContext<'_>) -> bool {
    rc.has_triple(Tile::GREEN)
}

// 中
fn is_red_dragon(rc: &RoleContext<'_>) -> bool {
    rc.has_triple(Tile::RED)
}

// 場風
fn is_field_east(rc: &RoleContext<'_>) -> bool {
    is_prevalent_wind(rc, Tile::EAST)
}

fn is_field_south(rc: &RoleContext<'_>) -> bool {
    is_prevalent_wind(rc, Tile::SOUTH)
}

fn is_field_west(rc: &RoleContext<'_>) -> bool {
    is_prevalent_wind(rc, Tile::WEST)
}

fn is_field_north(rc: &RoleContext<'_>) -> bool {
    is_prevalent_wind(rc, Tile::NORTH)
}

// 立直
fn is_reach(rc: &RoleContext<'_>) -> bool {
    rc.ctx.is_reach && !rc.ctx.is_double_reach
}

#[cfg(test)]
fn roles_of(exp: &str, ctx: &HandContext) -> Vec<Vec<RoleKind>> {
    let hand = crate::util::parse::tiles_from_string(exp).unwrap();
    let mut res: Vec<Vec<RoleKind>> = super::decompose::decompose(&hand)
        .iter()
        .map(|d| {
            RoleContext::new(&hand, Some(&d.completed), ctx)
                .calc_roles()
                .iter()
                .map(|r| r.kind)
                .collect()
        })
        .collect();
    res.push(
        RoleContext::new(&hand, None, ctx)
            .calc_roles()
            .iter()
            .map(|r| r.kind)
            .collect(),
    );
    res
}

#[cfg(test)]
fn tile(s: &str) -> Tile {
    Tile::from_symbol(s).unwrap()
}

#[test]
fn test_role_table() {
    assert_eq!(ROLE_LIST.len(), 44);
    for (i, r) in ROLE_LIST.iter().enumerate() {
        assert_eq!(r.kind.role().map(|r| r.name), Some(r.name));
        assert!(ROLE_LIST[i + 1..].iter().all(|r2| r2.kind != r.kind));
        if r.is_limit {
            assert_eq!(r.point_close, 15);
        }
    }
    assert_eq!(RoleKind::FullFlush.role().map(|r| r.points(true)), Some(5));
    assert_eq!(RoleKind::DoubleRun.role().map(|r| r.is_closed_only), Some(true));
}

#[test]
fn test_value_triples() {
    let mut ctx = HandContext::new(tile("m9"), WinMethod::Ron);
    ctx.prevalent_wind = Tile::EAST;
    ctx.seat_wind = Tile::SOUTH;
    let rs = roles_of("m123456789z11122", &ctx);
    assert_eq!(
        rs[0],
        vec![RoleKind::HalfFlush, RoleKind::FullStraight, RoleKind::FieldEast]
    );

    // 連風牌 (東場の東家)
    ctx.seat_wind = Tile::EAST;
    let rs = roles_of("m123456789z11122", &ctx);
    assert!(rs[0].contains(&RoleKind::SeatEast));
    assert!(rs[0].contains(&RoleKind::FieldEast));

    // 雀頭の役牌は役にならない
    let rs = roles_of("m123456789z22555", &ctx);
    assert_eq!(
        rs[0],
        vec![RoleKind::HalfFlush, RoleKind::FullStraight, RoleKind::WhiteDragon]
    );
}

#[test]
fn test_concealed_triples() {
    let hand = "m11199p222s333z555";
    // ロンで完成した刻子は明刻扱い
    let ctx = HandContext::new(Tile::WHITE, WinMethod::Ron);
    let rs = roles_of(hand, &ctx);
    assert_eq!(
        rs[0],
        vec![
            RoleKind::ThreeConcealedTriples,
            RoleKind::AllTriples,
            RoleKind::WhiteDragon
        ]
    );

    // 単騎待ちのロンは四暗刻
    let ctx = HandContext::new(tile("m9"), WinMethod::Ron);
    let rs = roles_of(hand, &ctx);
    assert_eq!(rs[0], vec![RoleKind::FourConcealedTriples]);

    let ctx = HandContext::new(tile("m9"), WinMethod::Tsumo);
    let rs = roles_of(hand, &ctx);
    assert_eq!(rs[0], vec![RoleKind::FourConcealedTriples]);
    // 分解なしの場合は門前自摸のみ
    assert_eq!(rs[1], vec![RoleKind::ConcealedSelfDraw]);
}

#[test]
fn test_all_runs() {
    let mut ctx = HandContext::new(tile("m2"), WinMethod::Ron);
    ctx.is_reach = true;
    let rs = roles_of("m234678p34599s456", &ctx);
    assert_eq!(rs[0], vec![RoleKind::AllRuns, RoleKind::Reach]);

    // 嵌張待ち
    ctx.win_tile = tile("m3");
    let rs = roles_of("m234678p34599s456", &ctx);
    assert_eq!(rs[0], vec![RoleKind::Reach]);

    // 辺張待ち
    ctx.win_tile = tile("m3");
    let rs = roles_of("m123678p34599s456", &ctx);
    assert_eq!(rs[0], vec![RoleKind::Reach]);

    // 役牌の雀頭
    ctx.win_tile = tile("m2");
    let rs = roles_of("m234678p345s456z55", &ctx);
    assert_eq!(rs[0], vec![RoleKind::Reach]);
}

#[test]
fn test_double_runs() {
    let ctx = HandContext::new(tile("p5"), WinMethod::Ron);
    let rs = roles_of("m223344p55s678678", &ctx);
    assert!(rs.iter().any(|r| r.contains(&RoleKind::TwoDoubleRuns)));
    assert!(rs.iter().all(|r| !r.contains(&RoleKind::DoubleRun)));

    let rs = roles_of("m223344p55s678z111", &ctx);
    assert!(rs[0].contains(&RoleKind::DoubleRun));
    assert!(!rs[0].contains(&RoleKind::TwoDoubleRuns));
}

#[test]
fn test_hand_shape_roles() {
    let ctx = HandContext::new(tile("p5"), WinMethod::Ron);

    // 七対子は分解なしの場合のみ
    let rs = roles_of("m1133p2255s6688z11", &ctx);
    assert_eq!(rs.len(), 1);
    assert_eq!(rs[0], vec![RoleKind::SevenPairs]);

    // 断么九
    let rs = roles_of("m234567p234p55s234", &ctx);
    assert!(rs[0].contains(&RoleKind::AllSimples));
    assert!(rs[0].contains(&RoleKind::ThreeColorRuns));

    // 純全帯么九, 混全帯么九
    let ctx = HandContext::new(tile("m9"), WinMethod::Ron);
    let rs = roles_of("m123789p11s123999", &ctx);
    assert!(rs[0].contains(&RoleKind::PureOutsideHand));
    assert!(!rs[0].contains(&RoleKind::MixedOutsideHand));
    let rs = roles_of("m123789p11s123z111", &ctx);
    assert!(rs[0].contains(&RoleKind::MixedOutsideHand));

    // 混老頭 + 対々和
    let rs = roles_of("m111999p111z22255", &ctx);
    assert!(rs[0].contains(&RoleKind::AllTerminalsAndHonors));
    assert!(rs[0].contains(&RoleKind::AllTriples));

    // 三色同刻
    let rs = roles_of("m222p222s22234599", &ctx);
    assert!(rs[0].contains(&RoleKind::ThreeColorTriples));
}

#[test]
fn test_limit_roles() {
    let ctx = HandContext::new(tile("m1"), WinMethod::Tsumo);
    let rs = roles_of("m19p19s19z12345671", &ctx);
    assert_eq!(rs, vec![vec![RoleKind::ThirteenOrphans]]);

    // 2枚目が9でも国士無双
    let ctx = HandContext::new(tile("s9"), WinMethod::Ron);
    let rs = roles_of("m19p19s199z1234567", &ctx);
    assert_eq!(rs.last(), Some(&vec![RoleKind::ThirteenOrphans]));

    let ctx = HandContext::new(tile("m5"), WinMethod::Ron);
    let rs = roles_of("m11123455678999", &ctx);
    assert!(rs.iter().all(|r| r == &vec![RoleKind::NineGates]));

    let ctx = HandContext::new(tile("z7"), WinMethod::Ron);
    let rs = roles_of("m123p11z555666777", &ctx);
    assert_eq!(rs[0], vec![RoleKind::BigDragons]);

    let rs = roles_of("s22334466888z666", &ctx);
    assert!(rs.iter().any(|r| r == &vec![RoleKind::AllGreen]));

    let ctx = HandContext::new(tile("z4"), WinMethod::Ron);
    let rs = roles_of("m123z11122233344", &ctx);
    assert_eq!(rs[0], vec![RoleKind::FourWinds]);
}

#[test]
fn test_open_hand() {
    let mut ctx = HandContext::new(tile("m9"), WinMethod::Tsumo);
    ctx.seat_wind = Tile::SOUTH;
    ctx.is_concealed = false;
    ctx.is_reach = true;
    let hand = crate::util::parse::tiles_from_string("m123456789z11122").unwrap();
    let ds = super::decompose::decompose(&hand);
    let rc = RoleContext::new(&hand, Some(&ds[0].completed), &ctx);
    let (roles, total) = rc.calc_points();
    let kinds: Vec<RoleKind> = roles.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![RoleKind::HalfFlush, RoleKind::FullStraight, RoleKind::FieldEast]
    );
    assert_eq!(total, 2 + 1 + 1);
}
