use serde::Serialize;

use super::decompose::decompose;
use super::point::*;
use super::role::*;
use super::shanten::*;
use super::wait::*;
use crate::debug;
use crate::model::*;
use crate::util::multiset::subtract;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleMatch {
    pub kind: RoleKind,
    pub name: &'static str,
    pub points: usize,
}

// 和了形の評価結果. 役がない場合はrolesが空でtotal_pointsが0
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub roles: Vec<RoleMatch>,
    pub total_points: usize,
    pub composition: Option<SetsComposition>, // 採用した面子の組み合わせ (七対子, 国士無双はNone)
}

impl ScoreResult {
    pub fn is_limit(&self) -> bool {
        self.roles
            .iter()
            .any(|r| r.kind.role().map_or(false, |r| r.is_limit))
    }

    pub fn role_names(&self) -> Vec<&'static str> {
        self.roles.iter().map(|r| r.name).collect()
    }
}

// 待ち牌ごとの評価結果
#[derive(Debug, Clone, Serialize)]
pub struct WaitScore {
    pub tile: Tile,
    pub score: ScoreResult,
    pub points: Point,
    pub title: &'static str,
}

// 一つの面子の組み合わせ(Noneの場合は分解なし)に対する役の評価
pub fn score_decomposition(
    hand: &[Tile],
    composition: Option<&SetsComposition>,
    ctx: &HandContext,
) -> ScoreResult {
    let is_open = !ctx.is_concealed;
    let rc = RoleContext::new(hand, composition, ctx);
    let (roles, total) = rc.calc_points();
    ScoreResult {
        roles: roles
            .iter()
            .map(|r| RoleMatch {
                kind: r.kind,
                name: r.name,
                points: r.points(is_open),
            })
            .collect(),
        total_points: total,
        composition: composition.cloned(),
    }
}

// 和了形(14枚)の役を評価して最も翻数の高い解釈を返却
// 和了牌を除いて13枚にならない場合や和了形でない場合は空の結果
pub fn score_win(calc: &ShantenCalculator, hand: &[Tile], ctx: &HandContext) -> ScoreResult {
    if subtract(hand, &[ctx.win_tile]).len() != 13 || calc.calc_shanten(hand) != WIN {
        return ScoreResult::default();
    }

    let mut candidates: Vec<ScoreResult> = decompose(hand)
        .iter()
        .map(|d| score_decomposition(hand, Some(&d.completed), ctx))
        .collect();
    candidates.push(score_decomposition(hand, None, ctx));

    let mut best = ScoreResult::default();
    for (i, c) in candidates.into_iter().enumerate() {
        if i == 0 || c.total_points > best.total_points {
            best = c;
        }
    }
    debug!(
        "win: {} {:?} total={}",
        crate::util::parse::tiles_to_string(hand),
        best.role_names(),
        best.total_points
    );
    best
}

// 聴牌している13枚の手牌の待ち牌ごとの評価 (翻数の昇順)
pub fn evaluate_waits(
    calc: &ShantenCalculator,
    hand: &[Tile],
    ctx: &HandContext,
) -> Vec<WaitScore> {
    let mut res: Vec<WaitScore> = winning_tiles(calc, hand)
        .into_iter()
        .map(|t| {
            let mut h = hand.to_vec();
            h.push(t);
            let ctx = HandContext {
                win_tile: t,
                ..ctx.clone()
            };
            let score = score_win(calc, &h, &ctx);
            WaitScore {
                tile: t,
                points: limit_points(ctx.is_leader, score.total_points),
                title: limit_title(score.total_points),
                score,
            }
        })
        .collect();
    res.sort_by_key(|w| w.score.total_points);
    res
}

// 向聴数計算のメモを保持して手牌評価の各処理をまとめたもの
#[derive(Debug, Default)]
pub struct HandEvaluator {
    calc: ShantenCalculator,
}

impl HandEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memo(memo: ShantenMemo) -> Self {
        Self {
            calc: ShantenCalculator::with_memo(memo),
        }
    }

    pub fn calculator(&self) -> &ShantenCalculator {
        &self.calc
    }

    pub fn import_memo<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (String, ReadyPoint)>,
    {
        self.calc.import_memo(entries)
    }

    pub fn calc_shanten(&self, hand: &[Tile]) -> Shanten {
        self.calc.calc_shanten(hand)
    }

    pub fn is_tenpai(&self, hand: &[Tile]) -> bool {
        self.calc.is_tenpai(hand)
    }

    pub fn winning_tiles(&self, hand: &[Tile]) -> Vec<Tile> {
        winning_tiles(&self.calc, hand)
    }

    pub fn effective_tiles(&self, hand: &[Tile]) -> Vec<Tile> {
        effective_tiles(&self.calc, hand)
    }

    pub fn effective_tile_counts(&self, hand: &[Tile]) -> Vec<(Tile, usize)> {
        effective_tile_counts(&self.calc, hand)
    }

    pub fn decompose(&self, hand: &[Tile]) -> Vec<Decomposition> {
        decompose(hand)
    }

    pub fn score_win(&self, hand: &[Tile], ctx: &HandContext) -> ScoreResult {
        score_win(&self.calc, hand, ctx)
    }

    pub fn evaluate_waits(&self, hand: &[Tile], ctx: &HandContext) -> Vec<WaitScore> {
        evaluate_waits(&self.calc, hand, ctx)
    }
}

#[cfg(test)]
fn hand(exp: &str) -> Vec<Tile> {
    crate::util::parse::tiles_from_string(exp).unwrap()
}

#[cfg(test)]
fn tile(s: &str) -> Tile {
    Tile::from_symbol(s).unwrap()
}

#[cfg(test)]
fn kinds(res: &ScoreResult) -> Vec<RoleKind> {
    res.roles.iter().map(|r| r.kind).collect()
}

#[test]
fn test_score_full_flush() {
    let ev = HandEvaluator::new();
    let h = hand("m12345666777888");
    let ctx = HandContext::new(tile("m8"), WinMethod::Tsumo);
    let res = ev.score_win(&h, &ctx);
    assert_eq!(
        kinds(&res),
        vec![RoleKind::FullFlush, RoleKind::ConcealedSelfDraw]
    );
    assert_eq!(res.total_points, 7);
    assert!(!res.is_limit());

    let rest = subtract(&h, &[tile("m8")]);
    assert!(ev.is_tenpai(&rest));
    assert!(ev.winning_tiles(&rest).contains(&tile("m8")));
}

#[test]
fn test_score_seven_pairs() {
    let ev = HandEvaluator::new();
    let h = hand("m1133p2244s6688z11");
    let res = ev.score_win(&h, &HandContext::new(Tile::EAST, WinMethod::Ron));
    assert_eq!(kinds(&res), vec![RoleKind::SevenPairs]);
    assert_eq!(res.total_points, 2);
    assert_eq!(res.composition, None);

    let res = ev.score_win(&h, &HandContext::new(Tile::EAST, WinMethod::Tsumo));
    assert_eq!(res.total_points, 3);

    assert_eq!(ev.winning_tiles(&subtract(&h, &[Tile::EAST])), vec![Tile::EAST]);
}

#[test]
fn test_score_thirteen_orphans() {
    let ev = HandEvaluator::new();
    let h = hand("m19p19s19z1234567m1");
    let res = ev.score_win(&h, &HandContext::new(tile("m1"), WinMethod::Tsumo));
    assert_eq!(kinds(&res), vec![RoleKind::ThirteenOrphans]);
    assert_eq!(res.total_points, 15);
    assert!(res.is_limit());
    assert!(ev.decompose(&h).is_empty());
}

#[test]
fn test_score_concealed_triples() {
    let ev = HandEvaluator::new();
    let h = hand("m11199p222s333z555");

    let res = ev.score_win(&h, &HandContext::new(tile("m9"), WinMethod::Tsumo));
    assert_eq!(kinds(&res), vec![RoleKind::FourConcealedTriples]);
    assert_eq!(res.total_points, 15);

    let res = ev.score_win(&h, &HandContext::new(Tile::WHITE, WinMethod::Ron));
    assert_eq!(res.total_points, 5);
    assert_eq!(
        res.role_names(),
        vec!["Three Concealed Triples", "All Triples", "White Dragon"]
    );
}

#[test]
fn test_score_all_runs() {
    let ev = HandEvaluator::new();
    let mut ctx = HandContext::new(tile("m2"), WinMethod::Ron);
    ctx.is_reach = true;
    let res = ev.score_win(&hand("m234678p34599s456"), &ctx);
    assert_eq!(kinds(&res), vec![RoleKind::AllRuns, RoleKind::Reach]);
    assert_eq!(res.total_points, 2);
}

#[test]
fn test_score_winds() {
    let ev = HandEvaluator::new();
    let h = hand("m123456789z11122");
    let mut ctx = HandContext::new(tile("m9"), WinMethod::Tsumo);
    ctx.prevalent_wind = Tile::EAST;
    ctx.seat_wind = Tile::SOUTH;
    let res = ev.score_win(&h, &ctx);
    assert_eq!(
        kinds(&res),
        vec![
            RoleKind::HalfFlush,
            RoleKind::FullStraight,
            RoleKind::ConcealedSelfDraw,
            RoleKind::FieldEast
        ]
    );
    assert_eq!(res.total_points, 7);

    ctx.win_method = WinMethod::Ron;
    assert_eq!(ev.score_win(&h, &ctx).total_points, 6);
}

#[test]
fn test_score_invalid() {
    let ev = HandEvaluator::new();
    // 和了牌が含まれていない
    let res = ev.score_win(
        &hand("m12345666777888"),
        &HandContext::new(tile("p1"), WinMethod::Tsumo),
    );
    assert_eq!(res, ScoreResult::default());
    // 和了形でない
    let res = ev.score_win(
        &hand("m12345666777889"),
        &HandContext::new(tile("m9"), WinMethod::Tsumo),
    );
    assert!(res.roles.is_empty());
    // 13枚
    let res = ev.score_win(
        &hand("m1234566677788"),
        &HandContext::new(tile("m8"), WinMethod::Tsumo),
    );
    assert_eq!(res.total_points, 0);
}

#[test]
fn test_score_no_roles() {
    // 役なし (鳴きあり)
    let ev = HandEvaluator::new();
    let mut ctx = HandContext::new(tile("m4"), WinMethod::Ron);
    ctx.is_concealed = false;
    let res = ev.score_win(&hand("m234567p11s345789"), &ctx);
    assert!(res.roles.is_empty());
    assert_eq!(res.total_points, 0);
}

#[test]
fn test_evaluate_waits() {
    let ev = HandEvaluator::new();
    let mut ctx = HandContext::new(Tile::EAST, WinMethod::Tsumo);
    ctx.is_leader = true;
    let ws = ev.evaluate_waits(&hand("m1234566677788"), &ctx);
    let mut tiles: Vec<Tile> = ws.iter().map(|w| w.tile).collect();
    tiles.sort();
    assert_eq!(tiles, hand("m134678"));
    for w in &ws {
        assert!(w.score.total_points >= 7);
        assert!(w.points >= 12000);
    }
    for p in ws.windows(2) {
        assert!(p[0].score.total_points <= p[1].score.total_points);
    }
}
