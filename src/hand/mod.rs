// 向聴数計算, 手牌の分解, 役の判定を行うモジュール
mod decompose;
mod evaluate;
mod generator;
mod point;
mod role;
mod shanten;
mod wait;

pub use self::{
    decompose::decompose,
    evaluate::{
        evaluate_waits, score_decomposition, score_win, HandEvaluator, RoleMatch, ScoreResult,
        WaitScore,
    },
    generator::{generate_all_hands, ReadyHandGenerator},
    point::{limit_points, limit_title},
    role::{Role, RoleContext, RoleKind, ROLE_LIST},
    shanten::{
        group_by_suit, memo_key, seven_pairs_shanten, thirteen_orphans_shanten, MemoError,
        ReadyPoint, ShantenCalculator, ShantenMemo,
    },
    wait::{effective_tile_counts, effective_tiles, winning_tiles},
};
