use crate::model::Point;

// 満貫以上の点数 (子). 符は扱わないので4翻未満は0
fn calc_base_point(doubles: usize) -> Point {
    match doubles {
        0..=3 => 0,
        4..=5 => 8000,   // 満貫
        6..=7 => 12000,  // 跳満
        8..=10 => 16000, // 倍満
        11..=12 => 24000, // 三倍満
        _ => 32000,      // 役満 (数え役満)
    }
}

pub fn limit_title(doubles: usize) -> &'static str {
    match doubles {
        0..=3 => "",
        4..=5 => "Slam",
        6..=7 => "One and a Half Slam",
        8..=10 => "Double Slam",
        11..=12 => "Triple Slam",
        _ => "Grand Slam",
    }
}

// 親の和了は1.5倍
pub fn limit_points(is_leader: bool, doubles: usize) -> Point {
    let base = calc_base_point(doubles);
    if is_leader {
        base * 3 / 2
    } else {
        base
    }
}

#[test]
fn test_limit_points() {
    assert_eq!(limit_points(false, 3), 0);
    assert_eq!(limit_points(false, 5), 8000);
    assert_eq!(limit_points(true, 5), 12000);
    assert_eq!(limit_points(false, 7), 12000);
    assert_eq!(limit_points(true, 10), 24000);
    assert_eq!(limit_points(false, 12), 24000);
    assert_eq!(limit_points(false, 15), 32000);
    assert_eq!(limit_points(true, 15), 48000);

    assert_eq!(limit_title(2), "");
    assert_eq!(limit_title(6), "One and a Half Slam");
    assert_eq!(limit_title(13), "Grand Slam");
}

// cargo test --release print_points_table -- --nocapture
#[test]
fn print_points_table() {
    for doubles in 4..=15 {
        println!(
            "{:2}: {:5}({:5}) {}",
            doubles,
            limit_points(false, doubles),
            limit_points(true, doubles),
            limit_title(doubles)
        );
    }
}
