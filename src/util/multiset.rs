// 多重集合としてのスライス操作
// 牌や牌から導いた数値キーに対して,要素の重複数まで含めて比較する

pub fn count<T: PartialEq>(v: &[T], e: &T) -> usize {
    v.iter().filter(|&x| x == e).count()
}

// 出現順を保ったまま重複を除いた要素のリスト
pub fn unique<T: PartialEq + Clone>(v: &[T]) -> Vec<T> {
    let mut res: Vec<T> = vec![];
    for e in v {
        if !res.contains(e) {
            res.push(e.clone());
        }
    }
    res
}

// haystackがneedleの要素を重複数も含めてすべて持っているか
pub fn contains_all<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    needle
        .iter()
        .all(|e| count(haystack, e) >= count(needle, e))
}

// needleの各要素についてhaystackから最初に一致する要素を一つずつ取り除いた残り
// 一致する要素がない場合は何もしない
pub fn subtract<T: PartialEq + Clone>(haystack: &[T], needle: &[T]) -> Vec<T> {
    let mut res = haystack.to_vec();
    for e in needle {
        if let Some(i) = res.iter().position(|x| x == e) {
            res.remove(i);
        }
    }
    res
}

#[test]
fn test_contains_all() {
    assert!(contains_all(&[1, 1, 2, 3], &[1, 1]));
    assert!(contains_all(&[1, 1, 2, 3], &[3, 1, 2]));
    assert!(!contains_all(&[1, 2, 3], &[1, 1]));
    assert!(contains_all::<usize>(&[], &[]));
    assert!(!contains_all(&[], &[4]));
}

#[test]
fn test_subtract() {
    assert_eq!(subtract(&[1, 1, 2, 3], &[1, 2]), vec![1, 3]);
    assert_eq!(subtract(&[3, 1, 2, 1], &[1]), vec![3, 2, 1]);
    // 含まれない要素は無視
    assert_eq!(subtract(&[1, 2], &[5, 2]), vec![1]);
}

#[test]
fn test_unique() {
    assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    assert_eq!(count(&[3, 1, 3], &3), 2);
}
