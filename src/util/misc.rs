use std::fmt;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

// コマンドライン引数のオプション値を取得してパース
pub fn next_value<T>(it: &mut std::slice::Iter<'_, String>, opt: &str) -> Res<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it.next().ok_or_else(|| format!("{}: value missing", opt))?;
    let v = n
        .parse()
        .map_err(|e| format!("{}: {} '{}'", opt, e, n))?;
    Ok(v)
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

pub fn read_from_file(file_path: &str) -> Res<String> {
    Ok(std::fs::read_to_string(file_path)?)
}

pub fn write_to_file(file_path: &str, data: &str) -> Res {
    use std::io::Write;
    let path = std::path::Path::new(file_path);
    if let Some(prefix) = path.parent() {
        std::fs::create_dir_all(prefix)?;
    }
    let mut f = std::fs::File::create(path)?;
    write!(f, "{}", data)?;
    Ok(())
}

#[test]
fn test_next_value() {
    let args = vec!["12".to_string(), "x".to_string()];
    let mut it = args.iter();
    let n: usize = next_value(&mut it, "-n").unwrap();
    assert_eq!(n, 12);
    assert!(next_value::<usize>(&mut it, "-n").is_err());
    assert!(next_value::<usize>(&mut it, "-n").is_err());
}

#[test]
fn test_vec_to_string() {
    assert_eq!(vec_to_string(&[1, 2, 3]), "[1, 2, 3]");
    assert_eq!(vec_to_string::<usize>(&[]), "[]");
}
