//! スライスをconsセルのように辿るためのcar/cdr

/// リストの先頭要素を返す
///
/// 空リストの場合はNoneを返す
pub fn car<T>(lst: &[T]) -> Option<&T> {
    lst.first()
}

/// 先頭要素を除いた残りのリストを返す
///
/// 要素が1つだけのリストの「残り」は空リストではなくNoneとする
/// (リストが無いことを表す値と同じ)
/// 空リストに対してもNoneを返す
pub fn cdr<T>(lst: &[T]) -> Option<&[T]> {
    if lst.len() <= 1 {
        None
    } else {
        Some(&lst[1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_car() {
        assert_eq!(car(&[1, 2, 3]), Some(&1));
        assert_eq!(car::<i32>(&[]), None);
    }

    #[test]
    fn test_cdr() {
        assert_eq!(cdr(&[1, 2, 3]), Some(&[2, 3][..]));
        assert_eq!(cdr(&[1]), None);
        assert_eq!(cdr::<i32>(&[]), None);
    }
}
