/// フィボナッチ数列の先頭n項を返す
///
/// 数列は0, 1から始まる
pub fn fibonacci(n: usize) -> Vec<u64> {
    let mut seq = Vec::with_capacity(n);
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        seq.push(a);
        let next = a + b;
        a = b;
        b = next;
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::fibonacci;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(10), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn test_fibonacci_zero() {
        assert_eq!(fibonacci(0), Vec::<u64>::new());
    }

    #[test]
    fn test_fibonacci_one() {
        assert_eq!(fibonacci(1), vec![0]);
    }
}
