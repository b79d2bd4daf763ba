// 挿入ソート
// Θ(n^2)

/// スライスを昇順にその場でソートする
pub fn insertion_sort<T: PartialOrd>(list: &mut [T]) {
    for j in 1..list.len() {
        let mut i = j;
        while i > 0 && list[i] < list[i - 1] {
            list.swap(i, i - 1);
            i -= 1;
        }
    }
}
