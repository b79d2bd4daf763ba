/// 文字列が回文かどうかを判定する
///
/// 文字単位で前後から突き合わせる
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;
    let mut j = chars.len();
    while i + 1 < j {
        if chars[i] != chars[j - 1] {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}
