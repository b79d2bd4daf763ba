/// 文字列を逆順にする
///
/// 文字を一旦スタックに積み、上から取り出して組み立て直す
pub fn reverse_string(s: &str) -> String {
    let mut stack: Vec<char> = s.chars().collect();

    let mut reversed = String::with_capacity(s.len());
    while let Some(c) = stack.pop() {
        reversed.push(c);
    }

    reversed
}
