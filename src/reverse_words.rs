/// 文の単語の並びを逆順にする
///
/// 単語は空白区切りで、句読点は単語に付いたまま動く
pub fn reverse_words(s: &str) -> String {
    let words: Vec<&str> = s.split_whitespace().collect();

    let mut reversed = String::with_capacity(s.len());
    for (i, word) in words.iter().rev().enumerate() {
        if i > 0 {
            reversed.push(' ');
        }
        reversed.push_str(word);
    }

    reversed
}

#[cfg(test)]
mod tests {
    use super::reverse_words;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reverse_words() {
        assert_eq!(reverse_words("Hello World!"), "World! Hello");
    }

    #[test]
    fn test_reverse_words_single() {
        assert_eq!(reverse_words("Hello"), "Hello");
    }

    #[test]
    fn test_reverse_words_empty() {
        assert_eq!(reverse_words(""), "");
    }
}
