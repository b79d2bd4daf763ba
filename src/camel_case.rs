/// snake_caseまたはkebab-caseの文字列をcamelCaseに変換する
///
/// 先頭の単語はそのまま、以降の単語は先頭のみ大文字にして連結する
pub fn to_camel_case(s: &str) -> String {
    let mut words = s.split(['_', '-']);

    let mut result = match words.next() {
        Some(first) => first.to_string(),
        None => return String::new(),
    };
    for word in words {
        result.push_str(&capitalize(word));
    }

    result
}

// 先頭の文字だけ大文字、残りは小文字にする
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
