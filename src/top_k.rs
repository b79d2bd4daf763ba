use std::collections::{HashMap, HashSet};

/// SKUのリストから出現回数の多い順に上位k件を返す
///
/// 回数が同じ場合は先に現れたものを優先する
/// kが種類数より大きい場合は全種類を返す
pub fn top_k<'a>(sku_list: &[&'a str], k: usize) -> Vec<&'a str> {
    let freq = frequencies(sku_list);

    // 初出順の一覧を作ってから回数で安定ソートする
    let mut seen = HashSet::new();
    let mut skus: Vec<&str> = Vec::new();
    for &sku in sku_list {
        if seen.insert(sku) {
            skus.push(sku);
        }
    }
    skus.sort_by(|a, b| freq[b].cmp(&freq[a]));

    skus.truncate(k);
    skus
}

/// SKUごとの出現回数を数える
pub fn frequencies<'a>(list: &[&'a str]) -> HashMap<&'a str, usize> {
    let mut freq = HashMap::new();
    for &item in list {
        *freq.entry(item).or_insert(0) += 1;
    }
    freq
}
