//! 要素がリストに含まれるかを判定するメンバ述語
//!
//! 同じ述語を再帰・ループ・畳み込みの3通りで実装する
//! 引数のOption<&[T]>はリスト自体が無い場合(None)を
//! 空リスト(Some(&[]))と区別して表す

use crate::cons::{car, cdr};

/// 再帰でリストを辿り、xが含まれるならtrueを返す
///
/// リストが無い場合も空リストの場合もfalse
/// 比較回数は最大でリスト長に等しい
pub fn member_p<T: PartialEq>(x: &T, lst: Option<&[T]>) -> bool {
    match lst {
        None => false,
        Some(lst) => match car(lst) {
            None => false,
            Some(head) if head == x => true,
            Some(_) => member_p(x, cdr(lst)),
        },
    }
}

/// ループで先頭から順に走査し、最初に一致した時点でtrueを返す
pub fn member_p_loop<T: PartialEq>(x: &T, lst: Option<&[T]>) -> bool {
    match lst {
        None => false,
        Some(lst) => {
            for y in lst {
                if y == x {
                    return true;
                }
            }
            false
        }
    }
}

/// 左畳み込みで判定する
///
/// 種をfalseとして acc || (要素 == x) を全要素に適用する
/// 一致しても走査は打ち切らない
/// こちらはスライスを直接受け取るので、Option側を持つ呼び出し元が
/// 先にNoneを潰してから渡すこと
pub fn member_p_fold<T: PartialEq>(x: &T, lst: &[T]) -> bool {
    lst.iter().fold(false, |acc, y| acc || y == x)
}
