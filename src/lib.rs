pub mod camel_case;
pub mod cons;
pub mod fibonacci;
pub mod insertion_sort;
pub mod member;
pub mod palindrome;
pub mod reverse_string;
pub mod reverse_words;
pub mod top_k;
