#[doc = "First character upper-cased, the rest lower-cased (`\"jAZZ\"` → `\"Jazz\"`)"]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[doc = "Lower-case ascii alphanumerics joined by `_`, usable as a file name stem"]
pub fn slugify(text: &str) -> String {
    let slug: String = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<String>>()
        .join("_");

    if slug.is_empty() {
        "term".to_string()
    } else {
        slug
    }
}

#[doc = "1234567 → \"1,234,567\""]
pub fn format_number(value: u64) -> String {
    let s: String = value.to_string();
    let mut result: String = String::new();
    let mut count: i32 = 0;

    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}
