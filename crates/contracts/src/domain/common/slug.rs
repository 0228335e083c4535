/// Build a URL slug from a display name.
///
/// Lower-cases, folds Vietnamese diacritics to ASCII and joins the remaining
/// alphanumeric words with `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        let ch = fold_vietnamese(ch);
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn fold_vietnamese(ch: char) -> char {
    match ch {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ' | 'ặ'
        | 'ẳ' | 'ẵ' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ' | 'ợ'
        | 'ở' | 'ỡ' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_vietnamese() {
        assert_eq!(slugify("Vịnh Hạ Long"), "vinh-ha-long");
        assert_eq!(slugify("Đà Lạt  mộng mơ!"), "da-lat-mong-mo");
        assert_eq!(slugify("Phở Thìn 13 Lò Đúc"), "pho-thin-13-lo-duc");
    }

    #[test]
    fn test_slugify_trims_separators() {
        assert_eq!(slugify("  --Beach--  "), "beach");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
