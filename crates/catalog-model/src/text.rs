/// Title-cases `s`: the first letter of every run of letters is upper-cased,
/// the rest lower-cased. Non-letters pass through and end a run.
///
/// ```
/// use catalog_model::title_case;
///
/// assert_eq!(title_case("ingeniería CIVIL"), "Ingeniería Civil");
/// assert_eq!(title_case("o'neil"), "O'Neil");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn normalizes_modality_input() {
        assert_eq!(title_case("presencial"), "Presencial");
        assert_eq!(title_case("VIRTUAL"), "Virtual");
        assert_eq!(title_case("mIxTa"), "Mixta");
    }

    #[test]
    fn digits_break_words() {
        assert_eq!(title_case("2do ciclo"), "2Do Ciclo");
        assert_eq!(title_case(""), "");
    }
}
