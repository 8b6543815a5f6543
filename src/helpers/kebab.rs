//! Kebab-case conversion for tag slugs

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Separator,
}

/// Classify by the lowercase form so that kebab output classifies the same
fn classify(c: char) -> CharClass {
    if !c.is_alphanumeric() {
        return CharClass::Separator;
    }

    let lower = c.to_lowercase().next().unwrap_or(c);
    if lower.is_numeric() {
        CharClass::Digit
    } else if lower != c {
        CharClass::Upper
    } else {
        // Lowercase and caseless letters
        CharClass::Lower
    }
}

/// Split a string into words
///
/// A new word starts after a run of separators, on a lower-to-upper
/// transition (`fooBar`), at the last capital of an acronym followed by a
/// lowercase letter (`XMLHttp`), and on a digit-to-letter transition
/// (`2fa`). Trailing digits stay with the preceding letters (`web3`).
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev = CharClass::Separator;

    for (i, &c) in chars.iter().enumerate() {
        let class = classify(c);
        let boundary = match class {
            CharClass::Separator => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                prev = class;
                continue;
            }
            CharClass::Upper => match prev {
                CharClass::Lower | CharClass::Digit => true,
                CharClass::Upper => chars
                    .get(i + 1)
                    .map(|&next| classify(next) == CharClass::Lower)
                    .unwrap_or(false),
                CharClass::Separator => false,
            },
            CharClass::Lower => prev == CharClass::Digit,
            CharClass::Digit => false,
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = class;
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Convert an arbitrary string to lowercase hyphen-separated tokens
///
/// The transform is pure and idempotent:
/// `to_kebab_case(&to_kebab_case(s)) == to_kebab_case(s)`.
///
/// # Examples
/// ```ignore
/// to_kebab_case("Web Development") // -> "web-development"
/// to_kebab_case("JavaScript")      // -> "java-script"
/// ```
pub fn to_kebab_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| {
            word.to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
