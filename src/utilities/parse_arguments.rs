use std::fmt;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    UnterminatedQuote,
    UnknownField(String),
    DuplicateField(&'static str),
    EmptyValue(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedQuote => write!(f, "a quoted value is missing its closing quote."),
            Self::UnknownField(field) => write!(
                f,
                "unknown field {field:?}, expected title, theme, style, element1 or element2."
            ),
            Self::DuplicateField(field) => write!(f, "the {field} field was given more than once."),
            Self::EmptyValue(field) => write!(f, "the {field} field needs a value."),
        }
    }
}

/// splits on whitespace, double quotes group words and `\` escapes the next character inside them
pub fn split_arguments(arguments: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = arguments.chars();

    while let Some(char) = chars.next() {
        match char {
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => word.push(chars.next().ok_or(ParseError::UnterminatedQuote)?),
                        Some(char) => word.push(char),
                        None => return Err(ParseError::UnterminatedQuote),
                    }
                }
            }
            char if char.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            char => {
                in_word = true;
                word.push(char);
            }
        }
    }

    if in_word {
        words.push(word);
    }

    Ok(words)
}

/// the fields of the logo form as typed on the command line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormArguments {
    pub title: String,
    pub theme: String,
    pub style_corpus: Vec<String>,
    pub element1: Option<PathBuf>,
    pub element2: Option<PathBuf>,
}

impl FormArguments {
    pub fn parse(arguments: &str) -> Result<Self, ParseError> {
        let mut form = Self::default();
        let mut title = None;
        let mut bare_words = Vec::new();
        let mut theme = None;

        for word in split_arguments(arguments)? {
            let Some(separator) = word.find('=') else {
                bare_words.push(word);
                continue;
            };
            let (key, value) = (&word[..separator], &word[separator + 1..]);

            match key.to_ascii_lowercase().as_str() {
                "title" => set_once(&mut title, "title", value)?,
                "theme" => set_once(&mut theme, "theme", value)?,
                "style" | "style_corpus" => {
                    if value.is_empty() {
                        return Err(ParseError::EmptyValue(key.into()));
                    }
                    form.style_corpus.push(value.into());
                }
                "element1" => set_path(&mut form.element1, "element1", value)?,
                "element2" => set_path(&mut form.element2, "element2", value)?,
                _ => return Err(ParseError::UnknownField(key.into())),
            }
        }

        form.title = match (title, bare_words.is_empty()) {
            (Some(_), false) => return Err(ParseError::DuplicateField("title")),
            (Some(title), true) => title,
            (None, _) => bare_words.join(" "),
        };
        form.theme = theme.unwrap_or_default();

        Ok(form)
    }
}

fn set_once(slot: &mut Option<String>, field: &'static str, value: &str) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::DuplicateField(field));
    }
    *slot = Some(value.into());
    Ok(())
}

fn set_path(slot: &mut Option<PathBuf>, field: &'static str, value: &str) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::DuplicateField(field));
    }
    if value.is_empty() {
        return Err(ParseError::EmptyValue(field.into()));
    }
    *slot = Some(value.into());
    Ok(())
}
