use crate::error::QueryError;

fn is_op_char(ch: char) -> bool {
    matches!(ch, '>' | '<' | '=' | '!')
}

/// Splits a query into tokens. Quoted literals (single or double quotes) stay
/// one token and keep their surrounding quotes; value coercion strips them later.
pub fn tokenize(input: &str) -> Result<Vec<String>, QueryError> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut just_closed_quote = false;

    let mut it = input.chars().peekable();

    while let Some(ch) = it.next() {
        if let Some(q) = quote {
            match ch {
                '\\' => match it.peek().copied() {
                    Some(c) if c == q || c == '\\' => {
                        it.next();
                        current.push(c);
                    }
                    _ => {
                        return Err(QueryError::parse(format!(
                            "Invalid escape sequence in quotes. Use \\{q} for a quote or \\\\ for a backslash."
                        )));
                    }
                },
                c if c == q => {
                    current.push(c);
                    quote = None;
                    just_closed_quote = true;
                }
                c => current.push(c),
            }
            continue;
        }

        match ch {
            '\'' | '"' => {
                if just_closed_quote {
                    return Err(QueryError::parse(
                        "Unexpected quote after closing quote. Add whitespace between tokens.",
                    ));
                }
                if !current.is_empty() {
                    return Err(QueryError::parse(
                        "Quote cannot start in the middle of a token. Add whitespace before the quote.",
                    ));
                }
                current.push(ch);
                quote = Some(ch);
            }

            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                just_closed_quote = false;
            }

            ',' | '(' | ')' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                just_closed_quote = false;
                tokens.push(ch.to_string());
            }

            c if is_op_char(c) => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                just_closed_quote = false;
                let mut op = String::from(c);
                while let Some(next) = it.peek().copied() {
                    if !is_op_char(next) {
                        break;
                    }
                    op.push(next);
                    it.next();
                }
                tokens.push(op);
            }

            _ => {
                if just_closed_quote {
                    return Err(QueryError::parse(
                        "Characters found immediately after a closing quote. Add whitespace after the quoted string.",
                    ));
                }
                current.push(ch);
            }
        }
    }

    if quote.is_some() {
        return Err(QueryError::parse("Unclosed quote in input"));
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}
