use crate::objects::VertexRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(u32),
    /// Digits that do not fit an index.
    Overflow,
    /// Any other non-whitespace character.
    Delimiter,
    EOF,
}

/// Splits the body of a face line (everything after `f `) into vertex triples.
///
/// Each vertex is read as number, delimiter, number, delimiter, number, with
/// whitespace allowed before every item. The first vertex that cannot be read
/// completely ends the line: it and anything after it are dropped.
pub struct Lexer {
    col: usize,

    buffer: Vec<char>,
    buffer_position: usize,
}

impl Lexer {
    pub fn new(line: &str) -> Self {
        return Lexer {
            col: 1,
            buffer: line.chars().collect(),
            buffer_position: 0,
        };
    }

    fn char(&self) -> Option<char> {
        return self.buffer.get(self.buffer_position).copied();
    }

    fn advance(&mut self) {
        if self.char().is_some() {
            self.col += 1;
            self.buffer_position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.char() {
            match c {
                c if c.is_whitespace() => self.advance(),
                _ => break,
            }
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.char() {
            None => Token::EOF,
            Some(c) if c.is_ascii_digit() => self.consume_number(),
            Some(_) => {
                self.advance();
                Token::Delimiter
            }
        }
    }

    fn consume_number(&mut self) -> Token {
        let mut number = String::new();

        while let Some(c) = self.char() {
            match c {
                c if c.is_ascii_digit() => {
                    number.push(c);
                    self.advance();
                }

                _ => {
                    break;
                }
            }
        }

        match number.parse::<u32>() {
            Ok(n) => Token::Number(n),
            Err(_) => Token::Overflow,
        }
    }

    fn expect_number(&mut self) -> Option<u32> {
        match self.next_token() {
            Token::Number(n) => Some(n),
            _ => None,
        }
    }

    fn expect_delimiter(&mut self) -> Option<()> {
        match self.next_token() {
            Token::Delimiter => Some(()),
            _ => None,
        }
    }

    /// Reads the next complete vertex, or `None` once the line is exhausted or malformed.
    pub fn next_vertex(&mut self) -> Option<VertexRef> {
        let position = self.expect_number()?;
        self.expect_delimiter()?;
        let uv = self.expect_number()?;
        self.expect_delimiter()?;
        let normal = self.expect_number()?;

        return Some(VertexRef::new(position, uv, normal));
    }

    /// Column (1-based) the lexer stopped at.
    pub fn column(&self) -> usize {
        return self.col;
    }

    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        return self.char().is_none();
    }
}

impl Iterator for Lexer {
    type Item = VertexRef;

    fn next(&mut self) -> Option<VertexRef> {
        self.next_vertex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(line: &str) -> Vec<VertexRef> {
        Lexer::new(line).collect()
    }

    #[test]
    fn tokens() {
        let mut lexer = Lexer::new(" 12/ 3");

        assert_eq!(lexer.next_token(), Token::Number(12));
        assert_eq!(lexer.next_token(), Token::Delimiter);
        assert_eq!(lexer.next_token(), Token::Number(3));
        assert_eq!(lexer.next_token(), Token::EOF);
    }

    #[test]
    fn reads_slash_triples() {
        assert_eq!(
            vertices("1/2/3 4/5/6 7/8/9"),
            vec![
                VertexRef::new(1, 2, 3),
                VertexRef::new(4, 5, 6),
                VertexRef::new(7, 8, 9),
            ]
        );
    }

    #[test]
    fn any_delimiter_and_spacing() {
        assert_eq!(
            vertices("1 / 2 / 3\t4|5|6"),
            vec![VertexRef::new(1, 2, 3), VertexRef::new(4, 5, 6)]
        );
    }

    #[test]
    fn truncates_at_malformed_vertex() {
        assert_eq!(vertices("1/2/3 4//6 7/8/9"), vec![VertexRef::new(1, 2, 3)]);
        assert_eq!(vertices("1/2/3 4/5"), vec![VertexRef::new(1, 2, 3)]);
    }

    #[test]
    fn forms_without_normals_yield_nothing() {
        assert!(vertices("1/2 3/4 5/6").is_empty());
        assert!(vertices("1 2 3").is_empty());
        assert!(vertices("1//1 2//2 3//3").is_empty());
    }

    #[test]
    fn negative_and_oversized_indices_stop_the_line() {
        assert!(vertices("-1/-1/-1").is_empty());
        assert_eq!(
            vertices("1/1/1 99999999999/1/1"),
            vec![VertexRef::new(1, 1, 1)]
        );
    }

    #[test]
    fn stops_with_trailing_garbage_left() {
        let mut lexer = Lexer::new("1/2/3 x");

        assert_eq!(lexer.next_vertex(), Some(VertexRef::new(1, 2, 3)));
        assert!(!lexer.is_exhausted());
        assert_eq!(lexer.next_vertex(), None);
        assert!(lexer.column() > 1);
    }
}
